use std::collections::HashSet;

use tracing::debug;

use crate::algorithms::{GroupFactory, GroupingStrategy};
use crate::models::{Group, GroupingConfig, MeetingPoint, Person};
use crate::utils::distance::distance_km;
use crate::utils::requirements::{unmet_requirements, RoleTally};
use crate::utils::seed::SeedSelector;

/// Greedy seed-and-grow clustering by geographic proximity.
///
/// A seed person is picked, then the nearest remaining people within
/// `distance_threshold_km` of the seed are admitted until the group reaches
/// `max_group_size`. People beyond the threshold are never admitted, even if
/// the group would otherwise stay below its minimum size.
pub struct ProximityClusterer<'a> {
    config: &'a GroupingConfig,
    seeds: &'a mut dyn SeedSelector,
}

impl<'a> ProximityClusterer<'a> {
    pub fn new(config: &'a GroupingConfig, seeds: &'a mut dyn SeedSelector) -> Self {
        Self { config, seeds }
    }

    /// Candidate members for a seed: the seed first, then its neighbours
    /// nearest first. Equal distances keep pool order.
    fn grow_from(&self, seed: usize, pool: &[usize], people: &[Person]) -> Vec<usize> {
        let origin = &people[seed].location;
        let threshold = self.config.distance_threshold_km;

        let mut neighbours: Vec<(usize, f64)> = pool
            .iter()
            .copied()
            .filter(|&i| i != seed)
            .map(|i| (i, distance_km(origin, &people[i].location)))
            .filter(|(_, distance)| *distance <= threshold)
            .collect();
        neighbours.sort_by(|a, b| a.1.total_cmp(&b.1));

        std::iter::once(seed)
            .chain(
                neighbours
                    .into_iter()
                    .take(self.config.max_group_size.saturating_sub(1))
                    .map(|(i, _)| i),
            )
            .collect()
    }
}

impl GroupingStrategy for ProximityClusterer<'_> {
    fn form_groups(
        &mut self,
        people: &[Person],
        _meeting_points: &[MeetingPoint],
        pool: &mut Vec<usize>,
        factory: &mut GroupFactory,
    ) -> Vec<Group> {
        let mut groups = Vec::new();
        // Seeds that failed since the pool last changed
        let mut tried: HashSet<usize> = HashSet::new();

        while pool.len() >= self.config.min_group_size {
            let candidates: Vec<usize> = pool
                .iter()
                .copied()
                .filter(|i| !tried.contains(i))
                .collect();
            if candidates.is_empty() {
                break;
            }

            let pick = self
                .seeds
                .select(&candidates, people)
                .min(candidates.len() - 1);
            let seed = candidates[pick];
            let members = self.grow_from(seed, pool, people);
            let tally = RoleTally::from_people(members.iter().map(|&i| &people[i]));

            if !tally.meets(self.config) {
                debug!(
                    seed = people[seed].id,
                    size = members.len(),
                    shortfalls = ?unmet_requirements(&tally, self.config),
                    "Rejected proximity candidate"
                );
                tried.insert(seed);
                continue;
            }

            let taken: HashSet<usize> = members.iter().copied().collect();
            pool.retain(|i| !taken.contains(i));
            tried.clear();

            let group = factory.create(members.iter().map(|&i| people[i].id).collect(), None);
            debug!(
                group = group.id,
                seed = people[seed].id,
                size = group.size(),
                "Formed proximity group"
            );
            groups.push(group);
        }

        groups
    }
}
