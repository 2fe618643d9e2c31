use std::collections::HashSet;

use rayon::prelude::*;
use tracing::debug;

use crate::algorithms::proximity::ProximityClusterer;
use crate::algorithms::{GroupFactory, GroupingStrategy};
use crate::models::{Group, GroupingConfig, MeetingPoint, Person};
use crate::utils::requirements::RoleTally;
use crate::utils::seed::SeedSelector;
use crate::utils::travel_cost::{cost_or_unreachable, Minutes, TravelCostEstimator};

/// Window size multiplier applied to the largest role minimum
const WINDOW_FACTOR: f64 = 1.5;

/// Groups anchored at meeting points, ranked by estimated travel cost.
///
/// Meeting points are served in input order, so an earlier meeting point
/// gets first pick of the people closest to it. Whoever is left once every
/// meeting point has been served is clustered by proximity into unanchored
/// groups, which follow the anchored ones in the output.
pub struct MeetingAnchoredAssigner<'a> {
    config: &'a GroupingConfig,
    estimator: &'a dyn TravelCostEstimator,
    leftovers: ProximityClusterer<'a>,
}

impl<'a> MeetingAnchoredAssigner<'a> {
    pub fn new(
        config: &'a GroupingConfig,
        estimator: &'a dyn TravelCostEstimator,
        seeds: &'a mut dyn SeedSelector,
    ) -> Self {
        Self {
            config,
            estimator,
            leftovers: ProximityClusterer::new(config, seeds),
        }
    }

    /// Travel cost from every pool member to each meeting point, indexed
    /// `[meeting point][person index]`. People outside the pool and failed
    /// estimates are `INFINITY`.
    fn cost_matrix(
        &self,
        people: &[Person],
        meeting_points: &[MeetingPoint],
        pool: &[usize],
    ) -> Vec<Vec<Minutes>> {
        let estimator = self.estimator;
        meeting_points
            .par_iter()
            .map(|meeting_point| {
                let mut row = vec![f64::INFINITY; people.len()];
                for &i in pool {
                    row[i] = cost_or_unreachable(estimator.estimate(&people[i], meeting_point));
                }
                row
            })
            .collect()
    }

    /// Size of the first window tried for a meeting point
    fn initial_window(&self) -> usize {
        let by_roles = (self.config.largest_role_minimum() as f64 * WINDOW_FACTOR).ceil() as usize;
        self.config.min_group_size.max(by_roles)
    }

    /// Length of the smallest valid prefix of `ranked`, if any.
    ///
    /// Starts from the initial window, grows one person at a time until the
    /// requirements hold, then drops people from the far end while they
    /// still hold.
    fn select_window(&self, ranked: &[usize], people: &[Person]) -> Option<usize> {
        let cap = ranked.len().min(self.config.max_group_size);
        if cap < self.config.min_group_size {
            return None;
        }

        let mut len = self.initial_window().min(cap);
        let mut tally = RoleTally::from_people(ranked[..len].iter().map(|&i| &people[i]));

        while !tally.meets(self.config) && len < cap {
            tally.add(&people[ranked[len]]);
            len += 1;
        }
        if !tally.meets(self.config) {
            return None;
        }

        while len > 1 {
            let last = &people[ranked[len - 1]];
            tally.remove(last);
            if tally.meets(self.config) {
                len -= 1;
            } else {
                tally.add(last);
                break;
            }
        }

        Some(len)
    }
}

impl GroupingStrategy for MeetingAnchoredAssigner<'_> {
    fn form_groups(
        &mut self,
        people: &[Person],
        meeting_points: &[MeetingPoint],
        pool: &mut Vec<usize>,
        factory: &mut GroupFactory,
    ) -> Vec<Group> {
        let mut groups = Vec::new();
        let costs = self.cost_matrix(people, meeting_points, pool);

        for (meeting_point, row) in meeting_points.iter().zip(&costs) {
            if meeting_point.group.is_some() {
                debug!(meeting_point = meeting_point.id, "Skipping assigned meeting point");
                continue;
            }

            // Stable sort keeps pool order among equal costs
            let mut ranked = pool.clone();
            ranked.sort_by(|&a, &b| row[a].total_cmp(&row[b]));

            let Some(len) = self.select_window(&ranked, people) else {
                debug!(
                    meeting_point = meeting_point.id,
                    pool = pool.len(),
                    "No valid group for meeting point"
                );
                continue;
            };

            let members = &ranked[..len];
            let taken: HashSet<usize> = members.iter().copied().collect();
            pool.retain(|i| !taken.contains(i));

            let group = factory.create(
                members.iter().map(|&i| people[i].id).collect(),
                Some(meeting_point.id),
            );
            debug!(
                group = group.id,
                meeting_point = meeting_point.id,
                size = group.size(),
                farthest_minutes = row[members[len - 1]],
                "Formed anchored group"
            );
            groups.push(group);
        }

        groups.extend(
            self.leftovers
                .form_groups(people, meeting_points, pool, factory),
        );
        groups
    }
}
