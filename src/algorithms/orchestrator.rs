use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::algorithms::anchored::MeetingAnchoredAssigner;
use crate::algorithms::proximity::ProximityClusterer;
use crate::algorithms::{GroupFactory, GroupingStrategy};
use crate::error::{GroupingError, Result};
use crate::models::{Group, GroupId, GroupingConfig, MeetingPoint, Person, PersonId};
use crate::utils::color::ColorPalette;
use crate::utils::seed::{FirstRemaining, SeedSelector};
use crate::utils::travel_cost::{SpeedModel, TravelCostEstimator};

/// Which grouping algorithm to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// Proximity clustering only, no meeting points
    ProximityOnly,
    /// Groups anchored at meeting points, leftovers clustered by proximity
    MeetingAnchored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupingStatus {
    /// At least one group was formed
    Grouped,
    /// The run completed but the requirements admitted no group at all
    NoValidGroupsFormed,
}

/// Result of an auto-grouping run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupingOutcome {
    /// Groups formed by this run, anchored groups first
    pub groups: Vec<Group>,
    /// People that took part in the run but ended up in no group
    pub unassigned: Vec<PersonId>,
    /// People that kept an earlier assignment and did not take part
    pub retained: Vec<PersonId>,
    pub status: GroupingStatus,
}

impl GroupingOutcome {
    /// Difference between the largest and smallest group formed
    pub fn size_spread(&self) -> usize {
        let sizes = self.groups.iter().map(Group::size);
        match (sizes.clone().max(), sizes.min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }

    pub fn group_of(&self, person_id: PersonId) -> Option<&Group> {
        self.groups.iter().find(|g| g.contains(person_id))
    }

    pub fn anchored_groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter().filter(|g| g.is_anchored())
    }
}

/// Entry point of the grouping engine.
///
/// Holds the configuration together with the pluggable parts of a run: how
/// proximity clusters pick their seed, how travel cost to a meeting point is
/// estimated, and where group colours come from.
pub struct AutoGrouper {
    config: GroupingConfig,
    seed_selector: Box<dyn SeedSelector>,
    estimator: Box<dyn TravelCostEstimator>,
    palette: ColorPalette,
}

impl AutoGrouper {
    /// Creates a grouper with deterministic seeds and the driving estimator
    pub fn new(config: GroupingConfig) -> Self {
        Self {
            config,
            seed_selector: Box::new(FirstRemaining),
            estimator: Box::new(SpeedModel::driving()),
            palette: ColorPalette::default(),
        }
    }

    pub fn with_seed_selector<S: SeedSelector + 'static>(mut self, seed_selector: S) -> Self {
        self.seed_selector = Box::new(seed_selector);
        self
    }

    pub fn with_estimator<E: TravelCostEstimator + 'static>(mut self, estimator: E) -> Self {
        self.estimator = Box::new(estimator);
        self
    }

    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Partitions `people` into groups and writes each member's `group`.
    ///
    /// With `reset_existing` every person and meeting point loses its current
    /// group first. Without it, people that already belong to a group keep
    /// it and sit the run out, meeting points that already anchor a group are
    /// skipped, and new group ids continue after the highest one in use.
    ///
    /// Configuration, coordinates and pool size are checked before anything
    /// is written; on error the inputs are left as they were.
    pub fn auto_group(
        &mut self,
        people: &mut [Person],
        meeting_points: &mut [MeetingPoint],
        strategy: Strategy,
        reset_existing: bool,
    ) -> Result<GroupingOutcome> {
        self.config.validate()?;
        validate_locations(people, meeting_points)?;

        let eligible = people
            .iter()
            .filter(|p| reset_existing || !p.is_assigned())
            .count();
        if eligible < self.config.min_group_size {
            return Err(GroupingError::InsufficientPeople {
                available: eligible,
                required: self.config.min_group_size,
            });
        }

        if reset_existing {
            people.iter_mut().for_each(|p| p.group = None);
            meeting_points.iter_mut().for_each(|m| m.group = None);
        }

        let mut pool: Vec<usize> = (0..people.len())
            .filter(|&i| !people[i].is_assigned())
            .collect();
        let retained: Vec<PersonId> = people
            .iter()
            .filter(|p| p.is_assigned())
            .map(|p| p.id)
            .collect();

        info!(
            ?strategy,
            people = pool.len(),
            retained = retained.len(),
            meeting_points = meeting_points.len(),
            "Starting auto-grouping"
        );

        let mut factory = GroupFactory::new(
            next_group_id(people, meeting_points),
            self.palette.clone(),
        );
        let groups = match strategy {
            Strategy::ProximityOnly => {
                ProximityClusterer::new(&self.config, &mut *self.seed_selector)
                    .form_groups(people, meeting_points, &mut pool, &mut factory)
            }
            Strategy::MeetingAnchored => MeetingAnchoredAssigner::new(
                &self.config,
                &*self.estimator,
                &mut *self.seed_selector,
            )
            .form_groups(people, meeting_points, &mut pool, &mut factory),
        };

        apply_assignments(&groups, people, meeting_points);

        let outcome = GroupingOutcome {
            status: if groups.is_empty() {
                GroupingStatus::NoValidGroupsFormed
            } else {
                GroupingStatus::Grouped
            },
            unassigned: pool.iter().map(|&i| people[i].id).collect(),
            retained,
            groups,
        };

        let spread = outcome.size_spread();
        if spread > self.config.max_group_size_difference {
            warn!(
                spread,
                allowed = self.config.max_group_size_difference,
                "Group sizes are uneven"
            );
        }
        info!(
            groups = outcome.groups.len(),
            unassigned = outcome.unassigned.len(),
            status = ?outcome.status,
            "Auto-grouping finished"
        );

        Ok(outcome)
    }
}

/// One-shot grouping with deterministic seeds and the driving estimator
pub fn auto_group(
    people: &mut [Person],
    meeting_points: &mut [MeetingPoint],
    config: &GroupingConfig,
    strategy: Strategy,
    reset_existing: bool,
) -> Result<GroupingOutcome> {
    AutoGrouper::new(config.clone()).auto_group(people, meeting_points, strategy, reset_existing)
}

fn validate_locations(people: &[Person], meeting_points: &[MeetingPoint]) -> Result<()> {
    if let Some(person) = people.iter().find(|p| !p.location.is_valid()) {
        return Err(GroupingError::InvalidConfiguration(format!(
            "person {} has invalid coordinates ({}, {})",
            person.id, person.location.lat, person.location.lon
        )));
    }
    if let Some(meeting_point) = meeting_points.iter().find(|m| !m.location.is_valid()) {
        return Err(GroupingError::InvalidConfiguration(format!(
            "meeting point {} has invalid coordinates ({}, {})",
            meeting_point.id, meeting_point.location.lat, meeting_point.location.lon
        )));
    }
    Ok(())
}

/// First id after every group id still referenced by the inputs
fn next_group_id(people: &[Person], meeting_points: &[MeetingPoint]) -> GroupId {
    people
        .iter()
        .filter_map(|p| p.group)
        .chain(meeting_points.iter().filter_map(|m| m.group))
        .max()
        .map_or(1, |id| id + 1)
}

fn apply_assignments(groups: &[Group], people: &mut [Person], meeting_points: &mut [MeetingPoint]) {
    let index: HashMap<PersonId, usize> = people
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id, i))
        .collect();

    for group in groups {
        for member in &group.members {
            if let Some(&i) = index.get(member) {
                people[i].group = Some(group.id);
            }
        }
        if let Some(anchor) = group.meeting_point {
            if let Some(meeting_point) = meeting_points.iter_mut().find(|m| m.id == anchor) {
                meeting_point.group = Some(group.id);
            }
        }
    }
}
