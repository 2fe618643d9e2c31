// Group model representing a committed set of people

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{GroupId, Kilometers, Location, MeetingPointId, Person, PersonId, Role};
use crate::utils::requirements::RoleTally;

/// A group produced by the grouping engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    /// Cosmetic marker colour
    pub color: String,
    /// Member ids in admission order
    pub members: Vec<PersonId>,
    /// Meeting point the group was anchored to, if any
    pub meeting_point: Option<MeetingPointId>,
}

/// Aggregate figures about a group's members
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub member_count: usize,
    pub role_counts: Vec<(Role, usize)>,
    pub centroid: Option<Location>,
    /// Distance from the centroid to the farthest member
    pub spread_km: Kilometers,
}

impl Group {
    pub fn new<S: Into<String>>(id: GroupId, name: S, color: S) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            members: Vec::new(),
            meeting_point: None,
        }
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_anchored(&self) -> bool {
        self.meeting_point.is_some()
    }

    pub fn contains(&self, person_id: PersonId) -> bool {
        self.members.contains(&person_id)
    }

    /// Computes role counts and geographic spread of the members.
    /// Member ids missing from `people` are ignored.
    pub fn summarize(&self, people: &[Person]) -> GroupSummary {
        let by_id: HashMap<PersonId, &Person> = people.iter().map(|p| (p.id, p)).collect();
        let members: Vec<&Person> = self
            .members
            .iter()
            .filter_map(|id| by_id.get(id).copied())
            .collect();

        let tally = RoleTally::from_people(members.iter().copied());
        let role_counts = Role::ALL
            .iter()
            .map(|role| (*role, tally.count(*role)))
            .filter(|(_, count)| *count > 0)
            .collect();

        let centroid = if members.is_empty() {
            None
        } else {
            let n = members.len() as f64;
            let lat = members.iter().map(|p| p.location.lat).sum::<f64>() / n;
            let lon = members.iter().map(|p| p.location.lon).sum::<f64>() / n;
            Some(Location::new(lat, lon))
        };

        let spread_km = centroid
            .map(|c| {
                members
                    .iter()
                    .map(|p| c.distance_to(&p.location))
                    .fold(0.0, f64::max)
            })
            .unwrap_or(0.0);

        GroupSummary {
            member_count: members.len(),
            role_counts,
            centroid,
            spread_km,
        }
    }
}
