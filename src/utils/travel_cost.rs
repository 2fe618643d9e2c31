// Travel cost estimation between people and meeting points

use std::collections::HashMap;

use clap::ValueEnum;

use crate::models::{MeetingPoint, MeetingPointId, Person, PersonId};

/// Estimated travel cost in minutes
pub type Minutes = f64;

/// Maps a (person, meeting point) pair to a comparable cost.
///
/// Estimators are synchronous and must not do I/O. A routing service that
/// answers asynchronously should be queried up front and its answers passed
/// in through a [`CostTable`]. Returning `None` or a non-finite value marks
/// the pair as unreachable; it is ranked after every finite cost.
pub trait TravelCostEstimator: Sync {
    fn estimate(&self, person: &Person, meeting_point: &MeetingPoint) -> Option<Minutes>;
}

impl<F> TravelCostEstimator for F
where
    F: Fn(&Person, &MeetingPoint) -> Option<Minutes> + Sync,
{
    fn estimate(&self, person: &Person, meeting_point: &MeetingPoint) -> Option<Minutes> {
        self(person, meeting_point)
    }
}

/// Normalizes an estimate so failed pairs sort last
pub fn cost_or_unreachable(estimate: Option<Minutes>) -> Minutes {
    match estimate {
        Some(cost) if cost.is_finite() => cost,
        _ => f64::INFINITY,
    }
}

/// Preset speed model, also accepted as a command-line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TravelMode {
    Driving,
    Walking,
    Cycling,
}

/// Straight-line distance turned into a duration with an average speed.
///
/// minutes = distance * detour_factor / speed * 60 + overhead
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedModel {
    pub speed_kmh: f64,
    /// Ratio between road distance and straight-line distance
    pub detour_factor: f64,
    /// Fixed cost added to every trip (parking, waiting)
    pub overhead_minutes: Minutes,
}

impl SpeedModel {
    pub fn new(speed_kmh: f64, detour_factor: f64, overhead_minutes: Minutes) -> Self {
        Self {
            speed_kmh,
            detour_factor,
            overhead_minutes,
        }
    }

    /// Average urban driving
    pub fn driving() -> Self {
        Self::new(30.0, 1.3, 3.0)
    }

    pub fn walking() -> Self {
        Self::new(5.0, 1.2, 0.0)
    }

    pub fn cycling() -> Self {
        Self::new(15.0, 1.25, 0.0)
    }

    pub fn for_mode(mode: TravelMode) -> Self {
        match mode {
            TravelMode::Driving => Self::driving(),
            TravelMode::Walking => Self::walking(),
            TravelMode::Cycling => Self::cycling(),
        }
    }

    pub fn minutes_for_km(&self, distance_km: f64) -> Option<Minutes> {
        if self.speed_kmh <= 0.0 {
            return None;
        }
        Some(distance_km * self.detour_factor / self.speed_kmh * 60.0 + self.overhead_minutes)
    }
}

impl Default for SpeedModel {
    fn default() -> Self {
        Self::driving()
    }
}

impl TravelCostEstimator for SpeedModel {
    fn estimate(&self, person: &Person, meeting_point: &MeetingPoint) -> Option<Minutes> {
        self.minutes_for_km(person.location.distance_to(&meeting_point.location))
    }
}

/// Precomputed costs, typically resolved from a routing service
#[derive(Debug, Clone, Default)]
pub struct CostTable {
    costs: HashMap<(PersonId, MeetingPointId), Minutes>,
    /// Used for pairs missing from the table
    fallback: Option<SpeedModel>,
}

impl CostTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with_fallback(fallback: SpeedModel) -> Self {
        Self {
            costs: HashMap::new(),
            fallback: Some(fallback),
        }
    }

    pub fn insert(&mut self, person: PersonId, meeting_point: MeetingPointId, cost: Minutes) {
        self.costs.insert((person, meeting_point), cost);
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl FromIterator<((PersonId, MeetingPointId), Minutes)> for CostTable {
    fn from_iter<T: IntoIterator<Item = ((PersonId, MeetingPointId), Minutes)>>(iter: T) -> Self {
        Self {
            costs: iter.into_iter().collect(),
            fallback: None,
        }
    }
}

impl TravelCostEstimator for CostTable {
    fn estimate(&self, person: &Person, meeting_point: &MeetingPoint) -> Option<Minutes> {
        match self.costs.get(&(person.id, meeting_point.id)) {
            Some(cost) => Some(*cost),
            None => self
                .fallback
                .as_ref()
                .and_then(|model| model.estimate(person, meeting_point)),
        }
    }
}
