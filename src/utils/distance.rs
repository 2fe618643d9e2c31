// Distance calculation utilities

use crate::models::{Kilometers, Location};

/// Great-circle (haversine) distance between two points in kilometers
pub fn distance_km(p1: &Location, p2: &Location) -> Kilometers {
    p1.distance_to(p2)
}
