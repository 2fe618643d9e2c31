// Location model representing geographic coordinates

use geo::{HaversineDistance, Point};
use serde::{Deserialize, Serialize};

use crate::models::Kilometers;

/// Represents a location as latitude/longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    #[serde(alias = "lng")]
    pub lon: f64,
}

impl Location {
    /// Creates a new location with the given coordinates
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Great-circle distance to another location in kilometers
    pub fn distance_to(&self, other: &Location) -> Kilometers {
        self.to_point().haversine_distance(&other.to_point()) / 1000.0
    }

    /// Whether both coordinates are finite and inside the valid degree ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// geo uses (x, y) = (lon, lat)
    pub fn to_point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}
