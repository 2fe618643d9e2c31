pub mod color;
pub mod distance;
pub mod requirements;
pub mod seed;
pub mod travel_cost;
