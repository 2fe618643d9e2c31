// Models module - exports all model types

mod config;
mod group;
mod location;
mod meeting_point;
mod person;

// Re-export model types
pub use self::config::GroupingConfig;
pub use self::group::{Group, GroupSummary};
pub use self::location::Location;
pub use self::meeting_point::MeetingPoint;
pub use self::person::{Person, Role, Roles};

// Common type aliases for improved code readability
pub type PersonId = u32;
pub type MeetingPointId = u32;
pub type GroupId = u32;
pub type FamilyId = u32;
pub type Kilometers = f64;
