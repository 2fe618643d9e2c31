//! Auto-grouping engine for people and meeting points.
//!
//! People carry a home location and role flags. The engine partitions them
//! into groups that respect size bounds and per-role minimums, either by
//! pure geographic proximity or anchored at meeting points ranked by
//! estimated travel cost.
//!
//! ```rust
//! use group_planner::{auto_group, GroupingConfig, Location, Person, Role, Strategy};
//!
//! let mut people = vec![
//!     Person::with_roles(1, "Anna", Location::new(52.370, 4.890), &[Role::Elder]),
//!     Person::new(2, "Ben", Location::new(52.371, 4.891)),
//!     Person::new(3, "Cleo", Location::new(52.372, 4.892)),
//! ];
//! let mut config = GroupingConfig::with_sizes(2, 5);
//! config.min_elders = 1;
//!
//! let outcome = auto_group(&mut people, &mut [], &config, Strategy::ProximityOnly, true).unwrap();
//! assert_eq!(outcome.groups.len(), 1);
//! assert!(people.iter().all(|p| p.group == Some(outcome.groups[0].id)));
//! ```

// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::orchestrator::{
    auto_group, AutoGrouper, GroupingOutcome, GroupingStatus, Strategy,
};
pub use error::{GroupingError, Result};
pub use models::{Group, GroupingConfig, Location, MeetingPoint, Person, Role};
pub use utils::requirements::meets_requirements;
