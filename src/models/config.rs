// Grouping configuration supplied by the caller

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GroupingError, Result};
use crate::models::{Kilometers, Role};

/// Parameters controlling an auto-grouping run.
///
/// Field names follow the camelCase keys of the browser tool's settings so
/// an exported settings object can be read directly. Missing keys fall back
/// to [`GroupingConfig::default`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupingConfig {
    /// Clustering radius around a seed person
    pub distance_threshold_km: Kilometers,

    /// Inclusive lower bound on group size
    pub min_group_size: usize,

    /// Inclusive upper bound on group size
    pub max_group_size: usize,

    /// Largest tolerated spread between group sizes. Reported, not enforced.
    pub max_group_size_difference: usize,

    pub min_elders: u32,
    pub min_servants: u32,
    pub min_pioneers: u32,
    pub min_leaders: u32,
    pub min_helpers: u32,
    pub min_publishers: u32,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            distance_threshold_km: 2.0,
            min_group_size: 3,
            max_group_size: 12,
            max_group_size_difference: 2,
            min_elders: 0,
            min_servants: 0,
            min_pioneers: 0,
            min_leaders: 1,
            min_helpers: 1,
            min_publishers: 0,
        }
    }
}

impl GroupingConfig {
    /// A config with the given size bounds and no role minimums
    pub fn with_sizes(min_group_size: usize, max_group_size: usize) -> Self {
        Self {
            min_group_size,
            max_group_size,
            min_leaders: 0,
            min_helpers: 0,
            ..Self::default()
        }
    }

    /// Configured minimum for a role; roles without a setting require none
    pub fn minimum_for(&self, role: Role) -> u32 {
        match role {
            Role::Elder => self.min_elders,
            Role::Servant => self.min_servants,
            Role::Pioneer => self.min_pioneers,
            Role::Leader => self.min_leaders,
            Role::Helper => self.min_helpers,
            Role::Publisher => self.min_publishers,
            Role::Child | Role::Spouse | Role::FamilyHead => 0,
        }
    }

    /// Sets the minimum for a role with a configurable requirement
    pub fn set_minimum(&mut self, role: Role, minimum: u32) {
        match role {
            Role::Elder => self.min_elders = minimum,
            Role::Servant => self.min_servants = minimum,
            Role::Pioneer => self.min_pioneers = minimum,
            Role::Leader => self.min_leaders = minimum,
            Role::Helper => self.min_helpers = minimum,
            Role::Publisher => self.min_publishers = minimum,
            Role::Child | Role::Spouse | Role::FamilyHead => {}
        }
    }

    /// Largest of the per-role minimums
    pub fn largest_role_minimum(&self) -> u32 {
        Role::REQUIRED
            .iter()
            .map(|role| self.minimum_for(*role))
            .max()
            .unwrap_or(0)
    }

    /// Checks the configuration invariants
    pub fn validate(&self) -> Result<()> {
        if self.min_group_size == 0 {
            return Err(GroupingError::InvalidConfiguration(
                "minGroupSize must be at least 1".to_string(),
            ));
        }
        if self.min_group_size > self.max_group_size {
            return Err(GroupingError::InvalidConfiguration(format!(
                "minGroupSize ({}) exceeds maxGroupSize ({})",
                self.min_group_size, self.max_group_size
            )));
        }
        if !self.distance_threshold_km.is_finite() || self.distance_threshold_km < 0.0 {
            return Err(GroupingError::InvalidConfiguration(format!(
                "distanceThresholdKm must be a non-negative number, got {}",
                self.distance_threshold_km
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GroupingConfig = serde_json::from_str(json)
            .map_err(|e| GroupingError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            GroupingError::InvalidConfiguration(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json_str(&contents)
    }
}
