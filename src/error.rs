//! Error types for the grouping engine.

use thiserror::Error;

/// Errors that stop a grouping run before any clustering happens
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupingError {
    #[error("Not enough people to form a group: {available} available, {required} required")]
    InsufficientPeople { available: usize, required: usize },

    #[error("Invalid grouping configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, GroupingError>;
