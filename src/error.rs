use thiserror::Error;

use crate::reorder::ReorderError;

/// Errors surfaced by dashboard operations.
///
/// Validation and lookup failures leave the dataset untouched. Persistence
/// problems are reported by the store layer but treated as warnings by the
/// dashboard itself.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Rejected input: blank or duplicate name, bad date, bad progress.
    #[error("{0}")]
    Validation(String),

    #[error("project not found")]
    UnknownProject,

    #[error("system not found")]
    UnknownSystem,

    #[error("milestone not found")]
    UnknownMilestone,

    /// A reorder index was outside the list.
    #[error(transparent)]
    Reorder(#[from] ReorderError),

    /// The backing store could not be read or written.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Incoming JSON did not match the dataset wire format.
    #[error("invalid dataset: {0}")]
    Import(String),
}

/// Convenience alias.
pub type DashboardResult<T> = std::result::Result<T, DashboardError>;

impl DashboardError {
    /// Shorthand for a validation failure with a formatted message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
