use thiserror::Error;

/// Errors reported by the numeric core.
///
/// Degenerate rate computations (a class with zero members) are *not*
/// errors: they resolve to a documented 0.0 default inside
/// [`crate::confusion::ConfusionCounts`], because interactive inputs
/// routinely produce empty categories. Only requests that have no
/// defined answer at all surface here.
#[derive(Debug, Error, PartialEq)]
pub enum RocError {
    /// Bad arguments: mismatched lengths, labels outside {0, 1},
    /// non-finite scores, or a sweep over a single-class dataset.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// AUC requested on a curve with fewer than two points.
    #[error("insufficient data: {0}")]
    InsufficientData(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RocError>;
