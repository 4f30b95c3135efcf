//! Error types for filters and the history stack.

use thiserror::Error;

/// Error type for buffer construction and filter passes.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Storage for a buffer snapshot could not be reserved.
    #[error("failed to allocate {bytes} bytes for image snapshot")]
    Allocation {
        /// Size of the rejected reservation.
        bytes: usize,
    },

    /// Width, height or channel count do not describe a valid RGB image.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Raw data could not be shaped into an image array.
    #[error(transparent)]
    Shape(#[from] ndarray::ShapeError),
}

/// Result type for filter operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Error type for [`History`](crate::History) operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HistoryError {
    /// No room could be reserved for another snapshot.
    #[error("failed to allocate history entry")]
    Allocation,
}

/// Result type for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;
