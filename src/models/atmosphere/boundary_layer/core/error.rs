use thiserror::Error;

use crate::support::gradient::GradientError;

/// Errors that can occur while estimating a boundary-layer height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// The values and heights cannot be differentiated.
    ///
    /// Raised when the sequences differ in length or are empty. This points
    /// at a defect in whatever assembled the profile, so it is never retried.
    #[error("invalid input")]
    InvalidInput(#[from] GradientError),
}
