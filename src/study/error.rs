use thiserror::Error;

use crate::{models::atmosphere::boundary_layer::EstimateError, support::profile::ProfileError};

use super::{Approach, Case};

/// Errors that can occur while defining a [`Case`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum CaseError {
    /// The lapse rate is zero, negative, or not finite.
    #[error("lapse rate must be positive and finite, got {value} K/m")]
    LapseRate {
        /// Offending lapse rate in K/m.
        value: f64,
    },
}

/// Errors that can occur while running a study.
///
/// Every variant names the case and approach being processed.
#[derive(Debug, Error)]
pub enum StudyError {
    /// The profile source could not provide a column.
    #[error("profile source failed for {case} ({approach})")]
    Source {
        /// Case being processed.
        case: String,

        /// Approach whose column was requested.
        approach: Approach,

        /// Underlying source error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The column's temperature profile violates the profile invariants.
    #[error("invalid {approach} temperature profile for {case}")]
    Profile {
        /// Case being processed.
        case: String,

        /// Approach whose column was invalid.
        approach: Approach,

        /// Underlying profile error.
        #[source]
        source: ProfileError,
    },

    /// The boundary-layer height could not be estimated.
    #[error("boundary-layer height estimate failed for {case} ({approach})")]
    Estimate {
        /// Case being processed.
        case: String,

        /// Approach whose profile was being evaluated.
        approach: Approach,

        /// Underlying estimator error.
        #[source]
        source: EstimateError,
    },
}

impl StudyError {
    /// Creates a source failure error for a case and approach.
    pub(super) fn source_failed(
        case: &Case,
        approach: Approach,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Source {
            case: case.name().to_owned(),
            approach,
            source: Box::new(err),
        }
    }
}
