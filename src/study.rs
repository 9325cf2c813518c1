//! Case-by-case comparison of reduced-model and LES boundary layers.
//!
//! A study walks a fixed list of [`Case`]s in order. For each case it asks a
//! [`ProfileSource`] for the column statistics of the reduced model
//! ([`Approach::Rans`]) and of the Deardorff-closure reference simulation
//! ([`Approach::Les`]), estimates both boundary-layer heights, and returns
//! them as [`CaseHeights`] for whatever renders the comparison figures.
//!
//! Some cases also have reference runs with other subgrid models. Those
//! columns are fetched with [`Study::reference_columns`] and are only
//! overlaid, never used for the height estimate.
//!
//! Parsing result files is left to [`ProfileSource`] implementations, and
//! the first failure aborts the study.

mod column;
mod config;
mod error;

#[cfg(test)]
mod test_support;

pub use column::ColumnStatistics;
pub use config::{Case, StudyConfig};
pub use error::{CaseError, StudyError};

use std::fmt;

use tracing::{debug, info};
use twine_core::Model;
use uom::si::{f64::Length, length::meter};

use crate::models::atmosphere::boundary_layer::BoundaryLayerHeight;

/// A reference large-eddy simulation, identified by its subgrid model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LesReference {
    /// Deardorff TKE closure, available for every case.
    Deardorff,

    /// Vreman eddy-viscosity model.
    Vreman,

    /// NCAR LES code.
    Ncar,
}

impl fmt::Display for LesReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LesReference::Deardorff => f.write_str("Deardorff"),
            LesReference::Vreman => f.write_str("Vreman"),
            LesReference::Ncar => f.write_str("NCAR"),
        }
    }
}

/// The modeling approach that produced a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Approach {
    /// Reference large-eddy simulation.
    Les(LesReference),

    /// Reduced Reynolds-averaged model.
    Rans,
}

impl Approach {
    /// The reference run boundary-layer heights are compared against.
    pub const HEIGHT_REFERENCE: Approach = Approach::Les(LesReference::Deardorff);
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Approach::Les(reference) => write!(f, "LES ({reference})"),
            Approach::Rans => f.write_str("RANS"),
        }
    }
}

/// Supplies column statistics for each case and approach.
pub trait ProfileSource {
    /// Error returned when a column cannot be provided.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the column statistics of `case` produced by `approach`.
    ///
    /// # Errors
    ///
    /// Returns `Self::Error` if the column is unavailable or malformed.
    fn column(&self, case: &Case, approach: Approach) -> Result<ColumnStatistics, Self::Error>;
}

/// Boundary-layer heights of one case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseHeights {
    /// Name of the case.
    pub case: String,

    /// Height estimated from the Deardorff reference simulation.
    pub les: Length,

    /// Height estimated from the reduced model.
    pub rans: Length,
}

impl CaseHeights {
    /// Returns the reduced-model height minus the reference height.
    pub fn rans_minus_les(&self) -> Length {
        self.rans - self.les
    }
}

/// Runs the boundary-layer comparison over a configured list of cases.
#[derive(Debug, Clone)]
pub struct Study {
    config: StudyConfig,
    model: BoundaryLayerHeight,
}

impl Study {
    /// Creates a study for the given configuration.
    pub fn new(config: StudyConfig) -> Self {
        Self {
            config,
            model: BoundaryLayerHeight::new(),
        }
    }

    /// Returns the study configuration.
    pub fn config(&self) -> &StudyConfig {
        &self.config
    }

    /// Estimates the LES and RANS boundary-layer heights of every case.
    ///
    /// The LES height always comes from [`Approach::HEIGHT_REFERENCE`].
    /// Results are returned in case order.
    ///
    /// # Errors
    ///
    /// Returns a [`StudyError`] for the first case whose column cannot be
    /// fetched, whose temperature profile is invalid, or whose height cannot
    /// be estimated.
    pub fn run<S: ProfileSource>(&self, source: &S) -> Result<Vec<CaseHeights>, StudyError> {
        info!(
            cases = self.config.cases.len(),
            "running boundary-layer comparison"
        );

        let mut heights = Vec::with_capacity(self.config.cases.len());

        for case in &self.config.cases {
            let rans = self.height(source, case, Approach::Rans)?;
            let les = self.height(source, case, Approach::HEIGHT_REFERENCE)?;

            debug!(
                case = case.name(),
                les_m = les.get::<meter>(),
                rans_m = rans.get::<meter>(),
                "estimated boundary-layer heights"
            );

            heights.push(CaseHeights {
                case: case.name().to_owned(),
                les,
                rans,
            });
        }

        info!(cases = heights.len(), "boundary-layer comparison complete");

        Ok(heights)
    }

    /// Fetches the column of every LES reference listed for `case`.
    ///
    /// Columns are returned in the order of [`Case::les_references`].
    ///
    /// # Errors
    ///
    /// Returns [`StudyError::Source`] for the first reference the source
    /// cannot provide.
    pub fn reference_columns<S: ProfileSource>(
        &self,
        source: &S,
        case: &Case,
    ) -> Result<Vec<(LesReference, ColumnStatistics)>, StudyError> {
        case.les_references()
            .iter()
            .map(|&reference| {
                let approach = Approach::Les(reference);
                let column = source
                    .column(case, approach)
                    .map_err(|err| StudyError::source_failed(case, approach, err))?;

                debug!(
                    case = case.name(),
                    reference = %reference,
                    levels = column.heights.len(),
                    "fetched reference column"
                );

                Ok((reference, column))
            })
            .collect()
    }

    fn height<S: ProfileSource>(
        &self,
        source: &S,
        case: &Case,
        approach: Approach,
    ) -> Result<Length, StudyError> {
        let column = source
            .column(case, approach)
            .map_err(|err| StudyError::source_failed(case, approach, err))?;

        let theta = column.temperature().map_err(|source| StudyError::Profile {
            case: case.name().to_owned(),
            approach,
            source,
        })?;

        self.model
            .call(&theta)
            .map_err(|source| StudyError::Estimate {
                case: case.name().to_owned(),
                approach,
                source,
            })
    }
}

impl Default for Study {
    fn default() -> Self {
        Self::new(StudyConfig::default())
    }
}
