use crate::support::units::{SiValue, TemperatureGradient};

use super::{CaseError, LesReference};

/// Lapse rates (K/m) of the conventionally neutral reference cases.
const NEUTRAL_LAPSE_RATES: [f64; 3] = [0.001, 0.003, 0.009];

/// Reference runs of the intercomparison case (Γ = 0.003 K/m).
const INTERCOMPARISON_REFERENCES: [LesReference; 3] = [
    LesReference::Deardorff,
    LesReference::Vreman,
    LesReference::Ncar,
];

/// A simulation case shared by the reference and reduced-model runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    name: String,
    lapse_rate: TemperatureGradient,
    les_references: Vec<LesReference>,
}

impl Case {
    /// Creates a case with a free-atmosphere lapse rate.
    ///
    /// The case starts with a single Deardorff reference run.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::LapseRate`] if the lapse rate is not strictly
    /// positive and finite.
    pub fn new(
        name: impl Into<String>,
        lapse_rate: TemperatureGradient,
    ) -> Result<Self, CaseError> {
        let gamma = lapse_rate.si();
        if !(gamma.is_finite() && gamma > 0.0) {
            return Err(CaseError::LapseRate { value: gamma });
        }

        Ok(Self {
            name: name.into(),
            lapse_rate,
            les_references: vec![LesReference::Deardorff],
        })
    }

    /// Replaces the list of LES reference runs available for this case.
    ///
    /// Duplicates are dropped. The Deardorff run is always fetched for the
    /// height estimate, whether or not it is listed.
    #[must_use]
    pub fn with_les_references(
        mut self,
        references: impl IntoIterator<Item = LesReference>,
    ) -> Self {
        self.les_references.clear();
        for reference in references {
            if !self.les_references.contains(&reference) {
                self.les_references.push(reference);
            }
        }
        self
    }

    /// A conventionally neutral case named after its lapse rate in K/m.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::LapseRate`] if the lapse rate is not strictly
    /// positive and finite.
    pub fn neutral(lapse_rate: TemperatureGradient) -> Result<Self, CaseError> {
        Self::new(neutral_name(lapse_rate.si()), lapse_rate)
    }

    /// Case name, used to label results and errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Potential-temperature lapse rate of the free atmosphere.
    pub fn lapse_rate(&self) -> TemperatureGradient {
        self.lapse_rate
    }

    /// LES reference runs available for this case, in overlay order.
    pub fn les_references(&self) -> &[LesReference] {
        &self.les_references
    }
}

fn neutral_name(gamma: f64) -> String {
    format!("cnbl_gamma{gamma:.3}")
}

/// Configuration for a boundary-layer comparison study.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
    /// Cases to compare, processed in order.
    pub cases: Vec<Case>,
}

impl Default for StudyConfig {
    /// The three conventionally neutral cases. The middle one is the
    /// intercomparison case with all three reference runs.
    fn default() -> Self {
        let mut cases: Vec<_> = NEUTRAL_LAPSE_RATES
            .iter()
            .map(|&gamma| Case {
                name: neutral_name(gamma),
                lapse_rate: TemperatureGradient::from_si(gamma),
                les_references: vec![LesReference::Deardorff],
            })
            .collect();

        cases[1].les_references = INTERCOMPARISON_REFERENCES.to_vec();

        Self { cases }
    }
}
