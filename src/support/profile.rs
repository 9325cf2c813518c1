//! Vertical profiles of a single quantity.
//!
//! A [`Profile`] pairs a height grid with one sampled quantity, ordered from
//! the surface to the top of the domain. Construction enforces the invariants
//! every consumer relies on, so downstream code never re-checks them:
//!
//! - heights and values have the same length,
//! - there are at least two samples,
//! - heights are finite and strictly increasing.
//!
//! ```
//! use abl_models::support::profile::Profile;
//! use uom::si::{
//!     f64::{Length, ThermodynamicTemperature},
//!     length::meter,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let heights = [0.0, 100.0, 200.0].map(Length::new::<meter>).to_vec();
//! let theta = [265.0, 265.0, 266.5].map(ThermodynamicTemperature::new::<kelvin>).to_vec();
//!
//! let profile = Profile::new(heights, theta).unwrap();
//! assert_eq!(profile.len(), 3);
//! assert_eq!(profile.top(), Length::new::<meter>(200.0));
//! ```

use thiserror::Error;
use uom::si::{f64::Length, length::meter};

use crate::support::units::SiValue;

/// Errors that can occur while constructing a [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ProfileError {
    /// Heights and values differ in length.
    #[error("length mismatch: {heights} heights but {values} values")]
    LengthMismatch {
        /// Number of heights supplied.
        heights: usize,

        /// Number of values supplied.
        values: usize,
    },

    /// Fewer than two samples were supplied.
    #[error("profile needs at least 2 samples, got {len}")]
    TooShort {
        /// Number of samples supplied.
        len: usize,
    },

    /// A height is `NaN` or infinite.
    #[error("height at index {index} is not finite")]
    NonFiniteHeight {
        /// Index of the offending height.
        index: usize,
    },

    /// A height does not exceed the one below it.
    #[error("heights must be strictly increasing, violated at index {index}")]
    NotIncreasing {
        /// Index of the first height that fails to exceed its predecessor.
        index: usize,
    },
}

/// An ordered, validated vertical profile of one quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile<Q> {
    heights: Vec<Length>,
    values: Vec<Q>,
}

impl<Q> Profile<Q> {
    /// Creates a profile from heights (surface first) and matching values.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if the lengths differ, fewer than two
    /// samples are given, or the heights are not finite and strictly increasing.
    pub fn new(heights: Vec<Length>, values: Vec<Q>) -> Result<Self, ProfileError> {
        if heights.len() != values.len() {
            return Err(ProfileError::LengthMismatch {
                heights: heights.len(),
                values: values.len(),
            });
        }

        if heights.len() < 2 {
            return Err(ProfileError::TooShort { len: heights.len() });
        }

        if let Some(index) = heights.iter().position(|z| !z.get::<meter>().is_finite()) {
            return Err(ProfileError::NonFiniteHeight { index });
        }

        if let Some(index) = heights.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(ProfileError::NotIncreasing { index: index + 1 });
        }

        Ok(Self { heights, values })
    }

    /// Heights, ordered from the surface upward.
    pub fn heights(&self) -> &[Length] {
        &self.heights
    }

    /// Values, one per height.
    pub fn values(&self) -> &[Q] {
        &self.values
    }

    /// Number of samples (always at least two).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Lowest height in the profile.
    pub fn surface(&self) -> Length {
        self.heights[0]
    }

    /// Highest height in the profile.
    pub fn top(&self) -> Length {
        self.heights[self.heights.len() - 1]
    }

    /// Iterates over `(height, value)` pairs from the surface upward.
    pub fn iter(&self) -> impl Iterator<Item = (Length, &Q)> {
        self.heights.iter().copied().zip(&self.values)
    }

    /// Consumes the profile and returns its heights and values.
    pub fn into_parts(self) -> (Vec<Length>, Vec<Q>) {
        (self.heights, self.values)
    }
}

impl<Q: SiValue> Profile<Q> {
    /// Heights in meters.
    pub fn heights_si(&self) -> Vec<f64> {
        self.heights.iter().map(|z| z.get::<meter>()).collect()
    }

    /// Values in SI base units.
    pub fn values_si(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.si()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::{ThermodynamicTemperature, Velocity},
        length::kilometer,
        thermodynamic_temperature::{degree_celsius, kelvin},
        velocity::meter_per_second,
    };

    fn heights(z: &[f64]) -> Vec<Length> {
        z.iter().copied().map(Length::new::<meter>).collect()
    }

    fn speeds(u: &[f64]) -> Vec<Velocity> {
        u.iter()
            .copied()
            .map(Velocity::new::<meter_per_second>)
            .collect()
    }

    #[test]
    fn accessors() {
        let profile = Profile::new(heights(&[5.0, 50.0, 500.0]), speeds(&[2.0, 6.0, 9.0])).unwrap();

        assert_eq!(profile.len(), 3);
        assert_eq!(profile.surface(), Length::new::<meter>(5.0));
        assert_eq!(profile.top(), Length::new::<meter>(500.0));

        let pairs: Vec<_> = profile
            .iter()
            .map(|(z, u)| (z.get::<meter>(), u.get::<meter_per_second>()))
            .collect();
        assert_eq!(pairs, vec![(5.0, 2.0), (50.0, 6.0), (500.0, 9.0)]);

        let (z, u) = profile.into_parts();
        assert_eq!(z.len(), 3);
        assert_eq!(u.len(), 3);
    }

    #[test]
    fn si_views() {
        let z = vec![Length::new::<meter>(0.0), Length::new::<kilometer>(0.5)];
        let theta = vec![
            ThermodynamicTemperature::new::<kelvin>(265.0),
            ThermodynamicTemperature::new::<degree_celsius>(-7.0),
        ];
        let profile = Profile::new(z, theta).unwrap();

        assert_eq!(profile.heights_si(), vec![0.0, 500.0]);

        let theta = profile.values_si();
        assert_relative_eq!(theta[0], 265.0);
        assert_relative_eq!(theta[1], 266.15, epsilon = 1e-12);
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let err = Profile::new(heights(&[0.0, 1.0, 2.0]), speeds(&[1.0, 2.0])).unwrap_err();
        assert_eq!(
            err,
            ProfileError::LengthMismatch {
                heights: 3,
                values: 2
            }
        );
    }

    #[test]
    fn rejects_short_profiles() {
        assert_eq!(
            Profile::new(heights(&[1.0]), speeds(&[1.0])).unwrap_err(),
            ProfileError::TooShort { len: 1 }
        );
        assert_eq!(
            Profile::<Velocity>::new(vec![], vec![]).unwrap_err(),
            ProfileError::TooShort { len: 0 }
        );
    }

    #[test]
    fn rejects_non_finite_heights() {
        let err = Profile::new(heights(&[0.0, f64::NAN, 2.0]), speeds(&[0.0; 3])).unwrap_err();
        assert_eq!(err, ProfileError::NonFiniteHeight { index: 1 });
    }

    #[test]
    fn rejects_repeated_or_descending_heights() {
        let err = Profile::new(heights(&[0.0, 10.0, 10.0]), speeds(&[0.0; 3])).unwrap_err();
        assert_eq!(err, ProfileError::NotIncreasing { index: 2 });

        let err = Profile::new(heights(&[30.0, 20.0, 40.0]), speeds(&[0.0; 3])).unwrap_err();
        assert_eq!(err, ProfileError::NotIncreasing { index: 1 });
    }
}
