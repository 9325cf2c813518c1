//! Discrete first derivatives of sampled profiles.
//!
//! [`gradient`] differentiates samples taken on a possibly non-uniform
//! coordinate. Interior points use the second-order centered scheme for
//! unequal spacing, and the two boundary points use first-order one-sided
//! differences.
//!
//! Repeated coordinates are not rejected. They produce non-finite entries,
//! which callers may zero with [`sanitize_non_finite`] before searching for
//! an extremum with [`argmax_first`].
//!
//! ```
//! use abl_models::support::gradient::{argmax_first, gradient, sanitize_non_finite};
//!
//! let z = [0.0, 1.0, 1.0, 2.0, 3.0, 4.0];
//! let theta = [0.0, 0.0, 0.0, 5.0, 6.0, 7.0];
//!
//! let mut d_theta = gradient(&theta, &z).unwrap();
//! assert_eq!(sanitize_non_finite(&mut d_theta), 2);
//! assert_eq!(argmax_first(&d_theta), Some(3));
//! ```

use num_traits::Float;
use thiserror::Error;

/// Errors returned by [`gradient`] for malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GradientError {
    /// The value and coordinate sequences differ in length.
    #[error("length mismatch: {values} values but {coords} coordinates")]
    LengthMismatch {
        /// Number of values supplied.
        values: usize,

        /// Number of coordinates supplied.
        coords: usize,
    },

    /// No samples were supplied.
    #[error("no samples to differentiate")]
    Empty,
}

/// Computes the derivative of `values` with respect to `coords`.
///
/// For an interior point with spacings `h1 = x[i] - x[i-1]` and
/// `h2 = x[i+1] - x[i]`, the derivative is
///
/// ```text
/// f'(x[i]) = -h2 / (h1 (h1 + h2)) f[i-1]
///          + (h2 - h1) / (h1 h2)  f[i]
///          + h1 / (h2 (h1 + h2))  f[i+1]
/// ```
///
/// which reduces to the familiar `(f[i+1] - f[i-1]) / 2h` on a uniform grid.
/// A single sample has a zero derivative.
///
/// # Errors
///
/// Returns a [`GradientError`] if the sequences differ in length or are empty.
pub fn gradient<T: Float>(values: &[T], coords: &[T]) -> Result<Vec<T>, GradientError> {
    if values.len() != coords.len() {
        return Err(GradientError::LengthMismatch {
            values: values.len(),
            coords: coords.len(),
        });
    }

    let n = values.len();
    match n {
        0 => return Err(GradientError::Empty),
        1 => return Ok(vec![T::zero()]),
        _ => {}
    }

    let mut out = Vec::with_capacity(n);

    out.push((values[1] - values[0]) / (coords[1] - coords[0]));

    for i in 1..n - 1 {
        let h1 = coords[i] - coords[i - 1];
        let h2 = coords[i + 1] - coords[i];

        let a = -h2 / (h1 * (h1 + h2));
        let b = (h2 - h1) / (h1 * h2);
        let c = h1 / (h2 * (h1 + h2));

        out.push(a * values[i - 1] + b * values[i] + c * values[i + 1]);
    }

    out.push((values[n - 1] - values[n - 2]) / (coords[n - 1] - coords[n - 2]));

    Ok(out)
}

/// Replaces every non-finite entry (`NaN` or `±∞`) with zero.
///
/// Returns the number of entries replaced.
pub fn sanitize_non_finite<T: Float>(samples: &mut [T]) -> usize {
    let mut replaced = 0;
    for sample in samples.iter_mut().filter(|s| !s.is_finite()) {
        *sample = T::zero();
        replaced += 1;
    }
    replaced
}

/// Returns the index of the largest sample.
///
/// Ties resolve to the lowest index. A `NaN` entry never wins over a number.
/// Returns `None` for an empty slice.
pub fn argmax_first<T: Float>(samples: &[T]) -> Option<usize> {
    if samples.is_empty() {
        return None;
    }

    let mut best = 0;
    for (i, &sample) in samples.iter().enumerate().skip(1) {
        if sample > samples[best] || (samples[best].is_nan() && !sample.is_nan()) {
            best = i;
        }
    }
    Some(best)
}
