//! Maximum-gradient boundary-layer height estimation.
//!
//! The estimate differentiates the profile with
//! [`gradient`](crate::support::gradient::gradient), zeroes non-finite
//! samples, and takes the lowest height holding the largest derivative.

mod error;

#[cfg(test)]
mod test_support;

pub use error::EstimateError;

use tracing::{debug, warn};

use crate::support::gradient::{GradientError, argmax_first, gradient, sanitize_non_finite};

/// Returns the index of the height with the largest vertical derivative.
///
/// `heights` must be non-decreasing. Repeated heights are tolerated: the
/// non-finite derivatives they produce are replaced with zero and reported
/// as a `warn` event. Ties resolve to the lowest index. A single sample
/// yields index 0.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidInput`] if the sequences differ in length
/// or are empty.
pub fn max_gradient_index(values: &[f64], heights: &[f64]) -> Result<usize, EstimateError> {
    let mut derivative = gradient(values, heights)?;

    let replaced = sanitize_non_finite(&mut derivative);
    if replaced > 0 {
        warn!(
            replaced,
            samples = derivative.len(),
            "replaced non-finite gradient samples with zero"
        );
    }

    let index = argmax_first(&derivative).ok_or(GradientError::Empty)?;

    debug!(
        index,
        height = heights[index],
        derivative = derivative[index],
        "located maximum gradient"
    );

    Ok(index)
}

/// Returns the height with the largest vertical derivative.
///
/// The result is always an element of `heights`.
/// See [`max_gradient_index`] for the handling of repeated heights and ties.
///
/// # Errors
///
/// Returns [`EstimateError::InvalidInput`] if the sequences differ in length
/// or are empty.
///
/// # Example
///
/// ```
/// use abl_models::models::atmosphere::boundary_layer::max_gradient_height;
///
/// let z = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
/// let theta = [0.0, 0.0, 0.0, 4.0, 5.0, 5.0];
///
/// assert_eq!(max_gradient_height(&theta, &z).unwrap(), 3.0);
/// ```
pub fn max_gradient_height(values: &[f64], heights: &[f64]) -> Result<f64, EstimateError> {
    max_gradient_index(values, heights).map(|index| heights[index])
}
