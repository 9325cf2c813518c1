//! Boundary-layer height models.
//!
//! The boundary-layer top is estimated as the height where the vertical
//! gradient of a scalar, usually potential temperature, is largest. In a
//! conventionally neutral boundary layer this marks the capping inversion
//! between the well-mixed layer and the stably stratified free atmosphere.
//!
//! [`BoundaryLayerHeight`] is the [`twine_core::Model`] adapter over typed
//! profiles. The computational core is in the internal `core` module and is
//! also exposed for raw slices through [`max_gradient_height`] and
//! [`max_gradient_index`].
//!
//! # Non-finite gradients
//!
//! Gradient samples that are `NaN` or infinite (from repeated heights or
//! missing data) are replaced with zero before the maximum is located, so a
//! pathological region can never be chosen as the boundary-layer top.
//! Each replacement is reported as a `warn` event through [`tracing`].

mod core;

pub use self::core::{EstimateError, max_gradient_height, max_gradient_index};

use std::marker::PhantomData;

use twine_core::Model;
use uom::si::f64::{Length, ThermodynamicTemperature};

use crate::support::{profile::Profile, units::SiValue};

/// Estimates the boundary-layer height of a profile of `Q`.
///
/// The quantity defaults to potential temperature. Values are converted to SI
/// base units before differentiation, so the chosen height does not depend on
/// the units the profile was built with. The output is always one of the
/// profile's own heights.
///
/// # Example
///
/// ```
/// use abl_models::{
///     models::atmosphere::boundary_layer::BoundaryLayerHeight, support::profile::Profile,
/// };
/// use twine_core::Model;
/// use uom::si::{
///     f64::{Length, ThermodynamicTemperature},
///     length::meter,
///     thermodynamic_temperature::kelvin,
/// };
///
/// let z = [0.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0].map(Length::new::<meter>);
/// let theta = [265.0, 265.0, 265.0, 265.1, 266.4, 266.8, 267.0]
///     .map(ThermodynamicTemperature::new::<kelvin>);
/// let profile = Profile::new(z.to_vec(), theta.to_vec()).unwrap();
///
/// let top = BoundaryLayerHeight::new().call(&profile).unwrap();
/// assert_eq!(top, Length::new::<meter>(400.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BoundaryLayerHeight<Q = ThermodynamicTemperature> {
    _quantity: PhantomData<Q>,
}

impl<Q> BoundaryLayerHeight<Q> {
    /// Creates the model.
    pub fn new() -> Self {
        Self {
            _quantity: PhantomData,
        }
    }
}

impl<Q> Default for BoundaryLayerHeight<Q> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Q: SiValue> Model for BoundaryLayerHeight<Q> {
    type Input = Profile<Q>;
    type Output = Length;
    type Error = EstimateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let index = max_gradient_index(&input.values_si(), &input.heights_si())?;
        Ok(input.heights()[index])
    }
}
