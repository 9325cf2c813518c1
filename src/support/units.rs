//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., height, temperature, velocity).
//! This module provides extensions that are useful for boundary-layer analysis
//! but aren't included in [`uom`].
//!
//! ## Turbulence statistics
//!
//! Second moments and gradients such as Reynolds stresses, kinematic heat
//! fluxes, and the potential-temperature lapse rate have no named quantity in
//! [`uom`], so they are declared here as type aliases.
//!
//! ## SI base values
//!
//! The [`SiValue`] trait converts any SI quantity to and from the raw value
//! in SI base units, which is how numeric routines such as
//! [`gradient`](crate::support::gradient::gradient) see profile data:
//!
//! ```
//! use abl_models::support::units::{SiValue, TemperatureGradient};
//!
//! let lapse_rate = TemperatureGradient::from_si(0.003);
//! assert_eq!(lapse_rate.si(), 0.003);
//! ```

mod quantities;
mod si_value;

pub use quantities::{
    KinematicHeatFlux, SpecificTurbulentKineticEnergy, TemperatureGradient, TemperatureVariance,
    VelocityCovariance,
};
pub use si_value::SiValue;
