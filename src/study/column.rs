//! Typed column statistics.
//!
//! Both the reduced model and the reference simulations report the same set
//! of horizontally averaged quantities on a vertical grid. Each quantity gets
//! a named field here, so consumers never look fields up by string key.

use uom::si::{
    angle::radian,
    f64::{Angle, Length, ThermodynamicTemperature, Velocity},
    velocity::meter_per_second,
};

use crate::support::{
    profile::{Profile, ProfileError},
    units::{
        KinematicHeatFlux, SpecificTurbulentKineticEnergy, TemperatureVariance, VelocityCovariance,
    },
};

/// Horizontally averaged statistics of one simulated column.
///
/// Every series is sampled on [`heights`](Self::heights). Lengths are checked
/// when a series is turned into a [`Profile`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStatistics {
    /// Height grid, surface first.
    pub heights: Vec<Length>,

    /// Mean streamwise velocity.
    pub u: Vec<Velocity>,

    /// Mean spanwise velocity.
    pub v: Vec<Velocity>,

    /// Mean potential temperature.
    pub theta: Vec<ThermodynamicTemperature>,

    /// Turbulent kinetic energy per unit mass.
    pub tke: Vec<SpecificTurbulentKineticEnergy>,

    /// Potential-temperature variance.
    pub theta_variance: Vec<TemperatureVariance>,

    /// Vertical flux of streamwise momentum.
    pub uw: Vec<VelocityCovariance>,

    /// Vertical flux of spanwise momentum.
    pub vw: Vec<VelocityCovariance>,

    /// Horizontal shear stress.
    pub uv: Vec<VelocityCovariance>,

    /// Streamwise normal stress.
    pub uu: Vec<VelocityCovariance>,

    /// Vertical normal stress.
    pub ww: Vec<VelocityCovariance>,

    /// Vertical kinematic heat flux.
    pub w_theta: Vec<KinematicHeatFlux>,

    /// Streamwise kinematic heat flux.
    pub u_theta: Vec<KinematicHeatFlux>,

    /// Spanwise kinematic heat flux.
    pub v_theta: Vec<KinematicHeatFlux>,
}

impl ColumnStatistics {
    /// Builds a profile of one series on this column's height grid.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if the series does not match the grid or
    /// the grid violates the profile invariants.
    pub fn profile<Q: Copy>(&self, series: &[Q]) -> Result<Profile<Q>, ProfileError> {
        Profile::new(self.heights.clone(), series.to_vec())
    }

    /// Potential-temperature profile.
    ///
    /// # Errors
    ///
    /// See [`ColumnStatistics::profile`].
    pub fn temperature(&self) -> Result<Profile<ThermodynamicTemperature>, ProfileError> {
        self.profile(&self.theta)
    }

    /// Mean wind direction, measured from the streamwise axis.
    ///
    /// The lowest level is always left out, even when the wind there is not
    /// calm. Reduced-model grids put their no-slip node at the surface,
    /// where the direction is undefined.
    ///
    /// # Errors
    ///
    /// Returns a [`ProfileError`] if either velocity series does not match
    /// the grid, or if fewer than two levels remain above the surface.
    pub fn wind_direction(&self) -> Result<Profile<Angle>, ProfileError> {
        let u = self.profile(&self.u)?;
        let v = self.profile(&self.v)?;

        let (heights, directions) = u
            .iter()
            .zip(v.values())
            .skip(1)
            .map(|((z, u_z), v_z)| {
                let u_z = u_z.get::<meter_per_second>();
                let v_z = v_z.get::<meter_per_second>();
                (z, Angle::new::<radian>(v_z.atan2(u_z)))
            })
            .unzip();

        Profile::new(heights, directions)
    }
}
