use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Temperature gradient, K/m in SI.
pub type TemperatureGradient = Quantity<ISQ<N1, Z0, Z0, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Temperature variance, K² in SI.
pub type TemperatureVariance = Quantity<ISQ<Z0, Z0, Z0, Z0, P2, Z0, Z0>, SI<f64>, f64>;

/// Kinematic heat flux (velocity-temperature covariance), K·m/s in SI.
pub type KinematicHeatFlux = Quantity<ISQ<P1, Z0, N1, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Velocity covariance (kinematic Reynolds stress), m²/s² in SI.
pub type VelocityCovariance = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific turbulent kinetic energy, m²/s² in SI.
pub type SpecificTurbulentKineticEnergy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
