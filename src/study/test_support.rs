use std::collections::HashMap;

use thiserror::Error;
use uom::si::{
    f64::{Length, ThermodynamicTemperature, Velocity},
    length::meter,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::units::SiValue;

use super::{Approach, Case, ColumnStatistics, ProfileSource};

/// Grid spacing of synthetic columns, in meters.
const DZ: f64 = 25.0;

/// Number of levels in synthetic columns (0 to 800 m).
const LEVELS: u32 = 33;

/// Mixed-layer potential temperature, in kelvin.
const THETA_MIXED: f64 = 265.0;

/// Temperature jump across the capping inversion, in kelvin.
const INVERSION_JUMP: f64 = 1.0;

/// A conventionally neutral column capped at `inversion` meters.
///
/// Potential temperature is uniform below the inversion, jumps by
/// [`INVERSION_JUMP`] at it, and increases at `lapse_rate` (K/m) above.
/// With `inversion` on the 25 m grid, the maximum gradient sits exactly at
/// the inversion height.
pub(super) fn neutral_column(inversion: f64, lapse_rate: f64) -> ColumnStatistics {
    let z: Vec<f64> = (0..LEVELS).map(|i| DZ * f64::from(i)).collect();

    let theta = z.iter().map(|&z| {
        if z < inversion {
            THETA_MIXED
        } else {
            THETA_MIXED + INVERSION_JUMP + lapse_rate * (z - inversion)
        }
    });

    // Ekman-like veering: the surface node is calm.
    let u = z.iter().map(|&z| 8.0 * (1.0 - (-z / 100.0).exp()));
    let v = z
        .iter()
        .map(|&z| 3.0 * (-z / 300.0).exp() * (1.0 - (-z / 50.0).exp()));

    ColumnStatistics {
        heights: z.iter().copied().map(Length::new::<meter>).collect(),
        u: u.map(Velocity::new::<meter_per_second>).collect(),
        v: v.map(Velocity::new::<meter_per_second>).collect(),
        theta: theta.map(ThermodynamicTemperature::new::<kelvin>).collect(),
        tke: turbulent(&z, inversion, 0.5),
        theta_variance: turbulent(&z, inversion, 1e-3),
        uw: turbulent(&z, inversion, -0.1),
        vw: turbulent(&z, inversion, 0.02),
        uv: turbulent(&z, inversion, 0.05),
        uu: turbulent(&z, inversion, 0.6),
        ww: turbulent(&z, inversion, 0.2),
        w_theta: turbulent(&z, inversion, -2e-3),
        u_theta: turbulent(&z, inversion, 1e-2),
        v_theta: turbulent(&z, inversion, 5e-3),
    }
}

/// A second-order statistic that decays linearly from `scale` at the
/// surface to zero at the inversion.
fn turbulent<Q: SiValue>(z: &[f64], inversion: f64, scale: f64) -> Vec<Q> {
    z.iter()
        .map(|&z| {
            if z < inversion {
                Q::from_si(scale * (1.0 - z / inversion))
            } else {
                Q::from_si(0.0)
            }
        })
        .collect()
}

#[derive(Debug, Error)]
#[error("no {approach} column for {case}")]
pub(super) struct MissingColumn {
    case: String,
    approach: Approach,
}

/// An in-memory [`ProfileSource`] keyed by case name and approach.
///
/// Each LES reference of a case is stored under its own key.
#[derive(Debug, Default)]
pub(super) struct ColumnMap {
    columns: HashMap<(String, Approach), ColumnStatistics>,
}

impl ColumnMap {
    pub(super) fn insert(&mut self, case: &Case, approach: Approach, column: ColumnStatistics) {
        self.columns
            .insert((case.name().to_owned(), approach), column);
    }

    pub(super) fn remove(&mut self, case: &Case, approach: Approach) {
        self.columns.remove(&(case.name().to_owned(), approach));
    }
}

impl ProfileSource for ColumnMap {
    type Error = MissingColumn;

    fn column(&self, case: &Case, approach: Approach) -> Result<ColumnStatistics, Self::Error> {
        self.columns
            .get(&(case.name().to_owned(), approach))
            .cloned()
            .ok_or_else(|| MissingColumn {
                case: case.name().to_owned(),
                approach,
            })
    }
}
