use std::marker::PhantomData;

use uom::si::{Dimension, Quantity, SI};

/// Extension trait for moving between SI quantities and raw base-unit values.
///
/// Quantities declared as type aliases (see [`TemperatureGradient`]) have no
/// unit modules, so `Quantity::new::<unit>()` is unavailable for them.
/// This trait fills that gap for every `f64` SI quantity.
///
/// [`TemperatureGradient`]: super::TemperatureGradient
pub trait SiValue: Copy {
    /// Creates a quantity from a value expressed in SI base units.
    fn from_si(value: f64) -> Self;

    /// Returns the value expressed in SI base units.
    fn si(self) -> f64;
}

impl<D> SiValue for Quantity<D, SI<f64>, f64>
where
    D: Dimension + ?Sized,
{
    fn from_si(value: f64) -> Self {
        Quantity {
            dimension: PhantomData,
            units: PhantomData,
            value,
        }
    }

    fn si(self) -> f64 {
        self.value
    }
}
