use ndarray::Array1;

/// Aerodynamic state derived from a speed and an atmosphere.
///
/// Speeds in m/s, pressures in Pa, `mach` and `reynolds` dimensionless.
/// `T` follows the same shape rule as [`AtmosphereState`](crate::AtmosphereState).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AerodynamicState<T = f64> {
    pub true_airspeed: T,
    pub equivalent_airspeed: T,
    pub mach: T,
    pub reynolds: T,
    pub dynamic_pressure: T,
    /// Static plus dynamic pressure, without a compressibility correction.
    pub stagnation_pressure: T,
}

impl AerodynamicState<Array1<f64>> {
    /// Returns the number of elements in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.true_airspeed.len()
    }

    /// Returns `true` if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.true_airspeed.is_empty()
    }

    /// Returns the scalar state at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<AerodynamicState> {
        Some(AerodynamicState {
            true_airspeed: *self.true_airspeed.get(index)?,
            equivalent_airspeed: *self.equivalent_airspeed.get(index)?,
            mach: *self.mach.get(index)?,
            reynolds: *self.reynolds.get(index)?,
            dynamic_pressure: *self.dynamic_pressure.get(index)?,
            stagnation_pressure: *self.stagnation_pressure.get(index)?,
        })
    }
}
