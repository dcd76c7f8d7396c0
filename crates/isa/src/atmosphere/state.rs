use ndarray::Array1;

use crate::{
    Field,
    constants::{
        GAS_CONSTANT_AIR, HEAT_CAPACITY_RATIO, SEA_LEVEL_DENSITY, SEA_LEVEL_PRESSURE,
        SEA_LEVEL_TEMPERATURE, SUTHERLAND_COEFFICIENT, SUTHERLAND_TEMPERATURE,
    },
};

use super::STANDARD_LAYERS;

/// Thermodynamic state of the standard atmosphere.
///
/// All values are SI: m, K, Pa, kg/m³, m/s, Pa·s, m²/s.
/// `T` is `f64` for a single altitude or an `ndarray` array, in which case
/// every field has the shape of the queried altitudes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtmosphereState<T = f64> {
    pub geometric_altitude: T,
    pub geopotential_altitude: T,
    pub temperature: T,
    pub pressure: T,
    pub density: T,
    pub speed_of_sound: T,
    pub dynamic_viscosity: T,
    pub kinematic_viscosity: T,
}

impl<F: Field> AtmosphereState<F> {
    /// Evaluates the layer table at already validated altitudes.
    pub(crate) fn from_altitudes(geometric_altitude: F, geopotential_altitude: F) -> Self {
        let layers = &*STANDARD_LAYERS;

        let temperature = geopotential_altitude.map(|h| layers.locate(h).temperature(h));
        let pressure = geopotential_altitude.map(|h| layers.locate(h).pressure(h));

        let density = pressure.zip_map(&temperature, ideal_gas_density);
        let speed_of_sound = temperature.map(speed_of_sound);
        let dynamic_viscosity = temperature.map(sutherland_viscosity);
        let kinematic_viscosity = dynamic_viscosity.zip_map(&density, |mu, rho| mu / rho);

        Self {
            geometric_altitude,
            geopotential_altitude,
            temperature,
            pressure,
            density,
            speed_of_sound,
            dynamic_viscosity,
            kinematic_viscosity,
        }
    }

    /// Returns the pressure ratio `δ = p/p₀`.
    #[must_use]
    pub fn pressure_ratio(&self) -> F {
        self.pressure.map(|p| p / SEA_LEVEL_PRESSURE)
    }

    /// Returns the density ratio `σ = ρ/ρ₀`.
    #[must_use]
    pub fn density_ratio(&self) -> F {
        self.density.map(|rho| rho / SEA_LEVEL_DENSITY)
    }

    /// Returns the temperature ratio `θ = T/T₀`.
    #[must_use]
    pub fn temperature_ratio(&self) -> F {
        self.temperature.map(|t| t / SEA_LEVEL_TEMPERATURE)
    }
}

impl AtmosphereState<Array1<f64>> {
    /// Returns the number of altitudes in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    /// Returns `true` if the batch is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }

    /// Returns the scalar state at `index`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<AtmosphereState> {
        Some(AtmosphereState {
            geometric_altitude: *self.geometric_altitude.get(index)?,
            geopotential_altitude: *self.geopotential_altitude.get(index)?,
            temperature: *self.temperature.get(index)?,
            pressure: *self.pressure.get(index)?,
            density: *self.density.get(index)?,
            speed_of_sound: *self.speed_of_sound.get(index)?,
            dynamic_viscosity: *self.dynamic_viscosity.get(index)?,
            kinematic_viscosity: *self.kinematic_viscosity.get(index)?,
        })
    }

    /// Iterates over the batch as scalar states.
    pub fn iter(&self) -> impl Iterator<Item = AtmosphereState> + '_ {
        (0..self.len()).filter_map(|index| self.get(index))
    }
}

/// Collects a sequence of scalar states into a batched state.
impl FromIterator<AtmosphereState> for AtmosphereState<Array1<f64>> {
    fn from_iter<I: IntoIterator<Item = AtmosphereState>>(iter: I) -> Self {
        let states: Vec<AtmosphereState> = iter.into_iter().collect();
        let column = |field: fn(&AtmosphereState) -> f64| -> Array1<f64> {
            states.iter().map(field).collect()
        };

        Self {
            geometric_altitude: column(|s| s.geometric_altitude),
            geopotential_altitude: column(|s| s.geopotential_altitude),
            temperature: column(|s| s.temperature),
            pressure: column(|s| s.pressure),
            density: column(|s| s.density),
            speed_of_sound: column(|s| s.speed_of_sound),
            dynamic_viscosity: column(|s| s.dynamic_viscosity),
            kinematic_viscosity: column(|s| s.kinematic_viscosity),
        }
    }
}

/// Density from the ideal gas law, `ρ = p/(R·T)`.
fn ideal_gas_density(pressure: f64, temperature: f64) -> f64 {
    pressure / (GAS_CONSTANT_AIR * temperature)
}

/// Speed of sound, `a = √(γ·R·T)`.
fn speed_of_sound(temperature: f64) -> f64 {
    (HEAT_CAPACITY_RATIO * GAS_CONSTANT_AIR * temperature).sqrt()
}

/// Dynamic viscosity from Sutherland's law.
fn sutherland_viscosity(temperature: f64) -> f64 {
    SUTHERLAND_COEFFICIENT * temperature.powf(1.5) / (temperature + SUTHERLAND_TEMPERATURE)
}
