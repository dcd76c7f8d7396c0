use log::debug;
use once_cell::sync::Lazy;

use crate::constants::{
    GAS_CONSTANT_AIR, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE, STANDARD_GRAVITY,
};

/// The standard layer table, built once on first use.
pub static STANDARD_LAYERS: Lazy<LayerTable> = Lazy::new(LayerTable::standard);

/// Base geopotential altitude and temperature profile of each standard layer.
const LAYER_DEFINITIONS: [(f64, LapseProfile); 3] = [
    (0.0, LapseProfile::Gradient(-0.0065)),
    (11_000.0, LapseProfile::Isothermal),
    (20_000.0, LapseProfile::Gradient(0.001)),
];

/// How temperature varies with geopotential altitude within a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LapseProfile {
    /// Temperature changes linearly at the given rate, K/m.
    Gradient(f64),
    /// Temperature is constant.
    Isothermal,
}

impl LapseProfile {
    /// Returns the lapse rate `dT/dH` in K/m.
    #[must_use]
    pub fn lapse_rate(self) -> f64 {
        match self {
            LapseProfile::Gradient(rate) => rate,
            LapseProfile::Isothermal => 0.0,
        }
    }
}

/// A single layer of the standard atmosphere.
///
/// Valid from `base_altitude` up to the base of the next layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    /// Geopotential altitude of the layer base, m.
    pub base_altitude: f64,
    pub profile: LapseProfile,
    /// Temperature at the layer base, K.
    pub base_temperature: f64,
    /// Pressure at the layer base, Pa.
    pub base_pressure: f64,
}

impl Layer {
    /// Computes temperature at geopotential altitude `h`.
    ///
    /// Uses `T = T_b + L·(H − H_b)` for gradient layers.
    #[must_use]
    pub fn temperature(&self, h: f64) -> f64 {
        match self.profile {
            LapseProfile::Gradient(rate) => self.base_temperature + rate * (h - self.base_altitude),
            LapseProfile::Isothermal => self.base_temperature,
        }
    }

    /// Computes pressure at geopotential altitude `h`.
    ///
    /// Uses `p = p_b·(T/T_b)^(−g₀/(R·L))` for gradient layers and
    /// `p = p_b·exp(−g₀·(H − H_b)/(R·T_b))` for isothermal layers.
    #[must_use]
    pub fn pressure(&self, h: f64) -> f64 {
        match self.profile {
            LapseProfile::Gradient(rate) => {
                let exponent = -STANDARD_GRAVITY / (GAS_CONSTANT_AIR * rate);
                self.base_pressure * (self.temperature(h) / self.base_temperature).powf(exponent)
            }
            LapseProfile::Isothermal => {
                let exponent = -STANDARD_GRAVITY * (h - self.base_altitude)
                    / (GAS_CONSTANT_AIR * self.base_temperature);
                self.base_pressure * exponent.exp()
            }
        }
    }
}

/// The layers of the standard atmosphere, ordered by base altitude.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerTable {
    layers: Vec<Layer>,
}

impl LayerTable {
    /// Builds the 1976 standard table.
    ///
    /// The first layer starts from sea-level conditions.
    /// Each later layer takes its base temperature and pressure from the layer
    /// below evaluated at its own base, so both are continuous across layers.
    #[must_use]
    pub fn standard() -> Self {
        let mut layers: Vec<Layer> = Vec::with_capacity(LAYER_DEFINITIONS.len());

        for (base_altitude, profile) in LAYER_DEFINITIONS {
            let (base_temperature, base_pressure) = match layers.last() {
                Some(below) => (
                    below.temperature(base_altitude),
                    below.pressure(base_altitude),
                ),
                None => (SEA_LEVEL_TEMPERATURE, SEA_LEVEL_PRESSURE),
            };

            debug!(
                "standard layer at {base_altitude} m: L = {} K/m, T_b = {base_temperature} K, p_b = {base_pressure} Pa",
                profile.lapse_rate()
            );

            layers.push(Layer {
                base_altitude,
                profile,
                base_temperature,
                base_pressure,
            });
        }

        Self { layers }
    }

    /// Returns the layers in ascending order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Returns the layer containing geopotential altitude `h`.
    ///
    /// A boundary altitude belongs to the layer above it.
    /// Altitudes below the first base map to the first layer.
    #[must_use]
    pub fn locate(&self, h: f64) -> &Layer {
        self.layers
            .iter()
            .rev()
            .find(|layer| h >= layer.base_altitude)
            .unwrap_or(&self.layers[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn base_values_match_standard() {
        let layers = STANDARD_LAYERS.layers();
        assert_eq!(layers.len(), 3);

        assert_relative_eq!(layers[0].base_temperature, 288.15);
        assert_relative_eq!(layers[0].base_pressure, 101_325.0);

        assert_relative_eq!(layers[1].base_temperature, 216.65, epsilon = 1e-9);
        assert_relative_eq!(layers[1].base_pressure, 22_632.06, epsilon = 0.5);

        assert_relative_eq!(layers[2].base_temperature, 216.65, epsilon = 1e-9);
        assert_relative_eq!(layers[2].base_pressure, 5_474.89, epsilon = 0.5);
    }

    #[test]
    fn temperature_and_pressure_are_continuous() {
        for pair in STANDARD_LAYERS.layers().windows(2) {
            let (below, above) = (pair[0], pair[1]);
            let h = above.base_altitude;

            assert_relative_eq!(
                below.temperature(h),
                above.temperature(h),
                max_relative = 1e-12
            );
            assert_relative_eq!(below.pressure(h), above.pressure(h), max_relative = 1e-12);
        }
    }

    #[test]
    fn boundaries_belong_to_the_higher_layer() {
        let table = LayerTable::standard();
        let base_of = |h: f64| table.locate(h).base_altitude;

        assert_eq!(base_of(0.0), 0.0);
        assert_eq!(base_of(10_999.999), 0.0);
        assert_eq!(base_of(11_000.0), 11_000.0);
        assert_eq!(base_of(19_999.999), 11_000.0);
        assert_eq!(base_of(20_000.0), 20_000.0);
        assert_eq!(base_of(32_000.0), 20_000.0);
    }

    #[test]
    fn isothermal_layer_keeps_base_temperature() {
        let layer = STANDARD_LAYERS.locate(15_000.0);
        assert_eq!(layer.profile, LapseProfile::Isothermal);
        assert_eq!(layer.profile.lapse_rate(), 0.0);
        assert_relative_eq!(layer.temperature(15_000.0), layer.base_temperature);
        assert!(layer.pressure(15_000.0) < layer.base_pressure);
    }
}
