//! Physical constants of the 1976 standard atmosphere, in SI units.

/// Standard gravity, m/s².
pub const STANDARD_GRAVITY: f64 = 9.806_65;

/// Specific gas constant for dry air, J/(kg·K).
pub const GAS_CONSTANT_AIR: f64 = 287.052_87;

/// Ratio of specific heats for air.
pub const HEAT_CAPACITY_RATIO: f64 = 1.4;

/// Sea-level reference temperature, K.
pub const SEA_LEVEL_TEMPERATURE: f64 = 288.15;

/// Sea-level reference pressure, Pa.
pub const SEA_LEVEL_PRESSURE: f64 = 101_325.0;

/// Sea-level density from the ideal gas law, kg/m³.
pub const SEA_LEVEL_DENSITY: f64 = SEA_LEVEL_PRESSURE / (GAS_CONSTANT_AIR * SEA_LEVEL_TEMPERATURE);

/// Earth's effective radius for geopotential conversion, m.
pub const EARTH_RADIUS: f64 = 6_356_766.0;

/// Sutherland's law reference coefficient, kg/(m·s·K^½).
pub const SUTHERLAND_COEFFICIENT: f64 = 1.458e-6;

/// Sutherland's temperature, K.
pub const SUTHERLAND_TEMPERATURE: f64 = 110.4;

/// Lowest supported geopotential altitude, m.
pub const MIN_GEOPOTENTIAL_ALTITUDE: f64 = 0.0;

/// Highest supported geopotential altitude, m.
pub const MAX_GEOPOTENTIAL_ALTITUDE: f64 = 32_000.0;

/// Characteristic length used when none is given, m.
pub const DEFAULT_CHARACTERISTIC_LENGTH: f64 = 1.0;

/// Sea-level speed of sound, m/s.
#[must_use]
pub fn sea_level_speed_of_sound() -> f64 {
    (HEAT_CAPACITY_RATIO * GAS_CONSTANT_AIR * SEA_LEVEL_TEMPERATURE).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn sea_level_reference_values() {
        assert_relative_eq!(SEA_LEVEL_DENSITY, 1.225, epsilon = 1e-4);
        assert_relative_eq!(sea_level_speed_of_sound(), 340.294, epsilon = 1e-3);
    }
}
