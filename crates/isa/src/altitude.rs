//! Altitude interpretations and the conversions between them.

use std::{fmt, str::FromStr};

use crate::{Field, IsaError, constants::EARTH_RADIUS};

/// How an input altitude is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AltitudeKind {
    /// True height above mean sea level.
    #[default]
    Geometric,
    /// Height scaled so that gravity is constant with altitude.
    Geopotential,
}

impl AltitudeKind {
    /// Returns the canonical lowercase name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AltitudeKind::Geometric => "geometric",
            AltitudeKind::Geopotential => "geopotential",
        }
    }
}

impl fmt::Display for AltitudeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AltitudeKind {
    type Err = IsaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "geometric" => Ok(AltitudeKind::Geometric),
            "geopotential" => Ok(AltitudeKind::Geopotential),
            other => Err(IsaError::InvalidArgument(format!(
                "unknown altitude kind `{other}`, expected `geometric` or `geopotential`"
            ))),
        }
    }
}

/// Converts geometric altitude `z` to geopotential altitude with
/// `H = R·z / (R + z)`.
///
/// Defined for `z > -R`, where `R` is [`EARTH_RADIUS`].
#[must_use]
pub fn geometric_to_geopotential<F: Field>(z: F) -> F {
    z.map(geopotential_from_geometric)
}

/// Converts geopotential altitude `H` to geometric altitude with
/// `z = R·H / (R − H)`, the exact inverse of [`geometric_to_geopotential`].
///
/// Diverges as `H` approaches [`EARTH_RADIUS`].
#[must_use]
pub fn geopotential_to_geometric<F: Field>(h: F) -> F {
    h.map(geometric_from_geopotential)
}

pub(crate) fn geopotential_from_geometric(z: f64) -> f64 {
    EARTH_RADIUS * z / (EARTH_RADIUS + z)
}

pub(crate) fn geometric_from_geopotential(h: f64) -> f64 {
    EARTH_RADIUS * h / (EARTH_RADIUS - h)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn geopotential_is_below_geometric() {
        let h = geometric_to_geopotential(10_000.0);
        assert_relative_eq!(h, 9_984.2934, epsilon = 1e-3);
        assert_eq!(geometric_to_geopotential(0.0), 0.0);
    }

    #[test]
    fn conversions_are_inverse() {
        for step in 0..=320 {
            let z = f64::from(step) * 100.0;
            let back = geopotential_to_geometric(geometric_to_geopotential(z));
            assert_relative_eq!(back, z, max_relative = 1e-9);
        }
    }

    #[test]
    fn conversions_preserve_shape() {
        let z = array![[0.0, 1_000.0], [5_000.0, 32_000.0]];
        let h = geometric_to_geopotential(z.clone());
        assert_eq!(h.shape(), z.shape());
        assert_relative_eq!(h[[1, 0]], geometric_to_geopotential(5_000.0));
    }

    #[test]
    fn parse_altitude_kind() {
        assert_eq!("geometric".parse(), Ok(AltitudeKind::Geometric));
        assert_eq!("geopotential".parse(), Ok(AltitudeKind::Geopotential));
        assert!(matches!(
            "pressure".parse::<AltitudeKind>(),
            Err(IsaError::InvalidArgument(_))
        ));
        assert_eq!(AltitudeKind::default().to_string(), "geometric");
    }
}
