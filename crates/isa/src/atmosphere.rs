//! The 1976 standard atmosphere up to 32 km geopotential altitude.

mod layer;
mod state;

use log::{debug, trace};
use once_cell::sync::Lazy;

use crate::{
    Field, IsaError,
    altitude::{AltitudeKind, geometric_from_geopotential, geopotential_from_geometric},
    constants::{MAX_GEOPOTENTIAL_ALTITUDE, MIN_GEOPOTENTIAL_ALTITUDE},
};

pub use layer::{LapseProfile, Layer, LayerTable, STANDARD_LAYERS};
pub use state::AtmosphereState;

static SEA_LEVEL: Lazy<AtmosphereState> = Lazy::new(|| AtmosphereState::from_altitudes(0.0, 0.0));

/// Returns the standard atmosphere at sea level.
///
/// Computed once and shared; its density is the reference `ρ₀` for
/// equivalent airspeed.
#[must_use]
pub fn sea_level_atmosphere() -> &'static AtmosphereState {
    &SEA_LEVEL
}

/// Computes the standard atmosphere at the given altitude or altitudes.
///
/// The altitude is interpreted according to `kind` and converted to
/// geopotential altitude, which selects the layer and drives the temperature
/// and pressure formulas.
/// Both altitude representations are returned in the state.
///
/// # Errors
///
/// Returns [`IsaError::OutOfRange`] if any geopotential altitude lies outside
/// `[0, 32000]` m.
/// A batch with a single offending element fails as a whole.
pub fn query_atmosphere<F: Field>(
    altitude: F,
    kind: AltitudeKind,
) -> Result<AtmosphereState<F>, IsaError> {
    let geopotential = match kind {
        AltitudeKind::Geometric => altitude.map(geopotential_from_geometric),
        AltitudeKind::Geopotential => altitude.clone(),
    };

    check_range(&geopotential)?;
    trace!("evaluating standard atmosphere at {} altitude(s)", geopotential.len());

    let geometric = match kind {
        AltitudeKind::Geometric => altitude,
        AltitudeKind::Geopotential => geopotential.map(geometric_from_geopotential),
    };

    Ok(AtmosphereState::from_altitudes(geometric, geopotential))
}

fn check_range<F: Field>(geopotential: &F) -> Result<(), IsaError> {
    let supported = MIN_GEOPOTENTIAL_ALTITUDE..=MAX_GEOPOTENTIAL_ALTITUDE;

    match geopotential.values().find(|h| !supported.contains(h)) {
        Some(h) => {
            debug!("rejecting geopotential altitude {h} m");
            Err(IsaError::OutOfRange {
                geopotential_altitude: h,
                min: MIN_GEOPOTENTIAL_ALTITUDE,
                max: MAX_GEOPOTENTIAL_ALTITUDE,
            })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array1, array};

    #[test]
    fn sea_level_matches_reference_conditions() {
        let s = query_atmosphere(0.0, AltitudeKind::Geometric).unwrap();
        assert_relative_eq!(s.temperature, 288.15, epsilon = 1e-9);
        assert_relative_eq!(s.pressure, 101_325.0, epsilon = 1e-6);
        assert_relative_eq!(s.density, 1.225, epsilon = 1e-4);
        assert_relative_eq!(s.speed_of_sound, 340.294, epsilon = 1e-3);
        assert_relative_eq!(s.dynamic_viscosity, 1.7894e-5, max_relative = 1e-3);
        assert_relative_eq!(s.kinematic_viscosity, s.dynamic_viscosity / s.density);
        assert_eq!(&s, sea_level_atmosphere());
    }

    #[test]
    fn tropopause_values() {
        let s = query_atmosphere(11_000.0, AltitudeKind::Geopotential).unwrap();
        assert_relative_eq!(s.temperature, 216.65, epsilon = 1e-2);
        assert_relative_eq!(s.pressure, 22_632.0, epsilon = 50.0);
        assert_relative_eq!(s.geometric_altitude, 11_019.07, epsilon = 0.01);
    }

    #[test]
    fn companion_altitude_is_always_populated() {
        let from_geometric = query_atmosphere(8_000.0, AltitudeKind::Geometric).unwrap();
        assert_eq!(from_geometric.geometric_altitude, 8_000.0);
        assert!(from_geometric.geopotential_altitude < 8_000.0);

        let from_geopotential = query_atmosphere(8_000.0, AltitudeKind::Geopotential).unwrap();
        assert_eq!(from_geopotential.geopotential_altitude, 8_000.0);
        assert!(from_geopotential.geometric_altitude > 8_000.0);
    }

    #[test]
    fn out_of_range_altitudes_fail() {
        for altitude in [-1.0, 32_000.1, 40_000.0, f64::NAN] {
            let result = query_atmosphere(altitude, AltitudeKind::Geopotential);
            assert!(
                matches!(result, Err(IsaError::OutOfRange { .. })),
                "altitude {altitude} should be rejected"
            );
        }

        // 32 km geometric is below 32 km geopotential.
        let accepts = |altitude: f64, kind| query_atmosphere(altitude, kind).is_ok();
        assert!(accepts(32_000.0, AltitudeKind::Geometric));
        assert!(!accepts(32_200.0, AltitudeKind::Geometric));
        assert!(accepts(32_000.0, AltitudeKind::Geopotential));
    }

    #[test]
    fn one_bad_element_fails_the_batch() {
        let altitudes = array![0.0, 10_000.0, 50_000.0, 1_000.0];
        let error = query_atmosphere(altitudes, AltitudeKind::Geometric).unwrap_err();

        let IsaError::OutOfRange {
            geopotential_altitude,
            max,
            ..
        } = error
        else {
            panic!("unexpected error: {error}");
        };
        assert!(geopotential_altitude > max);
    }

    #[test]
    fn batch_matches_scalar_queries() {
        let altitudes = array![0.0, 5_000.0, 10_000.0];
        let batch = query_atmosphere(altitudes.clone(), AltitudeKind::Geometric).unwrap();
        assert_eq!(batch.len(), 3);

        for (altitude, element) in altitudes.iter().zip(batch.iter()) {
            let scalar = query_atmosphere(*altitude, AltitudeKind::Geometric).unwrap();
            assert_eq!(element, scalar);
        }
    }

    #[test]
    fn batch_preserves_shape() {
        let altitudes = array![[0.0, 1_000.0, 2_000.0], [3_000.0, 4_000.0, 5_000.0]];
        let batch = query_atmosphere(altitudes, AltitudeKind::Geopotential).unwrap();

        assert_eq!(batch.temperature.shape(), &[2, 3]);
        assert_eq!(batch.kinematic_viscosity.shape(), &[2, 3]);
        assert_relative_eq!(
            batch.temperature[[1, 2]],
            288.15 - 0.0065 * 5_000.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn batch_round_trips_through_scalar_states() {
        let batch =
            query_atmosphere(array![1_000.0, 12_000.0, 25_000.0], AltitudeKind::Geopotential)
                .unwrap();
        let rebuilt: AtmosphereState<Array1<f64>> = batch.iter().collect();
        assert_eq!(rebuilt, batch);
        assert!(batch.get(3).is_none());
    }

    #[test]
    fn ratios_relative_to_sea_level() {
        let s = sea_level_atmosphere();
        assert_relative_eq!(s.pressure_ratio(), 1.0);
        assert_relative_eq!(s.density_ratio(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(s.temperature_ratio(), 1.0);

        let high = query_atmosphere(11_000.0, AltitudeKind::Geopotential).unwrap();
        assert_relative_eq!(high.temperature_ratio(), 0.751_865, epsilon = 1e-6);
        assert_relative_eq!(high.pressure_ratio(), 0.223_36, epsilon = 1e-4);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip_of_batched_state() {
        let state = query_atmosphere(array![0.0, 5_000.0], AltitudeKind::Geopotential).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: AtmosphereState<Array1<f64>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 2);
        for (read, written) in back.iter().zip(state.iter()) {
            assert_relative_eq!(read.temperature, written.temperature, max_relative = 1e-12);
            assert_relative_eq!(read.pressure, written.pressure, max_relative = 1e-12);
            assert_relative_eq!(read.density, written.density, max_relative = 1e-12);
        }

        let kind: AltitudeKind = serde_json::from_str("\"geopotential\"").unwrap();
        assert_eq!(kind, AltitudeKind::Geopotential);
    }
}
