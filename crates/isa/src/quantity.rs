//! Typed views of scalar states using [`uom`] quantities.
//!
//! The core works in plain SI `f64` values.
//! These types let callers read a state, or supply an altitude, in any unit.
//!
//! ```
//! use isa_toolkit::{AltitudeKind, quantity::{AtmosphereQuantities, query_atmosphere_at}};
//! use uom::si::{f64::Length, length::foot, pressure::hectopascal};
//!
//! let state = query_atmosphere_at(Length::new::<foot>(36_089.0), AltitudeKind::Geopotential)?;
//! let quantities = AtmosphereQuantities::from(&state);
//! assert!((quantities.pressure.get::<hectopascal>() - 226.32).abs() < 0.1);
//! # Ok::<(), isa_toolkit::IsaError>(())
//! ```

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, KinematicViscosity, Length, MassDensity, Pressure, Ratio,
        ThermodynamicTemperature, Velocity,
    },
    kinematic_viscosity::square_meter_per_second,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::{AerodynamicState, AltitudeKind, AtmosphereState, IsaError, query_atmosphere};

/// Computes the standard atmosphere at an altitude given in any length unit.
///
/// # Errors
///
/// Returns [`IsaError::OutOfRange`] under the same conditions as
/// [`query_atmosphere`].
pub fn query_atmosphere_at(
    altitude: Length,
    kind: AltitudeKind,
) -> Result<AtmosphereState, IsaError> {
    query_atmosphere(altitude.get::<meter>(), kind)
}

/// An [`AtmosphereState`] expressed as typed quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereQuantities {
    pub geometric_altitude: Length,
    pub geopotential_altitude: Length,
    pub temperature: ThermodynamicTemperature,
    pub pressure: Pressure,
    pub density: MassDensity,
    pub speed_of_sound: Velocity,
    pub dynamic_viscosity: DynamicViscosity,
    pub kinematic_viscosity: KinematicViscosity,
}

impl From<&AtmosphereState> for AtmosphereQuantities {
    fn from(state: &AtmosphereState) -> Self {
        Self {
            geometric_altitude: Length::new::<meter>(state.geometric_altitude),
            geopotential_altitude: Length::new::<meter>(state.geopotential_altitude),
            temperature: ThermodynamicTemperature::new::<kelvin>(state.temperature),
            pressure: Pressure::new::<pascal>(state.pressure),
            density: MassDensity::new::<kilogram_per_cubic_meter>(state.density),
            speed_of_sound: Velocity::new::<meter_per_second>(state.speed_of_sound),
            dynamic_viscosity: DynamicViscosity::new::<pascal_second>(state.dynamic_viscosity),
            kinematic_viscosity: KinematicViscosity::new::<square_meter_per_second>(
                state.kinematic_viscosity,
            ),
        }
    }
}

/// An [`AerodynamicState`] expressed as typed quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AerodynamicQuantities {
    pub true_airspeed: Velocity,
    pub equivalent_airspeed: Velocity,
    pub mach: Ratio,
    pub reynolds: Ratio,
    pub dynamic_pressure: Pressure,
    pub stagnation_pressure: Pressure,
}

impl From<&AerodynamicState> for AerodynamicQuantities {
    fn from(state: &AerodynamicState) -> Self {
        Self {
            true_airspeed: Velocity::new::<meter_per_second>(state.true_airspeed),
            equivalent_airspeed: Velocity::new::<meter_per_second>(state.equivalent_airspeed),
            mach: Ratio::new::<ratio>(state.mach),
            reynolds: Ratio::new::<ratio>(state.reynolds),
            dynamic_pressure: Pressure::new::<pascal>(state.dynamic_pressure),
            stagnation_pressure: Pressure::new::<pascal>(state.stagnation_pressure),
        }
    }
}
