//! Airspeed conversions and derived aerodynamic quantities.

mod operand;
mod speed;
mod state;

use log::trace;
use ndarray::{Array, Dimension};

use crate::{AtmosphereState, Field, IsaError, sea_level_atmosphere};

pub use operand::{Ambient, Operand};
pub use speed::SpeedKind;
pub use state::AerodynamicState;

use operand::common_dim;

/// The atmosphere properties consumed by the aerodynamic formulas.
#[derive(Debug, Clone)]
pub(crate) struct Medium<T> {
    density: T,
    speed_of_sound: T,
    dynamic_viscosity: T,
    pressure: T,
}

/// Computes the aerodynamic state for a single speed and atmosphere.
///
/// `speed` is interpreted according to `kind`; `characteristic_length` in
/// meters only affects the Reynolds number (see
/// [`DEFAULT_CHARACTERISTIC_LENGTH`](crate::constants::DEFAULT_CHARACTERISTIC_LENGTH)).
/// Equivalent airspeed is referenced to [`sea_level_atmosphere`] density.
#[must_use]
pub fn compute_aerodynamic_state(
    speed: f64,
    kind: SpeedKind,
    atmosphere: &AtmosphereState,
    characteristic_length: f64,
) -> AerodynamicState {
    let medium = Medium {
        density: atmosphere.density,
        speed_of_sound: atmosphere.speed_of_sound,
        dynamic_viscosity: atmosphere.dynamic_viscosity,
        pressure: atmosphere.pressure,
    };

    evaluate(speed, kind, &medium, &characteristic_length)
}

/// Computes the aerodynamic state element-wise over a batch.
///
/// Each of `speed`, `atmosphere` and `characteristic_length` is either uniform
/// (a scalar, or a single [`AtmosphereState`]) or batched (an array, or a
/// batched state).
/// Uniform arguments are broadcast; all batched arguments must share one
/// shape, which is the shape of every output field.
///
/// # Errors
///
/// Returns [`IsaError::ShapeMismatch`] if batched arguments differ in shape,
/// and [`IsaError::InvalidArgument`] if no argument is batched.
pub fn compute_aerodynamic_states<'a, D: Dimension + 'a>(
    speed: impl Into<Operand<'a, D>>,
    kind: SpeedKind,
    atmosphere: impl Into<Ambient<'a, D>>,
    characteristic_length: impl Into<Operand<'a, D>>,
) -> Result<AerodynamicState<Array<f64, D>>, IsaError> {
    let speed = speed.into();
    let length = characteristic_length.into();
    let medium = atmosphere.into().medium();

    let dim = common_dim(&[
        &speed,
        &medium.density,
        &medium.speed_of_sound,
        &medium.dynamic_viscosity,
        &medium.pressure,
        &length,
    ])?;
    trace!("evaluating aerodynamic state over shape {:?}", dim.slice());

    let medium = Medium {
        density: medium.density.broadcast(&dim),
        speed_of_sound: medium.speed_of_sound.broadcast(&dim),
        dynamic_viscosity: medium.dynamic_viscosity.broadcast(&dim),
        pressure: medium.pressure.broadcast(&dim),
    };

    Ok(evaluate(
        speed.broadcast(&dim),
        kind,
        &medium,
        &length.broadcast(&dim),
    ))
}

fn evaluate<F: Field>(
    speed: F,
    kind: SpeedKind,
    medium: &Medium<F>,
    characteristic_length: &F,
) -> AerodynamicState<F> {
    let rho0 = sea_level_atmosphere().density;
    let equivalent = move |tas: f64, rho: f64| tas * (rho / rho0).sqrt();

    let (true_airspeed, equivalent_airspeed) = match kind {
        SpeedKind::Tas => {
            let eas = speed.zip_map(&medium.density, equivalent);
            (speed, eas)
        }
        SpeedKind::Eas => {
            let tas = speed.zip_map(&medium.density, |eas, rho| eas * (rho0 / rho).sqrt());
            (tas, speed)
        }
        SpeedKind::Mach => {
            let tas = speed.zip_map(&medium.speed_of_sound, |mach, a| mach * a);
            let eas = tas.zip_map(&medium.density, equivalent);
            (tas, eas)
        }
    };

    let mach = true_airspeed.zip_map(&medium.speed_of_sound, |tas, a| tas / a);
    let reynolds = true_airspeed
        .zip_map(&medium.density, |tas, rho| tas * rho)
        .zip_map(characteristic_length, |flux, length| flux * length)
        .zip_map(&medium.dynamic_viscosity, |inertial, mu| inertial / mu);
    let dynamic_pressure = true_airspeed.zip_map(&medium.density, |tas, rho| 0.5 * rho * tas * tas);
    let stagnation_pressure = dynamic_pressure.zip_map(&medium.pressure, |q, p| q + p);

    AerodynamicState {
        true_airspeed,
        equivalent_airspeed,
        mach,
        reynolds,
        dynamic_pressure,
        stagnation_pressure,
    }
}
