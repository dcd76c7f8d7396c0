//! International Standard Atmosphere (1976) and derived aerodynamic state.
//!
//! The crate is organized around two models:
//!
//! - [`query_atmosphere`] maps a geometric or geopotential altitude to the
//!   thermodynamic state of the standard atmosphere (0–32 km geopotential)
//! - [`compute_aerodynamic_state`] and [`compute_aerodynamic_states`] combine
//!   an atmosphere state with a speed to derive airspeeds, Mach, Reynolds
//!   number and pressures
//!
//! Every operation is generic over a [`Field`], so a scalar `f64` altitude
//! yields a scalar state and an `ndarray` altitude yields a state whose fields
//! have the same shape.
//!
//! ```
//! use isa_toolkit::{AltitudeKind, SpeedKind, compute_aerodynamic_state, query_atmosphere};
//!
//! let atmosphere = query_atmosphere(11_000.0, AltitudeKind::Geopotential)?;
//! assert!((atmosphere.temperature - 216.65).abs() < 1e-9);
//!
//! let aero = compute_aerodynamic_state(0.8, SpeedKind::Mach, &atmosphere, 1.0);
//! assert!((aero.mach - 0.8).abs() < 1e-12);
//! # Ok::<(), isa_toolkit::IsaError>(())
//! ```

mod error;
mod field;

pub mod aerodynamics;
pub mod altitude;
pub mod atmosphere;
pub mod constants;
pub mod quantity;

pub use aerodynamics::{
    AerodynamicState, Ambient, Operand, SpeedKind, compute_aerodynamic_state,
    compute_aerodynamic_states,
};
pub use altitude::{AltitudeKind, geometric_to_geopotential, geopotential_to_geometric};
pub use atmosphere::{AtmosphereState, query_atmosphere, sea_level_atmosphere};
pub use error::IsaError;
pub use field::Field;
