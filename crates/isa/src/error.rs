use thiserror::Error;

/// Errors that may occur when evaluating the atmosphere or aerodynamic state.
///
/// Every error describes a violated caller contract.
/// A failed call never produces partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IsaError {
    /// An altitude falls outside the supported geopotential range.
    ///
    /// Carries the first offending geopotential altitude in meters.
    /// A `NaN` altitude is always out of range.
    #[error(
        "geopotential altitude {geopotential_altitude} m is outside the supported range [{min}, {max}] m"
    )]
    OutOfRange {
        geopotential_altitude: f64,
        min: f64,
        max: f64,
    },

    /// An argument is not one of the accepted values.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Batched arguments do not share a common shape.
    #[error("shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
}
