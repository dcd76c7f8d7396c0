use ndarray::{Array, ArrayView, Dimension};

use crate::{AtmosphereState, IsaError};

use super::Medium;

/// An argument to a batched calculation.
///
/// A scalar applies to every element; an array supplies one value per element
/// and fixes the shape of the result.
#[derive(Debug, Clone)]
pub enum Operand<'a, D: Dimension> {
    Scalar(f64),
    Array(ArrayView<'a, f64, D>),
}

impl<D: Dimension> From<f64> for Operand<'_, D> {
    fn from(value: f64) -> Self {
        Operand::Scalar(value)
    }
}

impl<'a, D: Dimension> From<&'a Array<f64, D>> for Operand<'a, D> {
    fn from(array: &'a Array<f64, D>) -> Self {
        Operand::Array(array.view())
    }
}

impl<'a, D: Dimension> From<ArrayView<'a, f64, D>> for Operand<'a, D> {
    fn from(view: ArrayView<'a, f64, D>) -> Self {
        Operand::Array(view)
    }
}

impl<D: Dimension> Operand<'_, D> {
    fn dim(&self) -> Option<D> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Array(view) => Some(view.raw_dim()),
        }
    }

    /// Expands the operand to an owned array of shape `dim`.
    ///
    /// Array operands must already have shape `dim`.
    pub(super) fn broadcast(&self, dim: &D) -> Array<f64, D> {
        match self {
            Operand::Scalar(value) => Array::from_elem(dim.clone(), *value),
            Operand::Array(view) => view.to_owned(),
        }
    }
}

/// The atmosphere of a batched calculation.
///
/// A uniform atmosphere applies to every element; a varying atmosphere is a
/// batched state with one thermodynamic state per element.
#[derive(Debug, Clone)]
pub enum Ambient<'a, D: Dimension> {
    Uniform(&'a AtmosphereState),
    Varying(&'a AtmosphereState<Array<f64, D>>),
}

impl<'a, D: Dimension> From<&'a AtmosphereState> for Ambient<'a, D> {
    fn from(state: &'a AtmosphereState) -> Self {
        Ambient::Uniform(state)
    }
}

impl<'a, D: Dimension> From<&'a AtmosphereState<Array<f64, D>>> for Ambient<'a, D> {
    fn from(state: &'a AtmosphereState<Array<f64, D>>) -> Self {
        Ambient::Varying(state)
    }
}

impl<'a, D: Dimension> Ambient<'a, D> {
    /// Extracts the properties the aerodynamic formulas consume.
    pub(super) fn medium(&self) -> Medium<Operand<'a, D>> {
        match *self {
            Ambient::Uniform(state) => Medium {
                density: Operand::Scalar(state.density),
                speed_of_sound: Operand::Scalar(state.speed_of_sound),
                dynamic_viscosity: Operand::Scalar(state.dynamic_viscosity),
                pressure: Operand::Scalar(state.pressure),
            },
            Ambient::Varying(state) => Medium {
                density: (&state.density).into(),
                speed_of_sound: (&state.speed_of_sound).into(),
                dynamic_viscosity: (&state.dynamic_viscosity).into(),
                pressure: (&state.pressure).into(),
            },
        }
    }
}

/// Resolves the shape shared by every array operand.
///
/// # Errors
///
/// Returns [`IsaError::ShapeMismatch`] if two array operands differ in shape,
/// or [`IsaError::InvalidArgument`] if no operand is an array.
pub(super) fn common_dim<D: Dimension>(operands: &[&Operand<'_, D>]) -> Result<D, IsaError> {
    let mut dims = operands.iter().filter_map(|operand| operand.dim());

    let expected = dims.next().ok_or_else(|| {
        IsaError::InvalidArgument(
            "batched evaluation needs at least one array operand".to_string(),
        )
    })?;

    match dims.find(|dim| *dim != expected) {
        Some(found) => Err(IsaError::ShapeMismatch {
            expected: expected.slice().to_vec(),
            found: found.slice().to_vec(),
        }),
        None => Ok(expected),
    }
}
