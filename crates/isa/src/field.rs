use std::fmt::Debug;

use ndarray::{Array, Dimension, Zip};

/// A container of `f64` samples that every operation maps over element-wise.
///
/// `Field` is implemented for `f64`, representing a single sample, and for
/// `ndarray::Array<f64, D>` of any dimension.
/// Values derived from a field keep its type, so the shape of an input
/// altitude or speed is carried through to every output.
pub trait Field: Clone + Debug + PartialEq {
    /// Applies `f` to every sample.
    #[must_use]
    fn map(&self, f: impl Fn(f64) -> f64) -> Self;

    /// Combines two fields sample by sample.
    ///
    /// # Panics
    ///
    /// Panics if the two fields do not have the same shape.
    #[must_use]
    fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self;

    /// Iterates over the samples in logical order.
    fn values(&self) -> impl Iterator<Item = f64> + '_;

    /// Returns the number of samples.
    fn len(&self) -> usize {
        self.values().count()
    }

    /// Returns `true` if the field holds no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Field for f64 {
    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        f(*self)
    }

    fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        f(*self, *other)
    }

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        std::iter::once(*self)
    }

    fn len(&self) -> usize {
        1
    }
}

impl<D: Dimension> Field for Array<f64, D> {
    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        self.mapv(f)
    }

    fn zip_map(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Zip::from(self).and(other).map_collect(|&a, &b| f(a, b))
    }

    fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().copied()
    }

    fn len(&self) -> usize {
        Array::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::{Array2, array};

    #[test]
    fn scalar_is_a_single_sample() {
        let x = 2.0_f64;
        assert_eq!(Field::map(&x, |v| v * 3.0), 6.0);
        assert_eq!(x.zip_map(&5.0, |a, b| a + b), 7.0);
        assert_eq!(Field::len(&x), 1);
        assert_eq!(x.values().collect::<Vec<_>>(), vec![2.0]);
    }

    #[test]
    fn array_keeps_its_shape() {
        let a: Array2<f64> = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let doubled = Field::map(&a, |v| v * 2.0);
        assert_eq!(doubled.shape(), &[2, 3]);
        assert_eq!(doubled, array![[2.0, 4.0, 6.0], [8.0, 10.0, 12.0]]);

        let summed = a.zip_map(&doubled, |x, y| x + y);
        assert_eq!(summed[[1, 2]], 18.0);
        assert_eq!(Field::len(&a), 6);
    }

    #[test]
    #[should_panic]
    fn zip_map_rejects_different_shapes() {
        let a = array![1.0, 2.0];
        let b = array![1.0, 2.0, 3.0];
        let _ = a.zip_map(&b, |x, y| x + y);
    }
}
