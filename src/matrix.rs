use crate::error::MatResult;
use crate::common::fingerprint;
use crate::iter::{IndexedIter, MatrixIter};
use crate::list::ListMatrix;
use crate::shape::Shape;
use crate::transpose::{Transposed, TransposedMut};
use std::hash::Hash;

/// Read-only access to a two-dimensional grid of elements.
///
/// Coordinates are `(x, y)` = (column, row). Implementors only provide
/// [`shape`](Matrix::shape) and [`at`](Matrix::at); everything else is
/// built on those two.
pub trait Matrix {
    type Elem;

    fn shape(&self) -> Shape;

    /// Element at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside [`shape`](Matrix::shape). Use
    /// [`get`](Matrix::get) for a checked lookup.
    fn at(&self, x: usize, y: usize) -> &Self::Elem;

    fn cols(&self) -> usize {
        self.shape().cols()
    }

    fn rows(&self) -> usize {
        self.shape().rows()
    }

    fn get(&self, x: usize, y: usize) -> MatResult<&Self::Elem> {
        self.shape().check(x, y)?;
        Ok(self.at(x, y))
    }

    /// Visits every cell once, rows outermost.
    fn for_each_indexed<F>(&self, mut action: F)
    where
        F: FnMut(usize, usize, &Self::Elem),
    {
        for (x, y) in self.shape().iter() {
            action(x, y, self.at(x, y));
        }
    }

    fn for_each<F>(&self, mut action: F)
    where
        F: FnMut(&Self::Elem),
    {
        self.for_each_indexed(|_, _, v| action(v))
    }

    /// Builds a new list-backed matrix of the same shape from `transform`
    /// applied to every cell. `self` is left untouched.
    fn map_indexed<U, F>(&self, mut transform: F) -> ListMatrix<U>
    where
        F: FnMut(usize, usize, &Self::Elem) -> U,
    {
        let shape = self.shape();
        let list = shape
            .iter()
            .map(|(x, y)| transform(x, y, self.at(x, y)))
            .collect();
        ListMatrix::from_parts(shape, list)
    }

    fn map<U, F>(&self, mut transform: F) -> ListMatrix<U>
    where
        F: FnMut(&Self::Elem) -> U,
    {
        self.map_indexed(|_, _, v| transform(v))
    }

    /// Row-major copy of every element.
    fn to_list(&self) -> Vec<Self::Elem>
    where
        Self::Elem: Clone,
    {
        let mut list = Vec::with_capacity(self.shape().elem_count());
        self.for_each(|v| list.push(v.clone()));
        list
    }

    fn to_mutable_list(&self) -> Vec<Self::Elem>
    where
        Self::Elem: Clone,
    {
        self.to_list()
    }

    fn iter(&self) -> MatrixIter<'_, Self>
    where
        Self: Sized,
    {
        MatrixIter::new(self)
    }

    fn indexed_iter(&self) -> IndexedIter<'_, Self>
    where
        Self: Sized,
    {
        IndexedIter::new(self)
    }

    /// Zero-copy view with rows and columns swapped.
    fn transposed(&self) -> Transposed<'_, Self>
    where
        Self: Sized,
    {
        Transposed::new(self)
    }

    /// Seeded structural hash over the shape and every element.
    fn fingerprint(&self) -> u64
    where
        Self: Sized,
        Self::Elem: Hash,
    {
        fingerprint(self)
    }
}

/// A [`Matrix`] whose elements can be replaced in place. There is no way to
/// resize one.
pub trait MatrixMut: Matrix {
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside [`shape`](Matrix::shape).
    fn at_mut(&mut self, x: usize, y: usize) -> &mut Self::Elem;

    fn set(&mut self, x: usize, y: usize, value: Self::Elem) -> MatResult<()> {
        self.shape().check(x, y)?;
        *self.at_mut(x, y) = value;
        Ok(())
    }

    fn transposed_mut(&mut self) -> TransposedMut<'_, Self>
    where
        Self: Sized,
    {
        TransposedMut::new(self)
    }
}
