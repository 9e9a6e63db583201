use crate::matrix::{Matrix, MatrixMut};
use crate::shape::Shape;

/// Read-only view of `M` with rows and columns swapped.
///
/// Borrows `M`; nothing is copied and every lookup is forwarded with the
/// coordinates exchanged.
#[derive(Debug)]
pub struct Transposed<'a, M: Matrix> {
    original: &'a M,
}

/// Writable view of `M` with rows and columns swapped. Writes land in `M`.
#[derive(Debug)]
pub struct TransposedMut<'a, M: MatrixMut> {
    original: &'a mut M,
}

impl<'a, M: Matrix> Clone for Transposed<'a, M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, M: Matrix> Copy for Transposed<'a, M> {}

impl<'a, M: Matrix> Transposed<'a, M> {
    pub fn new(original: &'a M) -> Self {
        Self { original }
    }

    pub fn original(&self) -> &'a M {
        self.original
    }
}

impl<'a, M: Matrix> Matrix for Transposed<'a, M> {
    type Elem = M::Elem;

    fn shape(&self) -> Shape {
        self.original.shape().transpose()
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> &M::Elem {
        self.shape().assert_contains(x, y);
        self.original.at(y, x)
    }
}

impl<'a, M: MatrixMut> TransposedMut<'a, M> {
    pub fn new(original: &'a mut M) -> Self {
        Self { original }
    }

    /// Downgrades to a read-only view over the same matrix.
    pub fn as_transposed(&self) -> Transposed<'_, M> {
        Transposed::new(&*self.original)
    }
}

impl<'a, M: MatrixMut> Matrix for TransposedMut<'a, M> {
    type Elem = M::Elem;

    fn shape(&self) -> Shape {
        self.original.shape().transpose()
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> &M::Elem {
        self.shape().assert_contains(x, y);
        self.original.at(y, x)
    }
}

impl<'a, M: MatrixMut> MatrixMut for TransposedMut<'a, M> {
    #[inline]
    fn at_mut(&mut self, x: usize, y: usize) -> &mut M::Elem {
        self.shape().assert_contains(x, y);
        self.original.at_mut(y, x)
    }
}

crate::common::impl_matrix_common!(['a, M: Matrix] Transposed<'a, M>, M::Elem);
crate::common::impl_matrix_common!(['a, M: MatrixMut] TransposedMut<'a, M>, M::Elem);

pub fn as_transposed<M: Matrix>(matrix: &M) -> Transposed<'_, M> {
    Transposed::new(matrix)
}

pub fn as_transposed_mut<M: MatrixMut>(matrix: &mut M) -> TransposedMut<'_, M> {
    TransposedMut::new(matrix)
}
