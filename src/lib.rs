//! Generic two-dimensional matrices.
//!
//! A [`ListMatrix`] owns a flat row-major `Vec`; everything else in the
//! crate is either a view over one (see [`Transposed`]) or a function that
//! reads matrices through the [`Matrix`] trait and returns a new
//! [`ListMatrix`].
//!
//! Coordinates are always `(x, y)`, column first:
//!
//! ```
//! use gridmat::{dot, matrix, Matrix};
//!
//! let a = matrix![[1, 2, 3], [4, 5, 6]].unwrap();
//! assert_eq!((a.cols(), a.rows()), (3, 2));
//! assert_eq!(a.get(2, 0), Ok(&3));
//!
//! let b = matrix![[7, 8], [9, 10], [11, 12]].unwrap();
//! assert_eq!(dot(&a, &b).unwrap().to_string(), "[[58, 64], [139, 154]]");
//! ```

mod common;
mod error;
mod iter;
mod list;
mod matrix;
mod op;
mod shape;
mod transpose;

pub use common::matrix_eq;
pub use error::{MatError, MatResult};
pub use iter::{to_matrix, to_mutable_matrix, CollectMatrix, IndexedIter, MatrixIter};
pub use list::{
    create_matrix, create_mutable_matrix, matrix_of, mutable_matrix_of, ListMatrix,
    MutableListMatrix,
};
pub use matrix::{Matrix, MatrixMut};
pub use op::{dot, minus, plus, scalar_times, times, times_scalar, unary_minus, Scalar};
pub use shape::{Shape, ShapeIter};
pub use transpose::{as_transposed, as_transposed_mut, Transposed, TransposedMut};

/// Builds a [`ListMatrix`] from row literals; each bracketed group is one
/// row. Evaluates to a [`MatResult`], failing on jagged rows.
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::ListMatrix::from_rows(vec![$(vec![$($x,)*],)*])
    }};
}

/// Like [`matrix!`], but builds a [`MutableListMatrix`].
#[macro_export]
macro_rules! mutable_matrix {
    ($([$($x:expr),* $(,)*]),+ $(,)*) => {{
        $crate::MutableListMatrix::from_rows(vec![$(vec![$($x,)*],)*])
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_macro() {
        let m = matrix![[1, 2, 3], [4, 5, 6],].unwrap();
        assert_eq!(m.shape(), Shape::new(3, 2));
        assert_eq!(m.to_list(), vec![1, 2, 3, 4, 5, 6]);

        assert!(matrix![[1, 2], [3]].is_err());
    }

    #[test]
    fn test_mutable_matrix_macro() {
        let mut m = mutable_matrix![[0.0, 1.0], [2.0, 3.0]].unwrap();
        m.transposed_mut().set(1, 0, 9.0).unwrap();
        assert_eq!(m.to_string(), "[[0, 1], [9, 3]]");
    }
}
