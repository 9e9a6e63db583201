use crate::error::{MatError, MatResult};
use crate::matrix::{Matrix, MatrixMut};
use crate::shape::Shape;
use std::ops::{Index, IndexMut};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The only owning matrix: a flat row-major `Vec` of exactly
/// `cols * rows` elements. Cell `(x, y)` lives at `y * cols + x`.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "RawListMatrix<T>")
)]
pub struct ListMatrix<T> {
    shape: Shape,
    list: Vec<T>,
}

/// A [`ListMatrix`] that also exposes [`MatrixMut`].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct MutableListMatrix<T> {
    inner: ListMatrix<T>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawListMatrix<T> {
    shape: Shape,
    list: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T> TryFrom<RawListMatrix<T>> for ListMatrix<T> {
    type Error = MatError;

    fn try_from(raw: RawListMatrix<T>) -> MatResult<Self> {
        ListMatrix::new(raw.shape.cols(), raw.shape.rows(), raw.list)
    }
}

impl<T> ListMatrix<T> {
    pub fn new(cols: usize, rows: usize, list: Vec<T>) -> MatResult<Self> {
        let shape = Shape::non_empty(cols, rows)?;
        if list.len() != shape.elem_count() {
            return Err(MatError::LengthMismatch {
                expected: shape.elem_count(),
                got: list.len(),
            });
        }
        Ok(Self::from_parts(shape, list))
    }

    /// Calls `init(x, y)` once per cell, in row-major order.
    pub fn from_fn<F>(cols: usize, rows: usize, mut init: F) -> MatResult<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        let shape = Shape::non_empty(cols, rows)?;
        let list = shape.iter().map(|(x, y)| init(x, y)).collect();
        Ok(Self::from_parts(shape, list))
    }

    /// Each inner `Vec` is one row, so
    /// `from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]])` has 3 columns and 2 rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> MatResult<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let shape = Shape::non_empty(cols, rows.len())?;
        let mut list = Vec::with_capacity(shape.elem_count());
        for row in rows {
            if row.len() != cols {
                return Err(MatError::LengthMismatch {
                    expected: cols,
                    got: row.len(),
                });
            }
            list.extend(row);
        }
        Ok(Self::from_parts(shape, list))
    }

    pub(crate) fn from_parts(shape: Shape, list: Vec<T>) -> Self {
        debug_assert_eq!(shape.elem_count(), list.len());
        log::trace!("list matrix {shape}");
        Self { shape, list }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.list
    }

    /// Moves the backing storage out.
    pub fn into_vec(self) -> Vec<T> {
        self.list
    }

    pub fn into_mutable(self) -> MutableListMatrix<T> {
        MutableListMatrix { inner: self }
    }
}

impl<T> Matrix for ListMatrix<T> {
    type Elem = T;

    fn shape(&self) -> Shape {
        self.shape
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> &T {
        self.shape.assert_contains(x, y);
        &self.list[self.shape.stride_offset(x, y)]
    }
}

impl<T> Index<(usize, usize)> for ListMatrix<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        self.at(x, y)
    }
}

impl<T> MutableListMatrix<T> {
    pub fn new(cols: usize, rows: usize, list: Vec<T>) -> MatResult<Self> {
        ListMatrix::new(cols, rows, list).map(ListMatrix::into_mutable)
    }

    pub fn from_fn<F>(cols: usize, rows: usize, init: F) -> MatResult<Self>
    where
        F: FnMut(usize, usize) -> T,
    {
        ListMatrix::from_fn(cols, rows, init).map(ListMatrix::into_mutable)
    }

    pub fn from_rows(rows: Vec<Vec<T>>) -> MatResult<Self> {
        ListMatrix::from_rows(rows).map(ListMatrix::into_mutable)
    }

    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.inner.list
    }

    pub fn into_vec(self) -> Vec<T> {
        self.inner.into_vec()
    }

    /// Gives up write access.
    pub fn freeze(self) -> ListMatrix<T> {
        self.inner
    }
}

impl<T> Matrix for MutableListMatrix<T> {
    type Elem = T;

    fn shape(&self) -> Shape {
        self.inner.shape
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> &T {
        self.inner.at(x, y)
    }
}

impl<T> MatrixMut for MutableListMatrix<T> {
    #[inline]
    fn at_mut(&mut self, x: usize, y: usize) -> &mut T {
        let shape = self.inner.shape;
        assert!(
            shape.contains(x, y),
            "index ({x}, {y}) out of range for {shape} matrix"
        );
        &mut self.inner.list[shape.stride_offset(x, y)]
    }
}

impl<T> Index<(usize, usize)> for MutableListMatrix<T> {
    type Output = T;

    fn index(&self, (x, y): (usize, usize)) -> &T {
        self.at(x, y)
    }
}

impl<T> IndexMut<(usize, usize)> for MutableListMatrix<T> {
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut T {
        self.at_mut(x, y)
    }
}

impl<T> From<MutableListMatrix<T>> for ListMatrix<T> {
    fn from(m: MutableListMatrix<T>) -> Self {
        m.freeze()
    }
}

impl<T> From<ListMatrix<T>> for MutableListMatrix<T> {
    fn from(m: ListMatrix<T>) -> Self {
        m.into_mutable()
    }
}

crate::common::impl_matrix_common!([T] ListMatrix<T>, T);
crate::common::impl_matrix_common!([T] MutableListMatrix<T>, T);

/// Read-only matrix over `elements`, which must hold exactly `cols * rows`
/// values in row-major order.
pub fn matrix_of<T>(cols: usize, rows: usize, elements: Vec<T>) -> MatResult<ListMatrix<T>> {
    ListMatrix::new(cols, rows, elements)
}

pub fn mutable_matrix_of<T>(
    cols: usize,
    rows: usize,
    elements: Vec<T>,
) -> MatResult<MutableListMatrix<T>> {
    MutableListMatrix::new(cols, rows, elements)
}

pub fn create_matrix<T, F>(cols: usize, rows: usize, init: F) -> MatResult<ListMatrix<T>>
where
    F: FnMut(usize, usize) -> T,
{
    ListMatrix::from_fn(cols, rows, init)
}

pub fn create_mutable_matrix<T, F>(
    cols: usize,
    rows: usize,
    init: F,
) -> MatResult<MutableListMatrix<T>>
where
    F: FnMut(usize, usize) -> T,
{
    MutableListMatrix::from_fn(cols, rows, init)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_of() {
        let m = matrix_of(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.cols(), 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m[(1, 1)], 5);
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            matrix_of(3, 2, vec![1, 2, 3, 4, 5]).unwrap_err(),
            MatError::LengthMismatch {
                expected: 6,
                got: 5
            }
        );
        assert!(mutable_matrix_of(1, 1, vec![1, 2]).is_err());
    }

    #[test]
    fn test_empty_shape() {
        assert_eq!(
            matrix_of::<i32>(0, 2, vec![]).unwrap_err(),
            MatError::EmptyShape(Shape::new(0, 2))
        );
        assert!(create_matrix(2, 0, |_, _| 0).is_err());
    }

    #[test]
    fn test_shape_overflow() {
        assert_eq!(
            matrix_of::<u8>(usize::MAX, 2, vec![0]).unwrap_err(),
            MatError::ShapeOverflow(Shape::new(usize::MAX, 2))
        );
        assert!(create_mutable_matrix(2, usize::MAX, |_, _| 0u8).is_err());
    }

    #[test]
    fn test_create_matrix() {
        let mut calls = Vec::new();
        let m = create_matrix(2, 3, |x, y| {
            calls.push((x, y));
            (x + 1) * (y + 1)
        })
        .unwrap();
        assert_eq!(calls, vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
        for (x, y) in m.shape().iter() {
            assert_eq!(m.at(x, y), &((x + 1) * (y + 1)));
        }
    }

    #[test]
    fn test_from_rows() {
        let m = ListMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.shape(), Shape::new(3, 2));
        assert_eq!(m.into_vec(), vec![1, 2, 3, 4, 5, 6]);

        assert_eq!(
            ListMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err(),
            MatError::LengthMismatch {
                expected: 2,
                got: 1
            }
        );
        assert!(ListMatrix::<u8>::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_index_mut() {
        let mut m = create_mutable_matrix(2, 2, |x, y| x + y).unwrap();
        m[(0, 1)] = 9;
        *m.at_mut(1, 1) += 10;
        assert_eq!(m.as_slice(), &[0, 1, 9, 12]);
        m.as_mut_slice()[0] = 4;
        assert_eq!(m.freeze().to_list(), vec![4, 1, 9, 12]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_at_out_of_range() {
        let m = matrix_of(2, 2, vec![1, 2, 3, 4]).unwrap();
        m.at(2, 0);
    }

    #[test]
    fn test_mutable_round_trip() {
        let m = matrix_of(2, 1, vec!['a', 'b']).unwrap();
        let mut mm = m.clone().into_mutable();
        assert_eq!(mm, m);
        mm.set(0, 0, 'z').unwrap();
        assert_ne!(mm, m);
        let back: ListMatrix<char> = mm.into();
        assert_eq!(back.to_list(), vec!['z', 'b']);
    }
}
