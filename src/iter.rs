use crate::error::{MatError, MatResult};
use crate::list::{ListMatrix, MutableListMatrix};
use crate::matrix::Matrix;
use crate::shape::{Shape, ShapeIter};

/// Row-major iterator over the elements of any [`Matrix`].
pub struct MatrixIter<'a, M: Matrix> {
    matrix: &'a M,
    coords: ShapeIter,
}

impl<'a, M: Matrix> MatrixIter<'a, M> {
    pub(crate) fn new(matrix: &'a M) -> Self {
        Self {
            matrix,
            coords: matrix.shape().iter(),
        }
    }
}

impl<'a, M: Matrix> Iterator for MatrixIter<'a, M> {
    type Item = &'a M::Elem;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (x, y) = self.coords.next()?;
        Some(self.matrix.at(x, y))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.coords.size_hint()
    }
}

impl<'a, M: Matrix> ExactSizeIterator for MatrixIter<'a, M> {}

/// Like [`MatrixIter`], but yields `(x, y, &elem)`.
pub struct IndexedIter<'a, M: Matrix> {
    matrix: &'a M,
    coords: ShapeIter,
}

impl<'a, M: Matrix> IndexedIter<'a, M> {
    pub(crate) fn new(matrix: &'a M) -> Self {
        Self {
            matrix,
            coords: matrix.shape().iter(),
        }
    }
}

impl<'a, M: Matrix> Iterator for IndexedIter<'a, M> {
    type Item = (usize, usize, &'a M::Elem);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (x, y) = self.coords.next()?;
        Some((x, y, self.matrix.at(x, y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.coords.size_hint()
    }
}

impl<'a, M: Matrix> ExactSizeIterator for IndexedIter<'a, M> {}

// Pulls exactly `cols * rows` items and never touches the rest.
fn take_exact<I>(iter: I, cols: usize, rows: usize) -> MatResult<(Shape, Vec<I::Item>)>
where
    I: IntoIterator,
{
    let shape = Shape::non_empty(cols, rows)?;
    let expected = shape.elem_count();
    let list: Vec<_> = iter.into_iter().take(expected).collect();
    if list.len() < expected {
        log::debug!(
            "{shape} matrix needs {expected} elements, sequence had {}",
            list.len()
        );
        return Err(MatError::InsufficientElements {
            expected,
            got: list.len(),
        });
    }
    Ok((shape, list))
}

/// Fills a `cols x rows` matrix in row-major order from the first
/// `cols * rows` items of `iter`. Remaining items are not consumed, so
/// passing `it.by_ref()` leaves the tail in `it`.
pub fn to_matrix<I>(iter: I, cols: usize, rows: usize) -> MatResult<ListMatrix<I::Item>>
where
    I: IntoIterator,
{
    let (shape, list) = take_exact(iter, cols, rows)?;
    Ok(ListMatrix::from_parts(shape, list))
}

pub fn to_mutable_matrix<I>(
    iter: I,
    cols: usize,
    rows: usize,
) -> MatResult<MutableListMatrix<I::Item>>
where
    I: IntoIterator,
{
    to_matrix(iter, cols, rows).map(ListMatrix::into_mutable)
}

/// `collect`-style sugar for [`to_matrix`] on any iterator.
pub trait CollectMatrix: Iterator + Sized {
    fn collect_matrix(self, cols: usize, rows: usize) -> MatResult<ListMatrix<Self::Item>> {
        to_matrix(self, cols, rows)
    }

    fn collect_mutable_matrix(
        self,
        cols: usize,
        rows: usize,
    ) -> MatResult<MutableListMatrix<Self::Item>> {
        to_mutable_matrix(self, cols, rows)
    }
}

impl<I: Iterator> CollectMatrix for I {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{matrix_of, MatrixMut};

    #[test]
    fn test_iter() {
        let m = matrix_of(2, 2, vec![1, 2, 3, 4]).unwrap();
        let it = m.iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.copied().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        let t: Vec<_> = m.transposed().iter().copied().collect();
        assert_eq!(t, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_indexed_iter() {
        let m = matrix_of(2, 2, vec!['a', 'b', 'c', 'd']).unwrap();
        let v: Vec<_> = m.indexed_iter().map(|(x, y, c)| (x, y, *c)).collect();
        assert_eq!(
            v,
            vec![(0, 0, 'a'), (1, 0, 'b'), (0, 1, 'c'), (1, 1, 'd')]
        );
    }

    #[test]
    fn test_to_matrix_exact() {
        let m = to_matrix(1..=6, 3, 2).unwrap();
        assert_eq!(m.to_string(), "[[1, 2, 3], [4, 5, 6]]");
    }

    #[test]
    fn test_to_matrix_short() {
        assert_eq!(
            to_matrix(1..=5, 3, 2).unwrap_err(),
            MatError::InsufficientElements {
                expected: 6,
                got: 5
            }
        );
        assert!(to_mutable_matrix(Vec::<u8>::new(), 1, 1).is_err());
    }

    #[test]
    fn test_to_matrix_overflow() {
        let mut it = 0..3u8;
        assert_eq!(
            to_matrix(it.by_ref(), usize::MAX / 2 + 1, 2).unwrap_err(),
            MatError::ShapeOverflow(Shape::new(usize::MAX / 2 + 1, 2))
        );
        assert_eq!(it.next(), Some(0));
    }

    #[test]
    fn test_to_matrix_leaves_tail() {
        let mut it = 1..10;
        let m = to_matrix(it.by_ref(), 2, 2).unwrap();
        assert_eq!(m.to_list(), vec![1, 2, 3, 4]);
        assert_eq!(it.next(), Some(5));
    }

    #[test]
    fn test_collect_matrix() {
        let mut m = "abcdef".chars().collect_mutable_matrix(2, 3).unwrap();
        m.set(0, 0, 'z').unwrap();
        assert_eq!(m.to_string(), "[[z, b], [c, d], [e, f]]");

        let squares = (0..).map(|i| i * i).collect_matrix(2, 2).unwrap();
        assert_eq!(squares.to_list(), vec![0, 1, 4, 9]);
    }

    #[test]
    fn test_round_trip() {
        let m = matrix_of(3, 2, vec![1.0, -2.0, 3.5, 0.0, 7.25, 8.0]).unwrap();
        let back = to_matrix(m.to_list(), m.cols(), m.rows()).unwrap();
        assert_eq!(back, m);
    }
}
