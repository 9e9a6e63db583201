use super::error::{MatError, MatResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dimensions of a matrix, in `(cols, rows)` order.
///
/// Coordinates throughout the crate are written `(x, y)`: `x` selects the
/// column and `y` the row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shape {
    cols: usize,
    rows: usize,
}

impl Shape {
    pub const fn new(cols: usize, rows: usize) -> Shape {
        Shape { cols, rows }
    }

    /// Like [`Shape::new`], but refuses a zero-sized axis and any shape
    /// whose element count does not fit in a `usize`.
    pub fn non_empty(cols: usize, rows: usize) -> MatResult<Shape> {
        let s = Shape::new(cols, rows);
        if cols == 0 || rows == 0 {
            return Err(MatError::EmptyShape(s));
        }
        if cols.checked_mul(rows).is_none() {
            return Err(MatError::ShapeOverflow(s));
        }
        Ok(s)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn elem_count(&self) -> usize {
        self.cols * self.rows
    }

    // row-major: [x, y] => strides [1, cols]
    pub fn strides(&self) -> (usize, usize) {
        (1, self.cols)
    }

    /// Flat offset of `(x, y)` in row-major storage. Does not check bounds.
    #[inline]
    pub fn stride_offset(&self, x: usize, y: usize) -> usize {
        let (sx, sy) = self.strides();
        x * sx + y * sy
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.cols && y < self.rows
    }

    #[inline]
    pub fn check(&self, x: usize, y: usize) -> MatResult<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(MatError::IndexOutOfRange { x, y, shape: *self })
        }
    }

    #[inline]
    #[track_caller]
    pub(crate) fn assert_contains(&self, x: usize, y: usize) {
        assert!(
            self.contains(x, y),
            "index ({x}, {y}) out of range for {self} matrix"
        );
    }

    pub fn transpose(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Row-major walk over every coordinate of this shape.
    pub fn iter(&self) -> ShapeIter {
        ShapeIter {
            shape: *self,
            index: if self.cols == 0 || self.rows == 0 {
                None
            } else {
                Some((0, 0))
            },
        }
    }

    #[inline]
    fn next_for(&self, (x, y): (usize, usize)) -> Option<(usize, usize)> {
        if x + 1 < self.cols {
            Some((x + 1, y))
        } else if y + 1 < self.rows {
            Some((0, y + 1))
        } else {
            None
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.cols, self.rows)
    }
}

#[derive(Clone, Debug)]
pub struct ShapeIter {
    shape: Shape,
    index: Option<(usize, usize)>,
}

impl Iterator for ShapeIter {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.index?;
        self.index = self.shape.next_for(cur);
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = match self.index {
            Some((x, y)) => self.shape.elem_count() - self.shape.stride_offset(x, y),
            None => 0,
        };
        (n, Some(n))
    }
}

impl ExactSizeIterator for ShapeIter {}
