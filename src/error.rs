use crate::shape::Shape;
use thiserror::Error;

pub type MatResult<T> = Result<T, MatError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("index ({x}, {y}) out of range for {shape} matrix")]
    IndexOutOfRange { x: usize, y: usize, shape: Shape },
    #[error("expected {expected} elements, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("not enough elements: expected {expected}, sequence ended after {got}")]
    InsufficientElements { expected: usize, got: usize },
    #[error("dimension mismatch in {op}: {lhs} vs {rhs}")]
    DimensionMismatch {
        op: &'static str,
        lhs: Shape,
        rhs: Shape,
    },
    #[error("matrix dimensions must be positive, got {0}")]
    EmptyShape(Shape),
    #[error("{0} matrix has more elements than fit in memory")]
    ShapeOverflow(Shape),
}

impl MatError {
    pub(crate) fn mismatch(op: &'static str, lhs: Shape, rhs: Shape) -> Self {
        log::debug!("{op}: rejected operands {lhs} and {rhs}");
        MatError::DimensionMismatch { op, lhs, rhs }
    }
}
