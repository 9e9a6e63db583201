use crate::error::{MatError, MatResult};
use crate::list::{ListMatrix, MutableListMatrix};
use crate::matrix::Matrix;
use crate::shape::Shape;
use half::f16;
use num_traits::Num;
use std::ops::Neg;

/// Element types the arithmetic operators accept.
pub trait Scalar: Copy + Num {}

impl<T: Copy + Num> Scalar for T {}

fn zip_with<A, B, T, F>(op: &'static str, a: &A, b: &B, f: F) -> MatResult<ListMatrix<T>>
where
    A: Matrix<Elem = T>,
    B: Matrix<Elem = T>,
    T: Copy,
    F: Fn(T, T) -> T,
{
    if a.shape() != b.shape() {
        return Err(MatError::mismatch(op, a.shape(), b.shape()));
    }
    Ok(a.map_indexed(|x, y, &v| f(v, *b.at(x, y))))
}

/// Element-wise sum. Both operands must have the same shape.
pub fn plus<A, B, T>(a: &A, b: &B) -> MatResult<ListMatrix<T>>
where
    A: Matrix<Elem = T>,
    B: Matrix<Elem = T>,
    T: Scalar,
{
    zip_with("plus", a, b, |p, q| p + q)
}

pub fn unary_minus<A, T>(a: &A) -> ListMatrix<T>
where
    A: Matrix<Elem = T>,
    T: Scalar + Neg<Output = T>,
{
    a.map(|&v| -v)
}

/// `plus(a, unary_minus(b))`.
pub fn minus<A, B, T>(a: &A, b: &B) -> MatResult<ListMatrix<T>>
where
    A: Matrix<Elem = T>,
    B: Matrix<Elem = T>,
    T: Scalar + Neg<Output = T>,
{
    if a.shape() != b.shape() {
        return Err(MatError::mismatch("minus", a.shape(), b.shape()));
    }
    plus(a, &unary_minus(b))
}

/// Element-wise (Hadamard) product; see [`dot`] for the matrix product.
pub fn times<A, B, T>(a: &A, b: &B) -> MatResult<ListMatrix<T>>
where
    A: Matrix<Elem = T>,
    B: Matrix<Elem = T>,
    T: Scalar,
{
    zip_with("times", a, b, |p, q| p * q)
}

pub fn times_scalar<A, T>(a: &A, k: T) -> ListMatrix<T>
where
    A: Matrix<Elem = T>,
    T: Scalar,
{
    a.map(|&v| v * k)
}

pub fn scalar_times<A, T>(k: T, a: &A) -> ListMatrix<T>
where
    A: Matrix<Elem = T>,
    T: Scalar,
{
    times_scalar(a, k)
}

/// Matrix product `a · b`.
///
/// Requires `a.cols() == b.rows()`. The result has `b.cols()` columns and
/// `a.rows()` rows, and cell `(x, y)` is the sum over `i` of
/// `a.at(i, y) * b.at(x, i)`: row `y` of `a` against column `x` of `b`.
pub fn dot<A, B, T>(a: &A, b: &B) -> MatResult<ListMatrix<T>>
where
    A: Matrix<Elem = T>,
    B: Matrix<Elem = T>,
    T: Scalar,
{
    if a.cols() != b.rows() {
        return Err(MatError::mismatch("dot", a.shape(), b.shape()));
    }
    let shape = Shape::non_empty(b.cols(), a.rows())?;
    log::trace!("dot {} x {} -> {shape}", a.shape(), b.shape());
    let n = a.cols();
    let list = shape
        .iter()
        .map(|(x, y)| (0..n).fold(T::zero(), |acc, i| acc + *a.at(i, y) * *b.at(x, i)))
        .collect();
    Ok(ListMatrix::from_parts(shape, list))
}

macro_rules! impl_binary_op {
    ($ty:ident, $trt:ident, $mth:ident, $f:ident $(, $extra:path)?) => {
        impl<T, R> std::ops::$trt<&R> for &$ty<T>
        where
            T: Scalar $(+ $extra)?,
            R: Matrix<Elem = T>,
        {
            type Output = MatResult<ListMatrix<T>>;
            fn $mth(self, rhs: &R) -> Self::Output {
                $f(self, rhs)
            }
        }

        impl<T, R> std::ops::$trt<&R> for $ty<T>
        where
            T: Scalar $(+ $extra)?,
            R: Matrix<Elem = T>,
        {
            type Output = MatResult<ListMatrix<T>>;
            fn $mth(self, rhs: &R) -> Self::Output {
                $f(&self, rhs)
            }
        }
    };
}

macro_rules! impl_neg {
    ($ty:ident) => {
        impl<T> Neg for &$ty<T>
        where
            T: Scalar + Neg<Output = T>,
        {
            type Output = ListMatrix<T>;
            fn neg(self) -> Self::Output {
                unary_minus(self)
            }
        }

        impl<T> Neg for $ty<T>
        where
            T: Scalar + Neg<Output = T>,
        {
            type Output = ListMatrix<T>;
            fn neg(self) -> Self::Output {
                unary_minus(&self)
            }
        }
    };
}

// `matrix * k` and `k * matrix` for concrete element types; a blanket
// `Mul<T>` would overlap with the element-wise `Mul<&R>` above.
macro_rules! impl_scalar_op {
    ($ty:ident, $($e:ty),*) => {
        $(
            impl std::ops::Mul<$e> for &$ty<$e> {
                type Output = ListMatrix<$e>;
                fn mul(self, k: $e) -> Self::Output {
                    times_scalar(self, k)
                }
            }

            impl std::ops::Mul<$e> for $ty<$e> {
                type Output = ListMatrix<$e>;
                fn mul(self, k: $e) -> Self::Output {
                    times_scalar(&self, k)
                }
            }

            impl std::ops::Mul<&$ty<$e>> for $e {
                type Output = ListMatrix<$e>;
                fn mul(self, m: &$ty<$e>) -> Self::Output {
                    scalar_times(self, m)
                }
            }

            impl std::ops::Mul<$ty<$e>> for $e {
                type Output = ListMatrix<$e>;
                fn mul(self, m: $ty<$e>) -> Self::Output {
                    scalar_times(self, &m)
                }
            }
        )*
    };
}

macro_rules! impl_ops_for {
    ($($ty:ident),*) => {
        $(
            impl_binary_op!($ty, Add, add, plus); // +
            impl_binary_op!($ty, Sub, sub, minus, Neg<Output = T>); // -
            impl_binary_op!($ty, Mul, mul, times); // * (element-wise)
            impl_neg!($ty);
            impl_scalar_op!(
                $ty, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, f16
            );
        )*
    };
}

impl_ops_for!(ListMatrix, MutableListMatrix);
