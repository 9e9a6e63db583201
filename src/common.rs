use crate::matrix::Matrix;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

const FINGERPRINT_SEED: u64 = 17;
const SHAPE_FACTOR: u64 = 39;
const ELEM_FACTOR: u64 = 37;

/// Renders `[[a, b], [c, d]]`, one bracketed group per row.
pub(crate) fn format_matrix<M>(m: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    M: Matrix,
    M::Elem: fmt::Display,
{
    let (cols, rows) = (m.cols(), m.rows());
    f.write_str("[")?;
    for y in 0..rows {
        if y > 0 {
            f.write_str(", ")?;
        }
        f.write_str("[")?;
        for x in 0..cols {
            if x > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(m.at(x, y), f)?;
        }
        f.write_str("]")?;
    }
    f.write_str("]")
}

/// Same shape and every cell equal. Works across matrix types.
pub fn matrix_eq<A, B>(a: &A, b: &B) -> bool
where
    A: Matrix,
    B: Matrix<Elem = A::Elem>,
    A::Elem: PartialEq,
{
    if a.shape() != b.shape() {
        return false;
    }
    a.shape().iter().all(|(x, y)| a.at(x, y) == b.at(x, y))
}

pub(crate) fn hash_matrix<M, H>(m: &M, state: &mut H)
where
    M: Matrix,
    M::Elem: Hash,
    H: Hasher,
{
    state.write_usize(m.cols());
    state.write_usize(m.rows());
    m.for_each(|v| v.hash(&mut *state));
}

pub(crate) fn fingerprint<M>(m: &M) -> u64
where
    M: Matrix,
    M::Elem: Hash,
{
    let mut h = FINGERPRINT_SEED;
    h = h.wrapping_mul(SHAPE_FACTOR).wrapping_add(m.cols() as u64);
    h = h.wrapping_mul(SHAPE_FACTOR).wrapping_add(m.rows() as u64);
    m.for_each(|v| {
        let mut s = DefaultHasher::new();
        v.hash(&mut s);
        h = h.wrapping_mul(ELEM_FACTOR).wrapping_add(s.finish());
    });
    h
}

/// `Display`, cross-type `PartialEq`, `Eq` and `Hash` for a matrix type.
macro_rules! impl_matrix_common {
    ([$($gen:tt)*] $ty:ty, $elem:ty) => {
        impl<$($gen)*> std::fmt::Display for $ty
        where
            $elem: std::fmt::Display,
        {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::common::format_matrix(self, f)
            }
        }

        impl<$($gen)*, Rhs> PartialEq<Rhs> for $ty
        where
            $elem: PartialEq,
            Rhs: $crate::Matrix<Elem = $elem>,
        {
            fn eq(&self, other: &Rhs) -> bool {
                $crate::common::matrix_eq(self, other)
            }
        }

        impl<$($gen)*> Eq for $ty where $elem: Eq {}

        impl<$($gen)*> std::hash::Hash for $ty
        where
            $elem: std::hash::Hash,
        {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::common::hash_matrix(self, state)
            }
        }
    };
}

pub(crate) use impl_matrix_common;
