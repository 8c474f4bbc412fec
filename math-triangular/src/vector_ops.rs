//! Small vector kernels used for residual checks
//!
//! Plain Rust loops; the crate never links against BLAS.

use crate::traits::ComplexField;
use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use num_traits::{Float, Zero};

/// Compute vector 2-norm: ||x||_2 = sqrt(Σ |x_i|^2)
#[inline]
pub fn vector_norm<T: ComplexField>(x: &Array1<T>) -> T::Real
where
    T::Real: Float,
{
    vector_norm_sqr(x).sqrt()
}

/// Compute vector norm squared: ||x||_2^2 = Σ |x_i|^2
#[inline]
pub fn vector_norm_sqr<T: ComplexField>(x: &Array1<T>) -> T::Real {
    let mut sum = T::Real::zero();
    for xi in x.iter() {
        sum += xi.norm_sqr();
    }
    sum
}

/// Compute axpy on strided views: y = α * x + y
#[inline]
pub fn axpy<T: ComplexField>(alpha: T, x: ArrayView1<'_, T>, mut y: ArrayViewMut1<'_, T>) {
    assert_eq!(x.len(), y.len(), "Vector lengths must match for axpy");
    for (xi, yi) in x.iter().zip(y.iter_mut()) {
        *yi += alpha * *xi;
    }
}

/// Relative distance ||a - b||_2 / ||b||_2 (absolute when b = 0)
pub fn relative_difference<T: ComplexField>(a: &Array1<T>, b: &Array1<T>) -> T::Real {
    assert_eq!(a.len(), b.len(), "Vector lengths must match");
    let diff: Array1<T> = a.iter().zip(b.iter()).map(|(&ai, &bi)| ai - bi).collect();
    let diff_norm = vector_norm(&diff);
    let b_norm = vector_norm(b);
    if b_norm.is_zero() {
        diff_norm
    } else {
        diff_norm / b_norm
    }
}
