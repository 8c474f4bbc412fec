//! Triangular system solver
//!
//! Solves `M x = y` for a dense lower- or upper-triangular `M` by forward or
//! backward substitution, without calling into BLAS/LAPACK `trsv`.
//!
//! Each step solves the unknown at the active pivot by a single division,
//! subtracts its column contribution from the remaining right-hand side and
//! shrinks the problem by one. Two equivalent walks are provided: an explicit
//! loop over a single residual buffer (the default) and structural recursion
//! over shrinking views. Both perform the same floating-point operations in
//! the same order, so their results are bitwise identical.

use super::orientation::{Pivot, detect_pivot};
use crate::config::{EliminationStrategy, SolveConfig};
use crate::error::{Result, TriangularError};
use crate::traits::ComplexField;
use ndarray::{Array1, Array2, ArrayView2, ArrayViewMut1, s};
use num_traits::Zero;

/// Solve `M x = y` for triangular `M` with the default configuration.
///
/// With `pivot = None` the orientation is inferred from `m` and a matrix with
/// non-zero entries on both sides of the diagonal is rejected. A supplied
/// pivot is trusted as-is: entries on the ignored side of the diagonal are
/// never read.
///
/// A zero diagonal entry is not reported as an error; the corresponding
/// unknowns come out as infinity or NaN.
pub fn solve_triangular<T: ComplexField>(
    m: &Array2<T>,
    y: &Array1<T>,
    pivot: Option<Pivot>,
) -> Result<Array1<T>> {
    solve_triangular_with(m, y, pivot, &SolveConfig::default())
}

/// Solve `M x = y` with an orientation hint given as text ("start" or "end").
///
/// Unrecognized hints fail with [`TriangularError::InvalidPivot`] before any
/// computation.
pub fn solve_triangular_hinted<T: ComplexField>(
    m: &Array2<T>,
    y: &Array1<T>,
    hint: Option<&str>,
) -> Result<Array1<T>> {
    let pivot = hint.map(str::parse::<Pivot>).transpose()?;
    solve_triangular(m, y, pivot)
}

/// Solve `M x = y` for triangular `M` using an explicit configuration.
pub fn solve_triangular_with<T: ComplexField>(
    m: &Array2<T>,
    y: &Array1<T>,
    pivot: Option<Pivot>,
    config: &SolveConfig,
) -> Result<Array1<T>> {
    check_dimensions(m, y)?;

    let n = y.len();
    if n == 0 {
        return Ok(Array1::zeros(0));
    }

    let pivot = match pivot {
        Some(pivot) => pivot,
        None => detect_pivot(m)?,
    };

    Ok(eliminate(m.view(), y, pivot, config))
}

/// Run the elimination on validated input.
pub(crate) fn eliminate<T: ComplexField>(
    m: ArrayView2<'_, T>,
    y: &Array1<T>,
    pivot: Pivot,
    config: &SolveConfig,
) -> Array1<T> {
    let n = y.len();
    let mut residual = y.clone();
    let mut x = Array1::zeros(n);

    match config.strategy {
        EliminationStrategy::Recursive if n <= config.recursion_limit => {
            eliminate_recursive(m, residual.view_mut(), x.view_mut(), pivot);
        }
        EliminationStrategy::Recursive => {
            log::debug!(
                "Dimension {} exceeds recursion limit {}, using iterative elimination",
                n,
                config.recursion_limit
            );
            eliminate_iterative(m, &mut residual, &mut x, pivot);
        }
        EliminationStrategy::Iterative => {
            eliminate_iterative(m, &mut residual, &mut x, pivot);
        }
    }

    if config.warn_on_degenerate {
        warn_if_degenerate(m, &x);
    }

    x
}

pub(crate) fn check_dimensions<T>(m: &Array2<T>, y: &Array1<T>) -> Result<()> {
    let (rows, cols) = m.dim();
    if rows != cols {
        return Err(TriangularError::NotSquare { rows, cols });
    }
    if y.len() != rows {
        return Err(TriangularError::DimensionMismatch {
            expected: rows,
            got: y.len(),
        });
    }
    Ok(())
}

/// Loop form: the active pivot index walks from one end to the other.
///
/// `residual` starts as `y` and holds, at every step, the right-hand side of
/// the still-unsolved sub-system.
fn eliminate_iterative<T: ComplexField>(
    m: ArrayView2<'_, T>,
    residual: &mut Array1<T>,
    x: &mut Array1<T>,
    pivot: Pivot,
) {
    let n = residual.len();

    match pivot {
        Pivot::LowerForward => {
            for k in 0..n {
                let x_k = residual[k] / m[[k, k]];
                x[k] = x_k;
                for i in (k + 1)..n {
                    residual[i] -= x_k * m[[i, k]];
                }
            }
        }
        Pivot::UpperBackward => {
            for k in (0..n).rev() {
                let x_k = residual[k] / m[[k, k]];
                x[k] = x_k;
                for i in 0..k {
                    residual[i] -= x_k * m[[i, k]];
                }
            }
        }
    }
}

/// Recursive form over `(offset, length)` views of the original buffers.
///
/// Dimension 1 is the base case (a single division). Otherwise the pivot
/// unknown is solved, its column is subtracted from the rest of the residual,
/// and the call recurses on the sub-system with the pivot row and column
/// removed.
fn eliminate_recursive<T: ComplexField>(
    m: ArrayView2<'_, T>,
    residual: ArrayViewMut1<'_, T>,
    mut x: ArrayViewMut1<'_, T>,
    pivot: Pivot,
) {
    let n = residual.len();
    let p = pivot.index(n);
    let x_p = residual[p] / m[[p, p]];
    x[p] = x_p;

    if n == 1 {
        return;
    }

    let (m_next, column, mut residual_next, x_next) = match pivot {
        Pivot::LowerForward => (
            m.slice_move(s![1.., 1..]),
            m.slice_move(s![1.., 0]),
            residual.slice_move(s![1..]),
            x.slice_move(s![1..]),
        ),
        Pivot::UpperBackward => (
            m.slice_move(s![..-1, ..-1]),
            m.slice_move(s![..-1, -1]),
            residual.slice_move(s![..-1]),
            x.slice_move(s![..-1]),
        ),
    };

    for (r, &c) in residual_next.iter_mut().zip(column.iter()) {
        *r -= x_p * c;
    }

    eliminate_recursive(m_next, residual_next, x_next, pivot);
}

fn warn_if_degenerate<T: ComplexField>(m: ArrayView2<'_, T>, x: &Array1<T>) {
    if x.iter().all(|v| v.is_finite()) {
        return;
    }

    match m.diag().iter().position(|d| d.is_zero()) {
        Some(index) => log::warn!(
            "Zero diagonal entry at index {}: triangular solution contains non-finite values",
            index
        ),
        None => log::warn!("Triangular solution contains non-finite values"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;
    use num_complex::Complex64;

    #[test]
    fn test_base_case() {
        let m = array![[2.0_f64]];
        let y = array![6.0_f64];

        let x = solve_triangular(&m, &y, None).expect("solve should succeed");
        assert_eq!(x, array![3.0]);

        let x = solve_triangular_with(&m, &y, None, &SolveConfig::recursive())
            .expect("solve should succeed");
        assert_eq!(x, array![3.0]);
    }

    #[test]
    fn test_lower_auto_detected() {
        let m = array![[1.0_f64, 0.0], [2.0, 3.0]];
        let y = array![1.0_f64, 8.0];

        let x = solve_triangular(&m, &y, None).expect("solve should succeed");
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_upper_auto_detected() {
        let m = array![[2.0_f64, 1.0], [0.0, 3.0]];
        let y = array![5.0_f64, 6.0];

        let x = solve_triangular(&m, &y, None).expect("solve should succeed");
        assert_relative_eq!(x[0], 1.5, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_explicit_pivot_matches_inference() {
        let m = array![[4.0_f64, 0.0, 0.0], [1.0, 2.0, 0.0], [3.0, -1.0, 5.0]];
        let y = array![8.0_f64, 4.0, 7.0];

        let inferred = solve_triangular(&m, &y, None).unwrap();
        let hinted = solve_triangular(&m, &y, Some(Pivot::LowerForward)).unwrap();
        assert_eq!(inferred, hinted);

        let from_text = solve_triangular_hinted(&m, &y, Some("start")).unwrap();
        assert_eq!(inferred, from_text);
    }

    #[test]
    fn test_hint_skips_verification() {
        // Upper part is garbage, but the hint says lower: it must be ignored
        let m = array![[1.0_f64, 99.0], [2.0, 3.0]];
        let y = array![1.0_f64, 8.0];

        assert!(solve_triangular(&m, &y, None).is_err());

        let x = solve_triangular(&m, &y, Some(Pivot::LowerForward)).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_triangular() {
        let m = array![[1.0_f64, 2.0], [3.0, 4.0]];
        let y = array![1.0_f64, 1.0];

        let err = solve_triangular(&m, &y, None).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, TriangularError::NotTriangular));
    }

    #[test]
    fn test_rejects_invalid_hint() {
        let m = array![[1.0_f64, 0.0], [2.0, 3.0]];
        let y = array![1.0_f64, 8.0];

        let err = solve_triangular_hinted(&m, &y, Some("middle")).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(matches!(err, TriangularError::InvalidPivot { .. }));
    }

    #[test]
    fn test_dimension_checks() {
        let m = array![[1.0_f64, 0.0], [2.0, 3.0]];

        let err = solve_triangular(&m, &array![1.0_f64, 2.0, 3.0], None).unwrap_err();
        assert!(matches!(
            err,
            TriangularError::DimensionMismatch {
                expected: 2,
                got: 3
            }
        ));

        let rect = array![[1.0_f64, 0.0, 0.0], [2.0, 3.0, 0.0]];
        let err = solve_triangular(&rect, &array![1.0_f64, 2.0], None).unwrap_err();
        assert!(err.is_dimension_error());
    }

    #[test]
    fn test_empty_system() {
        let m = Array2::<f64>::zeros((0, 0));
        let y = Array1::<f64>::zeros(0);

        let x = solve_triangular(&m, &y, None).unwrap();
        assert!(x.is_empty());
    }

    #[test]
    fn test_zero_diagonal_propagates() {
        let m = array![[0.0_f64, 0.0], [1.0, 2.0]];
        let y = array![1.0_f64, 1.0];

        let x = solve_triangular(&m, &y, None).expect("degeneracy is not an error");
        assert!(x[0].is_infinite());
        assert!(!x[1].is_finite());
    }

    #[test]
    fn test_strategies_agree_bitwise() {
        let lower = array![
            [3.0_f64, 0.0, 0.0, 0.0],
            [0.1, 7.0, 0.0, 0.0],
            [-2.3, 0.7, 1.1, 0.0],
            [1.9, -0.4, 2.2, 0.3]
        ];
        let upper = lower.t().to_owned();
        let y = array![0.3_f64, -1.7, 2.9, 4.1];

        for m in [&lower, &upper] {
            let iterative = solve_triangular(m, &y, None).unwrap();
            let recursive = solve_triangular_with(m, &y, None, &SolveConfig::recursive()).unwrap();
            assert_eq!(iterative, recursive);
        }
    }

    #[test]
    fn test_recursion_limit_fallback() {
        let m = array![[2.0_f64, 1.0, 1.0], [0.0, 4.0, 1.0], [0.0, 0.0, 8.0]];
        let y = array![4.0_f64, 5.0, 8.0];

        let config = SolveConfig {
            recursion_limit: 1,
            ..SolveConfig::recursive()
        };
        let fallback = solve_triangular_with(&m, &y, None, &config).unwrap();
        let recursive = solve_triangular_with(&m, &y, None, &SolveConfig::recursive()).unwrap();
        assert_eq!(fallback, recursive);

        let ax = m.dot(&fallback);
        for i in 0..3 {
            assert_relative_eq!(ax[i], y[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_complex_upper() {
        let m = array![
            [Complex64::new(1.0, 1.0), Complex64::new(2.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(0.0, 2.0)]
        ];
        let y = array![Complex64::new(3.0, 1.0), Complex64::new(-2.0, 4.0)];

        let x = solve_triangular(&m, &y, None).expect("solve should succeed");

        let ax = m.dot(&x);
        for i in 0..2 {
            assert_relative_eq!((ax[i] - y[i]).norm(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_f32_preserves_precision_type() {
        let m = array![[2.0_f32, 0.0], [1.0, 4.0]];
        let y = array![2.0_f32, 9.0];

        let x: Array1<f32> = solve_triangular(&m, &y, None).unwrap();
        assert_relative_eq!(x[0], 1.0_f32);
        assert_relative_eq!(x[1], 2.0_f32);
    }
}
