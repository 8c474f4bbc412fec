//! Triangular matrix with a cached orientation
//!
//! Useful when the same matrix is solved against many right-hand sides: the
//! orientation scan runs once at construction instead of on every solve.

use crate::config::SolveConfig;
use crate::direct::{Pivot, check_dimensions, detect_pivot, eliminate};
use crate::error::{Result, TriangularError};
use crate::traits::{ComplexField, LinearOperator};
use crate::vector_ops::{axpy, relative_difference};
use ndarray::{Array1, Array2, ArrayView1, s};

/// Dense square matrix known to be lower- or upper-triangular
#[derive(Debug, Clone)]
pub struct TriangularMatrix<T: ComplexField> {
    data: Array2<T>,
    pivot: Pivot,
}

impl<T: ComplexField> TriangularMatrix<T> {
    /// Wrap `data`, inferring its orientation.
    pub fn new(data: Array2<T>) -> Result<Self> {
        ensure_square(&data)?;
        let pivot = detect_pivot(&data)?;
        Ok(Self { data, pivot })
    }

    /// Wrap `data` with a caller-supplied orientation.
    ///
    /// The orientation is not verified; entries on the other side of the
    /// diagonal are ignored by every operation.
    pub fn with_pivot(data: Array2<T>, pivot: Pivot) -> Result<Self> {
        ensure_square(&data)?;
        Ok(Self { data, pivot })
    }

    /// Elimination direction used by [`TriangularMatrix::solve`]
    pub fn pivot(&self) -> Pivot {
        self.pivot
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.data.nrows()
    }

    /// Underlying dense storage
    pub fn matrix(&self) -> &Array2<T> {
        &self.data
    }

    /// Copy of the main diagonal
    pub fn diagonal(&self) -> Array1<T> {
        self.data.diag().to_owned()
    }

    /// Solve `M x = y` with the default configuration
    pub fn solve(&self, y: &Array1<T>) -> Result<Array1<T>> {
        self.solve_with(y, &SolveConfig::default())
    }

    /// Solve `M x = y`
    pub fn solve_with(&self, y: &Array1<T>, config: &SolveConfig) -> Result<Array1<T>> {
        check_dimensions(&self.data, y)?;
        if y.is_empty() {
            return Ok(Array1::zeros(0));
        }
        Ok(eliminate(self.data.view(), y, self.pivot, config))
    }

    /// Transposed matrix; lower becomes upper and vice versa
    pub fn transpose(&self) -> Self {
        Self {
            data: self.data.t().as_standard_layout().into_owned(),
            pivot: self.pivot.flipped(),
        }
    }

    /// ||M x - y||_2 / ||y||_2 (absolute when y = 0)
    pub fn relative_residual(&self, x: &Array1<T>, y: &Array1<T>) -> T::Real {
        relative_difference(&self.apply(x), y)
    }

    /// Column `j` restricted to its stored (non-ignored) entries, with the
    /// row offset of its first element.
    fn stored_column(&self, j: usize) -> (usize, ArrayView1<'_, T>) {
        let column = self.data.column(j);
        match self.pivot {
            Pivot::LowerForward => (j, column.slice_move(s![j..])),
            Pivot::UpperBackward => (0, column.slice_move(s![..=j])),
        }
    }
}

impl<T: ComplexField> LinearOperator<T> for TriangularMatrix<T> {
    fn num_rows(&self) -> usize {
        self.data.nrows()
    }

    fn num_cols(&self) -> usize {
        self.data.ncols()
    }

    fn apply(&self, x: &Array1<T>) -> Array1<T> {
        let n = self.dim();
        assert_eq!(x.len(), n, "Vector length must match matrix dimension");

        let mut y = Array1::zeros(n);
        for j in 0..n {
            let (offset, column) = self.stored_column(j);
            let end = offset + column.len();
            axpy(x[j], column, y.slice_mut(s![offset..end]));
        }
        y
    }

    fn apply_transpose(&self, x: &Array1<T>) -> Array1<T> {
        let n = self.dim();
        assert_eq!(x.len(), n, "Vector length must match matrix dimension");

        let mut y = Array1::zeros(n);
        for j in 0..n {
            let (offset, column) = self.stored_column(j);
            let mut sum = T::zero();
            for (i, &m_ij) in column.iter().enumerate() {
                sum += m_ij * x[offset + i];
            }
            y[j] = sum;
        }
        y
    }
}

fn ensure_square<T>(data: &Array2<T>) -> Result<()> {
    let (rows, cols) = data.dim();
    if rows != cols {
        return Err(TriangularError::NotSquare { rows, cols });
    }
    Ok(())
}
