//! Error types for triangular solves.
//!
//! Invalid input is reported before any elimination starts. Numerical
//! degeneracy (a zero diagonal entry) is not an error: it propagates as
//! non-finite values in the solution.

use thiserror::Error;

/// Errors that can occur while preparing a triangular solve.
#[derive(Debug, Error)]
pub enum TriangularError {
    /// Orientation inference found non-zero entries on both sides of the diagonal.
    #[error("matrix is not triangular")]
    NotTriangular,

    /// An orientation hint other than "start"/"end" (or the raw markers 0/-1).
    #[error("invalid pivot: {value:?} (expected \"start\", \"end\", 0 or -1)")]
    InvalidPivot {
        /// The rejected hint, as supplied
        value: String,
    },

    /// The matrix has a different number of rows and columns.
    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// Right-hand side length does not match the matrix dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Matrix dimension
        expected: usize,
        /// Length of the right-hand side
        got: usize,
    },
}

/// A specialized `Result` type for triangular solves.
pub type Result<T> = std::result::Result<T, TriangularError>;

impl TriangularError {
    /// Returns `true` if the caller supplied an unusable matrix or pivot hint.
    ///
    /// This includes `NotTriangular` and `InvalidPivot`.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            TriangularError::NotTriangular | TriangularError::InvalidPivot { .. }
        )
    }

    /// Returns `true` if this is a shape error.
    ///
    /// This includes `NotSquare` and `DimensionMismatch`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            TriangularError::NotSquare { .. } | TriangularError::DimensionMismatch { .. }
        )
    }
}
