//! Dense triangular solver
//!
//! Solves `M x = y` for a lower- or upper-triangular matrix `M` by forward or
//! backward substitution, written with plain `ndarray` operations so that it
//! works where a BLAS/LAPACK `trsv` is not available (WASM, exported models).
//!
//! # Features
//!
//! - **Orientation inference**: lower/upper detected from the matrix, or given as a [`Pivot`] hint
//! - **Two elimination walks**: iterative (default) and recursive, bitwise identical results
//! - **Generic Scalar Types**: Works with f64, f32, Complex64, Complex32
//! - **Checked wrapper**: [`TriangularMatrix`] caches the orientation for repeated solves
//!
//! # Example
//!
//! ```
//! use math_audio_triangular::{Pivot, solve_triangular};
//! use ndarray::array;
//!
//! let m = array![[1.0_f64, 0.0], [2.0, 3.0]];
//! let y = array![1.0_f64, 8.0];
//!
//! let x = solve_triangular(&m, &y, None).unwrap();
//! assert_eq!(x, array![1.0, 2.0]);
//!
//! // Skip the orientation scan when the layout is known
//! let x = solve_triangular(&m, &y, Some(Pivot::LowerForward)).unwrap();
//! assert_eq!(x, array![1.0, 2.0]);
//! ```

pub mod config;
pub mod direct;
pub mod error;
pub mod matrix;
pub mod traits;
pub mod vector_ops;

pub use config::{EliminationStrategy, SolveConfig};
pub use error::{Result, TriangularError};
pub use matrix::TriangularMatrix;
pub use traits::{ComplexField, LinearOperator};

// Re-export direct solvers
pub use direct::{
    Pivot, detect_pivot, is_lower_triangular, is_upper_triangular, solve_triangular,
    solve_triangular_hinted, solve_triangular_with,
};
