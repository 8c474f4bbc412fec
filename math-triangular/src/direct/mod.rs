//! Direct solvers for triangular systems
//!
//! This module provides:
//! - [`solve_triangular`]: forward/backward substitution on a dense triangular matrix
//! - [`detect_pivot`]: orientation inference used when no [`Pivot`] hint is given

mod orientation;
mod triangular;

pub use orientation::{Pivot, detect_pivot, is_lower_triangular, is_upper_triangular};
pub use triangular::{solve_triangular, solve_triangular_hinted, solve_triangular_with};

pub(crate) use triangular::{check_dimensions, eliminate};
