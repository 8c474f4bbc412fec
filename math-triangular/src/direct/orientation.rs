//! Matrix orientation: pivot hints and inference

use crate::error::{Result, TriangularError};
use crate::traits::ComplexField;
use ndarray::Array2;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Elimination direction, i.e. which end of the matrix holds the first pivot.
///
/// `LowerForward` ("start", raw marker `0`) treats the matrix as
/// lower-triangular and solves from index 0 upwards. `UpperBackward`
/// ("end", raw marker `-1`) treats it as upper-triangular and solves from the
/// last index downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pivot {
    /// Lower-triangular, forward substitution
    #[serde(rename = "start")]
    LowerForward,
    /// Upper-triangular, backward substitution
    #[serde(rename = "end")]
    UpperBackward,
}

impl Pivot {
    /// Position of the first unknown solved in a system of dimension `n` (`n > 0`)
    #[inline]
    pub fn index(self, n: usize) -> usize {
        match self {
            Pivot::LowerForward => 0,
            Pivot::UpperBackward => n - 1,
        }
    }

    /// Hint string accepted by [`Pivot::from_str`]
    pub fn as_str(self) -> &'static str {
        match self {
            Pivot::LowerForward => "start",
            Pivot::UpperBackward => "end",
        }
    }

    /// Raw index marker: `0` for the first index, `-1` for the last
    pub fn marker(self) -> isize {
        match self {
            Pivot::LowerForward => 0,
            Pivot::UpperBackward => -1,
        }
    }

    /// Orientation of the transposed matrix
    pub fn flipped(self) -> Self {
        match self {
            Pivot::LowerForward => Pivot::UpperBackward,
            Pivot::UpperBackward => Pivot::LowerForward,
        }
    }
}

impl fmt::Display for Pivot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Pivot {
    type Err = TriangularError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(Pivot::LowerForward),
            "end" => Ok(Pivot::UpperBackward),
            other => Err(TriangularError::InvalidPivot {
                value: other.to_string(),
            }),
        }
    }
}

impl TryFrom<isize> for Pivot {
    type Error = TriangularError;

    fn try_from(marker: isize) -> Result<Self> {
        match marker {
            0 => Ok(Pivot::LowerForward),
            -1 => Ok(Pivot::UpperBackward),
            other => Err(TriangularError::InvalidPivot {
                value: other.to_string(),
            }),
        }
    }
}

/// `true` if every entry strictly above the diagonal is exactly zero
pub fn is_lower_triangular<T: ComplexField>(m: &Array2<T>) -> bool {
    m.indexed_iter()
        .filter(|((i, j), _)| j > i)
        .all(|(_, v)| v.is_zero())
}

/// `true` if every entry strictly below the diagonal is exactly zero
pub fn is_upper_triangular<T: ComplexField>(m: &Array2<T>) -> bool {
    m.indexed_iter()
        .filter(|((i, j), _)| j < i)
        .all(|(_, v)| v.is_zero())
}

/// Infer the elimination direction of a triangular matrix.
///
/// The strictly upper part is scanned first, so diagonal matrices (and 1x1
/// matrices) are reported as [`Pivot::LowerForward`]. Returns
/// [`TriangularError::NotTriangular`] when both scans find a non-zero entry.
pub fn detect_pivot<T: ComplexField>(m: &Array2<T>) -> Result<Pivot> {
    let pivot = if is_lower_triangular(m) {
        Pivot::LowerForward
    } else if is_upper_triangular(m) {
        Pivot::UpperBackward
    } else {
        return Err(TriangularError::NotTriangular);
    };

    log::debug!(
        "Inferred {} orientation for {}x{} matrix",
        pivot,
        m.nrows(),
        m.ncols()
    );
    Ok(pivot)
}
