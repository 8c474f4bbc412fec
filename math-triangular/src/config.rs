//! Solver configuration
//!
//! Plain data, serializable so that callers can embed it in their own JSON
//! configuration files.

use serde::{Deserialize, Serialize};

/// How the elimination walks the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EliminationStrategy {
    /// Single loop updating one residual buffer in place (constant stack depth)
    #[default]
    Iterative,
    /// Structural recursion over shrinking views, one level per unknown
    Recursive,
}

/// Triangular solver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolveConfig {
    /// Elimination strategy
    pub strategy: EliminationStrategy,
    /// Largest dimension handled recursively; bigger systems use the loop
    pub recursion_limit: usize,
    /// Emit a warning when the solution contains non-finite entries
    pub warn_on_degenerate: bool,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            strategy: EliminationStrategy::Iterative,
            recursion_limit: 256,
            warn_on_degenerate: true,
        }
    }
}

impl SolveConfig {
    /// Configuration using structural recursion
    pub fn recursive() -> Self {
        Self {
            strategy: EliminationStrategy::Recursive,
            ..Self::default()
        }
    }
}
