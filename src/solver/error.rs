//! Solver failure taxonomy

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Terminal failure for a single machine solve
///
/// Both solvers are deterministic and exhaustive, so a failure is final
/// for that machine; there is nothing to retry. Failures are distinct
/// from a valid zero-press answer.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverError {
    /// The target light diagram cannot be reached from all-off with any
    /// sequence of button presses
    #[error("light target is unreachable from the all-off state")]
    Unreachable,

    /// No assignment of non-negative press counts reproduces the joltage
    /// target
    #[error("no combination of button presses produces the joltage target")]
    Infeasible,

    /// A button is wired to a cell outside the target vector
    #[error("button {button} references cell {index}, outside 0..{len}")]
    MalformedButton {
        button: usize,
        index: usize,
        len: usize,
    },
}
