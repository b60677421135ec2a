//! Minimum-press solvers for factory machines
//!
//! Two solvers share the same input shape (a target vector plus button
//! wirings) but use structurally different algorithms: a breadth-first
//! search over the finite boolean light space, and an exact usage-count
//! optimization for the unbounded joltage counters.

pub mod error;
pub mod joltage;
pub mod toggle;

pub use error::SolverError;
pub use joltage::{JoltageOptimizer, OptimizerStats};
pub use toggle::{SearchStats, ToggleSearch};

use crate::machine::Button;

/// Minimum presses to reach a target light diagram from all-off
pub fn solve_toggle_min_presses(target: &[bool], buttons: &[Button]) -> Result<u64, SolverError> {
    ToggleSearch::new().solve(target, buttons)
}

/// Minimum presses to reach a joltage counter target from all-zero
pub fn solve_joltage_min_presses(target: &[u64], buttons: &[Button]) -> Result<u64, SolverError> {
    JoltageOptimizer::new().solve(target, buttons)
}

/// Check every button against a cell vector length
///
/// A button wired to a cell outside `[0, len)` is rejected before any
/// search or optimization begins.
pub fn validate_buttons(buttons: &[Button], len: usize) -> Result<(), SolverError> {
    for (b, button) in buttons.iter().enumerate() {
        if let Some(&index) = button.indices().iter().find(|&&i| i >= len) {
            return Err(SolverError::MalformedButton { button: b, index, len });
        }
    }
    Ok(())
}
