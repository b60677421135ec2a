//! Minimum-button-press solver for factory machines
//!
//! Each machine puzzle gives a target light diagram and a target joltage
//! counter bank, reached from all-off / all-zero by pressing wiring
//! buttons. This library finds the minimum press counts: breadth-first
//! search over the finite light state space, and exact usage-count
//! optimization for the unbounded joltage counters.

pub mod batch;
pub mod config;
pub mod machine;
pub mod solver;
pub mod utils;

pub use batch::{BatchReport, BatchRunner};
pub use config::Settings;
pub use machine::{Button, Machine};
pub use solver::{
    solve_joltage_min_presses, solve_toggle_min_presses, JoltageOptimizer, SolverError,
    ToggleSearch,
};

use anyhow::Result;

/// Main entry point for solving a batch of machines
pub fn solve_batch(settings: Settings) -> Result<BatchReport> {
    BatchRunner::new(settings).run()
}
