//! Batch solving across machine instances

pub mod report;
pub mod runner;

pub use report::{BatchReport, MachineOutcome};
pub use runner::BatchRunner;
