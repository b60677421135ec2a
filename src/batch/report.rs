//! Batch results and aggregation

use crate::solver::SolverError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Result of solving one machine
///
/// Each part is None when the batch was not configured to solve it, and
/// otherwise carries either the minimum press count or the typed solver
/// failure for that machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineOutcome {
    /// Zero-based position of the machine in the input file
    pub index: usize,
    pub lights: Option<Result<u64, SolverError>>,
    pub joltage: Option<Result<u64, SolverError>>,
}

impl MachineOutcome {
    /// Whether every solved part succeeded
    pub fn is_success(&self) -> bool {
        self.first_failure().is_none()
    }

    /// The first failing part's error, if any
    pub fn first_failure(&self) -> Option<&SolverError> {
        [&self.lights, &self.joltage]
            .into_iter()
            .flatten()
            .find_map(|result| result.as_ref().err())
    }
}

/// Aggregated results for a whole machine batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub outcomes: Vec<MachineOutcome>,
    /// Sum of minimum presses over machines whose light solve succeeded
    pub lights_total: u64,
    /// Sum of minimum presses over machines whose joltage solve succeeded
    pub joltage_total: u64,
    pub solved: usize,
    pub failed: usize,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl BatchReport {
    /// Build a report by summing per-machine outcomes
    pub fn from_outcomes(outcomes: Vec<MachineOutcome>, elapsed: Duration) -> Self {
        let lights_total = outcomes
            .iter()
            .filter_map(|o| o.lights.as_ref().and_then(|r| r.as_ref().ok()))
            .sum();
        let joltage_total = outcomes
            .iter()
            .filter_map(|o| o.joltage.as_ref().and_then(|r| r.as_ref().ok()))
            .sum();
        let solved = outcomes.iter().filter(|o| o.is_success()).count();
        let failed = outcomes.len() - solved;

        Self {
            outcomes,
            lights_total,
            joltage_total,
            solved,
            failed,
            elapsed,
        }
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Save to file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Machine | Lights  | Joltage")?;
        writeln!(f, "--------|---------|--------")?;
        for outcome in &self.outcomes {
            writeln!(
                f,
                "{:7} | {:>7} | {:>7}",
                outcome.index + 1,
                format_part(&outcome.lights),
                format_part(&outcome.joltage),
            )?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Totals: lights {}, joltage {}",
            self.lights_total, self.joltage_total
        )?;
        writeln!(
            f,
            "Machines: {} solved, {} failed in {:.3}s",
            self.solved,
            self.failed,
            self.elapsed.as_secs_f64()
        )?;
        Ok(())
    }
}

fn format_part(part: &Option<Result<u64, SolverError>>) -> String {
    match part {
        None => "-".to_string(),
        Some(Ok(presses)) => presses.to_string(),
        Some(Err(_)) => "failed".to_string(),
    }
}
