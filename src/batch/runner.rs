//! Batch runner: parse, solve, and aggregate machine instances

use super::{BatchReport, MachineOutcome};
use crate::config::{ErrorPolicy, Part, Settings};
use crate::machine::{load_machines_from_file, Machine};
use crate::solver::{JoltageOptimizer, ToggleSearch};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::time::Instant;

/// Drives parsing and solving for every machine in an input file
///
/// Machines are independent, so they can be solved sequentially or with
/// rayon across threads; no state is shared between solves either way.
pub struct BatchRunner {
    settings: Settings,
}

impl BatchRunner {
    /// Create a runner from settings
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Load the configured machines file and solve the whole batch
    pub fn run(&self) -> Result<BatchReport> {
        let machines = load_machines_from_file(&self.settings.input.machines_file)
            .context("Failed to load machines file")?;
        self.run_machines(&machines)
    }

    /// Solve an already-parsed batch of machines
    pub fn run_machines(&self, machines: &[Machine]) -> Result<BatchReport> {
        let start = Instant::now();

        let outcomes: Result<Vec<MachineOutcome>> = if self.settings.solver.parallel {
            machines
                .par_iter()
                .enumerate()
                .map(|(index, machine)| self.solve_machine(index, machine))
                .collect()
        } else {
            machines
                .iter()
                .enumerate()
                .map(|(index, machine)| self.solve_machine(index, machine))
                .collect()
        };

        Ok(BatchReport::from_outcomes(outcomes?, start.elapsed()))
    }

    /// Solve the configured part(s) of one machine
    fn solve_machine(&self, index: usize, machine: &Machine) -> Result<MachineOutcome> {
        let part = self.settings.solver.part;

        let lights = matches!(part, Part::Lights | Part::Both).then(|| {
            ToggleSearch::with_state_cap(self.settings.solver.max_states)
                .solve(&machine.lights, &machine.buttons)
        });

        let joltage = matches!(part, Part::Joltage | Part::Both)
            .then(|| JoltageOptimizer::new().solve(&machine.joltage, &machine.buttons));

        let outcome = MachineOutcome { index, lights, joltage };

        if self.settings.solver.on_error == ErrorPolicy::Abort {
            if let Some(error) = outcome.first_failure() {
                return Err(anyhow::Error::new(error.clone())
                    .context(format!("Machine {} failed", index + 1)));
            }
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::parse_machine_line;
    use crate::solver::SolverError;
    use tempfile::tempdir;

    fn settings_for(machines: &str, part: Part, on_error: ErrorPolicy) -> (Settings, tempfile::TempDir) {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("machines.txt");
        std::fs::write(&path, machines).unwrap();

        let mut settings = Settings::default();
        settings.input.machines_file = path;
        settings.solver.part = part;
        settings.solver.on_error = on_error;
        (settings, temp_dir)
    }

    #[test]
    fn test_batch_sums_both_parts() {
        let (settings, _dir) = settings_for(
            "[#.#] (0,1) (1,2) (0,2) {2,1,3}\n[##] (0) (0,1) (1) {2,1}\n",
            Part::Both,
            ErrorPolicy::Abort,
        );

        let report = BatchRunner::new(settings).run().unwrap();

        // Lights: 2 presses for [#.#], 1 press of (0,1) for [##]
        assert_eq!(report.lights_total, 3);
        // Joltage: machine 1 needs (1,2) x1 + (0,2) x2 = 3; machine 2 needs 2
        assert_eq!(report.outcomes[0].joltage, Some(Ok(3)));
        assert_eq!(report.joltage_total, 5);
        assert_eq!(report.solved, 2);
        assert_eq!(report.failed, 0);
    }

    #[test]
    fn test_part_selection_skips_other_solver() {
        let (settings, _dir) = settings_for("[#] (0) {1}\n", Part::Lights, ErrorPolicy::Abort);

        let report = BatchRunner::new(settings).run().unwrap();

        assert_eq!(report.outcomes[0].lights, Some(Ok(1)));
        assert_eq!(report.outcomes[0].joltage, None);
        assert_eq!(report.joltage_total, 0);
    }

    #[test]
    fn test_abort_policy_stops_batch() {
        // Machine 1 has an unreachable light target (no button touches
        // light 1)
        let (settings, _dir) = settings_for(
            "[.#] (0) {0,0}\n[#] (0) {1}\n",
            Part::Both,
            ErrorPolicy::Abort,
        );

        let err = BatchRunner::new(settings).run().unwrap_err();
        assert!(format!("{:#}", err).contains("Machine 1"));
    }

    #[test]
    fn test_skip_policy_records_failure() {
        let (settings, _dir) = settings_for(
            "[.#] (0) {0,0}\n[#] (0) {1}\n",
            Part::Both,
            ErrorPolicy::Skip,
        );

        let report = BatchRunner::new(settings).run().unwrap();

        assert_eq!(report.failed, 1);
        assert_eq!(report.solved, 1);
        assert_eq!(report.outcomes[0].lights, Some(Err(SolverError::Unreachable)));
        assert_eq!(report.lights_total, 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let machines: Vec<Machine> = [
            "[#.#] (0,1) (1,2) (0,2) {2,1,3}",
            "[##] (0) (0,1) (1) {2,1}",
            "[..##] (0,3) (1,2) (2,3) (0,1) {7,5,5,7}",
        ]
        .iter()
        .map(|line| parse_machine_line(line).unwrap())
        .collect();

        let mut settings = Settings::default();
        settings.solver.part = Part::Both;

        let sequential = BatchRunner::new(settings.clone()).run_machines(&machines).unwrap();

        settings.solver.parallel = true;
        let parallel = BatchRunner::new(settings).run_machines(&machines).unwrap();

        assert_eq!(sequential.outcomes, parallel.outcomes);
        assert_eq!(sequential.lights_total, parallel.lights_total);
        assert_eq!(sequential.joltage_total, parallel.joltage_total);
    }

    #[test]
    fn test_empty_batch() {
        let mut settings = Settings::default();
        settings.solver.part = Part::Both;

        let report = BatchRunner::new(settings).run_machines(&[]).unwrap();

        assert_eq!(report.outcomes.len(), 0);
        assert_eq!(report.lights_total, 0);
        assert_eq!(report.joltage_total, 0);
    }
}
