//! Configuration settings for the factory button solver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub input: InputConfig,
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub machines_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Which problem to solve per machine
    pub part: Part,
    /// Solve machines in parallel across threads
    pub parallel: bool,
    /// Cap on distinct light states explored per toggle search
    pub max_states: usize,
    /// What a single machine's failure does to the batch
    pub on_error: ErrorPolicy,
}

/// Which target(s) to solve for each machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Part {
    /// Minimum presses to the target light diagram
    Lights,
    /// Minimum presses to the joltage counter target
    Joltage,
    /// Both problems
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Stop the batch on the first machine that fails
    Abort,
    /// Record the failure and keep solving the remaining machines
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_report: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: InputConfig {
                machines_file: PathBuf::from("input/machines/example.txt"),
            },
            solver: SolverConfig {
                part: Part::Both,
                parallel: false,
                max_states: crate::solver::toggle::DEFAULT_STATE_CAP,
                on_error: ErrorPolicy::Abort,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_report: false,
                output_directory: PathBuf::from("output/reports"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.solver.max_states == 0 {
            anyhow::bail!("Toggle search state cap must be positive");
        }

        if !self.input.machines_file.exists() {
            anyhow::bail!(
                "Machines file does not exist: {}",
                self.input.machines_file.display()
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref machines_file) = cli_overrides.machines_file {
            self.input.machines_file = machines_file.clone();
        }
        if let Some(part) = cli_overrides.part {
            self.solver.part = part;
        }
        if let Some(parallel) = cli_overrides.parallel {
            self.solver.parallel = parallel;
        }
        if let Some(max_states) = cli_overrides.max_states {
            self.solver.max_states = max_states;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub machines_file: Option<PathBuf>,
    pub part: Option<Part>,
    pub parallel: Option<bool>,
    pub max_states: Option<usize>,
    pub output_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.solver.part, Part::Both);
        assert!(!settings.solver.parallel);
        assert_eq!(settings.solver.on_error, ErrorPolicy::Abort);
    }

    #[test]
    fn test_config_round_trip() {
        let temp_dir = tempdir().unwrap();
        let machines_path = temp_dir.path().join("machines.txt");
        std::fs::write(&machines_path, "[#] (0) {1}\n").unwrap();

        let mut settings = Settings::default();
        settings.input.machines_file = machines_path;
        settings.solver.part = Part::Joltage;
        settings.solver.parallel = true;

        let config_path = temp_dir.path().join("config.yaml");
        settings.to_file(&config_path).unwrap();

        let loaded = Settings::from_file(&config_path).unwrap();
        assert_eq!(loaded.solver.part, Part::Joltage);
        assert!(loaded.solver.parallel);
    }

    #[test]
    fn test_validation_rejects_zero_state_cap() {
        let temp_dir = tempdir().unwrap();
        let machines_path = temp_dir.path().join("machines.txt");
        std::fs::write(&machines_path, "[#] (0) {1}\n").unwrap();

        let mut settings = Settings::default();
        settings.input.machines_file = machines_path;
        settings.solver.max_states = 0;

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_missing_machines_file() {
        let mut settings = Settings::default();
        settings.input.machines_file = PathBuf::from("no/such/file.txt");

        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_cli_override_merging() {
        let mut settings = Settings::default();
        let overrides = CliOverrides {
            machines_file: Some(PathBuf::from("other.txt")),
            part: Some(Part::Lights),
            parallel: Some(true),
            max_states: Some(1024),
            output_dir: None,
        };

        settings.merge_with_cli(&overrides);

        assert_eq!(settings.input.machines_file, PathBuf::from("other.txt"));
        assert_eq!(settings.solver.part, Part::Lights);
        assert!(settings.solver.parallel);
        assert_eq!(settings.solver.max_states, 1024);
        assert_eq!(
            settings.output.output_directory,
            PathBuf::from("output/reports")
        );
    }
}
