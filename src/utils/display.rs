//! Display and output formatting utilities

use crate::batch::BatchReport;
use crate::config::OutputFormat;
use crate::machine::Machine;
use anyhow::Result;
use std::path::Path;

/// Format batch reports for console and file output
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format one machine for console output
    pub fn format_machine(index: usize, machine: &Machine) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== Machine {} ===\n", index + 1));
        output.push_str(&format!("Description: {}\n", machine));
        output.push_str(&format!(
            "Lights: {} ({} lit in target)\n",
            machine.light_count(),
            machine.lit_count()
        ));
        output.push_str(&format!("Buttons: {}\n", machine.buttons.len()));
        output.push_str(&format!("Joltage counters: {} (total {})\n",
            machine.joltage.len(),
            machine.total_joltage()
        ));

        match machine.state_space_size() {
            Some(size) => output.push_str(&format!("Light state space: {} states\n", size)),
            None => output.push_str("Light state space: too wide to count\n"),
        }

        output
    }

    /// Save a batch report based on the output format
    pub fn save_report<P: AsRef<Path>>(
        report: &BatchReport,
        output_dir: P,
        format: &OutputFormat,
    ) -> Result<()> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)?;

        match format {
            OutputFormat::Text => {
                std::fs::write(output_dir.join("report.txt"), report.to_string())?;
            }
            OutputFormat::Json => {
                report.save_to_file(output_dir.join("report.json"))?;
            }
        }

        Ok(())
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
