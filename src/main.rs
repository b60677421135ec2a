//! Main CLI application for the factory button solver

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use factory_buttons::{
    batch::BatchRunner,
    config::{CliOverrides, Part, Settings},
    machine::{create_example_machines, load_machines_from_file},
    utils::{ColorOutput, ReportFormatter},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "factory_buttons")]
#[command(about = "Minimum-button-press solver for factory machines")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve every machine in an input file
    Solve {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Machines file (overrides config)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Which part to solve (overrides config)
        #[arg(short, long)]
        part: Option<Part>,

        /// Solve machines in parallel (overrides config)
        #[arg(long)]
        parallel: bool,

        /// Toggle search state cap (overrides config)
        #[arg(long)]
        max_states: Option<usize>,

        /// Output directory (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Create example configuration and input files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Analyze a machines file without solving
    Analyze {
        /// Machines file
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            config,
            input,
            part,
            parallel,
            max_states,
            output,
            verbose,
        } => solve_command(config, input, part, parallel, max_states, output, verbose),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Analyze { input } => analyze_command(input),
    }
}

fn solve_command(
    config_path: PathBuf,
    input: Option<PathBuf>,
    part: Option<Part>,
    parallel: bool,
    max_states: Option<usize>,
    output_dir: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    println!("{}", ColorOutput::info("Starting factory button solver"));

    // Load configuration
    let mut settings = if config_path.exists() {
        Settings::from_file(&config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    // Apply CLI overrides
    let cli_overrides = CliOverrides {
        machines_file: input,
        part,
        parallel: parallel.then_some(true),
        max_states,
        output_dir,
    };
    settings.merge_with_cli(&cli_overrides);

    if verbose {
        println!("Configuration:");
        println!("  Machines file: {}", settings.input.machines_file.display());
        println!("  Part: {:?}", settings.solver.part);
        println!("  Parallel: {}", settings.solver.parallel);
        println!("  State cap: {}", settings.solver.max_states);
        println!();
    }

    // Validate settings
    settings.validate().context("Configuration validation failed")?;

    let runner = BatchRunner::new(settings.clone());
    let report = runner.run().context("Failed to solve machine batch")?;

    println!(
        "{}",
        ColorOutput::success(&format!(
            "Solved {} machine(s) in {:.3}s",
            report.solved,
            report.elapsed.as_secs_f64()
        ))
    );
    if report.failed > 0 {
        println!(
            "{}",
            ColorOutput::warning(&format!("{} machine(s) failed", report.failed))
        );
    }

    println!("\n{}", report);

    if settings.output.save_report {
        ReportFormatter::save_report(&report, &settings.output.output_directory, &settings.output.format)
            .context("Failed to save report")?;
        println!(
            "{}",
            ColorOutput::success(&format!(
                "Report saved to {}",
                settings.output.output_directory.display()
            ))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let input_dir = directory.join("input/machines");
    let output_dir = directory.join("output/reports");

    for dir in [&config_dir, &input_dir, &output_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        let default_settings = Settings::default();
        default_settings
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    // Create example machines
    create_example_machines(&input_dir).context("Failed to create example machines")?;
    println!("Created example machines in: {}", input_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your machine descriptions to {}", input_dir.display());
    println!("3. Run: cargo run -- solve --config config/default.yaml");

    Ok(())
}

fn analyze_command(input: PathBuf) -> Result<()> {
    println!("{}", ColorOutput::info("Analyzing machines file..."));

    let machines = load_machines_from_file(&input)
        .with_context(|| format!("Failed to load machines from {}", input.display()))?;

    println!("Loaded {} machine(s)\n", machines.len());
    for (index, machine) in machines.iter().enumerate() {
        println!("{}", ReportFormatter::format_machine(index, machine));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "factory_buttons",
            "solve",
            "--config",
            "test.yaml",
            "--part",
            "joltage",
        ]);

        assert!(cli.is_ok());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("input/machines/example.txt").exists());
    }

    #[test]
    fn test_analyze_command() {
        let temp_dir = tempdir().unwrap();
        create_example_machines(temp_dir.path()).unwrap();

        assert!(analyze_command(temp_dir.path().join("example.txt")).is_ok());
    }
}
