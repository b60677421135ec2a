//! Configuration management for the factory button solver

pub mod settings;

pub use settings::{
    CliOverrides, ErrorPolicy, InputConfig, OutputConfig, OutputFormat, Part, Settings,
    SolverConfig,
};
