//! Configuration management for the Game of Life runner

pub mod settings;

pub use settings::{
    Settings, SimulationConfig, InputConfig, OutputConfig, OutputFormat, CliOverrides,
};
