//! Configuration management for the Game of Life benchmark

pub mod settings;

pub use settings::{CliOverrides, InputConfig, OutputConfig, Settings, SimulationConfig};
