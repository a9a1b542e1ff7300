//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod presets;
pub mod rules;
pub mod runner;

pub use grid::Grid;
pub use io::{create_example_patterns, parse_pattern, Pattern};
pub use presets::Preset;
pub use rules::GameOfLifeRules;
pub use runner::{RunReport, Strategy};
