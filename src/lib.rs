//! Game of Life serial vs parallel benchmark
//!
//! This library evolves a bounded Game of Life grid either on the calling
//! thread or across a rayon pool, and times both strategies on the same
//! starting pattern.

pub mod benchmark;
pub mod config;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use benchmark::{Benchmark, BenchmarkReport};
pub use config::Settings;
pub use error::GridError;
pub use game_of_life::{Grid, Preset, RunReport, Strategy};

use anyhow::Result;
use utils::render::RenderSink;

/// Main entry point: run the serial and parallel passes described by `settings`
pub fn run_benchmark(settings: Settings, sink: &mut dyn RenderSink) -> Result<BenchmarkReport> {
    settings.validate()?;
    Benchmark::new(settings).compare(sink)
}
