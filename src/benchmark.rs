//! Serial vs parallel comparison on the same starting pattern

use crate::config::Settings;
use crate::game_of_life::{Grid, RunReport};
use crate::utils::render::RenderSink;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Timings of both passes and where the final state went
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub serial: RunReport,
    pub parallel: RunReport,
    /// Serial time divided by parallel time; `None` when the parallel pass took no measurable time
    pub speedup: Option<f64>,
    pub threads: usize,
    pub state_file: PathBuf,
    pub state_saved: bool,
}

impl BenchmarkReport {
    /// Write the report as pretty JSON
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .context("Failed to serialize benchmark report")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write benchmark report: {}", path.display()))?;
        Ok(())
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Serial time: {} ms", self.serial.elapsed_ms())?;
        writeln!(f, "Parallel time: {} ms ({} threads)", self.parallel.elapsed_ms(), self.threads)?;
        match self.speedup {
            Some(speedup) => write!(f, "Speedup: {:.2}x", speedup),
            None => write!(f, "Speedup: n/a"),
        }
    }
}

/// Ratio of serial to parallel wall-clock time
pub fn speedup(serial: &RunReport, parallel: &RunReport) -> Option<f64> {
    if parallel.elapsed.is_zero() {
        return None;
    }
    Some(serial.elapsed.as_nanos() as f64 / parallel.elapsed.as_nanos() as f64)
}

/// Runs the serial pass, then the parallel pass on a freshly reloaded pattern
pub struct Benchmark {
    settings: Settings,
}

impl Benchmark {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Load the configured start pattern into a fresh grid
    ///
    /// A missing or malformed file is not fatal: the failure is logged and
    /// the run continues on an empty grid.
    pub fn load_start(&self) -> Grid {
        let mut grid = Grid::new();
        if grid.load_pattern(&self.settings.input.start_pattern).is_err() {
            tracing::warn!(
                path = %self.settings.input.start_pattern.display(),
                "Continuing with an empty grid"
            );
        }
        grid.set_render_enabled(self.settings.simulation.render);
        grid
    }

    /// Run both passes, save the final state and return the timings
    pub fn compare(&self, sink: &mut dyn RenderSink) -> Result<BenchmarkReport> {
        let sim = &self.settings.simulation;

        let mut grid = self.load_start();
        tracing::info!(generations = sim.generations, delay_ms = sim.delay_ms, "Running serial pass");
        let serial = grid.run_serial(sim.generations, sim.delay(), sink);

        let mut grid = self.load_start();
        let (parallel, threads) = match sim.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .context("Failed to build thread pool")?;
                tracing::info!(threads, "Running parallel pass");
                let report = pool.install(|| grid.run(sim.generations, sim.delay(), sink));
                (report, pool.current_num_threads())
            }
            None => {
                let threads = rayon::current_num_threads();
                tracing::info!(threads, "Running parallel pass");
                (grid.run(sim.generations, sim.delay(), sink), threads)
            }
        };

        let state_file = self.settings.output.state_file.clone();
        let state_saved = grid.save(&state_file).is_ok();

        let report = BenchmarkReport {
            speedup: speedup(&serial, &parallel),
            serial,
            parallel,
            threads,
            state_file,
            state_saved,
        };

        if let Some(report_file) = &self.settings.output.report_file {
            report.save_json(report_file)?;
        }

        Ok(report)
    }
}
