//! Timed multi-generation runs

use super::Grid;
use crate::utils::display::format_frame;
use crate::utils::render::RenderSink;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Which evolution pass a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Serial,
    Parallel,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Serial => f.write_str("serial"),
            Strategy::Parallel => f.write_str("parallel"),
        }
    }
}

/// Outcome of a timed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub strategy: Strategy,
    /// Generations actually evolved
    pub generations: usize,
    /// Generation (1-based) at which the grid stopped changing
    pub stable_at: Option<usize>,
    pub elapsed: Duration,
}

impl RunReport {
    /// Wall-clock time in whole milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

impl Grid {
    /// Run up to `generations` parallel steps
    pub fn run(&mut self, generations: usize, delay: Duration, sink: &mut dyn RenderSink) -> RunReport {
        self.run_with(Strategy::Parallel, generations, delay, sink)
    }

    /// Run up to `generations` serial steps
    pub fn run_serial(&mut self, generations: usize, delay: Duration, sink: &mut dyn RenderSink) -> RunReport {
        self.run_with(Strategy::Serial, generations, delay, sink)
    }

    /// Evolve until `generations` is reached or the grid is stable
    ///
    /// When rendering is enabled the state before each step is drawn. The
    /// loop sleeps `delay` between steps but not after the last evolved one
    /// if it turned out stable.
    pub fn run_with(
        &mut self,
        strategy: Strategy,
        generations: usize,
        delay: Duration,
        sink: &mut dyn RenderSink,
    ) -> RunReport {
        let start = Instant::now();
        let mut evolved = 0;
        let mut stable_at = None;

        for step in 0..generations {
            let generation = step + 1;

            if self.render_enabled() {
                if let Err(err) = self.render(generation, sink) {
                    tracing::warn!(%err, generation, "Failed to render frame");
                }
            }

            match strategy {
                Strategy::Serial => self.evolve_serial(),
                Strategy::Parallel => self.evolve(),
            }
            evolved = generation;

            if self.is_stable() {
                tracing::info!(generation, %strategy, "Stable configuration detected");
                stable_at = Some(generation);
                break;
            }

            if !delay.is_zero() {
                std::thread::sleep(delay);
            }
        }

        let elapsed = start.elapsed();
        tracing::debug!(%strategy, generations = evolved, elapsed_ms = elapsed.as_millis() as u64, "Run finished");

        RunReport {
            strategy,
            generations: evolved,
            stable_at,
            elapsed,
        }
    }

    fn render(&self, generation: usize, sink: &mut dyn RenderSink) -> anyhow::Result<()> {
        sink.clear()?;
        sink.write_lines(&format_frame(self, generation))
    }
}
