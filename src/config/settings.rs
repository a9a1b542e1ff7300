//! Configuration settings for the Game of Life benchmark

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub simulation: SimulationConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Upper bound on generations for each pass
    pub generations: usize,
    /// Pause between generations
    pub delay_ms: u64,
    /// Draw every generation to the terminal
    pub render: bool,
    /// Worker threads for the parallel pass; hardware parallelism when unset
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub start_pattern: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where the final state is written after the parallel pass
    pub state_file: PathBuf,
    /// Optional JSON benchmark report
    pub report_file: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            generations: 20,
            delay_ms: 0,
            render: true,
            threads: None,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            start_pattern: PathBuf::from("./start_pattern.txt"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from("world_state.txt"),
            report_file: None,
        }
    }
}

impl SimulationConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path` if it exists, defaults otherwise
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.simulation.generations == 0 {
            anyhow::bail!("Number of generations must be positive");
        }

        if self.simulation.threads == Some(0) {
            anyhow::bail!("Thread count must be positive");
        }

        if self.output.state_file.as_os_str().is_empty() {
            anyhow::bail!("Output state file must not be empty");
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(delay_ms) = cli_overrides.delay_ms {
            self.simulation.delay_ms = delay_ms;
        }
        if let Some(render) = cli_overrides.render {
            self.simulation.render = render;
        }
        if let Some(threads) = cli_overrides.threads {
            self.simulation.threads = Some(threads);
        }
        if let Some(ref pattern) = cli_overrides.start_pattern {
            self.input.start_pattern = pattern.clone();
        }
        if let Some(ref state_file) = cli_overrides.state_file {
            self.output.state_file = state_file.clone();
        }
        if let Some(ref report_file) = cli_overrides.report_file {
            self.output.report_file = Some(report_file.clone());
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub generations: Option<usize>,
    pub delay_ms: Option<u64>,
    pub render: Option<bool>,
    pub threads: Option<usize>,
    pub start_pattern: Option<PathBuf>,
    pub state_file: Option<PathBuf>,
    pub report_file: Option<PathBuf>,
}
