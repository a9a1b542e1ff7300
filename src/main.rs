//! Command line front end for the Game of Life benchmark

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_bench::{
    config::{CliOverrides, Settings},
    game_of_life::{create_example_patterns, io::centered_preset, Grid, Preset},
    utils::{format_grid_with_coords, ColorOutput, TerminalSink},
    run_benchmark,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "game_of_life_bench")]
#[command(about = "Game of Life serial vs parallel benchmark")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time a serial pass against a parallel pass on the same pattern
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Start pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Final state file (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a JSON benchmark report here
        #[arg(long)]
        report: Option<PathBuf>,

        /// Generations per pass (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Delay between generations in milliseconds; prompted for when absent
        #[arg(short, long)]
        delay_ms: Option<u64>,

        /// Print every generation (true/false); prompted for when absent
        #[arg(short, long)]
        render: Option<bool>,

        /// Worker threads for the parallel pass
        #[arg(short, long)]
        threads: Option<usize>,

        /// Never prompt; use config values for anything not given
        #[arg(long)]
        no_prompt: bool,
    },

    /// Create a default configuration and starting patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Shape placed in the start pattern
        #[arg(short, long, default_value = "glider")]
        preset: Preset,

        /// Pattern height
        #[arg(long, default_value_t = 20)]
        height: usize,

        /// Pattern width
        #[arg(long, default_value_t = 20)]
        width: usize,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print a pattern file with coordinates
    Show {
        /// Pattern file
        pattern: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            config, pattern, output, report, generations,
            delay_ms, render, threads, no_prompt
        } => {
            let overrides = CliOverrides {
                generations,
                delay_ms,
                render,
                threads,
                start_pattern: pattern,
                state_file: output,
                report_file: report,
            };
            run_command(config, overrides, no_prompt)
        }
        Commands::Setup { directory, preset, height, width, force } => {
            setup_command(directory, preset, height, width, force)
        }
        Commands::Show { pattern } => show_command(pattern),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_command(config_path: PathBuf, mut overrides: CliOverrides, no_prompt: bool) -> Result<()> {
    let mut settings = Settings::load_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if !no_prompt {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        prompt_missing(&mut input, &mut out, &settings, &mut overrides)?;
    }

    settings.merge_with_cli(&overrides);

    let report_file = settings.output.report_file.clone();
    let mut sink = TerminalSink::stdout();
    let report = run_benchmark(settings, &mut sink)
        .context("Benchmark failed")?;

    println!();
    println!("{}", ColorOutput::info(&format!("Serial time: {} ms", report.serial.elapsed_ms())));
    println!("{}", ColorOutput::info(&format!(
        "Parallel time: {} ms ({} threads)",
        report.parallel.elapsed_ms(),
        report.threads
    )));
    match report.speedup {
        Some(speedup) => println!("{}", ColorOutput::highlight(&format!("Speedup: {:.2}x", speedup))),
        None => println!("{}", ColorOutput::warning("Speedup: n/a (parallel pass took no measurable time)")),
    }

    if report.state_saved {
        println!("\n{}", ColorOutput::success(&format!("World saved to {}.", report.state_file.display())));
    } else {
        eprintln!("{}", ColorOutput::error(&format!("Error saving world to {}.", report.state_file.display())));
    }

    if let Some(report_file) = report_file {
        println!("Report written to {}", report_file.display());
    }

    Ok(())
}

/// Ask for the rendering flag and delay unless they were given on the command line
fn prompt_missing<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    settings: &Settings,
    overrides: &mut CliOverrides,
) -> Result<()> {
    if overrides.render.is_none() {
        let answer: u8 = prompt(
            input,
            out,
            "Enable printing after each generation? (1 for yes, 0 for no): ",
            settings.simulation.render as u8,
        )?;
        overrides.render = Some(answer != 0);
    }

    if overrides.delay_ms.is_none() {
        overrides.delay_ms = Some(prompt(
            input,
            out,
            "Enter delay in milliseconds between generations: ",
            settings.simulation.delay_ms,
        )?);
    }

    Ok(())
}

/// Read one value; blank or unparsable answers fall back to `default`
fn prompt<T, R, W>(input: &mut R, out: &mut W, question: &str, default: T) -> Result<T>
where
    T: FromStr + std::fmt::Display,
    R: BufRead,
    W: Write,
{
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)
        .context("Failed to read from stdin")?;

    let answer = line.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    match answer.parse() {
        Ok(value) => Ok(value),
        Err(_) => {
            tracing::warn!(answer, %default, "Unrecognized answer, using default");
            Ok(default)
        }
    }
}

fn setup_command(directory: PathBuf, preset: Preset, height: usize, width: usize, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up benchmark files..."));

    let defaults = Settings::default();

    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        defaults.to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let pattern_path = directory.join(&defaults.input.start_pattern);
    if !pattern_path.exists() || force {
        centered_preset(preset, height, width)
            .context("Invalid grid size")?
            .save(&pattern_path)
            .with_context(|| format!("Failed to write {}", pattern_path.display()))?;
        println!("Created: {} ({} on a {}x{} grid)", pattern_path.display(), preset, height, width);
    } else {
        println!("Skipped: {} (already exists)", pattern_path.display());
    }

    let patterns_dir = directory.join("patterns");
    create_example_patterns(&patterns_dir, height, width)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("Run: cargo run -- run --config {}", config_path.display());

    Ok(())
}

fn show_command(pattern_path: PathBuf) -> Result<()> {
    let mut grid = Grid::new();
    grid.load_pattern(&pattern_path)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;

    println!("Pattern ({}x{}):", grid.height(), grid.width());
    println!("{}", format_grid_with_coords(&grid));

    let area = grid.height() * grid.width();
    println!("Grid Statistics:");
    println!("  Living cells: {}", grid.living_count());
    if area > 0 {
        println!("  Density: {:.1}%", (grid.living_count() as f64 / area as f64) * 100.0);
    }

    Ok(())
}
