//! Display and output formatting utilities

use crate::game_of_life::Grid;
use crossterm::style::{Color, Stylize};
use crossterm::tty::IsTty;

/// Glyph for a live cell in rendered frames
pub const ALIVE_GLYPH: char = 'O';
/// Glyph for a dead cell in rendered frames
pub const DEAD_GLYPH: char = '.';

/// Lines of one rendered generation: a header followed by one line per row
pub fn format_frame(grid: &Grid, generation: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(grid.height() + 1);
    lines.push(format!("Generation {}:", generation));
    lines.extend(grid.cells().chunks(grid.width().max(1)).map(|row| {
        row.iter()
            .map(|&alive| if alive { ALIVE_GLYPH } else { DEAD_GLYPH })
            .collect::<String>()
    }));
    lines
}

/// Format a grid with coordinates
pub fn format_grid_with_coords(grid: &Grid) -> String {
    let mut output = String::new();

    // Header with column numbers
    output.push_str("   ");
    for x in 0..grid.width() {
        output.push_str(&format!("{:2}", x % 10));
    }
    output.push('\n');

    for (y, row) in grid.cells().chunks(grid.width().max(1)).enumerate() {
        output.push_str(&format!("{:2} ", y));
        for &alive in row {
            output.push_str(if alive { " O" } else { " ." });
        }
        output.push('\n');
    }

    output
}

/// Kind of console status message, each with its own color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Highlight,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Warning => Color::Yellow,
            Tone::Info => Color::Blue,
            Tone::Highlight => Color::Cyan,
        }
    }
}

/// Status messages for the CLI, styled through crossterm
pub struct ColorOutput;

impl ColorOutput {
    /// Style `text` for `tone`, or leave it plain when `NO_COLOR` is set
    /// or stdout isn't a terminal
    pub fn paint(text: &str, tone: Tone) -> String {
        let enabled = std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_tty();
        Self::paint_if(text, tone, enabled)
    }

    fn paint_if(text: &str, tone: Tone, enabled: bool) -> String {
        if enabled {
            text.with(tone.color()).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(text: &str) -> String {
        Self::paint(text, Tone::Success)
    }

    pub fn error(text: &str) -> String {
        Self::paint(text, Tone::Error)
    }

    pub fn warning(text: &str) -> String {
        Self::paint(text, Tone::Warning)
    }

    pub fn info(text: &str) -> String {
        Self::paint(text, Tone::Info)
    }

    pub fn highlight(text: &str) -> String {
        Self::paint(text, Tone::Highlight)
    }
}
