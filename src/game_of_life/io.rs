//! Pattern file I/O
//!
//! Format: a `<height> <width>` header followed by `height * width`
//! whitespace-separated integers in row-major order. Nonzero is alive.

use super::{Grid, Preset};
use crate::error::GridError;
use anyhow::{Context, Result};
use itertools::Itertools;
use std::path::Path;

/// A pattern read from text, not yet applied to a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub height: usize,
    pub width: usize,
    pub cells: Vec<bool>,
}

/// Parse a pattern from its text representation
pub fn parse_pattern(content: &str) -> Result<Pattern, GridError> {
    let mut tokens = content.split_whitespace();

    let mut dimension = |name: &str| -> Result<usize, GridError> {
        let token = tokens
            .next()
            .ok_or_else(|| GridError::parse(format!("missing {}", name)))?;
        token
            .parse::<usize>()
            .map_err(|_| GridError::parse(format!("invalid {} '{}'", name, token)))
    };
    let height = dimension("height")?;
    let width = dimension("width")?;

    let expected = Grid::cell_count(height, width)?;

    // Grows with the tokens actually present; the header alone is untrusted
    let mut cells = Vec::new();
    for p in 0..expected {
        let token = tokens.next().ok_or_else(|| {
            GridError::parse(format!("expected {} cells, found {}", expected, p))
        })?;
        let value = token.parse::<i64>().map_err(|_| {
            GridError::parse(format!(
                "invalid cell '{}' at ({}, {})",
                token,
                p / width,
                p % width
            ))
        })?;
        cells.push(value != 0);
    }

    Ok(Pattern { height, width, cells })
}

impl Grid {
    /// Load a starting pattern, replacing the grid's size and contents
    ///
    /// On failure the error is logged and the grid is left untouched.
    pub fn load_pattern<P: AsRef<Path>>(&mut self, path: P) -> Result<(), GridError> {
        let path = path.as_ref();
        let result = std::fs::read_to_string(path)
            .map_err(|source| GridError::Io { path: path.to_path_buf(), source })
            .and_then(|content| parse_pattern(&content).map_err(|e| e.with_path(path)));

        match result {
            Ok(pattern) => {
                self.replace(pattern.height, pattern.width, pattern.cells);
                tracing::debug!(
                    path = %path.display(),
                    height = self.height(),
                    width = self.width(),
                    living = self.living_count(),
                    "Loaded pattern"
                );
                Ok(())
            }
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "Error loading pattern");
                Err(err)
            }
        }
    }

    /// Restore a state previously written by `save`
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), GridError> {
        self.load_pattern(path)
    }

    /// Write the current generation to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), GridError> {
        let path = path.as_ref();
        let io_error = |source| GridError::Io { path: path.to_path_buf(), source };

        let result = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map_or(Ok(()), std::fs::create_dir_all)
            .map_err(io_error)
            .and_then(|_| std::fs::write(path, self.to_pattern_string()).map_err(io_error));

        if let Err(err) = &result {
            tracing::error!(path = %path.display(), %err, "Error saving grid");
        }
        result
    }

    /// Text form of the current generation, as written by `save`
    pub fn to_pattern_string(&self) -> String {
        let mut result = format!("{} {}\n", self.height(), self.width());
        for row in self.cells().chunks(self.width().max(1)) {
            result.push_str(&row.iter().map(|&alive| if alive { "1" } else { "0" }).join(" "));
            result.push('\n');
        }
        result
    }
}

/// Write one starting pattern per preset into `output_dir`
///
/// Each preset is centered on a blank `height` x `width` grid.
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P, height: usize, width: usize) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    for preset in Preset::ALL {
        let grid = centered_preset(preset, height, width)?;
        let file = dir.join(format!("{}.txt", preset.name()));
        grid.save(&file)
            .with_context(|| format!("Failed to write {}", file.display()))?;
    }

    Ok(())
}

/// Blank grid with a preset stamped in the middle
pub fn centered_preset(preset: Preset, height: usize, width: usize) -> Result<Grid, GridError> {
    let (h, w) = preset.extent();
    let mut grid = Grid::try_with_size(height, width)?;
    let row = height.saturating_sub(h) / 2;
    let col = width.saturating_sub(w) / 2;
    grid.add_preset(preset, row as isize, col as isize);
    Ok(grid)
}
