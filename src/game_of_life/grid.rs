//! Grid representation holding the current, next and previous generations

use crate::error::GridError;
use std::fmt;

/// A bounded Game of Life grid
///
/// All three fields are stored row-major and always share the same
/// `height * width` shape. Only `current` is externally observable; `next` is
/// scratch space for an evolution pass and `previous` is the snapshot taken
/// right before the last pass, used for stability detection.
#[derive(Debug, Clone)]
pub struct Grid {
    height: usize,
    width: usize,
    pub(crate) current: Vec<bool>,
    pub(crate) next: Vec<bool>,
    pub(crate) previous: Vec<bool>,
    render_enabled: bool,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Create an empty 0x0 grid
    pub fn new() -> Self {
        Self::with_size(0, 0)
    }

    /// Number of cells for a `height` x `width` field, if it can be allocated
    pub fn cell_count(height: usize, width: usize) -> Result<usize, GridError> {
        height
            .checked_mul(width)
            .filter(|&cells| cells <= isize::MAX as usize)
            .ok_or(GridError::TooLarge { height, width })
    }

    /// Create an all-dead grid, rejecting sizes that overflow or can't be allocated
    pub fn try_with_size(height: usize, width: usize) -> Result<Self, GridError> {
        let count = Self::cell_count(height, width)?;
        let dead_field = || -> Result<Vec<bool>, GridError> {
            let mut field = Vec::new();
            field
                .try_reserve_exact(count)
                .map_err(|_| GridError::TooLarge { height, width })?;
            field.resize(count, false);
            Ok(field)
        };

        Ok(Self {
            height,
            width,
            current: dead_field()?,
            next: dead_field()?,
            previous: dead_field()?,
            render_enabled: true,
        })
    }

    /// Create an all-dead grid of the given size
    ///
    /// `height * width` must not overflow; use `try_with_size` for untrusted sizes.
    pub fn with_size(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            current: vec![false; height * width],
            next: vec![false; height * width],
            previous: vec![false; height * width],
            render_enabled: true,
        }
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let height = cells.len();
        let width = cells.first().map_or(0, Vec::len);

        for (i, row) in cells.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::parse(format!(
                    "row {} has length {}, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
        }

        let mut grid = Self::with_size(height, width);
        grid.current = cells.into_iter().flatten().collect();
        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Row-major view of the current generation
    pub fn cells(&self) -> &[bool] {
        &self.current
    }

    /// Row-major view of the snapshot taken before the last evolution step
    pub fn previous_cells(&self) -> &[bool] {
        &self.previous
    }

    pub fn render_enabled(&self) -> bool {
        self.render_enabled
    }

    pub fn set_render_enabled(&mut self, enabled: bool) {
        self.render_enabled = enabled;
    }

    /// Reallocate all three generations as dead fields of the new shape
    ///
    /// Same size precondition as `with_size`.
    pub fn resize(&mut self, height: usize, width: usize) {
        self.height = height;
        self.width = width;
        self.current = vec![false; height * width];
        self.next = vec![false; height * width];
        self.previous = vec![false; height * width];
    }

    /// Replace the current generation with a parsed field of the given shape
    pub(crate) fn replace(&mut self, height: usize, width: usize, cells: Vec<bool>) {
        debug_assert_eq!(cells.len(), height * width);
        self.resize(height, width);
        self.current = cells;
    }

    /// Convert 2D coordinates to a flat index
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Convert a flat index to (row, col)
    ///
    /// Returns `None` while the grid has no columns.
    pub fn to_2d(&self, p: usize) -> Option<(usize, usize)> {
        if self.width == 0 {
            return None;
        }
        Some((p / self.width, p % self.width))
    }

    fn checked_index(&self, row: isize, col: isize) -> Result<usize, GridError> {
        if row >= 0 && (row as usize) < self.height && col >= 0 && (col as usize) < self.width {
            Ok(self.index(row as usize, col as usize))
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            })
        }
    }

    /// Read a cell, failing on out-of-bounds coordinates
    pub fn try_get(&self, row: isize, col: isize) -> Result<bool, GridError> {
        self.checked_index(row, col).map(|idx| self.current[idx])
    }

    /// Write a cell, failing on out-of-bounds coordinates
    pub fn try_set(&mut self, row: isize, col: isize, alive: bool) -> Result<(), GridError> {
        let idx = self.checked_index(row, col)?;
        self.current[idx] = alive;
        Ok(())
    }

    /// Read a cell; out-of-bounds requests are reported and read as dead
    pub fn get_cell(&self, row: isize, col: isize) -> bool {
        self.try_get(row, col).unwrap_or_else(|err| {
            tracing::error!(%err, "Error reading cell");
            false
        })
    }

    /// Write a cell; out-of-bounds requests are reported and ignored
    pub fn set_cell(&mut self, row: isize, col: isize, alive: bool) {
        if let Err(err) = self.try_set(row, col, alive) {
            tracing::error!(%err, "Error writing cell");
        }
    }

    /// Read a cell by flat row-major index
    pub fn get_cell_at(&self, p: usize) -> bool {
        match self.to_2d(p) {
            Some((row, col)) => self.get_cell(row as isize, col as isize),
            None => {
                tracing::error!(index = p, "Error reading cell: grid has no columns");
                false
            }
        }
    }

    /// Write a cell by flat row-major index
    pub fn set_cell_at(&mut self, p: usize, alive: bool) {
        match self.to_2d(p) {
            Some((row, col)) => self.set_cell(row as isize, col as isize, alive),
            None => tracing::error!(index = p, "Error writing cell: grid has no columns"),
        }
    }

    /// Get all living cell coordinates
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        self.current
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .filter_map(|(p, _)| self.to_2d(p))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.current.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.current.iter().all(|&cell| !cell)
    }

    /// Whether the last evolution step left the grid unchanged
    pub fn is_stable(&self) -> bool {
        self.previous == self.current
    }

    /// Snapshot `current` into `previous`, then promote `next`
    ///
    /// The snapshot is taken before the swap, so `is_stable` compares the
    /// pre-step configuration against the post-step one.
    pub(crate) fn commit_generation(&mut self) {
        self.previous.copy_from_slice(&self.current);
        std::mem::swap(&mut self.current, &mut self.next);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.current.chunks(self.width.max(1)) {
            for &cell in row {
                write!(f, "{}", if cell { 'O' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::with_size(3, 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.cells().len(), 12);
        assert_eq!(grid.previous_cells().len(), 12);
        assert!(grid.is_empty());
        assert!(grid.render_enabled());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert!(matches!(
            Grid::try_with_size(1 << 32, 1 << 32),
            Err(GridError::TooLarge { .. })
        ));
        assert!(Grid::cell_count(usize::MAX / 2, 3).is_err());
        assert_eq!(Grid::cell_count(4, 5).unwrap(), 20);

        let grid = Grid::try_with_size(3, 3).unwrap();
        assert_eq!(grid.cells().len(), 9);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::new();
        assert_eq!(grid.height(), 0);
        assert_eq!(grid.width(), 0);
        assert_eq!(grid.to_2d(5), None);
        assert!(!grid.get_cell_at(0));
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.living_count(), 3);
        assert_eq!(grid.living_cells(), vec![(0, 0), (0, 2), (1, 1)]);

        let ragged = vec![vec![true, false], vec![true]];
        assert!(Grid::from_cells(ragged).is_err());
    }

    #[test]
    fn test_flat_index_mapping() {
        let mut grid = Grid::with_size(3, 4);
        assert_eq!(grid.to_2d(0), Some((0, 0)));
        assert_eq!(grid.to_2d(5), Some((1, 1)));
        assert_eq!(grid.to_2d(11), Some((2, 3)));

        grid.set_cell_at(6, true);
        assert!(grid.get_cell(1, 2));
        assert!(grid.get_cell_at(6));

        // Past the last row
        grid.set_cell_at(12, true);
        assert_eq!(grid.living_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_get() {
        let mut grid = Grid::with_size(3, 3);
        grid.set_cell(1, 1, true);
        let before = grid.cells().to_vec();

        assert!(!grid.get_cell(-1, 0));
        assert!(!grid.get_cell(0, 3));
        assert!(matches!(grid.try_get(3, 0), Err(GridError::OutOfBounds { row: 3, col: 0, .. })));
        assert_eq!(grid.cells(), before.as_slice());
    }

    #[test]
    fn test_out_of_bounds_set() {
        let mut grid = Grid::with_size(2, 2);
        grid.set_cell(-1, 0, true);
        grid.set_cell(0, -1, true);
        grid.set_cell(2, 0, true);
        grid.set_cell(0, 2, true);
        assert!(grid.is_empty());
        assert!(grid.try_set(5, 5, true).is_err());
    }

    #[test]
    fn test_resize_clears_all_generations() {
        let mut grid = Grid::with_size(2, 2);
        grid.set_cell(0, 0, true);
        grid.commit_generation();

        grid.resize(3, 5);
        assert_eq!(grid.cells().len(), 15);
        assert_eq!(grid.previous_cells().len(), 15);
        assert_eq!(grid.next.len(), 15);
        assert!(grid.is_empty());
        assert!(grid.previous_cells().iter().all(|&c| !c));
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_cells(vec![vec![true, false], vec![false, true]]).unwrap();
        assert_eq!(grid.to_string(), "O.\n.O\n");
    }
}
