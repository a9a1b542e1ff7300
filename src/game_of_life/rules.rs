//! Game of Life rules and the serial / parallel evolution passes

use super::Grid;
use itertools::iproduct;
use rayon::prelude::*;

/// Relative positions of the Moore neighborhood
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Read-only view of a generation used while computing the next one
#[derive(Debug, Clone, Copy)]
pub struct FieldView<'a> {
    cells: &'a [bool],
    height: usize,
    width: usize,
}

impl<'a> FieldView<'a> {
    pub fn new(cells: &'a [bool], height: usize, width: usize) -> Self {
        debug_assert_eq!(cells.len(), height * width);
        Self { cells, height, width }
    }

    /// Cells outside the grid are dead
    #[inline]
    fn is_alive(&self, row: isize, col: isize) -> bool {
        row >= 0
            && (row as usize) < self.height
            && col >= 0
            && (col as usize) < self.width
            && self.cells[row as usize * self.width + col as usize]
    }

    /// Count living neighbors on the calling thread
    pub fn count_neighbors_serial(&self, row: usize, col: usize) -> u8 {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&offset| offset != (0, 0))
            .filter(|&(dr, dc)| self.is_alive(row as isize + dr, col as isize + dc))
            .count() as u8
    }

    /// Count living neighbors as a parallel reduction over the eight offsets
    pub fn count_neighbors_parallel(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .par_iter()
            .map(|&(dr, dc)| self.is_alive(row as isize + dr, col as isize + dc) as u8)
            .sum()
    }
}

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    #[inline]
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    /// Fill `next` from `view`, one cell after another
    pub fn compute_serial(view: &FieldView<'_>, next: &mut [bool]) {
        for (p, cell) in next.iter_mut().enumerate() {
            let (row, col) = (p / view.width, p % view.width);
            let neighbors = view.count_neighbors_serial(row, col);
            *cell = Self::should_be_alive(view.cells[p], neighbors);
        }
    }

    /// Fill `next` from `view`, fanning cells out across the rayon pool
    ///
    /// Each worker writes only the cells it was handed; `view` is never
    /// written during the pass. Returns once every cell is computed.
    pub fn compute_parallel(view: &FieldView<'_>, next: &mut [bool]) {
        next.par_iter_mut().enumerate().for_each(|(p, cell)| {
            let (row, col) = (p / view.width, p % view.width);
            let neighbors = view.count_neighbors_parallel(row, col);
            *cell = Self::should_be_alive(view.cells[p], neighbors);
        });
    }
}

impl Grid {
    /// Advance one generation on the calling thread
    pub fn evolve_serial(&mut self) {
        let view = FieldView::new(&self.current, self.height(), self.width());
        GameOfLifeRules::compute_serial(&view, &mut self.next);
        self.commit_generation();
    }

    /// Advance one generation using the rayon pool
    pub fn evolve(&mut self) {
        let view = FieldView::new(&self.current, self.height(), self.width());
        GameOfLifeRules::compute_parallel(&view, &mut self.next);
        self.commit_generation();
    }

    /// Count living neighbors of a cell in the current generation
    pub fn count_neighbors(&self, row: usize, col: usize) -> u8 {
        FieldView::new(&self.current, self.height(), self.width()).count_neighbors_serial(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let cells = rows
            .iter()
            .map(|row| row.chars().map(|c| c == 'O').collect())
            .collect();
        Grid::from_cells(cells).unwrap()
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));  // Survival with 2 neighbors
        assert!(GameOfLifeRules::should_be_alive(true, 3));  // Survival with 3 neighbors
        assert!(GameOfLifeRules::should_be_alive(false, 3)); // Birth with 3 neighbors
        assert!(!GameOfLifeRules::should_be_alive(true, 1)); // Death with 1 neighbor
        assert!(!GameOfLifeRules::should_be_alive(true, 4)); // Death with 4 neighbors
        assert!(!GameOfLifeRules::should_be_alive(false, 2)); // No birth with 2 neighbors
        for n in 0..=8 {
            if n != 3 {
                assert!(!GameOfLifeRules::should_be_alive(false, n));
            }
        }
    }

    #[test]
    fn test_neighbor_counting() {
        let grid = grid_from(&["OOO", "O.O", "OOO"]);
        let view = FieldView::new(grid.cells(), 3, 3);

        assert_eq!(view.count_neighbors_serial(1, 1), 8);
        assert_eq!(view.count_neighbors_parallel(1, 1), 8);
        // Corner: two ring neighbors, center is dead, the rest are off-grid
        assert_eq!(view.count_neighbors_serial(0, 0), 2);
        assert_eq!(view.count_neighbors_parallel(0, 0), 2);
        assert_eq!(grid.count_neighbors(0, 1), 4);
    }

    #[test]
    fn test_no_wraparound() {
        let grid = grid_from(&["O..", "...", "..O"]);
        assert_eq!(grid.count_neighbors(0, 2), 0);
        assert_eq!(grid.count_neighbors(2, 0), 0);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut serial = grid_from(&["...", ".O.", "..."]);
        let mut parallel = serial.clone();

        serial.evolve_serial();
        parallel.evolve();

        assert!(serial.is_empty());
        assert!(parallel.is_empty());
    }

    #[test]
    fn test_still_life_block() {
        let mut grid = grid_from(&["....", ".OO.", ".OO.", "...."]);
        let before = grid.cells().to_vec();
        grid.evolve();

        assert_eq!(grid.cells(), before.as_slice());
        assert!(grid.is_stable());
    }

    #[test]
    fn test_oscillator_blinker() {
        let mut grid = grid_from(&["...", "OOO", "..."]);
        let horizontal = grid.cells().to_vec();

        grid.evolve_serial();
        assert_eq!(grid.cells(), grid_from(&[".O.", ".O.", ".O."]).cells());
        assert!(!grid.is_stable());
        assert_eq!(grid.previous_cells(), horizontal.as_slice());

        grid.evolve();
        assert_eq!(grid.cells(), horizontal.as_slice());
        assert!(!grid.is_stable());
    }

    #[test]
    fn test_dead_grid_is_immediately_stable() {
        let mut grid = Grid::with_size(5, 7);
        grid.evolve();
        assert!(grid.is_stable());

        let mut grid = Grid::with_size(5, 7);
        grid.evolve_serial();
        assert!(grid.is_stable());
    }

    #[test]
    fn test_stability_compares_pre_and_post_step() {
        // A blinker never stabilizes even though it repeats every two steps
        let mut grid = grid_from(&[".....", ".....", ".OOO.", ".....", "....."]);
        for _ in 0..4 {
            grid.evolve();
            assert!(!grid.is_stable());
        }
    }

    #[test]
    fn test_serial_and_parallel_agree() {
        let rows = [
            "O..O.OO...",
            ".OO...O.O.",
            "..O.OOO..O",
            "O...O...OO",
            ".O.O..O...",
            "OO...O.O.O",
            "...OO...O.",
        ];
        let mut serial = grid_from(&rows);
        let mut parallel = serial.clone();

        for _ in 0..12 {
            serial.evolve_serial();
            parallel.evolve();
            assert_eq!(serial.cells(), parallel.cells());
            assert_eq!(serial.previous_cells(), parallel.previous_cells());
            assert_eq!(serial.is_stable(), parallel.is_stable());
        }
    }

    #[test]
    fn test_evolve_empty_grid() {
        let mut grid = Grid::new();
        grid.evolve();
        grid.evolve_serial();
        assert!(grid.is_stable());
    }
}
