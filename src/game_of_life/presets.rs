//! Named starting shapes

use super::Grid;
use crate::error::GridError;
use std::fmt;
use std::str::FromStr;

/// A fixed pattern placed relative to an anchor cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Glider,
    Toad,
    Beacon,
    RPentomino,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Glider, Preset::Toad, Preset::Beacon, Preset::RPentomino];

    /// Live cells as (row, col) offsets from the anchor
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Preset::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            Preset::Toad => &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
            Preset::Beacon => &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
            Preset::RPentomino => &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
        }
    }

    /// Bounding box as (height, width)
    pub fn extent(self) -> (usize, usize) {
        self.offsets().iter().fold((0, 0), |(h, w), &(r, c)| {
            (h.max(r as usize + 1), w.max(c as usize + 1))
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Glider => "glider",
            Preset::Toad => "toad",
            Preset::Beacon => "beacon",
            Preset::RPentomino => "r-pentomino",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "glider" => Ok(Preset::Glider),
            "toad" => Ok(Preset::Toad),
            "beacon" => Ok(Preset::Beacon),
            "r-pentomino" | "rpentomino" => Ok(Preset::RPentomino),
            _ => Err(GridError::UnknownPreset(s.to_string())),
        }
    }
}

impl Grid {
    /// Stamp a preset with its top-left offset at (row, col)
    ///
    /// Cells landing outside the grid are rejected one by one by `set_cell`;
    /// the in-bounds part of the shape is still placed.
    pub fn add_preset(&mut self, preset: Preset, row: isize, col: isize) {
        for &(dr, dc) in preset.offsets() {
            self.set_cell(row + dr, col + dc, true);
        }
    }

    pub fn add_glider(&mut self, row: isize, col: isize) {
        self.add_preset(Preset::Glider, row, col);
    }

    pub fn add_toad(&mut self, row: isize, col: isize) {
        self.add_preset(Preset::Toad, row, col);
    }

    pub fn add_beacon(&mut self, row: isize, col: isize) {
        self.add_preset(Preset::Beacon, row, col);
    }

    pub fn add_r_pentomino(&mut self, row: isize, col: isize) {
        self.add_preset(Preset::RPentomino, row, col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_cell_counts() {
        let expected = [(Preset::Glider, 5), (Preset::Toad, 6), (Preset::Beacon, 8), (Preset::RPentomino, 5)];
        for (preset, count) in expected {
            let mut grid = Grid::with_size(6, 6);
            grid.add_preset(preset, 1, 1);
            assert_eq!(grid.living_count(), count, "{}", preset);
        }
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let mut grid = Grid::with_size(10, 10);
        grid.add_glider(1, 1);

        let mut expected = Grid::with_size(10, 10);
        expected.add_glider(2, 2);

        for _ in 0..4 {
            grid.evolve();
        }
        assert_eq!(grid.cells(), expected.cells());

        let mut serial = Grid::with_size(10, 10);
        serial.add_glider(1, 1);
        for _ in 0..4 {
            serial.evolve_serial();
        }
        assert_eq!(serial.cells(), expected.cells());
    }

    #[test]
    fn test_partial_placement_at_edge() {
        let mut grid = Grid::with_size(3, 3);
        grid.add_beacon(1, 1);
        // Only (0,0),(0,1),(1,0),(1,1) offsets land inside
        assert_eq!(grid.living_cells(), vec![(1, 1), (1, 2), (2, 1), (2, 2)]);

        let mut grid = Grid::with_size(4, 4);
        grid.add_glider(-1, 0);
        assert_eq!(grid.living_count(), 4);
    }

    #[test]
    fn test_toad_oscillates() {
        let mut grid = Grid::with_size(6, 6);
        grid.add_toad(2, 1);
        let start = grid.cells().to_vec();

        grid.evolve();
        assert_ne!(grid.cells(), start.as_slice());
        grid.evolve();
        assert_eq!(grid.cells(), start.as_slice());
    }

    #[test]
    fn test_parse_preset_names() {
        assert_eq!("glider".parse::<Preset>().unwrap(), Preset::Glider);
        assert_eq!("Toad".parse::<Preset>().unwrap(), Preset::Toad);
        assert_eq!("r_pentomino".parse::<Preset>().unwrap(), Preset::RPentomino);
        assert_eq!(Preset::RPentomino.to_string().parse::<Preset>().unwrap(), Preset::RPentomino);
        assert!(matches!("lwss".parse::<Preset>(), Err(GridError::UnknownPreset(_))));
    }

    #[test]
    fn test_extent() {
        assert_eq!(Preset::Glider.extent(), (3, 3));
        assert_eq!(Preset::Toad.extent(), (2, 4));
        assert_eq!(Preset::Beacon.extent(), (4, 4));
        assert_eq!(Preset::RPentomino.extent(), (3, 3));
    }
}
