//! Grid module - static terrain of the map
//!
//! The grid is a 20x20 classification of cells into open water and walls.
//! Uses a flat array for cache locality; it is never mutated once a layout
//! has been loaded or generated.
//! Coordinates: (x, y) where x ranges 0..19 (left to right), y ranges 0..19 (top to bottom)

use crate::types::{Pos, Terrain, MAP_HEIGHT, MAP_WIDTH};

/// Total number of cells on the map
pub(crate) const MAP_SIZE: usize = (MAP_WIDTH as usize) * (MAP_HEIGHT as usize);

/// Calculate flat index from a position, `None` when out of bounds
#[inline(always)]
pub(crate) fn index(pos: Pos) -> Option<usize> {
    if !pos.in_bounds() {
        return None;
    }
    Some((pos.y as usize) * (MAP_WIDTH as usize) + (pos.x as usize))
}

/// The terrain grid - 20 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row-major order (y * WIDTH + x)
    cells: [Terrain; MAP_SIZE],
}

impl Grid {
    /// Create a grid with every cell open
    pub fn open() -> Self {
        Self {
            cells: [Terrain::Open; MAP_SIZE],
        }
    }

    /// Create a grid whose border ring is wall and interior open
    pub fn bordered() -> Self {
        let mut grid = Self::open();
        for y in 0..MAP_HEIGHT as i16 {
            for x in 0..MAP_WIDTH as i16 {
                if x == 0 || y == 0 || x == MAP_WIDTH as i16 - 1 || y == MAP_HEIGHT as i16 - 1 {
                    grid.set(Pos::new(x, y), Terrain::Wall);
                }
            }
        }
        grid
    }

    /// Terrain at `pos`, `None` if out of bounds
    pub fn classify(&self, pos: Pos) -> Option<Terrain> {
        index(pos).map(|idx| self.cells[idx])
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.in_bounds()
    }

    /// In bounds and open. Out-of-bounds counts as blocked.
    pub fn is_open(&self, pos: Pos) -> bool {
        matches!(self.classify(pos), Some(Terrain::Open))
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        matches!(self.classify(pos), Some(Terrain::Wall))
    }

    /// Set terrain at `pos`. Returns false if out of bounds.
    pub(crate) fn set(&mut self, pos: Pos, terrain: Terrain) -> bool {
        match index(pos) {
            Some(idx) => {
                self.cells[idx] = terrain;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[Terrain] {
        &self.cells
    }

    pub fn wall_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Terrain::Wall).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_calculation() {
        assert_eq!(index(Pos::new(0, 0)), Some(0));
        assert_eq!(index(Pos::new(19, 0)), Some(19));
        assert_eq!(index(Pos::new(0, 1)), Some(20));
        assert_eq!(index(Pos::new(19, 19)), Some(399));
        assert_eq!(index(Pos::new(-1, 0)), None);
        assert_eq!(index(Pos::new(20, 0)), None);
        assert_eq!(index(Pos::new(0, 20)), None);
    }

    #[test]
    fn test_bordered_grid() {
        let grid = Grid::bordered();
        assert!(grid.is_wall(Pos::new(0, 0)));
        assert!(grid.is_wall(Pos::new(19, 7)));
        assert!(grid.is_wall(Pos::new(7, 19)));
        assert!(grid.is_open(Pos::new(1, 1)));
        assert!(grid.is_open(Pos::new(18, 18)));
        // 4 * 20 - 4 corners counted once
        assert_eq!(grid.wall_count(), 76);
    }

    #[test]
    fn test_out_of_bounds_is_blocked() {
        let grid = Grid::open();
        assert_eq!(grid.classify(Pos::new(-1, 3)), None);
        assert!(!grid.is_open(Pos::new(20, 3)));
        assert!(!grid.is_wall(Pos::new(20, 3)));
        assert!(!grid.in_bounds(Pos::new(3, -1)));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::open();
        assert!(!grid.set(Pos::new(-1, 0), Terrain::Wall));
        assert!(grid.set(Pos::new(3, 4), Terrain::Wall));
        assert_eq!(grid.classify(Pos::new(3, 4)), Some(Terrain::Wall));
        assert_eq!(grid.cells()[4 * 20 + 3], Terrain::Wall);
    }
}
