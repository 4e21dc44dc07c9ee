// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Defines the tile grid that the board builder paints chips onto.

use std::ops::Index;

use crate::board::{Coordinate, Dimensions, TileError};

/// Classification of a single grid cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum TileState {
    /// Unclaimed interior space.
    Empty,
    /// Boundary of the playable area or of the region still open to placement. A
    /// perimeter cell that is touched again becomes a corner.
    Perimeter,
    /// Buffer cell adjacent to a placed chip. Never placeable.
    Border,
    /// Part of a placed chip's footprint.
    Chip,
    /// Reserved for wiring between chips. Never written by the builder.
    Connection,
}

impl TileState {
    /// Whether a chip may still be placed over, or a perimeter grown into, this cell.
    pub fn is_open(self) -> bool {
        match self {
            TileState::Empty | TileState::Perimeter => true,
            TileState::Border | TileState::Chip | TileState::Connection => false,
        }
    }

    /// Whether this state is write-once for the rest of a generation run.
    pub fn is_sealed(self) -> bool {
        match self {
            TileState::Border | TileState::Chip => true,
            TileState::Empty | TileState::Perimeter | TileState::Connection => false,
        }
    }
}

impl Default for TileState {
    fn default() -> Self {
        TileState::Empty
    }
}

/// Fixed-size grid of [`TileState`]s. Created with an `Empty` interior surrounded by a
/// ring of `Perimeter` cells.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TileGrid {
    /// Dimensions of this grid.
    dim: Dimensions,
    /// Cells that make up this grid, row major.
    cells: Box<[TileState]>,
}

impl TileGrid {
    /// Construct a grid with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        let cells = (0..dim.total_size())
            .map(|idx| {
                if dim.on_edge(dim.un_linearize(idx)) {
                    TileState::Perimeter
                } else {
                    TileState::Empty
                }
            })
            .collect();
        Self { dim, cells }
    }

    /// Get the [`Dimensions`] of this grid.
    pub fn dimensions(&self) -> Dimensions {
        self.dim
    }

    /// Returns true if the coordinate lies inside the grid.
    pub fn is_inside(&self, coord: Coordinate) -> bool {
        self.dim.contains(coord)
    }

    /// Returns true if the coordinate lies inside the grid and its cell is open.
    pub fn is_open(&self, coord: Coordinate) -> bool {
        self.get(coord).map_or(false, TileState::is_open)
    }

    /// Get the state of the cell at the given [`Coordinate`].
    pub fn get(&self, coord: Coordinate) -> Result<TileState, TileError> {
        self.dim
            .try_linearize(coord)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(coord))
    }

    /// Set the state of the cell at the given [`Coordinate`]. Sealed cells reject any
    /// write except repainting a `Border` as `Border`.
    pub fn set(&mut self, coord: Coordinate, state: TileState) -> Result<(), TileError> {
        let idx = self
            .dim
            .try_linearize(coord)
            .ok_or_else(|| self.out_of_bounds(coord))?;
        let current = self.cells[idx];
        match (current, state) {
            (TileState::Border, TileState::Border) => Ok(()),
            (current, requested) if current.is_sealed() => Err(TileError::Sealed {
                coord,
                current,
                requested,
            }),
            _ => {
                self.cells[idx] = state;
                Ok(())
            }
        }
    }

    /// Count the cells currently in the given state.
    pub fn count(&self, state: TileState) -> usize {
        self.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Get an iterator over the rows of this grid. Each row is an iterator over the
    /// states of that row.
    pub fn rows<'a>(&'a self) -> impl 'a + Iterator<Item = impl 'a + Iterator<Item = TileState>> {
        self.dim
            .iter_coordinates()
            .map(move |row| row.map(move |coord| self[coord]))
    }

    fn out_of_bounds(&self, coord: Coordinate) -> TileError {
        TileError::OutOfBounds {
            coord,
            width: self.dim.width(),
            height: self.dim.height(),
        }
    }
}

impl Index<Coordinate> for TileGrid {
    type Output = TileState;

    fn index(&self, coord: Coordinate) -> &Self::Output {
        match self.dim.try_linearize(coord) {
            Some(idx) => &self.cells[idx],
            None => panic!("{:?} is out of bounds for {:?}", coord, self.dim),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(width: u32, height: u32) -> TileGrid {
        TileGrid::new(Dimensions::try_new(width, height).unwrap())
    }

    #[test]
    fn new_grid_has_perimeter_ring() {
        let grid = grid(5, 4);
        assert_eq!(grid.count(TileState::Perimeter), 2 * 5 + 2 * 4 - 4);
        assert_eq!(grid.count(TileState::Empty), 3 * 2);
        assert_eq!(grid[Coordinate::new(0, 0)], TileState::Perimeter);
        assert_eq!(grid[Coordinate::new(2, 2)], TileState::Empty);
    }

    #[test]
    fn accessors_are_bounds_checked() {
        let mut grid = grid(3, 3);
        assert!(!grid.is_inside(Coordinate::new(3, 0)));
        assert!(!grid.is_open(Coordinate::new(-1, 0)));
        assert_eq!(
            grid.get(Coordinate::new(0, 3)),
            Err(TileError::OutOfBounds {
                coord: Coordinate::new(0, 3),
                width: 3,
                height: 3,
            })
        );
        let err = grid.set(Coordinate::new(-1, -1), TileState::Chip).unwrap_err();
        assert_eq!(err.coord(), Coordinate::new(-1, -1));
    }

    #[test]
    fn chip_cells_are_write_once() {
        let mut grid = grid(4, 4);
        let coord = Coordinate::new(1, 1);
        grid.set(coord, TileState::Chip).unwrap();
        for &state in &[TileState::Empty, TileState::Perimeter, TileState::Border, TileState::Chip] {
            assert!(matches!(
                grid.set(coord, state),
                Err(TileError::Sealed { current: TileState::Chip, .. })
            ));
        }
        assert_eq!(grid[coord], TileState::Chip);
    }

    #[test]
    fn border_repaint_is_idempotent() {
        let mut grid = grid(4, 4);
        let coord = Coordinate::new(2, 1);
        grid.set(coord, TileState::Border).unwrap();
        assert_eq!(grid.set(coord, TileState::Border), Ok(()));
        assert!(grid.set(coord, TileState::Chip).is_err());
        assert!(!grid.is_open(coord));
    }

    #[test]
    fn open_predicate_does_not_depend_on_order() {
        assert!(TileState::Empty.is_open());
        assert!(TileState::Perimeter.is_open());
        assert!(!TileState::Chip.is_open());
        assert!(!TileState::Border.is_open());
        assert!(!TileState::Connection.is_open());
        assert!(!TileState::Connection.is_sealed());
    }
}
