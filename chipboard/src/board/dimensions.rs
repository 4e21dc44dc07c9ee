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
//! Rectangular board dimensions and the four cardinal sides of a cell.
use std::convert::TryFrom;

use enumflags2::BitFlags;

use crate::board::Coordinate;

/// One of the four sides of a cell. Used as a [`BitFlags`] set when classifying which
/// neighbors of a cell are still open.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq)]
#[repr(u8)]
pub enum Side {
    /// Toward `y - 1`.
    Up = 0b0001,
    /// Toward `y + 1`.
    Down = 0b0010,
    /// Toward `x - 1`.
    Left = 0b0100,
    /// Toward `x + 1`.
    Right = 0b1000,
}

impl Side {
    /// All four sides, in the order neighbors are visited.
    pub const ALL: [Side; 4] = [Side::Up, Side::Down, Side::Left, Side::Right];

    /// Offset from a cell to its neighbor on this side.
    pub fn offset(self) -> Coordinate {
        match self {
            Side::Up => Coordinate::new(0, -1),
            Side::Down => Coordinate::new(0, 1),
            Side::Left => Coordinate::new(-1, 0),
            Side::Right => Coordinate::new(1, 0),
        }
    }
}

/// Simple rectangular dimensions of a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Dimensions {
    /// Width of the board. This cooresponds to the `x` [`Coordinate`].
    width: u32,
    /// Height of the board. This cooresponds to the `y` [`Coordinate`].
    height: u32,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified width and height.
    /// Returns `None` if `width` or `height` is 0, if either does not fit in an `i32`
    /// coordinate, or if `width * height` exceeds `usize::max_value()`.
    pub fn try_new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        i32::try_from(width).ok()?;
        i32::try_from(height).ok()?;
        (width as usize)
            .checked_mul(height as usize)
            .map(|_| Self { width, height })
    }

    /// Get the width of these [`Dimensions`].
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height of these [`Dimensions`].
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Compute the total number of cells. Used to allocate storage for the grid.
    pub fn total_size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check if the given [`Coordinate`] lies within `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as u32) < self.width
            && (coord.y as u32) < self.height
    }

    /// Check if the given [`Coordinate`] lies on the outermost ring of cells.
    pub fn on_edge(&self, coord: Coordinate) -> bool {
        self.contains(coord)
            && (coord.x == 0
                || coord.y == 0
                || coord.x as u32 == self.width - 1
                || coord.y as u32 == self.height - 1)
    }

    /// Convert a coordinate to a linear index within these dimensions.
    /// Returns `None` if the coordinate is out of bounds.
    pub fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.y as usize * self.width as usize + coord.x as usize)
        } else {
            None
        }
    }

    /// Convert a linear index back into a [`Coordinate`]. Panics if `idx >= total_size`.
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        assert!(idx < self.total_size(), "index {} out of bounds for {:?}", idx, self);
        let width = self.width as usize;
        Coordinate::new((idx % width) as i32, (idx / width) as i32)
    }

    /// The four extreme cells of the board, in the order top-left, top-right,
    /// bottom-left, bottom-right.
    pub fn extremes(&self) -> [Coordinate; 4] {
        let right = self.width as i32 - 1;
        let bottom = self.height as i32 - 1;
        [
            Coordinate::new(0, 0),
            Coordinate::new(right, 0),
            Coordinate::new(0, bottom),
            Coordinate::new(right, bottom),
        ]
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the coordinates of
    /// that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let width = self.width as i32;
        (0..self.height as i32).map(move |y| (0..width).map(move |x| Coordinate { x, y }))
    }

    /// Iterate the in-bounds neighbors of the given coordinate along with the side they
    /// lie on.
    pub fn neighbors(self, coord: Coordinate) -> impl Iterator<Item = (Side, Coordinate)> {
        Side::ALL
            .iter()
            .map(move |&side| (side, coord + side.offset()))
            .filter(move |&(_, neighbor)| self.contains(neighbor))
    }
}

/// Set of sides, as produced when classifying a cell's open neighbors.
pub type Sides = BitFlags<Side>;
