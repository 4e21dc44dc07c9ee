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
//! Types that make up the game board.

pub use self::{
    builder::{build, BoardBuilder, BuildStats, Generation},
    coordinate::Coordinate,
    corners::{
        mark_border, mark_perimeter_or_enqueue, open_sides, Corner, CornerKind, CornerOrder,
        CornerQueue,
    },
    dimensions::{Dimensions, Side, Sides},
    errors::{BuildError, TileError},
    grid::{TileGrid, TileState},
};

mod builder;
mod coordinate;
mod corners;
mod dimensions;
mod errors;
mod grid;

/// A chip that has been placed on a board.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PlacedChip<I> {
    /// ID of the chip variant.
    id: I,

    /// Top-left cell of the footprint.
    position: Coordinate,

    /// Footprint as placed, after flipping.
    footprint: Coordinate,

    /// Whether the variant's width and height were swapped to fit.
    flipped: bool,
}

impl<I> PlacedChip<I> {
    /// Get the ID of the chip variant.
    pub fn id(&self) -> &I {
        &self.id
    }

    /// Top-left cell of the chip.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    /// Width (`x`) and height (`y`) occupied on the board.
    pub fn footprint(&self) -> Coordinate {
        self.footprint
    }

    /// Whether the variant was rotated a quarter turn to fit.
    pub fn flipped(&self) -> bool {
        self.flipped
    }

    /// Get an iterator over the cells covered by this chip.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        self.position.rect(self.footprint)
    }

    /// Check if the chip covers the given cell.
    pub fn contains(&self, coord: Coordinate) -> bool {
        let rel = coord - self.position;
        rel.x >= 0 && rel.y >= 0 && rel.x < self.footprint.x && rel.y < self.footprint.y
    }
}

/// A finished board: its size and the chips on it, in the order they were placed.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board<I> {
    /// Size of the board.
    dim: Dimensions,

    /// Chips in placement order.
    chips: Vec<PlacedChip<I>>,
}

impl<I> Board<I> {
    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> Dimensions {
        self.dim
    }

    /// Width of the board in cells.
    pub fn width(&self) -> u32 {
        self.dim.width()
    }

    /// Height of the board in cells.
    pub fn height(&self) -> u32 {
        self.dim.height()
    }

    /// Chips in the order they were placed.
    pub fn chips(&self) -> &[PlacedChip<I>] {
        &self.chips
    }

    /// Extract the placed chips from this board.
    pub fn into_chips(self) -> Vec<PlacedChip<I>> {
        self.chips
    }

    /// Get the chip covering the given cell, if any.
    pub fn chip_at(&self, coord: Coordinate) -> Option<&PlacedChip<I>> {
        self.chips.iter().find(|chip| chip.contains(coord))
    }
}
