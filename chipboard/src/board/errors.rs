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
//! Errors used by the [`TileGrid`][crate::board::TileGrid] and the board builder.

use thiserror::Error;

use crate::board::{Coordinate, TileState};

/// Reason why a tile could not be read or written.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum TileError {
    /// The coordinate lies outside of the grid.
    #[error("{coord:?} is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        coord: Coordinate,
        width: u32,
        height: u32,
    },
    /// The cell already holds a write-once state.
    #[error("cannot overwrite {current:?} at {coord:?} with {requested:?}")]
    Sealed {
        coord: Coordinate,
        current: TileState,
        requested: TileState,
    },
}

impl TileError {
    /// Get the coordinate that caused the error.
    pub fn coord(&self) -> Coordinate {
        match *self {
            TileError::OutOfBounds { coord, .. } | TileError::Sealed { coord, .. } => coord,
        }
    }
}

/// Error returned when a board cannot be built with the requested configuration.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum BuildError {
    /// The board is too small to admit a corner placement of the largest chip, or too
    /// large to address.
    #[error("a {width}x{height} board is invalid, each side must be at least {minimum}")]
    InvalidDimensions { width: u32, height: u32, minimum: u32 },
    /// No chip variant can ever be selected.
    #[error("no chip variants with a positive weight are configured")]
    EmptyCatalog,
    /// The combined weight of the catalog does not fit the selector's range.
    #[error("the total chip weight overflows")]
    WeightOverflow,
}
