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
//! Procedural circuit boards.
//!
//! A board is tiled with rectangular chips grown inward from its four corners. Each placed
//! chip is wrapped in a one-cell [`Border`][board::TileState::Border] and a ring of
//! [`Perimeter`][board::TileState::Perimeter] cells beyond it; perimeter cells that are
//! reached a second time become new corners to grow from. Chips are drawn from a
//! [`ChipCatalog`] in proportion to their weights.
//!
//! ```
//! use chipboard::{build, ChipCatalog};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let board = build(40, 24, ChipCatalog::standard(), &mut rng).unwrap();
//! assert!(!board.chips().is_empty());
//! for chip in board.chips() {
//!     assert!(chip.cells().all(|cell| board.dimensions().contains(cell)));
//! }
//! ```
//!
//! Coverage is not guaranteed to be complete: cells that no corner ever reaches stay
//! [`Empty`][board::TileState::Empty]. Use [`BoardBuilder::generate`] to get the final
//! grid if a follow-up fill pass is needed.

pub mod board;
pub mod chips;

pub use crate::{
    board::{build, Board, BoardBuilder, BuildError, PlacedChip},
    chips::{ChipCatalog, ChipKind, UniformIntSource},
};
