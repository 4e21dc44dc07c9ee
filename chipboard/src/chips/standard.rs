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
//! The standard set of circuit chips.
use std::fmt;

use once_cell::sync::Lazy;

use crate::{board::Coordinate, chips::ChipCatalog};

/// Chip variant ID for the standard catalog.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum ChipKind {
    /// Processor: 6x6.
    Processor,
    /// Memory: 9x3.
    Memory,
    /// Chip: 6x2.
    Chip,
    /// Square: 3x3.
    Square,
    /// Brick: 3x2.
    Brick,
    /// Byte: 2x2.
    Byte,
    /// Bit: 2x1.
    Bit,
}

static STANDARD: Lazy<ChipCatalog<ChipKind>> = Lazy::new(|| {
    let mut catalog = ChipCatalog::new();
    for &kind in ChipKind::ALL {
        if let Err(err) = catalog.add_variant(kind, kind.footprint(), kind.weight()) {
            unreachable!("standard catalog is malformed: {}", err);
        }
    }
    catalog
});

impl ChipKind {
    /// Every kind, in catalog order.
    pub const ALL: &'static [ChipKind] = &[
        ChipKind::Processor,
        ChipKind::Memory,
        ChipKind::Chip,
        ChipKind::Square,
        ChipKind::Brick,
        ChipKind::Byte,
        ChipKind::Bit,
    ];

    /// Get the unflipped footprint of this kind.
    pub fn footprint(self) -> Coordinate {
        let (w, h) = match self {
            ChipKind::Processor => (6, 6),
            ChipKind::Memory => (9, 3),
            ChipKind::Chip => (6, 2),
            ChipKind::Square => (3, 3),
            ChipKind::Brick => (3, 2),
            ChipKind::Byte => (2, 2),
            ChipKind::Bit => (2, 1),
        };
        Coordinate::new(w, h)
    }

    /// Default spawn weight of this kind. Larger chips are rarer.
    pub fn weight(self) -> u32 {
        match self {
            ChipKind::Processor => 1,
            ChipKind::Memory => 2,
            ChipKind::Chip => 4,
            ChipKind::Square => 4,
            ChipKind::Brick => 8,
            ChipKind::Byte => 8,
            ChipKind::Bit => 16,
        }
    }

    /// Lowercase name of this kind.
    pub fn name(self) -> &'static str {
        match self {
            ChipKind::Processor => "processor",
            ChipKind::Memory => "memory",
            ChipKind::Chip => "chip",
            ChipKind::Square => "square",
            ChipKind::Brick => "brick",
            ChipKind::Byte => "byte",
            ChipKind::Bit => "bit",
        }
    }
}

impl fmt::Display for ChipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

impl ChipCatalog<ChipKind> {
    /// The shared catalog of every [`ChipKind`] with its default weight.
    pub fn standard() -> &'static Self {
        &STANDARD
    }
}
