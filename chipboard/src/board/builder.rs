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
//! Grows a board inward from its four corners.
use log::{debug, info, trace};

use crate::{
    board::{
        mark_border, mark_perimeter_or_enqueue, Board, BuildError, Coordinate, Corner,
        CornerOrder, CornerQueue, Dimensions, PlacedChip, TileGrid, TileState,
    },
    chips::{ChipCatalog, ChipId, UniformIntSource, WeightedSelector},
};

/// Counters collected while building a board.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct BuildStats {
    /// Corners taken from the queue.
    pub corners: usize,
    /// Corners discarded because earlier placements had already claimed them.
    pub stale: usize,
    /// Corners where the selected chip fit in neither orientation.
    pub unfit: usize,
    /// Corners pushed onto the queue, including the four seeds.
    pub enqueued: usize,
}

/// Everything produced by one build: the board, the final tile grid and the counters.
#[derive(Debug, Clone)]
pub struct Generation<I> {
    pub board: Board<I>,
    pub grid: TileGrid,
    pub stats: BuildStats,
}

impl<I> Generation<I> {
    /// Fraction of all cells covered by chips.
    pub fn coverage(&self) -> f64 {
        let dim = self.grid.dimensions();
        self.grid.count(TileState::Chip) as f64 / dim.total_size() as f64
    }
}

/// Chosen orientation of a chip at a corner.
#[derive(Debug, Copy, Clone)]
struct Fit {
    pivot: Coordinate,
    size: Coordinate,
    flipped: bool,
}

/// Validated build configuration. Building never fails once this exists.
#[derive(Debug, Clone)]
pub struct BoardBuilder<'c, I> {
    dim: Dimensions,
    selector: WeightedSelector<'c, I>,
    order: CornerOrder,
}

impl<'c, I: ChipId> BoardBuilder<'c, I> {
    /// Check the catalog and the board size. Each side of the board must be at least twice
    /// the longest side of any selectable chip.
    pub fn new(
        width: u32,
        height: u32,
        catalog: &'c ChipCatalog<I>,
    ) -> Result<Self, BuildError> {
        let selector = WeightedSelector::new(catalog)?;
        let minimum = catalog.largest_dimension().saturating_mul(2);
        let invalid = BuildError::InvalidDimensions {
            width,
            height,
            minimum,
        };
        if width < minimum || height < minimum {
            return Err(invalid);
        }
        let dim = Dimensions::try_new(width, height).ok_or(invalid)?;
        Ok(Self {
            dim,
            selector,
            order: CornerOrder::default(),
        })
    }

    /// Set the order in which corner candidates are processed.
    pub fn corner_order(mut self, order: CornerOrder) -> Self {
        self.order = order;
        self
    }

    /// Get the [`Dimensions`] of the boards this builder produces.
    pub fn dimensions(&self) -> Dimensions {
        self.dim
    }

    /// Build a board, keeping the final grid and counters.
    pub fn generate<R: UniformIntSource + ?Sized>(&self, rng: &mut R) -> Generation<I> {
        let mut grid = TileGrid::new(self.dim);
        let mut corners = CornerQueue::new(self.order, &self.dim);
        for &corner in Corner::extremes(&self.dim).iter() {
            corners.push(corner);
        }

        let mut chips = Vec::new();
        let mut stats = BuildStats::default();
        while let Some(corner) = corners.pop() {
            stats.corners += 1;
            if grid.get(corner.coord) != Ok(TileState::Perimeter) {
                trace!("discarding stale corner {:?}", corner);
                stats.stale += 1;
                continue;
            }

            let variant = self.selector.select(rng);
            let fit = match orient(&grid, corner, variant.footprint()) {
                Some(fit) => fit,
                None => {
                    trace!("{:?} does not fit at {:?}", variant.id(), corner);
                    stats.unfit += 1;
                    continue;
                }
            };
            paint(&mut grid, &mut corners, fit);
            debug!(
                "placed {:?} at {:?} (flipped: {}) from {:?}",
                variant.id(),
                fit.pivot,
                fit.flipped,
                corner.kind
            );
            chips.push(PlacedChip {
                id: variant.id().clone(),
                position: fit.pivot,
                footprint: fit.size,
                flipped: fit.flipped,
            });
        }
        stats.enqueued = corners.pushed();

        info!(
            "built {}x{} board with {} chips ({} corners, {} stale, {} unfit)",
            self.dim.width(),
            self.dim.height(),
            chips.len(),
            stats.corners,
            stats.stale,
            stats.unfit
        );
        Generation {
            board: Board {
                dim: self.dim,
                chips,
            },
            grid,
            stats,
        }
    }

    /// Build a board.
    pub fn build<R: UniformIntSource + ?Sized>(&self, rng: &mut R) -> Board<I> {
        self.generate(rng).board
    }
}

/// Build a `width` x `height` board from the chips in `catalog`, drawing from `rng`.
pub fn build<I: ChipId, R: UniformIntSource + ?Sized>(
    width: u32,
    height: u32,
    catalog: &ChipCatalog<I>,
    rng: &mut R,
) -> Result<Board<I>, BuildError> {
    Ok(BoardBuilder::new(width, height, catalog)?.build(rng))
}

/// Find the first orientation, unflipped then flipped, whose footprint anchored at the
/// corner lies entirely on open cells.
fn orient(grid: &TileGrid, corner: Corner, footprint: Coordinate) -> Option<Fit> {
    let flipped = footprint.flip();
    let tries = if flipped == footprint { 1 } else { 2 };
    [(footprint, false), (flipped, true)]
        .iter()
        .take(tries)
        .map(|&(size, flipped)| Fit {
            pivot: corner.kind.pivot(corner.coord, size),
            size,
            flipped,
        })
        .find(|fit| fit.pivot.rect(fit.size).all(|coord| grid.is_open(coord)))
}

/// Paint a chip's footprint, its border ring and the perimeter ring beyond it.
fn paint(grid: &mut TileGrid, corners: &mut CornerQueue, fit: Fit) {
    for coord in fit.pivot.rect(fit.size) {
        if let Err(err) = grid.set(coord, TileState::Chip) {
            unreachable!("fitted footprint could not be painted: {}", err);
        }
    }
    for coord in fit.pivot.ring(fit.size, 1) {
        mark_border(grid, coord);
    }
    for coord in fit.pivot.ring(fit.size, 2) {
        mark_perimeter_or_enqueue(grid, corners, coord);
    }
}

#[cfg(test)]
mod tests {
    use crate::chips::{ChipKind, FromFn};

    use super::*;

    fn single(footprint: (i32, i32)) -> ChipCatalog<&'static str> {
        let mut catalog = ChipCatalog::new();
        catalog.add_variant("only", footprint, 1).unwrap();
        catalog
    }

    #[test]
    fn too_small_boards_are_rejected_up_front() {
        let catalog = ChipCatalog::standard();
        assert_eq!(
            BoardBuilder::new(1, 1, catalog).unwrap_err(),
            BuildError::InvalidDimensions {
                width: 1,
                height: 1,
                minimum: 18,
            }
        );
        assert!(BoardBuilder::new(18, 17, catalog).is_err());
        assert!(BoardBuilder::new(18, 18, catalog).is_ok());
    }

    #[test]
    fn empty_catalog_is_rejected_before_dimensions() {
        let catalog = ChipCatalog::<ChipKind>::new();
        assert_eq!(
            BoardBuilder::new(1, 1, &catalog).unwrap_err(),
            BuildError::EmptyCatalog
        );
    }

    #[test]
    fn smallest_board_holds_one_chip() {
        let catalog = single((2, 2));
        let generation = BoardBuilder::new(4, 4, &catalog)
            .unwrap()
            .generate(&mut FromFn(|_| 0));
        let chips = generation.board.chips();
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].position(), Coordinate::new(0, 0));
        assert!(!chips[0].flipped());

        let grid = &generation.grid;
        assert_eq!(grid.count(TileState::Chip), 4);
        assert_eq!(grid.count(TileState::Empty), 0);
        assert_eq!(
            grid.count(TileState::Border) + grid.count(TileState::Perimeter),
            16 - 4
        );
        // The three other seeds plus the corner reopened next to the chip.
        assert_eq!(generation.stats.unfit, 4);
        assert_eq!(generation.stats.stale, 0);
        assert_eq!(generation.coverage(), 0.25);
    }

    #[test]
    fn orientation_falls_back_to_flipped() {
        let dim = Dimensions::try_new(10, 10).unwrap();
        let mut grid = TileGrid::new(dim);
        // Block the fourth column of the top row so a 4x1 chip cannot lie flat.
        grid.set(Coordinate::new(3, 0), TileState::Border).unwrap();
        let corner = Corner::new(Coordinate::new(0, 0), crate::board::CornerKind::TopLeft);
        let fit = orient(&grid, corner, Coordinate::new(4, 1)).unwrap();
        assert!(fit.flipped);
        assert_eq!(fit.size, Coordinate::new(1, 4));
        assert_eq!(fit.pivot, Coordinate::new(0, 0));

        grid.set(Coordinate::new(0, 3), TileState::Border).unwrap();
        assert!(orient(&grid, corner, Coordinate::new(4, 1)).is_none());
    }

    #[test]
    fn far_corners_anchor_inward() {
        let catalog = single((3, 2));
        let board = BoardBuilder::new(20, 20, &catalog)
            .unwrap()
            .build(&mut FromFn(|_| 0));
        let positions: Vec<_> = board
            .chips()
            .iter()
            .take(4)
            .map(PlacedChip::position)
            .collect();
        assert_eq!(
            positions,
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(17, 0),
                Coordinate::new(0, 18),
                Coordinate::new(17, 18),
            ]
        );
    }

    #[test]
    fn center_first_order_still_fills_corners() {
        let catalog = ChipCatalog::standard();
        let mut next = 0u32;
        let board = BoardBuilder::new(30, 30, catalog)
            .unwrap()
            .corner_order(CornerOrder::CenterFirst)
            .build(&mut FromFn(move |bound| {
                next = (next + 7) % bound;
                next
            }));
        assert!(!board.chips().is_empty());
        assert_eq!(board.chips()[0].position(), Coordinate::new(0, 0));
    }
}
