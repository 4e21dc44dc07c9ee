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
//! Corner candidates: classification, queueing and discovery during chip placement.
use std::{
    cmp::Ordering,
    collections::{BinaryHeap, VecDeque},
};

use log::trace;

use crate::board::{Coordinate, Dimensions, Side, Sides, TileGrid, TileState};

/// Which two directions are open at a corner. The footprint of a chip placed at a corner
/// extends along the open directions, away from the occupied space.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CornerKind {
    /// Open to the right and downward.
    TopLeft,
    /// Open to the left and downward.
    TopRight,
    /// Open to the right and upward.
    BottomLeft,
    /// Open to the left and upward.
    BottomRight,
}

impl CornerKind {
    /// Classify a set of open sides. Rightward wins over leftward and downward over upward
    /// when both are open. Returns `None` unless at least one side is open on each axis.
    pub fn from_open_sides(open: Sides) -> Option<Self> {
        let rightward = if open.contains(Side::Right) {
            true
        } else if open.contains(Side::Left) {
            false
        } else {
            return None;
        };
        let downward = if open.contains(Side::Down) {
            true
        } else if open.contains(Side::Up) {
            false
        } else {
            return None;
        };
        Some(match (rightward, downward) {
            (true, true) => CornerKind::TopLeft,
            (false, true) => CornerKind::TopRight,
            (true, false) => CornerKind::BottomLeft,
            (false, false) => CornerKind::BottomRight,
        })
    }

    /// Top-left cell of a footprint of the given size anchored at a corner of this kind.
    pub fn pivot(self, corner: Coordinate, size: Coordinate) -> Coordinate {
        let back = Coordinate::new(size.x - 1, size.y - 1);
        match self {
            CornerKind::TopLeft => corner,
            CornerKind::TopRight => Coordinate::new(corner.x - back.x, corner.y),
            CornerKind::BottomLeft => Coordinate::new(corner.x, corner.y - back.y),
            CornerKind::BottomRight => corner - back,
        }
    }
}

/// A grid position where two perimeter edges meet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Corner {
    /// Position of the corner cell.
    pub coord: Coordinate,
    /// Directions that are open at the corner.
    pub kind: CornerKind,
}

impl Corner {
    /// Construct a [`Corner`].
    pub fn new(coord: Coordinate, kind: CornerKind) -> Self {
        Self { coord, kind }
    }

    /// The corners at the four extremes of a board, each facing inward.
    pub fn extremes(dim: &Dimensions) -> [Corner; 4] {
        let [top_left, top_right, bottom_left, bottom_right] = dim.extremes();
        [
            Corner::new(top_left, CornerKind::TopLeft),
            Corner::new(top_right, CornerKind::TopRight),
            Corner::new(bottom_left, CornerKind::BottomLeft),
            Corner::new(bottom_right, CornerKind::BottomRight),
        ]
    }
}

/// Order in which queued corners are handed out.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CornerOrder {
    /// First in, first out.
    Fifo,
    /// Closest to the center of the board first. Ties go to the corner queued first.
    CenterFirst,
}

impl Default for CornerOrder {
    fn default() -> Self {
        CornerOrder::Fifo
    }
}

/// Heap entry for [`CornerOrder::CenterFirst`].
#[derive(Debug)]
struct Ranked {
    /// Squared distance to the center, in doubled coordinates.
    distance: i64,
    /// Insertion sequence number.
    seq: u64,
    corner: Corner,
}

impl Ord for Ranked {
    // Reversed so the max-heap pops the nearest, earliest corner.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
enum Pending {
    Fifo(VecDeque<Corner>),
    CenterFirst {
        heap: BinaryHeap<Ranked>,
        /// Center of the board, doubled so it stays integral.
        center: Coordinate,
        next_seq: u64,
    },
}

/// Queue of corner candidates still open for placement. Entries may go stale as the grid
/// changes; consumers re-check the grid when popping.
#[derive(Debug)]
pub struct CornerQueue {
    pending: Pending,
    /// Number of corners pushed over the lifetime of the queue.
    pushed: usize,
}

impl CornerQueue {
    /// Create an empty queue for a board with the given dimensions.
    pub fn new(order: CornerOrder, dim: &Dimensions) -> Self {
        let pending = match order {
            CornerOrder::Fifo => Pending::Fifo(VecDeque::new()),
            CornerOrder::CenterFirst => Pending::CenterFirst {
                heap: BinaryHeap::new(),
                center: Coordinate::new(dim.width() as i32 - 1, dim.height() as i32 - 1),
                next_seq: 0,
            },
        };
        Self { pending, pushed: 0 }
    }

    /// Add a corner to the queue.
    pub fn push(&mut self, corner: Corner) {
        self.pushed += 1;
        match &mut self.pending {
            Pending::Fifo(queue) => queue.push_back(corner),
            Pending::CenterFirst {
                heap,
                center,
                next_seq,
            } => {
                let dx = i64::from(corner.coord.x) * 2 - i64::from(center.x);
                let dy = i64::from(corner.coord.y) * 2 - i64::from(center.y);
                heap.push(Ranked {
                    distance: dx * dx + dy * dy,
                    seq: *next_seq,
                    corner,
                });
                *next_seq += 1;
            }
        }
    }

    /// Remove the next corner, if any.
    pub fn pop(&mut self) -> Option<Corner> {
        match &mut self.pending {
            Pending::Fifo(queue) => queue.pop_front(),
            Pending::CenterFirst { heap, .. } => heap.pop().map(|ranked| ranked.corner),
        }
    }

    /// Number of corners currently queued.
    pub fn len(&self) -> usize {
        match &self.pending {
            Pending::Fifo(queue) => queue.len(),
            Pending::CenterFirst { heap, .. } => heap.len(),
        }
    }

    /// Returns true if no corners are queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of corners pushed since the queue was created.
    pub fn pushed(&self) -> usize {
        self.pushed
    }
}

/// Set of sides of `coord` whose neighbor is inside the grid and open.
pub fn open_sides(grid: &TileGrid, coord: Coordinate) -> Sides {
    grid.dimensions()
        .neighbors(coord)
        .filter(|&(_, neighbor)| grid.is_open(neighbor))
        .fold(Sides::empty(), |sides, (side, _)| sides | side)
}

/// Paint an open in-bounds cell as [`TileState::Border`]. Out of bounds and closed cells
/// are left alone.
pub fn mark_border(grid: &mut TileGrid, coord: Coordinate) {
    if grid.is_open(coord) {
        if let Err(err) = grid.set(coord, TileState::Border) {
            unreachable!("open cell refused a border: {}", err);
        }
    }
}

/// Touch a cell one step outside a chip's border. The first touch promotes an `Empty`
/// cell to `Perimeter`; touching a cell that is already `Perimeter` classifies it and
/// queues it as a corner. Out of bounds and closed cells are left alone.
pub fn mark_perimeter_or_enqueue(
    grid: &mut TileGrid,
    queue: &mut CornerQueue,
    coord: Coordinate,
) {
    match grid.get(coord) {
        Ok(TileState::Empty) => {
            if let Err(err) = grid.set(coord, TileState::Perimeter) {
                unreachable!("empty cell refused a perimeter: {}", err);
            }
        }
        Ok(TileState::Perimeter) => match CornerKind::from_open_sides(open_sides(grid, coord)) {
            Some(kind) => queue.push(Corner::new(coord, kind)),
            None => trace!("perimeter cell {:?} has no open corner", coord),
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(width: u32, height: u32) -> (TileGrid, CornerQueue) {
        let dim = Dimensions::try_new(width, height).unwrap();
        (TileGrid::new(dim), CornerQueue::new(CornerOrder::Fifo, &dim))
    }

    #[test]
    fn classify_open_sides() {
        assert_eq!(
            CornerKind::from_open_sides(Side::Right | Side::Down),
            Some(CornerKind::TopLeft)
        );
        assert_eq!(
            CornerKind::from_open_sides(Side::Left | Side::Down),
            Some(CornerKind::TopRight)
        );
        assert_eq!(
            CornerKind::from_open_sides(Side::Right | Side::Up),
            Some(CornerKind::BottomLeft)
        );
        assert_eq!(
            CornerKind::from_open_sides(Side::Left | Side::Up),
            Some(CornerKind::BottomRight)
        );
        assert_eq!(CornerKind::from_open_sides(Side::Left | Side::Right), None);
        assert_eq!(CornerKind::from_open_sides(Sides::empty()), None);
        assert_eq!(CornerKind::from_open_sides(Sides::all()), Some(CornerKind::TopLeft));
    }

    #[test]
    fn pivot_extends_away_from_corner() {
        let corner = Coordinate::new(10, 8);
        let size = Coordinate::new(3, 2);
        assert_eq!(CornerKind::TopLeft.pivot(corner, size), Coordinate::new(10, 8));
        assert_eq!(CornerKind::TopRight.pivot(corner, size), Coordinate::new(8, 8));
        assert_eq!(CornerKind::BottomLeft.pivot(corner, size), Coordinate::new(10, 7));
        assert_eq!(CornerKind::BottomRight.pivot(corner, size), Coordinate::new(8, 7));
    }

    #[test]
    fn corners_are_promoted_on_second_touch() {
        let (mut grid, mut queue) = setup(10, 10);
        let coord = Coordinate::new(4, 4);

        mark_perimeter_or_enqueue(&mut grid, &mut queue, coord);
        assert_eq!(grid[coord], TileState::Perimeter);
        assert!(queue.is_empty());

        mark_perimeter_or_enqueue(&mut grid, &mut queue, coord);
        assert_eq!(queue.pop(), Some(Corner::new(coord, CornerKind::TopLeft)));
    }

    #[test]
    fn promoted_kind_follows_open_neighbors() {
        let (mut grid, mut queue) = setup(10, 10);
        let coord = Coordinate::new(4, 4);
        mark_perimeter_or_enqueue(&mut grid, &mut queue, coord);
        mark_border(&mut grid, Coordinate::new(5, 4));
        mark_border(&mut grid, Coordinate::new(4, 5));

        mark_perimeter_or_enqueue(&mut grid, &mut queue, coord);
        assert_eq!(queue.pop(), Some(Corner::new(coord, CornerKind::BottomRight)));
    }

    #[test]
    fn edge_cells_are_corners_on_first_touch() {
        let (mut grid, mut queue) = setup(10, 10);
        // Close off the cell above so only down and right remain open.
        mark_border(&mut grid, Coordinate::new(0, 3));
        mark_perimeter_or_enqueue(&mut grid, &mut queue, Coordinate::new(0, 4));
        assert_eq!(
            queue.pop(),
            Some(Corner::new(Coordinate::new(0, 4), CornerKind::TopLeft))
        );
    }

    #[test]
    fn closed_and_outside_cells_are_ignored() {
        let (mut grid, mut queue) = setup(6, 6);
        let coord = Coordinate::new(2, 2);
        grid.set(coord, TileState::Chip).unwrap();
        mark_border(&mut grid, coord);
        mark_perimeter_or_enqueue(&mut grid, &mut queue, coord);
        mark_border(&mut grid, Coordinate::new(-1, 2));
        mark_perimeter_or_enqueue(&mut grid, &mut queue, Coordinate::new(6, 2));
        assert_eq!(grid[coord], TileState::Chip);
        assert!(queue.is_empty());
        assert_eq!(queue.pushed(), 0);
    }

    #[test]
    fn center_first_pops_nearest() {
        let dim = Dimensions::try_new(11, 11).unwrap();
        let mut queue = CornerQueue::new(CornerOrder::CenterFirst, &dim);
        let far = Corner::new(Coordinate::new(0, 0), CornerKind::TopLeft);
        let near = Corner::new(Coordinate::new(5, 4), CornerKind::TopLeft);
        let tie = Corner::new(Coordinate::new(4, 5), CornerKind::TopLeft);
        queue.push(far);
        queue.push(near);
        queue.push(tie);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(near));
        assert_eq!(queue.pop(), Some(tie));
        assert_eq!(queue.pop(), Some(far));
        assert_eq!(queue.pop(), None);
        assert_eq!(queue.pushed(), 3);
    }

    #[test]
    fn fifo_keeps_insertion_order() {
        let dim = Dimensions::try_new(11, 11).unwrap();
        let mut queue = CornerQueue::new(CornerOrder::Fifo, &dim);
        let corners = Corner::extremes(&dim);
        for &corner in corners.iter() {
            queue.push(corner);
        }
        for &corner in corners.iter() {
            assert_eq!(queue.pop(), Some(corner));
        }
        assert!(queue.is_empty());
    }
}
