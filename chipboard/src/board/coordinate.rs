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
use std::ops::{Add, Sub};

/// The coordinates of a cell in the [`TileGrid`][crate::board::TileGrid]. `x` grows to the
/// right and `y` grows downward. Coordinates are signed so that pivot arithmetic may step
/// outside of the grid; bounds are checked by the grid, not by the coordinate.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: i32,
    /// Vertical position of the cell.
    pub y: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Swap the `x` and `y` components. Used to rotate a footprint by a quarter turn.
    pub fn flip(self) -> Self {
        Self::new(self.y, self.x)
    }

    /// Iterate every cell of the rectangle whose top-left cell is `self` and whose size is
    /// `size`, row by row. Yields nothing if either component of `size` is not positive.
    pub fn rect(self, size: Coordinate) -> impl Iterator<Item = Coordinate> {
        let Coordinate { x: x0, y: y0 } = self;
        let (width, height) = (size.x.max(0), size.y.max(0));
        (y0..y0 + height).flat_map(move |y| (x0..x0 + width).map(move |x| Coordinate { x, y }))
    }

    /// Iterate the one-cell-thick ring at Chebyshev distance `margin` around the rectangle
    /// at `self` with the given `size`. Each ring cell is yielded exactly once: the full
    /// top row, the full bottom row, then the left and right columns between them.
    pub fn ring(self, size: Coordinate, margin: i32) -> impl Iterator<Item = Coordinate> {
        let left = self.x - margin;
        let right = self.x + size.x - 1 + margin;
        let top = self.y - margin;
        let bottom = self.y + size.y - 1 + margin;
        let rows = (left..=right).flat_map(move |x| {
            std::iter::once(Coordinate::new(x, top)).chain(
                // A zero-height ring would repeat the top row.
                Some(Coordinate::new(x, bottom)).filter(|_| bottom != top),
            )
        });
        let columns = (top + 1..bottom).flat_map(move |y| {
            std::iter::once(Coordinate::new(left, y))
                .chain(Some(Coordinate::new(right, y)).filter(|_| right != left))
        });
        rows.chain(columns)
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    fn add(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coordinate {
    type Output = Coordinate;

    fn sub(self, rhs: Coordinate) -> Coordinate {
        Coordinate::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (i32, i32) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn flip_swaps_components() {
        assert_eq!(Coordinate::new(9, 3).flip(), Coordinate::new(3, 9));
    }

    #[test]
    fn rect_is_row_major() {
        let cells: Vec<_> = Coordinate::new(1, 2).rect(Coordinate::new(2, 2)).collect();
        assert_eq!(
            cells,
            vec![
                Coordinate::new(1, 2),
                Coordinate::new(2, 2),
                Coordinate::new(1, 3),
                Coordinate::new(2, 3),
            ]
        );
    }

    #[test]
    fn ring_visits_each_cell_once() {
        let origin = Coordinate::new(0, 0);
        let size = Coordinate::new(3, 2);
        for margin in 1..4 {
            let cells: Vec<_> = origin.ring(size, margin).collect();
            let unique: HashSet<_> = cells.iter().copied().collect();
            assert_eq!(cells.len(), unique.len());
            // Perimeter of a (w + 2m) x (h + 2m) rectangle.
            let w = size.x + 2 * margin;
            let h = size.y + 2 * margin;
            assert_eq!(cells.len() as i32, 2 * w + 2 * h - 4);
            assert!(unique.iter().all(|c| {
                let dx = (origin.x - c.x).max(c.x - (origin.x + size.x - 1)).max(0);
                let dy = (origin.y - c.y).max(c.y - (origin.y + size.y - 1)).max(0);
                dx.max(dy) == margin
            }));
        }
    }
}
