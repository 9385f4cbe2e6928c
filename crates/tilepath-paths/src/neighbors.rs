use std::iter::FusedIterator;

use tilepath_core::Point;

use crate::grid::Grid;

/// Cardinal offsets in east, west, north, south order.
const CARDINALS: [Point; 4] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// Lazy iterator over the in-bounds, passable cardinal neighbors of a cell.
///
/// Cells with an even `x + y` yield candidates east, west, north, south;
/// odd cells yield them in reverse (south, north, west, east). The
/// alternation makes straight runs zig-zag evenly, and fixes which of several
/// equal-cost paths a search settles on.
///
/// The iterator is cheap to clone; a clone restarts from the same position.
#[derive(Debug, Clone)]
pub struct Neighbors<'a> {
    grid: &'a Grid,
    origin: Point,
    step: usize,
}

impl<'a> Neighbors<'a> {
    pub(crate) fn new(grid: &'a Grid, origin: Point) -> Self {
        Self {
            grid,
            origin,
            step: 0,
        }
    }
}

impl Iterator for Neighbors<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        while self.step < CARDINALS.len() {
            let i = if self.origin.is_even() {
                self.step
            } else {
                CARDINALS.len() - 1 - self.step
            };
            self.step += 1;
            let Some(n) = self.origin.checked_shift(CARDINALS[i]) else {
                continue;
            };
            if self.grid.in_bounds(n) && self.grid.passable(n) {
                return Some(n);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(CARDINALS.len() - self.step))
    }
}

impl FusedIterator for Neighbors<'_> {}
