//! The [`Grid`] type: rectangular bounds plus a set of wall cells.

use std::collections::HashSet;

use tilepath_core::{Point, Range};

use crate::neighbors::Neighbors;
use crate::traits::{Pather, Terrain};

/// A `width` x `height` grid of cells, some of which are walls.
///
/// Walls are stored sparsely. A wall may lie outside the bounds; it then
/// blocks nothing reachable but still answers [`passable`](Grid::passable)
/// with `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    bounds: Range,
    walls: HashSet<Point>,
}

impl Grid {
    /// Create an empty grid. Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Range::with_size(width.max(0), height.max(0)),
            walls: HashSet::new(),
        }
    }

    /// Builder-style: add every point of `walls` as a wall.
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Point>) -> Self {
        self.extend_walls(walls);
        self
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// The grid rectangle `[0, width) x [0, height)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Whether `p` is within width/height.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` is not a wall. Bounds are not checked.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        !self.walls.contains(&p)
    }

    /// Whether `p` is a wall.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.walls.contains(&p)
    }

    /// Mark `p` as a wall. Returns `false` if it already was one.
    pub fn add_wall(&mut self, p: Point) -> bool {
        self.walls.insert(p)
    }

    /// Clear the wall at `p`. Returns `false` if there was none.
    pub fn remove_wall(&mut self, p: Point) -> bool {
        self.walls.remove(&p)
    }

    /// Mark every point of `walls` as a wall.
    pub fn extend_walls(&mut self, walls: impl IntoIterator<Item = Point>) {
        self.walls.extend(walls);
    }

    /// Iterate over the wall cells, in no particular order.
    pub fn walls(&self) -> impl Iterator<Item = Point> + '_ {
        self.walls.iter().copied()
    }

    /// Number of wall cells.
    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// In-bounds, passable cardinal neighbors of `p`.
    ///
    /// See [`Neighbors`] for the emission order.
    #[inline]
    pub fn neighbors(&self, p: Point) -> Neighbors<'_> {
        Neighbors::new(self, p)
    }
}

impl Pather for Grid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(Grid::neighbors(self, p));
    }
}

impl Terrain for Grid {
    fn bounds(&self) -> Range {
        self.bounds
    }

    fn passable(&self, p: Point) -> bool {
        Grid::passable(self, p)
    }
}
