use tilepath_core::{Point, Range};

/// Minimal pathfinding interface: neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`, in exploration order. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f64;
}

/// Bounds and passability queries used to validate search endpoints.
pub trait Terrain {
    /// The rectangle of valid coordinates.
    fn bounds(&self) -> Range;

    /// Whether `p` lies inside [`bounds`](Terrain::bounds).
    fn in_bounds(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Whether `p` is not blocked. Says nothing about bounds.
    fn passable(&self, p: Point) -> bool;
}
