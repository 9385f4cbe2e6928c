//! [`WeightedGrid`] is a [`Grid`] whose moves carry a destination-dependent
//! cost.

use std::collections::HashMap;
use std::fmt;

use tilepath_core::{Point, Range};

use crate::error::CostAreaWarning;
use crate::grid::Grid;
use crate::neighbors::Neighbors;
use crate::traits::{Pather, Terrain, WeightedPather};

/// Cost of entering a cell that no area or weight covers.
pub const DEFAULT_COST: f64 = 1.0;

/// An inclusive rectangle `[x_min, x_max] x [y_min, y_max]` with a fixed
/// entry cost.
///
/// The corners are kept exactly as registered: an area with `x_min > x_max`
/// is not normalised and simply contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostArea {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
    pub cost: f64,
}

impl CostArea {
    /// Create a new area.
    pub const fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32, cost: f64) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
            cost,
        }
    }

    /// Whether `p` lies inside the area, bounds inclusive on both axes.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.x_min <= p.x && p.x <= self.x_max && self.y_min <= p.y && p.y <= self.y_max
    }

    /// Whether a corner pair is swapped on either axis.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    /// Whether both corners lie inside `bounds`.
    pub fn fits(&self, bounds: Range) -> bool {
        bounds.contains(Point::new(self.x_min, self.y_min))
            && bounds.contains(Point::new(self.x_max, self.y_max))
    }
}

impl fmt::Display for CostArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})-({},{}) with cost {}",
            self.x_min, self.y_min, self.x_max, self.y_max, self.cost
        )
    }
}

/// A grid with per-move costs.
///
/// The cost of a move depends only on the destination cell. It resolves to:
///
/// 1. the cost of the **first registered** [`CostArea`] containing the cell;
/// 2. otherwise the cell's sparse weight, if one was set;
/// 3. otherwise [`DEFAULT_COST`].
///
/// The grid is never mutated by a search and may be shared by any number of
/// concurrent searches.
#[derive(Debug, Clone, Default)]
pub struct WeightedGrid {
    grid: Grid,
    areas: Vec<CostArea>,
    weights: HashMap<Point, f64>,
}

impl WeightedGrid {
    /// Create an empty weighted grid. See [`Grid::new`].
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_grid(Grid::new(width, height))
    }

    /// Wrap an existing grid with no areas and no weights.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            areas: Vec::new(),
            weights: HashMap::new(),
        }
    }

    /// The underlying grid.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the underlying grid, e.g. to edit walls.
    #[inline]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }

    /// See [`Grid::in_bounds`].
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.grid.in_bounds(p)
    }

    /// See [`Grid::passable`].
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        self.grid.passable(p)
    }

    /// See [`Grid::neighbors`].
    #[inline]
    pub fn neighbors(&self, p: Point) -> Neighbors<'_> {
        self.grid.neighbors(p)
    }

    /// Register a rectangular cost area.
    ///
    /// The area is always recorded, after every area registered before it.
    /// A warning is logged and returned when the cost is not positive, the
    /// corners are swapped, or the rectangle reaches outside the grid.
    pub fn add_cost_area(
        &mut self,
        x_min: i32,
        y_min: i32,
        x_max: i32,
        y_max: i32,
        cost: f64,
    ) -> Option<CostAreaWarning> {
        let area = CostArea::new(x_min, y_min, x_max, y_max, cost);
        let warning = if cost.is_nan() || cost <= 0.0 {
            Some(CostAreaWarning::NonPositiveCost { area })
        } else if area.is_inverted() {
            Some(CostAreaWarning::Inverted { area })
        } else if !area.fits(self.grid.bounds()) {
            Some(CostAreaWarning::OutOfBounds {
                area,
                width: self.width(),
                height: self.height(),
            })
        } else {
            None
        };
        if let Some(w) = &warning {
            log::warn!("{w}");
        }
        self.areas.push(area);
        log::info!("added cost area {area}");
        warning
    }

    /// Registered areas, in registration order.
    #[inline]
    pub fn cost_areas(&self) -> &[CostArea] {
        &self.areas
    }

    /// Set the fallback weight of `p`, returning the previous one.
    ///
    /// Weights only apply where no cost area matches.
    pub fn set_weight(&mut self, p: Point, weight: f64) -> Option<f64> {
        self.weights.insert(p, weight)
    }

    /// The fallback weight of `p`, if one was set.
    #[inline]
    pub fn weight(&self, p: Point) -> Option<f64> {
        self.weights.get(&p).copied()
    }

    /// Cost of moving from `from` into `to`. `from` does not participate.
    pub fn cost(&self, _from: Point, to: Point) -> f64 {
        self.areas
            .iter()
            .find(|a| a.contains(to))
            .map(|a| a.cost)
            .or_else(|| self.weight(to))
            .unwrap_or(DEFAULT_COST)
    }

    /// A lower bound on the cost of any single move.
    ///
    /// The minimum of [`DEFAULT_COST`], every area cost and every weight,
    /// floored at zero. Using it as the heuristic scale keeps A* optimal.
    pub fn min_step_cost(&self) -> f64 {
        self.areas
            .iter()
            .map(|a| a.cost)
            .chain(self.weights.values().copied())
            .fold(DEFAULT_COST, f64::min)
            .max(0.0)
    }
}

impl From<Grid> for WeightedGrid {
    fn from(grid: Grid) -> Self {
        Self::from_grid(grid)
    }
}

impl Pather for WeightedGrid {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(self.grid.neighbors(p));
    }
}

impl WeightedPather for WeightedGrid {
    fn cost(&self, from: Point, to: Point) -> f64 {
        WeightedGrid::cost(self, from, to)
    }
}

impl Terrain for WeightedGrid {
    fn bounds(&self) -> Range {
        self.grid.bounds()
    }

    fn passable(&self, p: Point) -> bool {
        self.grid.passable(p)
    }
}
