//! Shortest-cost pathfinding on walled, weighted grids.
//!
//! The crate is built around one search, A\* ([`search`]), over a
//! [`WeightedGrid`]: a rectangular [`Grid`] of cells, some of them walls,
//! where entering a cell costs whatever the first matching [`CostArea`]
//! says, or a per-cell fallback weight, or `1.0`.
//!
//! ```
//! use tilepath_core::Point;
//! use tilepath_paths::{SearchOptions, WeightedGrid, search};
//!
//! let grid = WeightedGrid::new(5, 5);
//! let found = search(&grid, Point::new(0, 0), Point::new(2, 2), &SearchOptions::default())?;
//! assert_eq!(found.path().len(), 5);
//! assert_eq!(found.cost(), Some(4.0));
//! # Ok::<(), tilepath_paths::ValidationError>(())
//! ```
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | move costs, [`path_cost`] |
//! | [`Terrain`] | [`validate`] |
//!
//! [`search`] needs both [`WeightedPather`] and [`Terrain`].

mod astar;
mod distance;
mod error;
mod frontier;
mod grid;
mod neighbors;
mod path;
mod traits;
mod validate;
mod weighted;

pub use astar::{Search, SearchOptions, SearchStatus, search};
pub use distance::{heuristic, manhattan};
pub use error::{CostAreaWarning, ValidationError};
pub use frontier::Frontier;
pub use grid::Grid;
pub use neighbors::Neighbors;
pub use path::{path_cost, reconstruct_path};
pub use traits::{Pather, Terrain, WeightedPather};
pub use validate::validate;
pub use weighted::{CostArea, DEFAULT_COST, WeightedGrid};
