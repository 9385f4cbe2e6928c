//! **tilepath-core**: geometry primitives shared across the *tilepath*
//! crates.
//!
//! [`Point`] is the grid coordinate used by the search engine and the
//! renderer; [`Range`] describes grid bounds.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
