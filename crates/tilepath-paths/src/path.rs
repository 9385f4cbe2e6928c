use std::collections::HashMap;

use tilepath_core::Point;

use crate::traits::WeightedPather;

/// Walk `came_from` backward from `goal` to `start` and return the route in
/// forward order, both endpoints included.
///
/// Returns an empty path when `goal` was never reached. The same happens if
/// the chain ends (a `None` predecessor) or loops before reaching `start`,
/// which can only occur with a map that did not come from a search rooted at
/// `start`.
pub fn reconstruct_path(
    came_from: &HashMap<Point, Option<Point>>,
    start: Point,
    goal: Point,
) -> Vec<Point> {
    if !came_from.contains_key(&goal) {
        return Vec::new();
    }
    let mut path = Vec::new();
    let mut current = goal;
    loop {
        path.push(current);
        if current == start {
            break;
        }
        if path.len() > came_from.len() {
            log::warn!("predecessor chain from {goal} loops without reaching {start}");
            return Vec::new();
        }
        match came_from.get(&current) {
            Some(Some(prev)) => current = *prev,
            _ => return Vec::new(),
        }
    }
    path.reverse();
    path
}

/// Total cost of walking `path` on `grid`. Empty and single-point paths cost
/// nothing.
pub fn path_cost<G: WeightedPather + ?Sized>(grid: &G, path: &[Point]) -> f64 {
    path.windows(2).map(|w| grid.cost(w[0], w[1])).sum()
}
