//! A* shortest-cost search.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::Level;
use tilepath_core::Point;

use crate::distance::heuristic;
use crate::error::ValidationError;
use crate::frontier::Frontier;
use crate::path::reconstruct_path;
use crate::traits::{Terrain, WeightedPather};
use crate::validate::validate;

/// Tuning knobs for [`search`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Scale of the Manhattan heuristic. Keep it at or below the cheapest
    /// move (see [`WeightedGrid::min_step_cost`](crate::WeightedGrid::min_step_cost))
    /// for optimal paths; raise it to trade optimality for fewer expansions.
    pub min_step_cost: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { min_step_cost: 1.0 }
    }
}

impl SearchOptions {
    /// Builder-style setter for [`min_step_cost`](SearchOptions::min_step_cost).
    pub fn with_min_step_cost(mut self, min_step_cost: f64) -> Self {
        self.min_step_cost = min_step_cost;
        self
    }
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The goal was expanded.
    Found,
    /// The frontier ran dry first; the goal is unreachable.
    Exhausted,
}

/// The bookkeeping of one finished search.
///
/// Maps are partial when the goal was not found: they cover exactly the
/// region the search could reach.
#[derive(Debug, Clone)]
pub struct Search {
    start: Point,
    goal: Point,
    came_from: HashMap<Point, Option<Point>>,
    cost_so_far: HashMap<Point, f64>,
    open: BTreeMap<Point, f64>,
    closed: BTreeSet<Point>,
    iterations: usize,
    status: SearchStatus,
}

impl Search {
    /// Start point of the search.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Goal point of the search.
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Predecessor of every discovered point. The start maps to `None`.
    pub fn came_from(&self) -> &HashMap<Point, Option<Point>> {
        &self.came_from
    }

    /// Best known cumulative cost of every discovered point.
    pub fn cost_so_far(&self) -> &HashMap<Point, f64> {
        &self.cost_so_far
    }

    /// Discovered but unexpanded points, with their last queued priority.
    pub fn open(&self) -> &BTreeMap<Point, f64> {
        &self.open
    }

    /// Expanded points.
    pub fn closed(&self) -> &BTreeSet<Point> {
        &self.closed
    }

    /// Number of entries popped off the frontier, stale ones included.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the goal was reached.
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Whether the goal was reached.
    pub fn is_found(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// The route from start to goal, or an empty vector if there is none.
    pub fn path(&self) -> Vec<Point> {
        reconstruct_path(&self.came_from, self.start, self.goal)
    }

    /// Total cost of the route, if the goal was reached.
    pub fn cost(&self) -> Option<f64> {
        match self.status {
            SearchStatus::Found => self.cost_so_far.get(&self.goal).copied(),
            SearchStatus::Exhausted => None,
        }
    }

    /// Split into the predecessor and cost maps.
    pub fn into_maps(self) -> (HashMap<Point, Option<Point>>, HashMap<Point, f64>) {
        (self.came_from, self.cost_so_far)
    }
}

/// Search for the cheapest path from `start` to `goal` with A*.
///
/// The endpoints are checked with [`validate`] first; that is the only way
/// this function fails. An unreachable goal is a normal outcome, reported
/// as [`SearchStatus::Exhausted`] with an empty [`Search::path`].
///
/// The frontier is never pruned. A point can be queued several times as its
/// cost improves; copies popped after the point was expanded are skipped.
/// Per-iteration detail is logged at `trace` level.
pub fn search<G>(
    grid: &G,
    start: Point,
    goal: Point,
    options: &SearchOptions,
) -> Result<Search, ValidationError>
where
    G: WeightedPather + Terrain + ?Sized,
{
    validate(grid, start, goal)?;

    let h = |p: Point| heuristic(p, goal, options.min_step_cost);

    let mut frontier = Frontier::new();
    frontier.put(start, 0.0);
    let mut came_from: HashMap<Point, Option<Point>> = HashMap::new();
    let mut cost_so_far: HashMap<Point, f64> = HashMap::new();
    came_from.insert(start, None);
    cost_so_far.insert(start, 0.0);
    let mut open: BTreeMap<Point, f64> = BTreeMap::new();
    open.insert(start, 0.0);
    let mut closed: BTreeSet<Point> = BTreeSet::new();
    let mut iterations = 0;

    log::debug!("A* from {start} to {goal}, initial heuristic {:.1}", h(start));

    let mut nbuf = Vec::with_capacity(4);
    let mut status = SearchStatus::Exhausted;

    while let Some(current) = frontier.get() {
        iterations += 1;
        if closed.contains(&current) {
            continue;
        }
        open.remove(&current);
        closed.insert(current);

        let Some(&g) = cost_so_far.get(&current) else {
            continue;
        };
        if log::log_enabled!(Level::Trace) {
            log::trace!(
                "iteration {iterations}: node {current}, g={g:.1} h={:.1} f={:.1}",
                h(current),
                g + h(current)
            );
            log::trace!("closed: {}", join_points(closed.iter()));
            log::trace!("open: {}", join_points(open.keys()));
        }

        if current == goal {
            log::debug!("goal {goal} reached after {iterations} iterations");
            status = SearchStatus::Found;
            break;
        }

        nbuf.clear();
        grid.neighbors(current, &mut nbuf);
        let mut added = 0;
        for &next in &nbuf {
            if closed.contains(&next) {
                continue;
            }
            let new_cost = g + grid.cost(current, next);
            let improves = cost_so_far.get(&next).is_none_or(|&known| new_cost < known);
            if !improves {
                continue;
            }
            let priority = new_cost + h(next);
            cost_so_far.insert(next, new_cost);
            came_from.insert(next, Some(current));
            open.insert(next, priority);
            frontier.put(next, priority);
            added += 1;
            log::trace!(
                "  neighbor {next}: g={new_cost:.1} h={:.1} f={priority:.1}",
                h(next)
            );
        }
        log::trace!("neighbors added: {added}");
    }

    log::debug!(
        "A* finished ({status:?}): {} nodes expanded, {} discovered",
        closed.len(),
        cost_so_far.len()
    );

    Ok(Search {
        start,
        goal,
        came_from,
        cost_so_far,
        open,
        closed,
        iterations,
        status,
    })
}

fn join_points<'a>(points: impl Iterator<Item = &'a Point>) -> String {
    let parts: Vec<String> = points.map(Point::to_string).collect();
    format!("[{}]", parts.join(", "))
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn options_default_fills_missing_fields() {
        let opts: SearchOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, SearchOptions::default());
        let opts: SearchOptions = serde_json::from_str(r#"{"min_step_cost":0.5}"#).unwrap();
        assert_eq!(opts.min_step_cost, 0.5);
    }
}
