//! The 50x50 demo map shared by all scenarios.

use tilepath_core::{Point, Range};
use tilepath_paths::{Grid, WeightedGrid};

pub const MAP_WIDTH: i32 = 50;
pub const MAP_HEIGHT: i32 = 50;

/// Cells on the border of the inclusive rectangle `[x0, x1] x [y0, y1]`.
fn ring(x0: i32, y0: i32, x1: i32, y1: i32) -> impl Iterator<Item = Point> {
    Range::new(x0, y0, x1 + 1, y1 + 1)
        .into_iter()
        .filter(move |p| p.x == x0 || p.x == x1 || p.y == y0 || p.y == y1)
}

fn row(y: i32, x0: i32, x1: i32) -> impl Iterator<Item = Point> {
    (x0..=x1).map(move |x| Point::new(x, y))
}

fn column(x: i32, y0: i32, y1: i32) -> impl Iterator<Item = Point> {
    (y0..=y1).map(move |y| Point::new(x, y))
}

/// Wall cells of the demo map.
pub fn demo_walls() -> Vec<Point> {
    let mut walls = Vec::new();
    // The beach in the south-east corner, closed off by the map edges.
    walls.extend(column(44, 44, MAP_HEIGHT - 1));
    walls.extend(row(44, 45, MAP_WIDTH - 1));
    // Volcano crater.
    walls.extend(ring(6, 37, 14, 45));
    // A ridge; (40, 30) is on it.
    walls.extend(row(30, 34, 46));
    // A wall with a gap at y = 13, east of the shortcut.
    walls.extend(column(18, 6, 12));
    walls.extend(column(18, 14, 20));
    walls.extend(row(20, 20, 40));
    walls.extend(column(30, 32, 44));
    walls
}

/// Build the demo map: walls plus four cost areas.
///
/// Areas are registered in this order, which decides overlaps:
///
/// 1. a river band across the middle rows, cost 3;
/// 2. rough ground in the north-east quadrant, cost 2;
/// 3. a mountain below the river on the west half, cost 4;
/// 4. a shortcut at `[10, 15] x [10, 15]`, cost 0.5.
pub fn demo_map() -> WeightedGrid {
    let (w, h) = (MAP_WIDTH, MAP_HEIGHT);
    let grid = Grid::new(w, h).with_walls(demo_walls());
    let mut g = WeightedGrid::from_grid(grid);
    let areas = [
        (0, h / 2 - 2, w - 1, h / 2 + 2, 3.0),
        (w / 2, 0, w - 1, h / 2 - 1, 2.0),
        (0, h / 2 + 3, w / 2 - 1, h - 15, 4.0),
        (10, 10, 15, 15, 0.5),
    ];
    for (x0, y0, x1, y1, cost) in areas {
        // Every area fits; a warning would already have been logged.
        let _ = g.add_cost_area(x0, y0, x1, y1, cost);
    }
    g
}
