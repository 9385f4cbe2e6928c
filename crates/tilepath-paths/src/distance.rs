use tilepath_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// A* estimate of the remaining cost from `a` to `b`: the Manhattan distance
/// scaled by `min_step_cost`.
///
/// The estimate is admissible, and the search optimal, as long as
/// `min_step_cost` does not exceed the cheapest move on the grid. Larger
/// values make the search greedier and may return a costlier path.
#[inline]
pub fn heuristic(a: Point, b: Point, min_step_cost: f64) -> f64 {
    f64::from(manhattan(a, b)) * min_step_cost
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(1, 5);
        let b = Point::new(4, 1);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn heuristic_scales_with_step_cost() {
        let a = Point::new(0, 0);
        let b = Point::new(2, 2);
        assert_eq!(heuristic(a, b, 1.0), 4.0);
        assert_eq!(heuristic(a, b, 0.5), 2.0);
        assert_eq!(heuristic(a, b, 3.0), 12.0);
        assert_eq!(heuristic(b, b, 3.0), 0.0);
    }
}
