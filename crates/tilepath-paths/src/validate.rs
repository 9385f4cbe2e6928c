use tilepath_core::Point;

use crate::error::ValidationError;
use crate::traits::Terrain;

/// Check that a search from `start` to `goal` makes sense on `grid`.
///
/// The checks run in a fixed order and the first failure is returned:
/// start in bounds, goal in bounds, start passable, goal passable, and
/// start distinct from goal.
pub fn validate<T: Terrain + ?Sized>(
    grid: &T,
    start: Point,
    goal: Point,
) -> Result<(), ValidationError> {
    let b = grid.bounds();
    if !grid.in_bounds(start) {
        return Err(ValidationError::StartOutOfBounds {
            pos: start,
            width: b.width(),
            height: b.height(),
        });
    }
    if !grid.in_bounds(goal) {
        return Err(ValidationError::GoalOutOfBounds {
            pos: goal,
            width: b.width(),
            height: b.height(),
        });
    }
    if !grid.passable(start) {
        return Err(ValidationError::StartBlocked(start));
    }
    if !grid.passable(goal) {
        return Err(ValidationError::GoalBlocked(goal));
    }
    if start == goal {
        return Err(ValidationError::SameStartGoal(start));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grid;

    fn grid() -> Grid {
        Grid::new(5, 5).with_walls([Point::new(2, 2), Point::new(4, 0)])
    }

    #[test]
    fn accepts_legal_endpoints() {
        assert_eq!(validate(&grid(), Point::new(0, 0), Point::new(4, 4)), Ok(()));
    }

    #[test]
    fn rejects_out_of_bounds() {
        let g = grid();
        assert_eq!(
            validate(&g, Point::new(-1, 0), Point::new(4, 4)),
            Err(ValidationError::StartOutOfBounds {
                pos: Point::new(-1, 0),
                width: 5,
                height: 5
            })
        );
        assert!(matches!(
            validate(&g, Point::new(0, 0), Point::new(0, 5)),
            Err(ValidationError::GoalOutOfBounds { .. })
        ));
        assert!(matches!(
            validate(&g, Point::new(0, 0), Point::new(5, 0)),
            Err(ValidationError::GoalOutOfBounds { .. })
        ));
    }

    #[test]
    fn rejects_walls() {
        let g = grid();
        assert_eq!(
            validate(&g, Point::new(2, 2), Point::new(0, 0)),
            Err(ValidationError::StartBlocked(Point::new(2, 2)))
        );
        assert_eq!(
            validate(&g, Point::new(0, 0), Point::new(4, 0)),
            Err(ValidationError::GoalBlocked(Point::new(4, 0)))
        );
    }

    #[test]
    fn rejects_identical_endpoints() {
        assert_eq!(
            validate(&grid(), Point::new(1, 1), Point::new(1, 1)),
            Err(ValidationError::SameStartGoal(Point::new(1, 1)))
        );
    }

    #[test]
    fn first_failure_wins() {
        let g = grid();
        // Both out of bounds: start is reported.
        assert!(matches!(
            validate(&g, Point::new(9, 9), Point::new(-9, -9)),
            Err(ValidationError::StartOutOfBounds { .. })
        ));
        // Goal out of bounds beats start on a wall.
        assert!(matches!(
            validate(&g, Point::new(2, 2), Point::new(7, 7)),
            Err(ValidationError::GoalOutOfBounds { .. })
        ));
        // Start on a wall beats identical endpoints.
        assert_eq!(
            validate(&g, Point::new(2, 2), Point::new(2, 2)),
            Err(ValidationError::StartBlocked(Point::new(2, 2)))
        );
    }
}
