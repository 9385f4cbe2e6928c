use tilepath_core::Point;

use crate::weighted::CostArea;

/// Why a search refused to start.
///
/// Produced by [`validate`](crate::validate) and returned by
/// [`search`](crate::search) before any node is expanded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("start position {pos} is outside the grid bounds ({width}x{height})")]
    StartOutOfBounds { pos: Point, width: i32, height: i32 },
    #[error("goal position {pos} is outside the grid bounds ({width}x{height})")]
    GoalOutOfBounds { pos: Point, width: i32, height: i32 },
    #[error("start position {0} is blocked by a wall")]
    StartBlocked(Point),
    #[error("goal position {0} is blocked by a wall")]
    GoalBlocked(Point),
    #[error("start and goal positions are the same: {0}")]
    SameStartGoal(Point),
}

/// A suspicious cost area. The area is registered regardless.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CostAreaWarning {
    #[error("cost area {area} has a non-positive cost")]
    NonPositiveCost { area: CostArea },
    #[error("cost area {area} has min > max and contains no cell")]
    Inverted { area: CostArea },
    #[error("cost area {area} lies partially or fully outside the grid bounds ({width}x{height})")]
    OutOfBounds {
        area: CostArea,
        width: i32,
        height: i32,
    },
}

impl CostAreaWarning {
    /// The area the warning is about.
    pub fn area(&self) -> &CostArea {
        match self {
            Self::NonPositiveCost { area }
            | Self::Inverted { area }
            | Self::OutOfBounds { area, .. } => area,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages() {
        let e = ValidationError::GoalOutOfBounds {
            pos: Point::new(7, -1),
            width: 5,
            height: 5,
        };
        assert_eq!(
            e.to_string(),
            "goal position (7, -1) is outside the grid bounds (5x5)"
        );
        assert_eq!(
            ValidationError::StartBlocked(Point::new(1, 2)).to_string(),
            "start position (1, 2) is blocked by a wall"
        );
        assert_eq!(
            ValidationError::SameStartGoal(Point::new(3, 3)).to_string(),
            "start and goal positions are the same: (3, 3)"
        );
    }

    #[test]
    fn warning_messages() {
        let area = CostArea::new(0, 0, 9, 2, 2.5);
        let w = CostAreaWarning::OutOfBounds {
            area,
            width: 5,
            height: 5,
        };
        assert_eq!(
            w.to_string(),
            "cost area (0,0)-(9,2) with cost 2.5 lies partially or fully outside the grid bounds (5x5)"
        );
        assert_eq!(w.area(), &area);
    }
}
