//! Predefined start/goal pairs for the demo map.

use std::io::{self, Write};

use tilepath_core::Point;

/// A named search to run on [`demo_map`](crate::map::demo_map).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub start: Point,
    pub goal: Point,
    pub description: &'static str,
}

impl Scenario {
    const fn new(
        name: &'static str,
        start: (i32, i32),
        goal: (i32, i32),
        description: &'static str,
    ) -> Self {
        Self {
            name,
            start: Point::new(start.0, start.1),
            goal: Point::new(goal.0, goal.1),
            description,
        }
    }
}

pub static SCENARIOS: [Scenario; 8] = [
    Scenario::new(
        "Stranded on a beach",
        (2, 2),
        (47, 47),
        "The goal sits on a walled-off beach and cannot be reached",
    ),
    Scenario::new(
        "Volcano",
        (40, 10),
        (10, 41),
        "The goal is inside a volcano crater with no way in",
    ),
    Scenario::new(
        "Invalid position",
        (10, 15),
        (40, 30),
        "The goal lies inside a wall",
    ),
    Scenario::new(
        "Take the shortcut",
        (5, 12),
        (20, 13),
        "A route that can use the cheap shortcut area",
    ),
    Scenario::new(
        "Opposite edges",
        (44, 0),
        (4, 48),
        "A long route across the whole map",
    ),
    Scenario::new(
        "Short distance",
        (26, 26),
        (30, 30),
        "A short route for a quick check",
    ),
    Scenario::new(
        "Avoid the mountain",
        (45, 5),
        (5, 45),
        "A route that should skirt the expensive terrain",
    ),
    Scenario::new(
        "Challenge",
        (30, 49),
        (2, 16),
        "Navigation through many obstacles",
    ),
];

/// Errors from scenario lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario index {index} is out of range, available: 0-{last}")]
    OutOfRange { index: usize, last: usize },
}

/// Look up a scenario by its position in [`SCENARIOS`].
pub fn scenario(index: usize) -> Result<&'static Scenario, ScenarioError> {
    SCENARIOS.get(index).ok_or(ScenarioError::OutOfRange {
        index,
        last: SCENARIOS.len() - 1,
    })
}

/// Print the scenario table.
pub fn list_scenarios<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Available scenarios:")?;
    for (i, s) in SCENARIOS.iter().enumerate() {
        writeln!(out, "{i}: {} - {}", s.name, s.description)?;
        writeln!(out, "   start: {}, goal: {}", s.start, s.goal)?;
    }
    writeln!(out)
}
