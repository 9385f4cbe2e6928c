//! Scenario runner for the tilepath A* engine.
//!
//! Loads one of the predefined [`scenarios`] onto the [`map::demo_map`],
//! runs [`tilepath_paths::search`], and prints the result with
//! [`tilepath_term`].

pub mod map;
pub mod scenarios;

use std::io::{self, Write};

use clap::{ArgAction, Parser};
use tilepath_paths::{Search, WeightedGrid};
use tilepath_term::{Style, draw_grid};

pub use scenarios::{SCENARIOS, Scenario, ScenarioError, list_scenarios, scenario};

/// Command-line options of `tilepath-demo`.
#[derive(Debug, Clone, Parser)]
#[command(name = "tilepath-demo", about = "Run A* on a predefined scenario and draw the result")]
pub struct Args {
    /// Index of the scenario to run (see --list).
    #[arg(short, long, default_value_t = 4)]
    pub scenario: usize,

    /// Print the available scenarios and exit.
    #[arg(long)]
    pub list: bool,

    /// Heuristic scale. Defaults to the cheapest move on the map, which keeps
    /// the search optimal.
    #[arg(long)]
    pub min_step_cost: Option<f64>,

    /// Do not colour the grid.
    #[arg(long)]
    pub no_color: bool,

    /// Skip drawing the grid.
    #[arg(short, long)]
    pub quiet: bool,

    /// Raise log verbosity (-v debug, -vv per-iteration trace). RUST_LOG
    /// takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Log filter implied by `-v` flags.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Write the run header: the scenario, its endpoints and the wall count.
pub fn header<W: Write>(out: &mut W, chosen: &Scenario, grid: &WeightedGrid) -> io::Result<()> {
    writeln!(out, "{} - {}", chosen.name, chosen.description)?;
    writeln!(out, "Start: {} -> Goal: {}", chosen.start, chosen.goal)?;
    writeln!(out, "Walls: {}", grid.grid().wall_count())?;
    writeln!(out, "Searching from {} to {}...", chosen.start, chosen.goal)
}

/// Write the outcome of `found` on `grid` to `out`.
///
/// Unless `draw` is false the grid is drawn as well: with arrows and the
/// path when the goal was reached, with only the endpoints otherwise.
pub fn report<W: Write>(
    out: &mut W,
    grid: &WeightedGrid,
    found: &Search,
    draw: bool,
    color: bool,
) -> io::Result<()> {
    let (start, goal) = (found.start(), found.goal());
    let style = Style::new().start(start).goal(goal).color(color);
    match found.cost() {
        None => {
            writeln!(out, "No path found from {start} to {goal}.")?;
            if draw {
                draw_grid(out, grid.grid(), &style)?;
            }
        }
        Some(cost) => {
            let path = found.path();
            writeln!(out, "Path found with {} steps.", path.len())?;
            writeln!(out, "Total path cost: {cost}")?;
            writeln!(out)?;
            if draw {
                let style = style.point_to(found.came_from()).path(&path);
                draw_grid(out, grid.grid(), &style)?;
            }
        }
    }
    Ok(())
}
