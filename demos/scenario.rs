//! Run one of the predefined A* scenarios and draw the result.
//!
//! Run: cargo run --bin tilepath-demo -- --scenario 3

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tilepath_demos::{Args, header, list_scenarios, map, report, scenario};
use tilepath_paths::{SearchOptions, search};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let mut out = io::stdout().lock();
    if args.list {
        list_scenarios(&mut out)?;
        return Ok(ExitCode::SUCCESS);
    }

    let chosen = scenario(args.scenario)?;
    let grid = map::demo_map();
    let min_step_cost = args.min_step_cost.unwrap_or_else(|| grid.min_step_cost());
    let opts = SearchOptions::default().with_min_step_cost(min_step_cost);

    log::info!("running scenario {}: {}", args.scenario, chosen.name);
    header(&mut out, chosen, &grid)?;

    match search(&grid, chosen.start, chosen.goal, &opts) {
        Ok(found) => {
            report(&mut out, &grid, &found, !args.quiet, !args.no_color)
                .context("failed to write the result")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Check that the scenario coordinates do not coincide with obstacles.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log_filter());

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
