//! Plan a route on a grid and print it.
//!
//! # Usage
//!
//! ```bash
//! # Run a YAML scenario
//! cargo run --bin marga-plan -- --scenario tests/scenarios/corridor.yaml
//!
//! # Built-in sample walls, line-of-sight engine
//! cargo run --bin marga-plan -- --sample --algorithm zeta --min-segment 6
//! ```

use clap::Parser;
use log::info;

use marga::core::GridCoord;
use marga::{Algorithm, ObstacleSet, PathResult, PlannerConfig, ScenarioConfig};

#[derive(Parser)]
#[command(name = "marga-plan")]
#[command(about = "Grid pathfinding with a minimum straight-segment length")]
struct Args {
    /// Scenario YAML file (grid, obstacles, endpoints, planner)
    #[arg(short, long)]
    scenario: Option<String>,

    /// Search engine override: constrained | zeta
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Minimum segment length override
    #[arg(short = 'm', long)]
    min_segment: Option<u32>,

    /// Columns of the built-in grid (ignored with --scenario)
    #[arg(long, default_value = "40")]
    cols: usize,

    /// Rows of the built-in grid (ignored with --scenario)
    #[arg(long, default_value = "30")]
    rows: usize,

    /// Fill the built-in grid with the sample wall block
    #[arg(long)]
    sample: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut scenario = match &args.scenario {
        Some(path) => ScenarioConfig::from_yaml_file(path)?,
        None => builtin_scenario(args),
    };

    if let Some(algorithm) = args.algorithm {
        scenario.planner.algorithm = algorithm;
    }
    if let Some(min_segment) = args.min_segment {
        scenario.planner.min_segment_length = min_segment;
    }

    info!(
        "Scenario '{}': {}x{}, {} -> {}, {} engine, min segment {}",
        scenario.name,
        scenario.cols,
        scenario.rows,
        scenario.start,
        scenario.end,
        scenario.planner.algorithm,
        scenario.planner.min_segment_length
    );

    let result = scenario.plan()?;
    print_result(&scenario, &result);
    Ok(())
}

/// Default grid: start near the top-left, end near the bottom-right.
fn builtin_scenario(args: &Args) -> ScenarioConfig {
    let obstacles = if args.sample {
        ObstacleSet::sample_layout(args.cols, args.rows)
    } else {
        ObstacleSet::new()
    };

    ScenarioConfig {
        name: if args.sample { "sample" } else { "open" }.to_string(),
        cols: args.cols,
        rows: args.rows,
        start: GridCoord::new(2, 2),
        end: GridCoord::new(args.cols as i32 - 3, args.rows as i32 - 7),
        obstacles: obstacles.snapshot(),
        layout: Vec::new(),
        planner: PlannerConfig::new(Algorithm::Constrained, 6),
    }
}

fn print_result(scenario: &ScenarioConfig, result: &PathResult) {
    println!("Scenario: {}", scenario.name);
    if !result.success {
        println!("No path");
    } else {
        println!(
            "Path: {} cells, cost {:.2}",
            result.length_cells(),
            result.cost
        );
        for cell in &result.path {
            println!("  {}", cell);
        }
    }
    println!(
        "Stats: {} expanded, {} created, frontier peak {}",
        result.stats.nodes_expanded, result.stats.nodes_created, result.stats.frontier_high_water
    );
}
