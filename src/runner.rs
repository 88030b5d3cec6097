//! Demo orchestration: builds or loads a grid, runs the requested engine(s)
//! with wall-clock timing, and prints the results next to a ground-truth
//! optimal cost. This layer owns all file I/O; the engines never touch disk.

use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

use log::debug;
use pathfinding::prelude::astar;

use crate::algorithms::beam_search::beam_search;
use crate::algorithms::dynamic_weighted_astar::dynamic_weighted_astar;
use crate::config::Config;
use crate::error::Result;
use crate::grid::{Grid, Heuristic, Position};
use crate::mapgen;
use crate::snapshot::GridSnapshot;
use crate::statistics::SearchStats;

/// One engine invocation: what ran, what it found, and how long it took.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub name: String,
    pub path: Option<Vec<Position>>,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// Reads a grid from a JSON snapshot file.
pub fn load_map(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)?;
    let snapshot: GridSnapshot = serde_json::from_str(&text)?;
    let grid = Grid::try_from(snapshot)?;
    debug!("loaded {}x{} map from {}", grid.width, grid.height, path.display());
    Ok(grid)
}

/// Writes a grid to a JSON snapshot file.
pub fn save_map(grid: &Grid, path: &Path) -> Result<()> {
    let snapshot = GridSnapshot::from(grid);
    fs::write(path, serde_json::to_string(&snapshot)?)?;
    debug!("saved {}x{} map to {}", grid.width, grid.height, path.display());
    Ok(())
}

/// Builds the grid to search: a map file wins over `--random`, which wins
/// over the built-in sample layout.
pub fn build_grid(config: &Config) -> Result<Grid> {
    if let Some(path) = &config.map_file {
        load_map(path)
    } else if config.random {
        Ok(mapgen::random_map(
            config.width,
            config.height,
            config.num_obstacles,
            config.num_poison,
            config.seed,
        ))
    } else {
        Ok(mapgen::sample_map())
    }
}

/// Runs one engine by name and times the invocation.
pub fn run_algorithm(grid: &Grid, name: &str, config: &Config) -> RunOutcome {
    let heuristic = Heuristic::from_name(&config.heuristic);
    let started = Instant::now();
    let (path, stats) = match name {
        "beam" => beam_search(grid, config.beta, heuristic),
        "dynamic" => dynamic_weighted_astar(grid, config.epsilon, heuristic),
        _ => panic!("Select 'beam', 'dynamic', or 'all' for algorithm"),
    };
    let elapsed = started.elapsed();
    debug!("{} finished in {:.2?}", name, elapsed);
    RunOutcome {
        name: name.to_string(),
        path,
        stats,
        elapsed,
    }
}

/// Runs both engines on the same grid for comparison.
pub fn run_all(grid: &Grid, config: &Config) -> Vec<RunOutcome> {
    ["beam", "dynamic"]
        .iter()
        .map(|name| run_algorithm(grid, name, config))
        .collect()
}

/// Ground-truth optimal path cost, computed independently of either engine.
/// Returns `None` when the grid has no markers or no route between them.
pub fn reference_cost(grid: &Grid) -> Option<u32> {
    let start = grid.start?;
    let goal = grid.goal?;
    let result = astar(
        &start,
        |p| {
            grid.neighbors(*p)
                .into_iter()
                .map(|n| (n, grid.get_cost(n.x, n.y) as u32))
                .collect::<Vec<_>>()
        },
        |p| ((p.x - goal.x).abs() + (p.y - goal.y).abs()) as u32,
        |p| *p == goal,
    );
    result.map(|(_, cost)| cost)
}

/// Prints a comparison table for a set of outcomes.
pub fn print_results(outcomes: &[RunOutcome], reference: Option<u32>) {
    println!("\n=== SEARCH RESULTS ===");
    println!(
        "{:<10} {:<7} {:<10} {:<8} {:<10} {:<10} {:<12}",
        "Algorithm", "Found", "Cost", "Length", "Expanded", "Generated", "Time"
    );
    println!("{}", "-".repeat(70));
    for outcome in outcomes {
        let found = if outcome.path.is_some() { "yes" } else { "no" };
        println!(
            "{:<10} {:<7} {:<10} {:<8} {:<10} {:<10} {:<12}",
            outcome.name,
            found,
            outcome.stats.path_cost,
            outcome.stats.path_length,
            outcome.stats.nodes_expanded,
            outcome.stats.nodes_generated,
            format!("{:.2?}", outcome.elapsed),
        );
        if let Some(error) = outcome.stats.error {
            println!("  note: {}", error);
        }
    }
    match reference {
        Some(cost) => println!("Optimal cost (reference A*): {}", cost),
        None => println!("Optimal cost (reference A*): no route"),
    }
}
