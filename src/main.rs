use clap::Parser;

use informed_pathfinding::config::Config;
use informed_pathfinding::display;
use informed_pathfinding::runner;

fn main() {
    env_logger::init();
    let config = Config::parse();

    let grid = match runner::build_grid(&config) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to build grid: {}", e);
            std::process::exit(1);
        }
    };

    if !config.quiet {
        println!("Grid: {}x{}", grid.width, grid.height);
        println!("Algorithm: {}", config.algorithm);
        println!("Heuristic: {}", config.heuristic);
        println!();
    }

    let outcomes = if config.algorithm == "all" {
        runner::run_all(&grid, &config)
    } else {
        vec![runner::run_algorithm(&grid, &config.algorithm, &config)]
    };

    if !config.quiet {
        // render the grid with the best path found, if any
        let best = outcomes
            .iter()
            .filter_map(|o| o.path.as_deref())
            .min_by_key(|p| p.len());
        println!("{}", display::render(&grid, best));
    }

    runner::print_results(&outcomes, runner::reference_cost(&grid));

    for outcome in &outcomes {
        println!("\n{}", outcome.stats);
    }

    if let Some(path) = &config.save_map {
        if let Err(e) = runner::save_map(&grid, path) {
            eprintln!("Failed to save map: {}", e);
            std::process::exit(1);
        }
        if !config.quiet {
            println!("Map saved to {}", path.display());
        }
    }
}
