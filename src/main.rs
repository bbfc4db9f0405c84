use std::error::Error;
use std::fs;
use std::process;
use std::str::FromStr;

use clap::Parser;

use grid_search::compare;
use grid_search::config::Config;
use grid_search::visualization;
use grid_search::{Algorithm, Grid, Heuristic, MetricsRunner};

fn main() {
    let config = Config::parse();

    let grid = match load_grid(&config) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Failed to build grid: {}", e);
            process::exit(1);
        }
    };

    println!("Grid: {}x{}", grid.rows(), grid.cols());
    println!("Start: {}, Goal: {}", grid.start(), grid.goal());
    println!();

    if config.algorithm.eq_ignore_ascii_case("all") {
        let reports = compare::compare_algorithms(&grid);
        if !config.no_visualization {
            for report in &reports {
                if let Some(path) = &report.result.path {
                    visualization::render_path(&grid, path, &report.label());
                }
            }
        }
        compare::print_comparison(&grid, &reports);
        return;
    }

    let algorithm = match Algorithm::from_str(&config.algorithm) {
        Ok(algorithm) => algorithm,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };
    let heuristic = match Heuristic::from_str(&config.heuristic) {
        Ok(heuristic) => heuristic,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!("Running {}...", algorithm.label());
    println!("----------------------------------------");
    let mut runner = MetricsRunner::new(&grid);
    let result = runner.run(algorithm, heuristic);

    match &result.path {
        Some(path) if !config.no_visualization => {
            visualization::render_path(&grid, path, algorithm.label());
        }
        Some(_) => {}
        None => println!("No path found using {}", algorithm.label()),
    }
    println!("{}", result);
}

fn load_grid(config: &Config) -> Result<Grid, Box<dyn Error>> {
    match &config.grid_file {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let lines: Vec<&str> = text.lines().filter(|line| !line.trim().is_empty()).collect();
            Ok(Grid::parse(&lines)?)
        }
        None => {
            if config.grid_size < 2 {
                return Err("--grid-size must be at least 2".into());
            }
            Ok(Grid::random(config.grid_size, config.num_walls, config.seed))
        }
    }
}
