use pathfinding::prelude::astar;

use crate::algorithms::{Algorithm, Heuristic};
use crate::grid::Grid;
use crate::metrics::{MetricsRunner, SearchResult};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One labelled run out of a comparison sweep.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub algorithm: Algorithm,
    /// `Some` only for A* runs; BFS and DFS take no heuristic.
    pub heuristic: Option<Heuristic>,
    pub result: SearchResult,
}

impl RunReport {
    pub fn label(&self) -> String {
        match self.heuristic {
            Some(heuristic) => format!("{} ({})", self.algorithm.label(), heuristic.label()),
            None => self.algorithm.label().to_string(),
        }
    }
}

/// Shortest step count from start to goal computed with an external A*
/// as an independent baseline, or `None` when the goal is unreachable.
pub fn optimal_path_length(grid: &Grid) -> Option<usize> {
    let goal = grid.goal();
    astar(
        &grid.start(),
        |&pos| {
            grid.neighbors(pos)
                .into_iter()
                .map(|next| (next, 1u32))
                .collect::<Vec<_>>()
        },
        |pos| (pos.row.abs_diff(goal.row) + pos.col.abs_diff(goal.col)) as u32,
        |&pos| pos == goal,
    )
    .map(|(path, _)| path.len().saturating_sub(1))
}

/// Runs BFS, DFS and A* with each heuristic over the same grid, one
/// fresh measured run per combination.
pub fn compare_algorithms(grid: &Grid) -> Vec<RunReport> {
    let mut runner = MetricsRunner::new(grid);
    let mut reports = Vec::new();

    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        reports.push(RunReport {
            algorithm,
            heuristic: None,
            result: runner.run(algorithm, Heuristic::default()),
        });
    }
    for heuristic in Heuristic::ALL {
        reports.push(RunReport {
            algorithm: Algorithm::AStar,
            heuristic: Some(heuristic),
            result: runner.run(Algorithm::AStar, heuristic),
        });
    }
    reports
}

/// Prints the comparison table with the optimal-length baseline and per
/// run route efficiency (steps taken over optimal steps).
pub fn print_comparison(grid: &Grid, reports: &[RunReport]) {
    let optimal = optimal_path_length(grid);

    println!("\n=== ALGORITHM COMPARISON RESULTS ===");
    match optimal {
        Some(steps) => println!("Optimal path length (reference A*): {} steps", steps),
        None => println!("Goal is unreachable from start"),
    }
    println!();
    println!(
        "{:<18} {:<8} {:<8} {:<12} {:<14} {:<12} {:<10}",
        "Algorithm", "Found", "Steps", "Efficiency", "Time", "Memory", "Expanded"
    );
    println!("{}", "-".repeat(86));

    for report in reports {
        let result = &report.result;
        let found_str = if result.path.is_some() { "yes" } else { "no" };
        let steps = result.path_len().saturating_sub(1);
        let efficiency_str = match (&result.path, optimal) {
            (Some(_), Some(best)) if best > 0 => format!("{:.3}", steps as f64 / best as f64),
            (Some(_), Some(_)) => "1.000".to_string(),
            _ => "-".to_string(),
        };
        let memory_str = match result.memory_usage {
            Some(bytes) => format!("{:.1} MB", bytes as f64 / BYTES_PER_MB),
            None => "n/a".to_string(),
        };
        println!(
            "{:<18} {:<8} {:<8} {:<12} {:<14} {:<12} {:<10}",
            report.label(),
            found_str,
            steps,
            efficiency_str,
            format!("{:.2?}", result.execution_time),
            memory_str,
            result.nodes_expanded
        );
    }

    // Expansion ratios against the leanest run, mirroring the per-grid
    // efficiency comparison of the reporting scripts.
    let leanest = reports
        .iter()
        .filter(|r| r.result.nodes_expanded > 0)
        .min_by_key(|r| r.result.nodes_expanded);
    if let Some(leanest) = leanest {
        println!();
        println!(
            "Fewest expansions: {} ({} nodes)",
            leanest.label(),
            leanest.result.nodes_expanded
        );
        for report in reports {
            if report.result.nodes_expanded > 0 {
                let ratio =
                    report.result.nodes_expanded as f64 / leanest.result.nodes_expanded as f64;
                println!("  {}: {:.2}x", report.label(), ratio);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: [&str; 4] = ["S..XG", ".X...", ".XXX.", "....."];

    #[test]
    fn baseline_matches_known_scenario() {
        let grid = Grid::parse(&SCENARIO).unwrap();
        assert_eq!(optimal_path_length(&grid), Some(6));
    }

    #[test]
    fn baseline_is_none_when_walled_off() {
        let grid = Grid::parse(&["S.X.", "..XG", "..X."]).unwrap();
        assert_eq!(optimal_path_length(&grid), None);
    }

    #[test]
    fn sweep_covers_every_combination() {
        let grid = Grid::parse(&SCENARIO).unwrap();
        let reports = compare_algorithms(&grid);
        let labels: Vec<String> = reports.iter().map(RunReport::label).collect();
        assert_eq!(
            labels,
            vec!["BFS", "DFS", "A* (manhattan)", "A* (euclidean)"]
        );
    }

    #[test]
    fn optimal_runs_agree_with_the_baseline() {
        let grid = Grid::parse(&SCENARIO).unwrap();
        let optimal = optimal_path_length(&grid).unwrap();
        for report in compare_algorithms(&grid) {
            let steps = report.result.path_len() - 1;
            match report.algorithm {
                Algorithm::Dfs => assert!(steps >= optimal),
                _ => assert_eq!(steps, optimal),
            }
        }
    }
}
