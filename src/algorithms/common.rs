use std::str::FromStr;

use thiserror::Error;

use crate::grid::Position;

/// The three traversal strategies the engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
            Algorithm::AStar => "A*",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown algorithm '{0}', expected one of: bfs, dfs, astar")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "astar" | "a_star" | "a*" => Ok(Algorithm::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Cost-to-go estimate for A*. Both variants are admissible on a
/// unit-cost orthogonal grid, so either keeps A* optimal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Euclidean,
}

impl Heuristic {
    pub const ALL: [Heuristic; 2] = [Heuristic::Manhattan, Heuristic::Euclidean];

    pub fn label(&self) -> &'static str {
        match self {
            Heuristic::Manhattan => "manhattan",
            Heuristic::Euclidean => "euclidean",
        }
    }

    /// Estimated remaining cost from `from` to `goal`.
    pub fn estimate(&self, from: Position, goal: Position) -> f64 {
        let dr = from.row as f64 - goal.row as f64;
        let dc = from.col as f64 - goal.col as f64;
        match self {
            Heuristic::Manhattan => dr.abs() + dc.abs(),
            Heuristic::Euclidean => (dr * dr + dc * dc).sqrt(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown heuristic '{0}', expected one of: manhattan, euclidean")]
pub struct UnknownHeuristic(pub String);

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Heuristic::Manhattan),
            "euclidean" => Ok(Heuristic::Euclidean),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}
