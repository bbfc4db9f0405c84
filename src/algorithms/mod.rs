pub mod a_star;
pub mod bfs;
pub mod common;
pub mod dfs;

pub use common::{Algorithm, Heuristic, UnknownAlgorithm, UnknownHeuristic};
