//! Comparative search over static 2-D grids.
//!
//! Three classic strategies run against the same grid and the same
//! neighbor-expansion contract:
//!
//! - **BFS** — FIFO frontier, shortest path in step count
//! - **DFS** — LIFO frontier, a valid but not necessarily shortest path
//! - **A\*** — priority frontier keyed by f = g + h, shortest path with
//!   an admissible heuristic (Manhattan by default, Euclidean optional)
//!
//! [`SearchEngine`] owns the per-run expansion counter; the
//! [`metrics::MetricsRunner`] wraps a run with wall-clock timing and a
//! process memory sample. An unreachable goal is a `None` path, never an
//! error.
//!
//! ```
//! use grid_search::{Grid, SearchEngine};
//!
//! let grid = Grid::parse(&["S..XG", ".X...", ".XXX.", "....."]).unwrap();
//! let mut engine = SearchEngine::new(&grid);
//! let path = engine.bfs().expect("this layout has a route");
//! assert_eq!(path.len(), 7);
//! ```

pub mod algorithms;
pub mod compare;
pub mod config;
pub mod engine;
pub mod grid;
pub mod metrics;
pub mod visualization;

pub use algorithms::{Algorithm, Heuristic, UnknownAlgorithm, UnknownHeuristic};
pub use engine::SearchEngine;
pub use grid::{Cell, Grid, GridError, Position};
pub use metrics::{MetricsRunner, SearchResult};
