use std::fmt;
use std::time::{Duration, Instant};

use crate::algorithms::{Algorithm, Heuristic};
use crate::engine::SearchEngine;
use crate::grid::{Grid, Position};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Outcome of one measured search run. `path` is `None` when the goal is
/// unreachable; that is a first-class result, not a failure.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub path: Option<Vec<Position>>,
    pub nodes_expanded: usize,
    pub execution_time: Duration,
    /// Resident process memory in bytes sampled right after the run, or
    /// `None` on platforms where no sample is available.
    pub memory_usage: Option<usize>,
}

impl SearchResult {
    /// Path length in cells; 0 when no path was found.
    pub fn path_len(&self) -> usize {
        self.path.as_ref().map_or(0, Vec::len)
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time taken: {:.2?}", self.execution_time)?;
        match self.memory_usage {
            Some(bytes) => writeln!(f, "Memory used: {:.2} MB", bytes as f64 / BYTES_PER_MB)?,
            None => writeln!(f, "Memory used: unavailable")?,
        }
        writeln!(f, "Nodes expanded: {}", self.nodes_expanded)?;
        match &self.path {
            Some(path) => writeln!(f, "Path length: {} cells", path.len()),
            None => writeln!(f, "No path found"),
        }
    }
}

/// Wraps a [`SearchEngine`] and measures single runs: counter reset,
/// wall-clock timing around the search call, and a point-in-time memory
/// sample packaged into a [`SearchResult`].
pub struct MetricsRunner<'a> {
    engine: SearchEngine<'a>,
}

impl<'a> MetricsRunner<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        MetricsRunner {
            engine: SearchEngine::new(grid),
        }
    }

    pub fn run(&mut self, algorithm: Algorithm, heuristic: Heuristic) -> SearchResult {
        self.engine.reset_expansions();
        let started = Instant::now();
        let path = self.engine.search(algorithm, heuristic);
        let execution_time = started.elapsed();
        let memory_usage = memory_stats::memory_stats().map(|stats| stats.physical_mem);

        SearchResult {
            path,
            nodes_expanded: self.engine.nodes_expanded(),
            execution_time,
            memory_usage,
        }
    }
}
