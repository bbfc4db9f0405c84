use rustc_hash::FxHashMap;

use crate::algorithms::{Algorithm, Heuristic};
use crate::grid::{Grid, Position};

/// Runs one traversal at a time over a borrowed grid.
///
/// The engine owns the expansion counter: every call to [`expand`]
/// counts one expansion event, regardless of how many neighbors come
/// back. Callers reset the counter before a timed run and read it
/// afterwards; no state other than the counter survives across search
/// calls.
///
/// [`expand`]: SearchEngine::expand
pub struct SearchEngine<'a> {
    grid: &'a Grid,
    nodes_expanded: usize,
}

impl<'a> SearchEngine<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        SearchEngine {
            grid,
            nodes_expanded: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Expansion events since construction or the last reset.
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    pub fn reset_expansions(&mut self) {
        self.nodes_expanded = 0;
    }

    /// Runs the selected algorithm. The heuristic only matters for A*.
    pub fn search(&mut self, algorithm: Algorithm, heuristic: Heuristic) -> Option<Vec<Position>> {
        match algorithm {
            Algorithm::Bfs => self.bfs(),
            Algorithm::Dfs => self.dfs(),
            Algorithm::AStar => self.astar(heuristic),
        }
    }

    /// One expansion event: counts the call and returns the grid's
    /// neighbors for `pos`.
    pub(crate) fn expand(&mut self, pos: Position) -> Vec<Position> {
        self.nodes_expanded += 1;
        self.grid.neighbors(pos)
    }

    /// Walks the parent map back from `goal` and returns the start-first
    /// path. The map holds no entry for the start cell.
    pub(crate) fn rebuild_path(
        &self,
        came_from: &FxHashMap<Position, Position>,
        goal: Position,
    ) -> Vec<Position> {
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(&parent) = came_from.get(&current) {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }
}
