use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::engine::SearchEngine;
use crate::grid::Position;

impl SearchEngine<'_> {
    /// Breadth-first search. Expands in discovery order, so the returned
    /// path is shortest in step count. Cells are marked visited when
    /// enqueued, which keeps every cell in the frontier at most once.
    pub fn bfs(&mut self) -> Option<Vec<Position>> {
        let start = self.grid().start();
        let goal = self.grid().goal();

        let mut frontier = VecDeque::new();
        let mut visited = FxHashSet::default();
        let mut came_from = FxHashMap::default();
        frontier.push_back(start);
        visited.insert(start);

        while let Some(current) = frontier.pop_front() {
            if current == goal {
                return Some(self.rebuild_path(&came_from, goal));
            }
            for neighbor in self.expand(current) {
                if visited.insert(neighbor) {
                    came_from.insert(neighbor, current);
                    frontier.push_back(neighbor);
                }
            }
        }
        None
    }
}
