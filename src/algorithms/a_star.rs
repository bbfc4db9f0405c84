use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithms::Heuristic;
use crate::engine::SearchEngine;
use crate::grid::Position;

/// Priority-queue entry for A*. `BinaryHeap` is a max-heap, so the
/// comparison is reversed to pop the lowest f-score first. Equal
/// f-scores pop in insertion order via the sequence number, which keeps
/// runs deterministic instead of leaning on incidental heap order.
#[derive(Clone, Copy)]
struct FrontierEntry {
    f: f64,
    seq: u64,
    pos: Position,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl SearchEngine<'_> {
    /// A* with the default Manhattan heuristic.
    pub fn astar_default(&mut self) -> Option<Vec<Position>> {
        self.astar(Heuristic::default())
    }

    /// A* keyed by f = g + h with unit edge costs. Cells are marked
    /// visited on pop; g-scores are relaxed on every neighbor visit, so a
    /// cell can sit in the frontier several times and stale entries are
    /// skipped when popped. With an admissible heuristic the first pop of
    /// the goal carries a shortest path.
    pub fn astar(&mut self, heuristic: Heuristic) -> Option<Vec<Position>> {
        let start = self.grid().start();
        let goal = self.grid().goal();

        let mut frontier = BinaryHeap::new();
        let mut visited = FxHashSet::default();
        let mut came_from = FxHashMap::default();
        let mut g_score: FxHashMap<Position, usize> = FxHashMap::default();
        let mut seq = 0u64;

        g_score.insert(start, 0);
        frontier.push(FrontierEntry {
            f: heuristic.estimate(start, goal),
            seq,
            pos: start,
        });

        while let Some(entry) = frontier.pop() {
            let current = entry.pos;
            if current == goal {
                return Some(self.rebuild_path(&came_from, goal));
            }
            if !visited.insert(current) {
                continue;
            }
            let current_g = g_score[&current];
            for neighbor in self.expand(current) {
                let tentative_g = current_g + 1;
                let improved = g_score
                    .get(&neighbor)
                    .map_or(true, |&known| tentative_g < known);
                if improved {
                    g_score.insert(neighbor, tentative_g);
                    came_from.insert(neighbor, current);
                    seq += 1;
                    frontier.push(FrontierEntry {
                        f: tentative_g as f64 + heuristic.estimate(neighbor, goal),
                        seq,
                        pos: neighbor,
                    });
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::algorithms::Heuristic;
    use crate::grid::Grid;
    use crate::SearchEngine;

    const SCENARIO: [&str; 4] = ["S..XG", ".X...", ".XXX.", "....."];

    #[test]
    fn matches_bfs_length_with_either_heuristic() {
        let grid = Grid::parse(&SCENARIO).unwrap();
        let bfs_len = SearchEngine::new(&grid).bfs().unwrap().len();
        for heuristic in Heuristic::ALL {
            let path = SearchEngine::new(&grid).astar(heuristic).unwrap();
            assert_eq!(path.len(), bfs_len);
            assert_eq!(path.first(), Some(&grid.start()));
            assert_eq!(path.last(), Some(&grid.goal()));
        }
    }

    #[test]
    fn steps_are_orthogonal_and_wall_free() {
        let grid = Grid::parse(&SCENARIO).unwrap();
        let path = SearchEngine::new(&grid).astar_default().unwrap();
        for pair in path.windows(2) {
            let dr = pair[0].row.abs_diff(pair[1].row);
            let dc = pair[0].col.abs_diff(pair[1].col);
            assert_eq!(dr + dc, 1);
        }
        assert!(path.iter().all(|&pos| !grid.is_wall(pos)));
    }

    #[test]
    fn expands_no_more_than_bfs_on_open_ground() {
        // A* steers toward the goal, so on an open grid it should need
        // fewer expansions than an exhaustive BFS sweep.
        let grid = Grid::parse(&[
            "S.........",
            "..........",
            "..........",
            "..........",
            ".........G",
        ])
        .unwrap();
        let mut astar_engine = SearchEngine::new(&grid);
        astar_engine.astar_default().unwrap();
        let mut bfs_engine = SearchEngine::new(&grid);
        bfs_engine.bfs().unwrap();
        assert!(astar_engine.nodes_expanded() <= bfs_engine.nodes_expanded());
    }

    #[test]
    fn walled_off_goal_returns_none() {
        let grid = Grid::parse(&["S.X.", "..XG", "..X."]).unwrap();
        for heuristic in Heuristic::ALL {
            assert_eq!(SearchEngine::new(&grid).astar(heuristic), None);
        }
    }

    #[test]
    fn is_deterministic() {
        let grid = Grid::parse(&SCENARIO).unwrap();
        for heuristic in Heuristic::ALL {
            let mut first = SearchEngine::new(&grid);
            let mut second = SearchEngine::new(&grid);
            assert_eq!(first.astar(heuristic), second.astar(heuristic));
            assert_eq!(first.nodes_expanded(), second.nodes_expanded());
        }
    }
}
