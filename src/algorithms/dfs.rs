use rustc_hash::{FxHashMap, FxHashSet};

use crate::engine::SearchEngine;
use crate::grid::Position;

impl SearchEngine<'_> {
    /// Depth-first search. Pops the most recently discovered cell first,
    /// so it commits to one corridor before backtracking; the result is a
    /// valid path but not necessarily the shortest. Cells are marked
    /// visited on pop, so the stack can hold duplicates and the parent of
    /// a cell is whichever push reached it last.
    pub fn dfs(&mut self) -> Option<Vec<Position>> {
        let start = self.grid().start();
        let goal = self.grid().goal();

        let mut frontier = vec![start];
        let mut visited = FxHashSet::default();
        let mut came_from = FxHashMap::default();

        while let Some(current) = frontier.pop() {
            if current == goal {
                return Some(self.rebuild_path(&came_from, goal));
            }
            if visited.insert(current) {
                for neighbor in self.expand(current) {
                    if !visited.contains(&neighbor) {
                        came_from.insert(neighbor, current);
                        frontier.push(neighbor);
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;
    use crate::SearchEngine;

    const SCENARIO: [&str; 4] = ["S..XG", ".X...", ".XXX.", "....."];

    #[test]
    fn finds_a_valid_path() {
        let grid = Grid::parse(&SCENARIO).unwrap();
        let mut engine = SearchEngine::new(&grid);
        let path = engine.dfs().unwrap();
        assert_eq!(path.first(), Some(&grid.start()));
        assert_eq!(path.last(), Some(&grid.goal()));
        for pair in path.windows(2) {
            let dr = pair[0].row.abs_diff(pair[1].row);
            let dc = pair[0].col.abs_diff(pair[1].col);
            assert_eq!(dr + dc, 1);
        }
        assert!(path.iter().all(|&pos| !grid.is_wall(pos)));
        assert!(engine.nodes_expanded() > 0);
    }

    #[test]
    fn path_is_never_shorter_than_bfs() {
        let grid = Grid::parse(&SCENARIO).unwrap();
        let dfs_path = SearchEngine::new(&grid).dfs().unwrap();
        let bfs_path = SearchEngine::new(&grid).bfs().unwrap();
        assert!(dfs_path.len() >= bfs_path.len());
    }

    #[test]
    fn walled_off_goal_returns_none() {
        let grid = Grid::parse(&["S.X.", "..XG", "..X."]).unwrap();
        assert_eq!(SearchEngine::new(&grid).dfs(), None);
    }

    #[test]
    fn is_deterministic() {
        let grid = Grid::parse(&SCENARIO).unwrap();
        let mut first = SearchEngine::new(&grid);
        let mut second = SearchEngine::new(&grid);
        assert_eq!(first.dfs(), second.dfs());
        assert_eq!(first.nodes_expanded(), second.nodes_expanded());
    }
}
