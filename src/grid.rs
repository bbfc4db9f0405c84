use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Row/column coordinate of a cell, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Wall,
    Start,
    Goal,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unrecognized cell tag '{tag}' at ({row}, {col})")]
    UnknownTag { tag: char, row: usize, col: usize },
    #[error("no start cell in grid and none supplied")]
    MissingStart,
    #[error("no goal cell in grid and none supplied")]
    MissingGoal,
    #[error("duplicate start cell at {0}")]
    DuplicateStart(Position),
    #[error("duplicate goal cell at {0}")]
    DuplicateGoal(Position),
    #[error("{name} position {pos} is outside a {rows}x{cols} grid")]
    OutOfBounds {
        name: &'static str,
        pos: Position,
        rows: usize,
        cols: usize,
    },
}

// Neighbor probe order: +col, +row, -col, -row. All three searches
// inherit their tie-break behavior from this order.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// A rectangular grid of cells, immutable once constructed. Searches
/// borrow it read-only; start and goal are resolved at construction.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Vec<Cell>>,
    start: Position,
    goal: Position,
}

impl Grid {
    /// Builds a grid from rows of cell tags, locating start and goal by a
    /// row-major scan. Rejects ragged rows and missing or duplicated
    /// start/goal tags up front.
    pub fn new(cells: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let (rows, cols) = Self::check_rectangular(&cells)?;

        let mut start = None;
        let mut goal = None;
        for (r, row) in cells.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                let pos = Position { row: r, col: c };
                match cell {
                    Cell::Start => {
                        if start.replace(pos).is_some() {
                            return Err(GridError::DuplicateStart(pos));
                        }
                    }
                    Cell::Goal => {
                        if goal.replace(pos).is_some() {
                            return Err(GridError::DuplicateGoal(pos));
                        }
                    }
                    Cell::Open | Cell::Wall => {}
                }
            }
        }

        Ok(Grid {
            rows,
            cols,
            cells,
            start: start.ok_or(GridError::MissingStart)?,
            goal: goal.ok_or(GridError::MissingGoal)?,
        })
    }

    /// Builds a grid with explicitly supplied endpoints. Explicit values
    /// win: any start/goal tags in `cells` stay passable but take no part
    /// in endpoint resolution.
    pub fn with_endpoints(
        cells: Vec<Vec<Cell>>,
        start: Position,
        goal: Position,
    ) -> Result<Self, GridError> {
        let (rows, cols) = Self::check_rectangular(&cells)?;
        for (name, pos) in [("start", start), ("goal", goal)] {
            if pos.row >= rows || pos.col >= cols {
                return Err(GridError::OutOfBounds {
                    name,
                    pos,
                    rows,
                    cols,
                });
            }
        }
        Ok(Grid {
            rows,
            cols,
            cells,
            start,
            goal,
        })
    }

    /// Parses the literal format: one string per row, `S` start, `G` goal,
    /// `X` wall, `.` open.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        let mut cells = Vec::with_capacity(lines.len());
        for (r, line) in lines.iter().enumerate() {
            let mut row = Vec::new();
            for (c, tag) in line.as_ref().chars().enumerate() {
                let cell = match tag {
                    'S' => Cell::Start,
                    'G' => Cell::Goal,
                    'X' => Cell::Wall,
                    '.' => Cell::Open,
                    _ => {
                        return Err(GridError::UnknownTag {
                            tag,
                            row: r,
                            col: c,
                        })
                    }
                };
                row.push(cell);
            }
            cells.push(row);
        }
        Self::new(cells)
    }

    /// Generates a square grid with random endpoints and walls. The start
    /// lands in the top-left quadrant and the goal in the bottom-right, so
    /// the two never coincide. Wall placement gives up after a bounded
    /// number of attempts rather than looping forever on crowded grids.
    /// A fixed `seed` reproduces the same grid. `size` must be at least 2.
    pub fn random(size: usize, num_walls: usize, seed: Option<u64>) -> Self {
        assert!(size >= 2, "random grid needs size >= 2");
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut cells = vec![vec![Cell::Open; size]; size];
        let start = Position {
            row: rng.gen_range(0..size / 2),
            col: rng.gen_range(0..size / 2),
        };
        let goal = Position {
            row: rng.gen_range(size / 2..size),
            col: rng.gen_range(size / 2..size),
        };

        let mut walls_placed = 0;
        let mut attempts = 0;
        while walls_placed < num_walls && attempts < num_walls * 3 {
            let pos = Position {
                row: rng.gen_range(0..size),
                col: rng.gen_range(0..size),
            };
            if pos != start && pos != goal && cells[pos.row][pos.col] == Cell::Open {
                cells[pos.row][pos.col] = Cell::Wall;
                walls_placed += 1;
            }
            attempts += 1;
        }

        cells[start.row][start.col] = Cell::Start;
        cells[goal.row][goal.col] = Cell::Goal;

        Grid {
            rows: size,
            cols: size,
            cells,
            start,
            goal,
        }
    }

    fn check_rectangular(cells: &[Vec<Cell>]) -> Result<(usize, usize), GridError> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        for (r, row) in cells.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: r,
                    len: row.len(),
                    expected: cols,
                });
            }
        }
        Ok((rows, cols))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row][pos.col]
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.cells[pos.row][pos.col] == Cell::Wall
    }

    /// Returns the up-to-4 in-bounds, non-wall neighbors of `pos`, in the
    /// fixed +col, +row, -col, -row order.
    pub fn neighbors(&self, pos: Position) -> Vec<Position> {
        let mut neighbors = Vec::with_capacity(4);
        for (dr, dc) in DIRECTIONS {
            let nr = pos.row as isize + dr;
            let nc = pos.col as isize + dc;
            if nr < 0 || nc < 0 || nr as usize >= self.rows || nc as usize >= self.cols {
                continue;
            }
            let next = Position {
                row: nr as usize,
                col: nc as usize,
            };
            if self.cells[next.row][next.col] != Cell::Wall {
                neighbors.push(next);
            }
        }
        neighbors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    #[test]
    fn parse_scans_start_and_goal() {
        let grid = Grid::parse(&["S..", ".X.", "..G"]).unwrap();
        assert_eq!(grid.start(), pos(0, 0));
        assert_eq!(grid.goal(), pos(2, 2));
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.cell(pos(1, 1)), Cell::Wall);
    }

    #[test]
    fn parse_rejects_empty_and_ragged() {
        assert_eq!(Grid::parse::<&str>(&[]).unwrap_err(), GridError::Empty);
        assert_eq!(
            Grid::parse(&["S..", "..", "..G"]).unwrap_err(),
            GridError::RaggedRow {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn parse_rejects_unknown_tag() {
        assert_eq!(
            Grid::parse(&["S.?", "..G"]).unwrap_err(),
            GridError::UnknownTag {
                tag: '?',
                row: 0,
                col: 2
            }
        );
    }

    #[test]
    fn parse_requires_exactly_one_start_and_goal() {
        assert_eq!(
            Grid::parse(&["S.S", "..G"]).unwrap_err(),
            GridError::DuplicateStart(pos(0, 2))
        );
        assert_eq!(
            Grid::parse(&["S.G", "..G"]).unwrap_err(),
            GridError::DuplicateGoal(pos(1, 2))
        );
        assert_eq!(
            Grid::parse(&["...", "..G"]).unwrap_err(),
            GridError::MissingStart
        );
        assert_eq!(
            Grid::parse(&["S..", "..."]).unwrap_err(),
            GridError::MissingGoal
        );
    }

    #[test]
    fn explicit_endpoints_win_over_tags() {
        let cells = vec![
            vec![Cell::Start, Cell::Open],
            vec![Cell::Open, Cell::Goal],
        ];
        let grid = Grid::with_endpoints(cells, pos(1, 0), pos(0, 1)).unwrap();
        assert_eq!(grid.start(), pos(1, 0));
        assert_eq!(grid.goal(), pos(0, 1));
    }

    #[test]
    fn explicit_endpoints_must_be_in_bounds() {
        let cells = vec![vec![Cell::Open, Cell::Open]];
        let err = Grid::with_endpoints(cells, pos(0, 0), pos(1, 0)).unwrap_err();
        assert_eq!(
            err,
            GridError::OutOfBounds {
                name: "goal",
                pos: pos(1, 0),
                rows: 1,
                cols: 2
            }
        );
    }

    #[test]
    fn neighbors_follow_fixed_order() {
        let grid = Grid::parse(&["S..", "...", "..G"]).unwrap();
        // +col, +row, -col, -row around the center cell.
        assert_eq!(
            grid.neighbors(pos(1, 1)),
            vec![pos(1, 2), pos(2, 1), pos(1, 0), pos(0, 1)]
        );
    }

    #[test]
    fn neighbors_skip_walls_and_bounds() {
        let grid = Grid::parse(&["S.X", ".X.", "..G"]).unwrap();
        // Corner: only +col and +row exist.
        assert_eq!(grid.neighbors(pos(0, 0)), vec![pos(0, 1), pos(1, 0)]);
        // (0, 1): +col and +row are walls, -row is out of bounds.
        assert_eq!(grid.neighbors(pos(0, 1)), vec![pos(0, 0)]);
    }

    #[test]
    fn random_grid_keeps_endpoints_open() {
        let grid = Grid::random(10, 30, Some(7));
        assert_eq!(grid.cell(grid.start()), Cell::Start);
        assert_eq!(grid.cell(grid.goal()), Cell::Goal);
        assert_ne!(grid.start(), grid.goal());
    }

    #[test]
    fn random_grid_is_reproducible_with_seed() {
        let a = Grid::random(12, 40, Some(99));
        let b = Grid::random(12, 40, Some(99));
        assert_eq!(a.start(), b.start());
        assert_eq!(a.goal(), b.goal());
        for row in 0..a.rows() {
            for col in 0..a.cols() {
                assert_eq!(a.cell(pos(row, col)), b.cell(pos(row, col)));
            }
        }
    }
}
