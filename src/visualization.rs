use rustc_hash::FxHashSet;

use crate::grid::{Cell, Grid, Position};

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const RESET: &str = "\x1b[0m";

/// Prints the grid with the found path overlaid. Start is green, goal is
/// red, path cells are blue, walls and open cells stay plain. Only open
/// cells get recolored by the path; start and goal keep their own colors
/// even though the path begins and ends on them. Read-only over both
/// inputs.
pub fn render_path(grid: &Grid, path: &[Position], label: &str) {
    let on_path: FxHashSet<Position> = path.iter().copied().collect();

    println!("Path found using {}", label);
    println!("Legend: S=Start, G=Goal, #=Wall, *=Path, .=Open");

    // Column numbers header.
    print!("   ");
    for col in 0..grid.cols() {
        print!("{:2}", col % 10);
    }
    println!();

    for row in 0..grid.rows() {
        print!("{:2} ", row);
        for col in 0..grid.cols() {
            let pos = Position { row, col };
            if pos == grid.start() {
                print!("{}S{} ", GREEN, RESET);
            } else if pos == grid.goal() {
                print!("{}G{} ", RED, RESET);
            } else if on_path.contains(&pos) {
                print!("{}*{} ", BLUE, RESET);
            } else {
                let tag = match grid.cell(pos) {
                    Cell::Wall => '#',
                    // Leftover tags from a grid with explicit endpoints
                    // render as plain open ground.
                    Cell::Open | Cell::Start | Cell::Goal => '.',
                };
                print!("{} ", tag);
            }
        }
        println!();
    }
    println!();
}
