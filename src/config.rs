use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// File holding a grid literal: rows of S, G, X and '.' characters.
    /// When absent, a random grid is generated instead.
    #[arg(long)]
    pub grid_file: Option<PathBuf>,

    /// Side length of the generated grid.
    #[arg(long, default_value_t = 20)]
    pub grid_size: usize,

    /// Number of walls to scatter over the generated grid.
    #[arg(long, default_value_t = 50)]
    pub num_walls: usize,

    /// Seed for reproducible grid generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// bfs, dfs, astar, or all to compare every algorithm.
    #[arg(long, default_value = "all")]
    pub algorithm: String,

    /// manhattan or euclidean; only A* consults it.
    #[arg(long, default_value = "manhattan")]
    pub heuristic: String,

    #[arg(long, default_value_t = false)]
    pub no_visualization: bool,
}
