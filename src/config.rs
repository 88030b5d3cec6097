use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Grid width when generating a map.
    #[arg(long, default_value_t = 20)]
    pub width: usize,

    /// Grid height when generating a map.
    #[arg(long, default_value_t = 15)]
    pub height: usize,

    /// Which engine to run: "beam", "dynamic", or "all" to compare both.
    #[arg(long, default_value = "dynamic")]
    pub algorithm: String,

    /// Beam width for beam search.
    #[arg(long, default_value_t = 3)]
    pub beta: usize,

    /// Heuristic weight for dynamic weighted A*.
    #[arg(long, default_value_t = 1.5)]
    pub epsilon: f64,

    /// Heuristic method: "manhattan" or "euclidean".
    #[arg(long, default_value = "manhattan")]
    pub heuristic: String,

    /// Load the map from a JSON snapshot instead of generating one.
    #[arg(long)]
    pub map_file: Option<PathBuf>,

    /// Write the map that was searched to a JSON snapshot.
    #[arg(long)]
    pub save_map: Option<PathBuf>,

    /// Generate a random map instead of the built-in sample layout.
    #[arg(long, default_value_t = false)]
    pub random: bool,

    #[arg(long, default_value_t = 40)]
    pub num_obstacles: usize,

    #[arg(long, default_value_t = 8)]
    pub num_poison: usize,

    /// Seed for random map generation; omit for a fresh map every run.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the grid rendering, print results only.
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}
