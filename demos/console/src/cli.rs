use clap::{ArgAction, Parser};

use pf_map::GridConfig;

#[derive(Parser, Debug)]
#[command(name = "console")]
#[command(about = "Generate a random obstacle grid and find a shortest path across it with A*")]
#[command(long_about = "Generate a random obstacle grid and find a shortest path across it with A*.\n\n\
    Examples:\n  \
    console                        8x8 grid, random seed\n  \
    console --seed 42              Reproducible run\n  \
    console -W 40 -H 20 --ascii    Larger grid, ASCII glyphs\n  \
    console -vv                    Trace every expansion")]
pub struct Cli {
    /// Grid width in cells
    #[arg(short = 'W', long, default_value_t = 8)]
    pub width: u32,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = 8)]
    pub height: u32,

    /// Probability that any given cell is blocked, in [0, 1]
    #[arg(short, long, default_value_t = 0.2)]
    pub obstacles: f64,

    /// RNG seed for the grid and endpoints (random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Draw with ASCII glyphs instead of Unicode symbols
    #[arg(long)]
    pub ascii: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn grid_config(&self, seed: u64) -> GridConfig {
        GridConfig {
            width: self.width,
            height: self.height,
            obstacle_probability: self.obstacles,
            seed,
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}
