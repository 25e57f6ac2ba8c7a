use anyhow::Result;
use clap::Parser;
use grid_snake::game::{BoundaryMode, GameConfig};
use grid_snake::logging;
use grid_snake::modes::PlayMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "grid-snake")]
#[command(version, about = "Snake on a square grid, with food that can turn the snake around")]
struct Cli {
    /// JSON configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid side length
    #[arg(long)]
    size: Option<usize>,

    /// Leave one edge and re-enter from the opposite one instead of dying
    #[arg(long)]
    wrap: bool,

    /// Starting tick interval in milliseconds
    #[arg(long)]
    interval: Option<u64>,

    /// Probability that a new food reverses the snake (0 disables)
    #[arg(long)]
    reverse_chance: Option<f64>,

    /// Seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write tracing output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            config.board_size = size;
        }
        if self.wrap {
            config.boundary = BoundaryMode::Wrap;
        }
        if let Some(interval) = self.interval {
            config.initial_interval_ms = interval;
        }
        if let Some(chance) = self.reverse_chance {
            config.reverse_food_chance = chance;
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init_file_logging(path)?;
    }

    let config = cli.game_config()?;
    tracing::info!(?config, seed = ?cli.seed, "starting");

    let mut play = PlayMode::from_config(config, cli.seed);
    play.run().await?;

    Ok(())
}
