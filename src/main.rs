use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use gridsnake::game::GameConfig;
use gridsnake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "gridsnake")]
#[command(version, about = "Chase the mouse around a terminal grid")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "50")]
    width: u32,

    /// Grid height in cells
    #[arg(long, default_value = "40")]
    height: u32,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "100")]
    tick_ms: u64,

    /// JSON file supplying the whole game configuration (replaces the
    /// individual flags)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => GameConfig::from_json_file(&path)?,
        None => {
            let config = GameConfig {
                grid_width: cli.width,
                grid_height: cli.height,
                tick_ms: cli.tick_ms,
                ..GameConfig::default()
            };
            config.validate()?;
            config
        }
    };

    let mut human_mode = HumanMode::new(config);
    human_mode.run().await?;

    Ok(())
}
