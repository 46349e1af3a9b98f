use clap::Parser;
use liblife::Color;

use crate::renderer::DisplayConfig;

/// Conway's Game of Life on a wrapping board.
#[derive(Debug, Clone, Parser)]
#[command(name = "life", version)]
pub struct Cli {
    /// Display width in pixels.
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Display height in pixels.
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Board width in cells, defaults to the display width.
    #[arg(long)]
    pub board_width: Option<usize>,

    /// Board height in cells, defaults to the display height.
    #[arg(long)]
    pub board_height: Option<usize>,

    /// Seed for pattern placement. A random one is picked and logged when absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Frame rate cap, 0 runs uncapped.
    #[arg(long, default_value_t = 60)]
    pub fps: u64,

    /// Live cell color as rrggbb.
    #[arg(long, default_value_t = Color::WHITE)]
    pub foreground: Color,

    /// Dead cell color as rrggbb.
    #[arg(long, default_value_t = Color::BLACK)]
    pub background: Color,

    #[arg(long, default_value = "Conway's Game of Life")]
    pub title: String,
}

impl Cli {
    pub fn board_size(&self) -> (usize, usize) {
        (
            self.board_width.unwrap_or(self.width as usize),
            self.board_height.unwrap_or(self.height as usize),
        )
    }

    pub fn display_config(&self) -> DisplayConfig {
        DisplayConfig {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            target_fps: self.fps,
        }
    }
}
