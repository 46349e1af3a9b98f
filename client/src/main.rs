use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use liblife::{Game, board::GameBoard};
use rand::{SeedableRng, rngs::StdRng};
use simulation::Simulation;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod renderer;
mod seed;
mod simulation;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let (board_width, board_height) = cli.board_size();
    let mut board = GameBoard::new(board_width, board_height).context("Creating board")?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, board_width, board_height, "seeding board");

    let placed = seed::seed_board(&mut board, &mut StdRng::seed_from_u64(seed));
    info!(placed, alive = board.alive_count(), "board seeded");

    let simulation = Simulation::new(
        Game::new(board),
        cli.width as usize,
        cli.height as usize,
        cli.foreground,
        cli.background,
    );

    renderer::run(simulation, cli.display_config())
}
