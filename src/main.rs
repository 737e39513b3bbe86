use std::io;

use clap::Parser;
use flotilla::{
    init_logging, render_board, Game, Grid, Session, SessionEnd, FLEET, GRID_COLS, GRID_ROWS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Sink the hidden fleet.", long_about = None)]
struct Cli {
    /// Print the full board (ship positions included) before play begins.
    #[arg(long)]
    debug: bool,
    /// Fix RNG seed for reproducible placements (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    // Interrupt ends the game quietly, not as an error.
    ctrlc::set_handler(|| std::process::exit(0))?;

    if cli.debug {
        println!("Initializing game...");
    }
    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    let grid = Grid::new(GRID_ROWS, GRID_COLS);
    let game = Game::new(&mut rng, grid, &FLEET)?;
    if cli.debug {
        println!("Game initialized...");
        print!("{}", render_board(game.grid(), game.fleet()));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(game, stdin.lock(), stdout.lock());
    match session.run()? {
        SessionEnd::Won => log::debug!("fleet destroyed, game over"),
        SessionEnd::Surrendered => log::debug!("player surrendered"),
    }
    Ok(())
}
