use broadside::{
    init_logging, CliPlayer, CoordinateSource, Game, GameConfig, GameMode, Presenter,
    RandomPlayer, Seat, TerminalPresenter, BOARD_SIZE, FLEET,
};

use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Two players take turns at the same terminal.
    Play {
        #[arg(long, value_enum, default_value_t = GameMode::Classic)]
        mode: GameMode,
        #[arg(long, default_value_t = BOARD_SIZE)]
        size: usize,
        #[arg(long, default_value = "Player 1")]
        name1: String,
        #[arg(long, default_value = "Player 2")]
        name2: String,
        #[arg(long, help = "Do not clear the screen between turns")]
        no_clear: bool,
    },
    /// Watch two random players fight it out.
    Auto {
        #[arg(long, value_enum, default_value_t = GameMode::Classic)]
        mode: GameMode,
        #[arg(long, default_value_t = BOARD_SIZE)]
        size: usize,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            mode,
            size,
            name1,
            name2,
            no_clear,
        } => {
            let config = GameConfig::new(size, FLEET.to_vec(), mode);
            let mut game = Game::new(&config, &name1, &name2).map_err(|e| anyhow::anyhow!(e))?;
            println!("Welcome to Broadside! You chose: {:?} game.", mode);

            let mut presenter = TerminalPresenter::new(mode).hot_seat(!no_clear);
            let mut p1 = CliPlayer::new();
            let mut p2 = CliPlayer::new();
            presenter.hand_over(&name1);
            game.place_fleet(Seat::First, &mut p1)
                .map_err(|e| anyhow::anyhow!(e))?;
            presenter.clear();
            presenter.hand_over(&name2);
            game.place_fleet(Seat::Second, &mut p2)
                .map_err(|e| anyhow::anyhow!(e))?;
            presenter.clear();
            println!("\nBoth boards are now set up, {} will attack first.", name1);
            presenter.hand_over(&name1);

            game.run([&mut p1 as &mut dyn CoordinateSource, &mut p2], &mut presenter)
                .map_err(|e| anyhow::anyhow!(e))?;
        }
        Commands::Auto { mode, size, seed } => {
            println!("Starting random vs random {:?} game...", mode);
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let rng1 = match seed {
                Some(s) => SmallRng::seed_from_u64(s),
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let rng2 = match seed {
                Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
                None => SmallRng::from_rng(&mut rand::rng()),
            };

            let config = GameConfig::new(size, FLEET.to_vec(), mode);
            let mut game = Game::new(&config, "Player 1", "Player 2")
                .map_err(|e| anyhow::anyhow!(e))?;
            let mut p1 = RandomPlayer::new(rng1);
            let mut p2 = RandomPlayer::new(rng2);
            game.place_fleet(Seat::First, &mut p1)
                .map_err(|e| anyhow::anyhow!(e))?;
            game.place_fleet(Seat::Second, &mut p2)
                .map_err(|e| anyhow::anyhow!(e))?;

            let mut presenter = TerminalPresenter::new(mode);
            game.run([&mut p1 as &mut dyn CoordinateSource, &mut p2], &mut presenter)
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("Game over after {} turns.", game.turns());
        }
    }
    Ok(())
}
