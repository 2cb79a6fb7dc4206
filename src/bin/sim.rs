use broadside::{
    CoordinateSource, Game, GameConfig, GameMode, RandomPlayer, Seat, SilentPresenter,
};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    broadside::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        eprintln!("Usage: {} <seed1> <seed2> [classic|salvo]", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let mode = match args.get(3).map(String::as_str) {
        None | Some("classic") => GameMode::Classic,
        Some("salvo") => GameMode::Salvo,
        Some(other) => anyhow::bail!("unknown mode '{}'", other),
    };

    let mut p1 = RandomPlayer::seeded(seed1);
    let mut p2 = RandomPlayer::seeded(seed2);
    let config = GameConfig {
        mode,
        ..GameConfig::default()
    };
    let mut game = Game::new(&config, "player1", "player2").map_err(|e| anyhow::anyhow!(e))?;
    game.place_fleet(Seat::First, &mut p1)
        .map_err(|e| anyhow::anyhow!(e))?;
    game.place_fleet(Seat::Second, &mut p2)
        .map_err(|e| anyhow::anyhow!(e))?;

    let winner = game
        .run([&mut p1 as &mut dyn CoordinateSource, &mut p2], &mut SilentPresenter)
        .map_err(|e| anyhow::anyhow!(e))?;

    let result = json!({
        "mode": mode,
        "player1": {"ships_remaining": game.board(Seat::First).ships_remaining()},
        "player2": {"ships_remaining": game.board(Seat::Second).ships_remaining()},
        "turns": game.turns(),
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
