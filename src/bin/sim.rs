use seabattle::{random_board, Game, GameConfig, GameStatus, RandomTarget, Side};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let config = GameConfig::default();
    let board_a = random_board(&mut rng1, &config)?;
    let board_b = random_board(&mut rng2, &config)?;
    let mut game = Game::new(board_a, board_b, config.fleet_size());

    let mut p1 = RandomTarget::new(rng1);
    let mut p2 = RandomTarget::new(rng2);

    while game.status() == GameStatus::InProgress {
        let mover = match game.active() {
            Side::A => &mut p1,
            Side::B => &mut p2,
        };
        if game.take_move(mover)?.is_none() {
            break;
        }
    }

    let winner = match game.status() {
        GameStatus::Won(side) => Some(side),
        GameStatus::InProgress => None,
    };

    let result = json!({
        "winner": winner,
        "shots": {
            "A": game.shots(Side::A),
            "B": game.shots(Side::B),
        },
        "sunk": {
            "A": game.board(Side::A).sunk_count(),
            "B": game.board(Side::B).sunk_count(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
