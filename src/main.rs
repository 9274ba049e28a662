use seabattle::{
    init_logging,
    ui::{describe_move, print_boards, print_welcome},
    CliTarget, Game, GameConfig, GameStatus, RandomTarget, Side, TargetSource, BOARD_SIZE,
};

use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer in this terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE, help = "Board side length")]
        size: usize,
    },
    /// Watch two computer players fight it out.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = BOARD_SIZE, help = "Board side length")]
        size: usize,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    if let Some(s) = seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(LevelFilter::Warn);

    let command = cli.command.unwrap_or(Commands::Play {
        seed: None,
        size: BOARD_SIZE,
    });
    match command {
        Commands::Play { seed, size } => {
            let mut rng = make_rng(seed);
            let config = GameConfig::with_size(size);
            config.validate()?;
            let mut game = Game::from_config(&mut rng, &config)?;
            let mut human = CliTarget::stdin();
            let mut computer = RandomTarget::new(SmallRng::from_rng(&mut rng));
            print_welcome();
            run(
                &mut game,
                &mut human,
                &mut computer,
                |side| match side {
                    Side::A => "Player",
                    Side::B => "Computer",
                },
            )
        }
        Commands::Auto { seed, size } => {
            let mut rng = make_rng(seed);
            let config = GameConfig::with_size(size);
            config.validate()?;
            let mut game = Game::from_config(&mut rng, &config)?;
            let mut first = RandomTarget::new(SmallRng::from_rng(&mut rng));
            let mut second = RandomTarget::new(SmallRng::from_rng(&mut rng));
            run(&mut game, &mut first, &mut second, |side| match side {
                Side::A => "Computer A",
                Side::B => "Computer B",
            })
        }
    }
}

/// Alternate moves until one fleet is gone or side A runs out of input.
fn run<'a>(
    game: &mut Game,
    side_a: &mut (dyn TargetSource + 'a),
    side_b: &mut (dyn TargetSource + 'a),
    name: fn(Side) -> &'static str,
) -> anyhow::Result<()> {
    loop {
        print_boards(
            &format!("{} board:", name(Side::A)),
            &game.board(Side::A).view(),
            &format!("{} board:", name(Side::B)),
            &game.board(Side::B).view(),
        );
        let active = game.active();
        println!("{} to move", name(active));
        let source = match active {
            Side::A => &mut *side_a,
            Side::B => &mut *side_b,
        };
        let Some(report) = game.take_move(source)? else {
            println!("No more input, leaving the game.");
            return Ok(());
        };
        println!("{}", describe_move(&report, name));

        if let GameStatus::Won(winner) = game.status() {
            print_boards(
                &format!("{} board:", name(Side::A)),
                &game.board(Side::A).view(),
                &format!("{} board:", name(Side::B)),
                &game.board(Side::B).view(),
            );
            println!("{} wins!", name(winner));
            return Ok(());
        }
    }
}
