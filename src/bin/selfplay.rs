use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use checkers::ai::minimax::MiniMaxBot;
use checkers::ai::simple::RandomBot;
use checkers::games::checkers::CheckersBoard;
use checkers::games::max_length::MaxMovesBoard;
use checkers::util::bot_game;
use checkers::util::tiny::seeded_rng;

/// Play the minimax bot against a random mover and report the results.
#[derive(Debug, Parser)]
struct Args {
    /// Search depth of the minimax bot in plies.
    #[arg(long, default_value_t = 4)]
    depth: u32,

    /// Number of start positions, each is played twice with switched sides.
    #[arg(long, default_value_t = 4)]
    games: u32,

    /// Games are drawn after this many moves.
    #[arg(long, default_value_t = 200)]
    max_moves: u64,

    /// Seed for the random bot, entropy is used if missing.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    assert!(args.depth > 0, "depth must be at least 1");

    let result = bot_game::run(
        || MaxMovesBoard::new(CheckersBoard::<8>::new(), args.max_moves),
        || MiniMaxBot::new(args.depth),
        || match args.seed {
            Some(seed) => RandomBot::new(SmallRng::from_rng(seeded_rng(seed)).unwrap()),
            None => RandomBot::new(SmallRng::from_entropy()),
        },
        args.games,
        true,
        |tally, replay| {
            println!(
                "game {}: {:?} after {} moves, minimax {:?}",
                replay.game_index,
                replay.outcome,
                replay.moves.len(),
                tally
            )
        },
    );

    println!("{:?}", result);
}
