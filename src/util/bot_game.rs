//! Utilities to run bots against each other and report the results.
use std::fmt::{Debug, Formatter};
use std::ops::AddAssign;
use std::sync::Mutex;
use std::time::Instant;

use itertools::Itertools;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::info;

use crate::ai::Bot;
use crate::board::{Board, Outcome, Player};

/// Game results counted from the point of view of one bot.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Tally {
    pub win: u32,
    pub draw: u32,
    pub loss: u32,
}

impl Tally {
    pub fn from_outcome(outcome: Outcome, pov: Player) -> Self {
        match outcome.sign::<i32>(pov) {
            1 => Tally { win: 1, ..Tally::default() },
            0 => Tally { draw: 1, ..Tally::default() },
            _ => Tally { loss: 1, ..Tally::default() },
        }
    }

    pub fn total(&self) -> u32 {
        self.win + self.draw + self.loss
    }

    /// The average score, counting a win as 1 and a draw as 0.5.
    pub fn score(&self) -> f32 {
        (self.win as f32 + 0.5 * self.draw as f32) / self.total() as f32
    }
}

impl AddAssign for Tally {
    fn add_assign(&mut self, rhs: Self) {
        self.win += rhs.win;
        self.draw += rhs.draw;
        self.loss += rhs.loss;
    }
}

/// Run `bot_l` against `bot_r` against each other on the board given by `start`.
///
/// `games_per_side` games are run, except if `both_sides` is true, in
/// which case a match consists of two games per start position where players switch sides.
///
/// Games run in parallel on the rayon thread pool, `callback` is called after each game with the running tally of `bot_l`.
/// The boards created by `start` must lead to games that end.
#[must_use]
pub fn run<B: Board, L: Bot<B>, R: Bot<B>>(
    start: impl Fn() -> B + Sync,
    bot_l: impl Fn() -> L + Sync,
    bot_r: impl Fn() -> R + Sync,
    games_per_side: u32,
    both_sides: bool,
    callback: impl Fn(Tally, &Replay<B>) + Sync,
) -> BotGameResult<B> {
    let callback = &callback;

    // this instantiates both at least once so we catch errors before starting a bunch of threads
    let debug_l = format!("{:?}", bot_l());
    let debug_r = format!("{:?}", bot_r());

    let game_count = if both_sides { 2 * games_per_side } else { games_per_side };
    let starts = (0..games_per_side).map(|_| start()).collect_vec();

    let partial_tally = Mutex::new(Tally::default());

    let replays: Vec<Replay<B>> = (0..game_count)
        .into_par_iter()
        .panic_fuse()
        .map(|game_i| {
            let flip = both_sides && game_i % 2 == 1;
            let pair_i = if both_sides { game_i / 2 } else { game_i };
            let start = &starts[pair_i as usize];

            let replay = play_single_game(game_i, start, flip, &mut bot_l(), &mut bot_r());
            info!(
                game = game_i,
                outcome = ?replay.outcome,
                moves = replay.moves.len(),
                "finished game"
            );

            let mut partial_tally = partial_tally.lock().unwrap();
            *partial_tally += Tally::from_outcome(replay.outcome, replay.player_l);
            callback(*partial_tally, &replay);

            replay
        })
        .collect();

    let mut tally_l = Tally::default();
    for replay in &replays {
        tally_l += Tally::from_outcome(replay.outcome, replay.player_l);
    }

    let total_time_l = replays.iter().map(|r| r.total_time_l).sum::<f32>();
    let total_time_r = replays.iter().map(|r| r.total_time_r).sum::<f32>();
    let move_count_l = replays.iter().map(|r| r.move_count_l).sum::<u32>();
    let move_count_r = replays.iter().map(|r| r.move_count_r).sum::<u32>();

    BotGameResult {
        game_count,
        average_game_length: replays.iter().map(|r| r.moves.len() as f32).sum::<f32>() / game_count as f32,
        tally_l,
        time_l: total_time_l / move_count_l as f32,
        time_r: total_time_r / move_count_r as f32,
        debug_l,
        debug_r,
        replays,
    }
}

fn play_single_game<B: Board>(
    game_index: u32,
    start: &B,
    flip: bool,
    bot_l: &mut impl Bot<B>,
    bot_r: &mut impl Bot<B>,
) -> Replay<B> {
    let mut board = start.clone();
    let player_l = if flip {
        board.next_player().other()
    } else {
        board.next_player()
    };

    let mut total_time_l = 0.0;
    let mut total_time_r = 0.0;
    let mut move_count_l: u32 = 0;
    let mut move_count_r: u32 = 0;
    let mut moves = vec![];

    loop {
        match board.outcome() {
            None => {
                let start_time = Instant::now();
                let mv = if board.next_player() == player_l {
                    let mv = bot_l.select_move(&board).unwrap();
                    total_time_l += start_time.elapsed().as_secs_f32();
                    move_count_l += 1;
                    mv
                } else {
                    let mv = bot_r.select_move(&board).unwrap();
                    total_time_r += start_time.elapsed().as_secs_f32();
                    move_count_r += 1;
                    mv
                };

                moves.push(mv);
                board.play(mv).unwrap();
            }
            Some(outcome) => {
                return Replay {
                    game_index,
                    start: start.clone(),
                    player_l,
                    moves,
                    outcome,
                    total_time_l,
                    total_time_r,
                    move_count_l,
                    move_count_r,
                };
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Replay<B: Board> {
    pub game_index: u32,
    pub start: B,
    pub player_l: Player,

    pub moves: Vec<B::Move>,
    pub outcome: Outcome,

    pub total_time_l: f32,
    pub total_time_r: f32,
    pub move_count_l: u32,
    pub move_count_r: u32,
}

/// Structure returned by the function [`run`].
pub struct BotGameResult<B: Board> {
    pub game_count: u32,
    pub replays: Vec<Replay<B>>,

    pub average_game_length: f32,
    pub tally_l: Tally,

    //time per move in seconds
    pub time_l: f32,
    pub time_r: f32,

    pub debug_l: String,
    pub debug_r: String,
}

impl<B: Board> Debug for BotGameResult<B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BotGameResult {{")?;
        writeln!(
            f,
            "  {} games, average length {}",
            self.game_count, self.average_game_length
        )?;
        writeln!(f, "  left      {:?}", self.tally_l)?;
        writeln!(f, "  left score: {:.3}", self.tally_l.score())?;
        writeln!(f, "  time_l:   {:.4}, time_r: {:.4}", self.time_l, self.time_r)?;
        writeln!(f, "  left:     {}", self.debug_l)?;
        writeln!(f, "  right:    {}", self.debug_r)?;
        writeln!(f, "}}")?;

        Ok(())
    }
}
