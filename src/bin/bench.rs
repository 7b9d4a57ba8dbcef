use std::time::Instant;

use itertools::Itertools;

use checkers::ai::minimax::search;
use checkers::games::checkers::CheckersBoard;
use checkers::util::board_gen::random_board_with_moves;
use checkers::util::game_stats::perft;
use checkers::util::tiny::consistent_rng;

fn main() {
    let start = CheckersBoard::<8>::new();
    let middle = random_board_with_moves(&start, 12, &mut consistent_rng());

    for depth in 1..=4 {
        bench(&format!("search_start_d{}", depth), || {
            search(&start, depth, true);
        });
        bench(&format!("search_middle_d{}", depth), || {
            search(&middle, depth, true);
        });
    }

    bench("perft_start_d6", || {
        perft(&start, 6);
    });
}

const ITERATION_COUNT: usize = 10;
const REMOVED_OUTLIERS_PER_SIDE: usize = 1;

fn bench(name: &str, mut f: impl FnMut()) {
    assert!(ITERATION_COUNT > REMOVED_OUTLIERS_PER_SIDE * 2);
    println!("Running benchmark {}", name);

    // benchmark function
    let mut timings = vec![];

    for _ in 0..ITERATION_COUNT {
        let start = Instant::now();
        f();

        let end = Instant::now();
        timings.push(end - start);
    }

    // remove outliers
    for _ in 0..REMOVED_OUTLIERS_PER_SIDE {
        timings.remove(timings.iter().position_min().unwrap());
        timings.remove(timings.iter().position_max().unwrap());
    }

    // print results
    let timings = timings.iter().map(|d| d.as_secs_f32() * 1000.0).collect_vec();
    let mean = timings.iter().sum::<f32>() / timings.len() as f32;
    let stddev = (timings.iter().map(|&f| (f - mean).powi(2)).sum::<f32>() / timings.len() as f32).sqrt();

    println!("  {:.2}ms\t +- {:.2}ms", mean, stddev);
}
