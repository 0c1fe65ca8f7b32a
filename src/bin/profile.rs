use std::time::{Duration, Instant};

use mazetrace::{
    generators::{Generator, generate_maze},
    maze::Position,
    solvers::{Solver, solve_maze},
};

const DEFAULT_ITERATIONS: usize = 10;
/// Every frame clones the whole state grid, so keep the side moderate
const DEFAULT_SIZE: usize = 64;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_ITERATIONS)
        .max(1);
    let size = args
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(DEFAULT_SIZE)
        .max(1);

    let start = Position::new(0, 0);
    let end = Position::new(size - 1, size - 1);
    tracing::info!(
        "Profiling {} iterations on a {}x{} maze",
        num_iters,
        size,
        size
    );

    for generator in Generator::ALL {
        for solver in Solver::ALL {
            let mut generation_time = Duration::ZERO;
            let mut solve_time = Duration::ZERO;
            let mut frames = 0;

            for seed in 0..num_iters as u64 {
                let timer = Instant::now();
                let maze = generate_maze(size, size, start, generator, Some(seed));
                generation_time += timer.elapsed();

                let timer = Instant::now();
                let result = solve_maze(&maze, start, end, solver);
                solve_time += timer.elapsed();
                frames += result.frames.len();
            }

            let n = num_iters as u32;
            tracing::info!(
                "{:<8} + {:<18} generate {:>10.2?} | solve {:>10.2?} | {:>6} frames avg",
                generator.name(),
                solver.name(),
                generation_time / n,
                solve_time / n,
                frames / num_iters
            );
        }
    }
}
