pub mod renderer;

use std::{
    fmt,
    io::Write,
    time::{Duration, Instant},
};

use crate::{
    config::MazeConfig,
    generators::{Generator, generate_maze},
    solvers::{Solver, solve_maze},
};

/// What one generator + solver pairing produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub generator: Generator,
    pub solver: Solver,
    pub found: bool,
    /// Number of cells on the path, start and end included
    pub path_len: usize,
    pub explored: usize,
    pub total_cells: usize,
    pub frames: usize,
    pub generation_time: Duration,
    pub solve_time: Duration,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<8} + {:<18}", self.generator.name(), self.solver.name())?;
        if self.found {
            write!(f, " path {:>5}", self.path_len)?;
        } else {
            write!(f, " no path   ")?;
        }
        write!(
            f,
            " | explored {}/{} | {} frames | generated in {:.2?}, solved in {:.2?}",
            self.explored,
            self.total_cells,
            self.frames,
            self.generation_time,
            self.solve_time
        )
    }
}

/// Generates one maze per configured generator and runs every configured solver on it.
///
/// With playback enabled the recorded frames of each search are drawn to `out` before
/// moving on to the next pairing.
pub fn run<W: Write>(config: &MazeConfig, out: &mut W) -> anyhow::Result<Vec<RunSummary>> {
    let mut summaries = Vec::with_capacity(config.generators.len() * config.solvers.len());

    for &generator in &config.generators {
        let timer = Instant::now();
        let maze = generate_maze(
            config.width,
            config.height,
            config.start,
            generator,
            config.seed,
        );
        let generation_time = timer.elapsed();
        tracing::info!(
            "Generated {}x{} maze with {} in {:.2?}",
            config.width,
            config.height,
            generator.name(),
            generation_time
        );

        let playback = config.playback && renderer::fits_terminal(&maze);
        if config.playback && !playback {
            tracing::warn!(
                "Terminal is too small to play back a {}x{} maze, skipping playback",
                config.width,
                config.height
            );
        }

        for &solver in &config.solvers {
            let timer = Instant::now();
            let result = solve_maze(&maze, config.start, config.end, solver);
            let solve_time = timer.elapsed();

            let summary = RunSummary {
                generator,
                solver,
                found: result.found,
                path_len: result.path.len(),
                explored: result.explored.iter().filter(|&&v| v).count(),
                total_cells: maze.cells().len(),
                frames: result.frames.len(),
                generation_time,
                solve_time,
            };
            if summary.found {
                tracing::info!(
                    "{} found a path of {} cells in {:.2?}, {} frames recorded",
                    solver.name(),
                    summary.path_len,
                    solve_time,
                    summary.frames
                );
            } else {
                tracing::warn!(
                    "{} found no path from {} to {}",
                    solver.name(),
                    config.start,
                    config.end
                );
            }

            if playback {
                let title = format!("{} + {}", generator.name(), solver.name());
                renderer::play(
                    out,
                    &maze,
                    &result.frames,
                    config.start,
                    config.end,
                    &title,
                    config.frame_delay,
                )?;
            }

            summaries.push(summary);
        }
    }

    Ok(summaries)
}
