//! Command-line options and the validated run configuration built from them.

use std::{path::PathBuf, time::Duration};

use anyhow::bail;
use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{generators::Generator, maze::Position, solvers::Solver};

/// Generate perfect mazes and watch search algorithms solve them
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub run: RunArgs,

    /// Maximum level of log events to emit
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate and solve mazes (the default when no subcommand is given)
    Run(RunArgs),
    /// List the maze generation algorithms
    Generators,
    /// List the search algorithms
    Solvers,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Maze width in cells
    #[arg(long, default_value_t = 10)]
    pub width: usize,

    /// Maze height in cells
    #[arg(long, default_value_t = 10)]
    pub height: usize,

    /// Start cell as ROW,COL
    #[arg(long, value_parser = parse_position, default_value = "0,0")]
    pub start: Position,

    /// End cell as ROW,COL [default: bottom-right cell]
    #[arg(long, value_parser = parse_position)]
    pub end: Option<Position>,

    /// Comma-separated generation algorithms to run
    #[arg(long, value_delimiter = ',', default_value = "DFS")]
    pub generators: Vec<String>,

    /// Comma-separated search algorithms to run on every generated maze
    #[arg(long, value_delimiter = ',', default_value = "BFS")]
    pub solvers: Vec<String>,

    /// Random seed for reproducible mazes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Replay the recorded search frames in the terminal
    #[arg(short, long)]
    pub playback: bool,

    /// Playback frame length in milliseconds
    #[arg(long, default_value_t = 30)]
    pub frame_ms: u64,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Parses `ROW,COL` into a [`Position`].
pub fn parse_position(s: &str) -> Result<Position, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{s}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<usize>()
            .map_err(|e| format!("invalid coordinate '{}': {}", part.trim(), e))
    };
    Ok(Position::new(parse(row)?, parse(col)?))
}

/// Everything a run needs, checked against the maze dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeConfig {
    pub width: usize,
    pub height: usize,
    pub start: Position,
    pub end: Position,
    pub generators: Vec<Generator>,
    pub solvers: Vec<Solver>,
    pub seed: Option<u64>,
    pub playback: bool,
    pub frame_delay: Duration,
}

impl MazeConfig {
    pub fn from_args(args: &RunArgs) -> anyhow::Result<Self> {
        let (width, height) = (args.width, args.height);
        if width == 0 || height == 0 {
            bail!("maze dimensions must be positive, got {}x{}", width, height);
        }

        let in_bounds = |pos: Position| pos.row < height && pos.col < width;
        let bottom_right = Position::new(height - 1, width - 1);

        let start = args.start;
        if !in_bounds(start) {
            bail!(
                "start {} is out of bounds for a {}x{} maze",
                start,
                width,
                height
            );
        }

        let end = match args.end {
            Some(end) if in_bounds(end) => end,
            Some(end) => {
                tracing::warn!(
                    "End {} is out of bounds for a {}x{} maze, using {}",
                    end,
                    width,
                    height,
                    bottom_right
                );
                bottom_right
            }
            None => bottom_right,
        };

        if start == end && width * height > 1 {
            tracing::warn!("Start and end are both {}, the path will be trivial", start);
        }

        Ok(MazeConfig {
            width,
            height,
            start,
            end,
            generators: parse_algorithms(
                &args.generators,
                "GenerationAlgorithms",
                Generator::from_name_or_default,
            ),
            solvers: parse_algorithms(
                &args.solvers,
                "SearchAlgorithms",
                Solver::from_name_or_default,
            ),
            seed: args.seed,
            playback: args.playback,
            frame_delay: Duration::from_millis(args.frame_ms),
        })
    }
}

/// Resolves every name in `names` through `resolve`, which maps unknown names to the
/// default algorithm and logs the fallback. Blank entries and repeats are dropped; an
/// empty list yields the default alone.
fn parse_algorithms<T>(names: &[String], label: &str, resolve: fn(&str) -> T) -> Vec<T>
where
    T: Default + PartialEq,
{
    let mut algorithms = Vec::new();
    for name in names.iter().map(|n| n.trim()).filter(|n| !n.is_empty()) {
        let algorithm = resolve(name);
        if algorithms.contains(&algorithm) {
            tracing::debug!("{}: '{}' resolves to an algorithm already listed", label, name);
        } else {
            algorithms.push(algorithm);
        }
    }
    if algorithms.is_empty() {
        tracing::info!("{}: nothing specified, using the default", label);
        algorithms.push(T::default());
    }
    algorithms
}
