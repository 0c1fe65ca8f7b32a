use std::{fmt, str::FromStr};

use rand::{SeedableRng, rngs::StdRng};

mod dfs;
mod kruskal;
mod prim;

use dfs::randomized_dfs;
use kruskal::randomized_kruskal;
use prim::randomized_prim;

use crate::{
    maze::{Maze, Position},
    names::{self, AlgorithmKind, ParseAlgorithmError},
};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Maze generation algorithms. Every one of them produces a spanning tree over the cells.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    /// Randomized depth-first search, a.k.a. recursive backtracker
    #[default]
    Dfs,
    Prim,
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 3] = [Generator::Dfs, Generator::Prim, Generator::Kruskal];

    /// Short identifier used on the command line and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Generator::Dfs => "DFS",
            Generator::Prim => "Prims",
            Generator::Kruskal => "Kruskal",
        }
    }

    /// Whether the algorithm grows the maze outward from a start cell.
    pub fn uses_start(&self) -> bool {
        matches!(self, Generator::Dfs | Generator::Prim)
    }

    /// Looks `name` up, falling back to the default generator when it is not recognized.
    pub fn from_name_or_default(name: &str) -> Generator {
        name.parse().unwrap_or_else(|err: ParseAlgorithmError| {
            let fallback = Generator::default();
            tracing::warn!("{}, falling back to {}", err, fallback.name());
            fallback
        })
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Dfs => write!(f, "Randomized Depth-First Search (DFS)"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

impl FromStr for Generator {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match names::normalize(s).as_str() {
            "DFS" | "BACKTRACKER" | "RECURSIVEBACKTRACKER" => Ok(Generator::Dfs),
            "PRIM" | "PRIMS" | "PRIM'S" => Ok(Generator::Prim),
            "KRUSKAL" | "KRUSKALS" | "KRUSKAL'S" => Ok(Generator::Kruskal),
            _ => Err(ParseAlgorithmError {
                kind: AlgorithmKind::Generation,
                name: s.to_string(),
            }),
        }
    }
}

/// Generates a fresh `width` x `height` maze.
///
/// See [`generate_maze_into`] for how `start` and `seed` are used.
pub fn generate_maze(
    width: usize,
    height: usize,
    start: Position,
    generator: Generator,
    seed: Option<u64>,
) -> Maze {
    let mut maze = Maze::new(width, height);
    generate_maze_into(&mut maze, start, generator, seed);
    maze
}

/// Carves a perfect maze into `maze`, discarding whatever walls it had before.
///
/// `start` is the seed cell for [`Generator::Dfs`] and [`Generator::Prim`]; an out-of-bounds
/// start is clamped to (0, 0). [`Generator::Kruskal`] ignores it. The same `seed` always
/// produces the same maze for a given generator and size; `None` draws from OS entropy.
pub fn generate_maze_into(
    maze: &mut Maze,
    start: Position,
    generator: Generator,
    seed: Option<u64>,
) {
    if maze.is_empty() {
        return;
    }

    let start = if generator.uses_start() && !maze.is_in_bounds(start) {
        tracing::warn!(
            "Generation start {} is out of bounds for a {}x{} maze, using (0,0)",
            start,
            maze.width(),
            maze.height()
        );
        Position::new(0, 0)
    } else {
        start
    };

    tracing::debug!(
        "Generating {}x{} maze with {} from {}",
        maze.width(),
        maze.height(),
        generator.name(),
        start
    );

    let mut rng = get_rng(seed);
    match generator {
        Generator::Dfs => randomized_dfs(maze, start, &mut rng),
        Generator::Prim => randomized_prim(maze, start, &mut rng),
        Generator::Kruskal => randomized_kruskal(maze, &mut rng),
    }
}
