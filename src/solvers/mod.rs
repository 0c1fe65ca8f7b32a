use std::{cmp::Ordering, fmt, str::FromStr};

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod greedy;
mod search;

use astar::solve_astar;
use bfs::solve_bfs;
use dfs::solve_dfs;
use dijkstra::solve_dijkstra;
use greedy::solve_greedy;
pub use search::{CellState, Frame, SearchResult, is_straight_line};

use crate::{
    maze::{Direction, Maze, Position},
    names::{self, AlgorithmKind, ParseAlgorithmError},
};

/// Neighbour expansion order for the queue and heap based searches.
const EXPANSION_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Entry in a priority frontier.
///
/// Ordered by `priority`, then by `cost`, then by position so that equal keys still pop
/// in a fixed order. Wrapped in `Reverse` to turn `BinaryHeap` into a min-heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierNode {
    /// Key the frontier is ordered by (g, g + h or h)
    priority: usize,
    /// Cost to reach this cell from the start, the tie-breaker
    cost: usize,
    pos: Position,
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then(self.cost.cmp(&other.cost))
            .then(self.pos.cmp(&other.pos))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    #[default]
    Bfs,
    Dfs,
    AStar,
    Dijkstra,
    GreedyBestFirst,
}

impl Solver {
    pub const ALL: [Solver; 5] = [
        Solver::Bfs,
        Solver::Dfs,
        Solver::AStar,
        Solver::Dijkstra,
        Solver::GreedyBestFirst,
    ];

    /// Short identifier used on the command line and in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Solver::Bfs => "BFS",
            Solver::Dfs => "DFS",
            Solver::AStar => "AStar",
            Solver::Dijkstra => "Dijkstra",
            Solver::GreedyBestFirst => "Greedy Best-First",
        }
    }

    /// Whether the returned path is guaranteed to be a shortest one.
    pub fn is_optimal(&self) -> bool {
        matches!(self, Solver::Bfs | Solver::AStar | Solver::Dijkstra)
    }

    /// Looks `name` up, falling back to the default solver when it is not recognized.
    pub fn from_name_or_default(name: &str) -> Solver {
        name.parse().unwrap_or_else(|err: ParseAlgorithmError| {
            let fallback = Solver::default();
            tracing::warn!("{}, falling back to {}", err, fallback.name());
            fallback
        })
    }
}

impl fmt::Display for Solver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::AStar => write!(f, "A* Search"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::GreedyBestFirst => write!(f, "Greedy Best-First Search"),
        }
    }
}

impl FromStr for Solver {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match names::normalize(s).as_str() {
            "BFS" | "BREADTHFIRST" => Ok(Solver::Bfs),
            "DFS" | "DEPTHFIRST" => Ok(Solver::Dfs),
            "ASTAR" | "A*" => Ok(Solver::AStar),
            "DIJKSTRA" => Ok(Solver::Dijkstra),
            "GREEDYBESTFIRST" | "GREEDY" | "BESTFIRST" => Ok(Solver::GreedyBestFirst),
            _ => Err(ParseAlgorithmError {
                kind: AlgorithmKind::Search,
                name: s.to_string(),
            }),
        }
    }
}

/// Searches `maze` from `start` to `end`, recording frames along the way.
///
/// An empty maze or an out-of-bounds endpoint yields [`SearchResult::default`]. When
/// `start == end` the result holds a single frame with that cell on the solution.
/// Not finding a path is a normal outcome, reported through [`SearchResult::found`].
pub fn solve_maze(maze: &Maze, start: Position, end: Position, solver: Solver) -> SearchResult {
    if maze.is_empty() {
        tracing::debug!("{}: empty maze, nothing to solve", solver.name());
        return SearchResult::default();
    }
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(end) {
        tracing::debug!(
            "{}: start {} or end {} outside the {}x{} maze",
            solver.name(),
            start,
            end,
            maze.width(),
            maze.height()
        );
        return SearchResult::default();
    }
    if start == end {
        return SearchResult::trivial(maze, start);
    }

    let result = match solver {
        Solver::Bfs => solve_bfs(maze, start, end),
        Solver::Dfs => solve_dfs(maze, start, end),
        Solver::AStar => solve_astar(maze, start, end),
        Solver::Dijkstra => solve_dijkstra(maze, start, end),
        Solver::GreedyBestFirst => solve_greedy(maze, start, end),
    };
    tracing::debug!(
        "{}: found={} path_len={} frames={}",
        solver.name(),
        result.found,
        result.path.len(),
        result.frames.len()
    );
    result
}
