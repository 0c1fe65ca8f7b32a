//! State shared by every search algorithm: per-cell visual states, the parent map,
//! frame capture and path reconstruction.

use crate::maze::{Grid, Maze, Position};

/// Visual state of one cell in one frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    None,
    Start,
    End,
    /// Discovered, waiting on the frontier
    Frontier,
    CurrentlyProcessing,
    /// Finalized by the search
    Visited,
    /// On the reconstructed path
    Solution,
}

/// Snapshot of the search at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub states: Grid<CellState>,
    /// The solution path; only the final frame of a successful search carries one.
    pub path: Vec<Position>,
}

/// Outcome of one solve call.
///
/// The default value is the empty result returned for invalid input: not found, no
/// path, an empty explored grid and no frames.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub found: bool,
    /// Cells from start to end, inclusive. Empty when not found.
    pub path: Vec<Position>,
    /// Every cell the search marked visited.
    pub explored: Grid<bool>,
    pub frames: Vec<Frame>,
}

impl SearchResult {
    /// Result for a search whose start is already the goal.
    pub(super) fn trivial(maze: &Maze, node: Position) -> Self {
        let mut states = Grid::new(maze.width(), maze.height(), CellState::None);
        let mut explored = Grid::new(maze.width(), maze.height(), false);
        states[node] = CellState::Solution;
        explored[node] = true;
        let path = vec![node];
        SearchResult {
            found: true,
            frames: vec![Frame {
                states,
                path: path.clone(),
            }],
            path,
            explored,
        }
    }
}

/// Whether `first -> second -> third` continues in the same direction with equal steps.
pub fn is_straight_line(first: Position, second: Position, third: Position) -> bool {
    let step = |from: Position, to: Position| {
        (
            to.row as isize - from.row as isize,
            to.col as isize - from.col as isize,
        )
    };
    step(first, second) == step(second, third)
}

/// Working state of a search in progress.
pub(super) struct Search {
    pub start: Position,
    pub end: Position,
    pub states: Grid<CellState>,
    pub visited: Grid<bool>,
    pub parents: Grid<Option<Position>>,
    frames: Vec<Frame>,
}

impl Search {
    /// Both `start` and `end` must be inside `maze`.
    pub fn new(maze: &Maze, start: Position, end: Position) -> Self {
        debug_assert!(maze.is_in_bounds(start) && maze.is_in_bounds(end));
        let (width, height) = (maze.width(), maze.height());
        Search {
            start,
            end,
            states: Grid::new(width, height, CellState::None),
            visited: Grid::new(width, height, false),
            parents: Grid::new(width, height, None),
            frames: Vec::new(),
        }
    }

    pub fn push_frame(&mut self) {
        self.frames.push(Frame {
            states: self.states.clone(),
            path: Vec::new(),
        });
    }

    /// Records `from` as the parent of `to` and puts `to` on the frontier.
    pub fn discover(&mut self, to: Position, from: Position) {
        self.parents[to] = Some(from);
        self.states[to] = CellState::Frontier;
    }

    /// True when the grandparent, parent and `current` do not form a straight run.
    fn breaks_straight_line(&self, current: Position) -> bool {
        let Some(parent) = self.parents[current] else {
            return true;
        };
        let Some(grandparent) = self.parents[parent] else {
            return true;
        };
        !is_straight_line(grandparent, parent, current)
    }

    /// Frames along straight corridors are dropped; turns and the goal are always kept.
    pub fn should_save_frame(&self, current: Position) -> bool {
        current == self.end || self.breaks_straight_line(current)
    }

    pub fn should_save_backtrack_frame(&self, current: Position) -> bool {
        current == self.start || self.should_save_frame(current)
    }

    /// Follows parents back from `end`. The walk is bounded by the cell count, so a
    /// corrupt parent map cannot loop forever.
    fn reconstruct_path(&self) -> Vec<Position> {
        let mut path = Vec::new();
        let mut node = Some(self.end);
        while let Some(pos) = node {
            path.push(pos);
            if pos == self.start || path.len() >= self.parents.len() {
                break;
            }
            node = self.parents[pos];
        }
        path.reverse();
        path
    }

    /// Pushes the final frame and packs everything into a [`SearchResult`].
    pub fn finish(mut self, found: bool) -> SearchResult {
        let path = if found {
            let path = self.reconstruct_path();
            for &pos in &path {
                self.states[pos] = CellState::Solution;
            }
            path
        } else {
            Vec::new()
        };
        self.frames.push(Frame {
            states: self.states,
            path: path.clone(),
        });
        SearchResult {
            found,
            path,
            explored: self.visited,
            frames: self.frames,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_straight_lines() {
        assert!(is_straight_line(p(0, 0), p(0, 1), p(0, 2)));
        assert!(is_straight_line(p(3, 1), p(2, 1), p(1, 1)));
        assert!(is_straight_line(p(1, 2), p(1, 1), p(1, 0)));
    }

    #[test]
    fn test_turns_and_reversals_are_not_straight() {
        assert!(!is_straight_line(p(0, 0), p(0, 1), p(1, 1)));
        assert!(!is_straight_line(p(1, 1), p(0, 1), p(0, 0)));
        assert!(!is_straight_line(p(0, 0), p(0, 1), p(0, 0)));
        // Equal direction but uneven steps
        assert!(!is_straight_line(p(0, 0), p(0, 1), p(0, 3)));
    }

    #[test]
    fn test_frame_thinning_follows_parents() {
        let maze = Maze::new(4, 4);
        let mut search = Search::new(&maze, p(0, 0), p(3, 3));
        search.discover(p(0, 1), p(0, 0));
        search.discover(p(0, 2), p(0, 1));
        search.discover(p(1, 2), p(0, 2));

        // No parent or no grandparent: always saved
        assert!(search.should_save_frame(p(0, 0)));
        assert!(search.should_save_frame(p(0, 1)));
        // Straight run along row 0
        assert!(!search.should_save_frame(p(0, 2)));
        // Turn downwards
        assert!(search.should_save_frame(p(1, 2)));
    }

    #[test]
    fn test_goal_frame_is_always_saved() {
        let maze = Maze::new(3, 1);
        let mut search = Search::new(&maze, p(0, 0), p(0, 2));
        search.discover(p(0, 1), p(0, 0));
        search.discover(p(0, 2), p(0, 1));
        assert!(search.should_save_frame(p(0, 2)));
    }

    #[test]
    fn test_backtrack_frame_keeps_start() {
        let maze = Maze::new(3, 1);
        let search = Search::new(&maze, p(0, 1), p(0, 2));
        assert!(search.should_save_backtrack_frame(p(0, 1)));
    }

    #[test]
    fn test_finish_marks_solution() {
        let maze = Maze::new(3, 1);
        let mut search = Search::new(&maze, p(0, 0), p(0, 2));
        search.discover(p(0, 1), p(0, 0));
        search.discover(p(0, 2), p(0, 1));
        let result = search.finish(true);
        assert!(result.found);
        assert_eq!(result.path, vec![p(0, 0), p(0, 1), p(0, 2)]);
        let last = result.frames.last().unwrap();
        assert_eq!(last.path, result.path);
        assert!(last.states.iter().all(|&s| s == CellState::Solution));
    }

    #[test]
    fn test_finish_without_path() {
        let maze = Maze::new(2, 1);
        let search = Search::new(&maze, p(0, 0), p(0, 1));
        let result = search.finish(false);
        assert!(!result.found);
        assert!(result.path.is_empty());
        assert_eq!(result.frames.len(), 1);
        assert!(result.frames[0].path.is_empty());
    }

    #[test]
    fn test_trivial_result() {
        let maze = Maze::new(1, 1);
        let result = SearchResult::trivial(&maze, p(0, 0));
        assert!(result.found);
        assert_eq!(result.path, vec![p(0, 0)]);
        assert_eq!(result.frames.len(), 1);
        assert_eq!(result.frames[0].states[p(0, 0)], CellState::Solution);
        assert!(result.explored[p(0, 0)]);
    }
}
