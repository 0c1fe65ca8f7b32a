use super::search::{CellState, Search, SearchResult};
use crate::maze::{Direction, Maze, Position};

/// Depth-first search on an explicit stack.
///
/// A cell counts as visited when it is first processed, not when pushed. The cell on top
/// pushes one unvisited open neighbour at a time; once it has none left it is popped and
/// finalized. The path found is not necessarily the shortest.
pub fn solve_dfs(maze: &Maze, start: Position, end: Position) -> SearchResult {
    let mut search = Search::new(maze, start, end);

    let mut stack = vec![start];
    search.states[start] = CellState::Frontier;
    search.push_frame();

    let mut found = false;
    while let Some(&current) = stack.last() {
        if search.states[current] == CellState::Visited {
            // Stale entry for a cell that was already finalized
            stack.pop();
            continue;
        }

        if !search.visited[current] {
            search.visited[current] = true;
            search.states[current] = CellState::CurrentlyProcessing;
            if search.should_save_frame(current) {
                search.push_frame();
            }
        }

        if current == end {
            found = true;
            break;
        }

        let next = maze
            .open_neighbors(current, &Direction::ALL)
            .map(|(_, next)| next)
            .find(|&next| !search.visited[next]);

        match next {
            Some(next) => {
                search.discover(next, current);
                stack.push(next);
            }
            None => {
                // Dead end or fully explored, backtrack
                stack.pop();
                search.states[current] = CellState::Visited;
                if search.should_save_backtrack_frame(current) {
                    search.push_frame();
                }
            }
        }
    }

    search.finish(found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dfs_follows_first_open_direction() {
        // 2x2 loop: (0,0) -> (0,1) -> (1,1) and (0,0) -> (1,0) -> (1,1)
        let mut maze = Maze::new(2, 2);
        maze.carve(Position::new(0, 0), Direction::Right);
        maze.carve(Position::new(0, 0), Direction::Down);
        maze.carve(Position::new(0, 1), Direction::Down);
        maze.carve(Position::new(1, 0), Direction::Right);

        let result = solve_dfs(&maze, Position::new(0, 0), Position::new(1, 0));
        assert!(result.found);
        // Right is tried before Down, so the long way round is taken
        assert_eq!(
            result.path,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 1),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_dfs_backtracks_out_of_dead_ends() {
        // T shape: junction at (0,1), dead end below it, goal to its left
        let mut maze = Maze::new(3, 2);
        maze.carve(Position::new(0, 1), Direction::Left);
        maze.carve(Position::new(0, 1), Direction::Right);
        maze.carve(Position::new(0, 1), Direction::Down);

        let result = solve_dfs(&maze, Position::new(0, 2), Position::new(0, 0));
        assert!(result.found);
        assert_eq!(
            result.path,
            vec![
                Position::new(0, 2),
                Position::new(0, 1),
                Position::new(0, 0),
            ]
        );
        // Down is tried before Left, so the dead end was explored and finalized
        let last = result.frames.last().unwrap();
        assert_eq!(last.states[Position::new(1, 1)], CellState::Visited);
    }
}
