use super::{dijkstra::cost_ordered_search, search::SearchResult};
use crate::maze::{Maze, Position};

/// A* with the Manhattan distance to `end` as heuristic. On a grid with unit steps the
/// heuristic never overestimates and is consistent, so the path found is a shortest one.
pub fn solve_astar(maze: &Maze, start: Position, end: Position) -> SearchResult {
    cost_ordered_search(maze, start, end, |pos| pos.manhattan_distance(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{maze::Direction, solvers::dijkstra::solve_dijkstra};

    fn open_room(width: usize, height: usize) -> Maze {
        let mut maze = Maze::new(width, height);
        for pos in maze.cells().positions().collect::<Vec<_>>() {
            maze.carve(pos, Direction::Right);
            maze.carve(pos, Direction::Down);
        }
        maze
    }

    #[test]
    fn test_astar_explores_less_than_dijkstra() {
        let maze = open_room(9, 9);
        let (start, end) = (Position::new(0, 0), Position::new(0, 8));
        let astar = solve_astar(&maze, start, end);
        let dijkstra = solve_dijkstra(&maze, start, end);
        assert_eq!(astar.path.len(), dijkstra.path.len());
        let explored = |r: &SearchResult| r.explored.iter().filter(|&&v| v).count();
        assert!(explored(&astar) < explored(&dijkstra));
    }

    #[test]
    fn test_astar_goes_straight_in_open_room() {
        let maze = open_room(6, 3);
        let result = solve_astar(&maze, Position::new(1, 0), Position::new(1, 5));
        assert!(result.found);
        assert_eq!(result.path.len(), 6);
        assert!(result.path.iter().all(|pos| pos.row == 1));
    }
}
