use std::{cmp::Reverse, collections::BinaryHeap};

use super::{
    EXPANSION_ORDER, FrontierNode,
    search::{CellState, Search, SearchResult},
};
use crate::maze::{Maze, Position};

/// Greedy best-first search: always expands the frontier cell closest to `end` by
/// Manhattan distance, ignoring the cost already travelled. A cell's parent is fixed the
/// first time it is discovered. Fast, but the path is not guaranteed to be shortest.
pub fn solve_greedy(maze: &Maze, start: Position, end: Position) -> SearchResult {
    let mut search = Search::new(maze, start, end);
    let heuristic = |pos: Position| pos.manhattan_distance(end);

    let mut pq: BinaryHeap<Reverse<FrontierNode>> = BinaryHeap::new();
    pq.push(Reverse(FrontierNode {
        priority: heuristic(start),
        cost: 0,
        pos: start,
    }));
    search.states[start] = CellState::Frontier;
    search.push_frame();

    let mut found = false;
    while let Some(Reverse(node)) = pq.pop() {
        let current = node.pos;
        if search.visited[current] {
            continue;
        }

        let save_frame = search.should_save_frame(current);

        search.visited[current] = true;
        search.states[current] = CellState::CurrentlyProcessing;
        if save_frame {
            search.push_frame();
        }

        if current == end {
            found = true;
            break;
        }

        for (_, next) in maze.open_neighbors(current, &EXPANSION_ORDER) {
            if search.visited[next] {
                continue;
            }
            if search.parents[next].is_none() {
                search.parents[next] = Some(current);
            }
            search.states[next] = CellState::Frontier;
            pq.push(Reverse(FrontierNode {
                priority: heuristic(next),
                cost: 0,
                pos: next,
            }));
        }

        search.states[current] = CellState::Visited;
        if save_frame {
            search.push_frame();
        }
    }

    search.finish(found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;

    #[test]
    fn test_greedy_on_a_ring() {
        // Ring around a walled-off centre cell; both ways round are 4 steps
        let mut maze = Maze::new(3, 3);
        let p = Position::new;
        maze.carve(p(0, 0), Direction::Right);
        maze.carve(p(0, 1), Direction::Right);
        maze.carve(p(0, 2), Direction::Down);
        maze.carve(p(1, 2), Direction::Down);
        maze.carve(p(0, 0), Direction::Down);
        maze.carve(p(1, 0), Direction::Down);
        maze.carve(p(2, 0), Direction::Right);
        maze.carve(p(2, 1), Direction::Right);

        let result = solve_greedy(&maze, p(0, 0), p(2, 2));
        assert!(result.found);
        assert_eq!(result.path.len(), 5);
        // Equal heuristics tie-break on position, so the top row is tried first
        assert_eq!(result.path[1], p(0, 1));
        assert!(!result.explored[p(1, 1)]);
    }

    #[test]
    fn test_greedy_parent_is_first_discovery() {
        // 2x2 loop: the goal at (1,1) is first discovered from (0,1)
        let mut maze = Maze::new(2, 2);
        let p = Position::new;
        maze.carve(p(0, 0), Direction::Right);
        maze.carve(p(0, 0), Direction::Down);
        maze.carve(p(0, 1), Direction::Down);
        maze.carve(p(1, 0), Direction::Right);

        let result = solve_greedy(&maze, p(0, 0), p(1, 1));
        assert!(result.found);
        assert_eq!(result.path, vec![p(0, 0), p(0, 1), p(1, 1)]);
    }
}
