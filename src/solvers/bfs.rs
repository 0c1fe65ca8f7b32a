use std::collections::VecDeque;

use super::{
    EXPANSION_ORDER,
    search::{CellState, Search, SearchResult},
};
use crate::maze::{Maze, Position};

/// Breadth-first search. Cells are marked visited when enqueued, so each enters the
/// queue once and the first path to the goal is a shortest one in hops.
pub fn solve_bfs(maze: &Maze, start: Position, end: Position) -> SearchResult {
    let mut search = Search::new(maze, start, end);

    let mut queue = VecDeque::from([start]);
    search.visited[start] = true;
    search.states[start] = CellState::Frontier;
    search.push_frame();

    let mut found = false;
    while let Some(current) = queue.pop_front() {
        let save_frame = search.should_save_frame(current);

        search.states[current] = CellState::CurrentlyProcessing;
        if save_frame {
            search.push_frame();
        }

        if current == end {
            found = true;
            break;
        }

        for (_, next) in maze.open_neighbors(current, &EXPANSION_ORDER) {
            if !search.visited[next] {
                search.visited[next] = true;
                search.discover(next, current);
                queue.push_back(next);
            }
        }

        search.states[current] = CellState::Visited;
        if save_frame {
            search.push_frame();
        }
    }

    search.finish(found)
}
