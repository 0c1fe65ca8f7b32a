use std::{cmp::Reverse, collections::BinaryHeap};

use super::{
    EXPANSION_ORDER, FrontierNode,
    search::{CellState, Search, SearchResult},
};
use crate::maze::{Grid, Maze, Position};

/// Cost of moving between two adjacent open cells.
const STEP_COST: usize = 1;

pub fn solve_dijkstra(maze: &Maze, start: Position, end: Position) -> SearchResult {
    cost_ordered_search(maze, start, end, |_| 0)
}

/// Uniform-cost search ordered by `g + heuristic(cell)`, ties going to the lower `g`.
///
/// With a zero heuristic this is Dijkstra's algorithm; with an admissible, consistent one
/// it is A*. Either way a neighbour is only (re)queued when a strictly cheaper route to
/// it is found, and a cell is finalized the first time it is popped.
pub(super) fn cost_ordered_search<H>(
    maze: &Maze,
    start: Position,
    end: Position,
    heuristic: H,
) -> SearchResult
where
    H: Fn(Position) -> usize,
{
    let mut search = Search::new(maze, start, end);

    // Cost of the cheapest known route to each cell
    let mut costs = Grid::new(maze.width(), maze.height(), usize::MAX);
    costs[start] = 0;

    // Using Reverse to turn the max-heap into a min-heap
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

        let new_cost = costs[current] + STEP_COST;
        for (_, next) in maze.open_neighbors(current, &EXPANSION_ORDER) {
            // Only consider neighbours we can reach with a lower cost
            if search.visited[next] || new_cost >= costs[next] {
                continue;
            }
            costs[next] = new_cost;
            search.discover(next, current);
            pq.push(Reverse(FrontierNode {
                priority: new_cost + heuristic(next),
                cost: new_cost,
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
