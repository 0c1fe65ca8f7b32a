use rand::{Rng, rngs::StdRng};

use crate::maze::{Direction, Grid, Maze, Position};

/// A wall between a cell already in the maze and one of its neighbours.
#[derive(Debug, Clone, Copy)]
struct FrontierEdge {
    from: Position,
    direction: Direction,
}

/// Push the edges from `cell` to each of its in-bounds, unvisited neighbours.
fn push_frontier_edges(
    maze: &Maze,
    cell: Position,
    visited: &Grid<bool>,
    frontier: &mut Vec<FrontierEdge>,
) {
    for direction in Direction::ALL {
        if let Some(next) = maze.neighbor(cell, direction) {
            if !visited[next] {
                frontier.push(FrontierEdge {
                    from: cell,
                    direction,
                });
            }
        }
    }
}

pub fn randomized_prim(maze: &mut Maze, start: Position, rng: &mut StdRng) {
    if maze.is_empty() {
        return;
    }

    // Initialize the maze with walls
    maze.fill_walls();

    let mut visited = Grid::new(maze.width(), maze.height(), false);
    visited[start] = true;

    let mut frontier = Vec::new();
    push_frontier_edges(maze, start, &visited, &mut frontier);

    while !frontier.is_empty() {
        // Randomly select an edge, swap_remove keeps removal O(1)
        let idx = rng.random_range(0..frontier.len());
        let edge = frontier.swap_remove(idx);

        let Some(next) = maze.neighbor(edge.from, edge.direction) else {
            continue;
        };
        // Both sides already belong to the maze, carving would close a loop
        if visited[next] {
            continue;
        }

        maze.carve(edge.from, edge.direction);
        visited[next] = true;
        push_frontier_edges(maze, next, &visited, &mut frontier);
    }
}
