use rand::{rngs::StdRng, seq::SliceRandom};

use crate::maze::{Direction, Grid, Maze, Position};

/// One level of the backtracker: a cell and the shuffled order it tries its neighbours in.
struct Branch {
    cell: Position,
    directions: [Direction; 4],
    next: usize,
}

impl Branch {
    fn new(cell: Position, rng: &mut StdRng) -> Self {
        let mut directions = Direction::ALL;
        directions.shuffle(rng);
        Branch {
            cell,
            directions,
            next: 0,
        }
    }
}

/// Recursive backtracker with the recursion unrolled onto a heap-allocated stack.
///
/// Each cell shuffles its four directions once on entry and then tries them in that
/// order, descending into the first unvisited neighbour. Returning to a cell resumes
/// with the next direction in its list, exactly as the recursive formulation would.
pub fn randomized_dfs(maze: &mut Maze, start: Position, rng: &mut StdRng) {
    if maze.is_empty() {
        return;
    }

    // Initialize the maze with walls
    maze.fill_walls();

    let mut visited = Grid::new(maze.width(), maze.height(), false);
    visited[start] = true;
    let mut stack = vec![Branch::new(start, rng)];

    while let Some(branch) = stack.last_mut() {
        let Some(&direction) = branch.directions.get(branch.next) else {
            // Every direction tried, backtrack
            stack.pop();
            continue;
        };
        branch.next += 1;
        let cell = branch.cell;

        let Some(neighbor) = maze.neighbor(cell, direction) else {
            continue;
        };
        if visited[neighbor] {
            continue;
        }

        maze.carve(cell, direction);
        visited[neighbor] = true;
        stack.push(Branch::new(neighbor, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_randomized_dfs_carves_every_cell() {
        let mut maze = Maze::new(10, 10);
        let mut rng = StdRng::seed_from_u64(7);
        randomized_dfs(&mut maze, Position::new(4, 4), &mut rng);
        assert_eq!(maze.passage_count(), 99);
        assert!(maze.cells().iter().all(|cell| cell.open_sides() > 0));
    }

    #[test]
    fn test_randomized_dfs_on_a_corridor() {
        // A single row only admits one spanning tree
        let mut maze = Maze::new(6, 1);
        let mut rng = StdRng::seed_from_u64(0);
        randomized_dfs(&mut maze, Position::new(0, 3), &mut rng);
        for col in 0..5 {
            assert!(!maze.has_wall(Position::new(0, col), Direction::Right));
        }
    }

    #[test]
    fn test_large_maze_does_not_overflow_the_stack() {
        let mut maze = Maze::new(400, 400);
        let mut rng = StdRng::seed_from_u64(11);
        randomized_dfs(&mut maze, Position::new(0, 0), &mut rng);
        assert_eq!(maze.passage_count(), 400 * 400 - 1);
    }
}
