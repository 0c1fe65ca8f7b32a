use rand::{rngs::StdRng, seq::SliceRandom};

use crate::maze::{Direction, Maze, Position};

/// Disjoint sets over cell indices, with path compression and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Point every node on the way straight at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Wall between a cell and its right or lower neighbour
#[derive(Clone, Copy)]
struct Edge {
    cell: Position,
    direction: Direction,
}

pub fn randomized_kruskal(maze: &mut Maze, rng: &mut StdRng) {
    if maze.is_empty() {
        return;
    }

    let width = maze.width();
    let height = maze.height();

    // Initialize the maze with walls
    maze.fill_walls();

    let total_cells = width * height;
    let mut uf = UnionFind::new(total_cells);

    // Collect every internal wall exactly once
    let mut edges: Vec<Edge> = (0..height)
        .flat_map(|row| (0..width).map(move |col| Position::new(row, col)))
        .flat_map(|cell| {
            [
                (cell.col + 1 < width).then_some(Edge {
                    cell,
                    direction: Direction::Right,
                }),
                (cell.row + 1 < height).then_some(Edge {
                    cell,
                    direction: Direction::Down,
                }),
            ]
        })
        .flatten()
        .collect();

    // Shuffle edges randomly
    edges.shuffle(rng);

    let mut carved = 0;
    for edge in edges {
        // A spanning tree has exactly n - 1 edges
        if carved + 1 >= total_cells {
            break;
        }
        let Some(other) = maze.neighbor(edge.cell, edge.direction) else {
            continue;
        };

        let idx1 = edge.cell.row * width + edge.cell.col;
        let idx2 = other.row * width + other.col;

        // If cells are not yet connected, remove the wall between them
        if uf.unite(idx1, idx2) {
            maze.carve(edge.cell, edge.direction);
            carved += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_union_find() {
        let mut uf = UnionFind::new(6);
        assert!(uf.unite(0, 1));
        assert!(uf.unite(2, 3));
        assert!(uf.unite(1, 3));
        // 0 and 2 are now connected through 1 and 3
        assert!(!uf.unite(0, 2));
        assert_eq!(uf.find(0), uf.find(3));
        assert_ne!(uf.find(0), uf.find(4));
        assert!(uf.unite(4, 5));
        assert_ne!(uf.find(5), uf.find(2));
    }

    #[test]
    fn test_path_compression_flattens() {
        let mut uf = UnionFind::new(4);
        uf.parent = vec![0, 0, 1, 2];
        let root = uf.find(3);
        assert_eq!(root, 0);
        assert_eq!(uf.parent, vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_randomized_kruskal() {
        let mut maze = Maze::new(9, 4);
        let mut rng = StdRng::seed_from_u64(5);
        randomized_kruskal(&mut maze, &mut rng);
        assert_eq!(maze.passage_count(), 35);
    }
}
