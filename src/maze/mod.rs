pub mod cell;
pub mod grid;

use std::fmt;

pub use cell::{Cell, Direction};
pub use grid::Grid;

/// A cell coordinate in the maze, as (row, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// The position one step away in `direction`, if it does not underflow.
    /// Bounds on the high side are left to the caller.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    /// |Δrow| + |Δcol|
    pub fn manhattan_distance(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

/// A rectangular maze where every cell carries its own four wall flags.
///
/// Walls between neighbours are stored twice, once on each side. The only way to open a
/// wall is [`Maze::carve`], which clears both sides together so the two copies never
/// disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid<Cell>,
}

impl Maze {
    /// Creates a new maze with the given width and height, with every wall standing.
    pub fn new(width: usize, height: usize) -> Self {
        Maze {
            grid: Grid::new(width, height, Cell::CLOSED),
        }
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    /// Checks if the maze has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        self.grid.contains(pos)
    }

    pub fn cells(&self) -> &Grid<Cell> {
        &self.grid
    }

    /// Closes every wall of every cell.
    pub fn fill_walls(&mut self) {
        self.grid.fill(Cell::CLOSED);
    }

    /// The in-bounds neighbour of `pos` in `direction`.
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|&next| self.is_in_bounds(next))
    }

    /// Removes the wall between `from` and its neighbour in `direction`, on both sides.
    ///
    /// Returns the neighbour's position, or `None` if `from` is out of bounds or the
    /// neighbour would lie outside the maze. Nothing is changed in that case.
    pub fn carve(&mut self, from: Position, direction: Direction) -> Option<Position> {
        if !self.is_in_bounds(from) {
            return None;
        }
        let to = self.neighbor(from, direction)?;
        self.grid[from].walls[direction.index()] = false;
        self.grid[to].walls[direction.opposite().index()] = false;
        Some(to)
    }

    pub fn has_wall(&self, pos: Position, direction: Direction) -> bool {
        self.grid[pos].has_wall(direction)
    }

    /// Neighbours reachable from `pos` in one step, paired with the direction taken,
    /// in the order `directions` lists them.
    pub fn open_neighbors<'a>(
        &'a self,
        pos: Position,
        directions: &'a [Direction],
    ) -> impl Iterator<Item = (Direction, Position)> + 'a {
        directions.iter().filter_map(move |&direction| {
            if self.has_wall(pos, direction) {
                return None;
            }
            self.neighbor(pos, direction).map(|next| (direction, next))
        })
    }

    /// Number of open passages between adjacent cells.
    /// Each passage is counted once, from its upper or left cell.
    pub fn passage_count(&self) -> usize {
        self.grid
            .positions()
            .map(|pos| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|&d| !self.has_wall(pos, d) && self.neighbor(pos, d).is_some())
                    .count()
            })
            .sum()
    }
}

impl std::ops::Index<Position> for Maze {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.grid[pos]
    }
}
