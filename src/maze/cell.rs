use std::fmt;

/// One of the four compass directions a cell can have a wall in.
///
/// The discriminant doubles as the index into [`Cell::walls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All directions, in wall index order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Row and column offset of one step in this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        write!(f, "{}", name)
    }
}

/// A maze cell with one wall flag per direction. `false` means the passage is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub walls: [bool; 4],
}

impl Cell {
    /// A cell with every wall standing.
    pub const CLOSED: Cell = Cell { walls: [true; 4] };

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.index()]
    }

    /// Number of open sides.
    pub fn open_sides(&self) -> usize {
        self.walls.iter().filter(|&&wall| !wall).count()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::CLOSED
    }
}
