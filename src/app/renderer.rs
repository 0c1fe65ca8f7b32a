use std::{
    fmt,
    io::{self, Write},
    time::Duration,
};

use crossterm::{
    cursor, queue,
    style::{self, Attribute, Color, Stylize},
    terminal::{self, ClearType},
};

use crate::{
    maze::{Direction, Grid, Maze, Position},
    solvers::{CellState, Frame},
};

/// One character cell pair of the drawn maze: either solid wall or an open square
/// coloured by search state. Maze cells and the passages between them are both tiles.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    #[default]
    Wall,
    Open(CellState),
}

impl Tile {
    /// Terminal columns taken by every tile
    pub const TILE_WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Open(state) => match state {
                CellState::None => "  ".with(Color::Reset),
                CellState::Frontier => "░░".with(Color::Cyan),
                CellState::CurrentlyProcessing => "🟧".with(Color::DarkYellow),
                CellState::Visited => "* ".with(Color::Blue),
                CellState::Solution => "🟨".with(Color::Yellow),
                CellState::Start => "🟩".with(Color::Green),
                CellState::End => "🟥".with(Color::Red),
            },
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::TILE_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Canvas coordinates of a maze cell. Cells sit on odd rows and columns with walls
/// and passages in between.
fn to_canvas(pos: Position) -> Position {
    Position::new(pos.row * 2 + 1, pos.col * 2 + 1)
}

fn midpoint(a: Position, b: Position) -> Position {
    Position::new((a.row + b.row) / 2, (a.col + b.col) / 2)
}

fn is_reached(state: CellState) -> bool {
    !matches!(state, CellState::None | CellState::Frontier)
}

/// Lays a frame over the maze walls. The result is `2 * height + 1` rows of
/// `2 * width + 1` tiles.
pub fn build_canvas(maze: &Maze, frame: &Frame, start: Position, end: Position) -> Grid<Tile> {
    let mut canvas = Grid::new(maze.width() * 2 + 1, maze.height() * 2 + 1, Tile::Wall);
    let state_of = |pos: Position| frame.states.get(pos).copied().unwrap_or_default();

    for pos in maze.cells().positions() {
        let state = state_of(pos);
        canvas[to_canvas(pos)] = Tile::Open(state);

        for direction in [Direction::Right, Direction::Down] {
            if maze.has_wall(pos, direction) {
                continue;
            }
            let Some(next) = maze.neighbor(pos, direction) else {
                continue;
            };
            let passage = if is_reached(state) && is_reached(state_of(next)) {
                CellState::Visited
            } else {
                CellState::None
            };
            canvas[midpoint(to_canvas(pos), to_canvas(next))] = Tile::Open(passage);
        }
    }

    for pair in frame.path.windows(2) {
        let between = midpoint(to_canvas(pair[0]), to_canvas(pair[1]));
        if canvas.contains(between) {
            canvas[between] = Tile::Open(CellState::Solution);
        }
    }

    for (pos, marker) in [(start, CellState::Start), (end, CellState::End)] {
        if maze.is_in_bounds(pos) {
            canvas[to_canvas(pos)] = Tile::Open(marker);
        }
    }

    canvas
}

/// Writes every canvas row followed by `\r\n`. Nothing is flushed.
pub fn write_canvas<W: Write>(out: &mut W, canvas: &Grid<Tile>) -> io::Result<()> {
    for row in canvas.rows() {
        for tile in row {
            queue!(out, style::Print(tile))?;
        }
        queue!(out, style::Print("\r\n"))?;
    }
    Ok(())
}

/// Whether a maze of the given size fits the current terminal. Reports `true` when the
/// terminal size cannot be queried, e.g. when output is not a terminal.
pub fn fits_terminal(maze: &Maze) -> bool {
    let needed_cols = (maze.width() * 2 + 1) * Tile::TILE_WIDTH as usize;
    // Canvas rows plus the caption line
    let needed_rows = maze.height() * 2 + 2;
    match terminal::size() {
        Ok((cols, rows)) => cols as usize >= needed_cols && rows as usize >= needed_rows,
        Err(_) => true,
    }
}

/// Replays recorded frames from the top-left corner of the screen, waiting
/// `frame_delay` between frames. The last frame stays on screen.
pub fn play<W: Write>(
    out: &mut W,
    maze: &Maze,
    frames: &[Frame],
    start: Position,
    end: Position,
    title: &str,
    frame_delay: Duration,
) -> io::Result<()> {
    queue!(out, cursor::Hide)?;
    let result = play_frames(out, maze, frames, start, end, title, frame_delay);
    // Restore the cursor even if drawing failed part way
    queue!(out, cursor::Show)?;
    out.flush()?;
    result
}

fn play_frames<W: Write>(
    out: &mut W,
    maze: &Maze,
    frames: &[Frame],
    start: Position,
    end: Position,
    title: &str,
    frame_delay: Duration,
) -> io::Result<()> {
    let total = frames.len();
    for (i, frame) in frames.iter().enumerate() {
        let canvas = build_canvas(maze, frame, start, end);
        queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        write_canvas(out, &canvas)?;
        queue!(
            out,
            style::PrintStyledContent(
                format!("{} | frame {}/{}\r\n", title, i + 1, total)
                    .with(Color::Blue)
                    .attribute(Attribute::Bold)
            )
        )?;
        out.flush()?;
        if !frame_delay.is_zero() && i + 1 < total {
            std::thread::sleep(frame_delay);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Maze {
        // Three cells in a row, all connected
        let mut maze = Maze::new(3, 1);
        maze.carve(Position::new(0, 0), Direction::Right);
        maze.carve(Position::new(0, 1), Direction::Right);
        maze
    }

    fn blank_frame(maze: &Maze) -> Frame {
        Frame {
            states: Grid::new(maze.width(), maze.height(), CellState::None),
            path: Vec::new(),
        }
    }

    #[test]
    fn test_canvas_layout() {
        let maze = corridor();
        let frame = blank_frame(&maze);
        let canvas = build_canvas(&maze, &frame, Position::new(0, 0), Position::new(0, 2));
        assert_eq!((canvas.width(), canvas.height()), (7, 3));

        // Border is solid
        assert!(canvas.rows().next().unwrap().iter().all(|&t| t == Tile::Wall));
        assert_eq!(canvas[Position::new(1, 0)], Tile::Wall);
        assert_eq!(canvas[Position::new(1, 6)], Tile::Wall);

        assert_eq!(canvas[Position::new(1, 1)], Tile::Open(CellState::Start));
        assert_eq!(canvas[Position::new(1, 2)], Tile::Open(CellState::None));
        assert_eq!(canvas[Position::new(1, 3)], Tile::Open(CellState::None));
        assert_eq!(canvas[Position::new(1, 5)], Tile::Open(CellState::End));
    }

    #[test]
    fn test_walls_stay_closed() {
        let mut maze = Maze::new(2, 2);
        maze.carve(Position::new(0, 0), Direction::Down);
        let frame = blank_frame(&maze);
        let canvas = build_canvas(&maze, &frame, Position::new(0, 0), Position::new(1, 0));
        // Between (0,0) and (1,0) is open, between (0,0) and (0,1) is not
        assert_eq!(canvas[Position::new(2, 1)], Tile::Open(CellState::None));
        assert_eq!(canvas[Position::new(1, 2)], Tile::Wall);
    }

    #[test]
    fn test_solution_passages() {
        let maze = corridor();
        let mut frame = blank_frame(&maze);
        frame.path = vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)];
        for &pos in &frame.path {
            frame.states[pos] = CellState::Solution;
        }
        let canvas = build_canvas(&maze, &frame, Position::new(0, 0), Position::new(0, 2));
        assert_eq!(canvas[Position::new(1, 2)], Tile::Open(CellState::Solution));
        assert_eq!(canvas[Position::new(1, 3)], Tile::Open(CellState::Solution));
        assert_eq!(canvas[Position::new(1, 4)], Tile::Open(CellState::Solution));
    }

    #[test]
    fn test_explored_passages() {
        let maze = corridor();
        let mut frame = blank_frame(&maze);
        frame.states[Position::new(0, 0)] = CellState::Visited;
        frame.states[Position::new(0, 1)] = CellState::CurrentlyProcessing;
        frame.states[Position::new(0, 2)] = CellState::Frontier;
        let canvas = build_canvas(&maze, &frame, Position::new(0, 0), Position::new(0, 2));
        assert_eq!(canvas[Position::new(1, 2)], Tile::Open(CellState::Visited));
        assert_eq!(canvas[Position::new(1, 4)], Tile::Open(CellState::None));
    }

    #[test]
    fn test_every_tile_renders() {
        let tiles = [
            Tile::Wall,
            Tile::Open(CellState::None),
            Tile::Open(CellState::Start),
            Tile::Open(CellState::End),
            Tile::Open(CellState::Frontier),
            Tile::Open(CellState::CurrentlyProcessing),
            Tile::Open(CellState::Visited),
            Tile::Open(CellState::Solution),
        ];
        for tile in tiles {
            assert!(!tile.to_string().is_empty());
        }
    }

    #[test]
    fn test_write_and_play() {
        let maze = corridor();
        let frame = blank_frame(&maze);
        let canvas = build_canvas(&maze, &frame, Position::new(0, 0), Position::new(0, 2));

        let mut out = Vec::new();
        write_canvas(&mut out, &canvas).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("\r\n").count(), 3);

        let mut out = Vec::new();
        let frames = vec![frame.clone(), frame];
        play(
            &mut out,
            &maze,
            &frames,
            Position::new(0, 0),
            Position::new(0, 2),
            "DFS + BFS",
            Duration::ZERO,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("frame 2/2"));
    }
}
