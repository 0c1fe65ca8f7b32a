use super::Position;

/// Dense row-major 2D storage, `height` rows by `width` columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    data: Box<[T]>,
    width: usize,
    height: usize,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: usize, height: usize, value: T) -> Self {
        let data = vec![value; width * height].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    /// Overwrites every slot with `value`.
    pub fn fill(&mut self, value: T) {
        self.data.iter_mut().for_each(|slot| *slot = value.clone());
    }
}

impl<T> Grid<T> {
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn get(&self, pos: Position) -> Option<&T> {
        if self.contains(pos) {
            Some(&self.data[self.ravel_index(pos)])
        } else {
            None
        }
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on a zero chunk size
        self.data.chunks(self.width.max(1))
    }

    pub fn ravel_index(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Grid {
            data: Box::default(),
            width: 0,
            height: 0,
        }
    }
}

impl<T> std::ops::Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.data[self.ravel_index(pos)]
    }
}

impl<T> std::ops::IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let idx = self.ravel_index(pos);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(4, 3, 0u8);
        grid[Position::new(2, 3)] = 7;
        assert_eq!(grid[Position::new(2, 3)], 7);
        assert_eq!(grid.ravel_index(Position::new(2, 3)), 11);
        assert_eq!(grid.iter().filter(|&&v| v == 7).count(), 1);
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(4, 3, ());
        assert!(grid.contains(Position::new(2, 3)));
        assert!(!grid.contains(Position::new(3, 0)));
        assert!(!grid.contains(Position::new(0, 4)));
        assert!(grid.get(Position::new(3, 3)).is_none());
    }

    #[test]
    fn test_positions_are_row_major() {
        let grid = Grid::new(2, 2, false);
        let positions = grid.positions().collect::<Vec<_>>();
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_rows() {
        let grid = Grid::new(3, 2, 1);
        assert_eq!(grid.rows().count(), 2);
        assert!(grid.rows().all(|row| row.len() == 3));
        assert_eq!(Grid::<u8>::default().rows().count(), 0);
    }
}
