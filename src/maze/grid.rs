use crate::error::MazeError;
use crate::maze::{Coord, Direction, direction_between};

use super::cell::Cell;

/// A `height` x `width` grid of cells, stored row-major.
///
/// `grid[y]` is row `y`, so `grid[y][x]` reads a single cell; `grid[(x, y)]`
/// does the same with a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    /// Creates a grid where every cell has all four walls.
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimension { width, height });
        }
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Ok(Grid {
            data,
            width,
            height,
        })
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false, since `new` rejects zero dimensions. Kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The maze entrance, top-left.
    pub fn entrance(&self) -> Coord {
        (0, 0)
    }

    /// The maze exit, bottom-right.
    pub fn exit(&self) -> Coord {
        (self.width - 1, self.height - 1)
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    pub(crate) fn ravel_index(&self, coord: Coord) -> usize {
        coord.1 as usize * self.width as usize + coord.0 as usize
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if self.is_in_bounds(coord) {
            Some(&self.data[self.ravel_index(coord)])
        } else {
            None
        }
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.data.chunks_exact(self.width as usize)
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.data.iter()
    }

    /// Returns the in-bounds neighbor of `coord` in `direction`, if any.
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        let (x, y) = coord;
        // wrapping_sub pushes underflow to u16::MAX, saturating_add pins overflow there;
        // both land out of bounds because no dimension index can reach u16::MAX.
        let next = match direction {
            Direction::North => (x, y.wrapping_sub(1)),
            Direction::East => (x.saturating_add(1), y),
            Direction::South => (x, y.saturating_add(1)),
            Direction::West => (x.wrapping_sub(1), y),
        };
        self.is_in_bounds(next).then_some(next)
    }

    /// Whether the side of `coord` facing `direction` has no wall.
    /// Out-of-bounds coordinates are never open.
    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        self.get(coord).is_some_and(|c| !c.walls.has(direction))
    }

    /// A move is legal when `to` is orthogonally adjacent to `from` and the wall between them is open.
    pub fn can_move(&self, from: Coord, to: Coord) -> bool {
        if !self.is_in_bounds(to) {
            return false;
        }
        match direction_between(from, to) {
            Some(direction) => self.is_open(from, direction),
            None => false,
        }
    }

    /// Directions out of `coord` that are not walled off.
    pub fn open_directions(&self, coord: Coord) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&d| self.neighbor(coord, d).is_some() && self.is_open(coord, d))
    }

    /// Number of open passages between adjacent cells. A carved perfect maze has `len() - 1`.
    pub fn passages(&self) -> usize {
        self.cells()
            .map(|cell| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|&d| {
                        self.neighbor(cell.coord(), d).is_some() && !cell.walls.has(d)
                    })
                    .count()
            })
            .sum()
    }

    /// Removes the wall between `from` and its neighbor in `direction`, on both sides.
    ///
    /// # Returns
    /// The neighbor's coordinate.
    ///
    /// # Panics
    /// If `from` has no in-bounds neighbor in `direction`.
    pub(crate) fn remove_wall(&mut self, from: Coord, direction: Direction) -> Coord {
        let to = match self.neighbor(from, direction) {
            Some(to) => to,
            None => panic!("No neighbor {:?} of {:?} to carve into", direction, from),
        };
        let from_idx = self.ravel_index(from);
        let to_idx = self.ravel_index(to);
        self.data[from_idx].walls.open(direction);
        self.data[to_idx].walls.open(direction.opposite());
        to
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index)]
    }
}

impl std::ops::Index<usize> for Grid {
    type Output = [Cell];

    fn index(&self, row: usize) -> &Self::Output {
        let width = self.width as usize;
        &self.data[row * width..(row + 1) * width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 4),
            Err(MazeError::InvalidDimension {
                width: 0,
                height: 4
            })
        );
        assert!(Grid::new(4, 0).is_err());
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    fn test_indexing_row_then_column() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[1][2].coord(), (2, 1));
        assert_eq!(grid[(2, 1)], grid[1][2]);
        assert_eq!(grid.rows().count(), 2);
        assert!(grid.rows().all(|row| row.len() == 3));
    }

    #[test]
    fn test_neighbor_bounds() {
        let grid = Grid::new(3, 3).unwrap();
        assert_eq!(grid.neighbor((0, 0), Direction::North), None);
        assert_eq!(grid.neighbor((0, 0), Direction::West), None);
        assert_eq!(grid.neighbor((0, 0), Direction::East), Some((1, 0)));
        assert_eq!(grid.neighbor((2, 2), Direction::South), None);
        assert_eq!(grid.neighbor((2, 2), Direction::East), None);
        assert_eq!(grid.neighbor((1, 1), Direction::North), Some((1, 0)));
        assert_eq!(grid.neighbor((5, 5), Direction::North), None);
    }

    #[test]
    fn test_remove_wall_is_symmetric() {
        let mut grid = Grid::new(2, 2).unwrap();
        let to = grid.remove_wall((0, 1), Direction::North);
        assert_eq!(to, (0, 0));
        assert!(!grid[1][0].walls.top);
        assert!(!grid[0][0].walls.bottom);
        assert!(grid[0][0].walls.right);
        assert_eq!(grid.passages(), 1);
    }

    #[test]
    #[should_panic]
    fn test_remove_boundary_wall_panics() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.remove_wall((0, 0), Direction::West);
    }

    #[test]
    fn test_can_move() {
        let mut grid = Grid::new(3, 1).unwrap();
        grid.remove_wall((0, 0), Direction::East);
        assert!(grid.can_move((0, 0), (1, 0)));
        assert!(grid.can_move((1, 0), (0, 0)));
        assert!(!grid.can_move((1, 0), (2, 0)));
        // Not adjacent
        assert!(!grid.can_move((0, 0), (2, 0)));
        // Same cell
        assert!(!grid.can_move((0, 0), (0, 0)));
        // Off the grid
        assert!(!grid.can_move((2, 0), (3, 0)));
        assert_eq!(
            grid.open_directions((1, 0)).collect::<Vec<_>>(),
            vec![Direction::West]
        );
    }

    #[test]
    fn test_entrance_and_exit() {
        let grid = Grid::new(4, 7).unwrap();
        assert_eq!(grid.entrance(), (0, 0));
        assert_eq!(grid.exit(), (3, 6));
    }
}
