pub mod cell;
mod grid;

pub use cell::{Cell, Walls};
pub use grid::Grid;

/// A cell coordinate, `(x, y)`.
pub type Coord = (u16, u16);

/// The four sides of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Every direction, in the order neighbors are enumerated during carving.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// Direction of `to` as seen from `from`, if the two are orthogonally adjacent.
pub fn direction_between(from: Coord, to: Coord) -> Option<Direction> {
    let dx = to.0 as i32 - from.0 as i32;
    let dy = to.1 as i32 - from.1 as i32;
    match (dx, dy) {
        (0, -1) => Some(Direction::North),
        (1, 0) => Some(Direction::East),
        (0, 1) => Some(Direction::South),
        (-1, 0) => Some(Direction::West),
        _ => None,
    }
}

/// Get the in-bounds neighbors of a cell, paired with the direction leading to each.
pub fn get_neighbors(coord: Coord, grid: &Grid) -> impl Iterator<Item = (Direction, Coord)> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |d| grid.neighbor(coord, d).map(|n| (d, n)))
}
