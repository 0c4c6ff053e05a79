use crate::maze::{Coord, Direction};

/// The four wall flags of a cell. `true` means the side is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    /// All four sides blocked.
    pub const ALL: Walls = Walls {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    /// Returns whether the wall on the given side is present.
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.top,
            Direction::East => self.right,
            Direction::South => self.bottom,
            Direction::West => self.left,
        }
    }

    /// Removes the wall on the given side.
    pub(crate) fn open(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.top = false,
            Direction::East => self.right = false,
            Direction::South => self.bottom = false,
            Direction::West => self.left = false,
        }
    }

    /// Number of walls still standing.
    pub fn count(&self) -> usize {
        Direction::ALL.iter().filter(|&&d| self.has(d)).count()
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::ALL
    }
}

/// One grid position together with its wall flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
    pub walls: Walls,
}

impl Cell {
    /// A fully walled cell at the given position.
    pub fn new(x: u16, y: u16) -> Self {
        Cell {
            x,
            y,
            walls: Walls::ALL,
        }
    }

    pub fn coord(&self) -> Coord {
        (self.x, self.y)
    }
}
