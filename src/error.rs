use std::fmt;

/// Errors produced while building a maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height was zero.
    InvalidDimension { width: u16, height: u16 },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension { width, height } => write!(
                f,
                "invalid maze dimensions {}x{}: width and height must be at least 1",
                width, height
            ),
        }
    }
}

impl std::error::Error for MazeError {}
