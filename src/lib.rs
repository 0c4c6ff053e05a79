pub mod config;
pub mod error;
pub mod generators;
pub mod level;
pub mod maze;
pub mod render;

pub use error::MazeError;
pub use generators::{generate, generate_seeded, generate_with};
pub use maze::{Cell, Coord, Direction, Grid, Walls};
