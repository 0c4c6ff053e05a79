use rand::{Rng, SeedableRng, rngs::StdRng};

mod dfs;

use dfs::randomized_dfs;

use crate::{error::MazeError, maze::Grid};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Source of the uniform choice made at every carve step.
///
/// `pick(len)` is only called with `len >= 1` and must return an index in `0..len`.
pub trait Picker {
    fn pick(&mut self, len: usize) -> usize;
}

/// Scripted pickers for fixtures: any `FnMut(len) -> index`.
impl<F> Picker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Picks uniformly using a `rand` generator.
pub struct RandomPicker<R> {
    rng: R,
}

impl<R: Rng> RandomPicker<R> {
    pub fn new(rng: R) -> Self {
        RandomPicker { rng }
    }
}

impl<R: Rng> Picker for RandomPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Generate a perfect maze using OS entropy.
pub fn generate(width: u16, height: u16) -> Result<Grid, MazeError> {
    generate_with(width, height, RandomPicker::new(get_rng(None)))
}

/// Generate a perfect maze that is fully determined by `seed`.
pub fn generate_seeded(width: u16, height: u16, seed: u64) -> Result<Grid, MazeError> {
    generate_with(width, height, RandomPicker::new(get_rng(Some(seed))))
}

/// Generate a perfect maze, drawing every random choice from `picker`.
pub fn generate_with<P: Picker>(width: u16, height: u16, mut picker: P) -> Result<Grid, MazeError> {
    let mut grid = Grid::new(width, height)?;
    randomized_dfs(&mut grid, &mut picker);
    Ok(grid)
}
