/// Side length of the maze on level 1.
pub const INITIAL_GRID_SIZE: u16 = 8;
/// Levels never grow past this side length.
pub const MAX_GRID_SIZE: u16 = 12;

/// Side length of the square maze for a level. The maze grows by one every two levels,
/// up to `MAX_GRID_SIZE`. Level 0 is treated as level 1.
pub fn grid_size_for_level(level: u32) -> u16 {
    let growth = level.saturating_sub(1) / 2;
    let size = INITIAL_GRID_SIZE as u32 + growth;
    size.min(MAX_GRID_SIZE as u32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_sizes() {
        assert_eq!(grid_size_for_level(0), 8);
        assert_eq!(grid_size_for_level(1), 8);
        assert_eq!(grid_size_for_level(2), 8);
        assert_eq!(grid_size_for_level(3), 9);
        assert_eq!(grid_size_for_level(4), 9);
        assert_eq!(grid_size_for_level(9), 12);
        assert_eq!(grid_size_for_level(10), 12);
        assert_eq!(grid_size_for_level(u32::MAX), MAX_GRID_SIZE);
    }
}
