use crate::generators::Picker;
use crate::maze::{Direction, Grid, get_neighbors};

/// Carve a perfect maze into `grid` by randomized depth-first search with an explicit stack.
///
/// Carving starts at the entrance `(0, 0)`. At each step the top of the stack is peeked;
/// one of its unvisited neighbors (enumerated north, east, south, west) is chosen with
/// `picker`, the wall between them is removed and the neighbor is pushed. When the top has
/// no unvisited neighbors it is popped. Every cell is pushed exactly once, so exactly
/// `width * height - 1` walls are removed.
///
/// `grid` must be fully walled; a grid that already has passages is left untouched.
pub(crate) fn randomized_dfs<P: Picker + ?Sized>(grid: &mut Grid, picker: &mut P) {
    if grid.passages() > 0 {
        tracing::warn!("[dfs] refusing to carve a grid that already has passages");
        return;
    }
    tracing::debug!("[dfs] carving {}x{} maze", grid.width(), grid.height());

    // Visited marks live only for the duration of the carve
    let mut visited = vec![false; grid.len()];
    let start = grid.entrance();
    visited[grid.ravel_index(start)] = true;

    let mut stack = vec![start];
    let mut carved = 0usize;
    let mut candidates: Vec<(Direction, (u16, u16))> = Vec::with_capacity(4);

    while let Some(&current) = stack.last() {
        candidates.clear();
        candidates.extend(
            get_neighbors(current, grid).filter(|&(_, n)| !visited[grid.ravel_index(n)]),
        );

        if candidates.is_empty() {
            tracing::trace!("[dfs] backtracking from {:?}", current);
            stack.pop();
            continue;
        }

        let idx = picker.pick(candidates.len());
        debug_assert!(idx < candidates.len(), "picker returned out-of-range index");
        let (direction, next) = candidates[idx];
        grid.remove_wall(current, direction);
        visited[grid.ravel_index(next)] = true;
        carved += 1;
        tracing::trace!("[dfs] carved {:?} -> {:?}", current, next);
        stack.push(next);
    }

    tracing::debug!("[dfs] done, {} passages carved", carved);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_first_candidate() {
        // Always taking the first candidate (north, east, south, west) from (0, 0) runs east
        // along the top row, then the snake turns south at the right edge.
        let mut grid = Grid::new(3, 2).unwrap();
        randomized_dfs(&mut grid, &mut |_: usize| 0usize);
        assert!(!grid[0][0].walls.right);
        assert!(!grid[0][1].walls.right);
        assert!(!grid[0][2].walls.bottom);
        assert!(!grid[1][2].walls.left);
        assert!(!grid[1][1].walls.left);
        // (0, 0) and (0, 1) are only joined through the snake
        assert!(grid[0][0].walls.bottom);
        assert_eq!(grid.passages(), 5);
    }

    #[test]
    fn test_always_last_candidate() {
        // From (0, 0) the candidates are [east, south]; taking the last goes down the first column.
        let mut grid = Grid::new(2, 3).unwrap();
        randomized_dfs(&mut grid, &mut |len: usize| len - 1);
        assert!(!grid[0][0].walls.bottom);
        assert!(!grid[1][0].walls.bottom);
        assert!(!grid[2][0].walls.right);
        assert!(!grid[2][1].walls.top);
        assert!(!grid[1][1].walls.top);
        assert!(grid[0][0].walls.right);
        assert_eq!(grid.passages(), 5);
    }

    #[test]
    fn test_large_grid_does_not_recurse() {
        // A single corridor of 200k cells would overflow a recursive carve
        let mut grid = Grid::new(50_000, 4).unwrap();
        randomized_dfs(&mut grid, &mut |_: usize| 0usize);
        assert_eq!(grid.passages(), grid.len() - 1);
    }

    #[test]
    fn test_carved_grid_is_not_carved_again() {
        let mut grid = Grid::new(6, 6).unwrap();
        randomized_dfs(&mut grid, &mut |_: usize| 0usize);
        let carved = grid.clone();
        randomized_dfs(&mut grid, &mut |len: usize| len - 1);
        assert_eq!(grid, carved);
        assert_eq!(grid.passages(), grid.len() - 1);
    }

    #[test]
    fn test_picker_sees_candidate_counts() {
        let mut grid = Grid::new(4, 4).unwrap();
        let mut seen = Vec::new();
        randomized_dfs(&mut grid, &mut |len: usize| {
            seen.push(len);
            0usize
        });
        // One pick per carved passage, each over 1..=4 candidates
        assert_eq!(seen.len(), 15);
        assert!(seen.iter().all(|&n| (1..=4).contains(&n)));
        // The entrance corner offers east and south only
        assert_eq!(seen[0], 2);
    }
}
