//! Line scanning along the four board axes.
//!
//! A [`Line`] walks from a starting cell in the positive half of one
//! direction and yields at most `len` cell indices. It stops as soon as the
//! next step would leave the grid, so lines never wrap across an edge.

use crate::board::Board;
use crate::constants::Direction;

/// Iterator over the cells of a bounded line.
#[derive(Clone, Debug)]
pub struct Line {
    size: isize,
    col: isize,
    row: isize,
    step: Direction,
    remaining: usize,
}

impl Iterator for Line {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        if self.col < 0 || self.col >= self.size || self.row < 0 || self.row >= self.size {
            self.remaining = 0;
            return None;
        }
        let index = (self.row * self.size + self.col) as usize;
        self.col += self.step.0;
        self.row += self.step.1;
        self.remaining -= 1;
        Some(index)
    }
}

/// Walk `len` cells from `start` in direction `dir`.
pub fn scan(board: &Board, start: usize, dir: Direction, len: usize) -> Line {
    let (row, col) = board.row_col(start);
    Line {
        size: board.size() as isize,
        col: col as isize,
        row: row as isize,
        step: dir,
        remaining: if start < board.len() { len } else { 0 },
    }
}

/// Collect exactly `N` cells, or `None` if the line runs off the board.
pub fn window<const N: usize>(board: &Board, start: usize, dir: Direction) -> Option<[usize; N]> {
    let mut cells = [0; N];
    let mut line = scan(board, start, dir, N);
    for cell in &mut cells {
        *cell = line.next()?;
    }
    Some(cells)
}
