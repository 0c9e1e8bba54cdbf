//! Board snapshots with value semantics.
//!
//! A [`Board`] is a flat, row-major grid of cells. Moves never mutate a board
//! in place through the public API: [`Board::apply_move`] returns a new
//! snapshot, so a history of boards can be kept for undo without aliasing.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_SIZE, MIN_SIZE, NEIGHBORS};
use crate::error::{Error, IllegalMove, Result};
use crate::win::find_winner;

/// One of the two players. Black (`X`) always moves first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    #[inline]
    pub fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Character used in board rendering and serialized snapshots.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Player::Black => 'X',
            Player::White => 'O',
        }
    }

    /// Player whose turn it is after `moves` moves have been played.
    #[inline]
    pub fn to_move_after(moves: usize) -> Self {
        if moves % 2 == 0 {
            Player::Black
        } else {
            Player::White
        }
    }

    pub(crate) fn slot(self) -> usize {
        match self {
            Player::Black => 0,
            Player::White => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl std::str::FromStr for Player {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "x" | "black" | "b" => Ok(Player::Black),
            "o" | "white" | "w" => Ok(Player::White),
            _ => Err(Error::UnknownPlayer(s.to_string())),
        }
    }
}

/// Cell value: empty, or a stone of one player.
pub type Cell = Option<Player>;

/// An immutable board snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty `size` x `size` board.
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(Error::InvalidBoardSize {
                size,
                min: MIN_SIZE,
                max: MAX_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no stone has been played.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `index`, or `None` for an empty or out-of-range cell.
    #[inline]
    pub fn get(&self, index: usize) -> Cell {
        self.cells.get(index).copied().flatten()
    }

    #[inline]
    pub fn is_vacant(&self, index: usize) -> bool {
        index < self.cells.len() && self.cells[index].is_none()
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// Index of the centre cell.
    pub fn center(&self) -> usize {
        self.index(self.size / 2, self.size / 2)
    }

    /// Return a new snapshot with `player`'s stone at `index`.
    ///
    /// # Errors
    /// - [`IllegalMove::OutOfRange`] if `index` is not on the board
    /// - [`IllegalMove::Occupied`] if the cell already holds a stone
    /// - [`IllegalMove::GameOver`] if someone already has five in a row
    pub fn apply_move(&self, index: usize, player: Player) -> Result<Board> {
        if index >= self.cells.len() {
            return Err(IllegalMove::OutOfRange {
                index,
                cells: self.cells.len(),
            }
            .into());
        }
        if self.cells[index].is_some() {
            return Err(IllegalMove::Occupied { index }.into());
        }
        if let Some(winner) = find_winner(self) {
            return Err(IllegalMove::GameOver { winner }.into());
        }
        let mut next = self.clone();
        next.cells[index] = Some(player);
        Ok(next)
    }

    /// Place a stone in place, skipping legality checks.
    ///
    /// Only used on scratch copies (rollouts, test fixtures).
    #[inline]
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.cells[index] = Some(player);
    }

    /// The up to 8 grid-adjacent cells of `index`.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let (row, col) = self.row_col(index);
        let n = self.size as isize;
        NEIGHBORS.iter().filter_map(move |&(dr, dc)| {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r < 0 || r >= n || c < 0 || c >= n {
                None
            } else {
                Some(r as usize * self.size + c as usize)
            }
        })
    }

    /// Row-major string of `X`, `O` and `.`, one character per cell.
    pub fn to_cell_string(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.map_or('.', Player::symbol))
            .collect()
    }

    /// Parse a string produced by [`Board::to_cell_string`].
    pub fn from_cell_string(size: usize, s: &str) -> Result<Self> {
        let mut board = Board::new(size)?;
        let count = s.chars().count();
        if count != size * size {
            return Err(Error::malformed(format!(
                "board string has {count} cells, expected {}",
                size * size
            )));
        }
        for (i, ch) in s.chars().enumerate() {
            board.cells[i] = match ch {
                'X' => Some(Player::Black),
                'O' => Some(Player::White),
                '.' => None,
                other => {
                    return Err(Error::malformed(format!(
                        "invalid character '{other}' at cell {i}"
                    )));
                }
            };
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{} ", column_letter(col))?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{:>2} ", self.size - row)?;
            for col in 0..self.size {
                let ch = self.cells[self.index(row, col)].map_or('.', Player::symbol);
                write!(f, "{ch} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn column_letter(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Parse a coordinate such as `"H8"` into a linear cell index.
///
/// Columns are letters from `A`, rows are numbered from 1 at the bottom edge.
/// A bare number is taken as a linear index.
pub fn parse_coord(s: &str, size: usize) -> Result<usize> {
    let s = s.trim();
    let invalid = || Error::InvalidCoord(s.to_string());

    if let Ok(index) = s.parse::<usize>() {
        return if index < size * size {
            Ok(index)
        } else {
            Err(invalid())
        };
    }

    let mut chars = s.chars();
    let letter = chars.next().ok_or_else(invalid)?.to_ascii_uppercase();
    if !letter.is_ascii_uppercase() {
        return Err(invalid());
    }
    let col = (letter as u8 - b'A') as usize;
    let row_number: usize = chars.as_str().parse().map_err(|_| invalid())?;

    if col >= size || row_number == 0 || row_number > size {
        return Err(invalid());
    }
    Ok((size - row_number) * size + col)
}

/// Convert a linear cell index to a coordinate string (e.g. `"H8"`).
pub fn str_coord(index: usize, size: usize) -> String {
    let row = index / size;
    let col = index % size;
    format!("{}{}", column_letter(col), size - row)
}
