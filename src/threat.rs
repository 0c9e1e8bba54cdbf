//! Forced-move detection.
//!
//! Every window of five consecutive cells is examined, scanning start cells in
//! row-major order and, for each start, the directions in [`DIRECTIONS`]
//! order. The first qualifying window decides the answer, so results are fully
//! deterministic.
//!
//! Two shapes are recognised:
//! - **Four**: four of the player's stones and one empty cell. Playing the
//!   empty cell makes (or prevents) five.
//! - **Open three**: three stones and two empty cells that are not adjacent
//!   within the window. The empty cell nearer the window centre is returned.
//!   Windows whose empty cells touch are skipped; such shapes are left to
//!   rollout scoring.

use crate::board::{Board, Player};
use crate::constants::{DIRECTIONS, WINDOW};
use crate::line::window;

/// Threat shapes recognised by [`find_forced_move`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Threat {
    /// Four stones in a five-cell window (run length 4).
    Four,
    /// Three stones with two separated gaps (run length 3).
    OpenThree,
}

impl Threat {
    /// Number of the player's stones in a matching window.
    pub fn run_length(self) -> usize {
        match self {
            Threat::Four => 4,
            Threat::OpenThree => 3,
        }
    }
}

/// Find the cell that completes or blocks a `threat` shape for `player`.
pub fn find_forced_move(board: &Board, player: Player, threat: Threat) -> Option<usize> {
    for start in 0..board.len() {
        for &dir in &DIRECTIONS {
            let Some(cells) = window::<WINDOW>(board, start, dir) else {
                continue;
            };
            if let Some(mv) = match_window(board, &cells, player, threat) {
                return Some(mv);
            }
        }
    }
    None
}

/// Test one window against a threat shape.
fn match_window(board: &Board, cells: &[usize], player: Player, threat: Threat) -> Option<usize> {
    let mut own = 0;
    let mut gaps = [0usize; WINDOW];
    let mut n_gaps = 0;

    for (pos, &i) in cells.iter().enumerate() {
        match board.get(i) {
            Some(p) if p == player => own += 1,
            Some(_) => return None,
            None => {
                gaps[n_gaps] = pos;
                n_gaps += 1;
            }
        }
    }

    if own != threat.run_length() {
        return None;
    }

    match threat {
        Threat::Four => Some(cells[gaps[0]]),
        Threat::OpenThree => {
            let (a, b) = (gaps[0], gaps[1]);
            if b - a == 1 {
                return None;
            }
            let center = WINDOW / 2;
            // Ties go to the earlier gap
            let pick = if b.abs_diff(center) < a.abs_diff(center) {
                b
            } else {
                a
            };
            Some(cells[pick])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[usize], white: &[usize]) -> Board {
        let mut board = Board::new(15).unwrap();
        for &i in black {
            board.place(i, Player::Black);
        }
        for &i in white {
            board.place(i, Player::White);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_threats() {
        let board = Board::new(15).unwrap();
        for threat in [Threat::Four, Threat::OpenThree] {
            assert_eq!(find_forced_move(&board, Player::Black, threat), None);
        }
    }

    #[test]
    fn test_open_four_returns_first_end_in_scan_order() {
        let board = board_with(&[112], &[97, 98, 99, 100]);
        assert_eq!(find_forced_move(&board, Player::White, Threat::Four), Some(96));
        assert_eq!(find_forced_move(&board, Player::Black, Threat::Four), None);
    }

    #[test]
    fn test_four_with_one_end_blocked() {
        let board = board_with(&[96], &[97, 98, 99, 100]);
        assert_eq!(find_forced_move(&board, Player::White, Threat::Four), Some(101));
    }

    #[test]
    fn test_split_four_fills_gap() {
        // X X . X X on row 3
        let board = board_with(&[45, 46, 48, 49], &[]);
        assert_eq!(find_forced_move(&board, Player::Black, Threat::Four), Some(47));
    }

    #[test]
    fn test_four_at_edge_is_found() {
        // Vertical four in column 0, rows 0-3; only the lower end is open
        let board = board_with(&[0, 15, 30, 45], &[]);
        assert_eq!(find_forced_move(&board, Player::Black, Threat::Four), Some(60));
    }

    #[test]
    fn test_dead_four_is_ignored() {
        let board = board_with(&[97, 98, 99, 100], &[96, 101]);
        assert_eq!(find_forced_move(&board, Player::Black, Threat::Four), None);
    }

    #[test]
    fn test_open_three_prefers_center() {
        // . X X X . on row 7, cols 4-8: gaps at window positions 0 and 4 tie,
        // the earlier one wins.
        let board = board_with(&[], &[110, 111, 112]);
        assert_eq!(
            find_forced_move(&board, Player::White, Threat::OpenThree),
            Some(109)
        );
    }

    #[test]
    fn test_split_three_picks_gap_nearest_center() {
        // Row 7: X . X X . with a White stone closing the left side so that
        // the first qualifying window is cols 5-9.
        let board = board_with(&[110, 112, 113], &[109]);
        // Window cols 5-9 = [X . X X .]: gaps at 1 and 4, gap 1 is nearer centre
        assert_eq!(
            find_forced_move(&board, Player::Black, Threat::OpenThree),
            Some(111)
        );
    }

    #[test]
    fn test_three_with_adjacent_gaps_is_not_a_threat() {
        // X X X . . against the left edge: the only full window has adjacent gaps
        let board = board_with(&[0, 1, 2], &[]);
        assert_eq!(
            find_forced_move(&board, Player::Black, Threat::OpenThree),
            None
        );
    }

    #[test]
    fn test_opponent_stone_spoils_window() {
        let board = board_with(&[110, 111, 112], &[109, 113]);
        assert_eq!(
            find_forced_move(&board, Player::Black, Threat::OpenThree),
            None
        );
        assert_eq!(find_forced_move(&board, Player::Black, Threat::Four), None);
    }
}
