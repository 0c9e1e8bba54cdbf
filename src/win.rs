//! Five-in-a-row detection.

use crate::board::{Board, Player};
use crate::constants::{DIRECTIONS, WIN_LENGTH};
use crate::line::scan;

/// Find the player with five in a row anywhere on the board.
///
/// Every occupied cell is tried as the start of a run in each direction, so
/// the answer does not depend on which move was played last. This also makes
/// it safe on boards restored from a snapshot.
pub fn find_winner(board: &Board) -> Option<Player> {
    for start in 0..board.len() {
        let Some(player) = board.get(start) else {
            continue;
        };
        for &dir in &DIRECTIONS {
            let run = scan(board, start, dir, WIN_LENGTH)
                .take_while(|&i| board.get(i) == Some(player))
                .count();
            if run == WIN_LENGTH {
                return Some(player);
            }
        }
    }
    None
}

/// Check whether the stone at `index` is part of five or more in a row.
///
/// Only the four lines through `index` are examined. Rollouts use this after
/// each placement instead of rescanning the whole board.
pub fn completes_five(board: &Board, index: usize) -> bool {
    let Some(player) = board.get(index) else {
        return false;
    };
    let size = board.size() as isize;
    let (row, col) = board.row_col(index);
    let owned = |r: isize, c: isize| {
        r >= 0
            && r < size
            && c >= 0
            && c < size
            && board.get((r * size + c) as usize) == Some(player)
    };

    DIRECTIONS.iter().any(|&(dc, dr)| {
        let mut count = 1;
        for sign in [1, -1] {
            let mut r = row as isize + dr * sign;
            let mut c = col as isize + dc * sign;
            while owned(r, c) {
                count += 1;
                r += dr * sign;
                c += dc * sign;
            }
        }
        count >= WIN_LENGTH
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(stones: &[(usize, Player)]) -> Board {
        let mut board = Board::new(15).unwrap();
        for &(i, p) in stones {
            board.place(i, p);
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(find_winner(&Board::new(15).unwrap()), None);
    }

    #[test]
    fn test_four_is_not_a_win() {
        let board = board_with(&[
            (97, Player::White),
            (98, Player::White),
            (99, Player::White),
            (100, Player::White),
        ]);
        assert_eq!(find_winner(&board), None);
        assert!(!completes_five(&board, 100));
    }

    #[test]
    fn test_diagonal_from_corner() {
        let stones: Vec<_> = (0..5).map(|k| (k * 16, Player::Black)).collect();
        let board = board_with(&stones);
        assert_eq!(find_winner(&board), Some(Player::Black));
        assert!(completes_five(&board, 32));
    }

    #[test]
    fn test_every_direction() {
        let runs: [[usize; 5]; 4] = [
            [60, 61, 62, 63, 64],   // horizontal
            [7, 22, 37, 52, 67],    // vertical
            [18, 34, 50, 66, 82],   // diagonal
            [120, 106, 92, 78, 64], // anti-diagonal
        ];
        for run in runs {
            let stones: Vec<_> = run.iter().map(|&i| (i, Player::White)).collect();
            let board = board_with(&stones);
            assert_eq!(find_winner(&board), Some(Player::White), "run {run:?}");
            for &i in &run {
                assert!(completes_five(&board, i), "cell {i} of {run:?}");
            }
        }
    }

    #[test]
    fn test_run_across_edge_is_not_a_win() {
        // cols 12..14 of row 0 then cols 0..1 of row 1: contiguous indices, not a line
        let board = board_with(&[
            (12, Player::Black),
            (13, Player::Black),
            (14, Player::Black),
            (15, Player::Black),
            (16, Player::Black),
        ]);
        assert_eq!(find_winner(&board), None);
        assert!(!completes_five(&board, 14));
    }

    #[test]
    fn test_broken_run_is_not_a_win() {
        let board = board_with(&[
            (60, Player::Black),
            (61, Player::Black),
            (62, Player::White),
            (63, Player::Black),
            (64, Player::Black),
            (65, Player::Black),
        ]);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_overline_counts() {
        let stones: Vec<_> = (96..102).map(|i| (i, Player::Black)).collect();
        assert_eq!(find_winner(&board_with(&stones)), Some(Player::Black));
    }

    #[test]
    fn test_completes_five_on_empty_cell() {
        assert!(!completes_five(&Board::new(15).unwrap(), 0));
    }
}
