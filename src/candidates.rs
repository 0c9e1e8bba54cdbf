//! Frontier move generation.
//!
//! The search only looks at empty cells touching a stone: the 8-neighbours of
//! the side's own moves plus those of the opponent's latest move. Cells far
//! from the action are never proposed, which keeps rollout counts affordable
//! on a 225-cell board.

use crate::board::Board;

/// Empty neighbours of `my_moves` and `opponent_last`, deduplicated.
///
/// The result keeps first-insertion order, which the move selector relies on
/// for tie-breaking.
pub fn candidates(board: &Board, my_moves: &[usize], opponent_last: Option<usize>) -> Vec<usize> {
    let mut seen = vec![false; board.len()];
    let mut out = Vec::new();

    for &src in my_moves.iter().chain(opponent_last.iter()) {
        if src >= board.len() {
            continue;
        }
        for n in board.neighbors(src) {
            if !seen[n] && board.is_vacant(n) {
                seen[n] = true;
                out.push(n);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_no_sources_no_candidates() {
        let board = Board::new(15).unwrap();
        assert!(candidates(&board, &[], None).is_empty());
    }

    #[test]
    fn test_single_stone_neighbors_in_row_major_order() {
        let board = Board::new(15).unwrap().apply_move(112, Player::Black).unwrap();
        assert_eq!(
            candidates(&board, &[112], None),
            vec![96, 97, 98, 111, 113, 126, 127, 128]
        );
    }

    #[test]
    fn test_union_is_deduplicated_and_skips_occupied() {
        let board = Board::new(15)
            .unwrap()
            .apply_move(112, Player::Black)
            .unwrap()
            .apply_move(113, Player::White)
            .unwrap();
        let cands = candidates(&board, &[112], Some(113));

        assert!(!cands.contains(&112));
        assert!(!cands.contains(&113));
        // 8 around 112 minus 113, plus 3 new cells right of 113
        assert_eq!(cands.len(), 7 + 3);
        let mut sorted = cands.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), cands.len());
        // Own moves are expanded before the opponent's last move
        assert_eq!(&cands[..7], &[96, 97, 98, 111, 126, 127, 128]);
        assert_eq!(&cands[7..], &[99, 114, 129]);
    }

    #[test]
    fn test_corner_stone() {
        let board = Board::new(15).unwrap().apply_move(0, Player::White).unwrap();
        assert_eq!(candidates(&board, &[], Some(0)), vec![1, 15, 16]);
    }

    #[test]
    fn test_surrounded_stone_has_no_candidates() {
        let mut board = Board::new(5).unwrap();
        for i in 0..25 {
            board.place(i, if i % 2 == 0 { Player::Black } else { Player::White });
        }
        assert!(candidates(&board, &[12], Some(13)).is_empty());
    }
}
