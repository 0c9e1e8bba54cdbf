//! Randomized, depth-limited rollouts.
//!
//! A rollout plays a candidate move and then lets both sides pick uniformly at
//! random from their frontier candidates for a few plies. The final position
//! is scored from the searching player's point of view:
//! - `+SCORE_WIN` / `-SCORE_WIN` if either side made five
//! - otherwise a residual from the threats left on the board
//!   (`±SCORE_FOUR` for a four, `±SCORE_THREE` for an open three, summed)
//!
//! Randomness comes from the caller's [`fastrand::Rng`], so rollouts are
//! reproducible under a fixed seed.

use fastrand::Rng;

use crate::board::{Board, Player};
use crate::candidates::candidates;
use crate::constants::{SCORE_FOUR, SCORE_THREE, SCORE_WIN};
use crate::threat::{Threat, find_forced_move};
use crate::win::completes_five;

/// Move lists of the searching player and of its opponent, in play order.
#[derive(Copy, Clone, Debug, Default)]
pub struct Sides<'a> {
    pub own: &'a [usize],
    pub opponent: &'a [usize],
}

/// Run one rollout starting with `player` playing `first_move`.
///
/// At most `max_steps` plies are played, including `first_move`. The rollout
/// ends early when a side makes five or has no candidate moves. `board` and
/// the move lists in `sides` are left untouched.
///
/// Returns `None` if `first_move` is off the board or already occupied.
pub fn simulate(
    board: &Board,
    first_move: usize,
    player: Player,
    sides: Sides<'_>,
    max_steps: u32,
    rng: &mut Rng,
) -> Option<i64> {
    if !board.is_vacant(first_move) {
        return None;
    }

    let mut board = board.clone();
    let mut lists = [sides.own.to_vec(), sides.opponent.to_vec()];
    let movers = [player, player.opponent()];

    board.place(first_move, player);
    lists[0].push(first_move);
    let mut winner = completes_five(&board, first_move).then_some(player);
    let mut last = first_move;
    let mut side = 1;
    let mut steps = 1;

    while winner.is_none() && steps < max_steps {
        let cands = candidates(&board, &lists[side], Some(last));
        if cands.is_empty() {
            break;
        }
        let mv = cands[rng.usize(..cands.len())];
        board.place(mv, movers[side]);
        lists[side].push(mv);
        if completes_five(&board, mv) {
            winner = Some(movers[side]);
        }
        last = mv;
        side ^= 1;
        steps += 1;
    }

    Some(score(&board, player, winner))
}

/// Score a finished rollout for `player`.
fn score(board: &Board, player: Player, winner: Option<Player>) -> i64 {
    match winner {
        Some(w) if w == player => return SCORE_WIN,
        Some(_) => return -SCORE_WIN,
        None => {}
    }

    let opponent = player.opponent();
    let mut s = 0;
    if find_forced_move(board, player, Threat::Four).is_some() {
        s += SCORE_FOUR;
    }
    if find_forced_move(board, opponent, Threat::Four).is_some() {
        s -= SCORE_FOUR;
    }
    if find_forced_move(board, player, Threat::OpenThree).is_some() {
        s += SCORE_THREE;
    }
    if find_forced_move(board, opponent, Threat::OpenThree).is_some() {
        s -= SCORE_THREE;
    }
    s
}
