//! Computer move selection.
//!
//! Selection is a strict priority cascade:
//! 1. complete our own four
//! 2. block the opponent's four
//! 3. (unless the level skips it) extend our open three, else block theirs
//! 4. rollout scoring over the frontier candidates
//!
//! In step 4 every candidate gets `simulations` rollouts and the highest
//! total wins; ties go to the candidate generated first. Each candidate draws
//! its own RNG seed from the caller's generator up front, and totals are
//! collected into a vector before they are compared, so the answer is the
//! same whether candidates are evaluated serially or (with the `parallel`
//! feature) on the rayon pool.

use std::time::Instant;

use fastrand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::board::{Board, Player};
use crate::candidates::candidates;
use crate::difficulty::{Difficulty, SearchParams};
use crate::playout::{Sides, simulate};
use crate::threat::{Threat, find_forced_move};

/// Choose a move for `player` at the given difficulty.
///
/// Returns `None` when there is nothing sensible to play (no forced move and
/// no frontier candidates); callers treat that as a draw.
pub fn select_move(
    board: &Board,
    player: Player,
    opponent_moves: &[usize],
    own_moves: &[usize],
    difficulty: Difficulty,
    rng: &mut Rng,
) -> Option<usize> {
    let sides = Sides {
        own: own_moves,
        opponent: opponent_moves,
    };
    select_move_within(board, player, sides, difficulty.params(), rng, None)
}

/// Like [`select_move`], with explicit parameters and an optional deadline.
///
/// The deadline is checked between candidates. Once it has passed, no further
/// candidates are evaluated and the best one found so far is returned. The
/// first candidate is always evaluated.
#[tracing::instrument(level = "debug", skip_all, fields(player = %player))]
pub fn select_move_within(
    board: &Board,
    player: Player,
    sides: Sides<'_>,
    params: SearchParams,
    rng: &mut Rng,
    deadline: Option<Instant>,
) -> Option<usize> {
    if let Some(mv) = forced_move(board, player, params) {
        return Some(mv);
    }
    rollout_search(board, player, sides, params, rng, deadline)
}

/// Steps 1-3 of the cascade.
pub fn forced_move(board: &Board, player: Player, params: SearchParams) -> Option<usize> {
    let opponent = player.opponent();
    let mut order = vec![(player, Threat::Four), (opponent, Threat::Four)];
    if params.forced_three {
        order.push((player, Threat::OpenThree));
        order.push((opponent, Threat::OpenThree));
    }

    order.into_iter().find_map(|(who, threat)| {
        let mv = find_forced_move(board, who, threat)?;
        debug!(?threat, owner = %who, cell = mv, "forced move");
        Some(mv)
    })
}

fn rollout_search(
    board: &Board,
    player: Player,
    sides: Sides<'_>,
    params: SearchParams,
    rng: &mut Rng,
    deadline: Option<Instant>,
) -> Option<usize> {
    let cands = candidates(board, sides.own, sides.opponent.last().copied());
    if cands.is_empty() {
        debug!("no candidates");
        return None;
    }
    let seeds: Vec<u64> = cands.iter().map(|_| rng.u64(..)).collect();

    let evaluate = |(i, (&mv, &seed)): (usize, (&usize, &u64))| -> Option<i64> {
        if i > 0 && deadline.is_some_and(|d| Instant::now() >= d) {
            return None;
        }
        let mut local = Rng::with_seed(seed);
        Some(
            (0..params.simulations)
                .filter_map(|_| simulate(board, mv, player, sides, params.depth, &mut local))
                .sum(),
        )
    };

    #[cfg(feature = "parallel")]
    let totals: Vec<Option<i64>> = cands
        .par_iter()
        .zip(seeds.par_iter())
        .enumerate()
        .map(evaluate)
        .collect();
    #[cfg(not(feature = "parallel"))]
    let totals: Vec<Option<i64>> = cands
        .iter()
        .zip(seeds.iter())
        .enumerate()
        .map(evaluate)
        .collect();

    let mut best: Option<(usize, i64)> = None;
    let mut evaluated = 0;
    for (&mv, total) in cands.iter().zip(&totals) {
        let Some(total) = *total else {
            continue;
        };
        evaluated += 1;
        trace!(cell = mv, total, "candidate");
        if best.is_none_or(|(_, b)| total > b) {
            best = Some((mv, total));
        }
    }

    if evaluated < cands.len() {
        warn!(
            evaluated,
            candidates = cands.len(),
            "deadline reached, returning best so far"
        );
    }
    let (mv, total) = best?;
    debug!(cell = mv, total, candidates = cands.len(), "rollout choice");
    Some(mv)
}
