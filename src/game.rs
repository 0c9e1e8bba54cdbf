//! Game state: board history, per-player move lists and turn.
//!
//! An [`EngineState`] is a plain value. Every operation returns a new state
//! and leaves its input alone, so callers can keep old states around (for
//! display, persistence or a cancelled computer turn) without surprises.
//!
//! Invariants kept by every operation:
//! - `history[0]` is the empty board and `history.len() == moves + 1`
//! - each history entry adds exactly one stone to the previous one
//! - the two move lists hold every played index exactly once, in play order
//! - the side to move is derived from the move count (Black first)

use fastrand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, Player};
use crate::difficulty::Difficulty;
use crate::error::{IllegalMove, Result};
use crate::select::select_move;
use crate::win::find_winner;

/// Who is playing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum GameMode {
    /// Two humans share the board; undo takes back one move.
    #[default]
    HumanVsHuman,
    /// A human plays the computer; undo takes back a move and its reply.
    HumanVsComputer { computer: Player },
}

impl GameMode {
    /// The computer's colour, if the computer plays.
    pub fn computer(self) -> Option<Player> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { computer } => Some(computer),
        }
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineState {
    pub(crate) mode: GameMode,
    pub(crate) history: Vec<Board>,
    pub(crate) moves: [Vec<usize>; 2],
    pub(crate) turn: Player,
}

impl EngineState {
    /// Start a new game on an empty `size` x `size` board.
    pub fn new_game(size: usize, mode: GameMode) -> Result<Self> {
        Ok(Self {
            mode,
            history: vec![Board::new(size)?],
            moves: [Vec::new(), Vec::new()],
            turn: Player::Black,
        })
    }

    /// A fresh game with the same size and mode.
    pub fn reset(&self) -> Self {
        Self {
            mode: self.mode,
            history: vec![self.history[0].clone()],
            moves: [Vec::new(), Vec::new()],
            turn: Player::Black,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[Board] {
        &self.history
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Player to move next.
    #[inline]
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn size(&self) -> usize {
        self.history[0].size()
    }

    /// Number of moves played so far.
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// Indices played by `player`, in play order.
    pub fn moves_of(&self, player: Player) -> &[usize] {
        &self.moves[player.slot()]
    }

    /// Most recent move, if any.
    pub fn last_move(&self) -> Option<(usize, Player)> {
        let mover = self.turn.opponent();
        self.moves_of(mover).last().map(|&i| (i, mover))
    }

    /// Whether it is the computer's turn.
    pub fn is_computer_turn(&self) -> bool {
        self.mode.computer() == Some(self.turn)
    }

    pub fn winner(&self) -> Option<Player> {
        find_winner(self.board())
    }

    /// True once someone has five or the board is full.
    pub fn is_over(&self) -> bool {
        self.winner().is_some() || self.board().stone_count() == self.board().len()
    }

    /// Play `index` for the side to move.
    ///
    /// # Errors
    /// [`IllegalMove`] if the cell is off the board or taken, or the game is
    /// already won.
    pub fn apply_move(&self, index: usize) -> Result<Self> {
        let next_board = self.board().apply_move(index, self.turn)?;
        let mut next = self.clone();
        next.history.push(next_board);
        next.moves[self.turn.slot()].push(index);
        next.turn = self.turn.opponent();
        debug!(cell = index, player = %self.turn, moves = next.move_count(), "move applied");
        Ok(next)
    }

    /// Play `index` on behalf of a human.
    ///
    /// Same as [`EngineState::apply_move`], but refuses to move for the
    /// computer.
    pub fn apply_human_move(&self, index: usize) -> Result<Self> {
        if self.is_computer_turn() {
            return Err(IllegalMove::NotYourTurn.into());
        }
        self.apply_move(index)
    }

    /// Pick a move for the side to move. Does not change the state.
    ///
    /// Returns `None` if the game is over or nothing sensible is left to play.
    /// On an empty board the centre is returned.
    pub fn compute_ai_move(&self, difficulty: Difficulty, rng: &mut Rng) -> Option<usize> {
        if self.winner().is_some() {
            return None;
        }
        let board = self.board();
        if board.is_empty() {
            return Some(board.center());
        }
        let player = self.turn;
        select_move(
            board,
            player,
            self.moves_of(player.opponent()),
            self.moves_of(player),
            difficulty,
            rng,
        )
    }

    /// Take back the latest move (human vs human), or the human's latest move
    /// together with any computer reply after it (human vs computer).
    ///
    /// Against the computer the human is always to move afterwards, also
    /// when the human's last move won the game and no reply followed. Nothing
    /// happens until two moves have been played.
    pub fn undo(&self) -> Self {
        let human = match self.mode {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer { computer } => Some(computer.opponent()),
        };
        let min_moves = if human.is_some() { 2 } else { 1 };
        if self.move_count() < min_moves {
            return self.clone();
        }

        let mut next = self.clone();
        let mut plies = 0;
        while next.move_count() > 0 {
            next.history.pop();
            let mover = Player::to_move_after(next.move_count());
            next.moves[mover.slot()].pop();
            plies += 1;
            if human.is_none_or(|h| h == mover) {
                break;
            }
        }
        next.turn = Player::to_move_after(next.move_count());
        debug!(plies, moves = next.move_count(), "undo");
        next
    }

    /// Recompute the move lists from the history and compare.
    ///
    /// Used to validate restored snapshots and in tests.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        let Some(first) = self.history.first() else {
            return Err("history is empty".into());
        };
        if !first.is_empty() {
            return Err("first snapshot is not empty".into());
        }

        let mut expected: [Vec<usize>; 2] = [Vec::new(), Vec::new()];
        for (k, pair) in self.history.windows(2).enumerate() {
            let (prev, next) = (&pair[0], &pair[1]);
            if prev.size() != next.size() {
                return Err(format!("snapshot {} has a different size", k + 1));
            }
            let changed: Vec<usize> = (0..prev.len())
                .filter(|&i| prev.get(i) != next.get(i))
                .collect();
            let mover = Player::to_move_after(k);
            match changed.as_slice() {
                [i] if prev.get(*i).is_none() && next.get(*i) == Some(mover) => {
                    if find_winner(prev).is_some() {
                        return Err(format!("move {} played after the game was won", k + 1));
                    }
                    expected[mover.slot()].push(*i);
                }
                _ => {
                    return Err(format!(
                        "snapshot {} is not a single {} move",
                        k + 1,
                        mover
                    ));
                }
            }
        }

        if expected != self.moves {
            return Err("move lists do not match the history".into());
        }
        if self.turn != Player::to_move_after(self.move_count()) {
            return Err("turn does not match the move count".into());
        }
        Ok(())
    }
}
