//! Serializable game snapshots.
//!
//! The engine does not store anything itself. [`serialize`] turns a game into
//! a versioned JSON document and [`deserialize`] rebuilds it; where the text
//! ends up (a file, local storage, a database row) is the caller's business.
//!
//! Restoring is strict: any snapshot whose history, move lists or turn do not
//! agree with each other is rejected with [`Error::MalformedSnapshot`], and the
//! caller is expected to fall back to a new game.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Player};
use crate::constants::SNAPSHOT_VERSION;
use crate::error::{Error, Result};
use crate::game::{EngineState, GameMode};

/// On-disk form of an [`EngineState`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Format version, for future compatibility
    pub version: u32,
    pub size: usize,
    pub mode: GameMode,
    /// Player to move
    pub turn: Player,
    /// One row-major `X`/`O`/`.` string per board, oldest first
    pub history: Vec<String>,
    pub black_moves: Vec<usize>,
    pub white_moves: Vec<usize>,
}

impl From<&EngineState> for Snapshot {
    fn from(state: &EngineState) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            size: state.size(),
            mode: state.mode(),
            turn: state.turn(),
            history: state.history().iter().map(Board::to_cell_string).collect(),
            black_moves: state.moves_of(Player::Black).to_vec(),
            white_moves: state.moves_of(Player::White).to_vec(),
        }
    }
}

impl TryFrom<Snapshot> for EngineState {
    type Error = Error;

    fn try_from(snap: Snapshot) -> Result<Self> {
        if snap.version != SNAPSHOT_VERSION {
            return Err(Error::malformed(format!(
                "unsupported version {} (expected {SNAPSHOT_VERSION})",
                snap.version
            )));
        }
        if snap.history.is_empty() {
            return Err(Error::malformed("history is empty"));
        }
        if snap.black_moves.len() + snap.white_moves.len() + 1 != snap.history.len() {
            return Err(Error::malformed(format!(
                "{} recorded moves for {} snapshots",
                snap.black_moves.len() + snap.white_moves.len(),
                snap.history.len()
            )));
        }

        let history = snap
            .history
            .iter()
            .map(|s| Board::from_cell_string(snap.size, s))
            .collect::<Result<Vec<_>>>()
            .map_err(|e| match e {
                Error::InvalidBoardSize { size, .. } => {
                    Error::malformed(format!("unsupported board size {size}"))
                }
                other => other,
            })?;

        let state = EngineState {
            mode: snap.mode,
            history,
            moves: [snap.black_moves, snap.white_moves],
            turn: snap.turn,
        };
        state.check_invariants().map_err(Error::MalformedSnapshot)?;
        Ok(state)
    }
}

/// Serialize a game to JSON.
///
/// # Errors
/// [`Error::SnapshotEncoding`] if the JSON encoder fails.
pub fn serialize(state: &EngineState) -> Result<String> {
    serde_json::to_string(&Snapshot::from(state))
        .map_err(|e| Error::SnapshotEncoding(e.to_string()))
}

/// Rebuild a game from [`serialize`] output.
pub fn deserialize(blob: &str) -> Result<EngineState> {
    let snap: Snapshot =
        serde_json::from_str(blob).map_err(|e| Error::malformed(e.to_string()))?;
    EngineState::try_from(snap)
}
