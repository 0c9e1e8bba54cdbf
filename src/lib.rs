//! Gomoku-Rollout: a five-in-a-row engine with a rollout-based computer player.
//!
//! The crate holds the game logic only: board snapshots with history, win and
//! threat detection, and a computer player that combines forced-move rules
//! with randomized, depth-limited rollouts. Rendering, input handling and
//! storage belong to the caller, which talks to the engine through
//! [`EngineState`] and the [`snapshot`] functions.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, directions and rollout scores
//! - [`board`] - Immutable board snapshots and coordinates
//! - [`line`] - Bounded line scanning along the four axes
//! - [`win`] - Five-in-a-row detection
//! - [`threat`] - Forced-move (four / open three) detection
//! - [`candidates`] - Frontier move generation
//! - [`difficulty`] - Difficulty levels and their search parameters
//! - [`playout`] - Random rollouts and their scoring
//! - [`select`] - The computer's move-selection cascade
//! - [`game`] - Game state, undo and modes
//! - [`snapshot`] - Serialization for persistence
//! - [`console`] - Text command loop for driving a game
//!
//! ## Example
//!
//! ```
//! use fastrand::Rng;
//! use gomoku_rollout::{Difficulty, EngineState, GameMode, Player};
//!
//! let mode = GameMode::HumanVsComputer { computer: Player::White };
//! let state = EngineState::new_game(15, mode).unwrap();
//!
//! // Human plays the centre
//! let state = state.apply_human_move(112).unwrap();
//!
//! // Computer answers
//! let mut rng = Rng::with_seed(7);
//! let reply = state.compute_ai_move(Difficulty::Easy, &mut rng).unwrap();
//! let state = state.apply_move(reply).unwrap();
//! assert_eq!(state.move_count(), 2);
//! assert_eq!(state.winner(), None);
//!
//! // Persist and restore
//! let blob = gomoku_rollout::snapshot::serialize(&state).unwrap();
//! assert_eq!(gomoku_rollout::snapshot::deserialize(&blob).unwrap(), state);
//! ```

pub mod board;
pub mod candidates;
pub mod console;
pub mod constants;
pub mod difficulty;
pub mod error;
pub mod game;
pub mod line;
pub mod playout;
pub mod select;
pub mod snapshot;
pub mod threat;
pub mod win;

pub use board::{Board, Cell, Player};
pub use difficulty::{Difficulty, SearchParams};
pub use error::{Error, IllegalMove, Result};
pub use game::{EngineState, GameMode};
