//! Constants for board geometry, line directions and rollout scoring.
//!
//! The board is a flat, row-major array of `size * size` cells. Unlike a
//! padded Go board there is no border: the line scanner checks bounds
//! explicitly so runs never wrap across an edge.

// =============================================================================
// Board Geometry
// =============================================================================

/// Standard Gomoku board side.
pub const DEFAULT_SIZE: usize = 15;

/// Smallest supported side. Anything smaller cannot hold a five.
pub const MIN_SIZE: usize = 5;

/// Largest supported side (one column letter per column in coordinate notation).
pub const MAX_SIZE: usize = 26;

/// Number of stones in a row needed to win.
pub const WIN_LENGTH: usize = 5;

/// Width of the window examined by the threat detector.
pub const WINDOW: usize = 5;

// =============================================================================
// Line Directions
// =============================================================================

/// A direction as `(column step, row step)`.
pub type Direction = (isize, isize);

/// The four line directions, in scan order.
///
/// Only the positive half of each axis is walked; the negative half is covered
/// by starting the scan from an earlier cell.
pub const DIRECTIONS: [Direction; 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal (down-right)
    (1, -1), // Anti-diagonal (up-right)
];

/// Offsets to the 8 neighbours of a cell as `(row step, column step)`,
/// in row-major order.
pub const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =============================================================================
// Rollout Scoring
// =============================================================================

/// Score for a rollout in which the searching player made five.
pub const SCORE_WIN: i64 = 100;

/// Residual score for an open four-threat on the final rollout board.
pub const SCORE_FOUR: i64 = 50;

/// Residual score for an open three-threat on the final rollout board.
pub const SCORE_THREE: i64 = 30;

// =============================================================================
// Persistence
// =============================================================================

/// Version written into serialized snapshots.
pub const SNAPSHOT_VERSION: u32 = 1;
