//! Difficulty levels and their search parameters.
//!
//! Parameters live in a single table indexed by [`Difficulty`]; the move
//! selector only ever reads a [`SearchParams`] value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Tunable knobs of the move selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchParams {
    /// Whether open-three forced moves are taken before rollouts.
    pub forced_three: bool,
    /// Rollouts run per candidate move.
    pub simulations: u32,
    /// Rollout horizon in plies, counting the candidate move itself.
    pub depth: u32,
}

/// Computer strength.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

const PARAMS: [SearchParams; 3] = [
    // Easy
    SearchParams {
        forced_three: false,
        simulations: 10,
        depth: 1,
    },
    // Normal
    SearchParams {
        forced_three: true,
        simulations: 50,
        depth: 3,
    },
    // Hard
    SearchParams {
        forced_three: true,
        simulations: 200,
        depth: 5,
    },
];

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Search parameters for this level.
    pub fn params(self) -> SearchParams {
        PARAMS[self as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownDifficulty(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_table() {
        let easy = Difficulty::Easy.params();
        assert!(!easy.forced_three);
        assert_eq!((easy.simulations, easy.depth), (10, 1));

        let normal = Difficulty::Normal.params();
        assert!(normal.forced_three);
        assert_eq!((normal.simulations, normal.depth), (50, 3));

        let hard = Difficulty::Hard.params();
        assert!(hard.forced_three);
        assert_eq!((hard.simulations, hard.depth), (200, 5));
    }

    #[test]
    fn test_parse_and_display() {
        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>().unwrap(), d);
        }
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert!(matches!(
            "expert".parse::<Difficulty>(),
            Err(Error::UnknownDifficulty(_))
        ));
    }

    #[test]
    fn test_default_is_normal() {
        assert_eq!(Difficulty::default(), Difficulty::Normal);
    }
}
