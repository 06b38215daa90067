//! Match rules that may vary between matches.

use derive_getters::Getters;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Default number of round wins that ends a match.
pub const DEFAULT_WINNING_SCORE: u32 = 3;

/// Default name of player B.
pub const DEFAULT_OPPONENT_NAME: &str = "Maynard";

/// Rules applied by a [`MatchEngine`](super::MatchEngine).
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct MatchSettings {
    /// Round wins needed to take the match.
    winning_score: u32,

    /// Fixed display name of player B.
    #[setters(into)]
    opponent_name: String,

    /// Upper-case the first letter of player A's name.
    capitalize_names: bool,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            opponent_name: DEFAULT_OPPONENT_NAME.to_string(),
            capitalize_names: true,
        }
    }
}
