//! Players taking part in a match.

use super::error::MatchError;
use super::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A validated, display-ready player name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub struct PlayerName(String);

impl PlayerName {
    /// Validates raw input from the setup screen.
    ///
    /// Surrounding whitespace is trimmed. With `capitalize` set, the first
    /// character is upper-cased and the rest is kept as typed
    /// (`"ann"` becomes `"Ann"`).
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidName`] when nothing but whitespace remains.
    #[instrument]
    pub fn parse(raw: &str, capitalize: bool) -> Result<Self, MatchError> {
        let trimmed = raw.trim();
        let mut chars = trimmed.chars();
        let Some(first) = chars.next() else {
            warn!("Rejecting empty player name");
            return Err(MatchError::InvalidName);
        };

        if capitalize {
            Ok(Self(first.to_uppercase().chain(chars).collect()))
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A player: fixed name and mark, plus the rounds won in this match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    mark: Mark,
    score: u32,
}

impl Player {
    /// Creates a player with a score of zero.
    pub fn new(name: impl Into<String>, mark: Mark) -> Self {
        Self {
            name: name.into(),
            mark,
            score: 0,
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Rounds won in the current match.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(super) fn award_round(&mut self) {
        self.score += 1;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_capitalized() {
        let name = PlayerName::parse("ann", true).unwrap();
        assert_eq!(name.as_str(), "Ann");
    }

    #[test]
    fn test_capitalization_keeps_the_rest() {
        let name = PlayerName::parse("  mcKay ", true).unwrap();
        assert_eq!(name.as_str(), "McKay");
    }

    #[test]
    fn test_capitalization_can_be_disabled() {
        let name = PlayerName::parse(" ann ", false).unwrap();
        assert_eq!(name.as_str(), "ann");
    }

    #[test]
    fn test_non_ascii_first_letter() {
        let name = PlayerName::parse("élodie", true).unwrap();
        assert_eq!(name.as_str(), "Élodie");
    }

    #[test]
    fn test_empty_and_blank_names_rejected() {
        assert_eq!(PlayerName::parse("", true), Err(MatchError::InvalidName));
        assert_eq!(PlayerName::parse(" \t\n", true), Err(MatchError::InvalidName));
    }

    #[test]
    fn test_award_round_increments_by_one() {
        let mut player = Player::new("Ann", Mark::X);
        assert_eq!(player.score(), 0);
        player.award_round();
        player.award_round();
        assert_eq!(player.score(), 2);
    }
}
