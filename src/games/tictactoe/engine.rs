//! Match engine: rounds, turns, scores and termination.
//!
//! A [`MatchEngine`] owns the board and both players. Operations either
//! succeed and return the events they produced, or fail with a
//! [`MatchError`] and leave every piece of state untouched.

use super::error::{MatchError, MoveError};
use super::events::{MatchEvent, ResolutionKind, RoundResolution, Scores};
use super::invariants::assert_invariants;
use super::phases::{MatchPhase, RoundOutcome};
use super::player::{Player, PlayerName};
use super::position::Position;
use super::rules;
use super::settings::MatchSettings;
use super::types::{Board, Mark};
use tracing::{debug, info, instrument, warn};

/// Players, turn and round of a started match.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Standing {
    players: [Player; 2],
    active: Mark,
    round: u32,
}

impl Standing {
    fn player(&self, mark: Mark) -> &Player {
        &self.players[mark.seat()]
    }

    fn scores(&self) -> Scores {
        Scores {
            x: self.player(Mark::X).score(),
            o: self.player(Mark::O).score(),
        }
    }

    fn turn_changed(&self) -> MatchEvent {
        MatchEvent::TurnChanged {
            active: self.player(self.active).clone(),
            round: self.round,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum MatchState {
    AwaitingPlayers,
    InProgress(Standing),
    Complete { standing: Standing, winner: Mark },
}

/// Best-of-N tic-tac-toe match state machine.
#[derive(Debug, Clone)]
pub struct MatchEngine {
    settings: MatchSettings,
    board: Board,
    state: MatchState,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Construction and queries
// ─────────────────────────────────────────────────────────────

impl MatchEngine {
    /// Creates an engine with the default rules, awaiting players.
    pub fn new() -> Self {
        Self::with_settings(MatchSettings::default())
    }

    /// Creates an engine with custom rules, awaiting players.
    #[instrument]
    pub fn with_settings(settings: MatchSettings) -> Self {
        Self {
            settings,
            board: Board::new(),
            state: MatchState::AwaitingPlayers,
        }
    }

    /// Rules in force.
    pub fn settings(&self) -> &MatchSettings {
        &self.settings
    }

    /// Round wins that end the match; never below 1.
    pub fn winning_score(&self) -> u32 {
        (*self.settings.winning_score()).max(1)
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current phase. Never `RoundResolved` between calls.
    pub fn phase(&self) -> MatchPhase {
        match self.state {
            MatchState::AwaitingPlayers => MatchPhase::AwaitingPlayers,
            MatchState::InProgress(_) => MatchPhase::RoundInProgress,
            MatchState::Complete { .. } => MatchPhase::MatchComplete,
        }
    }

    fn standing(&self) -> Option<&Standing> {
        match &self.state {
            MatchState::AwaitingPlayers => None,
            MatchState::InProgress(standing) | MatchState::Complete { standing, .. } => {
                Some(standing)
            }
        }
    }

    /// Both players (X first), once a match has started.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.standing().map(|s| &s.players)
    }

    /// Player owning `mark`, once a match has started.
    pub fn player(&self, mark: Mark) -> Option<&Player> {
        self.standing().map(|s| s.player(mark))
    }

    /// Current (or final) round number.
    pub fn round(&self) -> Option<u32> {
        self.standing().map(|s| s.round)
    }

    /// Current (or final) scores.
    pub fn scores(&self) -> Option<Scores> {
        self.standing().map(Standing::scores)
    }

    /// Player to move; only while a round is in progress.
    pub fn active_player(&self) -> Option<&Player> {
        match &self.state {
            MatchState::InProgress(standing) => Some(standing.player(standing.active)),
            _ => None,
        }
    }

    /// Player waiting for the opponent; only while a round is in progress.
    pub fn inactive_player(&self) -> Option<&Player> {
        match &self.state {
            MatchState::InProgress(standing) => Some(standing.player(standing.active.opponent())),
            _ => None,
        }
    }

    /// Match winner; only once the match is complete.
    pub fn winner(&self) -> Option<&Player> {
        match &self.state {
            MatchState::Complete { standing, winner } => Some(standing.player(*winner)),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Transitions
// ─────────────────────────────────────────────────────────────

impl MatchEngine {
    /// Starts a match for player A named `name_a` against the fixed player B.
    ///
    /// Accepted while awaiting players and after a completed match (rematch).
    /// Both scores start at zero, round 1 begins on an empty board with
    /// player A to move.
    ///
    /// # Errors
    ///
    /// - [`MatchError::NotAccepting`] while a round is in progress.
    /// - [`MatchError::InvalidName`] for an empty or whitespace-only name.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn start_match(&mut self, name_a: &str) -> Result<Vec<MatchEvent>, MatchError> {
        if let MatchState::InProgress(_) = self.state {
            warn!("Refusing to start a match while one is being played");
            return Err(MatchError::NotAccepting(self.phase()));
        }
        let name = PlayerName::parse(name_a, *self.settings.capitalize_names())?;

        let standing = Standing {
            players: [
                Player::new(name.as_str(), Mark::X),
                Player::new(self.settings.opponent_name().as_str(), Mark::O),
            ],
            active: Mark::X,
            round: 1,
        };
        info!(
            player_a = %standing.player(Mark::X).name(),
            player_b = %standing.player(Mark::O).name(),
            winning_score = self.winning_score(),
            "Match started"
        );

        let events = vec![
            MatchEvent::MatchStarted {
                players: standing.players.clone(),
                round: standing.round,
            },
            standing.turn_changed(),
        ];
        self.board.reset();
        self.state = MatchState::InProgress(standing);
        Ok(events)
    }

    /// Places the active player's mark at board index `index` (0-8).
    ///
    /// On a plain move the turn passes to the other player. A completed line
    /// scores a round for the mover: either the match ends, or the loser
    /// opens the next round on a cleared board. A full board without a line
    /// is a tie: the board is cleared and the same round number is replayed
    /// with the same player to move.
    ///
    /// # Errors
    ///
    /// - [`MatchError::NotAccepting`] unless a round is in progress.
    /// - [`MatchError::InvalidMove`] for an index off the board or an
    ///   occupied square.
    ///
    /// Nothing changes when an error is returned.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn play(&mut self, index: usize) -> Result<Vec<MatchEvent>, MatchError> {
        let phase = self.phase();
        let threshold = self.winning_score();
        let MatchState::InProgress(standing) = &mut self.state else {
            warn!(index, "Move outside of a round");
            return Err(MatchError::NotAccepting(phase));
        };

        let mover = standing.active;
        let position = self.board.place(index, mover).map_err(|err: MoveError| {
            warn!(index, %mover, error = %err, "Move rejected");
            MatchError::from(err)
        })?;
        debug!(%position, %mover, round = standing.round, "Mark placed");

        let mut events = vec![MatchEvent::MarkPlaced {
            position,
            mark: mover,
        }];

        match rules::evaluate(&self.board) {
            RoundOutcome::Undecided => {
                standing.active = mover.opponent();
                events.push(standing.turn_changed());
            }
            RoundOutcome::Tie => {
                let round = standing.round;
                info!(round, "Round tied; replaying");
                events.push(MatchEvent::RoundResolved(RoundResolution {
                    kind: ResolutionKind::Tie,
                    round,
                    next_round: round,
                    scores: standing.scores(),
                    final_board: self.board.clone(),
                }));
                self.board.reset();
                events.push(standing.turn_changed());
            }
            RoundOutcome::Win(winner, line) => {
                standing.players[winner.seat()].award_round();
                let round = standing.round;
                let scores = standing.scores();

                if scores.of(winner) >= threshold {
                    info!(round, %winner, x = scores.x, o = scores.o, "Match complete");
                    events.push(MatchEvent::MatchComplete {
                        winner: standing.player(winner).clone(),
                        scores,
                        round,
                        final_board: self.board.clone(),
                    });
                    let standing = standing.clone();
                    self.state = MatchState::Complete { standing, winner };
                } else {
                    let loser = winner.opponent();
                    info!(round, %winner, x = scores.x, o = scores.o, "Round won");
                    events.push(MatchEvent::RoundResolved(RoundResolution {
                        kind: ResolutionKind::Win {
                            winner: standing.player(winner).clone(),
                            loser: standing.player(loser).clone(),
                            line,
                        },
                        round,
                        next_round: round + 1,
                        scores,
                        final_board: self.board.clone(),
                    }));
                    standing.round = round + 1;
                    standing.active = loser;
                    self.board.reset();
                    events.push(standing.turn_changed());
                }
            }
        }

        assert_invariants(self);
        Ok(events)
    }

    /// Typed variant of [`MatchEngine::play`].
    ///
    /// # Errors
    ///
    /// Same as [`MatchEngine::play`], minus the out-of-range case.
    pub fn play_at(&mut self, position: Position) -> Result<Vec<MatchEvent>, MatchError> {
        self.play(position.to_index())
    }

    /// Closes a completed match and asks for the setup screen.
    ///
    /// # Errors
    ///
    /// [`MatchError::NotAccepting`] unless the match is complete.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn return_to_menu(&mut self) -> Result<Vec<MatchEvent>, MatchError> {
        if !matches!(self.state, MatchState::Complete { .. }) {
            warn!("Menu requested before the match ended");
            return Err(MatchError::NotAccepting(self.phase()));
        }
        info!("Returning to menu");
        self.state = MatchState::AwaitingPlayers;
        self.board.reset();
        Ok(vec![MatchEvent::MenuRequested])
    }
}
