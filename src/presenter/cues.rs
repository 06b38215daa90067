//! Cue lists built from engine events.

use crate::config::PacingConfig;
use crate::games::tictactoe::{
    Board, Mark, Player, Presentation, ResolutionKind, RoundResolution, Scores,
};
use std::time::Duration;
use tracing::{debug, instrument};

/// One scoreboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreLine {
    /// Player name.
    pub name: String,
    /// Player mark.
    pub mark: Mark,
    /// Rounds won.
    pub score: u32,
}

impl From<&Player> for ScoreLine {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name().to_string(),
            mark: player.mark(),
            score: player.score(),
        }
    }
}

/// A single presentation step, executed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cue {
    /// Show a two-line message.
    Modal {
        /// Headline.
        title: String,
        /// Second line.
        subtitle: String,
    },
    /// Dismiss the current message.
    HideModal,
    /// Wait before the next cue.
    Pause(Duration),
    /// Draw a board snapshot.
    Board(Board),
    /// Draw the scoreboard; `active` is highlighted.
    Scoreboard {
        /// Round being played.
        round: u32,
        /// Both rows, X first.
        lines: [ScoreLine; 2],
        /// Player to move, if a round is being played.
        active: Option<Mark>,
    },
    /// Show the setup screen.
    Menu,
}

/// [`Presentation`] sink that records cues for later playback.
#[derive(Debug, Clone)]
pub struct Storyboard {
    pacing: PacingConfig,
    lines: Option<[ScoreLine; 2]>,
    round: u32,
    cues: Vec<Cue>,
}

impl Storyboard {
    /// Creates an empty storyboard.
    pub fn new(pacing: PacingConfig) -> Self {
        Self {
            pacing,
            lines: None,
            round: 1,
            cues: Vec::new(),
        }
    }

    /// Takes the cues recorded so far.
    pub fn drain(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }

    fn modal(&mut self, title: String, subtitle: String, hold: Duration) {
        self.cues.push(Cue::Modal { title, subtitle });
        self.cues.push(Cue::Pause(hold));
        self.cues.push(Cue::HideModal);
    }

    fn update_scores(&mut self, scores: Scores) {
        if let Some(lines) = self.lines.as_mut() {
            for line in lines.iter_mut() {
                line.score = scores.of(line.mark);
            }
        }
    }

    fn scoreboard(&mut self, active: Option<Mark>) {
        if let Some(lines) = self.lines.clone() {
            self.cues.push(Cue::Scoreboard {
                round: self.round,
                lines,
                active,
            });
        }
    }
}

impl Presentation for Storyboard {
    #[instrument(skip(self, players))]
    fn on_match_started(&mut self, players: &[Player; 2], round: u32) {
        self.lines = Some([ScoreLine::from(&players[0]), ScoreLine::from(&players[1])]);
        self.round = round;
        self.modal(
            format!("Are you ready, {}?", players[0].name()),
            format!("PS: You play as \"{}\", too :)", players[1].name()),
            self.pacing.ready(),
        );
        self.cues.push(Cue::Pause(self.pacing.reveal()));
    }

    fn on_turn_changed(&mut self, active: &Player, round: u32) {
        self.round = round;
        self.scoreboard(Some(active.mark()));
    }

    #[instrument(skip(self, resolution), fields(round = resolution.round))]
    fn on_round_resolved(&mut self, resolution: &RoundResolution) {
        self.update_scores(resolution.scores);
        self.cues.push(Cue::Board(resolution.final_board.clone()));
        match &resolution.kind {
            ResolutionKind::Win { winner, loser, .. } => self.modal(
                format!("{} takes round #{}!", winner.name(), resolution.round),
                format!("{} begins round #{}", loser.name(), resolution.next_round),
                self.pacing.round_win(),
            ),
            ResolutionKind::Tie => self.modal(
                "It's a tie!".to_string(),
                format!("Repeating Round #{}", resolution.round),
                self.pacing.tie(),
            ),
        }
        debug!(cues = self.cues.len(), "Round cues recorded");
    }

    #[instrument(skip(self, winner, final_board))]
    fn on_match_complete(&mut self, winner: &Player, scores: Scores, final_board: &Board) {
        self.update_scores(scores);
        self.cues.push(Cue::Board(final_board.clone()));
        self.scoreboard(None);
        self.modal(
            format!("{} wins the game!!", winner.name()),
            "Thanks for playing :)".to_string(),
            self.pacing.match_over(),
        );
    }

    fn on_menu_requested(&mut self) {
        self.lines = None;
        self.round = 1;
        self.cues.push(Cue::Menu);
    }
}
