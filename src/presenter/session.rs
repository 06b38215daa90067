//! Interactive menu → match → menu loop over line-based input.

use super::cues::{Cue, Storyboard};
use super::terminal::TerminalPresenter;
use crate::config::AppConfig;
use crate::games::tictactoe::{Mark, MatchEngine, MatchEvent, MatchPhase, Position};
use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, BufReader, Lines};
use tracing::{debug, info, instrument};

/// What happened during a session.
#[derive(Debug)]
pub struct SessionReport<W> {
    /// Winners of the matches played to completion, in order.
    pub winners: Vec<String>,
    /// The writer the session printed to.
    pub out: W,
}

/// One terminal session: any number of matches until input ends or the
/// player quits.
pub struct Session<R, W> {
    engine: MatchEngine,
    storyboard: Storyboard,
    terminal: TerminalPresenter<W>,
    input: Lines<BufReader<R>>,
}

fn is_quit(line: &str) -> bool {
    matches!(line.trim().to_lowercase().as_str(), "q" | "quit" | "exit")
}

impl<R, W> Session<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a session from configuration, an input stream and a terminal.
    pub fn new(config: &AppConfig, input: R, terminal: TerminalPresenter<W>) -> Self {
        Self {
            engine: MatchEngine::with_settings(config.rules().clone()),
            storyboard: Storyboard::new(config.pacing().clone()),
            terminal,
            input: BufReader::new(input).lines(),
        }
    }

    /// Runs until the player quits or input is exhausted.
    ///
    /// `first_name`, when given, is used for the first match instead of
    /// asking at the menu. After a match an empty line at the menu starts a
    /// rematch under the previous name.
    #[instrument(skip(self))]
    pub async fn run(mut self, first_name: Option<String>) -> Result<SessionReport<W>> {
        let mut winners = Vec::new();
        let mut pending_name = first_name;
        let mut last_name: Option<String> = None;
        self.terminal.perform(&Cue::Menu).await?;

        'menu: loop {
            let name = match pending_name.take() {
                Some(name) => name,
                None => {
                    let prompt = match &last_name {
                        Some(last) => format!(
                            "Press Enter for a rematch as {}, type a new name, or 'quit': ",
                            last
                        ),
                        None => "Enter your name (or 'quit'): ".to_string(),
                    };
                    self.terminal.prompt(&prompt).await?;
                    match (self.next_line().await?, &last_name) {
                        (Some(line), Some(last)) if line.trim().is_empty() => last.clone(),
                        (Some(line), _) => line,
                        (None, _) => break,
                    }
                }
            };
            if is_quit(&name) {
                break;
            }

            match self.engine.start_match(&name) {
                Ok(events) => {
                    last_name = self
                        .engine
                        .player(Mark::X)
                        .map(|p| p.name().to_string());
                    self.present(events).await?
                }
                Err(err) => {
                    self.terminal.say(&err.to_string()).await?;
                    continue;
                }
            }

            while self.engine.phase() == MatchPhase::RoundInProgress {
                let Some(prompt) = self
                    .engine
                    .active_player()
                    .map(|p| format!("{} ({}), choose a square (1-9): ", p.name(), p.mark()))
                else {
                    break;
                };
                self.terminal.show_board(self.engine.board()).await?;
                self.terminal.prompt(&prompt).await?;

                let Some(line) = self.next_line().await? else {
                    break 'menu;
                };
                if is_quit(&line) {
                    break 'menu;
                }
                let Some(position) = Position::from_input(&line) else {
                    let hint = format!(
                        "'{}' is not a square; type 1-9 or a name like 'center'",
                        line.trim()
                    );
                    self.terminal.say(&hint).await?;
                    continue;
                };

                match self.engine.play_at(position) {
                    Ok(events) => self.present(events).await?,
                    Err(err) => self.terminal.say(&err.to_string()).await?,
                }
            }

            if let Some(winner) = self.engine.winner() {
                info!(winner = %winner.name(), "Match finished");
                winners.push(winner.name().to_string());
            }
            let events = self
                .engine
                .return_to_menu()
                .context("Match loop ended before the match was complete")?;
            self.present(events).await?;
        }

        info!(matches = winners.len(), "Session over");
        Ok(SessionReport {
            winners,
            out: self.terminal.into_inner(),
        })
    }

    async fn next_line(&mut self) -> Result<Option<String>> {
        let line = self.input.next_line().await.context("Failed to read input")?;
        debug!(?line, "Input");
        Ok(line)
    }

    async fn present(&mut self, events: Vec<MatchEvent>) -> Result<()> {
        for event in &events {
            event.dispatch(&mut self.storyboard);
        }
        for cue in self.storyboard.drain() {
            self.terminal.perform(&cue).await?;
        }
        Ok(())
    }
}
