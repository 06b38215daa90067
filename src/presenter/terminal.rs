//! Plays cue lists back on a terminal.

use super::cues::{Cue, ScoreLine};
use crate::games::tictactoe::{Board, Mark, Square};
use crossterm::style::Stylize;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument};

/// Writes cues, boards and prompts to an async writer.
#[derive(Debug)]
pub struct TerminalPresenter<W> {
    out: W,
    colored: bool,
}

impl<W: AsyncWrite + Unpin> TerminalPresenter<W> {
    /// Creates a presenter that colours marks with ANSI escapes.
    pub fn new(out: W) -> Self {
        Self { out, colored: true }
    }

    /// Creates a presenter that writes plain text only.
    pub fn plain(out: W) -> Self {
        Self {
            out,
            colored: false,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Executes one cue.
    #[instrument(skip(self))]
    pub async fn perform(&mut self, cue: &Cue) -> std::io::Result<()> {
        match cue {
            Cue::Modal { title, subtitle } => {
                let text = if self.colored {
                    format!("\n  {}\n  {}\n", title.as_str().bold(), subtitle)
                } else {
                    format!("\n  {}\n  {}\n", title, subtitle)
                };
                self.write(&text).await
            }
            Cue::HideModal => self.write("\n").await,
            Cue::Pause(duration) => {
                if !duration.is_zero() {
                    debug!(?duration, "Pausing");
                    tokio::time::sleep(*duration).await;
                }
                Ok(())
            }
            Cue::Board(board) => self.show_board(board).await,
            Cue::Scoreboard {
                round,
                lines,
                active,
            } => {
                let text = self.scoreboard(*round, lines, *active);
                self.write(&text).await
            }
            Cue::Menu => self.write("\n=== Tic-Tac-Toe ===\n").await,
        }
    }

    /// Draws a board; empty squares show the number that selects them.
    pub async fn show_board(&mut self, board: &Board) -> std::io::Result<()> {
        let text = self.board(board);
        self.write(&text).await
    }

    /// Writes a line of text.
    pub async fn say(&mut self, line: &str) -> std::io::Result<()> {
        self.write(&format!("{}\n", line)).await
    }

    /// Writes a prompt without a trailing newline.
    pub async fn prompt(&mut self, text: &str) -> std::io::Result<()> {
        self.write(text).await
    }

    async fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.flush().await
    }

    fn mark(&self, mark: Mark) -> String {
        match (self.colored, mark) {
            (false, mark) => mark.to_string(),
            (true, Mark::X) => "X".cyan().bold().to_string(),
            (true, Mark::O) => "O".magenta().bold().to_string(),
        }
    }

    fn board(&self, board: &Board) -> String {
        let cells = board.cells();
        let mut text = String::from("\n");
        for row in 0..3 {
            let symbols: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    match cells[index] {
                        Square::Empty => (index + 1).to_string(),
                        Square::Occupied(mark) => self.mark(mark),
                    }
                })
                .collect();
            text.push_str(&format!(" {}\n", symbols.join("|")));
            if row < 2 {
                text.push_str(" -+-+-\n");
            }
        }
        text
    }

    fn scoreboard(&self, round: u32, lines: &[ScoreLine; 2], active: Option<Mark>) -> String {
        let entries: Vec<String> = lines
            .iter()
            .map(|line| {
                let entry = format!("{} {}: {}", line.name, self.mark(line.mark), line.score);
                match (active == Some(line.mark), self.colored) {
                    (true, true) => format!("> {}", entry.underlined()),
                    (true, false) => format!("> {}", entry),
                    (false, _) => format!("  {}", entry),
                }
            })
            .collect();
        format!("Round #{}  {}\n", round, entries.join("   "))
    }
}
