//! Presentation adapter: turns engine events into terminal output.
//!
//! Pacing lives entirely here. The engine has already moved on to the next
//! round by the time a cue list is played back.

mod cues;
mod session;
mod terminal;

pub use cues::{Cue, ScoreLine, Storyboard};
pub use session::{Session, SessionReport};
pub use terminal::TerminalPresenter;
