//! In-memory flashcard study sessions.
//!
//! A [`Session`] owns an imported [`Deck`] of questions grouped by subject and chapter.
//! Selecting chapters builds a [`Playlist`] of cards to study, which can be shuffled,
//! navigated with a [`Cursor`] and graded. Every change is reported to a [`StudyOutput`]
//! so a presentation layer can re-render without polling.

pub mod commands;
pub mod deck;
pub mod error;
pub mod output;
pub mod session;

pub use crate::commands::{dispatch, handle, Command};
pub use crate::deck::{CardId, ChapterKey, Deck, Grade, Progress, Question, Status};
pub use crate::error::{Error, ParseError, Result};
pub use crate::output::{LogOutput, NullOutput, StudyOutput};
pub use crate::session::{
    CardView, Cursor, Face, GradeOutcome, Playlist, Selection, Session, SessionSummary, Settings,
    Step, Tile,
};
