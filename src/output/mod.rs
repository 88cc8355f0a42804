use crate::deck::{ChapterKey, Deck, Progress, Status};
use crate::error::ParseError;
use crate::session::{Cursor, Face, Playlist, SessionSummary};

mod logging;
#[cfg(test)]
pub mod mock;

pub use self::logging::LogOutput;

/// Receives every change the presentation layer has to re-render.
pub trait StudyOutput {
    /// A new deck replaced the previous one. Selection and playlist were reset with it.
    fn deck_changed(&self, deck: &Deck);

    /// The import was rejected. The previous deck is still in place.
    fn import_failed(&self, error: &ParseError);

    fn playlist_changed(&self, playlist: &Playlist, cursor: Cursor, summary: SessionSummary);

    fn cursor_moved(&self, cursor: Cursor);

    fn card_flipped(&self, face: Face);

    fn card_graded(&self, index: usize, status: Status);

    fn chapter_progress_changed(&self, chapter: &ChapterKey, progress: Progress);

    /// Grading went past the last card of the playlist.
    fn session_end(&self);
}

/// Output for embedders that poll the session instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullOutput;

impl StudyOutput for NullOutput {
    fn deck_changed(&self, _deck: &Deck) {}
    fn import_failed(&self, _error: &ParseError) {}
    fn playlist_changed(&self, _playlist: &Playlist, _cursor: Cursor, _summary: SessionSummary) {}
    fn cursor_moved(&self, _cursor: Cursor) {}
    fn card_flipped(&self, _face: Face) {}
    fn card_graded(&self, _index: usize, _status: Status) {}
    fn chapter_progress_changed(&self, _chapter: &ChapterKey, _progress: Progress) {}
    fn session_end(&self) {}
}
