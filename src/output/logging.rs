use itertools::Itertools;
use log::{info, warn};

use crate::deck::{ChapterKey, Deck, Progress, Status};
use crate::error::ParseError;
use crate::output::StudyOutput;
use crate::session::{Cursor, Face, Playlist, SessionSummary};

/// Reports every notification through the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogOutput;

impl StudyOutput for LogOutput {
    fn deck_changed(&self, deck: &Deck) {
        info!(
            "Deck loaded: {} subjects found ({})",
            deck.subject_count(),
            deck.subjects().join(", ")
        );
    }

    fn import_failed(&self, error: &ParseError) {
        warn!("Deck import failed: {}", error);
    }

    fn playlist_changed(&self, playlist: &Playlist, cursor: Cursor, summary: SessionSummary) {
        info!(
            "Playlist changed: {} chapters, {} questions, cursor {:?}",
            summary.chapter_count,
            playlist.len(),
            cursor
        );
    }

    fn cursor_moved(&self, cursor: Cursor) {
        match cursor.index() {
            Some(index) => info!("Showing card {}", index + 1),
            None => info!("No card to show"),
        }
    }

    fn card_flipped(&self, face: Face) {
        info!("Card flipped to {:?}", face);
    }

    fn card_graded(&self, index: usize, status: Status) {
        info!("Card {} marked {}", index + 1, status);
    }

    fn chapter_progress_changed(&self, chapter: &ChapterKey, progress: Progress) {
        info!("{} ({})", chapter, progress);
    }

    fn session_end(&self) {
        info!("Reached the end of the current study playlist");
    }
}
