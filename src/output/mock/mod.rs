use parking_lot::RwLock;
use std::sync::Arc;

use crate::deck::{ChapterKey, Deck, Progress, Status};
use crate::error::ParseError;
use crate::output::StudyOutput;
use crate::session::{Cursor, Face, Playlist, SessionSummary};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    DeckChanged { subject_count: usize, question_count: usize },
    ImportFailed,
    PlaylistChanged { len: usize, cursor: Cursor, summary: SessionSummary },
    CursorMoved(Cursor),
    CardFlipped(Face),
    CardGraded(usize, Status),
    ChapterProgressChanged(ChapterKey, Progress),
    SessionEnd,
}

#[derive(Clone, Default)]
pub struct MockOutput {
    events: Arc<RwLock<Vec<Event>>>,
}

impl MockOutput {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn flush(&self) -> Vec<Event> {
        std::mem::replace(&mut *self.events.write(), Vec::new())
    }

    pub fn contains(&self, event: &Event) -> bool {
        self.events.read().iter().any(|e| e == event)
    }

    fn push(&self, event: Event) {
        self.events.write().push(event);
    }
}

impl StudyOutput for MockOutput {
    fn deck_changed(&self, deck: &Deck) {
        self.push(Event::DeckChanged {
            subject_count: deck.subject_count(),
            question_count: deck.len(),
        });
    }

    fn import_failed(&self, _error: &ParseError) {
        self.push(Event::ImportFailed);
    }

    fn playlist_changed(&self, playlist: &Playlist, cursor: Cursor, summary: SessionSummary) {
        self.push(Event::PlaylistChanged {
            len: playlist.len(),
            cursor,
            summary,
        });
    }

    fn cursor_moved(&self, cursor: Cursor) {
        self.push(Event::CursorMoved(cursor));
    }

    fn card_flipped(&self, face: Face) {
        self.push(Event::CardFlipped(face));
    }

    fn card_graded(&self, index: usize, status: Status) {
        self.push(Event::CardGraded(index, status));
    }

    fn chapter_progress_changed(&self, chapter: &ChapterKey, progress: Progress) {
        self.push(Event::ChapterProgressChanged(chapter.clone(), progress));
    }

    fn session_end(&self) {
        self.push(Event::SessionEnd);
    }
}
