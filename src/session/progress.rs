use crate::deck::{Deck, Progress};
use crate::session::playlist::Playlist;
use crate::session::selection::Selection;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SessionSummary {
    pub chapter_count: usize,
    pub question_count: usize,
}

pub fn session_summary(selection: &Selection, playlist: &Playlist) -> SessionSummary {
    SessionSummary {
        chapter_count: selection.len(),
        question_count: playlist.len(),
    }
}

pub fn playlist_progress(deck: &Deck, playlist: &Playlist) -> Progress {
    Progress {
        graded: playlist
            .iter()
            .filter_map(|id| deck.get(id))
            .filter(|q| q.status().is_graded())
            .count(),
        total: playlist.len(),
    }
}
