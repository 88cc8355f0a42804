use log::{debug, warn};

use crate::deck::{Deck, Grade};
use crate::session::cursor::{Cursor, Step};
use crate::session::playlist::Playlist;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GradeOutcome {
    /// Nothing to grade.
    Ignored,
    Advanced { graded: usize, next: usize },
    /// The last card was graded. The cursor stays on it.
    EndReached { graded: usize },
}

pub fn grade(deck: &mut Deck, playlist: &Playlist, cursor: &mut Cursor, grade: Grade) -> GradeOutcome {
    let graded = match cursor.index() {
        Some(index) => index,
        None => {
            warn!("Ignoring {:?} grade: the playlist is empty", grade);
            return GradeOutcome::Ignored;
        }
    };

    let question = match playlist.get(graded).and_then(|id| deck.set_status(id, grade.into())) {
        Some(question) => question,
        None => {
            warn!("Ignoring {:?} grade: card {} is not in the deck", grade, graded);
            return GradeOutcome::Ignored;
        }
    };
    debug!("Graded card {} ({}) as {}", graded, question.origin(), question.status());

    match cursor.advance(playlist.len()) {
        Step::Moved(next) => GradeOutcome::Advanced { graded, next },
        Step::Stayed => GradeOutcome::EndReached { graded },
    }
}
