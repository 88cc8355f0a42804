use log::{debug, info, warn};
use serde_json::Value;

use crate::deck::{ChapterKey, Deck, Grade, Progress, Status};
use crate::error::{ParseError, Result};
use crate::output::StudyOutput;

mod cursor;
mod grading;
mod playlist;
mod progress;
mod selection;
mod settings;

pub use self::cursor::{Cursor, Step};
pub use self::grading::GradeOutcome;
pub use self::playlist::Playlist;
pub use self::progress::SessionSummary;
pub use self::selection::Selection;
pub use self::settings::Settings;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Face {
    Question,
    Answer,
}

impl Face {
    fn flipped(self) -> Face {
        match self {
            Face::Question => Face::Answer,
            Face::Answer => Face::Question,
        }
    }
}

/// Everything needed to render the card under the cursor.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CardView<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub origin: &'a ChapterKey,
    pub status: Status,
    pub face: Face,
    /// 1-based.
    pub position: usize,
    pub total: usize,
    pub can_retreat: bool,
    pub can_advance: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Tile {
    pub index: usize,
    pub status: Status,
    pub active: bool,
}

/// A study session: the imported deck plus the user's selection, playlist and position in it.
pub struct Session<O: StudyOutput> {
    deck: Deck,
    selection: Selection,
    playlist: Playlist,
    cursor: Cursor,
    face: Face,
    settings: Settings,
    output: O,
}

impl<O: StudyOutput> Session<O> {
    pub fn new(output: O, settings: Settings) -> Self {
        Session {
            deck: Deck::default(),
            selection: Selection::default(),
            playlist: Playlist::default(),
            cursor: Cursor::Inactive,
            face: Face::Question,
            settings,
            output,
        }
    }

    pub fn import_json(&mut self, source: &str) -> Result<()> {
        let deck = Deck::from_json(source);
        self.import(deck)
    }

    pub fn import_value(&mut self, value: Value) -> Result<()> {
        let deck = Deck::from_value(value);
        self.import(deck)
    }

    fn import(&mut self, deck: std::result::Result<Deck, ParseError>) -> Result<()> {
        match deck {
            Ok(deck) => {
                info!(
                    "Imported deck with {} subjects and {} questions",
                    deck.subject_count(),
                    deck.len()
                );
                self.deck = deck;
                self.selection.clear();
                self.playlist = Playlist::default();
                self.reset_position();
                self.output.deck_changed(&self.deck);
                self.notify_playlist_changed();
                Ok(())
            }
            Err(e) => {
                warn!("Rejected deck import: {}", e);
                self.output.import_failed(&e);
                Err(e.into())
            }
        }
    }

    /// Returns whether the selection changed. Unknown chapters are ignored.
    pub fn set_chapter_selected(&mut self, key: &ChapterKey, selected: bool) -> bool {
        if !self.deck.contains_chapter(key) {
            warn!("Ignoring selection of unknown chapter: {}", key);
            return false;
        }
        if !self.selection.set(key, selected) {
            return false;
        }
        self.rebuild_playlist(selected);
        true
    }

    /// Returns whether the chapter is selected afterwards.
    pub fn toggle_chapter(&mut self, key: &ChapterKey) -> bool {
        let selected = !self.selection.contains(key);
        self.set_chapter_selected(key, selected);
        self.selection.contains(key)
    }

    /// Auto-start only applies to a newly selected sole chapter while the user is still on the first card.
    fn rebuild_playlist(&mut self, selected: bool) {
        let was_at_start = matches!(self.cursor, Cursor::Inactive | Cursor::Active(0));
        let chapters = self.selection.ordered(&self.deck);
        self.playlist = Playlist::build(&self.deck, &chapters);
        debug!(
            "Rebuilt playlist from {} chapters: {} cards",
            chapters.len(),
            self.playlist.len()
        );

        let single_chapter = self.selection.len() == 1;
        let auto_start = self.settings.auto_start && selected && single_chapter && was_at_start;
        if auto_start && !self.playlist.is_empty() {
            self.start_session();
        } else {
            self.reset_position();
            self.notify_playlist_changed();
        }
    }

    /// Shuffles the playlist and goes back to its first card. No-op on an empty playlist.
    pub fn start_session(&mut self) {
        if self.playlist.is_empty() {
            return;
        }
        if self.settings.shuffle_on_start {
            self.playlist.shuffle();
        }
        self.reset_position();
        info!("Study session started with {} cards", self.playlist.len());
        self.notify_playlist_changed();
    }

    pub fn advance(&mut self) -> Step {
        let step = self.cursor.advance(self.playlist.len());
        self.on_step(step)
    }

    pub fn retreat(&mut self) -> Step {
        let step = self.cursor.retreat();
        self.on_step(step)
    }

    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        self.cursor.jump_to(index, self.playlist.len())?;
        self.face = Face::Question;
        self.output.cursor_moved(self.cursor);
        Ok(())
    }

    fn on_step(&mut self, step: Step) -> Step {
        if let Step::Moved(index) = step {
            debug!("Moved to card {}", index);
            self.face = Face::Question;
            self.output.cursor_moved(self.cursor);
        }
        step
    }

    /// Turns the current card over. Returns the face now showing, if there is a card.
    pub fn flip(&mut self) -> Option<Face> {
        if !self.cursor.is_active() {
            return None;
        }
        self.face = self.face.flipped();
        self.output.card_flipped(self.face);
        Some(self.face)
    }

    pub fn grade(&mut self, grade: Grade) -> GradeOutcome {
        let outcome = grading::grade(&mut self.deck, &self.playlist, &mut self.cursor, grade);
        match outcome {
            GradeOutcome::Ignored => (),
            GradeOutcome::Advanced { graded, next: _ } => {
                self.report_grade(graded);
                self.face = Face::Question;
                self.output.cursor_moved(self.cursor);
            }
            GradeOutcome::EndReached { graded } => {
                self.report_grade(graded);
                info!("Reached the end of the playlist");
                self.output.session_end();
            }
        }
        outcome
    }

    fn report_grade(&self, index: usize) {
        let question = match self.playlist.get(index).and_then(|id| self.deck.get(id)) {
            Some(question) => question,
            None => return,
        };
        self.output.card_graded(index, question.status());
        let origin = question.origin();
        let progress = self.deck.chapter_progress(&origin.subject, &origin.chapter);
        self.output.chapter_progress_changed(origin, progress);
    }

    fn reset_position(&mut self) {
        self.cursor = Cursor::for_playlist(self.playlist.len());
        self.face = Face::Question;
    }

    fn notify_playlist_changed(&self) {
        self.output
            .playlist_changed(&self.playlist, self.cursor, self.summary());
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, key: &ChapterKey) -> bool {
        self.selection.contains(key)
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn face(&self) -> Face {
        self.face
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn summary(&self) -> SessionSummary {
        progress::session_summary(&self.selection, &self.playlist)
    }

    pub fn chapter_progress(&self, subject: &str, chapter: &str) -> Progress {
        self.deck.chapter_progress(subject, chapter)
    }

    pub fn playlist_progress(&self) -> Progress {
        progress::playlist_progress(&self.deck, &self.playlist)
    }

    pub fn current_card(&self) -> Option<CardView<'_>> {
        let index = self.cursor.index()?;
        let question = self.deck.get(self.playlist.get(index)?)?;
        Some(CardView {
            question: &question.question,
            answer: &question.answer,
            origin: question.origin(),
            status: question.status(),
            face: self.face,
            position: index + 1,
            total: self.playlist.len(),
            can_retreat: self.cursor.can_retreat(),
            can_advance: self.cursor.can_advance(self.playlist.len()),
        })
    }

    /// One navigator tile per playlist entry.
    pub fn tiles(&self) -> Vec<Tile> {
        let active = self.cursor.index();
        self.playlist
            .iter()
            .enumerate()
            .map(|(index, id)| Tile {
                index,
                status: self
                    .deck
                    .get(id)
                    .map(|q| q.status())
                    .unwrap_or_default(),
                active: active == Some(index),
            })
            .collect()
    }
}
