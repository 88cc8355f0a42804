use indexmap::IndexMap;
use serde_json::Value;
use std::ops::Range;

use crate::error::ParseError;

mod chapter;
pub mod question;

pub use chapter::{ChapterKey, Progress};
pub use question::{Grade, Question, RawQuestion, Status};


type RawDeck = IndexMap<String, IndexMap<String, Vec<RawQuestion>>>;

/// Stable handle to a question of the deck it was issued by.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct CardId(usize);

/// The imported question bank.
///
/// All questions live in one vector, each chapter owning a contiguous range of it.
/// Subjects and chapters keep the order in which they appear in the source data.
#[derive(Debug, Default)]
pub struct Deck {
    questions: Vec<Question>,
    subjects: IndexMap<String, IndexMap<String, Range<usize>>>,
}

impl Deck {
    pub fn from_json(source: &str) -> Result<Deck, ParseError> {
        let raw_deck: RawDeck = serde_json::from_str(source)?;
        Ok(raw_deck.into())
    }

    pub fn from_value(value: Value) -> Result<Deck, ParseError> {
        let raw_deck: RawDeck = serde_json::from_value(value)?;
        Ok(raw_deck.into())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn subject_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> + '_ {
        self.subjects.keys().map(String::as_str)
    }

    pub fn chapters<'a>(&'a self, subject: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.subjects
            .get(subject)
            .into_iter()
            .flat_map(|chapters| chapters.keys().map(String::as_str))
    }

    /// Every chapter of the deck, subject by subject.
    pub fn chapter_keys(&self) -> impl Iterator<Item = ChapterKey> + '_ {
        self.subjects.iter().flat_map(|(subject, chapters)| {
            chapters
                .keys()
                .map(move |chapter| ChapterKey::new(subject.as_str(), chapter.as_str()))
        })
    }

    pub fn contains_chapter(&self, key: &ChapterKey) -> bool {
        self.range(&key.subject, &key.chapter).is_some()
    }

    /// Questions of a chapter in deck order. Empty for an unknown chapter.
    pub fn chapter(&self, subject: &str, chapter: &str) -> &[Question] {
        match self.range(subject, chapter) {
            Some(range) => &self.questions[range],
            None => &[],
        }
    }

    pub fn chapter_ids(&self, key: &ChapterKey) -> impl Iterator<Item = CardId> {
        self.range(&key.subject, &key.chapter)
            .unwrap_or(0..0)
            .map(CardId)
    }

    pub fn chapter_progress(&self, subject: &str, chapter: &str) -> Progress {
        let questions = self.chapter(subject, chapter);
        Progress {
            graded: questions.iter().filter(|q| q.status().is_graded()).count(),
            total: questions.len(),
        }
    }

    pub fn get(&self, id: CardId) -> Option<&Question> {
        self.questions.get(id.0)
    }

    pub(crate) fn set_status(&mut self, id: CardId, status: Status) -> Option<&Question> {
        let question = self.questions.get_mut(id.0)?;
        question.set_status(status);
        Some(question)
    }

    fn range(&self, subject: &str, chapter: &str) -> Option<Range<usize>> {
        self.subjects.get(subject)?.get(chapter).cloned()
    }
}

impl From<RawDeck> for Deck {
    fn from(raw_deck: RawDeck) -> Self {
        let mut questions = Vec::new();
        let mut subjects = IndexMap::with_capacity(raw_deck.len());

        for (subject, raw_chapters) in raw_deck {
            let mut chapters = IndexMap::with_capacity(raw_chapters.len());
            for (chapter, raw_questions) in raw_chapters {
                let start = questions.len();
                let origin = ChapterKey::new(subject.as_str(), chapter.as_str());
                questions.extend(
                    raw_questions
                        .into_iter()
                        .map(|raw_question| Question::new(raw_question, origin.clone())),
                );
                chapters.insert(chapter, start..questions.len());
            }
            subjects.insert(subject, chapters);
        }

        Deck {
            questions,
            subjects,
        }
    }
}
