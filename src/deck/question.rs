use serde::Deserialize;
use std::fmt;

use crate::deck::ChapterKey;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RawQuestion {
    pub q: String,
    pub a: String,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Status {
    Unseen,
    Correct,
    Wrong,
}

impl Default for Status {
    fn default() -> Self {
        Status::Unseen
    }
}

impl Status {
    pub fn is_graded(self) -> bool {
        self != Status::Unseen
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Unseen => "unseen",
            Status::Correct => "correct",
            Status::Wrong => "wrong",
        };
        f.write_str(name)
    }
}

/// A verdict the user can give a card. Grading never sets a card back to unseen.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Grade {
    Correct,
    Wrong,
}

impl From<Grade> for Status {
    fn from(grade: Grade) -> Self {
        match grade {
            Grade::Correct => Status::Correct,
            Grade::Wrong => Status::Wrong,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub question: String,
    pub answer: String,
    status: Status,
    origin: ChapterKey,
}

impl Question {
    pub fn new(raw_question: RawQuestion, origin: ChapterKey) -> Self {
        Question {
            question: raw_question.q,
            answer: raw_question.a,
            status: Status::Unseen,
            origin,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn origin(&self) -> &ChapterKey {
        &self.origin
    }

    pub(crate) fn set_status(&mut self, status: Status) {
        self.status = status;
    }
}
