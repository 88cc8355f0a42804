use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use unidecode::unidecode;

lazy_static! {
    static ref FORBIDDEN_SLUG_CHARACTERS_REGEX: Regex = Regex::new("[^a-zA-Z0-9-]").unwrap();
}

/// Location of a chapter in the deck. Also serves as the origin of every question in it.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ChapterKey {
    pub subject: String,
    pub chapter: String,
}

impl ChapterKey {
    pub fn new<S: Into<String>, C: Into<String>>(subject: S, chapter: C) -> Self {
        ChapterKey {
            subject: subject.into(),
            chapter: chapter.into(),
        }
    }

    /// Identifier safe to use as a DOM element id.
    pub fn slug(&self) -> String {
        let name = unidecode(&format!("{}-{}", self.subject, self.chapter));
        FORBIDDEN_SLUG_CHARACTERS_REGEX
            .replace_all(&name, "")
            .into()
    }
}

impl fmt::Display for ChapterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.subject, self.chapter)
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Progress {
    pub graded: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.graded == self.total
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.graded, self.total)
    }
}
