use itertools::Itertools;
use std::collections::HashSet;

use crate::deck::{ChapterKey, Deck};

/// Chapters currently checked by the user.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    chapters: HashSet<ChapterKey>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.chapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chapters.is_empty()
    }

    pub fn contains(&self, key: &ChapterKey) -> bool {
        self.chapters.contains(key)
    }

    /// Returns whether the selection changed.
    pub fn set(&mut self, key: &ChapterKey, selected: bool) -> bool {
        if selected {
            self.chapters.insert(key.clone())
        } else {
            self.chapters.remove(key)
        }
    }

    pub fn clear(&mut self) {
        self.chapters.clear();
    }

    /// Selected chapters, in deck order.
    pub fn ordered(&self, deck: &Deck) -> Vec<ChapterKey> {
        deck.chapter_keys()
            .filter(|key| self.contains(key))
            .collect_vec()
    }
}
