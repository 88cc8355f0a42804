use rand::seq::SliceRandom;
use rand::Rng;

use crate::deck::{CardId, ChapterKey, Deck};

#[cfg(test)]
mod tests;

/// Ordered working set of cards. Entries point into the deck they were built from.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Playlist {
    cards: Vec<CardId>,
}

impl Playlist {
    /// Concatenates the cards of each chapter, in the order the chapters are given.
    pub fn build<'a, I>(deck: &Deck, chapters: I) -> Playlist
    where
        I: IntoIterator<Item = &'a ChapterKey>,
    {
        let cards = chapters
            .into_iter()
            .flat_map(|key| deck.chapter_ids(key))
            .collect();
        Playlist { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<CardId> {
        self.cards.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::thread_rng());
    }

    /// Uniform in-place permutation (Fisher-Yates).
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }
}
