//! Persistent draw pile.
//!
//! A `Deck` is an immutable sequence whose top is index 0. Every operation
//! returns a new deck; the receiver is left untouched. Backed by
//! `im::Vector`, so dropping the top `n` cards shares structure with the
//! original instead of copying it.

use im::Vector;

use super::multiset::Multiset;
use super::rng::GameRng;

/// Immutable, ordered draw pile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck<T: Ord + Clone> {
    cards: Vector<T>,
}

impl<T: Ord + Clone> Deck<T> {
    /// Build a deck holding a uniformly shuffled permutation of `cards`.
    #[must_use]
    pub fn of(cards: &Multiset<T>, rng: &mut GameRng) -> Self {
        let mut shuffled = cards.to_vec();
        rng.shuffle(&mut shuffled);
        Self {
            cards: shuffled.into_iter().collect(),
        }
    }

    /// Number of cards left.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck holds no card.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The card on top of the deck.
    ///
    /// Panics if the deck is empty.
    #[must_use]
    pub fn top_card(&self) -> &T {
        assert!(!self.is_empty(), "Cannot look at the top of an empty deck");
        &self.cards[0]
    }

    /// The deck without its top card.
    ///
    /// Panics if the deck is empty.
    #[must_use]
    pub fn without_top_card(&self) -> Self {
        assert!(!self.is_empty(), "Cannot remove the top of an empty deck");
        self.without_top_cards(1)
    }

    /// The `count` top cards, as a multiset.
    ///
    /// Panics unless `count <= size()`.
    #[must_use]
    pub fn top_cards(&self, count: usize) -> Multiset<T> {
        self.check_count(count);
        self.cards.iter().take(count).cloned().collect()
    }

    /// The deck without its `count` top cards; the rest keeps its order.
    ///
    /// Panics unless `count <= size()`.
    #[must_use]
    pub fn without_top_cards(&self, count: usize) -> Self {
        self.check_count(count);
        Self {
            cards: self.cards.skip(count),
        }
    }

    /// Every card in the deck, as a multiset.
    #[must_use]
    pub fn contents(&self) -> Multiset<T> {
        self.cards.iter().cloned().collect()
    }

    fn check_count(&self, count: usize) {
        assert!(
            count <= self.size(),
            "Cannot take {} cards from a deck of {}",
            count,
            self.size()
        );
    }
}
