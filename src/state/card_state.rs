//! Face-up row, draw pile and discards.
//!
//! `CardState` is authoritative. `PublicCardState` is what every player may
//! see: the face-up row in full, but only the sizes of the deck and the
//! discard pile.

use serde::Serialize;

use crate::cards::Card;
use crate::core::constants::FACE_UP_CARDS_COUNT;
use crate::core::{Deck, GameRng, Multiset};

/// Redacted card state, visible to every player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PublicCardState {
    face_up: [Card; FACE_UP_CARDS_COUNT],
    deck_size: usize,
    discards_size: usize,
}

impl PublicCardState {
    #[must_use]
    pub fn new(face_up: [Card; FACE_UP_CARDS_COUNT], deck_size: usize, discards_size: usize) -> Self {
        Self {
            face_up,
            deck_size,
            discards_size,
        }
    }

    /// The face-up row, slot 0 first.
    #[must_use]
    pub fn face_up_cards(&self) -> &[Card; FACE_UP_CARDS_COUNT] {
        &self.face_up
    }

    /// The face-up card in `slot`.
    ///
    /// Panics if `slot` is not a face-up slot.
    #[must_use]
    pub fn face_up_card(&self, slot: usize) -> Card {
        assert!(slot < FACE_UP_CARDS_COUNT, "Face-up slot {} out of range", slot);
        self.face_up[slot]
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    #[must_use]
    pub fn is_deck_empty(&self) -> bool {
        self.deck_size == 0
    }

    #[must_use]
    pub fn discards_size(&self) -> usize {
        self.discards_size
    }

    /// Cards in the deck plus cards in the discard pile.
    #[must_use]
    pub fn total_size(&self) -> usize {
        self.deck_size + self.discards_size
    }
}

/// Authoritative card state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardState {
    face_up: [Card; FACE_UP_CARDS_COUNT],
    deck: Deck<Card>,
    discards: Multiset<Card>,
}

impl CardState {
    /// Deal the face-up row off the top of `deck`; the rest stays hidden.
    ///
    /// Panics if `deck` holds fewer than five cards.
    #[must_use]
    pub fn of(deck: &Deck<Card>) -> Self {
        assert!(
            deck.size() >= FACE_UP_CARDS_COUNT,
            "A card state needs at least {} cards, got {}",
            FACE_UP_CARDS_COUNT,
            deck.size()
        );
        let mut face_up = [Card::Locomotive; FACE_UP_CARDS_COUNT];
        let mut rest = deck.clone();
        for slot in &mut face_up {
            *slot = *rest.top_card();
            rest = rest.without_top_card();
        }
        Self {
            face_up,
            deck: rest,
            discards: Multiset::new(),
        }
    }

    /// Project to what every player may see.
    #[must_use]
    pub fn redact(&self) -> PublicCardState {
        PublicCardState::new(self.face_up, self.deck.size(), self.discards.size())
    }

    #[must_use]
    pub fn face_up_cards(&self) -> &[Card; FACE_UP_CARDS_COUNT] {
        &self.face_up
    }

    /// See [`PublicCardState::face_up_card`].
    #[must_use]
    pub fn face_up_card(&self, slot: usize) -> Card {
        assert!(slot < FACE_UP_CARDS_COUNT, "Face-up slot {} out of range", slot);
        self.face_up[slot]
    }

    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.size()
    }

    #[must_use]
    pub fn is_deck_empty(&self) -> bool {
        self.deck.is_empty()
    }

    #[must_use]
    pub fn discards(&self) -> &Multiset<Card> {
        &self.discards
    }

    #[must_use]
    pub fn discards_size(&self) -> usize {
        self.discards.size()
    }

    /// Replace the face-up card in `slot` with the top of the deck.
    ///
    /// The replaced card leaves the card state entirely (it goes to the
    /// drawing player); the discard pile is untouched.
    ///
    /// Panics if the deck is empty or `slot` is out of range.
    #[must_use]
    pub fn with_drawn_face_up_card(&self, slot: usize) -> Self {
        assert!(slot < FACE_UP_CARDS_COUNT, "Face-up slot {} out of range", slot);
        assert!(!self.deck.is_empty(), "Cannot refill a face-up slot from an empty deck");
        let mut face_up = self.face_up;
        face_up[slot] = *self.deck.top_card();
        Self {
            face_up,
            deck: self.deck.without_top_card(),
            discards: self.discards.clone(),
        }
    }

    /// Panics if the deck is empty.
    #[must_use]
    pub fn top_deck_card(&self) -> Card {
        *self.deck.top_card()
    }

    /// Panics if the deck is empty.
    #[must_use]
    pub fn without_top_deck_card(&self) -> Self {
        Self {
            face_up: self.face_up,
            deck: self.deck.without_top_card(),
            discards: self.discards.clone(),
        }
    }

    /// Shuffle the discards into a fresh deck.
    ///
    /// Panics unless the deck is empty.
    #[must_use]
    pub fn with_deck_recreated_from_discards(&self, rng: &mut GameRng) -> Self {
        assert!(self.deck.is_empty(), "Cannot recreate a deck that still holds {} cards", self.deck.size());
        Self {
            face_up: self.face_up,
            deck: Deck::of(&self.discards, rng),
            discards: Multiset::new(),
        }
    }

    #[must_use]
    pub fn with_more_discarded_cards(&self, cards: &Multiset<Card>) -> Self {
        Self {
            face_up: self.face_up,
            deck: self.deck.clone(),
            discards: self.discards.union(cards),
        }
    }
}
