//! Card and color value types.
//!
//! The declared order of both enums is significant: it is the natural
//! ordering used by multisets and the ordinal used on the wire.

use serde::{Deserialize, Serialize};

use crate::core::constants::{CAR_CARDS_COUNT, LOCOMOTIVE_CARDS_COUNT};
use crate::core::Multiset;

/// Color of a car card or of a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Violet,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    White,
}

impl Color {
    /// Every color, in declared order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Violet,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Orange,
        Color::Red,
        Color::White,
    ];

    /// Number of colors.
    pub const COUNT: usize = Self::ALL.len();
}

/// A train card: a colored car or the wildcard locomotive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Card {
    Black,
    Violet,
    Blue,
    Green,
    Yellow,
    Orange,
    Red,
    White,
    Locomotive,
}

impl Card {
    /// Every card kind, in declared order.
    pub const ALL: [Card; 9] = [
        Card::Black,
        Card::Violet,
        Card::Blue,
        Card::Green,
        Card::Yellow,
        Card::Orange,
        Card::Red,
        Card::White,
        Card::Locomotive,
    ];

    /// Number of card kinds.
    pub const COUNT: usize = Self::ALL.len();

    /// Car card kinds only (no locomotive).
    pub const CARS: [Card; 8] = [
        Card::Black,
        Card::Violet,
        Card::Blue,
        Card::Green,
        Card::Yellow,
        Card::Orange,
        Card::Red,
        Card::White,
    ];

    /// The car card of the given color.
    #[must_use]
    pub const fn of(color: Color) -> Card {
        match color {
            Color::Black => Card::Black,
            Color::Violet => Card::Violet,
            Color::Blue => Card::Blue,
            Color::Green => Card::Green,
            Color::Yellow => Card::Yellow,
            Color::Orange => Card::Orange,
            Color::Red => Card::Red,
            Color::White => Card::White,
        }
    }

    /// The color of a car card; `None` for the locomotive.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Card::Black => Some(Color::Black),
            Card::Violet => Some(Color::Violet),
            Card::Blue => Some(Color::Blue),
            Card::Green => Some(Color::Green),
            Card::Yellow => Some(Color::Yellow),
            Card::Orange => Some(Color::Orange),
            Card::Red => Some(Color::Red),
            Card::White => Some(Color::White),
            Card::Locomotive => None,
        }
    }

    /// Check if this card is the wildcard locomotive.
    #[must_use]
    pub const fn is_locomotive(self) -> bool {
        matches!(self, Card::Locomotive)
    }

    /// The full set of cards a match is played with.
    #[must_use]
    pub fn full_set() -> Multiset<Card> {
        let mut builder = Multiset::builder();
        for car in Card::CARS {
            builder.add_n(CAR_CARDS_COUNT, car);
        }
        builder.add_n(LOCOMOTIVE_CARDS_COUNT, Card::Locomotive);
        builder.build()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Card::Black => "black",
            Card::Violet => "violet",
            Card::Blue => "blue",
            Card::Green => "green",
            Card::Yellow => "yellow",
            Card::Orange => "orange",
            Card::Red => "red",
            Card::White => "white",
            Card::Locomotive => "locomotive",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_color_round_trip() {
        for color in Color::ALL {
            assert_eq!(Card::of(color).color(), Some(color));
        }
        assert_eq!(Card::Locomotive.color(), None);
    }

    #[test]
    fn test_declared_order() {
        assert!(Card::Black < Card::Violet);
        assert!(Card::White < Card::Locomotive);
        assert_eq!(Card::ALL.iter().position(|&c| c == Card::Violet), Some(1));
    }

    #[test]
    fn test_full_set() {
        let cards = Card::full_set();
        assert_eq!(cards.size(), 8 * 12 + 14);
        assert_eq!(cards.count(&Card::Red), 12);
        assert_eq!(cards.count(&Card::Locomotive), 14);
    }
}
