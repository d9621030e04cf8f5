//! The `Card` value type and deck generation.

use serde::{Deserialize, Serialize};

use super::attributes::{Color, Count, Fill, Shape};

/// Number of cards in a full deck: one per attribute combination.
pub const DECK_SIZE: usize = 81;

/// A single Set card.
///
/// Cards are plain values. Two cards are equal iff all four attributes
/// match; there is no identity beyond the attribute tuple.
///
/// ## Example
///
/// ```
/// use set_game::cards::{Card, Color, Count, Fill, Shape};
///
/// let card = Card::new(Count::Two, Fill::Striped, Color::Red, Shape::Diamond);
/// assert_eq!(card.to_string(), "2 striped red diamonds");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub count: Count,
    pub fill: Fill,
    pub color: Color,
    pub shape: Shape,
}

impl Card {
    /// Create a card from its four attributes.
    #[must_use]
    pub const fn new(count: Count, fill: Fill, color: Color, shape: Shape) -> Self {
        Self {
            count,
            fill,
            color,
            shape,
        }
    }

    /// Generate all 81 distinct cards.
    ///
    /// Order is the nested cross product count → fill → color → shape.
    /// Callers should treat the result as a set.
    #[must_use]
    pub fn full_deck() -> Vec<Card> {
        let mut deck = Vec::with_capacity(DECK_SIZE);
        for count in Count::ALL {
            for fill in Fill::ALL {
                for color in Color::ALL {
                    for shape in Shape::ALL {
                        deck.push(Card::new(count, fill, color, shape));
                    }
                }
            }
        }
        deck
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.count, self.fill, self.color, self.shape)?;
        if self.count != Count::One {
            f.write_str("s")?;
        }
        Ok(())
    }
}
