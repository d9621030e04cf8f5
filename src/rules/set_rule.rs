//! The set rule.
//!
//! Three cards form a set when, for every attribute independently, their
//! values are all the same or all different. Put another way: no attribute
//! may show exactly two distinct values.

use crate::cards::{Card, ATTRIBUTES};

/// Check whether three cards form a set.
///
/// Returns `false` if any two of the cards are identical.
///
/// ```
/// use set_game::cards::{Card, Color, Count, Fill, Shape};
/// use set_game::rules::is_set;
///
/// let a = Card::new(Count::One, Fill::Empty, Color::Red, Shape::Oval);
/// let b = Card::new(Count::Two, Fill::Empty, Color::Green, Shape::Oval);
/// let c = Card::new(Count::Three, Fill::Empty, Color::Purple, Shape::Oval);
/// assert!(is_set(&a, &b, &c));
/// ```
#[must_use]
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    if a == b || a == c || b == c {
        return false;
    }

    ATTRIBUTES.iter().all(|attr| {
        let (x, y, z) = ((attr.value)(a), (attr.value)(b), (attr.value)(c));
        distinct_count(x, y, z) != 2
    })
}

fn distinct_count(x: u8, y: u8, z: u8) -> usize {
    match (x == y, y == z, x == z) {
        (true, true, _) => 1,
        (false, false, false) => 3,
        _ => 2,
    }
}

/// The third card that completes a set with `a` and `b`.
///
/// Per attribute: equal values repeat, different values take the remaining
/// one. Every pair of distinct cards has exactly one completing card.
#[must_use]
pub fn complete_set(a: &Card, b: &Card) -> Card {
    use crate::cards::{Color, Count, Fill, Shape};

    fn third(x: u8, y: u8) -> usize {
        // Domain indices are 0, 1, 2; the third value makes the sum 0 mod 3.
        ((6 - x - y) % 3) as usize
    }

    Card::new(
        Count::ALL[third(a.count.index(), b.count.index())],
        Fill::ALL[third(a.fill.index(), b.fill.index())],
        Color::ALL[third(a.color.index(), b.color.index())],
        Shape::ALL[third(a.shape.index(), b.shape.index())],
    )
}
