//! Card system: attributes, the card value type, and the full deck.
//!
//! ## Key Types
//!
//! - `Count`, `Fill`, `Color`, `Shape`: the four three-valued attributes
//! - `Card`: immutable attribute tuple, compared by value
//! - `ATTRIBUTES`: accessor table the rules iterate over

pub mod attributes;
pub mod card;

pub use attributes::{Attribute, Color, Count, Fill, Shape, ATTRIBUTES, DOMAIN_SIZE};
pub use card::{Card, DECK_SIZE};
