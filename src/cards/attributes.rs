//! Card attributes and the accessor table used by the set rule.
//!
//! Every card has four attributes, each drawn from a fixed domain of three
//! values:
//!
//! - `Count`: 1, 2 or 3 symbols
//! - `Fill`: empty, striped, solid
//! - `Color`: red, green, purple
//! - `Shape`: oval, diamond, wave
//!
//! Rules code never matches on attribute names. It walks [`ATTRIBUTES`],
//! which maps each attribute to an accessor returning the value's index
//! within its domain (0, 1 or 2).

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Number of values in every attribute domain.
pub const DOMAIN_SIZE: usize = 3;

macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value of this attribute, in domain order.
            pub const ALL: [Self; DOMAIN_SIZE] = [$(Self::$variant),+];

            /// Index of this value within its domain.
            #[must_use]
            pub const fn index(self) -> u8 {
                self as u8
            }

            /// Human-readable label used when rendering cards.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

attribute_enum! {
    /// How many symbols are printed on the card.
    Count { One => "1", Two => "2", Three => "3" }
}

attribute_enum! {
    /// Shading of the symbols.
    Fill { Empty => "empty", Striped => "striped", Solid => "solid" }
}

attribute_enum! {
    /// Ink color of the symbols.
    Color { Red => "red", Green => "green", Purple => "purple" }
}

attribute_enum! {
    /// Symbol shape.
    Shape { Oval => "oval", Diamond => "diamond", Wave => "wave" }
}

impl Count {
    /// The numeric count (1..=3).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.index() + 1
    }
}

/// A named accessor for one card attribute.
#[derive(Clone, Copy)]
pub struct Attribute {
    /// Attribute name, for diagnostics.
    pub name: &'static str,
    /// Returns the card's value index for this attribute.
    pub value: fn(&Card) -> u8,
}

impl std::fmt::Debug for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attribute").field("name", &self.name).finish()
    }
}

/// The four card attributes, in rendering order.
pub const ATTRIBUTES: [Attribute; 4] = [
    Attribute { name: "count", value: count_of },
    Attribute { name: "fill", value: fill_of },
    Attribute { name: "color", value: color_of },
    Attribute { name: "shape", value: shape_of },
];

fn count_of(card: &Card) -> u8 {
    card.count.index()
}

fn fill_of(card: &Card) -> u8 {
    card.fill.index()
}

fn color_of(card: &Card) -> u8 {
    card.color.index()
}

fn shape_of(card: &Card) -> u8 {
    card.shape.index()
}
