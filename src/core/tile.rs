//! Action tiles and Thoth card zones.

use serde::{Deserialize, Serialize};

use super::dice::Material;
use super::god::God;

/// One action pyramid tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionTile {
    /// Take the best die of this god.
    Role(God),
    /// Take the best die of the first material present, in this order.
    Materials([Material; 4]),
}

impl std::fmt::Display for ActionTile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionTile::Role(god) => write!(f, "{god}"),
            ActionTile::Materials([a, b, c, d]) => write!(f, "{a}/{b}/{c}/{d}"),
        }
    }
}

/// Happiness band deciding which cards Thoth offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardZone {
    /// Happiness up to 4.
    Yellow,
    /// Up to 8.
    Red,
    /// Up to 12.
    Green,
    /// Above 12.
    Blue,
}

/// Cards drawn in one Thoth action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDraft {
    pub decrees: u32,
    pub technologies: u32,
    pub blessings: u32,
}

impl CardDraft {
    #[must_use]
    pub const fn new(decrees: u32, technologies: u32, blessings: u32) -> Self {
        Self { decrees, technologies, blessings }
    }
}

impl CardZone {
    #[must_use]
    pub const fn for_happiness(happiness: u32) -> Self {
        match happiness {
            0..=4 => CardZone::Yellow,
            5..=8 => CardZone::Red,
            9..=12 => CardZone::Green,
            _ => CardZone::Blue,
        }
    }

    /// Cards taken when drafting `cards` (1..=3) from this zone.
    #[must_use]
    pub const fn draft(self, cards: u32) -> CardDraft {
        match (self, cards) {
            (_, 0) => CardDraft::new(0, 0, 0),
            (CardZone::Yellow, 1) | (CardZone::Red, 1) => CardDraft::new(0, 1, 0),
            (CardZone::Yellow, 2) => CardDraft::new(0, 1, 1),
            (CardZone::Yellow, _) => CardDraft::new(0, 1, 2),
            (CardZone::Red, 2) => CardDraft::new(0, 2, 0),
            (CardZone::Red, _) => CardDraft::new(0, 2, 1),
            (CardZone::Green, 1) | (CardZone::Blue, 1) => CardDraft::new(1, 0, 0),
            (CardZone::Green, 2) => CardDraft::new(1, 1, 0),
            (CardZone::Green, _) => CardDraft::new(1, 2, 0),
            (CardZone::Blue, 2) => CardDraft::new(2, 0, 0),
            (CardZone::Blue, _) => CardDraft::new(2, 1, 0),
        }
    }
}
