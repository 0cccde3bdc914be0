//! Sides, board ownership and per-side data storage.
//!
//! ## Side
//!
//! The two participants: the automated opponent (`Bot`) and the human
//! `Opponent` whose moves are declared by the host.
//!
//! ## Owner
//!
//! Tri-state ownership of a single board cell. Every cell is exactly one
//! `Owner`.
//!
//! ## SideMap
//!
//! Per-side data storage backed by a fixed array for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The automated opponent driven by this engine.
    Bot,
    /// The human player.
    Opponent,
}

impl Side {
    /// Both sides, bot first.
    pub const ALL: [Side; 2] = [Side::Bot, Side::Opponent];

    /// Array index of this side.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::Bot => 0,
            Side::Opponent => 1,
        }
    }

    /// The other side.
    #[must_use]
    pub const fn other(self) -> Side {
        match self {
            Side::Bot => Side::Opponent,
            Side::Opponent => Side::Bot,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Bot => write!(f, "Bot"),
            Side::Opponent => write!(f, "Opponent"),
        }
    }
}

/// Ownership of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Nobody has built here.
    #[default]
    Unclaimed,
    /// Claimed by the bot.
    Bot,
    /// Claimed by the opponent.
    Opponent,
}

impl Owner {
    /// Check whether the cell is still free.
    #[must_use]
    pub const fn is_unclaimed(self) -> bool {
        matches!(self, Owner::Unclaimed)
    }

    /// Check whether the cell is claimed by anyone.
    #[must_use]
    pub const fn is_claimed(self) -> bool {
        !self.is_unclaimed()
    }

    /// The side holding the cell, if any.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Owner::Unclaimed => None,
            Owner::Bot => Some(Side::Bot),
            Owner::Opponent => Some(Side::Opponent),
        }
    }

    /// Check whether `side` holds the cell.
    #[must_use]
    pub fn is(self, side: Side) -> bool {
        self == Owner::from(side)
    }

    /// Swap bot and opponent labels; unclaimed stays unclaimed.
    #[must_use]
    pub const fn swapped(self) -> Owner {
        match self {
            Owner::Unclaimed => Owner::Unclaimed,
            Owner::Bot => Owner::Opponent,
            Owner::Opponent => Owner::Bot,
        }
    }
}

impl From<Side> for Owner {
    fn from(side: Side) -> Self {
        match side {
            Side::Bot => Owner::Bot,
            Side::Opponent => Owner::Opponent,
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use tekhenu_bot::core::{Side, SideMap};
///
/// let mut vps: SideMap<u32> = SideMap::with_value(0);
/// vps[Side::Bot] += 3;
/// assert_eq!(vps[Side::Bot], 3);
/// assert_eq!(vps[Side::Opponent], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create a new SideMap with values from a factory function.
    pub fn new(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Bot), factory(Side::Opponent)],
        }
    }

    /// Create a new SideMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
