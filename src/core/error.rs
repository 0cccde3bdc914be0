//! Error types.
//!
//! - `ConfigError`: session configuration rejected at construction.
//! - `EditError`: opponent input rejected; the provider may retry.
//! - `EngineError`: the session cannot continue.

use thiserror::Error;

use super::dice::{Die, Polarity};
use super::god::God;

/// Invalid session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("role order is not a permutation: {missing} is missing")]
    RoleOrderNotPermutation { missing: God },
    #[error("die value {value} out of range 1..=6")]
    DieValueOutOfRange { value: u8 },
    #[error("no starting dice on any god")]
    NoStartingDice,
}

/// Rejected opponent die selection or board edit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("die {die} is not available as {polarity:?} on {god}")]
    DieNotAvailable { god: God, polarity: Polarity, die: Die },
    #[error("a die was already selected this turn")]
    DieAlreadySelected,
    #[error("{location} is already occupied")]
    SlotOccupied { location: String },
    #[error("{location} is out of range")]
    OutOfRange { location: String },
    #[error("no {piece} left in supply")]
    SupplyExhausted { piece: &'static str },
}

/// Fatal session error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no usable die found for action {action}")]
    NoUsableDice { action: String },
    #[error("opponent ended round {round} without taking a die")]
    OpponentSkippedDie { round: u8 },
    #[error("session already finished")]
    SessionOver,
}
