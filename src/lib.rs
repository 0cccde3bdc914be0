//! # tekhenu-bot
//!
//! Automated opponent for a two-player dice-drafting temple building game.
//!
//! The engine plays the bot's side of a physical table: it picks dice,
//! places statues, pillars and buildings, tracks the bot's score, and
//! walks the session through its sixteen rounds. The human opponent's
//! moves come in through a collaborator interface; the engine never
//! parses text or renders output.
//!
//! ## Design Principles
//!
//! 1. **One owner**: a single `BoardState` owned by the scheduler, lent
//!    to each heuristic for one call.
//!
//! 2. **Closed enums**: gods, materials, polarities, owners and slots are
//!    enums with exhaustive matches.
//!
//! 3. **Injected randomness**: every tie-break goes through
//!    `RandomSource`, so a session replays from its seed and tests script
//!    exact outcomes.
//!
//! ## Modules
//!
//! - `core`: sides, gods, dice, board state, RNG, configuration, events
//! - `lighting`: sun position to die polarity
//! - `placement`: statue, building, pillar and temple building heuristics
//! - `actions`: action pyramid, die selection, statue bonus, god actions
//! - `scoring`: scoring phases and endgame
//! - `schedule`: round state machine and host collaborators

pub mod actions;
pub mod core;
pub mod lighting;
pub mod placement;
pub mod schedule;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    ActionTile, Axis, BoardEdit, BoardState, ConfigError, Difficulty, DicePool, Die, EditError,
    EngineError, GameEvent, GameRng, God, Material, Owner, Polarity, RandomSource, RoleOrder,
    SessionConfig, Side, StatueSlot,
};

pub use crate::actions::{ActionPyramid, ActionSelector, DieChoice};

pub use crate::placement::Placement;

pub use crate::scoring::ScoringEngine;

pub use crate::schedule::{
    BalanceCheck, Collaborators, DiceSupply, OpponentTurn, OpponentTurnProvider, PhaseScheduler,
};
