//! Scoring phases.
//!
//! Rounds 8 and 16 tally region majorities, the temple, statues,
//! happiness and cards. Round 16 adds decrees, scribes and turn order.

pub mod engine;

pub use engine::{ScoringEngine, CARD_VPS, DECREE_VPS, REGION_MAJORITY_VPS, TURN_ORDER_VPS};
