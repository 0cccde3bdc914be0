//! Session scheduling.
//!
//! [`PhaseScheduler`] owns a session from setup to the final score and
//! calls out to three host collaborators:
//!
//! - [`OpponentTurnProvider`] plays the opponent's turn through an
//!   [`OpponentTurn`] handle.
//! - [`DiceSupply`] rolls the dice placed on shaded gods.
//! - [`BalanceCheck`] reports the opponent's balance for turn order.
//!
//! Plain closures implement [`DiceSupply`] and [`BalanceCheck`].

pub mod collaborators;
pub mod scheduler;

pub use collaborators::{BalanceCheck, Collaborators, DiceSupply, OpponentTurn, OpponentTurnProvider};
pub use scheduler::{
    balance_threshold, PhaseScheduler, BALANCE_INTERVAL, DICE_PER_SHADED_GOD, ROUNDS,
    SCORING_INTERVAL, SUN_INTERVAL,
};
