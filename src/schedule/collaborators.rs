//! External collaborators.
//!
//! The scheduler calls out to the host for everything it cannot decide:
//! the opponent's turn, new dice and the balance magnitude. All calls are
//! synchronous and may block for as long as the host needs.
//!
//! ## Implementation Notes
//!
//! - `OpponentTurnProvider::play_turn`: take exactly one die, declare any
//!   board edits, then return. A rejected call leaves the session
//!   untouched; retrying is up to the provider.
//! - `DiceSupply::next_die`: called four times every even round except
//!   the last, twice per shaded god.
//! - `BalanceCheck::opponent_balance`: called every fourth round.

use tracing::{debug, info};

use crate::actions::{settle_statue_bonus, DieChoice};
use crate::core::{
    BoardEdit, BoardState, DicePool, Die, EditError, GameEvent, God, Polarity, RoleOrder, Side,
};

/// Drives the opponent's turn.
pub trait OpponentTurnProvider {
    /// Play the opponent's turn for `round` through `turn`.
    ///
    /// Returning ends the turn.
    fn play_turn(&mut self, round: u8, turn: &mut OpponentTurn<'_>);
}

/// Source of dice placed on shaded gods.
pub trait DiceSupply {
    /// Next die for `god`.
    fn next_die(&mut self, god: God) -> Die;
}

/// Source of the opponent's balance magnitude.
pub trait BalanceCheck {
    /// Absolute balance of the opponent at the balance phase of `round`.
    fn opponent_balance(&mut self, round: u8) -> u32;
}

impl<F> DiceSupply for F
where
    F: FnMut(God) -> Die,
{
    fn next_die(&mut self, god: God) -> Die {
        self(god)
    }
}

impl<F> BalanceCheck for F
where
    F: FnMut(u8) -> u32,
{
    fn opponent_balance(&mut self, round: u8) -> u32 {
        self(round)
    }
}

/// The three collaborators a session needs, borrowed for one call.
pub struct Collaborators<'a> {
    pub opponent: &'a mut dyn OpponentTurnProvider,
    pub dice: &'a mut dyn DiceSupply,
    pub balance: &'a mut dyn BalanceCheck,
}

impl<'a> Collaborators<'a> {
    pub fn new(
        opponent: &'a mut dyn OpponentTurnProvider,
        dice: &'a mut dyn DiceSupply,
        balance: &'a mut dyn BalanceCheck,
    ) -> Self {
        Self { opponent, dice, balance }
    }
}

/// The opponent's view of the session during its turn.
///
/// Reads are unrestricted. Writes are validated: a rejected die or edit
/// returns an [`EditError`] and changes nothing.
pub struct OpponentTurn<'a> {
    board: &'a mut BoardState,
    pool: &'a mut DicePool,
    role_order: &'a RoleOrder,
    events: &'a mut Vec<GameEvent>,
    taken: Option<DieChoice>,
}

impl<'a> OpponentTurn<'a> {
    pub(crate) fn new(
        board: &'a mut BoardState,
        pool: &'a mut DicePool,
        role_order: &'a RoleOrder,
        events: &'a mut Vec<GameEvent>,
    ) -> Self {
        Self {
            board,
            pool,
            role_order,
            events,
            taken: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &*self.board
    }

    #[must_use]
    pub fn dice(&self) -> &DicePool {
        &*self.pool
    }

    #[must_use]
    pub fn role_order(&self) -> &RoleOrder {
        self.role_order
    }

    /// The die taken this turn, if any.
    #[must_use]
    pub fn taken(&self) -> Option<DieChoice> {
        self.taken
    }

    /// Take a die.
    ///
    /// Returns the owner of the god's statue, who collects the statue
    /// bonus.
    pub fn select_die(
        &mut self,
        god: God,
        polarity: Polarity,
        die: Die,
    ) -> Result<Option<Side>, EditError> {
        if self.taken.is_some() {
            return Err(EditError::DieAlreadySelected);
        }
        if !polarity.is_usable() || !self.pool.remove(god, polarity, die) {
            debug!(%god, ?polarity, %die, "opponent die rejected");
            return Err(EditError::DieNotAvailable { god, polarity, die });
        }

        let choice = DieChoice { god, polarity, die };
        self.taken = Some(choice);
        info!(%god, ?polarity, %die, "opponent takes die");
        self.events.push(GameEvent::DieTaken {
            side: Side::Opponent,
            god,
            polarity,
            die,
        });

        let bonus = settle_statue_bonus(self.board, self.role_order, god);
        let owner = match &bonus {
            Some(GameEvent::StatueBonus { owner, .. }) => Some(*owner),
            _ => None,
        };
        self.events.extend(bonus);
        Ok(owner)
    }

    /// Declare a piece the opponent built.
    pub fn apply_edit(&mut self, edit: BoardEdit) -> Result<(), EditError> {
        self.board.apply_edit(edit, Side::Opponent)?;
        info!(?edit, "opponent edit");
        self.events.push(GameEvent::OpponentEdit { edit });
        Ok(())
    }
}
