//! Statue ownership bonus.
//!
//! Taking a die from a god whose statue is built pays the statue's owner,
//! whoever took the die. The band depends on the god's position in the
//! role order: 0-1 pay a scribe, 2-3 a point, 4-5 both.
//!
//! Only the bot's ledger lives in this engine. An opponent-owned statue
//! is reported so the host can settle it; nothing is credited.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{BoardState, GameEvent, God, RoleOrder, Side, StatueSlot};

/// What a statue pays per die taken.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatueBonus {
    pub scribes: u32,
    pub vps: u32,
}

impl StatueBonus {
    /// Band payout for `god`.
    #[must_use]
    pub fn for_god(role_order: &RoleOrder, god: God) -> Self {
        match role_order.position(god) {
            0 | 1 => Self { scribes: 1, vps: 0 },
            2 | 3 => Self { scribes: 0, vps: 1 },
            _ => Self { scribes: 1, vps: 1 },
        }
    }
}

/// Pay the owner of `god`'s statue, if any.
pub fn settle_statue_bonus(
    board: &mut BoardState,
    role_order: &RoleOrder,
    god: God,
) -> Option<GameEvent> {
    let owner = board.statue(StatueSlot::God(god)).side()?;
    let bonus = StatueBonus::for_god(role_order, god);

    if owner == Side::Bot {
        let resources = &mut board.resources[owner];
        resources.scribes += bonus.scribes;
        resources.vps += bonus.vps;
    }
    info!(%owner, %god, scribes = bonus.scribes, vps = bonus.vps, "statue bonus");

    Some(GameEvent::StatueBonus {
        owner,
        god,
        scribes: bonus.scribes,
        vps: bonus.vps,
    })
}
