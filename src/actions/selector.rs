//! Die-to-action binding.
//!
//! ## Role tiles
//!
//! The highest usable die of the named god, pure before tainted at equal
//! value. A god without usable dice hands the search to the previous god
//! in the cycle; after all six the session cannot continue.
//!
//! ## Material tiles
//!
//! The highest usable die of the first material with any usable die, on
//! any god. Ties go to the gods whose statue the acting side owns, the
//! latest in role order first, otherwise to a random tied die.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::{
    ActionTile, BoardState, DicePool, Die, EngineError, God, Material, Polarity, RandomSource,
    RoleOrder, Side, StatueSlot,
};

/// A die picked from the pool, with the god and bucket it sits in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieChoice {
    pub god: God,
    pub polarity: Polarity,
    pub die: Die,
}

type Choices = SmallVec<[DieChoice; 8]>;

/// Picks the die an action tile binds to.
#[derive(Clone, Copy, Debug, Default)]
pub struct ActionSelector;

impl ActionSelector {
    /// Pick the die for `tile` without consuming it.
    pub fn select<R: RandomSource>(
        tile: ActionTile,
        pool: &DicePool,
        board: &BoardState,
        role_order: &RoleOrder,
        side: Side,
        rng: &mut R,
    ) -> Result<DieChoice, EngineError> {
        match tile {
            ActionTile::Role(god) => Self::select_role(pool, god, rng),
            ActionTile::Materials(materials) => {
                Self::select_material(pool, board, role_order, &materials, side, rng)
            }
        }
    }

    /// Role mode, falling back through the previous gods.
    pub fn select_role<R: RandomSource>(
        pool: &DicePool,
        god: God,
        rng: &mut R,
    ) -> Result<DieChoice, EngineError> {
        let mut current = god;
        for _ in 0..God::CYCLE.len() {
            if let Some(choice) = Self::best_role_die(pool, current, rng) {
                return Ok(choice);
            }
            debug!(%current, "no usable die, trying previous god");
            current = current.previous();
        }
        Err(EngineError::NoUsableDice { action: god.to_string() })
    }

    /// Highest usable die of one god, or `None` if it has none.
    pub fn best_role_die<R: RandomSource>(
        pool: &DicePool,
        god: God,
        rng: &mut R,
    ) -> Option<DieChoice> {
        let buckets = pool.buckets(god)?;
        let top = buckets.usable().map(|(_, die)| die.value()).max()?;

        [Polarity::Pure, Polarity::Tainted].into_iter().find_map(|polarity| {
            let tied: SmallVec<[Die; 8]> = buckets
                .get(polarity)
                .iter()
                .copied()
                .filter(|d| d.value() == top)
                .collect();
            rng.choose(&tied).map(|&die| DieChoice { god, polarity, die })
        })
    }

    /// Material mode over the preference list.
    pub fn select_material<R: RandomSource>(
        pool: &DicePool,
        board: &BoardState,
        role_order: &RoleOrder,
        materials: &[Material],
        side: Side,
        rng: &mut R,
    ) -> Result<DieChoice, EngineError> {
        for &material in materials {
            if let Some(choice) = Self::best_material_die(pool, board, role_order, material, side, rng)
            {
                return Ok(choice);
            }
            debug!(%material, "no usable die of this material");
        }
        let names: Vec<String> = materials.iter().map(ToString::to_string).collect();
        Err(EngineError::NoUsableDice { action: names.join("/") })
    }

    /// Highest usable die of `material` across all gods.
    pub fn best_material_die<R: RandomSource>(
        pool: &DicePool,
        board: &BoardState,
        role_order: &RoleOrder,
        material: Material,
        side: Side,
        rng: &mut R,
    ) -> Option<DieChoice> {
        let usable = || {
            God::CYCLE.into_iter().flat_map(move |god| {
                pool.buckets(god)
                    .into_iter()
                    .flat_map(|b| b.usable())
                    .filter(move |(_, die)| die.material() == material)
                    .map(move |(polarity, die)| DieChoice { god, polarity, die })
            })
        };

        let top = usable().map(|c| c.die.value()).max()?;
        let tied: Choices = usable().filter(|c| c.die.value() == top).collect();
        if tied.len() == 1 {
            return tied.first().copied();
        }

        let owned: Choices = tied
            .iter()
            .copied()
            .filter(|c| board.statue(StatueSlot::God(c.god)).is(side))
            .collect();
        debug!(%material, tied = tied.len(), owned = owned.len(), "material tie-break");
        if owned.is_empty() {
            return rng.choose(&tied).copied();
        }
        role_order
            .gods()
            .iter()
            .rev()
            .find_map(|&god| owned.iter().find(|c| c.god == god).copied())
    }

    /// Remove a selected die from the pool.
    ///
    /// # Panics
    ///
    /// If the die is not in the pool; a choice must come from the pool it
    /// is consumed from.
    pub fn consume(pool: &mut DicePool, choice: DieChoice) {
        let removed = pool.remove(choice.god, choice.polarity, choice.die);
        assert!(removed, "selected die {} is not on {}", choice.die, choice.god);
    }
}
