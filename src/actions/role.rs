//! God actions.
//!
//! The god a die came from decides what the bot does with its value:
//!
//! | God    | Action                                   |
//! |--------|------------------------------------------|
//! | Horus  | statue                                   |
//! | Ra     | pillar                                   |
//! | Hathor | temple building, value to population     |
//! | Osiris | resource building in the die's material  |
//! | Bastet | scribes, then happiness or population    |
//! | Thoth  | cards from the current happiness zone    |

use tracing::info;

use super::selector::DieChoice;
use crate::core::{BoardState, CardZone, GameEvent, God, RandomSource, Resources, RoleOrder, Side};
use crate::placement::{
    decide_pillar, decide_resource_building, decide_statue, decide_temple_building,
};

/// Scribes gained by a Bastet action.
#[must_use]
pub const fn bastet_scribes(value: u8) -> u32 {
    match value {
        1 | 2 => 2,
        3 | 4 => 1,
        _ => 0,
    }
}

/// Bastet: scribes, then `value` steps that raise happiness up to the
/// population and grow the population once it is reached.
pub fn bastet(resources: &mut Resources, value: u8) -> GameEvent {
    let scribes = bastet_scribes(value);
    resources.scribes += scribes;

    let (mut happiness, mut population) = (0, 0);
    for _ in 0..value {
        if resources.happiness < resources.population {
            resources.happiness += 1;
            happiness += 1;
        } else {
            resources.population += 1;
            population += 1;
        }
    }
    info!(scribes, happiness, population, "bastet");
    GameEvent::Bastet { scribes, happiness, population }
}

/// Thoth: `ceil(value / 2)` cards from the zone of current happiness.
pub fn thoth(resources: &mut Resources, value: u8) -> GameEvent {
    let zone = CardZone::for_happiness(resources.happiness);
    let draft = zone.draft(u32::from(value).div_ceil(2));
    resources.decrees += draft.decrees;
    resources.technologies += draft.technologies;
    resources.blessings += draft.blessings;
    info!(?zone, ?draft, "thoth");
    GameEvent::CardsDrafted {
        zone,
        decrees: draft.decrees,
        technologies: draft.technologies,
        blessings: draft.blessings,
    }
}

/// Run the action of the god `choice` was taken from.
pub fn perform_role_action<R: RandomSource>(
    board: &mut BoardState,
    role_order: &RoleOrder,
    choice: DieChoice,
    side: Side,
    rng: &mut R,
) -> GameEvent {
    let value = choice.die.value();
    let placement = match choice.god {
        God::Horus => decide_statue(board, role_order, value, side, rng),
        God::Ra => decide_pillar(board, value, side, rng),
        God::Hathor => decide_temple_building(board, value, side, rng),
        God::Osiris => decide_resource_building(board, value, choice.die.material(), side),
        God::Bastet => return bastet(&mut board.resources[side], value),
        God::Thoth => return thoth(&mut board.resources[side], value),
    };
    placement.apply(board, side)
}
