//! Temple building placement.

use smallvec::SmallVec;
use tracing::debug;

use super::{Placement, VPS_PER_SUPPORTING_PILLAR};
use crate::core::{Axis, BoardState, PieceKind, RandomSource, Side, AXIS_SLOTS, TOTAL_BUILDINGS};

/// Decide where `side` builds a temple building for a die showing `value`.
///
/// Every free slot counts the side's pillars on the grid line it faces.
/// The highest count wins, random among equals, scoring 3 per pillar.
/// The die value goes to population.
pub fn decide_temple_building<R: RandomSource>(
    board: &BoardState,
    value: u8,
    side: Side,
    rng: &mut R,
) -> Placement {
    if board.buildings_built(side) >= TOTAL_BUILDINGS {
        return Placement::CapReached(PieceKind::Building);
    }

    let mut best = 0;
    let mut candidates: SmallVec<[(Axis, usize); 10]> = SmallVec::new();
    for index in 0..AXIS_SLOTS {
        for axis in Axis::ALL {
            if board.temple_axis(axis)[index].is_claimed() {
                continue;
            }
            let pillars = board.pillars_on_line(axis, index, side);
            if candidates.is_empty() || pillars > best {
                best = pillars;
                candidates.clear();
            }
            if pillars == best {
                candidates.push((axis, index));
            }
        }
    }
    debug!(candidates = candidates.len(), pillars = best, "temple building candidates");

    let Some(&(axis, index)) = rng.choose(&candidates) else {
        return Placement::NoFreeSlot(PieceKind::Building);
    };
    Placement::TempleBuilding {
        axis,
        index,
        vps: VPS_PER_SUPPORTING_PILLAR * u32::try_from(best).unwrap_or(u32::MAX),
        population: u32::from(value),
    }
}
