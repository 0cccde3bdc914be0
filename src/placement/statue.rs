//! Statue placement.
//!
//! 1. The god slot reached by the die through the role order.
//! 2. Otherwise the resource-pair slot whose claim would flip the most
//!    region majorities, inspecting the pairs in random order so equal
//!    impacts break randomly.
//! 3. Otherwise the temple-axis slot backed by more own pillars on its
//!    center line, scoring 3 per pillar.
//! 4. Otherwise a flat 3 points and no statue.

use tracing::debug;

use super::{Placement, STATUE_SKIP_VPS, VPS_PER_SUPPORTING_PILLAR};
use crate::core::{
    Axis, BoardState, Owner, PieceKind, RandomSource, ResourcePair, RoleOrder, Side, StatueSlot,
    CENTER, TOTAL_STATUES,
};
use crate::scoring::ScoringEngine;

/// Decide where `side` puts a statue for a die showing `value`.
pub fn decide_statue<R: RandomSource>(
    board: &BoardState,
    role_order: &RoleOrder,
    value: u8,
    side: Side,
    rng: &mut R,
) -> Placement {
    if board.statues_built(side) >= TOTAL_STATUES {
        return Placement::CapReached(PieceKind::Statue);
    }

    let god_slot = StatueSlot::God(role_order.god_for_value(value));
    if board.statue(god_slot).is_unclaimed() {
        return Placement::Statue { slot: god_slot, vps: 0 };
    }

    if let Some(pair) = best_pair(board, side, rng) {
        return Placement::Statue { slot: StatueSlot::Pair(pair), vps: 0 };
    }

    temple_fallback(board, side, rng)
}

/// Number of regions in `pair` whose majority holder changes if `side`
/// takes the pair statue. Zero when the pair statue is taken.
#[must_use]
pub fn pair_impact(board: &BoardState, pair: ResourcePair, side: Side) -> usize {
    if board.statue(StatueSlot::Pair(pair)).is_claimed() {
        return 0;
    }
    pair.regions()
        .into_iter()
        .filter(|&region| {
            let with = ScoringEngine::region_winner(board, region, Owner::from(side));
            let without = ScoringEngine::region_winner(board, region, Owner::Unclaimed);
            with != without
        })
        .count()
}

fn best_pair<R: RandomSource>(board: &BoardState, side: Side, rng: &mut R) -> Option<ResourcePair> {
    let mut order = ResourcePair::ALL;
    rng.shuffle(&mut order);

    let mut best: Option<(ResourcePair, usize)> = None;
    for pair in order {
        let impact = pair_impact(board, pair, side);
        debug!(?pair, impact, "pair statue impact");
        if best.map_or(true, |(_, top)| impact > top) {
            best = Some((pair, impact));
        }
    }

    best.filter(|&(_, impact)| impact > 0).map(|(pair, _)| pair)
}

fn temple_fallback<R: RandomSource>(board: &BoardState, side: Side, rng: &mut R) -> Placement {
    let support = |axis: Axis| -> usize {
        if board.statue(StatueSlot::Temple(axis)).is_claimed() {
            0
        } else {
            board.pillars_on_line(axis, CENTER, side)
        }
    };
    let horizontal = support(Axis::Horizontal);
    let vertical = support(Axis::Vertical);
    debug!(horizontal, vertical, "temple statue support");

    let axis = match horizontal.cmp(&vertical) {
        std::cmp::Ordering::Greater => Axis::Horizontal,
        std::cmp::Ordering::Less => Axis::Vertical,
        std::cmp::Ordering::Equal if horizontal > 0 => Axis::ALL[rng.index(Axis::ALL.len())],
        std::cmp::Ordering::Equal => return Placement::StatueSkipped { vps: STATUE_SKIP_VPS },
    };

    let pillars = support(axis);
    Placement::Statue {
        slot: StatueSlot::Temple(axis),
        vps: VPS_PER_SUPPORTING_PILLAR * u32::try_from(pillars).unwrap_or(u32::MAX),
    }
}
