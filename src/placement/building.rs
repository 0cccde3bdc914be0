//! Resource building placement.
//!
//! The die's material names the target region; a gray die targets the
//! region with the most free slots. Starting at the slot the die value
//! reaches, slots are scanned in descending order, wrapping from the
//! bottom back to the top. A full region hands the same scan to the next
//! region in precedence order.

use super::Placement;
use crate::core::{BoardState, Material, PieceKind, Side, REGION_SLOTS, TOTAL_BUILDINGS};

/// Decide where `side` builds for a die of `material` showing `value`.
#[must_use]
pub fn decide_resource_building(
    board: &BoardState,
    value: u8,
    material: Material,
    side: Side,
) -> Placement {
    if board.buildings_built(side) >= TOTAL_BUILDINGS {
        return Placement::CapReached(PieceKind::Building);
    }

    let target = if material.is_resource() {
        material
    } else {
        roomiest_region(board)
    };
    let start = target.region_index().unwrap_or(0);

    for step in 0..Material::RESOURCES.len() {
        let region = Material::RESOURCES[(start + step) % Material::RESOURCES.len()];
        if let Some(slot) = descending_scan(value).find(|&s| board.region(region)[s].is_unclaimed()) {
            return Placement::ResourceBuilding { region, slot };
        }
    }

    Placement::NoFreeSlot(PieceKind::Building)
}

/// Slot indices from the one `value` reaches, descending and wrapping.
pub fn descending_scan(value: u8) -> impl Iterator<Item = usize> {
    let top = usize::from(value.clamp(1, 6)) - 1;
    (0..REGION_SLOTS).map(move |step| (top + REGION_SLOTS - step) % REGION_SLOTS)
}

/// Region with the most free slots; earlier regions win ties.
#[must_use]
pub fn roomiest_region(board: &BoardState) -> Material {
    let free = |region: Material| board.region(region).iter().filter(|o| o.is_unclaimed()).count();
    let mut best = Material::RESOURCES[0];
    for region in Material::RESOURCES.into_iter().skip(1) {
        if free(region) > free(best) {
            best = region;
        }
    }
    best
}
