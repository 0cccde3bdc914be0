//! Placement heuristics.
//!
//! Each heuristic reads the board and a die value and returns a
//! [`Placement`] decision without touching the board. The caller applies
//! the decision with [`Placement::apply`], which performs the claim and
//! credits the points in one step.
//!
//! - `statue`: god slot, then resource pair by majority impact, then
//!   temple axis by pillar support.
//! - `building`: resource building, descending cyclic scan.
//! - `pillar`: best-scoring free pillar cell with a tie-break cascade.
//! - `temple`: temple building facing the most own pillars.

pub mod building;
pub mod pillar;
pub mod statue;
pub mod temple;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::{Axis, BoardState, GameEvent, Material, PieceKind, Side, StatueSlot};

pub use building::decide_resource_building;
pub use pillar::{center_affinity, decide_pillar, neighbor_bonus, setup_pillar};
pub use statue::decide_statue;
pub use temple::decide_temple_building;

/// Points a temple statue or temple building earns per supporting pillar.
pub const VPS_PER_SUPPORTING_PILLAR: u32 = 3;
/// Points for a statue attempt that found no slot worth taking.
pub const STATUE_SKIP_VPS: u32 = 3;

/// Outcome of a placement heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Claim a statue slot.
    Statue { slot: StatueSlot, vps: u32 },
    /// No statue placed; score a flat bonus instead.
    StatueSkipped { vps: u32 },
    /// Claim a resource building slot (0-based).
    ResourceBuilding { region: Material, slot: usize },
    /// Claim a pillar cell.
    Pillar { row: usize, col: usize, vps: u32 },
    /// Claim a temple building slot and grow population.
    TempleBuilding { axis: Axis, index: usize, vps: u32, population: u32 },
    /// The side's supply of this piece is used up; nothing happens.
    CapReached(PieceKind),
    /// Supply remains but every slot of this kind is taken; nothing happens.
    NoFreeSlot(PieceKind),
}

impl Placement {
    /// Check whether a piece is placed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Placement::Statue { .. }
                | Placement::ResourceBuilding { .. }
                | Placement::Pillar { .. }
                | Placement::TempleBuilding { .. }
        )
    }

    /// Points awarded by this decision.
    #[must_use]
    pub fn vps(&self) -> u32 {
        match *self {
            Placement::Statue { vps, .. }
            | Placement::StatueSkipped { vps }
            | Placement::Pillar { vps, .. }
            | Placement::TempleBuilding { vps, .. } => vps,
            Placement::ResourceBuilding { .. }
            | Placement::CapReached(_)
            | Placement::NoFreeSlot(_) => 0,
        }
    }

    /// Perform the claim and credit `side`'s resources.
    pub fn apply(&self, board: &mut BoardState, side: Side) -> GameEvent {
        let event = match *self {
            Placement::Statue { slot, vps } => {
                board.claim_statue(slot, side);
                info!(%side, %slot, vps, "statue built");
                GameEvent::StatueBuilt { side, slot, vps }
            }
            Placement::StatueSkipped { vps } => {
                info!(%side, vps, "no statue slot worth taking");
                GameEvent::StatueSkipped { side, vps }
            }
            Placement::ResourceBuilding { region, slot } => {
                board.claim_region_slot(region, slot, side);
                info!(%side, %region, slot, "resource building built");
                GameEvent::ResourceBuildingBuilt { side, region, slot }
            }
            Placement::Pillar { row, col, vps } => {
                board.claim_pillar(row, col, side);
                info!(%side, row, col, vps, "pillar built");
                GameEvent::PillarBuilt { side, row, col, vps }
            }
            Placement::TempleBuilding { axis, index, vps, population } => {
                board.claim_temple_building(axis, index, side);
                board.resources[side].population += population;
                info!(%side, ?axis, index, vps, population, "temple building built");
                GameEvent::TempleBuildingBuilt { side, axis, index, vps, population }
            }
            Placement::CapReached(piece) => {
                warn!(%side, ?piece, "supply exhausted");
                GameEvent::CapReached { side, piece }
            }
            Placement::NoFreeSlot(piece) => {
                warn!(%side, ?piece, "no free slot");
                GameEvent::NoFreeSlot { side, piece }
            }
        };
        board.resources[side].vps += self.vps();
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{God, Owner};

    #[test]
    fn test_apply_statue_claims_and_scores() {
        let mut board = BoardState::new();
        let placement = Placement::Statue {
            slot: StatueSlot::Temple(Axis::Horizontal),
            vps: 6,
        };

        let event = placement.apply(&mut board, Side::Bot);

        assert_eq!(board.statue(StatueSlot::Temple(Axis::Horizontal)), Owner::Bot);
        assert_eq!(board.resources[Side::Bot].vps, 6);
        assert!(matches!(event, GameEvent::StatueBuilt { vps: 6, .. }));
    }

    #[test]
    fn test_apply_skip_scores_without_claim() {
        let mut board = BoardState::new();
        let placement = Placement::StatueSkipped { vps: STATUE_SKIP_VPS };

        placement.apply(&mut board, Side::Bot);

        assert!(!placement.is_success());
        assert_eq!(board.statues_built(Side::Bot), 0);
        assert_eq!(board.resources[Side::Bot].vps, 3);
    }

    #[test]
    fn test_apply_temple_building_adds_population() {
        let mut board = BoardState::new();
        Placement::TempleBuilding {
            axis: Axis::Vertical,
            index: 4,
            vps: 3,
            population: 5,
        }
        .apply(&mut board, Side::Bot);

        assert_eq!(board.resources[Side::Bot].population, 5);
        assert_eq!(board.resources[Side::Bot].vps, 3);
        assert_eq!(board.buildings_built(Side::Bot), 1);
    }

    #[test]
    fn test_apply_cap_reached_is_noop() {
        let mut board = BoardState::new();
        board.claim_statue(StatueSlot::God(God::Ra), Side::Bot);

        let event = Placement::CapReached(PieceKind::Statue).apply(&mut board, Side::Bot);

        assert_eq!(
            event,
            GameEvent::CapReached { side: Side::Bot, piece: PieceKind::Statue }
        );
        assert_eq!(board.resources[Side::Bot].vps, 0);
        assert_eq!(board.statues_built(Side::Bot), 1);
    }
}
