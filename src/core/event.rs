//! Structured events.
//!
//! Every state-changing operation reports one `GameEvent`. The engine
//! never renders them; hosts drain them from the scheduler and print,
//! log or serialize as they like.

use serde::{Deserialize, Serialize};

use super::dice::{Die, Material, Polarity};
use super::god::God;
use super::player::Side;
use super::state::{Axis, BoardEdit, StatueSlot};
use super::tile::{ActionTile, CardZone};

/// Kind of piece drawn from a side's supply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Statue,
    Building,
    Pillar,
}

/// Starting card handed to whoever takes first turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DestinyCard {
    Gold,
    Scribe,
}

/// Something that changed the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    // === Placement ===
    StatueBuilt { side: Side, slot: StatueSlot, vps: u32 },
    /// No statue slot worth taking; flat points instead.
    StatueSkipped { side: Side, vps: u32 },
    ResourceBuildingBuilt { side: Side, region: Material, slot: usize },
    PillarBuilt { side: Side, row: usize, col: usize, vps: u32 },
    TempleBuildingBuilt { side: Side, axis: Axis, index: usize, vps: u32, population: u32 },
    CapReached { side: Side, piece: PieceKind },
    NoFreeSlot { side: Side, piece: PieceKind },

    // === Dice and actions ===
    DieTaken { side: Side, god: God, polarity: Polarity, die: Die },
    ActionChosen { tile: ActionTile, god: God },
    StatueBonus { owner: Side, god: God, scribes: u32, vps: u32 },
    Bastet { scribes: u32, happiness: u32, population: u32 },
    CardsDrafted { zone: CardZone, decrees: u32, technologies: u32, blessings: u32 },
    OpponentEdit { edit: BoardEdit },

    // === Phases ===
    SunAdvanced { first_sunny: God },
    DiceAdded { god: God, die: Die },
    TurnOrder { first: Side, opponent_balance: u32, threshold: u32 },
    PyramidRebuilt { tiles: Vec<ActionTile>, pattern: [usize; 4] },
    Destiny { side: Side, card: DestinyCard },

    // === Scoring ===
    RegionScored { region: Material, winner: Option<Side>, vps: u32 },
    TempleScored { building_vps: u32, pillar_vps: u32 },
    StatuesScored { statues: usize, vps: u32 },
    HappinessScored { happiness: u32, vps: u32 },
    CardsScored { blessing_vps: u32, technology_vps: u32 },
    EndgameScored { decree_vps: u32, scribe_vps: u32, turn_order_vps: u32 },

    RoundEnded { round: u8, vps: u32 },
    SessionFinished { vps: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::StatueBuilt {
            side: Side::Bot,
            slot: StatueSlot::Temple(Axis::Vertical),
            vps: 6,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
