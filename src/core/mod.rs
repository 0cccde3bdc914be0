//! Core types: sides, gods, dice, tiles, board state, RNG, configuration, events.
//!
//! Everything here is plain data plus invariant-checked mutation. The
//! decision logic lives in `lighting`, `placement`, `actions`, `scoring`
//! and `schedule`.

pub mod config;
pub mod dice;
pub mod error;
pub mod event;
pub mod god;
pub mod player;
pub mod rng;
pub mod state;
pub mod tile;

pub use config::{Difficulty, SessionConfig};
pub use dice::{DicePool, Die, Lighting, Material, Polarity, PolarityBuckets};
pub use error::{ConfigError, EditError, EngineError};
pub use event::{DestinyCard, GameEvent, PieceKind};
pub use god::{God, RoleOrder};
pub use player::{Owner, Side, SideMap};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
pub use state::{
    Axis, BoardEdit, BoardState, ResourcePair, Resources, StatueBoard, StatueSlot, AXIS_SLOTS,
    CENTER, GRID_SIZE, REGION_SLOTS, TOTAL_BUILDINGS, TOTAL_PILLARS, TOTAL_STATUES,
};
pub use tile::{ActionTile, CardDraft, CardZone};
