//! Board state: every placement, counter and resource of a session.
//!
//! ## Layout
//!
//! - Statue board: six god slots, two resource-pair slots, two temple-axis
//!   slots.
//! - Resource regions: four materials with six building slots each.
//! - Temple buildings: a horizontal and a vertical track of five slots.
//! - Pillar grid: 5x5, row 2 and column 2 cross at the center.
//!
//! ## Supply caps
//!
//! Each side builds from its own supply of `TOTAL_STATUES` statues,
//! `TOTAL_BUILDINGS` buildings (resource and temple combined) and
//! `TOTAL_PILLARS` pillars. Built counts are derived from the board, so a
//! counter can never drift from the cells it describes.
//!
//! Claiming an occupied cell, or claiming past a cap, is a programming
//! error and panics. Opponent input goes through [`BoardState::apply_edit`]
//! instead, which reports a typed [`EditError`].

use serde::{Deserialize, Serialize};

use super::dice::Material;
use super::error::EditError;
use super::god::God;
use super::player::{Owner, Side, SideMap};

/// Statues in each side's supply.
pub const TOTAL_STATUES: usize = 6;
/// Buildings (resource + temple) in each side's supply.
pub const TOTAL_BUILDINGS: usize = 10;
/// Pillars in each side's supply.
pub const TOTAL_PILLARS: usize = 8;
/// Side length of the pillar grid.
pub const GRID_SIZE: usize = 5;
/// Row and column index of the grid center.
pub const CENTER: usize = 2;
/// Building slots per resource region.
pub const REGION_SLOTS: usize = 6;
/// Building slots per temple axis.
pub const AXIS_SLOTS: usize = 5;

/// Temple axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Runs along row 2 of the pillar grid; its buildings sit beside rows.
    Horizontal,
    /// Runs along column 2; its buildings sit beside columns.
    Vertical,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    const fn index(self) -> usize {
        match self {
            Axis::Horizontal => 0,
            Axis::Vertical => 1,
        }
    }
}

/// Statue slot shared by two resource regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourcePair {
    PapyrusBread,
    LimestoneGranite,
}

impl ResourcePair {
    pub const ALL: [ResourcePair; 2] = [ResourcePair::PapyrusBread, ResourcePair::LimestoneGranite];

    /// The two regions covered by this pair.
    #[must_use]
    pub const fn regions(self) -> [Material; 2] {
        match self {
            ResourcePair::PapyrusBread => [Material::Papyrus, Material::Bread],
            ResourcePair::LimestoneGranite => [Material::Limestone, Material::Granite],
        }
    }

    /// The pair covering a resource region. `None` for gray.
    #[must_use]
    pub const fn for_region(material: Material) -> Option<ResourcePair> {
        match material {
            Material::Papyrus | Material::Bread => Some(ResourcePair::PapyrusBread),
            Material::Limestone | Material::Granite => Some(ResourcePair::LimestoneGranite),
            Material::Gray => None,
        }
    }

    const fn index(self) -> usize {
        match self {
            ResourcePair::PapyrusBread => 0,
            ResourcePair::LimestoneGranite => 1,
        }
    }
}

/// A named statue slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatueSlot {
    God(God),
    Pair(ResourcePair),
    Temple(Axis),
}

impl StatueSlot {
    /// All ten statue slots.
    #[must_use]
    pub fn all() -> impl Iterator<Item = StatueSlot> {
        God::CYCLE
            .into_iter()
            .map(StatueSlot::God)
            .chain(ResourcePair::ALL.into_iter().map(StatueSlot::Pair))
            .chain(Axis::ALL.into_iter().map(StatueSlot::Temple))
    }
}

impl std::fmt::Display for StatueSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatueSlot::God(god) => write!(f, "{god}"),
            StatueSlot::Pair(pair) => write!(f, "{pair:?}"),
            StatueSlot::Temple(axis) => write!(f, "Temple {axis:?}"),
        }
    }
}

/// Per-side scalar counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    pub vps: u32,
    pub scribes: u32,
    pub population: u32,
    pub happiness: u32,
    pub blessings: u32,
    pub technologies: u32,
    pub decrees: u32,
}

/// Statue slot ownership.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatueBoard {
    gods: [Owner; 6],
    pairs: [Owner; 2],
    temple: [Owner; 2],
}

impl StatueBoard {
    /// Owner of a slot.
    #[must_use]
    pub fn get(&self, slot: StatueSlot) -> Owner {
        match slot {
            StatueSlot::God(god) => self.gods[god.cycle_index()],
            StatueSlot::Pair(pair) => self.pairs[pair.index()],
            StatueSlot::Temple(axis) => self.temple[axis.index()],
        }
    }

    fn set(&mut self, slot: StatueSlot, owner: Owner) {
        match slot {
            StatueSlot::God(god) => self.gods[god.cycle_index()] = owner,
            StatueSlot::Pair(pair) => self.pairs[pair.index()] = owner,
            StatueSlot::Temple(axis) => self.temple[axis.index()] = owner,
        }
    }

    /// Number of slots held by `side`.
    #[must_use]
    pub fn count(&self, side: Side) -> usize {
        StatueSlot::all().filter(|&s| self.get(s).is(side)).count()
    }
}

/// Opponent-declared board change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEdit {
    Statue(StatueSlot),
    Pillar { row: usize, col: usize },
    TempleBuilding { axis: Axis, index: usize },
    /// `slot` is the 0-based position; slot `i` is reached by die value `i + 1`.
    ResourceBuilding { region: Material, slot: usize },
}

/// Authoritative board record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    statues: StatueBoard,
    regions: [[Owner; REGION_SLOTS]; 4],
    temple_buildings: [[Owner; AXIS_SLOTS]; 2],
    pillars: [[Owner; GRID_SIZE]; GRID_SIZE],

    /// Per-side counters.
    pub resources: SideMap<Resources>,
}

impl BoardState {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Reads ===

    /// Statue board.
    #[must_use]
    pub fn statues(&self) -> &StatueBoard {
        &self.statues
    }

    /// Owner of a statue slot.
    #[must_use]
    pub fn statue(&self, slot: StatueSlot) -> Owner {
        self.statues.get(slot)
    }

    /// Building slots of a resource region.
    #[must_use]
    pub fn region(&self, region: Material) -> &[Owner; REGION_SLOTS] {
        &self.regions[Self::region_index(region)]
    }

    /// Temple building track of an axis.
    #[must_use]
    pub fn temple_axis(&self, axis: Axis) -> &[Owner; AXIS_SLOTS] {
        &self.temple_buildings[axis.index()]
    }

    /// Owner of a pillar cell.
    #[must_use]
    pub fn pillar(&self, row: usize, col: usize) -> Owner {
        self.pillars[row][col]
    }

    /// Whole pillar grid.
    #[must_use]
    pub fn pillars(&self) -> &[[Owner; GRID_SIZE]; GRID_SIZE] {
        &self.pillars
    }

    /// Statues built by `side`.
    #[must_use]
    pub fn statues_built(&self, side: Side) -> usize {
        self.statues.count(side)
    }

    /// Resource plus temple buildings built by `side`.
    #[must_use]
    pub fn buildings_built(&self, side: Side) -> usize {
        let owned = |slots: &[Owner]| slots.iter().filter(|o| o.is(side)).count();
        self.regions.iter().map(|r| owned(&r[..])).sum::<usize>()
            + self.temple_buildings.iter().map(|t| owned(&t[..])).sum::<usize>()
    }

    /// Pillars built by `side`.
    #[must_use]
    pub fn pillars_built(&self, side: Side) -> usize {
        self.pillars
            .iter()
            .flatten()
            .filter(|o| o.is(side))
            .count()
    }

    /// Pillars of `side` in one grid row.
    #[must_use]
    pub fn pillars_in_row(&self, row: usize, side: Side) -> usize {
        self.pillars[row].iter().filter(|o| o.is(side)).count()
    }

    /// Pillars of `side` in one grid column.
    #[must_use]
    pub fn pillars_in_col(&self, col: usize, side: Side) -> usize {
        self.pillars.iter().filter(|row| row[col].is(side)).count()
    }

    /// Pillars of `side` on the grid line a temple building or statue faces.
    ///
    /// Horizontal slot `i` faces row `i`; vertical slot `i` faces column `i`.
    #[must_use]
    pub fn pillars_on_line(&self, axis: Axis, index: usize, side: Side) -> usize {
        match axis {
            Axis::Horizontal => self.pillars_in_row(index, side),
            Axis::Vertical => self.pillars_in_col(index, side),
        }
    }

    // === Claims ===

    /// Claim a statue slot.
    ///
    /// # Panics
    ///
    /// If the slot is taken or `side` has no statue left.
    pub fn claim_statue(&mut self, slot: StatueSlot, side: Side) {
        assert!(
            self.statue(slot).is_unclaimed(),
            "statue slot {slot} already claimed"
        );
        assert!(
            self.statues_built(side) < TOTAL_STATUES,
            "{side} has no statue left"
        );
        self.statues.set(slot, side.into());
    }

    /// Claim a resource building slot (0-based).
    ///
    /// # Panics
    ///
    /// If the slot is taken or `side` has no building left.
    pub fn claim_region_slot(&mut self, region: Material, slot: usize, side: Side) {
        self.assert_building_supply(side);
        let cell = &mut self.regions[Self::region_index(region)][slot];
        assert!(cell.is_unclaimed(), "{region} slot {slot} already claimed");
        *cell = side.into();
    }

    /// Claim a temple building slot.
    ///
    /// # Panics
    ///
    /// If the slot is taken or `side` has no building left.
    pub fn claim_temple_building(&mut self, axis: Axis, index: usize, side: Side) {
        self.assert_building_supply(side);
        let cell = &mut self.temple_buildings[axis.index()][index];
        assert!(cell.is_unclaimed(), "temple {axis:?} slot {index} already claimed");
        *cell = side.into();
    }

    /// Claim a pillar cell.
    ///
    /// # Panics
    ///
    /// If the cell is taken or `side` has no pillar left.
    pub fn claim_pillar(&mut self, row: usize, col: usize, side: Side) {
        assert!(
            self.pillars_built(side) < TOTAL_PILLARS,
            "{side} has no pillar left"
        );
        let cell = &mut self.pillars[row][col];
        assert!(cell.is_unclaimed(), "pillar ({row}, {col}) already claimed");
        *cell = side.into();
    }

    fn assert_building_supply(&self, side: Side) {
        assert!(
            self.buildings_built(side) < TOTAL_BUILDINGS,
            "{side} has no building left"
        );
    }

    fn region_index(region: Material) -> usize {
        region
            .region_index()
            .unwrap_or_else(|| panic!("{region} has no building region"))
    }

    // === Validated edits ===

    /// Apply a declared edit for `side`, validating range, occupancy and supply.
    pub fn apply_edit(&mut self, edit: BoardEdit, side: Side) -> Result<(), EditError> {
        match edit {
            BoardEdit::Statue(slot) => {
                if self.statue(slot).is_claimed() {
                    return Err(EditError::SlotOccupied {
                        location: format!("statue {slot}"),
                    });
                }
                if self.statues_built(side) >= TOTAL_STATUES {
                    return Err(EditError::SupplyExhausted { piece: "statues" });
                }
                self.claim_statue(slot, side);
            }
            BoardEdit::Pillar { row, col } => {
                let location = format!("pillar ({row}, {col})");
                if row >= GRID_SIZE || col >= GRID_SIZE {
                    return Err(EditError::OutOfRange { location });
                }
                if self.pillar(row, col).is_claimed() {
                    return Err(EditError::SlotOccupied { location });
                }
                if self.pillars_built(side) >= TOTAL_PILLARS {
                    return Err(EditError::SupplyExhausted { piece: "pillars" });
                }
                self.claim_pillar(row, col, side);
            }
            BoardEdit::TempleBuilding { axis, index } => {
                let location = format!("temple {axis:?} building {index}");
                if index >= AXIS_SLOTS {
                    return Err(EditError::OutOfRange { location });
                }
                if self.temple_axis(axis)[index].is_claimed() {
                    return Err(EditError::SlotOccupied { location });
                }
                if self.buildings_built(side) >= TOTAL_BUILDINGS {
                    return Err(EditError::SupplyExhausted { piece: "buildings" });
                }
                self.claim_temple_building(axis, index, side);
            }
            BoardEdit::ResourceBuilding { region, slot } => {
                let location = format!("{region} building {slot}");
                if !region.is_resource() || slot >= REGION_SLOTS {
                    return Err(EditError::OutOfRange { location });
                }
                if self.region(region)[slot].is_claimed() {
                    return Err(EditError::SlotOccupied { location });
                }
                if self.buildings_built(side) >= TOTAL_BUILDINGS {
                    return Err(EditError::SupplyExhausted { piece: "buildings" });
                }
                self.claim_region_slot(region, slot, side);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = BoardState::new();
        for side in Side::ALL {
            assert_eq!(board.statues_built(side), 0);
            assert_eq!(board.buildings_built(side), 0);
            assert_eq!(board.pillars_built(side), 0);
            assert_eq!(board.resources[side], Resources::default());
        }
        assert_eq!(StatueSlot::all().count(), 10);
    }

    #[test]
    fn test_counts_follow_claims() {
        let mut board = BoardState::new();
        board.claim_statue(StatueSlot::God(God::Ra), Side::Bot);
        board.claim_region_slot(Material::Bread, 4, Side::Bot);
        board.claim_temple_building(Axis::Vertical, 2, Side::Bot);
        board.claim_pillar(2, 2, Side::Opponent);

        assert_eq!(board.statues_built(Side::Bot), 1);
        assert_eq!(board.buildings_built(Side::Bot), 2);
        assert_eq!(board.pillars_built(Side::Bot), 0);
        assert_eq!(board.pillars_built(Side::Opponent), 1);
        assert_eq!(board.pillars_in_row(2, Side::Opponent), 1);
        assert_eq!(board.pillars_on_line(Axis::Vertical, 2, Side::Opponent), 1);
    }

    #[test]
    #[should_panic(expected = "already claimed")]
    fn test_double_claim_panics() {
        let mut board = BoardState::new();
        board.claim_pillar(0, 0, Side::Bot);
        board.claim_pillar(0, 0, Side::Opponent);
    }

    #[test]
    #[should_panic(expected = "no pillar left")]
    fn test_claim_past_cap_panics() {
        let mut board = BoardState::new();
        for i in 0..=TOTAL_PILLARS {
            board.claim_pillar(i / GRID_SIZE, i % GRID_SIZE, Side::Bot);
        }
    }

    #[test]
    fn test_apply_edit_rejects_occupied() {
        let mut board = BoardState::new();
        board.claim_statue(StatueSlot::God(God::Horus), Side::Bot);

        let err = board
            .apply_edit(BoardEdit::Statue(StatueSlot::God(God::Horus)), Side::Opponent)
            .unwrap_err();
        assert!(matches!(err, EditError::SlotOccupied { .. }));
        assert_eq!(board.statues_built(Side::Opponent), 0);
    }

    #[test]
    fn test_apply_edit_rejects_out_of_range() {
        let mut board = BoardState::new();
        let edits = [
            BoardEdit::Pillar { row: 5, col: 0 },
            BoardEdit::TempleBuilding { axis: Axis::Horizontal, index: 5 },
            BoardEdit::ResourceBuilding { region: Material::Papyrus, slot: 6 },
            BoardEdit::ResourceBuilding { region: Material::Gray, slot: 0 },
        ];
        for edit in edits {
            assert!(matches!(
                board.apply_edit(edit, Side::Opponent),
                Err(EditError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_apply_edit_respects_supply() {
        let mut board = BoardState::new();
        for i in 0..TOTAL_PILLARS {
            board
                .apply_edit(BoardEdit::Pillar { row: i / GRID_SIZE, col: i % GRID_SIZE }, Side::Opponent)
                .unwrap();
        }
        let err = board
            .apply_edit(BoardEdit::Pillar { row: 4, col: 4 }, Side::Opponent)
            .unwrap_err();
        assert_eq!(err, EditError::SupplyExhausted { piece: "pillars" });
    }

    #[test]
    fn test_apply_edit_claims() {
        let mut board = BoardState::new();
        board
            .apply_edit(BoardEdit::ResourceBuilding { region: Material::Granite, slot: 0 }, Side::Opponent)
            .unwrap();
        board
            .apply_edit(BoardEdit::TempleBuilding { axis: Axis::Horizontal, index: 1 }, Side::Opponent)
            .unwrap();

        assert_eq!(board.region(Material::Granite)[0], Owner::Opponent);
        assert_eq!(board.temple_axis(Axis::Horizontal)[1], Owner::Opponent);
        assert_eq!(board.buildings_built(Side::Opponent), 2);
    }
}
