//! Scoring phase tallies.
//!
//! Every function scores one category for one side and writes the points
//! into that side's resources. None of them remembers having run; the
//! scheduler invokes each exactly once per scoring phase.

use tracing::info;

use crate::core::{
    Axis, BoardState, GameEvent, Material, Owner, ResourcePair, Side, StatueSlot, CENTER,
    GRID_SIZE,
};

/// Points for winning a resource region.
pub const REGION_MAJORITY_VPS: u32 = 3;
/// Points per blessing and per technology card.
pub const CARD_VPS: u32 = 2;
/// Points per decree at game end.
pub const DECREE_VPS: u32 = 4;
/// Points for holding first turn order at game end.
pub const TURN_ORDER_VPS: u32 = 3;

/// Happiness thresholds and their points, highest first.
const HAPPINESS_TIERS: [(u32, u32); 5] = [(21, 15), (19, 12), (16, 9), (13, 6), (9, 3)];

/// Stateless scoring functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    /// Majority holder of a resource region.
    ///
    /// Counts `statue` (the pair slot's owner, real or simulated) plus the
    /// region's six buildings. A tie goes to whoever holds the first
    /// claimed piece scanning statue first, then buildings in slot order.
    /// An empty region has no winner.
    #[must_use]
    pub fn region_winner(board: &BoardState, region: Material, statue: Owner) -> Option<Side> {
        let pieces = std::iter::once(statue).chain(board.region(region).iter().copied());
        let (mut bot, mut opponent) = (0usize, 0usize);
        let mut first = None;
        for piece in pieces {
            match piece {
                Owner::Bot => bot += 1,
                Owner::Opponent => opponent += 1,
                Owner::Unclaimed => continue,
            }
            first = first.or(piece.side());
        }

        match bot.cmp(&opponent) {
            std::cmp::Ordering::Greater => Some(Side::Bot),
            std::cmp::Ordering::Less => Some(Side::Opponent),
            std::cmp::Ordering::Equal => first,
        }
    }

    /// Pair statue owner for a region.
    #[must_use]
    pub fn region_statue(board: &BoardState, region: Material) -> Owner {
        ResourcePair::for_region(region)
            .map_or(Owner::Unclaimed, |pair| board.statue(StatueSlot::Pair(pair)))
    }

    /// Region majority: 3 points per region won.
    pub fn score_regions(board: &mut BoardState, side: Side) -> Vec<GameEvent> {
        Material::RESOURCES
            .into_iter()
            .map(|region| {
                let statue = Self::region_statue(board, region);
                let winner = Self::region_winner(board, region, statue);
                let vps = if winner == Some(side) { REGION_MAJORITY_VPS } else { 0 };
                board.resources[side].vps += vps;
                info!(%region, ?winner, vps, "region scored");
                GameEvent::RegionScored { region, winner, vps }
            })
            .collect()
    }

    /// Temple points as (buildings, pillars).
    ///
    /// One point per temple building or temple statue held. Each own pillar
    /// earns one point per own temple building facing its row or column,
    /// plus one if it sits on a center line whose temple statue is owned.
    #[must_use]
    pub fn temple_points(board: &BoardState, side: Side) -> (u32, u32) {
        let horizontal = board.temple_axis(Axis::Horizontal);
        let vertical = board.temple_axis(Axis::Vertical);
        let h_statue = board.statue(StatueSlot::Temple(Axis::Horizontal)).is(side);
        let v_statue = board.statue(StatueSlot::Temple(Axis::Vertical)).is(side);

        let buildings = horizontal
            .iter()
            .chain(vertical.iter())
            .filter(|o| o.is(side))
            .count()
            + usize::from(h_statue)
            + usize::from(v_statue);

        let mut pillars = 0;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                if !board.pillar(row, col).is(side) {
                    continue;
                }
                pillars += usize::from(horizontal[row].is(side));
                pillars += usize::from(vertical[col].is(side));
                pillars += usize::from(row == CENTER && h_statue);
                pillars += usize::from(col == CENTER && v_statue);
            }
        }

        (to_vps(buildings), to_vps(pillars))
    }

    /// Temple buildings and pillars.
    pub fn score_temple(board: &mut BoardState, side: Side) -> GameEvent {
        let (building_vps, pillar_vps) = Self::temple_points(board, side);
        board.resources[side].vps += building_vps + pillar_vps;
        info!(building_vps, pillar_vps, "temple scored");
        GameEvent::TempleScored { building_vps, pillar_vps }
    }

    /// Triangular points for `statues` built.
    #[must_use]
    pub fn statue_points(statues: usize) -> u32 {
        to_vps(statues * (statues + 1) / 2)
    }

    /// Statues built.
    pub fn score_statues(board: &mut BoardState, side: Side) -> GameEvent {
        let statues = board.statues_built(side);
        let vps = Self::statue_points(statues);
        board.resources[side].vps += vps;
        info!(statues, vps, "statues scored");
        GameEvent::StatuesScored { statues, vps }
    }

    /// Tiered happiness points.
    #[must_use]
    pub fn happiness_points(happiness: u32) -> u32 {
        HAPPINESS_TIERS
            .iter()
            .find(|&&(threshold, _)| happiness >= threshold)
            .map_or(0, |&(_, vps)| vps)
    }

    /// Happiness track.
    pub fn score_happiness(board: &mut BoardState, side: Side) -> GameEvent {
        let happiness = board.resources[side].happiness;
        let vps = Self::happiness_points(happiness);
        board.resources[side].vps += vps;
        info!(happiness, vps, "happiness scored");
        GameEvent::HappinessScored { happiness, vps }
    }

    /// Blessings and technologies. Blessings are spent; technologies stay.
    pub fn score_cards(board: &mut BoardState, side: Side) -> GameEvent {
        let resources = &mut board.resources[side];
        let blessing_vps = CARD_VPS * resources.blessings;
        let technology_vps = CARD_VPS * resources.technologies;
        resources.vps += blessing_vps + technology_vps;
        resources.blessings = 0;
        info!(blessing_vps, technology_vps, "cards scored");
        GameEvent::CardsScored { blessing_vps, technology_vps }
    }

    /// Every category of a regular scoring phase, in fixed order.
    pub fn score_phase(board: &mut BoardState, side: Side) -> Vec<GameEvent> {
        let mut events = Self::score_regions(board, side);
        events.push(Self::score_temple(board, side));
        events.push(Self::score_statues(board, side));
        events.push(Self::score_happiness(board, side));
        events.push(Self::score_cards(board, side));
        events
    }

    /// Final round extras: decrees, scribes, and first turn order.
    pub fn score_endgame(board: &mut BoardState, side: Side, first_in_turn_order: bool) -> GameEvent {
        let resources = &mut board.resources[side];
        let decree_vps = DECREE_VPS * resources.decrees;
        let scribe_vps = resources.scribes / 2;
        let turn_order_vps = if first_in_turn_order { TURN_ORDER_VPS } else { 0 };
        resources.vps += decree_vps + scribe_vps + turn_order_vps;
        info!(decree_vps, scribe_vps, turn_order_vps, "endgame scored");
        GameEvent::EndgameScored { decree_vps, scribe_vps, turn_order_vps }
    }
}

fn to_vps(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
