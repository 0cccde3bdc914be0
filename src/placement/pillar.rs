//! Pillar placement.
//!
//! Every free cell scores `ceil(value / 2)`, plus one per temple building
//! (either side's) facing its row or column, plus one per occupied
//! orthogonal neighbor, where the grid edge counts as occupied. The best
//! score wins. Ties narrow to cells facing an own temple building, then
//! to the cells closest to the center, then break randomly.

use smallvec::SmallVec;
use tracing::debug;

use super::Placement;
use crate::core::{
    Axis, BoardState, Owner, PieceKind, RandomSource, Side, CENTER, GRID_SIZE, TOTAL_PILLARS,
};

type Cells = SmallVec<[(usize, usize); 8]>;

/// Setup pillar: the center cell, no points.
#[must_use]
pub const fn setup_pillar() -> Placement {
    Placement::Pillar { row: CENTER, col: CENTER, vps: 0 }
}

/// Decide where `side` builds a pillar for a die showing `value`.
pub fn decide_pillar<R: RandomSource>(
    board: &BoardState,
    value: u8,
    side: Side,
    rng: &mut R,
) -> Placement {
    if board.pillars_built(side) >= TOTAL_PILLARS {
        return Placement::CapReached(PieceKind::Pillar);
    }

    let mut best = 0;
    let mut candidates = Cells::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            if board.pillar(row, col).is_claimed() {
                continue;
            }
            let score = cell_score(board, value, row, col);
            if candidates.is_empty() || score > best {
                best = score;
                candidates.clear();
            }
            if score == best {
                candidates.push((row, col));
            }
        }
    }

    let Some((row, col)) = break_tie(board, side, &candidates, rng) else {
        return Placement::NoFreeSlot(PieceKind::Pillar);
    };
    Placement::Pillar { row, col, vps: best }
}

/// Points a pillar on (`row`, `col`) would score.
#[must_use]
pub fn cell_score(board: &BoardState, value: u8, row: usize, col: usize) -> u32 {
    let base = u32::from(value).div_ceil(2);
    let buildings = u32::from(board.temple_axis(Axis::Horizontal)[row].is_claimed())
        + u32::from(board.temple_axis(Axis::Vertical)[col].is_claimed());
    base + buildings + neighbor_bonus(board.pillars(), row, col)
}

/// Occupied orthogonal neighbors; positions off the grid count as occupied.
#[must_use]
pub fn neighbor_bonus(grid: &[[Owner; GRID_SIZE]; GRID_SIZE], row: usize, col: usize) -> u32 {
    let occupied = |r: Option<usize>, c: Option<usize>| match (r, c) {
        (Some(r), Some(c)) if r < GRID_SIZE && c < GRID_SIZE => grid[r][c].is_claimed(),
        _ => true,
    };
    [
        occupied(row.checked_sub(1), Some(col)),
        occupied(Some(row + 1), Some(col)),
        occupied(Some(row), col.checked_sub(1)),
        occupied(Some(row), Some(col + 1)),
    ]
    .into_iter()
    .map(u32::from)
    .sum()
}

/// Closeness to the center: edge 0, one in 1, center 2, per axis.
#[must_use]
pub const fn center_affinity(row: usize, col: usize) -> u32 {
    line_affinity(row) + line_affinity(col)
}

const fn line_affinity(index: usize) -> u32 {
    match index {
        1 | 3 => 1,
        2 => 2,
        _ => 0,
    }
}

fn break_tie<R: RandomSource>(
    board: &BoardState,
    side: Side,
    candidates: &[(usize, usize)],
    rng: &mut R,
) -> Option<(usize, usize)> {
    if candidates.len() <= 1 {
        return candidates.first().copied();
    }

    let horizontal = board.temple_axis(Axis::Horizontal);
    let vertical = board.temple_axis(Axis::Vertical);
    let mut shortlist: Cells = candidates
        .iter()
        .copied()
        .filter(|&(r, c)| horizontal[r].is(side) || vertical[c].is(side))
        .collect();
    if shortlist.is_empty() {
        shortlist = candidates.iter().copied().collect();
    }

    let closest = shortlist
        .iter()
        .map(|&(r, c)| center_affinity(r, c))
        .max()
        .unwrap_or(0);
    shortlist.retain(|&mut (r, c)| center_affinity(r, c) == closest);
    debug!(candidates = candidates.len(), finalists = shortlist.len(), "pillar tie-break");

    rng.choose(&shortlist).copied()
}
