//! The bot's action pyramid.
//!
//! Ten tiles stacked in four rows (four, three, two, one). A traversal
//! pattern names the four tile indices the bot visits, one per round,
//! before the next balance phase rebuilds the pyramid.

use serde::{Deserialize, Serialize};

use crate::core::{ActionTile, God, Material, RandomSource};

/// Base layout, bottom row first.
pub const BASE_TILES: [ActionTile; 10] = {
    use Material::{Bread, Granite, Limestone, Papyrus};
    [
        ActionTile::Role(God::Hathor),
        ActionTile::Role(God::Ra),
        ActionTile::Role(God::Horus),
        ActionTile::Role(God::Bastet),
        ActionTile::Role(God::Thoth),
        ActionTile::Role(God::Osiris),
        ActionTile::Materials([Granite, Limestone, Bread, Papyrus]),
        ActionTile::Materials([Papyrus, Bread, Limestone, Granite]),
        ActionTile::Materials([Limestone, Granite, Papyrus, Bread]),
        ActionTile::Materials([Bread, Papyrus, Granite, Limestone]),
    ]
};

/// Legal paths up the pyramid. Each step stays on the same row or climbs
/// to an adjacent tile of the row above.
pub const TRAVERSAL_PATTERNS: [[usize; 4]; 8] = [
    [0, 1, 2, 3],
    [0, 1, 2, 6],
    [0, 1, 5, 6],
    [0, 1, 5, 8],
    [0, 4, 5, 6],
    [0, 4, 5, 8],
    [0, 4, 7, 8],
    [0, 4, 7, 9],
];

/// Tile layout plus the traversal pattern in force.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPyramid {
    tiles: [ActionTile; 10],
    pattern: [usize; 4],
}

impl ActionPyramid {
    /// Base layout with a random traversal pattern.
    pub fn new<R: RandomSource>(rng: &mut R) -> Self {
        Self {
            tiles: BASE_TILES,
            pattern: Self::random_pattern(rng),
        }
    }

    /// Fixed layout and pattern.
    ///
    /// # Panics
    ///
    /// If `pattern` is not one of [`TRAVERSAL_PATTERNS`].
    #[must_use]
    pub fn with_layout(tiles: [ActionTile; 10], pattern: [usize; 4]) -> Self {
        assert!(
            TRAVERSAL_PATTERNS.contains(&pattern),
            "{pattern:?} is not a legal traversal pattern"
        );
        Self { tiles, pattern }
    }

    /// Shuffle the tiles and pick a new pattern.
    pub fn rebuild<R: RandomSource>(&mut self, rng: &mut R) {
        rng.shuffle(&mut self.tiles);
        self.pattern = Self::random_pattern(rng);
    }

    /// Tile the bot plays in `round` (1-based).
    #[must_use]
    pub fn tile_for_round(&self, round: u8) -> ActionTile {
        let step = usize::from(round.saturating_sub(1)) % self.pattern.len();
        self.tiles[self.pattern[step]]
    }

    #[must_use]
    pub fn tiles(&self) -> &[ActionTile; 10] {
        &self.tiles
    }

    #[must_use]
    pub fn pattern(&self) -> [usize; 4] {
        self.pattern
    }

    fn random_pattern<R: RandomSource>(rng: &mut R) -> [usize; 4] {
        TRAVERSAL_PATTERNS[rng.index(TRAVERSAL_PATTERNS.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, ScriptedRng};

    #[test]
    fn test_patterns_start_at_bottom_left() {
        for pattern in TRAVERSAL_PATTERNS {
            assert_eq!(pattern[0], 0);
            assert!(pattern.iter().all(|&i| i < BASE_TILES.len()));
        }
    }

    #[test]
    fn test_tile_for_round_cycles_pattern() {
        let pyramid = ActionPyramid::with_layout(BASE_TILES, [0, 4, 7, 9]);

        assert_eq!(pyramid.tile_for_round(1), ActionTile::Role(God::Hathor));
        assert_eq!(pyramid.tile_for_round(2), ActionTile::Role(God::Thoth));
        assert_eq!(pyramid.tile_for_round(3), BASE_TILES[7]);
        assert_eq!(pyramid.tile_for_round(4), BASE_TILES[9]);
        assert_eq!(pyramid.tile_for_round(5), ActionTile::Role(God::Hathor));
    }

    #[test]
    fn test_new_uses_base_layout() {
        let mut rng = ScriptedRng::new(vec![6]);
        let pyramid = ActionPyramid::new(&mut rng);
        assert_eq!(pyramid.tiles(), &BASE_TILES);
        assert_eq!(pyramid.pattern(), [0, 4, 7, 8]);
    }

    #[test]
    fn test_rebuild_is_permutation() {
        let mut rng = GameRng::new(11);
        let mut pyramid = ActionPyramid::new(&mut rng);
        pyramid.rebuild(&mut rng);

        for tile in BASE_TILES {
            assert_eq!(pyramid.tiles().iter().filter(|&&t| t == tile).count(), 1);
        }
        assert!(TRAVERSAL_PATTERNS.contains(&pyramid.pattern()));
    }

    #[test]
    fn test_display() {
        assert_eq!(BASE_TILES[2].to_string(), "Horus");
        assert_eq!(BASE_TILES[6].to_string(), "Granite/Limestone/Bread/Papyrus");
    }

    #[test]
    #[should_panic(expected = "not a legal traversal pattern")]
    fn test_illegal_pattern_rejected() {
        let _ = ActionPyramid::with_layout(BASE_TILES, [0, 9, 1, 2]);
    }
}
