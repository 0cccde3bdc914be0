//! Session configuration.
//!
//! Hosts describe a session once, at construction:
//! - role order and the first sunny god
//! - the dice sitting on each god at the start
//! - difficulty, which decides the bot's pre-placed setup pieces
//! - starting resources and the RNG seed

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::dice::Die;
use super::error::ConfigError;
use super::god::{God, RoleOrder};
use super::state::Resources;

/// Bot difficulty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Bot starts with a single setup statue.
    #[default]
    Easy,
    /// Bot additionally starts with two resource buildings and the center pillar.
    Medium,
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Die face to god mapping for statues and statue bonuses.
    pub role_order: RoleOrder,

    /// First of the two sunny gods.
    pub first_sunny: God,

    /// Dice on each god at game start.
    pub starting_dice: FxHashMap<God, Vec<Die>>,

    pub difficulty: Difficulty,

    /// Bot resources at game start.
    pub starting_resources: Resources,

    /// Seed for every tie-break and shuffle.
    pub seed: u64,
}

impl SessionConfig {
    /// Create a configuration with no dice, easy difficulty and seed 0.
    #[must_use]
    pub fn new(role_order: RoleOrder, first_sunny: God) -> Self {
        Self {
            role_order,
            first_sunny,
            starting_dice: FxHashMap::default(),
            difficulty: Difficulty::default(),
            starting_resources: Resources::default(),
            seed: 0,
        }
    }

    /// Add a starting die to a god.
    #[must_use]
    pub fn with_die(mut self, god: God, die: Die) -> Self {
        self.starting_dice.entry(god).or_default().push(die);
        self
    }

    /// Set the difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the bot's starting resources.
    #[must_use]
    pub fn with_resources(mut self, resources: Resources) -> Self {
        self.starting_resources = resources;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration can start a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.starting_dice.values().all(Vec::is_empty) {
            return Err(ConfigError::NoStartingDice);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Material;

    fn die(material: Material, value: u8) -> Die {
        Die::new(material, value).unwrap()
    }

    #[test]
    fn test_builder() {
        let config = SessionConfig::new(RoleOrder::default(), God::Ra)
            .with_die(God::Ra, die(Material::Gray, 1))
            .with_die(God::Ra, die(Material::Bread, 4))
            .with_difficulty(Difficulty::Medium)
            .with_seed(9);

        assert_eq!(config.first_sunny, God::Ra);
        assert_eq!(config.starting_dice[&God::Ra].len(), 2);
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.seed, 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let config = SessionConfig::new(RoleOrder::default(), God::Horus);
        assert_eq!(config.validate(), Err(ConfigError::NoStartingDice));
    }

    #[test]
    fn test_config_serde() {
        let config = SessionConfig::new(RoleOrder::default(), God::Thoth)
            .with_die(God::Osiris, die(Material::Granite, 5));
        let json = serde_json::to_string(&config).unwrap();
        let back: SessionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
