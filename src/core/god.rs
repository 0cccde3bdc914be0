//! Gods (roles) and the role order.
//!
//! Two orderings exist and must not be confused:
//!
//! - [`God::CYCLE`] is the fixed clockwise order used for lighting
//!   rotation and for the die-selection fallback.
//! - [`RoleOrder`] is the per-session permutation that maps die faces
//!   1..6 to statue targets and decides the statue bonus band.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// One of the six gods, each with a statue slot and an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum God {
    /// Statues.
    Horus,
    /// Pillars.
    Ra,
    /// Temple buildings.
    Hathor,
    /// Scribes and happiness.
    Bastet,
    /// Cards.
    Thoth,
    /// Resource buildings.
    Osiris,
}

impl God {
    /// Fixed cyclic order around the board.
    pub const CYCLE: [God; 6] = [
        God::Horus,
        God::Ra,
        God::Hathor,
        God::Bastet,
        God::Thoth,
        God::Osiris,
    ];

    /// Position in [`God::CYCLE`].
    #[must_use]
    pub const fn cycle_index(self) -> usize {
        match self {
            God::Horus => 0,
            God::Ra => 1,
            God::Hathor => 2,
            God::Bastet => 3,
            God::Thoth => 4,
            God::Osiris => 5,
        }
    }

    /// The god `offset` steps clockwise from this one.
    #[must_use]
    pub const fn offset(self, offset: usize) -> God {
        God::CYCLE[(self.cycle_index() + offset) % 6]
    }

    /// The previous god in the cycle (wrapping).
    #[must_use]
    pub const fn previous(self) -> God {
        self.offset(5)
    }
}

impl std::fmt::Display for God {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Session permutation of the six gods.
///
/// Position 0 is reached by a die showing 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[God; 6]", into = "[God; 6]")]
pub struct RoleOrder([God; 6]);

impl RoleOrder {
    /// Create a role order, rejecting anything that is not a permutation.
    pub fn new(order: [God; 6]) -> Result<Self, ConfigError> {
        for god in God::CYCLE {
            if !order.contains(&god) {
                return Err(ConfigError::RoleOrderNotPermutation { missing: god });
            }
        }
        Ok(Self(order))
    }

    /// The god reached by a die face (1..6).
    #[must_use]
    pub fn god_for_value(&self, value: u8) -> God {
        assert!((1..=6).contains(&value), "die value {value} out of range");
        self.0[usize::from(value - 1)]
    }

    /// Position (0..6) of a god in this order.
    #[must_use]
    pub fn position(&self, god: God) -> usize {
        self.0
            .iter()
            .position(|&g| g == god)
            .unwrap_or_else(|| unreachable!("role order is a permutation"))
    }

    /// Gods in order.
    #[must_use]
    pub fn gods(&self) -> &[God; 6] {
        &self.0
    }
}

impl Default for RoleOrder {
    fn default() -> Self {
        Self(God::CYCLE)
    }
}

impl TryFrom<[God; 6]> for RoleOrder {
    type Error = ConfigError;

    fn try_from(order: [God; 6]) -> Result<Self, Self::Error> {
        Self::new(order)
    }
}

impl From<RoleOrder> for [God; 6] {
    fn from(order: RoleOrder) -> Self {
        order.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_offsets_wrap() {
        assert_eq!(God::Horus.offset(1), God::Ra);
        assert_eq!(God::Osiris.offset(1), God::Horus);
        assert_eq!(God::Horus.previous(), God::Osiris);
        assert_eq!(God::Thoth.offset(5), God::Bastet);
    }

    #[test]
    fn test_cycle_index_matches_cycle() {
        for (i, god) in God::CYCLE.iter().enumerate() {
            assert_eq!(god.cycle_index(), i);
        }
    }

    #[test]
    fn test_role_order_maps_values() {
        let order = RoleOrder::new([
            God::Thoth,
            God::Ra,
            God::Horus,
            God::Osiris,
            God::Bastet,
            God::Hathor,
        ])
        .unwrap();

        assert_eq!(order.god_for_value(1), God::Thoth);
        assert_eq!(order.god_for_value(6), God::Hathor);
        assert_eq!(order.position(God::Osiris), 3);
    }

    #[test]
    fn test_role_order_rejects_duplicates() {
        let err = RoleOrder::new([God::Ra; 6]).unwrap_err();
        assert!(matches!(err, ConfigError::RoleOrderNotPermutation { missing: God::Horus }));
    }

    #[test]
    fn test_role_order_serde_validates() {
        let json = serde_json::to_string(&RoleOrder::default()).unwrap();
        let back: RoleOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RoleOrder::default());

        let bad = r#"["Ra","Ra","Ra","Ra","Ra","Ra"]"#;
        assert!(serde_json::from_str::<RoleOrder>(bad).is_err());
    }
}
