//! Dice, materials, lighting conditions and the per-god dice pool.
//!
//! ## DicePool
//!
//! Each god holds a raw list of dice plus three polarity buckets derived
//! from it by the lighting resolver. Consuming a die removes it from both
//! places in one step, so the two views never desync.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::god::God;

/// Die material. Four resources plus neutral gray.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    Papyrus,
    Bread,
    Limestone,
    Granite,
    /// Neutral; tainted under every condition.
    Gray,
}

impl Material {
    /// The four resource regions in precedence order.
    pub const RESOURCES: [Material; 4] = [
        Material::Papyrus,
        Material::Bread,
        Material::Limestone,
        Material::Granite,
    ];

    /// All five materials.
    pub const ALL: [Material; 5] = [
        Material::Papyrus,
        Material::Bread,
        Material::Limestone,
        Material::Granite,
        Material::Gray,
    ];

    /// Check whether this is a resource (anything but gray).
    #[must_use]
    pub const fn is_resource(self) -> bool {
        !matches!(self, Material::Gray)
    }

    /// Position in [`Material::RESOURCES`]. `None` for gray.
    #[must_use]
    pub const fn region_index(self) -> Option<usize> {
        match self {
            Material::Papyrus => Some(0),
            Material::Bread => Some(1),
            Material::Limestone => Some(2),
            Material::Granite => Some(3),
            Material::Gray => None,
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

/// Lighting condition of a god under the current sun position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lighting {
    Sunny,
    Shaded,
    Dark,
}

/// Usability class of a die.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    Pure,
    Tainted,
    /// Never usable.
    Forbidden,
}

impl Polarity {
    /// All polarities.
    pub const ALL: [Polarity; 3] = [Polarity::Forbidden, Polarity::Pure, Polarity::Tainted];

    /// Check whether dice of this polarity may be taken.
    #[must_use]
    pub const fn is_usable(self) -> bool {
        !matches!(self, Polarity::Forbidden)
    }
}

/// A single die: material and face value 1..6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(Material, u8)", into = "(Material, u8)")]
pub struct Die {
    material: Material,
    value: u8,
}

impl Die {
    /// Create a die, rejecting face values outside 1..6.
    pub fn new(material: Material, value: u8) -> Result<Self, ConfigError> {
        if !(1..=6).contains(&value) {
            return Err(ConfigError::DieValueOutOfRange { value });
        }
        Ok(Self { material, value })
    }

    /// Die material.
    #[must_use]
    pub const fn material(self) -> Material {
        self.material
    }

    /// Face value, 1..6.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }
}

impl TryFrom<(Material, u8)> for Die {
    type Error = ConfigError;

    fn try_from((material, value): (Material, u8)) -> Result<Self, Self::Error> {
        Self::new(material, value)
    }
}

impl From<Die> for (Material, u8) {
    fn from(die: Die) -> Self {
        (die.material, die.value)
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.material, self.value)
    }
}

/// Dice of one god split by polarity.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PolarityBuckets {
    pub forbidden: Vec<Die>,
    pub pure: Vec<Die>,
    pub tainted: Vec<Die>,
}

impl PolarityBuckets {
    /// Dice in one bucket.
    #[must_use]
    pub fn get(&self, polarity: Polarity) -> &[Die] {
        match polarity {
            Polarity::Forbidden => &self.forbidden,
            Polarity::Pure => &self.pure,
            Polarity::Tainted => &self.tainted,
        }
    }

    fn get_mut(&mut self, polarity: Polarity) -> &mut Vec<Die> {
        match polarity {
            Polarity::Forbidden => &mut self.forbidden,
            Polarity::Pure => &mut self.pure,
            Polarity::Tainted => &mut self.tainted,
        }
    }

    /// Push a die into its bucket.
    pub fn push(&mut self, polarity: Polarity, die: Die) {
        self.get_mut(polarity).push(die);
    }

    /// Usable dice with their polarity, pure first.
    pub fn usable(&self) -> impl Iterator<Item = (Polarity, Die)> + '_ {
        self.pure
            .iter()
            .map(|&d| (Polarity::Pure, d))
            .chain(self.tainted.iter().map(|&d| (Polarity::Tainted, d)))
    }
}

/// Dice on the board, per god.
#[derive(Clone, Debug, Default)]
pub struct DicePool {
    raw: FxHashMap<God, Vec<Die>>,
    buckets: FxHashMap<God, PolarityBuckets>,
}

impl DicePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a die to a god. Buckets are stale until the next resolve.
    pub fn add(&mut self, god: God, die: Die) {
        self.raw.entry(god).or_default().push(die);
    }

    /// Raw dice of a god.
    #[must_use]
    pub fn raw(&self, god: God) -> &[Die] {
        self.raw.get(&god).map_or(&[], Vec::as_slice)
    }

    /// Polarity buckets of a god.
    #[must_use]
    pub fn buckets(&self, god: God) -> Option<&PolarityBuckets> {
        self.buckets.get(&god)
    }

    /// Dice of a god in one polarity bucket.
    #[must_use]
    pub fn bucket(&self, god: God, polarity: Polarity) -> &[Die] {
        self.buckets.get(&god).map_or(&[], |b| b.get(polarity))
    }

    /// Rebuild every god's buckets from its raw dice.
    ///
    /// `classify` gives the polarity of a material on a god. Buckets are
    /// only ever derived here, so each one partitions its raw list.
    pub fn rebucket<F>(&mut self, mut classify: F)
    where
        F: FnMut(God, Material) -> Polarity,
    {
        self.buckets = God::CYCLE
            .into_iter()
            .map(|god| {
                let mut buckets = PolarityBuckets::default();
                for &die in self.raw(god) {
                    buckets.push(classify(god, die.material()), die);
                }
                (god, buckets)
            })
            .collect();
    }

    /// Check whether every god's buckets hold exactly its raw dice.
    #[must_use]
    pub fn in_sync(&self) -> bool {
        God::CYCLE.into_iter().all(|god| {
            let key = |d: &Die| (d.material().region_index(), d.value());
            let mut raw = self.raw(god).to_vec();
            let mut bucketed: Vec<Die> = self
                .buckets(god)
                .map(|b| {
                    let all = [&b.forbidden, &b.pure, &b.tainted];
                    all.into_iter().flatten().copied().collect()
                })
                .unwrap_or_default();
            raw.sort_by_key(key);
            bucketed.sort_by_key(key);
            raw == bucketed
        })
    }

    /// Total number of raw dice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.values().map(Vec::len).sum()
    }

    /// Check whether no dice remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether a die is present in both the raw list and the bucket.
    #[must_use]
    pub fn contains(&self, god: God, polarity: Polarity, die: Die) -> bool {
        self.raw(god).contains(&die) && self.bucket(god, polarity).contains(&die)
    }

    /// Remove one matching die from the raw list and its bucket.
    ///
    /// Returns false, leaving the pool untouched, if either view lacks it.
    pub fn remove(&mut self, god: God, polarity: Polarity, die: Die) -> bool {
        if !self.contains(god, polarity, die) {
            return false;
        }
        if let Some(raw) = self.raw.get_mut(&god) {
            if let Some(pos) = raw.iter().position(|&d| d == die) {
                raw.remove(pos);
            }
        }
        if let Some(bucket) = self.buckets.get_mut(&god) {
            let dice = bucket.get_mut(polarity);
            if let Some(pos) = dice.iter().position(|&d| d == die) {
                dice.remove(pos);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn die(material: Material, value: u8) -> Die {
        Die::new(material, value).unwrap()
    }

    #[test]
    fn test_die_value_range() {
        assert!(Die::new(Material::Gray, 0).is_err());
        assert!(Die::new(Material::Gray, 7).is_err());
        assert_eq!(die(Material::Bread, 6).value(), 6);
    }

    #[test]
    fn test_die_serde() {
        let d = die(Material::Granite, 4);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(serde_json::from_str::<Die>(&json).unwrap(), d);
        assert!(serde_json::from_str::<Die>(r#"["Granite",9]"#).is_err());
    }

    #[test]
    fn test_region_index() {
        for (i, m) in Material::RESOURCES.iter().enumerate() {
            assert_eq!(m.region_index(), Some(i));
        }
        assert_eq!(Material::Gray.region_index(), None);
    }

    #[test]
    fn test_remove_keeps_views_in_sync() {
        let mut pool = DicePool::new();
        let d = die(Material::Papyrus, 3);
        pool.add(God::Ra, d);

        pool.rebucket(|_, _| Polarity::Pure);

        assert!(!pool.remove(God::Ra, Polarity::Tainted, d));
        assert_eq!(pool.len(), 1);

        assert!(pool.remove(God::Ra, Polarity::Pure, d));
        assert!(pool.is_empty());
        assert!(pool.bucket(God::Ra, Polarity::Pure).is_empty());
    }

    #[test]
    fn test_remove_requires_resolved_bucket() {
        let mut pool = DicePool::new();
        let d = die(Material::Gray, 2);
        pool.add(God::Thoth, d);

        // Not yet resolved: raw has it, bucket does not.
        assert!(!pool.remove(God::Thoth, Polarity::Tainted, d));
        assert_eq!(pool.raw(God::Thoth), &[d]);
        assert!(!pool.in_sync());
    }

    #[test]
    fn test_rebucket_partitions_raw() {
        let mut pool = DicePool::new();
        let papyrus = die(Material::Papyrus, 4);
        let gray = die(Material::Gray, 1);
        pool.add(God::Ra, papyrus);
        pool.add(God::Ra, gray);
        pool.add(God::Osiris, papyrus);

        pool.rebucket(|god, material| match (god, material) {
            (_, Material::Gray) => Polarity::Tainted,
            (God::Ra, _) => Polarity::Forbidden,
            _ => Polarity::Pure,
        });
        assert!(pool.in_sync());
        assert_eq!(pool.bucket(God::Ra, Polarity::Forbidden), &[papyrus]);
        assert_eq!(pool.bucket(God::Ra, Polarity::Tainted), &[gray]);
        assert_eq!(pool.bucket(God::Osiris, Polarity::Pure), &[papyrus]);

        // A second rebuild replaces, never appends.
        pool.rebucket(|_, _| Polarity::Pure);
        assert!(pool.in_sync());
        assert_eq!(pool.bucket(God::Ra, Polarity::Pure).len(), 2);
        assert!(pool.bucket(God::Ra, Polarity::Forbidden).is_empty());

        assert!(pool.remove(God::Ra, Polarity::Pure, gray));
        assert!(pool.in_sync());
    }
}
