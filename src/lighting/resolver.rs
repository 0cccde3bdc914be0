//! Sun position to die polarity.

use crate::core::{DicePool, God, Lighting, Material, Polarity};

/// Lighting of `god` when `first_sunny` leads the sun.
///
/// Offsets clockwise from the first sunny god: +0 and +1 are sunny,
/// +2 and +5 shaded, +3 and +4 dark.
#[must_use]
pub fn lighting_of(god: God, first_sunny: God) -> Lighting {
    match (god.cycle_index() + 6 - first_sunny.cycle_index()) % 6 {
        0 | 1 => Lighting::Sunny,
        2 | 5 => Lighting::Shaded,
        _ => Lighting::Dark,
    }
}

/// The two shaded gods, in the order they receive new dice.
#[must_use]
pub fn shaded_gods(first_sunny: God) -> [God; 2] {
    [first_sunny.offset(2), first_sunny.offset(5)]
}

/// Polarity of a die material under a lighting condition.
#[must_use]
pub const fn polarity(material: Material, lighting: Lighting) -> Polarity {
    use Lighting::{Dark, Shaded, Sunny};
    use Polarity::{Forbidden, Pure, Tainted};

    match (material, lighting) {
        (Material::Limestone, Sunny) => Pure,
        (Material::Limestone, Shaded) => Tainted,
        (Material::Limestone, Dark) => Forbidden,
        (Material::Papyrus, Sunny) => Tainted,
        (Material::Papyrus, Shaded) => Pure,
        (Material::Papyrus, Dark) => Forbidden,
        (Material::Granite, Sunny) => Forbidden,
        (Material::Granite, Shaded) => Tainted,
        (Material::Granite, Dark) => Pure,
        (Material::Bread, Sunny) => Forbidden,
        (Material::Bread, Shaded) => Pure,
        (Material::Bread, Dark) => Tainted,
        (Material::Gray, _) => Tainted,
    }
}

/// Rebuild the pool's buckets from its raw dice.
///
/// Call after dice are added or the sun moves.
pub fn refresh(pool: &mut DicePool, first_sunny: God) {
    pool.rebucket(|god, material| polarity(material, lighting_of(god, first_sunny)));
}
