//! Dice lighting.
//!
//! The sun moves one god clockwise every two rounds. Its position splits
//! the six gods into two sunny, two shaded and two dark, and each die's
//! material under that lighting decides whether it is pure, tainted or
//! forbidden.

pub mod resolver;

pub use resolver::{lighting_of, polarity, refresh, shaded_gods};
