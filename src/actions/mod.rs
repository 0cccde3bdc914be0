//! Bot actions.
//!
//! A bot turn reads its tile from the [`ActionPyramid`], binds the tile
//! to a die with the [`ActionSelector`], pays any statue bonus on the
//! die's god, then runs that god's action.
//!
//! ## Modules
//!
//! - `pyramid`: tile layout and traversal patterns.
//! - `selector`: role and material die selection.
//! - `bonus`: statue ownership payouts.
//! - `role`: what each god does with a die.

pub mod bonus;
pub mod pyramid;
pub mod role;
pub mod selector;

pub use bonus::{settle_statue_bonus, StatueBonus};
pub use pyramid::{ActionPyramid, BASE_TILES, TRAVERSAL_PATTERNS};
pub use role::{bastet, perform_role_action, thoth};
pub use selector::{ActionSelector, DieChoice};
