//! Built-in game content
//!
//! The arena has no external data files; the roster lives here as constants.

pub mod roster;

pub use roster::{CombatantDef, ROSTER, DEFAULT_LINEUP, default_lineup, lineup};
