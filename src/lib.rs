//! Arena - a turn-based brawl between humans, dragons and giants
//!
//! Everyone fights everyone, one random move each per round, until a
//! single combatant is left standing.

pub mod error;
pub mod entities;
pub mod combat;
pub mod game;
pub mod data;
pub mod ui;
pub mod audio;

// Re-export commonly used types
pub use error::{ArenaError, Result};
pub use entities::{Combatant, Species};
pub use combat::{ActionKind, ActionRegistry};
pub use game::{Battle, BattleConfig, BattleOutcome, BattleState};
