//! Combatants and the species they belong to

pub mod combatant;
pub mod species;

pub use combatant::{Combatant, CombatantBuilder};
pub use species::Species;
