//! The arena's hard-coded roster
//!
//! Every fighter that can be called into a battle, with literal stats.

use crate::entities::{Combatant, Species};
use crate::error::{ArenaError, Result};

/// Combatant definition with all starting stats
pub struct CombatantDef {
    pub name: &'static str,
    pub species: Species,
    pub health: i32,
    pub strength: i32,
    pub block: i32,
    pub dodge: i32,
}

impl CombatantDef {
    /// Build a fresh combatant from this definition
    pub fn spawn(&self) -> Result<Combatant> {
        Combatant::builder(self.species)
            .name(self.name)
            .health(self.health)
            .strength(self.strength)
            .block(self.block)
            .dodge(self.dodge)
            .build()
    }
}

pub const JOHN: CombatantDef = CombatantDef {
    name: "John",
    species: Species::Human,
    health: 80,
    strength: 6,
    block: 5,
    dodge: 5,
};

pub const BOROMIR: CombatantDef = CombatantDef {
    name: "Boromir",
    species: Species::Dragon,
    health: 125,
    strength: 8,
    block: 5,
    dodge: 2,
};

pub const EVAN: CombatantDef = CombatantDef {
    name: "Evan",
    species: Species::Human,
    health: 100,
    strength: 4,
    block: 5,
    dodge: 5,
};

pub const STACY: CombatantDef = CombatantDef {
    name: "Stacy",
    species: Species::Giant,
    health: 150,
    strength: 10,
    block: 5,
    dodge: 1,
};

/// Everyone who can be called into the arena
pub const ROSTER: [&CombatantDef; 4] = [&JOHN, &BOROMIR, &EVAN, &STACY];

/// Names fighting when no line-up is chosen
pub const DEFAULT_LINEUP: [&str; 3] = ["Boromir", "Stacy", "Evan"];

/// Find a definition by name (case-insensitive)
pub fn find(name: &str) -> Option<&'static CombatantDef> {
    ROSTER.iter().copied().find(|def| def.name.eq_ignore_ascii_case(name))
}

/// Spawn combatants for the given names, in order
pub fn lineup<S: AsRef<str>>(names: &[S]) -> Result<Vec<Combatant>> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            find(name)
                .ok_or_else(|| ArenaError::UnknownCombatant(name.to_string()))?
                .spawn()
        })
        .collect()
}

/// Spawn the default line-up
pub fn default_lineup() -> Result<Vec<Combatant>> {
    lineup(&DEFAULT_LINEUP)
}
