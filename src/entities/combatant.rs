//! Combatant stats and construction

use crate::error::{ArenaError, Result};
use super::Species;

/// Highest dodge value; a combatant with this dodge avoids every dodgeable attack
pub const MAX_DODGE: i32 = 10;

/// A fighter in the arena
///
/// `current_health` and `block` change while the battle runs. Everything else
/// is fixed when the combatant is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Combatant {
    name: String,
    species: Species,
    max_health: i32,
    strength: i32,
    dodge: i32,
    /// Current hit points. May drop to zero or below, which marks defeat.
    pub current_health: i32,
    /// Damage buffer absorbed before health is touched
    pub block: i32,
}

impl Combatant {
    /// Start building a combatant of the given species
    pub fn builder(species: Species) -> CombatantBuilder {
        CombatantBuilder::new(species)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    /// Chance out of 10 of avoiding a dodgeable attack
    pub fn dodge(&self) -> i32 {
        self.dodge
    }

    pub fn is_defeated(&self) -> bool {
        self.current_health <= 0
    }

    /// Subtract health directly, bypassing block and dodge
    pub fn take_damage(&mut self, amount: i32) {
        self.current_health = self.current_health.saturating_sub(amount);
    }

    /// Restore health, optionally clamped to max health.
    /// Returns the amount actually restored.
    pub fn heal(&mut self, amount: i32, clamp_to_max: bool) -> i32 {
        let actual = if clamp_to_max {
            amount.min(self.max_health.saturating_sub(self.current_health)).max(0)
        } else {
            amount
        };
        self.current_health = self.current_health.saturating_add(actual);
        actual
    }

    pub fn add_block(&mut self, amount: i32) {
        self.block += amount;
    }
}

/// Builder for [`Combatant`]
///
/// A name is required; every other stat defaults to zero (health to 1).
#[derive(Debug, Clone)]
pub struct CombatantBuilder {
    species: Species,
    name: Option<String>,
    health: i32,
    strength: i32,
    block: i32,
    dodge: i32,
}

impl CombatantBuilder {
    pub fn new(species: Species) -> Self {
        Self {
            species,
            name: None,
            health: 1,
            strength: 0,
            block: 0,
            dodge: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set both current and max health
    pub fn health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    /// Strength, floored at zero
    pub fn strength(mut self, strength: i32) -> Self {
        self.strength = strength.max(0);
        self
    }

    /// Starting block, floored at zero
    pub fn block(mut self, block: i32) -> Self {
        self.block = block.max(0);
        self
    }

    /// Dodge chance out of 10, clamped to `0..=10`
    pub fn dodge(mut self, dodge: i32) -> Self {
        self.dodge = dodge.clamp(0, MAX_DODGE);
        self
    }

    pub fn build(self) -> Result<Combatant> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ArenaError::MissingName),
        };

        Ok(Combatant {
            name,
            species: self.species,
            max_health: self.health,
            strength: self.strength,
            dodge: self.dodge,
            current_health: self.health,
            block: self.block,
        })
    }
}
