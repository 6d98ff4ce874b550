//! Combatant species
//!
//! Each species carries its own action table on top of the shared defaults.

use std::fmt;

/// The kinds of creature that can enter the arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Human,
    Dragon,
    Giant,
}

impl Species {
    /// All species, in registry order
    pub const ALL: [Species; 3] = [Species::Human, Species::Dragon, Species::Giant];

    /// Get display name for this species
    pub fn name(&self) -> &'static str {
        match self {
            Species::Human => "Human",
            Species::Dragon => "Dragon",
            Species::Giant => "Giant",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
