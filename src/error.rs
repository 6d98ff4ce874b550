//! Arena error types

use thiserror::Error;

use crate::combat::ActionKind;
use crate::entities::Species;

/// Errors raised while setting up or running a battle
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArenaError {
    /// A combatant was built without a name
    #[error("combatant must have a name")]
    MissingName,

    /// An action slot was declared but never given a behaviour
    #[error("action `{action}` has not been given to {species} yet")]
    ActionNotImplemented { species: Species, action: ActionKind },

    #[error("cannot start a battle with no combatants")]
    EmptyRoster,

    #[error("combatant name `{0}` is used more than once")]
    DuplicateName(String),

    #[error("no combatant named `{0}` in the roster")]
    UnknownCombatant(String),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
