//! Game module - battle flow, turn order and rules

mod battle;
mod config;
mod message;
mod turn;

pub use battle::{Battle, BattleOutcome, BattleState};
pub use config::{BattleConfig, HealPolicy, TargetPolicy, DEFAULT_MAX_ROUNDS};
pub use message::{BattleMessage, MessageCategory, MessageLog};
pub use turn::TurnManager;
