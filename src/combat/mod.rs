//! Combat system

pub mod damage;
pub mod actions;
pub mod registry;

pub use damage::{calculate_damage, roll_dodge, DamageResult};
pub use actions::{ActionContext, ActionFn, ActionKind};
pub use registry::{ActionRegistry, ActionTable};
