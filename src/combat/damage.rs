//! Damage calculation
//!
//! Handles the attack exchange: dodge roll, block mitigation and block decay.

use rand::Rng;
use crate::entities::Combatant;

/// Sides of the dodge die
pub const DODGE_DIE: i32 = 10;

/// Result of resolving one hit against one target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DamageResult {
    /// Damage before block (multiplier x strength)
    pub raw_damage: i32,
    /// Block the target had when the hit landed
    pub blocked: i32,
    /// Health actually removed from the target
    pub final_damage: i32,
    /// Whether the target dodged
    pub dodged: bool,
    /// Narrative fragment, e.g. "for 18 but Evan blocks 5 and Evan takes 13 damage"
    pub message: String,
}

impl DamageResult {
    pub fn dodged(target_name: &str) -> Self {
        Self {
            raw_damage: 0,
            blocked: 0,
            final_damage: 0,
            dodged: true,
            message: format!("but {} dodges and takes 0 damage", target_name),
        }
    }
}

/// Roll whether a combatant with the given dodge avoids an attack
pub fn roll_dodge<R: Rng + ?Sized>(dodge: i32, rng: &mut R) -> bool {
    rng.gen_range(1..=DODGE_DIE) <= dodge
}

/// Resolve a hit from `attacker` against `target` and apply it.
///
/// Block absorbs damage and is itself worn down by the raw damage, but never
/// drops below 1. Health may go negative. When `can_dodge` is false the dodge
/// roll is skipped entirely and no random number is drawn.
pub fn calculate_damage<R: Rng + ?Sized>(
    attacker: &Combatant,
    damage_mod: i32,
    target: &mut Combatant,
    can_dodge: bool,
    rng: &mut R,
) -> DamageResult {
    if can_dodge && roll_dodge(target.dodge(), rng) {
        log::debug!("{} dodged {}", target.name(), attacker.name());
        return DamageResult::dodged(target.name());
    }

    let raw_damage = damage_mod.saturating_mul(attacker.strength());
    let blocked = target.block;

    let mut message = String::new();
    if blocked > 0 {
        message.push_str(&format!("for {} but {} blocks {} ", raw_damage, target.name(), blocked));
    }

    // Block wears down by the full hit
    target.block = blocked.saturating_sub(raw_damage);
    if target.block <= 0 {
        target.block = 1;
    }

    let final_damage = raw_damage.saturating_sub(blocked).max(0);
    target.current_health = target.current_health.saturating_sub(final_damage);

    message.push_str(&format!("and {} takes {} damage", target.name(), final_damage));

    log::debug!(
        "{} -> {}: raw {} blocked {} final {} (block now {}, health {})",
        attacker.name(),
        target.name(),
        raw_damage,
        blocked,
        final_damage,
        target.block,
        target.current_health
    );

    DamageResult {
        raw_damage,
        blocked,
        final_damage,
        dodged: false,
        message,
    }
}
