//! Action behaviours
//!
//! Every move a combatant can make, shared or species-specific. Behaviours
//! mutate the roster through an [`ActionContext`] and narrate into the log.

use std::fmt;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::entities::Combatant;
use crate::game::{BattleConfig, MessageLog};
use super::damage::calculate_damage;

/// Block gained by `prepare`
pub const PREPARE_BLOCK: i32 = 5;
/// Health restored by a successful talk-down
pub const TALK_HEAL: i32 = 15;
/// Block gained by a rousing war cry
pub const WAR_CRY_BLOCK: i32 = 20;
/// Embarrassment damage per onlooker when a war cry falls flat
pub const WAR_CRY_SHAME_PER_TARGET: i32 = 10;

/// Every action a combatant can be given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Attack,
    Prepare,
    TalkTheirWayOutOfIt,
    ThrowsPotion,
    FireBreath,
    Stomp,
    WarCry,
}

impl ActionKind {
    pub fn name(&self) -> &'static str {
        match self {
            ActionKind::Attack => "attack",
            ActionKind::Prepare => "prepare",
            ActionKind::TalkTheirWayOutOfIt => "talk_their_way_out_of_it",
            ActionKind::ThrowsPotion => "throws_potion",
            ActionKind::FireBreath => "fire_breath",
            ActionKind::Stomp => "stomp",
            ActionKind::WarCry => "war_cry",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a behaviour can touch during one turn
pub struct ActionContext<'a> {
    /// Roster index of the acting combatant
    pub actor: usize,
    /// Roster indices the actor may hit. Never contains `actor`.
    pub targets: &'a [usize],
    pub roster: &'a mut [Combatant],
    pub rng: &'a mut dyn RngCore,
    pub log: &'a mut MessageLog,
    pub config: &'a BattleConfig,
}

impl ActionContext<'_> {
    pub fn actor(&self) -> &Combatant {
        &self.roster[self.actor]
    }

    pub fn actor_mut(&mut self) -> &mut Combatant {
        &mut self.roster[self.actor]
    }

    /// Pick one target uniformly at random
    pub fn pick_target(&mut self) -> Option<usize> {
        self.targets.choose(&mut *self.rng).copied()
    }

    fn no_target(&mut self, verb: &str) {
        let msg = format!("{} looks around but finds no one to {}", self.actor().name(), verb);
        self.log.action(msg);
    }
}

/// Mutably borrow two different roster slots at once.
///
/// Panics if `a == b`; target lists never include the actor.
fn pair_mut(roster: &mut [Combatant], a: usize, b: usize) -> (&mut Combatant, &mut Combatant) {
    assert_ne!(a, b, "a combatant cannot be paired with itself");
    if a < b {
        let (left, right) = roster.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = roster.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

/// Behaviour bound to an action slot
pub type ActionFn = fn(&mut ActionContext<'_>);

// =============================================================================
// Default actions
// =============================================================================

/// Hit one random target for 3x strength
pub fn attack(ctx: &mut ActionContext<'_>) {
    let Some(target) = ctx.pick_target() else {
        return ctx.no_target("attack");
    };
    let (actor, victim) = pair_mut(ctx.roster, ctx.actor, target);
    let result = calculate_damage(actor, 3, victim, true, &mut *ctx.rng);

    let line = format!("{} attacks {} {}", actor.name(), victim.name(), result.message);
    let status = format!(
        "{} now has {}/{}HP",
        victim.name(),
        victim.current_health,
        victim.max_health()
    );
    ctx.log.action(line);
    ctx.log.status(status);
}

/// Raise own block
pub fn prepare(ctx: &mut ActionContext<'_>) {
    let actor = ctx.actor_mut();
    actor.add_block(PREPARE_BLOCK);
    let msg = format!(
        "{} hunkers down to prepare for the coming attacks, their block goes up to {}",
        actor.name(),
        actor.block
    );
    ctx.log.action(msg);
}

// =============================================================================
// Human actions
// =============================================================================

/// Gamble on diplomacy.
///
/// The chosen target always gets a free undodgeable swing at the speaker
/// first; a second roll then decides whether the speaker patches up.
pub fn talk_their_way_out_of_it(ctx: &mut ActionContext<'_>) {
    let Some(target) = ctx.pick_target() else {
        return ctx.no_target("talk to");
    };

    let opener = format!(
        "{} tries to talk their way out of an encounter with {}...",
        ctx.actor().name(),
        ctx.roster[target].name()
    );
    ctx.log.action(opener);

    let (listener, speaker) = pair_mut(ctx.roster, target, ctx.actor);
    let retaliation = calculate_damage(listener, 2, speaker, false, &mut *ctx.rng);
    let listener_name = listener.name().to_string();

    if ctx.rng.gen_range(1..=5) <= 2 {
        let msg = format!(
            "{} failed, {} attacks {}",
            ctx.actor().name(),
            listener_name,
            retaliation.message
        );
        ctx.log.action(msg);
    } else {
        let clamp = ctx.config.clamp_heals();
        let speaker = ctx.actor_mut();
        let healed = speaker.heal(TALK_HEAL, clamp);
        let msg = format!("{} somehow succeeded, and healed {}HP.", speaker.name(), healed);
        ctx.log.action(msg);
    }
}

/// Splash everyone else for 10x strength, each target rolling its own dodge
pub fn throws_potion(ctx: &mut ActionContext<'_>) {
    let msg = format!("{} has thrown a potion in the arena...", ctx.actor().name());
    ctx.log.action(msg);

    for &target in ctx.targets {
        let (actor, victim) = pair_mut(ctx.roster, ctx.actor, target);
        let result = calculate_damage(actor, 10, victim, true, &mut *ctx.rng);
        ctx.log.action(format!("...{}", result.message));
    }
}

// =============================================================================
// Dragon actions
// =============================================================================

/// Burn everyone else for a flat 6x strength. Ignores block and dodge.
pub fn fire_breath(ctx: &mut ActionContext<'_>) {
    let damage = ctx.actor().strength().saturating_mul(6);

    for &target in ctx.targets {
        ctx.roster[target].take_damage(damage);
    }

    let msg = format!(
        "{} breathes fire over the arena dealing {} damage to everyone else.",
        ctx.actor().name(),
        damage
    );
    ctx.log.action(msg);
}

// =============================================================================
// Giant actions
// =============================================================================

/// Crush one random target for 5x strength
pub fn stomp(ctx: &mut ActionContext<'_>) {
    let Some(target) = ctx.pick_target() else {
        return ctx.no_target("stomp on");
    };
    let (actor, victim) = pair_mut(ctx.roster, ctx.actor, target);
    let result = calculate_damage(actor, 5, victim, true, &mut *ctx.rng);

    let msg = format!("{} stomps on {} {}", actor.name(), victim.name(), result.message);
    ctx.log.action(msg);
}

/// 30% chance of public humiliation, otherwise a big block boost
pub fn war_cry(ctx: &mut ActionContext<'_>) {
    let msg = format!("{} lets out a rallying war cry", ctx.actor().name());
    ctx.log.action(msg);

    if ctx.rng.gen_range(1..=10) <= 3 {
        let shame = WAR_CRY_SHAME_PER_TARGET * ctx.targets.len() as i32;
        let actor = ctx.actor_mut();
        actor.take_damage(shame);
        let msg = format!(
            "Everyone laughs at {}, they take {} damage from embarrassment",
            actor.name(),
            shame
        );
        ctx.log.action(msg);
    } else {
        let actor = ctx.actor_mut();
        actor.add_block(WAR_CRY_BLOCK);
        let msg = format!(
            "Everyone cowers before {0}, {0} bolsters themselves and increases their block by {1}",
            actor.name(),
            WAR_CRY_BLOCK
        );
        ctx.log.action(msg);
    }
}
