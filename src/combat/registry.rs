//! Action registry
//!
//! Maps each species to the actions it can take. Species tables are checked
//! first and the shared default table fills in whatever a species does not
//! override. Built once before a battle and never mutated afterwards.

use std::collections::HashMap;

use rand::seq::SliceRandom;

use crate::entities::Species;
use crate::error::{ArenaError, Result};
use super::actions::{self, ActionContext, ActionFn, ActionKind};

/// One entry in an action table
#[derive(Clone, Copy)]
struct ActionSlot {
    kind: ActionKind,
    /// `None` marks a declared slot that was never given a behaviour
    behaviour: Option<ActionFn>,
}

/// Ordered list of actions with their behaviours
#[derive(Clone, Default)]
pub struct ActionTable {
    slots: Vec<ActionSlot>,
}

impl ActionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an action with its behaviour, replacing any earlier slot of the same kind
    pub fn with(mut self, kind: ActionKind, behaviour: ActionFn) -> Self {
        self.insert(kind, Some(behaviour));
        self
    }

    /// Declare an action without a behaviour.
    ///
    /// Invoking it fails with [`ArenaError::ActionNotImplemented`] until a
    /// species table overrides it.
    pub fn declare(mut self, kind: ActionKind) -> Self {
        self.insert(kind, None);
        self
    }

    fn insert(&mut self, kind: ActionKind, behaviour: Option<ActionFn>) {
        match self.slots.iter_mut().find(|s| s.kind == kind) {
            Some(slot) => slot.behaviour = behaviour,
            None => self.slots.push(ActionSlot { kind, behaviour }),
        }
    }

    fn get(&self, kind: ActionKind) -> Option<&ActionSlot> {
        self.slots.iter().find(|s| s.kind == kind)
    }

    /// Action kinds in declaration order
    pub fn kinds(&self) -> impl Iterator<Item = ActionKind> + '_ {
        self.slots.iter().map(|s| s.kind)
    }

    pub fn contains(&self, kind: ActionKind) -> bool {
        self.get(kind).is_some()
    }
}

/// Per-species action tables on top of a shared default table
#[derive(Clone)]
pub struct ActionRegistry {
    defaults: ActionTable,
    species: HashMap<Species, ActionTable>,
}

impl ActionRegistry {
    /// Create a registry with only shared actions
    pub fn new(defaults: ActionTable) -> Self {
        Self {
            defaults,
            species: HashMap::new(),
        }
    }

    /// Give a species its own table
    pub fn with_species(mut self, species: Species, table: ActionTable) -> Self {
        self.species.insert(species, table);
        self
    }

    /// The arena's standard move sets
    pub fn standard() -> Self {
        let defaults = ActionTable::new()
            .with(ActionKind::Attack, actions::attack)
            .with(ActionKind::Prepare, actions::prepare);

        Self::new(defaults)
            .with_species(
                Species::Human,
                ActionTable::new()
                    .with(ActionKind::TalkTheirWayOutOfIt, actions::talk_their_way_out_of_it)
                    .with(ActionKind::ThrowsPotion, actions::throws_potion),
            )
            .with_species(
                Species::Dragon,
                ActionTable::new().with(ActionKind::FireBreath, actions::fire_breath),
            )
            .with_species(
                Species::Giant,
                ActionTable::new()
                    .with(ActionKind::Stomp, actions::stomp)
                    .with(ActionKind::WarCry, actions::war_cry),
            )
    }

    /// Every action available to a species: its own actions first, then
    /// defaults it does not override
    pub fn all_actions(&self, species: Species) -> Vec<ActionKind> {
        let own = self.species.get(&species);
        let mut kinds: Vec<ActionKind> = own.map(|t| t.kinds().collect()).unwrap_or_default();
        kinds.extend(
            self.defaults
                .kinds()
                .filter(|k| !own.is_some_and(|t| t.contains(*k))),
        );
        kinds
    }

    /// Look up the behaviour a species uses for an action
    pub fn behaviour(&self, species: Species, kind: ActionKind) -> Result<ActionFn> {
        let slot = self
            .species
            .get(&species)
            .and_then(|t| t.get(kind))
            .or_else(|| self.defaults.get(kind));

        slot.and_then(|s| s.behaviour)
            .ok_or(ArenaError::ActionNotImplemented { species, action: kind })
    }

    /// Run a specific action for the context's actor
    pub fn perform(&self, kind: ActionKind, ctx: &mut ActionContext<'_>) -> Result<()> {
        let species = ctx.actor().species();
        let behaviour = self.behaviour(species, kind)?;
        log::debug!("{} ({}) uses {}", ctx.actor().name(), species, kind);
        behaviour(ctx);
        Ok(())
    }

    /// Pick one of the actor's actions uniformly at random and run it.
    ///
    /// Returns the chosen action, or `None` if the species has no actions at all.
    pub fn random_action(&self, ctx: &mut ActionContext<'_>) -> Result<Option<ActionKind>> {
        let available = self.all_actions(ctx.actor().species());
        let Some(&kind) = available.choose(&mut *ctx.rng) else {
            log::warn!("{} has no actions and skips their turn", ctx.actor().name());
            return Ok(None);
        };
        self.perform(kind, ctx)?;
        Ok(Some(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Combatant;
    use crate::game::{BattleConfig, MessageLog};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fighter(name: &str, species: Species) -> Combatant {
        Combatant::builder(species)
            .name(name)
            .health(100)
            .strength(5)
            .block(5)
            .dodge(0)
            .build()
            .unwrap()
    }

    #[test]
    fn test_standard_move_sets() {
        let registry = ActionRegistry::standard();
        assert_eq!(
            registry.all_actions(Species::Human),
            vec![
                ActionKind::TalkTheirWayOutOfIt,
                ActionKind::ThrowsPotion,
                ActionKind::Attack,
                ActionKind::Prepare,
            ]
        );
        assert_eq!(
            registry.all_actions(Species::Dragon),
            vec![ActionKind::FireBreath, ActionKind::Attack, ActionKind::Prepare]
        );
        assert_eq!(
            registry.all_actions(Species::Giant),
            vec![ActionKind::Stomp, ActionKind::WarCry, ActionKind::Attack, ActionKind::Prepare]
        );
    }

    #[test]
    fn test_every_species_inherits_defaults() {
        let registry = ActionRegistry::standard();
        for species in Species::ALL {
            let kinds = registry.all_actions(species);
            assert!(kinds.contains(&ActionKind::Attack), "{} cannot attack", species);
            assert!(kinds.contains(&ActionKind::Prepare), "{} cannot prepare", species);
            for kind in kinds {
                assert!(registry.behaviour(species, kind).is_ok());
            }
        }
    }

    #[test]
    fn test_species_override_wins() {
        let registry = ActionRegistry::new(
            ActionTable::new()
                .with(ActionKind::Attack, actions::attack)
                .with(ActionKind::Prepare, actions::prepare),
        )
        .with_species(Species::Giant, ActionTable::new().with(ActionKind::Attack, actions::stomp));

        assert_eq!(
            registry.all_actions(Species::Giant),
            vec![ActionKind::Attack, ActionKind::Prepare]
        );

        // The Giant's "attack" is really a stomp
        let behaviour = registry.behaviour(Species::Giant, ActionKind::Attack).unwrap();
        let mut roster = vec![fighter("Stacy", Species::Giant), fighter("B", Species::Human)];
        let targets = [1];
        let mut rng = StdRng::seed_from_u64(3);
        let mut log = MessageLog::new();
        let config = BattleConfig::default();
        let mut ctx = ActionContext {
            actor: 0,
            targets: &targets,
            roster: &mut roster,
            rng: &mut rng,
            log: &mut log,
            config: &config,
        };
        behaviour(&mut ctx);
        assert!(log.contains("Stacy stomps on B"));
    }

    #[test]
    fn test_declared_action_is_not_implemented() {
        let registry = ActionRegistry::new(ActionTable::new().declare(ActionKind::WarCry));
        let err = registry.behaviour(Species::Dragon, ActionKind::WarCry).err().unwrap();
        assert_eq!(
            err,
            ArenaError::ActionNotImplemented {
                species: Species::Dragon,
                action: ActionKind::WarCry,
            }
        );
        assert_eq!(
            err.to_string(),
            "action `war_cry` has not been given to Dragon yet"
        );

        // A species table can fill the slot in
        let registry = registry
            .with_species(Species::Giant, ActionTable::new().with(ActionKind::WarCry, actions::war_cry));
        assert!(registry.behaviour(Species::Giant, ActionKind::WarCry).is_ok());
    }

    #[test]
    fn test_random_action_surfaces_missing_behaviour() {
        let registry = ActionRegistry::new(ActionTable::new().declare(ActionKind::Attack));
        let mut roster = vec![fighter("A", Species::Human), fighter("B", Species::Giant)];
        let targets = [1];
        let mut rng = StdRng::seed_from_u64(0);
        let mut log = MessageLog::new();
        let config = BattleConfig::default();
        let mut ctx = ActionContext {
            actor: 0,
            targets: &targets,
            roster: &mut roster,
            rng: &mut rng,
            log: &mut log,
            config: &config,
        };

        let result = registry.random_action(&mut ctx);
        assert!(matches!(result, Err(ArenaError::ActionNotImplemented { .. })));
    }

    #[test]
    fn test_random_action_picks_from_species_set() {
        let registry = ActionRegistry::standard();
        let allowed = registry.all_actions(Species::Dragon);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..30 {
            let mut roster = vec![fighter("Puff", Species::Dragon), fighter("B", Species::Human)];
            let targets = [1];
            let mut log = MessageLog::new();
            let config = BattleConfig::default();
            let mut ctx = ActionContext {
                actor: 0,
                targets: &targets,
                roster: &mut roster,
                rng: &mut rng,
                log: &mut log,
                config: &config,
            };
            let kind = registry.random_action(&mut ctx).unwrap().unwrap();
            assert!(allowed.contains(&kind));
            assert!(!log.is_empty());
        }
    }

    #[test]
    fn test_empty_registry_skips_turn() {
        let registry = ActionRegistry::new(ActionTable::new());
        let mut roster = vec![fighter("A", Species::Human)];
        let mut rng = StdRng::seed_from_u64(0);
        let mut log = MessageLog::new();
        let config = BattleConfig::default();
        let mut ctx = ActionContext {
            actor: 0,
            targets: &[],
            roster: &mut roster,
            rng: &mut rng,
            log: &mut log,
            config: &config,
        };
        assert_eq!(registry.random_action(&mut ctx), Ok(None));
    }
}
