//! Battle state machine
//!
//! Runs rounds until a single combatant is left standing or the round cap
//! is hit.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::combat::{ActionContext, ActionRegistry};
use crate::entities::Combatant;
use crate::error::{ArenaError, Result};
use super::config::{BattleConfig, TargetPolicy};
use super::message::{BattleMessage, MessageCategory, MessageLog};
use super::turn::TurnManager;

const SEPARATOR: &str = "========";

/// Where a battle is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleState {
    /// Set up, no round fought yet
    Initialized,
    /// Round `n` has been fought and the battle goes on
    RoundInProgress(u32),
    /// The battle is over
    Concluded(BattleOutcome),
}

/// How a battle ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BattleOutcome {
    /// Last player standing
    Victory { winner: String, rounds: u32 },
    /// Everyone went down in the same round
    NoSurvivors { rounds: u32 },
    /// Round cap reached with more than one combatant alive
    Timeout { rounds: u32 },
}

impl BattleOutcome {
    pub fn winner(&self) -> Option<&str> {
        match self {
            BattleOutcome::Victory { winner, .. } => Some(winner),
            _ => None,
        }
    }

    pub fn rounds(&self) -> u32 {
        match self {
            BattleOutcome::Victory { rounds, .. }
            | BattleOutcome::NoSurvivors { rounds }
            | BattleOutcome::Timeout { rounds } => *rounds,
        }
    }
}

/// A battle between the combatants of a roster
pub struct Battle<R = StdRng> {
    /// Combatants still in the fight, in this round's turn order
    roster: Vec<Combatant>,
    registry: ActionRegistry,
    config: BattleConfig,
    turns: TurnManager,
    state: BattleState,
    log: MessageLog,
    /// Random number generator for turn order, targets, actions and rolls
    rng: R,
}

impl Battle<StdRng> {
    /// Create a battle with an entropy-seeded RNG
    pub fn new(roster: Vec<Combatant>) -> Result<Self> {
        Self::with_rng(roster, StdRng::from_entropy())
    }

    /// Create a battle whose random draws follow the given seed
    pub fn seeded(roster: Vec<Combatant>, seed: u64) -> Result<Self> {
        Self::with_rng(roster, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Battle<R> {
    /// Create a battle drawing randomness from `rng`
    pub fn with_rng(roster: Vec<Combatant>, rng: R) -> Result<Self> {
        if roster.is_empty() {
            return Err(ArenaError::EmptyRoster);
        }

        let mut names = HashSet::new();
        for combatant in &roster {
            if !names.insert(combatant.name()) {
                return Err(ArenaError::DuplicateName(combatant.name().to_string()));
            }
        }

        let mut log = MessageLog::new();
        log.add("Battle has been initialized", MessageCategory::System);
        log.add(SEPARATOR, MessageCategory::System);
        log.add("FIGHT!", MessageCategory::Announcement);

        log::info!(
            "Battle initialized with {}",
            roster.iter().map(|c| c.name()).collect::<Vec<_>>().join(", ")
        );

        Ok(Self {
            roster,
            registry: ActionRegistry::standard(),
            config: BattleConfig::default(),
            turns: TurnManager::new(),
            state: BattleState::Initialized,
            log,
            rng,
        })
    }

    pub fn with_config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_registry(mut self, registry: ActionRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Get the current battle state
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn outcome(&self) -> Option<&BattleOutcome> {
        match &self.state {
            BattleState::Concluded(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_concluded(&self) -> bool {
        matches!(self.state, BattleState::Concluded(_))
    }

    /// Combatants still in the fight
    pub fn roster(&self) -> &[Combatant] {
        &self.roster
    }

    /// Number of rounds fought so far
    pub fn round(&self) -> u32 {
        self.turns.round()
    }

    /// Messages produced since the last drain
    pub fn messages(&self) -> &[BattleMessage] {
        self.log.messages()
    }

    /// Take all pending messages
    pub fn drain_messages(&mut self) -> Vec<BattleMessage> {
        self.log.drain()
    }

    fn set_state(&mut self, state: BattleState) {
        log::debug!("Battle state: {:?} -> {:?}", self.state, state);
        self.state = state;
    }

    /// Fight rounds until the battle is over
    pub fn run(&mut self) -> Result<BattleOutcome> {
        loop {
            if let BattleState::Concluded(outcome) = self.play_round()? {
                return Ok(outcome.clone());
            }
        }
    }

    /// Fight a single round and return the resulting state.
    ///
    /// Does nothing once the battle has concluded.
    pub fn play_round(&mut self) -> Result<&BattleState> {
        if self.is_concluded() {
            return Ok(&self.state);
        }
        if self.try_conclude() {
            return Ok(&self.state);
        }

        let round = self.turns.begin_round(&mut self.roster, &mut self.rng);
        log::info!("Round {} begins with {} combatants", round, self.roster.len());
        self.log.add(format!("Round {}", round), MessageCategory::Round);

        while let Some(actor) = self.turns.next_turn() {
            self.take_turn(actor)?;
        }

        self.report_totals();
        self.remove_defeated();

        if !self.try_conclude() {
            self.log.add(SEPARATOR, MessageCategory::System);
            self.set_state(BattleState::RoundInProgress(round));
        }
        Ok(&self.state)
    }

    /// One combatant picks a random action and uses it on the others
    fn take_turn(&mut self, actor: usize) -> Result<()> {
        let live_only = self.config.target_policy == TargetPolicy::LiveOnly;
        if live_only && self.roster[actor].is_defeated() {
            log::debug!("{} is down and loses their turn", self.roster[actor].name());
            return Ok(());
        }

        let targets: Vec<usize> = (0..self.roster.len())
            .filter(|&i| i != actor)
            .filter(|&i| !live_only || !self.roster[i].is_defeated())
            .collect();

        let mut ctx = ActionContext {
            actor,
            targets: &targets,
            roster: &mut self.roster,
            rng: &mut self.rng,
            log: &mut self.log,
            config: &self.config,
        };
        self.registry.random_action(&mut ctx)?;
        self.log.add("...", MessageCategory::System);
        Ok(())
    }

    fn report_totals(&mut self) {
        self.log.status("Totals:");
        for combatant in &self.roster {
            self.log.status(format!(
                "{}: {}/{} HP and {} block",
                combatant.name(),
                combatant.current_health,
                combatant.max_health(),
                combatant.block
            ));
        }
    }

    fn remove_defeated(&mut self) {
        let round = self.turns.round();
        let messages = &mut self.log;
        self.roster.retain(|combatant| {
            if combatant.is_defeated() {
                log::info!("{} eliminated in round {}", combatant.name(), round);
                messages.add(
                    format!("{} has been eliminated", combatant.name()),
                    MessageCategory::Elimination,
                );
                false
            } else {
                true
            }
        });
    }

    /// Conclude the battle if it is over. Returns whether it concluded.
    fn try_conclude(&mut self) -> bool {
        let rounds = self.turns.round();
        let outcome = match self.roster.as_slice() {
            [] => {
                self.log.add("Nobody is left standing in the arena.", MessageCategory::Announcement);
                BattleOutcome::NoSurvivors { rounds }
            }
            [winner] => {
                self.log.add(
                    format!("{} is the last player remaining! VICTORY!!!", winner.name()),
                    MessageCategory::Announcement,
                );
                BattleOutcome::Victory {
                    winner: winner.name().to_string(),
                    rounds,
                }
            }
            _ if rounds >= self.config.max_rounds => {
                self.log.add(
                    format!("The dust settles after {} rounds with no victor.", rounds),
                    MessageCategory::Announcement,
                );
                BattleOutcome::Timeout { rounds }
            }
            _ => return false,
        };

        log::info!("Battle concluded: {:?}", outcome);
        self.set_state(BattleState::Concluded(outcome));
        true
    }
}
