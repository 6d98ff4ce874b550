//! Battle rules that can be tuned without touching the roster

/// Default round cap before a battle is called a draw
pub const DEFAULT_MAX_ROUNDS: u32 = 100;

/// Who can be targeted during a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetPolicy {
    /// Targets are fixed when the round starts. Combatants knocked to zero
    /// mid-round still act and can still be hit until end-of-round cleanup.
    #[default]
    RoundSnapshot,
    /// Targets are recomputed every turn; defeated combatants drop out at once
    /// and skip their remaining turn.
    LiveOnly,
}

/// How heals interact with max health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealPolicy {
    /// Heals may push health past max health
    #[default]
    Uncapped,
    /// Heals stop at max health
    ClampToMax,
}

/// Rules for a single battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleConfig {
    pub max_rounds: u32,
    pub target_policy: TargetPolicy,
    pub heal_policy: HealPolicy,
}

impl BattleConfig {
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    pub fn with_target_policy(mut self, policy: TargetPolicy) -> Self {
        self.target_policy = policy;
        self
    }

    pub fn with_heal_policy(mut self, policy: HealPolicy) -> Self {
        self.heal_policy = policy;
        self
    }

    pub fn clamp_heals(&self) -> bool {
        self.heal_policy == HealPolicy::ClampToMax
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            target_policy: TargetPolicy::default(),
            heal_policy: HealPolicy::default(),
        }
    }
}
