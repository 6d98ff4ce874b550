//! Turn management for combat
//!
//! Handles per-round turn order and the round counter.

use rand::seq::SliceRandom;
use rand::Rng;

/// Manages turn order during a battle
#[derive(Debug, Clone, Default)]
pub struct TurnManager {
    /// Number of turns in the current round
    turn_count: usize,
    /// Index of the next turn in the current round
    current_index: usize,
    /// Current round number (0 before the first round starts)
    round: u32,
}

impl TurnManager {
    /// Create a new turn manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Shuffle the roster into this round's turn order and advance the round.
    /// Returns the new round number.
    pub fn begin_round<T, R: Rng + ?Sized>(&mut self, roster: &mut [T], rng: &mut R) -> u32 {
        roster.shuffle(rng);
        self.turn_count = roster.len();
        self.current_index = 0;
        self.round += 1;
        self.round
    }

    /// Roster index of whoever acts next this round, if anyone
    pub fn next_turn(&mut self) -> Option<usize> {
        if self.current_index >= self.turn_count {
            return None;
        }
        let index = self.current_index;
        self.current_index += 1;
        Some(index)
    }

    /// Whether every combatant has acted this round
    pub fn is_round_over(&self) -> bool {
        self.current_index >= self.turn_count
    }

    /// Get current round number
    pub fn round(&self) -> u32 {
        self.round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_round_visits_everyone_once() {
        let mut turns = TurnManager::new();
        let mut roster = vec!['a', 'b', 'c', 'd'];
        let mut rng = StdRng::seed_from_u64(12);

        assert_eq!(turns.begin_round(&mut roster, &mut rng), 1);
        let mut seen = Vec::new();
        while let Some(i) = turns.next_turn() {
            seen.push(i);
        }
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert!(turns.is_round_over());

        let mut sorted = roster.clone();
        sorted.sort();
        assert_eq!(sorted, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn test_round_counter_advances() {
        let mut turns = TurnManager::new();
        let mut roster = vec![1, 2];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(turns.round(), 0);
        turns.begin_round(&mut roster, &mut rng);
        turns.begin_round(&mut roster, &mut rng);
        assert_eq!(turns.round(), 2);
    }
}
