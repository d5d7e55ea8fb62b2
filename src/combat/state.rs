//! Match state: everything one running match owns.
//!
//! The state is exclusively owned by its match controller and mutated only
//! by the turn resolver and the termination checker - there is no shared
//! global context. Score is monotonically non-decreasing and HP is clamped
//! to `[0, initial]` by construction: the only mutators enforce it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::catalog::Card;
use crate::deck::{average_stats, CombatantStats, Deck};

/// The two combatants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Rival,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Rival => write!(f, "rival"),
        }
    }
}

/// Terminal result of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    PlayerWin,
    RivalWin,
    Draw,
}

/// State of one match, from first draw to termination.
#[derive(Clone, Debug)]
pub struct MatchState {
    pub player_deck: Deck,
    pub rival_deck: Deck,

    /// Most recently drawn cards. `None` before the first draw or once the
    /// owning deck is exhausted.
    pub player_card: Option<Arc<Card>>,
    pub rival_card: Option<Arc<Card>>,

    pub player: CombatantStats,
    pub rival: CombatantStats,

    /// Player HP at match start; heals never raise HP above this.
    pub player_hp_max: i64,

    /// One-shot wish flags, player side only.
    pub heal_used: bool,
    pub shield_used: bool,
    /// Armed shield waiting to reflect the next losing exchange.
    pub shield_active: bool,

    /// Set the first time player HP crosses below half its initial value.
    pub danger_reached: bool,

    /// Completed combat turns (both cards present).
    pub turn_count: u32,

    score: i64,

    /// Countdown from the match time budget, floored at zero.
    pub time_remaining_ms: i64,

    outcome: Option<Outcome>,
}

impl MatchState {
    /// Create a match over two already-ordered decks.
    ///
    /// Combatant stats are derived from the full decks once, here; they are
    /// never recomputed mid-match.
    #[must_use]
    pub fn new(player_deck: Deck, rival_deck: Deck, time_budget_ms: i64) -> Self {
        let player = average_stats(player_deck.cards());
        let rival = average_stats(rival_deck.cards());
        let player_hp_max = player.hp;

        Self {
            player_deck,
            rival_deck,
            player_card: None,
            rival_card: None,
            player,
            rival,
            player_hp_max,
            heal_used: false,
            shield_used: false,
            shield_active: false,
            danger_reached: false,
            turn_count: 0,
            score: 0,
            time_remaining_ms: time_budget_ms,
            outcome: None,
        }
    }

    /// Accumulated score. Only ever grows.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Award points. Negative deltas are ignored - score never decreases.
    pub(crate) fn add_score(&mut self, points: i64) {
        self.score += points.max(0);
    }

    /// Terminal result, once decided.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the match has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    pub(crate) fn set_outcome(&mut self, outcome: Outcome) {
        debug_assert!(self.outcome.is_none(), "outcome decided twice");
        self.outcome = Some(outcome);
    }

    /// Stats for one side.
    #[must_use]
    pub fn stats(&self, side: Side) -> &CombatantStats {
        match side {
            Side::Player => &self.player,
            Side::Rival => &self.rival,
        }
    }

    /// Current drawn card for one side.
    #[must_use]
    pub fn current_card(&self, side: Side) -> Option<&Arc<Card>> {
        match side {
            Side::Player => self.player_card.as_ref(),
            Side::Rival => self.rival_card.as_ref(),
        }
    }

    /// Subtract damage from a side's HP, floored at zero.
    pub(crate) fn apply_damage(&mut self, side: Side, amount: i64) {
        let hp = match side {
            Side::Player => &mut self.player.hp,
            Side::Rival => &mut self.rival.hp,
        };
        *hp = (*hp - amount).max(0);
    }

    /// Restore player HP, clamped to the starting pool.
    ///
    /// Returns the HP actually restored.
    pub(crate) fn restore_player_hp(&mut self, amount: i64) -> i64 {
        let before = self.player.hp;
        self.player.hp = (before + amount).min(self.player_hp_max);
        self.player.hp - before
    }

    /// Advance the countdown timer, floored at zero.
    pub(crate) fn elapse(&mut self, elapsed_ms: i64) {
        self.time_remaining_ms = (self.time_remaining_ms - elapsed_ms).max(0);
    }

    /// Whether the time budget has run out.
    #[must_use]
    pub fn time_expired(&self) -> bool {
        self.time_remaining_ms <= 0
    }
}
