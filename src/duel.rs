//! Match lifecycle controller.
//!
//! [`Duel`] owns one match's state and maps the host triggers (draw, heal,
//! shield, time tick) onto engine entry points. Every trigger returns the
//! events it produced; once the match is terminal, every trigger is a
//! no-op returning nothing.
//!
//! The engine never blocks and keeps no clock of its own - the host polls
//! its timer and reports elapsed time through [`Duel::tick`].

use std::sync::Arc;

use crate::catalog::{Card, Catalog};
use crate::combat::event::EventBuf;
use crate::combat::state::{MatchState, Outcome, Side};
use crate::combat::{resolver, termination};
use crate::core::GameRng;
use crate::deck::{build_deck, CombatantStats, Deck, DeckDistribution};

/// Default match time budget in milliseconds.
pub const DEFAULT_TIME_BUDGET_MS: i64 = 200_000;

/// Builder for a [`Duel`].
///
/// By default both decks are sampled from the catalog against the
/// distribution and then shuffled, so draw order is independent of series
/// grouping. Explicit decks (drafting hosts, tests) are used verbatim.
pub struct DuelBuilder {
    distribution: DeckDistribution,
    time_budget_ms: i64,
    player_deck: Option<Vec<Arc<Card>>>,
    rival_deck: Option<Vec<Arc<Card>>>,
}

impl Default for DuelBuilder {
    fn default() -> Self {
        Self {
            distribution: DeckDistribution::standard(),
            time_budget_ms: DEFAULT_TIME_BUDGET_MS,
            player_deck: None,
            rival_deck: None,
        }
    }
}

impl DuelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deck distribution used for both sampled decks.
    pub fn distribution(mut self, distribution: DeckDistribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Override the match time budget.
    pub fn time_budget_ms(mut self, ms: i64) -> Self {
        self.time_budget_ms = ms;
        self
    }

    /// Use this exact player deck instead of sampling. Not shuffled.
    pub fn player_deck(mut self, cards: Vec<Arc<Card>>) -> Self {
        self.player_deck = Some(cards);
        self
    }

    /// Use this exact rival deck instead of sampling. Not shuffled.
    pub fn rival_deck(mut self, cards: Vec<Arc<Card>>) -> Self {
        self.rival_deck = Some(cards);
        self
    }

    /// Build the match. The seed fixes deck sampling and shuffling, making
    /// the whole match reproducible.
    #[must_use]
    pub fn build(self, catalog: &Catalog, seed: u64) -> Duel {
        let mut rng = GameRng::new(seed);
        let series_map = catalog.by_series();

        let player_cards = self.player_deck.unwrap_or_else(|| {
            let mut cards = build_deck(&series_map, &self.distribution, &mut rng);
            rng.shuffle(&mut cards);
            cards
        });
        let rival_cards = self.rival_deck.unwrap_or_else(|| {
            let mut cards = build_deck(&series_map, &self.distribution, &mut rng);
            rng.shuffle(&mut cards);
            cards
        });

        let state = MatchState::new(
            Deck::new(player_cards),
            Deck::new(rival_cards),
            self.time_budget_ms,
        );

        tracing::debug!(
            seed,
            player_deck = state.player_deck.len(),
            rival_deck = state.rival_deck.len(),
            "duel built"
        );

        Duel { state }
    }
}

/// One running (or finished) match.
pub struct Duel {
    state: MatchState,
}

impl Duel {
    /// Start building a match.
    #[must_use]
    pub fn builder() -> DuelBuilder {
        DuelBuilder::new()
    }

    /// Play one hand: draw for both sides, resolve the exchange, then check
    /// for termination.
    ///
    /// The two draws are one atomic step - there is no independent rival
    /// draw trigger.
    pub fn play_hand(&mut self) -> EventBuf {
        let mut events = EventBuf::new();
        if self.state.is_terminal() {
            return events;
        }

        resolver::draw_both(&mut self.state, &mut events);
        resolver::resolve_turn(&mut self.state, &mut events);
        termination::check_termination(&mut self.state, &mut events);

        events
    }

    /// Fire the one-shot heal wish.
    pub fn activate_heal(&mut self) -> EventBuf {
        let mut events = EventBuf::new();
        if !self.state.is_terminal() {
            resolver::activate_heal(&mut self.state, &mut events);
        }
        events
    }

    /// Arm the one-shot shield wish.
    pub fn activate_shield(&mut self) -> EventBuf {
        let mut events = EventBuf::new();
        if !self.state.is_terminal() {
            resolver::activate_shield(&mut self.state, &mut events);
        }
        events
    }

    /// Report elapsed wall time. Runs the termination check, so a match can
    /// end on a tick alone.
    pub fn tick(&mut self, elapsed_ms: i64) -> EventBuf {
        let mut events = EventBuf::new();
        if self.state.is_terminal() {
            return events;
        }

        self.state.elapse(elapsed_ms);
        termination::check_termination(&mut self.state, &mut events);

        events
    }

    // === Read accessors ===

    /// The full match state, read-only.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Accumulated score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.state.score()
    }

    /// Completed combat turns.
    #[must_use]
    pub fn turn_count(&self) -> u32 {
        self.state.turn_count
    }

    /// Terminal result, once decided.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Current stats for one side.
    #[must_use]
    pub fn stats(&self, side: Side) -> &CombatantStats {
        self.state.stats(side)
    }

    /// Current drawn card for one side.
    #[must_use]
    pub fn current_card(&self, side: Side) -> Option<&Arc<Card>> {
        self.state.current_card(side)
    }

    /// Undrawn cards left in a side's deck.
    #[must_use]
    pub fn deck_remaining(&self, side: Side) -> usize {
        match side {
            Side::Player => self.state.player_deck.remaining(),
            Side::Rival => self.state.rival_deck.remaining(),
        }
    }

    /// Milliseconds left on the match clock.
    #[must_use]
    pub fn time_remaining_ms(&self) -> i64 {
        self.state.time_remaining_ms
    }
}
