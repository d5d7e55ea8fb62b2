//! Deck construction and deck-derived combat stats.
//!
//! A deck is drawn from the catalog against a [`DeckDistribution`] - a quota
//! of cards per series. Sampling within a series is uniform without
//! replacement; a series with fewer cards than requested degrades softly to
//! whatever is available, and a series the catalog does not know at all is
//! skipped with a warning. Neither case is a fault.
//!
//! Once built, a deck is never mutated. Consumption is tracked by a draw
//! cursor that only moves forward.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::Card;
use crate::core::GameRng;

/// Desired card count per series, iterated in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckDistribution {
    quotas: Vec<(String, usize)>,
}

impl DeckDistribution {
    /// Empty distribution.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a quota (builder pattern). Quotas are drawn in insertion order.
    #[must_use]
    pub fn with_quota(mut self, series: impl Into<String>, count: usize) -> Self {
        self.quotas.push((series.into(), count));
        self
    }

    /// The standard 40-card distribution.
    #[must_use]
    pub fn standard() -> Self {
        Self::new()
            .with_quota("platinum", 1)
            .with_quota("black", 2)
            .with_quota("golden", 1)
            .with_quota("silver", 3)
            .with_quota("purple", 4)
            .with_quota("red", 6)
            .with_quota("blue", 8)
            .with_quota("green", 15)
    }

    /// Iterate over (series, count) quotas in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.quotas.iter().map(|(s, n)| (s.as_str(), *n))
    }

    /// Total number of cards requested.
    #[must_use]
    pub fn total(&self) -> usize {
        self.quotas.iter().map(|(_, n)| n).sum()
    }
}

/// Draw a deck from the series-partitioned pool.
///
/// For each quota, in distribution order, selects `min(count, available)`
/// cards uniformly at random without replacement and appends them. Unknown
/// series are skipped with a diagnostic. The result is still grouped by
/// series; callers wanting a fully randomized draw order shuffle afterwards
/// (the match builder does).
pub fn build_deck(
    series_map: &FxHashMap<String, Vec<Arc<Card>>>,
    distribution: &DeckDistribution,
    rng: &mut GameRng,
) -> Vec<Arc<Card>> {
    let mut deck = Vec::with_capacity(distribution.total());

    for (series, count) in distribution.iter() {
        let Some(pool) = series_map.get(series) else {
            tracing::warn!(series, "series not found in catalog, skipping quota");
            continue;
        };

        let take = count.min(pool.len());
        if take < count {
            tracing::warn!(series, requested = count, available = pool.len(), "series short of quota");
        }

        deck.extend(rng.sample(pool, take).into_iter().map(Arc::clone));
    }

    deck
}

/// Aggregate combat stats derived from a deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantStats {
    pub hp: i64,
    pub atk: i64,
    pub def: i64,
}

/// HP pool multiplier: a combatant's HP is the mean card HP scaled up so it
/// survives many per-card strikes.
pub const HP_SCALE: i64 = 15;

/// Compute a combatant's starting stats as truncating integer means over the
/// deck, with HP scaled by [`HP_SCALE`] before the division.
///
/// An empty deck yields all zeroes.
#[must_use]
pub fn average_stats(deck: &[Arc<Card>]) -> CombatantStats {
    if deck.is_empty() {
        return CombatantStats::default();
    }

    let n = deck.len() as i64;
    let (mut hp, mut atk, mut def) = (0i64, 0i64, 0i64);

    for card in deck {
        hp += card.hp;
        atk += card.atk;
        def += card.def;
    }

    CombatantStats {
        hp: hp * HP_SCALE / n,
        atk: atk / n,
        def: def / n,
    }
}

/// An ordered run of cards with a forward-only draw cursor.
///
/// The card sequence is fixed at construction; only the cursor advances.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Arc<Card>>,
    cursor: usize,
}

impl Deck {
    /// Wrap an already-ordered card sequence.
    #[must_use]
    pub fn new(cards: Vec<Arc<Card>>) -> Self {
        Self { cards, cursor: 0 }
    }

    /// Draw the next card, advancing the cursor.
    ///
    /// Returns `None` once the deck is exhausted; exhaustion is a normal
    /// state, not an error.
    pub fn draw(&mut self) -> Option<Arc<Card>> {
        let card = self.cards.get(self.cursor)?;
        self.cursor += 1;
        Some(Arc::clone(card))
    }

    /// Back-image reference of the next undrawn card, if any.
    ///
    /// Presentation hook: hosts show the top of the deck face-down.
    #[must_use]
    pub fn peek_back_image(&self) -> Option<&str> {
        self.cards.get(self.cursor).map(|c| c.back_image.as_str())
    }

    /// Whether every card has been drawn.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.cards.len()
    }

    /// Cards not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Total cards in the deck, drawn or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck was built empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The full card sequence, in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Arc<Card>] {
        &self.cards
    }
}
