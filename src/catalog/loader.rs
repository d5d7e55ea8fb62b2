//! Catalog loading and indexing.
//!
//! The card pool is a JSON array of card records. Loading is all-or-nothing:
//! an unreadable source or a single malformed record fails the whole load
//! with [`CatalogError`], never a partial pool.

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::card::{Card, CardId};

/// Errors raised while loading the card catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The source could not be read.
    #[error("failed to read card source: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not valid JSON or a record is missing/has a malformed
    /// required field.
    #[error("malformed card source: {0}")]
    Parse(#[from] serde_json::Error),

    /// A stat field that must be non-negative was negative.
    #[error("card {index}: field `{field}` must be non-negative, got {value}")]
    NegativeStat {
        index: usize,
        field: &'static str,
        value: i64,
    },
}

/// The static card pool, indexed by load order.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    cards: Vec<Arc<Card>>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let text = std::fs::read_to_string(path)?;
        Self::load_from_str(&text)
    }

    /// Load a catalog from any reader producing JSON.
    pub fn load_from_reader(mut reader: impl Read) -> Result<Self, CatalogError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::load_from_str(&text)
    }

    /// Load a catalog from a JSON string.
    pub fn load_from_str(text: &str) -> Result<Self, CatalogError> {
        let mut cards: Vec<Card> = serde_json::from_str(text)?;

        for (index, card) in cards.iter_mut().enumerate() {
            for (field, value) in [("hp", card.hp), ("atk", card.atk), ("def", card.def)] {
                if value < 0 {
                    return Err(CatalogError::NegativeStat { index, field, value });
                }
            }
            card.id = CardId::new(index as u32);
        }

        tracing::debug!(count = cards.len(), "card catalog loaded");

        Ok(Self {
            cards: cards.into_iter().map(Arc::new).collect(),
        })
    }

    /// Number of cards in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Arc<Card>> {
        self.cards.get(id.raw() as usize)
    }

    /// Iterate over the pool in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Card>> {
        self.cards.iter()
    }

    /// Partition the pool by series tag.
    ///
    /// Within each series, cards keep their catalog order - the grouping is
    /// deterministic; randomness only enters at deck-sampling time.
    #[must_use]
    pub fn by_series(&self) -> FxHashMap<String, Vec<Arc<Card>>> {
        let mut map: FxHashMap<String, Vec<Arc<Card>>> = FxHashMap::default();

        for card in &self.cards {
            map.entry(card.series.clone())
                .or_default()
                .push(Arc::clone(card));
        }

        map
    }
}
