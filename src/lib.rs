//! # card-duel
//!
//! Combat-resolution engine for a turn-based card battler: deck construction
//! from a card pool, turn-by-turn draw and comparison, damage and wish
//! effects, win/loss/draw determination, and score accumulation.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every source of randomness flows through a seeded
//!    RNG. The same catalog, distribution, seed, and action sequence always
//!    produce the same outcome and score.
//!
//! 2. **Host-driven**: the engine never blocks and keeps no clock. Discrete
//!    triggers (play a hand, activate a wish, report elapsed time) map onto
//!    engine entry points; each returns the events it produced.
//!
//! 3. **I/O-free core**: combat emits [`CombatEvent`] values instead of
//!    calling into audio or rendering; hosts interpret them. The only
//!    persistence is the append-only score ledger.
//!
//! ## Modules
//!
//! - `catalog`: the static card pool, loaded from JSON and indexed by series
//! - `deck`: deck sampling against a series distribution, deck-derived stats
//! - `combat`: match state, turn resolution, termination
//! - `duel`: the match-lifecycle controller hosts drive
//! - `score`: the persistent score ledger and name validation
//! - `core`: deterministic RNG

pub mod catalog;
pub mod combat;
pub mod core;
pub mod deck;
pub mod duel;
pub mod score;

// Re-export commonly used types
pub use crate::catalog::{Card, CardId, Catalog, CatalogError};
pub use crate::combat::{CombatEvent, EventBuf, MatchState, Outcome, Side};
pub use crate::core::GameRng;
pub use crate::deck::{average_stats, build_deck, CombatantStats, Deck, DeckDistribution};
pub use crate::duel::{Duel, DuelBuilder, DEFAULT_TIME_BUDGET_MS};
pub use crate::score::{validate_name, InvalidNameError, LedgerError, ScoreEntry, ScoreLedger};
