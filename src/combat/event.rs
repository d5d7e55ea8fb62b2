//! Combat events.
//!
//! The core is free of I/O: instead of calling into audio or rendering, each
//! engine step emits discrete events and the host decides what a
//! `ShieldReflected` sounds or looks like.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::state::{Outcome, Side};
use crate::catalog::CardId;

/// Something observable that happened during an engine step.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// A compound draw completed. Either id is `None` when that side's deck
    /// was already exhausted.
    CardsDrawn {
        player: Option<CardId>,
        rival: Option<CardId>,
    },

    /// A side lost the exchange and took damage.
    DamageDealt { side: Side, amount: i64 },

    /// The armed shield redirected a losing exchange into the rival.
    ShieldReflected { amount: i64 },

    /// Player HP crossed below half its starting value for the first time.
    DangerEntered,

    /// The one-shot heal fired.
    HealActivated { restored: i64 },

    /// The one-shot shield was armed.
    ShieldActivated,

    /// The match reached a terminal condition.
    MatchEnded { outcome: Outcome },
}

/// Event buffer for a single engine step. Steps emit at most a handful of
/// events, so they live inline.
pub type EventBuf = SmallVec<[CombatEvent; 4]>;
