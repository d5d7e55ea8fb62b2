//! Combat core: match state, turn resolution, termination.
//!
//! The modules here own the full combat loop:
//!
//! - [`state`]: the [`MatchState`] a single match exclusively owns
//! - [`event`]: discrete [`CombatEvent`]s the host interprets
//! - [`resolver`]: the draw/compare/damage step and the one-shot wishes
//! - [`termination`]: end-of-match conditions and the finalization bonus
//!
//! Hosts drive the loop through [`crate::duel::Duel`], never these
//! functions directly.

pub mod event;
pub mod resolver;
pub mod state;
pub mod termination;

pub use event::{CombatEvent, EventBuf};
pub use state::{MatchState, Outcome, Side};
