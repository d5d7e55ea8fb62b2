//! End-of-match detection and finalization.
//!
//! Runs after every resolver step and every time tick. Conditions are
//! evaluated in a fixed priority order and only the first match fires;
//! after that the match is terminal and every further trigger is a no-op.

use super::event::{CombatEvent, EventBuf};
use super::state::{MatchState, Outcome};

/// Points awarded when time runs out with equal HP.
pub const SCORE_FINAL_DRAW: i64 = 500;
/// Base finalization bonus for a player victory.
pub const SCORE_FINAL_WIN: i64 = 1_500;
/// Per-turn value of finishing under the turn par.
pub const TURN_BONUS_RATE: i64 = 100;
/// Turn count at which the efficiency bonus bottoms out.
pub const TURN_BONUS_PAR: u32 = 40;

/// Evaluate the termination conditions, in priority order:
///
/// 1. time expired - lower HP loses, equal HP draws
/// 2. player KO
/// 3. rival KO
/// 4. player deck exhausted - lower HP loses, ties favor the player
///
/// On the first hit the winner-specific finalization bonus is applied and
/// the outcome becomes terminal. Returns the outcome when this call ended
/// the match.
pub(crate) fn check_termination(state: &mut MatchState, events: &mut EventBuf) -> Option<Outcome> {
    if state.is_terminal() {
        return None;
    }

    let player_hp = state.player.hp;
    let rival_hp = state.rival.hp;

    let outcome = if state.time_expired() {
        if player_hp < rival_hp {
            Outcome::RivalWin
        } else if rival_hp < player_hp {
            Outcome::PlayerWin
        } else {
            Outcome::Draw
        }
    } else if player_hp <= 0 {
        Outcome::RivalWin
    } else if rival_hp <= 0 {
        Outcome::PlayerWin
    } else if state.player_deck.is_exhausted() {
        // Out of cards: lower HP loses, the player keeps ties.
        if player_hp < rival_hp {
            Outcome::RivalWin
        } else {
            Outcome::PlayerWin
        }
    } else {
        return None;
    };

    finalize(state, outcome, events);
    Some(outcome)
}

/// Apply the one-time finalization bonus and mark the match terminal.
///
/// Exactly one bonus per match: a player win earns the base bonus plus the
/// turn-efficiency bonus, a draw a flat consolation, a loss nothing.
fn finalize(state: &mut MatchState, outcome: Outcome, events: &mut EventBuf) {
    match outcome {
        Outcome::PlayerWin => {
            let under_par = i64::from(TURN_BONUS_PAR.saturating_sub(state.turn_count));
            state.add_score(SCORE_FINAL_WIN + under_par * TURN_BONUS_RATE);
        }
        Outcome::Draw => state.add_score(SCORE_FINAL_DRAW),
        Outcome::RivalWin => {}
    }

    state.set_outcome(outcome);
    events.push(CombatEvent::MatchEnded { outcome });

    tracing::debug!(?outcome, score = state.score(), turns = state.turn_count, "match ended");
}
