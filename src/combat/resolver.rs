//! Turn resolution: draw, compare, damage, wishes.
//!
//! A turn is one compound step: drawing for the player also draws for the
//! rival (there is no independent rival draw), then the two current cards
//! are compared by effective attack and the loser takes damage. Ties on the
//! exact float comparison are a full no-op.

use super::event::{CombatEvent, EventBuf};
use super::state::{MatchState, Side};

/// Points for an exchange the rival loses.
pub const SCORE_RIVAL_HIT: i64 = 100;
/// Points for a losing exchange redirected by the shield.
pub const SCORE_SHIELD_REFLECT: i64 = 500;
/// One-time points for first crossing the danger threshold.
pub const SCORE_DANGER: i64 = 500;

/// Fraction of initial HP restored by the heal wish.
pub const HEAL_FRACTION: f64 = 0.25;
/// Player HP below this fraction of its initial value is "dangerous".
pub const DANGER_THRESHOLD: f64 = 0.5;

/// Draw the next card for both sides as one atomic step.
///
/// An exhausted deck leaves that side's current card empty; that is a
/// normal state checked by the termination pass, not an error.
pub(crate) fn draw_both(state: &mut MatchState, events: &mut EventBuf) {
    state.player_card = state.player_deck.draw();
    state.rival_card = state.rival_deck.draw();

    events.push(CombatEvent::CardsDrawn {
        player: state.player_card.as_ref().map(|c| c.id),
        rival: state.rival_card.as_ref().map(|c| c.id),
    });
}

/// Resolve the current pair of cards.
///
/// No combat effect unless both sides hold a card; the turn counter is
/// gated on the same condition.
pub(crate) fn resolve_turn(state: &mut MatchState, events: &mut EventBuf) {
    let (Some(player_card), Some(rival_card)) = (&state.player_card, &state.rival_card) else {
        return;
    };
    let player_card = player_card.clone();
    let rival_card = rival_card.clone();

    state.turn_count += 1;

    let player_attack = player_card.effective_attack();
    let rival_attack = rival_card.effective_attack();

    // Exact tie: no damage, no score.
    if player_attack == rival_attack {
        return;
    }

    if player_attack < rival_attack {
        // Player loses the exchange.
        if state.shield_active {
            // Reflection: the rival takes damage from its own card instead,
            // and the shield is consumed.
            let amount = (rival_card.strike_value() - state.rival.def).max(1);
            state.apply_damage(Side::Rival, amount);
            state.shield_active = false;
            state.add_score(SCORE_SHIELD_REFLECT);
            events.push(CombatEvent::ShieldReflected { amount });
            return;
        }

        let amount = (player_card.strike_value() - state.player.def).max(1);
        state.apply_damage(Side::Player, amount);
        events.push(CombatEvent::DamageDealt { side: Side::Player, amount });

        let danger_floor = state.player_hp_max as f64 * DANGER_THRESHOLD;
        if !state.danger_reached && (state.player.hp as f64) < danger_floor {
            state.danger_reached = true;
            state.add_score(SCORE_DANGER);
            events.push(CombatEvent::DangerEntered);
        }
    } else {
        // Rival loses the exchange.
        let amount = (rival_card.strike_value() - state.rival.def).max(1);
        state.apply_damage(Side::Rival, amount);
        state.add_score(SCORE_RIVAL_HIT);
        events.push(CombatEvent::DamageDealt { side: Side::Rival, amount });
    }
}

/// Fire the one-shot heal wish. A no-op once used.
pub(crate) fn activate_heal(state: &mut MatchState, events: &mut EventBuf) {
    if state.heal_used {
        return;
    }

    let amount = (state.player_hp_max as f64 * HEAL_FRACTION) as i64;
    let restored = state.restore_player_hp(amount);
    state.heal_used = true;

    events.push(CombatEvent::HealActivated { restored });
}

/// Arm the one-shot shield wish. A no-op once used.
pub(crate) fn activate_shield(state: &mut MatchState, events: &mut EventBuf) {
    if state.shield_used {
        return;
    }

    state.shield_active = true;
    state.shield_used = true;

    events.push(CombatEvent::ShieldActivated);
}
