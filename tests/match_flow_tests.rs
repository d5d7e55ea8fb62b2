//! End-to-end match scenarios driven through the public `Duel` API.

use std::sync::Arc;

use card_duel::{
    validate_name, Card, CardId, Catalog, CombatEvent, DeckDistribution, Duel, InvalidNameError,
    Outcome, Side,
};

fn card(hp: i64, atk: i64, def: i64, bonus: f64) -> Arc<Card> {
    Arc::new(Card {
        id: CardId::new(0),
        series: "green".to_string(),
        hp,
        atk,
        def,
        bonus,
        front_image: "f.png".to_string(),
        back_image: "b.png".to_string(),
    })
}

fn empty_catalog() -> Catalog {
    Catalog::load_from_str("[]").unwrap()
}

/// Requesting 5 cards from a series that only has 2 yields a 2-card deck,
/// not a fault.
#[test]
fn test_short_series_yields_reduced_deck() {
    let catalog = Catalog::load_from_str(
        r#"[
            { "serie": "platinum", "hp": 30, "atk": 12, "def": 6, "bonus": 2.5,
              "ruta_frente": "p1f.png", "ruta_reverso": "p1b.png" },
            { "serie": "platinum", "hp": 28, "atk": 11, "def": 5, "bonus": 2.0,
              "ruta_frente": "p2f.png", "ruta_reverso": "p2b.png" }
        ]"#,
    )
    .unwrap();

    let duel = Duel::builder()
        .distribution(DeckDistribution::new().with_quota("platinum", 5))
        .build(&catalog, 42);

    assert_eq!(duel.deck_remaining(Side::Player), 2);
    assert_eq!(duel.deck_remaining(Side::Rival), 2);
}

/// Single-card deck: stats are the card's, with HP scaled by 15.
#[test]
fn test_deck_stats_scale_hp() {
    let duel = Duel::builder()
        .player_deck(vec![card(10, 5, 2, 0.0)])
        .rival_deck(vec![card(10, 5, 2, 0.0)])
        .build(&empty_catalog(), 42);

    let stats = duel.stats(Side::Player);
    assert_eq!(stats.hp, 150);
    assert_eq!(stats.atk, 5);
    assert_eq!(stats.def, 2);
}

/// The losing side takes its own card's strike value minus its own DEF.
#[test]
fn test_losing_exchange_damage() {
    // Player deck averages DEF 2; the first drawn card is 10/10/3.
    let mut duel = Duel::builder()
        .player_deck(vec![card(10, 10, 3, 0.0), card(0, 0, 1, 0.0)])
        .rival_deck(vec![card(10, 11, 2, 0.0)])
        .build(&empty_catalog(), 42);

    let hp_before = duel.stats(Side::Player).hp;
    let events = duel.play_hand();

    // Damage = max(1, (10 + 10 + 3) - 2) = 21.
    assert!(events.contains(&CombatEvent::DamageDealt { side: Side::Player, amount: 21 }));
    assert_eq!(duel.stats(Side::Player).hp, hp_before - 21);
    assert_eq!(duel.score(), 0);
}

/// Time expiring with equal HP is a draw worth a flat 500.
#[test]
fn test_timeout_with_equal_hp_draws() {
    let mut duel = Duel::builder()
        .player_deck(vec![card(10, 5, 2, 0.0)])
        .rival_deck(vec![card(10, 5, 2, 0.0)])
        .time_budget_ms(1_000)
        .build(&empty_catalog(), 42);

    let events = duel.tick(1_000);

    assert_eq!(duel.outcome(), Some(Outcome::Draw));
    assert_eq!(duel.score(), 500);
    assert!(events.contains(&CombatEvent::MatchEnded { outcome: Outcome::Draw }));
}

/// KO victory: +100 for the winning exchange, then 1500 plus the
/// turn-efficiency bonus, nothing else.
#[test]
fn test_ko_victory_finalization_bonus() {
    let mut duel = Duel::builder()
        .player_deck(vec![card(10, 5, 2, 0.0)])
        .rival_deck(vec![card(0, 1, 0, 0.0)])
        .build(&empty_catalog(), 42);

    let events = duel.play_hand();

    assert_eq!(duel.outcome(), Some(Outcome::PlayerWin));
    assert_eq!(duel.turn_count(), 1);
    // 100 (exchange) + 1500 + (40 - 1) * 100.
    assert_eq!(duel.score(), 100 + 1_500 + 3_900);
    assert!(events.contains(&CombatEvent::MatchEnded { outcome: Outcome::PlayerWin }));
}

/// The shield reflects exactly one losing exchange, then is spent for the
/// rest of the match.
#[test]
fn test_shield_fires_exactly_once() {
    let losing = vec![card(5, 1, 1, 0.0); 4];
    let winning = vec![card(10, 9, 2, 0.0); 4];

    let mut duel = Duel::builder()
        .player_deck(losing)
        .rival_deck(winning)
        .build(&empty_catalog(), 42);

    let events = duel.activate_shield();
    assert!(events.contains(&CombatEvent::ShieldActivated));

    // Re-arming while used is a silent no-op.
    assert!(duel.activate_shield().is_empty());

    let mut reflections = 0;
    let mut player_hits = 0;
    for _ in 0..4 {
        for event in duel.play_hand() {
            match event {
                CombatEvent::ShieldReflected { .. } => reflections += 1,
                CombatEvent::DamageDealt { side: Side::Player, .. } => player_hits += 1,
                _ => {}
            }
        }
        if duel.outcome().is_some() {
            break;
        }
    }

    assert_eq!(reflections, 1);
    assert!(player_hits >= 1); // later losses land normally
}

/// Heal restores a quarter of the starting pool, never above it, once.
#[test]
fn test_heal_once_and_clamped() {
    let mut duel = Duel::builder()
        .player_deck(vec![card(10, 1, 0, 0.0); 3])
        .rival_deck(vec![card(10, 9, 0, 0.0); 3])
        .build(&empty_catalog(), 42);

    let hp_max = duel.stats(Side::Player).hp; // 150

    duel.play_hand(); // player loses: 150 - 11 = 139
    assert_eq!(duel.stats(Side::Player).hp, 139);

    let events = duel.activate_heal();
    // 25% of 150 is 37, but only 11 HP are missing.
    assert!(events.contains(&CombatEvent::HealActivated { restored: 11 }));
    assert_eq!(duel.stats(Side::Player).hp, hp_max);

    assert!(duel.activate_heal().is_empty());
}

/// Score never decreases across a whole match, whatever happens in it.
#[test]
fn test_score_is_monotone_through_a_match() {
    let catalog = Catalog::load_from_str(
        r#"[
            { "serie": "green", "hp": 8, "atk": 3, "def": 1, "bonus": 0,
              "ruta_frente": "a.png", "ruta_reverso": "b.png" },
            { "serie": "green", "hp": 10, "atk": 4, "def": 2, "bonus": 0.5,
              "ruta_frente": "a.png", "ruta_reverso": "b.png" },
            { "serie": "green", "hp": 12, "atk": 5, "def": 2, "bonus": 0,
              "ruta_frente": "a.png", "ruta_reverso": "b.png" },
            { "serie": "red", "hp": 20, "atk": 9, "def": 4, "bonus": 1.5,
              "ruta_frente": "a.png", "ruta_reverso": "b.png" },
            { "serie": "red", "hp": 18, "atk": 8, "def": 3, "bonus": 0,
              "ruta_frente": "a.png", "ruta_reverso": "b.png" }
        ]"#,
    )
    .unwrap();

    let mut duel = Duel::builder()
        .distribution(DeckDistribution::new().with_quota("green", 3).with_quota("red", 2))
        .build(&catalog, 9);

    duel.activate_shield();
    let mut last_score = duel.score();

    for step in 0..100 {
        if step == 2 {
            duel.activate_heal();
        }
        duel.play_hand();
        duel.tick(1_000);

        assert!(duel.score() >= last_score);
        last_score = duel.score();

        if duel.outcome().is_some() {
            break;
        }
    }

    assert!(duel.outcome().is_some(), "match should end within its decks");
}

/// Exhausting the player's deck ends the match; equal HP favors the player.
#[test]
fn test_player_deck_exhaustion_tie_goes_to_player() {
    // Identical single-card decks tie the only exchange, leaving HP equal.
    let mut duel = Duel::builder()
        .player_deck(vec![card(10, 5, 2, 0.0)])
        .rival_deck(vec![card(10, 5, 2, 0.0)])
        .build(&empty_catalog(), 42);

    duel.play_hand();

    assert_eq!(duel.outcome(), Some(Outcome::PlayerWin));
    assert_eq!(duel.turn_count(), 1);
    // 1500 + (40 - 1) * 100, no exchange points from the tied hand.
    assert_eq!(duel.score(), 1_500 + 3_900);
}

/// Name validation, exactly as enforced before recording a score.
#[test]
fn test_name_validation_rules() {
    assert_eq!(validate_name("Ana Maria"), Ok(()));
    assert_eq!(validate_name(""), Err(InvalidNameError::Empty));
    assert_eq!(validate_name("   "), Err(InvalidNameError::Empty));
    assert_eq!(
        validate_name("Ana123"),
        Err(InvalidNameError::InvalidCharacter('1'))
    );
}
