//! Tournament platform: registration, matches, standings and reports

use datadeck::core::{CardId, CombatProfile, Rarity, TournamentCard, LOSS_PENALTY, WIN_BONUS};
use datadeck::tournament::TournamentPlatform;
use datadeck::{DeckError, Result};
use similar_asserts::assert_eq;

fn fire_dragon(rating: i64) -> TournamentCard {
    TournamentCard::with_rating(
        "Fire Dragon",
        5,
        Rarity::Epic,
        CombatProfile::new(50, 30, 100, "Fire"),
        rating,
    )
}

fn ice_wizard(rating: i64) -> TournamentCard {
    TournamentCard::with_rating(
        "Ice Wizard",
        4,
        Rarity::Rare,
        CombatProfile::new(40, 20, 80, "Ice"),
        rating,
    )
}

fn platform(seed: u64) -> (TournamentPlatform, CardId, CardId) {
    let mut platform = TournamentPlatform::with_seed(seed);
    platform.logger.enable_capture();
    let dragon = platform.register_card(fire_dragon(5));
    let wizard = platform.register_card(ice_wizard(8));
    (platform, dragon, wizard)
}

#[test]
fn test_registration_ids() {
    let (platform, dragon, wizard) = platform(42);

    assert!(dragon.as_str().starts_with("Fire Dragon_"));
    assert!(wizard.as_str().starts_with("Ice Wizard_"));
    assert_eq!(platform.card_ids().to_vec(), vec![dragon, wizard]);
    assert!(platform.logger.contains("Registered Fire Dragon_"));
}

#[test]
fn test_single_match_ratings() -> Result<()> {
    let (mut platform, dragon, wizard) = platform(42);
    let result = platform.create_match(&dragon, &wizard)?;

    let (expected_winner, expected_loser) = if result.winner == dragon {
        (5 + WIN_BONUS, 8 - LOSS_PENALTY)
    } else {
        (8 + WIN_BONUS, 5 - LOSS_PENALTY)
    };
    assert_eq!(result.winner_rating, expected_winner);
    assert_eq!(result.loser_rating, expected_loser);

    let winner = platform.card_info(&result.winner)?;
    let loser = platform.card_info(&result.loser)?;
    assert_eq!(winner.record.as_str(), "1-0");
    assert_eq!(loser.record.as_str(), "0-1");
    assert_eq!(winner.interfaces, vec!["Card".to_string(), "Combatant".to_string(), "Ranked".to_string()]);

    let leaderboard = platform.get_leaderboard();
    assert_eq!(leaderboard.standings[0].id, result.winner);
    assert_eq!(leaderboard.standings[0].rank, 1);
    assert_eq!(leaderboard.matches, vec![result]);
    Ok(())
}

#[test]
fn test_report_after_round_robin() -> Result<()> {
    let (mut platform, _, _) = platform(7);
    platform.register_card(fire_dragon(3));
    let played = platform.run_round_robin(2)?;
    assert_eq!(played.len(), 6);

    let report = platform.generate_tournament_report()?;
    assert_eq!(report.total_cards, 3);
    assert_eq!(report.matches_played, 6);
    assert_eq!(report.platform_status.as_str(), "active");

    // Each match moves the rating total by WIN_BONUS - LOSS_PENALTY
    let expected = (5 + 8 + 3 + 6 * (WIN_BONUS - LOSS_PENALTY)) as f64 / 3.0;
    assert!((report.avg_rating - expected).abs() < 1e-9);

    let records: u32 = platform
        .get_leaderboard()
        .standings
        .iter()
        .map(|e| e.wins + e.losses)
        .sum();
    assert_eq!(records, 12);
    Ok(())
}

#[test]
fn test_duplicate_names_get_distinct_ids() {
    let mut platform = TournamentPlatform::with_seed(1);
    let ids: Vec<CardId> = (0..20).map(|_| platform.register_card(fire_dragon(5))).collect();

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 20);
    assert_eq!(platform.len(), 20);
}

#[test]
fn test_invalid_matches() {
    let (mut platform, dragon, _) = platform(3);
    let ghost = CardId::new("Ghost_1234");

    assert!(matches!(
        platform.create_match(&dragon, &dragon),
        Err(DeckError::InvalidMatch(_))
    ));
    assert_eq!(
        platform.create_match(&dragon, &ghost),
        Err(DeckError::CardNotFound("Ghost_1234".to_string()))
    );
    assert!(platform.matches().is_empty());
}

#[test]
fn test_empty_platform_report() {
    let platform = TournamentPlatform::default();
    assert_eq!(
        platform.generate_tournament_report(),
        Err(DeckError::EmptyCollection("tournament report"))
    );
    assert!(platform.get_leaderboard().standings.is_empty());
}

#[test]
fn test_same_seed_same_tournament() -> Result<()> {
    let run = |seed| -> Result<Vec<String>> {
        let (mut platform, _, _) = platform(seed);
        platform.run_round_robin(3)?;
        Ok(platform
            .get_leaderboard()
            .standings
            .into_iter()
            .map(|e| format!("{} {}", e.id, e.rating))
            .collect())
    };
    assert_eq!(run(11)?, run(11)?);
    Ok(())
}

#[test]
fn test_reseeded_platform_repeats_outcomes() -> Result<()> {
    let first_card_wins = |registration_seed| -> Result<Vec<bool>> {
        let (mut platform, dragon, wizard) = platform(registration_seed);
        platform.seed_rng(21);
        (0..8)
            .map(|_| -> Result<bool> { Ok(platform.create_match(&dragon, &wizard)?.winner == dragon) })
            .collect()
    };
    assert_eq!(first_card_wins(0)?, first_card_wins(5)?);
    Ok(())
}
