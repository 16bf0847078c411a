//! Round validation and single-player game tests.

use chrono::NaiveDate;
use dartrs::{
    CheckoutMode, Engine, GameId, GameOptions, GameStatus, IMPOSSIBLE_POINTS, PlayerId,
    RoundError, ScoredGame, SinglePlayerGame, Throw, UserId, is_checkout, round_points,
};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
}

fn practice(engine: &Engine, options: GameOptions) -> GameId {
    engine.create_game(UserId(1), options, date())
}

#[test]
fn accepted_points_stay_in_range() {
    for left in 0..=200_u16 {
        for raw in -20..=220 {
            let points = round_points(left, raw, CheckoutMode::Any, true);
            assert!(points <= 180, "{left} {raw}");
            assert!(points <= left, "{left} {raw}");
            if points > 0 {
                assert_ne!(left - points, 1, "{left} {raw}");
            }
        }
    }
}

#[test]
fn every_possible_visit_scores_from_501() {
    for points in 1..=180 {
        let expected = if IMPOSSIBLE_POINTS.contains(&points) {
            0
        } else {
            points
        };
        assert_eq!(
            round_points(501, i32::from(points), CheckoutMode::Any, false),
            expected
        );
    }
}

#[test]
fn finishing_requires_a_listed_checkout() {
    for points in 1..=180 {
        let expected = if is_checkout(points) { points } else { 0 };
        assert_eq!(
            round_points(points, i32::from(points), CheckoutMode::Any, false),
            expected,
            "finish on {points}"
        );
    }
}

#[test]
fn busts_and_clamping() {
    assert_eq!(round_points(100, 101, CheckoutMode::Any, false), 0);
    assert_eq!(round_points(100, 99, CheckoutMode::Any, false), 0);
    assert_eq!(round_points(170, 169, CheckoutMode::Any, false), 0);
    assert_eq!(round_points(501, 250, CheckoutMode::Any, false), 180);
    assert_eq!(round_points(501, -5, CheckoutMode::Any, false), 0);
    assert_eq!(round_points(0, 0, CheckoutMode::Any, false), 0);
}

#[test]
fn double_out_needs_confirmation() {
    assert_eq!(round_points(100, 100, CheckoutMode::DoubleOut, false), 0);
    assert_eq!(round_points(100, 100, CheckoutMode::DoubleOut, true), 100);
    assert_eq!(round_points(100, 60, CheckoutMode::DoubleOut, false), 60);
}

#[test]
fn first_round_from_501() {
    init_logs();
    let engine = Engine::new(1);
    let game = practice(&engine, GameOptions::default());

    let outcome = engine.record_round(game, None, Throw::new(60)).unwrap();
    assert_eq!(outcome.accepted_points, 60);
    assert_eq!(outcome.left_score, 441);
    assert!(!outcome.terminal);
    assert_eq!(engine.left_score(game, None), Ok(441));
}

#[test]
fn checkout_wins_the_game() {
    init_logs();
    let engine = Engine::new(1);
    let game = practice(&engine, GameOptions::default().with_score(100));

    let outcome = engine.record_round(game, None, Throw::new(100)).unwrap();
    assert_eq!(outcome.accepted_points, 100);
    assert!(outcome.terminal);
    assert_eq!(outcome.winner, None);
    assert_eq!(engine.game(game).unwrap().status(), GameStatus::Won);

    assert_eq!(
        engine.record_round(game, None, Throw::new(20)).unwrap_err(),
        RoundError::InvalidState
    );
}

#[test]
fn invalid_checkout_keeps_game_running() {
    let engine = Engine::new(1);
    let game = practice(&engine, GameOptions::default().with_score(169));

    let outcome = engine.record_round(game, None, Throw::new(169)).unwrap();
    assert_eq!(outcome.accepted_points, 0);
    assert_eq!(outcome.left_score, 169);
    assert_eq!(engine.game(game).unwrap().status(), GameStatus::Progress);
}

#[test]
fn running_out_of_rounds_loses() {
    let engine = Engine::new(1);
    let game = practice(&engine, GameOptions::default().with_rounds(2));

    assert!(!engine.record_round(game, None, Throw::new(60)).unwrap().terminal);
    let outcome = engine.record_round(game, None, Throw::new(60)).unwrap();
    assert!(outcome.terminal);
    assert_eq!(outcome.left_score, 381);
    assert_eq!(engine.game(game).unwrap().status(), GameStatus::Lost);
}

#[test]
fn zero_round_cap_never_loses() {
    let mut game = SinglePlayerGame::new(UserId(1), GameOptions::default().with_rounds(0), date());
    for _ in 0..40 {
        game.record_round(None, Throw::new(0)).unwrap();
    }
    assert_eq!(game.status(), GameStatus::Progress);
}

#[test]
fn undo_restores_score_and_status() {
    let engine = Engine::new(1);
    let game = practice(&engine, GameOptions::default().with_score(100));

    engine.record_round(game, None, Throw::new(60)).unwrap();
    assert_eq!(engine.left_score(game, None), Ok(40));
    let undone = engine.undo_last_round(game).unwrap().unwrap();
    assert_eq!(undone.points, 60);
    assert_eq!(engine.left_score(game, None), Ok(100));

    engine.record_round(game, None, Throw::new(100)).unwrap();
    assert_eq!(engine.game(game).unwrap().status(), GameStatus::Won);
    engine.undo_last_round(game).unwrap();
    let restored = engine.game(game).unwrap();
    assert_eq!(restored.status(), GameStatus::Progress);
    assert_eq!(restored.left_score(None), 100);
    assert!(restored.rounds().is_empty());

    assert_eq!(engine.undo_last_round(game), Ok(None));
}

#[test]
fn undo_reopens_a_lost_game() {
    let engine = Engine::new(1);
    let game = practice(&engine, GameOptions::default().with_rounds(1));

    engine.record_round(game, None, Throw::new(45)).unwrap();
    assert_eq!(engine.game(game).unwrap().status(), GameStatus::Lost);
    engine.undo_last_round(game).unwrap();
    assert_eq!(engine.game(game).unwrap().status(), GameStatus::Progress);
}

#[test]
fn double_out_game() {
    let engine = Engine::new(1);
    let options = GameOptions::default()
        .with_score(40)
        .with_checkout(CheckoutMode::DoubleOut);
    let game = practice(&engine, options);

    let missed = engine.record_round(game, None, Throw::new(40)).unwrap();
    assert_eq!(missed.accepted_points, 0);
    assert!(!missed.terminal);

    let hit = engine
        .record_round(game, None, Throw::new(40).on_double().with_darts(1))
        .unwrap();
    assert_eq!(hit.accepted_points, 40);
    assert!(hit.terminal);
}

#[test]
fn round_errors() {
    let engine = Engine::new(1);
    let game = practice(&engine, GameOptions::default());

    assert_eq!(
        engine
            .record_round(game, None, Throw::new(20).with_darts(4))
            .unwrap_err(),
        RoundError::DartsOutOfRange
    );
    assert_eq!(
        engine
            .record_round(game, None, Throw::new(20).with_darts(0))
            .unwrap_err(),
        RoundError::DartsOutOfRange
    );
    assert_eq!(
        engine
            .record_round(game, Some(PlayerId(0)), Throw::new(20))
            .unwrap_err(),
        RoundError::PlayerNotFound
    );
    assert_eq!(
        engine
            .record_round(GameId(999), None, Throw::new(20))
            .unwrap_err(),
        RoundError::GameNotFound
    );
    assert_eq!(
        engine.undo_last_round(GameId(999)).unwrap_err(),
        RoundError::GameNotFound
    );
    assert!(engine.game(game).unwrap().rounds().is_empty());
}

#[test]
fn game_context() {
    let mut game = SinglePlayerGame::new(UserId(1), GameOptions::default(), date());
    let context = game.context();
    assert_eq!(context.left_score, 501);
    assert_eq!(context.average_score, 0.0);
    assert_eq!(context.checkout_suggestion, None);

    for points in [100, 100, 101] {
        game.record_round(None, Throw::new(points)).unwrap();
    }
    let context = game.context();
    assert_eq!(context.left_score, 200);
    assert_eq!(context.round_count, 3);
    assert_eq!(context.total_points, 301);
    assert_eq!(context.average_score, 100.3);
    assert!((context.progress_percentage - 301.0 / 501.0 * 100.0).abs() < 1e-9);

    game.record_round(None, Throw::new(100)).unwrap();
    let context = game.context();
    assert_eq!(context.left_score, 100);
    assert_eq!(
        context.checkout_suggestion.map(ToString::to_string).as_deref(),
        Some("T20 D20")
    );
}

#[test]
fn multiple_rounds_progression() {
    let engine = Engine::new(1);
    let game = practice(&engine, GameOptions::default());

    for (raw, accepted, left) in [
        (180, 180, 321),
        (140, 140, 181),
        (125, 125, 56),
        (57, 0, 56),
        (56, 56, 0),
    ] {
        let outcome = engine.record_round(game, None, Throw::new(raw)).unwrap();
        assert_eq!(outcome.accepted_points, accepted, "raw {raw}");
        assert_eq!(outcome.left_score, left, "raw {raw}");
    }
    assert_eq!(engine.game(game).unwrap().status(), GameStatus::Won);
}
