//! Statistics aggregation tests.

use chrono::NaiveDate;
use dartrs::{
    Engine, GameOptions, Identity, MultiplayerGame, PlayerId, Round, ScoreBrackets, ScoredGame,
    SinglePlayerGame, Statistics, Throw, UserId, multiplayer_statistics, singleplayer_statistics,
    weekly_averages,
};
use pretty_assertions::assert_eq;

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn played(options: GameOptions, throws: &[Throw]) -> SinglePlayerGame {
    let mut game = SinglePlayerGame::new(UserId(1), options, day(2024, 2, 5));
    for throw in throws {
        game.record_round(None, *throw).unwrap();
    }
    game
}

fn practice_games() -> Vec<SinglePlayerGame> {
    vec![
        played(
            GameOptions::default().with_score(100),
            &[Throw::new(60), Throw::new(40).with_darts(2)],
        ),
        played(
            GameOptions::default().with_rounds(2),
            &[Throw::new(140), Throw::new(180)],
        ),
        played(GameOptions::default(), &[]),
    ]
}

/// Plays rounds for whoever is up in a multiplayer game.
fn play(engine: &Engine, game: dartrs::GameId, throws: &[Throw]) -> MultiplayerGame {
    for &throw in throws {
        let player = engine.next_turn(game).unwrap().id;
        engine.record_round(game, Some(player), throw).unwrap();
    }
    engine.multiplayer_game(game).unwrap()
}

#[test]
fn practice_statistics() {
    let stats = singleplayer_statistics(&practice_games());

    assert_eq!(stats.wins, 1);
    assert_eq!(stats.losses, 1);
    assert_eq!(stats.total_games, 2);
    assert_eq!(stats.total_points, 420);
    assert_eq!(stats.total_rounds, 4);
    assert_eq!(stats.total_darts, 11);
    assert_eq!(stats.win_rate(), 50.0);
    assert_eq!(stats.loss_rate(), 50.0);
    assert_eq!(stats.average_points(), 114.55);
    assert_eq!(stats.checkout_attempts, 1);
    assert_eq!(stats.checkouts, 1);
    assert_eq!(stats.checkout_rate(), 100.0);
    assert_eq!(
        stats.brackets,
        ScoreBrackets {
            sixty_plus: 1,
            ton_forty_plus: 1,
            ton_eighty: 1,
            ..ScoreBrackets::default()
        }
    );
}

#[test]
fn empty_statistics_are_zero() {
    let stats = Statistics::default();
    assert_eq!(stats.win_rate(), 0.0);
    assert_eq!(stats.loss_rate(), 0.0);
    assert_eq!(stats.average_points(), 0.0);
    assert_eq!(stats.checkout_rate(), 0.0);
    assert_eq!(singleplayer_statistics(&Vec::<SinglePlayerGame>::new()), Statistics::default());
}

#[test]
fn bracket_boundaries() {
    let mut brackets = ScoreBrackets::default();
    for points in [0, 59, 60, 79, 80, 99, 100, 139, 140, 179, 180] {
        brackets.add(points);
    }
    assert_eq!(
        brackets,
        ScoreBrackets {
            sixty_plus: 2,
            eighty_plus: 2,
            ton_plus: 2,
            ton_forty_plus: 2,
            ton_eighty: 1,
        }
    );
}

#[test]
fn only_shots_at_a_double_are_checkout_attempts() {
    let game = played(
        GameOptions::default().with_score(100),
        &[
            Throw::new(60),
            Throw::new(20).on_double(),
            Throw::new(0).on_double(),
            Throw::new(20),
        ],
    );
    let attempts: Vec<bool> = game
        .rounds()
        .iter()
        .map(|round| round.is_checkout_attempt())
        .collect();
    assert_eq!(attempts, [false, true, true, true]);

    let stats = singleplayer_statistics([&game]);
    assert_eq!(stats.checkout_attempts, 3);
    assert_eq!(stats.checkouts, 1);
    assert_eq!(stats.checkout_rate(), 33.33);

    // A double thrown while no finish is on counts for nothing.
    let setup = played(GameOptions::default(), &[Throw::new(40).on_double()]);
    assert_eq!(singleplayer_statistics([&setup]).checkout_attempts, 0);
}

#[test]
fn multiplayer_statistics_count_only_own_rounds() {
    let engine = Engine::new(5);
    let me = Identity::Registered(UserId(1));

    let won = engine.create_multiplayer_game(
        UserId(1),
        GameOptions::default().with_score(100),
        day(2024, 2, 5),
    );
    let won = play(
        &engine,
        won,
        &[
            Throw::new(60),
            Throw::new(20),
            Throw::new(30).on_double(),
            Throw::new(20),
            Throw::new(10),
        ],
    );
    assert_eq!(won.winner().map(|p| p.id), Some(PlayerId(0)));

    let lost = engine.create_multiplayer_game(
        UserId(1),
        GameOptions::default().with_score(40),
        day(2024, 2, 6),
    );
    let lost = play(&engine, lost, &[Throw::new(0).on_double(), Throw::new(40)]);

    let running = engine.create_multiplayer_game(UserId(1), GameOptions::default(), day(2024, 2, 7));
    let running = engine.multiplayer_game(running).unwrap();

    let stats = multiplayer_statistics([&won], &me);
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.total_points, 100);
    assert_eq!(stats.total_darts, 9);
    assert_eq!(stats.average_points(), 33.33);
    assert_eq!(stats.checkout_attempts, 2);
    assert_eq!(stats.checkout_rate(), 50.0);

    let stats = multiplayer_statistics([&won, &lost, &running], &me);
    assert_eq!(stats.wins, 1);
    assert_eq!(stats.losses, 1);
    assert_eq!(stats.total_games, 2);
    assert_eq!(stats.total_rounds, 4);
    assert_eq!(stats.average_points(), 25.0);
    assert_eq!(stats.checkout_attempts, 3);
    assert_eq!(stats.checkout_rate(), 33.33);

    let stranger = Identity::Registered(UserId(9));
    assert_eq!(
        multiplayer_statistics([&won, &lost], &stranger),
        Statistics::default()
    );
}

#[test]
fn weekly_averages_follow_iso_weeks() {
    let rounds = [
        (day(2024, 1, 1), 60),
        (day(2024, 1, 3), 90),
        (day(2024, 1, 8), 90),
        (day(2024, 12, 30), 45),
    ]
    .map(|(date, points)| {
        (
            date,
            Round {
                player: None,
                points,
                darts: None,
                left_before: 501,
                on_double: false,
            },
        )
    });

    let weekly = weekly_averages(rounds.iter().map(|(date, round)| (*date, round)));
    let summary: Vec<(i32, u32, f64)> = weekly
        .iter()
        .map(|week| (week.year, week.week, week.average_points))
        .collect();
    assert_eq!(
        summary,
        [(2024, 1, 75.0), (2024, 2, 90.0), (2025, 1, 45.0)]
    );
}

#[test]
fn engine_statistics_for_one_player() {
    let engine = Engine::new(5);
    let me = Identity::Registered(UserId(1));

    let first = engine.create_game(UserId(1), GameOptions::default().with_score(40), day(2024, 1, 8));
    engine.record_round(first, None, Throw::new(40)).unwrap();
    let second = engine.create_game(UserId(1), GameOptions::default(), day(2024, 1, 1));
    engine
        .record_round(second, None, Throw::new(60).with_darts(3))
        .unwrap();
    let other = engine.create_game(UserId(2), GameOptions::default(), day(2024, 1, 1));
    engine.record_round(other, None, Throw::new(180)).unwrap();

    let versus = engine.create_multiplayer_game(
        UserId(1),
        GameOptions::default().with_score(100),
        day(2024, 1, 9),
    );
    let player = engine.next_turn(versus).unwrap().id;
    engine
        .record_round(versus, Some(player), Throw::new(100))
        .unwrap();

    let snapshot = engine.statistics(&me);
    assert_eq!(snapshot.singleplayer.wins, 1);
    assert_eq!(snapshot.singleplayer.total_games, 1);
    assert_eq!(snapshot.singleplayer.total_points, 100);
    assert_eq!(snapshot.multiplayer.wins, 1);
    assert_eq!(snapshot.multiplayer.total_points, 100);

    let weeks: Vec<u32> = snapshot.weekly.iter().map(|week| week.week).collect();
    assert_eq!(weeks, [1, 2]);

    let combined = snapshot.combined();
    assert_eq!(combined.wins, 2);
    assert_eq!(combined.total_points, 200);
    assert_eq!(combined.checkouts, 2);

    let guest = engine.statistics(&Identity::Guest("Phil Taylor".into()));
    assert_eq!(guest.singleplayer, Statistics::default());
    assert!(guest.weekly.is_empty());
}
