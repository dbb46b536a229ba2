//! End-to-end match scenarios driven through the public engine API.

use std::time::Duration;

use kickoff_core::prelude::*;
use kickoff_core::persistence;

fn place(engine: &mut MatchEngine, side: Side, slot: usize, at: Vec2) {
    let entity = engine.player(side, slot).unwrap();
    engine.world.get::<&mut Position>(entity).unwrap().0 = at;
}

fn give_ball(engine: &mut MatchEngine, side: Side, slot: usize) {
    let entity = engine.player(side, slot).unwrap();
    let ball = engine.ball_entity();
    engine.world.get::<&mut Ball>(ball).unwrap().attach(entity);
}

#[test]
fn full_power_shot_scores_on_the_right() {
    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    place(&mut engine, Side::Home, 0, Vec2::new(600.0, 300.0));
    place(&mut engine, Side::Away, 1, Vec2::new(700.0, 500.0));
    give_ball(&mut engine, Side::Home, 0);

    let charge = engine.update(&KeyboardState::new().hold(Key::E), 1_000);
    assert!(matches!(charge.as_slice(), [MatchEvent::ChargeStarted { at_ms: 1_000, .. }]));
    assert_eq!(engine.ball_position(), Vec2::new(630.0, 300.0));

    let shot = engine.update(&KeyboardState::new(), 3_000);
    match shot.first() {
        Some(MatchEvent::ShotReleased {
            speed,
            charge_fraction,
            ..
        }) => {
            assert_eq!(*speed, 20.0);
            assert_eq!(*charge_fraction, 1.0);
        }
        other => panic!("expected a shot, got {other:?}"),
    }
    assert_eq!(engine.ball().velocity, Vec2::new(20.0, 0.0));

    let mut goal = None;
    for i in 0..20 {
        let events = engine.update(&KeyboardState::new(), 3_016 + i * 16);
        if let Some(ev) = events.into_iter().find(MatchEvent::is_goal) {
            goal = Some(ev);
            break;
        }
    }
    assert_eq!(
        goal,
        Some(MatchEvent::GoalScored {
            scorer: Side::Home,
            home: 1,
            away: 0
        })
    );
    assert_eq!(engine.score(), (1, 0));
    assert_eq!(engine.ball_position(), Vec2::new(400.0, 300.0));
    assert!(engine.ball().is_free());
    assert_eq!(engine.ball().velocity, Vec2::ZERO);
}

#[test]
fn carrying_into_own_goal_counts() {
    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    place(&mut engine, Side::Home, 0, Vec2::new(75.0, 300.0));
    give_ball(&mut engine, Side::Home, 0);

    let left = KeyboardState::new().hold(Key::A);
    let mut scored = Vec::new();
    for tick in 1..=5u64 {
        scored.extend(
            engine
                .update(&left, tick * 16)
                .into_iter()
                .filter(MatchEvent::is_goal),
        );
    }
    // the fifth tick leaves the ball centre exactly on the goal line x = 20
    assert_eq!(
        scored,
        vec![MatchEvent::GoalScored {
            scorer: Side::Away,
            home: 0,
            away: 1
        }]
    );
}

#[test]
fn scores_never_decrease_over_a_match() {
    let mut config = MatchConfig::default();
    config.match_duration_ms = 5_000;
    let mut engine = MatchEngine::new(config, 0);
    let mut clock = ManualClock::new(0);

    let script = [
        KeyboardState::new().hold(Key::D).hold(Key::S),
        KeyboardState::new().hold(Key::D).hold(Key::E),
        KeyboardState::new().hold(Key::D),
        KeyboardState::new().press(Key::Space).hold(Key::Left),
        KeyboardState::new().hold(Key::Up).hold(Key::Return),
        KeyboardState::new().hold(Key::Left),
    ];
    let mut frame = 0usize;
    let mut input = |_now: u64| {
        frame += 1;
        if frame > 400 {
            KeyboardState::quitting()
        } else {
            script[(frame / 25) % script.len()].clone()
        }
    };

    let mut last = (0u32, 0u32);
    let mut full_time = 0;
    let mut presenter = |snap: &MatchSnapshot, events: &[MatchEvent]| {
        assert!(snap.home.score >= last.0 && snap.away.score >= last.1);
        last = (snap.home.score, snap.away.score);
        for team in [&snap.home, &snap.away] {
            assert_eq!(team.players.iter().filter(|p| p.active).count(), 1);
        }
        if snap.ball.holder.is_some() {
            assert_eq!(snap.ball.velocity, Vec2::ZERO);
        }
        full_time += events
            .iter()
            .filter(|e| matches!(e, MatchEvent::FullTime { .. }))
            .count();
    };

    let stats = GameLoop::new(Duration::from_millis(16)).run(&mut engine, &mut clock, &mut input, &mut presenter);
    assert_eq!(stats.frames, 400);
    assert_eq!(full_time, 1);
    assert!(engine.is_game_over());
    assert_eq!(stats.goals, last.0 + last.1);
}

#[test]
fn config_file_drives_the_match() {
    let json = r#"{ "match_duration_ms": 1000, "kickoff_velocity": { "x": 0.0, "y": 0.0 } }"#;
    let config = persistence::load_config(json.as_bytes()).unwrap();
    let mut engine = MatchEngine::new(config, 0);

    engine.update(&KeyboardState::new(), 500);
    assert_eq!(engine.ball_position(), Vec2::new(400.0, 300.0));
    assert_eq!(engine.remaining_secs(500), 0);
    assert!(!engine.is_game_over());

    engine.update(&KeyboardState::new(), 1_000);
    assert!(engine.is_game_over());

    let mut out = Vec::new();
    persistence::write_snapshot(&mut out, &engine.snapshot(1_000)).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("\"game_over\": true"));
    assert!(text.contains("\"verdict\": \"Draw\""));
}
