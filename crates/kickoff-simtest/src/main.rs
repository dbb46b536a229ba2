//! Kickoff Headless Simulation Harness
//!
//! Drives the real match engine and frame loop with scripted and random
//! input. Runs entirely in-process with a manual clock, so a full match
//! takes milliseconds and no window is opened.
//!
//! The rule scenarios always use the default configuration. `--config`
//! applies to the scripted match and the random soak.
//!
//! Usage:
//!   cargo run -p kickoff-simtest
//!   cargo run -p kickoff-simtest -- --verbose
//!   cargo run -p kickoff-simtest -- --config match.json --seed 7 --snapshot final.json

use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;

use kickoff_core::persistence;
use kickoff_core::prelude::*;
use kickoff_logic::geometry::FieldBounds;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }

    fn setup_failed(name: &str) -> Self {
        Self::new(name, false, "could not set up the scenario")
    }
}

struct Options {
    verbose: bool,
    config_path: Option<String>,
    seed: u64,
    snapshot_path: Option<String>,
}

impl Options {
    fn from_args() -> Self {
        let args: Vec<String> = std::env::args().skip(1).collect();
        let value = |flag: &str| {
            args.iter()
                .position(|a| a == flag)
                .and_then(|i| args.get(i + 1))
                .cloned()
        };
        Self {
            verbose: args.iter().any(|a| a == "--verbose"),
            config_path: value("--config"),
            seed: value("--seed").and_then(|s| s.parse().ok()).unwrap_or(42),
            snapshot_path: value("--snapshot"),
        }
    }
}

fn main() {
    let opts = Options::from_args();
    let default_filter = if opts.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    println!("=== Kickoff Simulation Harness ===\n");

    let config = match &opts.config_path {
        Some(path) => match File::open(path)
            .map_err(persistence::PersistenceError::from)
            .and_then(persistence::load_config)
        {
            Ok(c) => {
                println!("config: {}", path);
                c
            }
            Err(e) => {
                eprintln!("failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => MatchConfig::default(),
    };

    let mut results = Vec::new();

    // 1. Player movement, facing and clamping
    results.extend(validate_movement(opts.verbose));

    // 2. Free flight and wall reflection
    results.extend(validate_ball_flight(opts.verbose));

    // 3. Pickup priority
    results.extend(validate_possession(opts.verbose));

    // 4. Charge and shot power
    results.extend(validate_shooting(opts.verbose));

    // 5. Goals and restart
    results.extend(validate_scoring(opts.verbose));

    // 6. Match clock and full time
    results.extend(validate_timer(opts.verbose));

    // 7. Active player switching
    results.extend(validate_switching(opts.verbose));

    // 8. Scripted match through the frame loop
    results.extend(validate_scripted_match(&config, opts.verbose));

    // 9. Seeded random soak
    results.extend(validate_random_soak(&config, &opts));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || opts.verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── Scenario helpers ────────────────────────────────────────────────────

fn idle() -> KeyboardState {
    KeyboardState::new()
}

fn place(engine: &mut MatchEngine, side: Side, slot: usize, at: Vec2) -> Option<()> {
    let entity = engine.player(side, slot)?;
    engine.world.get::<&mut Position>(entity).ok()?.0 = at;
    Some(())
}

fn place_ball(engine: &mut MatchEngine, at: Vec2, velocity: Vec2) -> Option<()> {
    let ball = engine.ball_entity();
    engine.world.get::<&mut Position>(ball).ok()?.0 = at;
    engine.world.get::<&mut Ball>(ball).ok()?.velocity = velocity;
    Some(())
}

fn give_ball(engine: &mut MatchEngine, side: Side, slot: usize) -> Option<()> {
    let entity = engine.player(side, slot)?;
    let ball = engine.ball_entity();
    engine.world.get::<&mut Ball>(ball).ok()?.attach(entity);
    Some(())
}

fn shot_of(events: &[MatchEvent]) -> Option<(PlayerId, f32)> {
    events.iter().find_map(|e| match e {
        MatchEvent::ShotReleased { player, speed, .. } => Some((*player, *speed)),
        _ => None,
    })
}

fn active_slot(engine: &MatchEngine, side: Side) -> usize {
    engine.team(side).active_index
}

// ── 1. Movement ─────────────────────────────────────────────────────────

fn validate_movement(_verbose: bool) -> Vec<TestResult> {
    println!("--- Movement ---");
    let mut results = Vec::new();

    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    let Some(striker) = engine.player(Side::Home, 0) else {
        results.push(TestResult::setup_failed("move_one_step"));
        return results;
    };

    engine.update(&idle().hold(Key::D), 16);
    let pos = engine.player_position(striker);
    results.push(TestResult::new(
        "move_one_step",
        pos == Some(Vec2::new(155.0, 200.0)),
        format!("(150,200) + D -> {:?}", pos),
    ));
    results.push(TestResult::new(
        "move_sets_facing",
        engine.player_facing(striker) == Some(Vec2::new(1.0, 0.0)),
        format!("facing {:?}", engine.player_facing(striker)),
    ));

    engine.update(&idle(), 32);
    results.push(TestResult::new(
        "facing_persists_when_idle",
        engine.player_facing(striker) == Some(Vec2::new(1.0, 0.0)),
        "no input keeps the last facing",
    ));

    engine.update(&idle().hold(Key::W).hold(Key::A), 48);
    let diag = engine.player_facing(striker).unwrap_or_default();
    results.push(TestResult::new(
        "diagonal_facing_is_unit",
        (diag.length() - 1.0).abs() < 1e-5 && diag.x < 0.0 && diag.y < 0.0,
        format!("W+A facing {:?}", diag),
    ));

    for tick in 0..100u64 {
        engine.update(&idle().hold(Key::A).hold(Key::W), 64 + tick * 16);
    }
    let pos = engine.player_position(striker);
    results.push(TestResult::new(
        "clamped_to_field",
        pos == Some(Vec2::new(20.0, 20.0)),
        format!("pushed into the corner -> {:?}", pos),
    ));

    let bench = engine.player(Side::Home, 1).and_then(|e| engine.player_position(e));
    results.push(TestResult::new(
        "inactive_players_stay",
        bench == Some(Vec2::new(100.0, 300.0)),
        format!("home#1 at {:?}", bench),
    ));

    results
}

// ── 2. Ball flight ──────────────────────────────────────────────────────

fn validate_ball_flight(verbose: bool) -> Vec<TestResult> {
    println!("--- Ball Flight ---");
    let mut results = Vec::new();

    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    engine.update(&idle(), 16);
    results.push(TestResult::new(
        "kickoff_drift",
        engine.ball_position() == Vec2::new(404.0, 303.0),
        format!("(400,300) + (4,3) -> {:?}", engine.ball_position()),
    ));

    // 99 ticks from the centre reaches the bottom-right corner region
    for tick in 2..=99u64 {
        engine.update(&idle(), tick * 16);
    }
    let ball = engine.ball();
    results.push(TestResult::new(
        "corner_reflection",
        ball.is_free() && ball.velocity == Vec2::new(-4.0, -3.0),
        format!(
            "at {:?} velocity {:?}",
            engine.ball_position(),
            ball.velocity
        ),
    ));

    let field = FieldBounds::new(800.0, 600.0);
    let mut escaped = 0;
    for tick in 100..1_000u64 {
        engine.update(&idle(), tick * 16);
        let b = engine.ball_position();
        if !field.contains_circle(b, -5.0) {
            escaped += 1;
        }
    }
    results.push(TestResult::new(
        "ball_stays_near_field",
        escaped == 0,
        format!("{} ticks more than one step outside", escaped),
    ));

    if verbose {
        println!("  ball after 1000 ticks: {:?}", engine.ball_position());
    }

    results
}

// ── 3. Possession ───────────────────────────────────────────────────────

fn validate_possession(_verbose: bool) -> Vec<TestResult> {
    println!("--- Possession ---");
    let mut results = Vec::new();

    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    let setup = place_ball(&mut engine, Vec2::new(400.0, 300.0), Vec2::ZERO)
        .and_then(|_| place(&mut engine, Side::Home, 2, Vec2::new(380.0, 300.0)))
        .and_then(|_| place(&mut engine, Side::Away, 0, Vec2::new(420.0, 300.0)));
    if setup.is_none() {
        results.push(TestResult::setup_failed("standoff_home_first"));
        return results;
    }

    let events = engine.update(&idle(), 16);
    let taker = events.iter().find_map(|e| match e {
        MatchEvent::PossessionGained { player } => Some(*player),
        _ => None,
    });
    results.push(TestResult::new(
        "standoff_home_first",
        taker
            == Some(PlayerId {
                side: Side::Home,
                slot: 2,
            }),
        format!("both touching, taken by {:?}", taker),
    ));

    let ball = engine.ball();
    results.push(TestResult::new(
        "pickup_stops_ball",
        ball.velocity == Vec2::ZERO,
        format!("velocity {:?}", ball.velocity),
    ));

    engine.update(&idle(), 32);
    let snap = engine.snapshot(32);
    results.push(TestResult::new(
        "no_steal_while_carried",
        snap.ball.holder.map(|p| p.side) == Some(Side::Home),
        format!("holder {:?}", snap.ball.holder),
    ));

    // carried ball sits (r_player + r_ball + gap) in front of the holder
    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    let setup = place(&mut engine, Side::Home, 1, Vec2::new(100.0, 300.0))
        .and_then(|_| give_ball(&mut engine, Side::Home, 1));
    if setup.is_some() {
        engine.update(&idle(), 16);
    }
    results.push(TestResult::new(
        "carry_offset",
        engine.ball_position() == Vec2::new(130.0, 300.0),
        format!("holder (100,300) facing right -> ball {:?}", engine.ball_position()),
    ));

    results
}

// ── 4. Shooting ─────────────────────────────────────────────────────────

fn validate_shooting(_verbose: bool) -> Vec<TestResult> {
    println!("--- Shooting ---");
    let mut results = Vec::new();

    // full charge
    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    if give_ball(&mut engine, Side::Home, 0).is_none() {
        results.push(TestResult::setup_failed("full_charge_max_power"));
        return results;
    }
    let started = engine.update(&idle().hold(Key::E), 1_000);
    results.push(TestResult::new(
        "charge_starts",
        engine.ball().possession.is_charging()
            && started
                .iter()
                .any(|e| matches!(e, MatchEvent::ChargeStarted { at_ms: 1_000, .. })),
        format!("{} events on charge", started.len()),
    ));
    let released = engine.update(&idle(), 3_000);
    let shot = shot_of(&released);
    results.push(TestResult::new(
        "full_charge_max_power",
        shot.map(|(_, speed)| speed) == Some(20.0),
        format!("held 2000ms -> {:?}", shot),
    ));
    results.push(TestResult::new(
        "shot_frees_ball",
        engine.ball().is_free() && engine.ball().velocity == Vec2::new(20.0, 0.0),
        format!("velocity {:?}", engine.ball().velocity),
    ));

    // quick tap
    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    let _ = give_ball(&mut engine, Side::Home, 0);
    engine.update(&idle().hold(Key::E), 1_000);
    let tap = shot_of(&engine.update(&idle(), 1_016));
    let tap_speed = tap.map(|(_, s)| s).unwrap_or(0.0);
    results.push(TestResult::new(
        "tap_near_min_power",
        tap_speed > 5.0 && tap_speed < 6.0,
        format!("held 16ms -> speed {:.2}", tap_speed),
    ));

    // switching away mid-charge still releases with the charging player
    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    let _ = give_ball(&mut engine, Side::Home, 0);
    engine.update(&idle().hold(Key::E), 1_000);
    engine.update(&idle().hold(Key::E).press(Key::Space), 2_000);
    let switched = active_slot(&engine, Side::Home) == 1;
    let shooter = shot_of(&engine.update(&idle(), 3_000)).map(|(p, _)| p);
    results.push(TestResult::new(
        "switch_mid_charge",
        switched
            && shooter
                == Some(PlayerId {
                    side: Side::Home,
                    slot: 0,
                }),
        format!("active slot switched={}, shooter {:?}", switched, shooter),
    ));

    // only the active player can start a charge
    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    let _ = give_ball(&mut engine, Side::Home, 2);
    engine.update(&idle().hold(Key::E), 1_000);
    results.push(TestResult::new(
        "inactive_holder_cannot_charge",
        !engine.ball().possession.is_charging(),
        "home#2 holds the ball while home#0 is active",
    ));

    results
}

// ── 5. Scoring ──────────────────────────────────────────────────────────

fn validate_scoring(_verbose: bool) -> Vec<TestResult> {
    println!("--- Scoring ---");
    let mut results = Vec::new();

    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    let _ = place_ball(&mut engine, Vec2::new(790.0, 300.0), Vec2::ZERO);
    let events = engine.update(&idle(), 16);
    results.push(TestResult::new(
        "right_goal_for_home",
        engine.score() == (1, 0) && events.iter().any(MatchEvent::is_goal),
        format!("score {:?}", engine.score()),
    ));
    results.push(TestResult::new(
        "restart_dead_ball",
        engine.ball_position() == Vec2::new(400.0, 300.0)
            && engine.ball().velocity == Vec2::ZERO
            && engine.ball().is_free(),
        format!(
            "ball {:?} velocity {:?}",
            engine.ball_position(),
            engine.ball().velocity
        ),
    ));

    // a ball centre exactly on the left goal line counts
    let _ = place_ball(&mut engine, Vec2::new(20.0, 225.0), Vec2::ZERO);
    engine.update(&idle(), 32);
    results.push(TestResult::new(
        "left_goal_edge_for_away",
        engine.score() == (1, 1),
        format!("score {:?}", engine.score()),
    ));

    // a charging ball carried into a goal is reset, not shot
    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    let _ = place(&mut engine, Side::Away, 0, Vec2::new(740.0, 300.0));
    let _ = give_ball(&mut engine, Side::Away, 0);
    engine.update(&idle().hold(Key::Return), 16);
    let mut shots = 0;
    for tick in 2..=12u64 {
        let keys = idle().hold(Key::Right).hold(Key::Return);
        shots += engine
            .update(&keys, tick * 16)
            .iter()
            .filter(|e| matches!(e, MatchEvent::ShotReleased { .. }))
            .count();
    }
    results.push(TestResult::new(
        "charging_reset_on_goal",
        engine.score() == (1, 0) && shots == 0 && !engine.ball().possession.is_charging(),
        format!("score {:?}, {} shots", engine.score(), shots),
    ));

    results
}

// ── 6. Timer ────────────────────────────────────────────────────────────

fn validate_timer(_verbose: bool) -> Vec<TestResult> {
    println!("--- Timer ---");
    let mut results = Vec::new();

    let mut engine = MatchEngine::new(MatchConfig::default(), 1_000);
    engine.update(&idle(), 60_999);
    results.push(TestResult::new(
        "running_before_expiry",
        !engine.is_game_over() && engine.remaining_secs(60_999) == 0,
        format!("remaining {}s", engine.remaining_secs(60_999)),
    ));

    let events = engine.update(&idle(), 61_000);
    results.push(TestResult::new(
        "full_time_at_duration",
        engine.is_game_over()
            && matches!(events.last(), Some(MatchEvent::FullTime { .. })),
        format!("{} events on the final tick", events.len()),
    ));

    let ticks = engine.ticks();
    let ball = engine.ball_position();
    let mut late_events = 0;
    for later in [61_016u64, 90_000, 10_000_000] {
        late_events += engine.update(&idle().hold(Key::D).press(Key::Space), later).len();
    }
    results.push(TestResult::new(
        "frozen_after_full_time",
        engine.is_game_over()
            && late_events == 0
            && engine.ticks() == ticks
            && engine.ball_position() == ball,
        format!("{} events after full time", late_events),
    ));

    results
}

// ── 7. Switching ────────────────────────────────────────────────────────

fn validate_switching(_verbose: bool) -> Vec<TestResult> {
    println!("--- Switching ---");
    let mut results = Vec::new();

    let mut engine = MatchEngine::new(MatchConfig::default(), 0);
    let mut slots = Vec::new();
    for tick in 1..=3u64 {
        engine.update(&idle().press(Key::RightBracket), tick * 16);
        slots.push(active_slot(&engine, Side::Away));
    }
    results.push(TestResult::new(
        "switch_cycles_roster",
        slots == vec![1, 2, 0],
        format!("away active slots {:?}", slots),
    ));

    let snap = engine.snapshot(48);
    let single_active = [&snap.home, &snap.away]
        .iter()
        .all(|t| t.players.iter().filter(|p| p.active).count() == 1);
    results.push(TestResult::new(
        "one_active_per_team",
        single_active && snap.home.active_slot == 0,
        "home untouched, away cycled",
    ));

    results
}

// ── 8. Scripted match ───────────────────────────────────────────────────

fn validate_scripted_match(config: &MatchConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Scripted Match ---");
    let mut results = Vec::new();

    let mut engine = MatchEngine::new(config.clone(), 0);
    let mut clock = ManualClock::new(0);
    let frame_ms = config.frame_delay_ms.max(1);
    let match_frames = config.match_duration_ms / frame_ms + 1;
    let total_frames = match_frames + 30;

    // home runs right charging, away switches and chases, in phases
    let phases = [
        idle().hold(Key::D).hold(Key::S),
        idle().hold(Key::D).hold(Key::E).hold(Key::Left),
        idle().hold(Key::D).hold(Key::Down),
        idle().press(Key::Space).press(Key::RightBracket).hold(Key::Up),
        idle().hold(Key::W).hold(Key::Left).hold(Key::Return),
        idle().hold(Key::A).hold(Key::Right),
    ];
    let mut frame = 0u64;
    let mut input = |_now: u64| {
        frame += 1;
        if frame > total_frames {
            KeyboardState::quitting()
        } else {
            phases[((frame / 40) as usize) % phases.len()].clone()
        }
    };

    let mut full_time = 0;
    let mut frozen_frames = 0;
    let mut last: Option<MatchSnapshot> = None;
    let mut presenter = |snap: &MatchSnapshot, events: &[MatchEvent]| {
        for e in events {
            if let MatchEvent::FullTime { .. } = e {
                full_time += 1;
            }
        }
        if snap.game_over {
            frozen_frames += 1;
        }
        last = Some(snap.clone());
    };

    let stats = GameLoop::new(Duration::from_millis(frame_ms)).run(&mut engine, &mut clock, &mut input, &mut presenter);

    results.push(TestResult::new(
        "loop_runs_until_quit",
        stats.frames == total_frames,
        format!("{} frames, {} events", stats.frames, stats.events),
    ));
    results.push(TestResult::new(
        "single_full_time",
        full_time == 1 && engine.is_game_over(),
        format!("{} full-time events", full_time),
    ));
    results.push(TestResult::new(
        "presents_while_frozen",
        frozen_frames >= 30,
        format!("{} frozen frames presented", frozen_frames),
    ));

    let (home, away) = engine.score();
    let verdict_ok = last
        .as_ref()
        .and_then(|s| s.verdict)
        .is_some_and(|v| v == kickoff_logic::scoreboard::verdict(home, away));
    results.push(TestResult::new(
        "final_verdict",
        verdict_ok && stats.goals == home + away,
        format!("{}:{} after {} goals", home, away, stats.goals),
    ));

    if verbose {
        println!(
            "  scripted match: {}:{}, {} ticks, clock {}ms",
            home,
            away,
            engine.ticks(),
            clock.now_ms()
        );
    }

    results
}

// ── 9. Random soak ──────────────────────────────────────────────────────

const KEYS: [Key; 12] = [
    Key::W,
    Key::A,
    Key::S,
    Key::D,
    Key::E,
    Key::Space,
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Return,
    Key::RightBracket,
];

/// Random key mashing. Held keys persist for a while so charges and runs
/// last long enough to matter.
struct RandomInput {
    rng: StdRng,
    held: KeyboardState,
    frames: u64,
    limit: u64,
}

impl InputSource for RandomInput {
    fn poll(&mut self, _now_ms: u64) -> KeyboardState {
        self.frames += 1;
        if self.frames > self.limit {
            return KeyboardState::quitting();
        }
        if self.rng.gen_bool(0.1) {
            let mut next = KeyboardState::new();
            for key in KEYS {
                if self.rng.gen_bool(0.3) {
                    next = next.hold(key);
                }
            }
            self.held = next;
        }
        let mut keys = self.held.clone();
        keys.pressed.clear();
        for key in [Key::Space, Key::RightBracket] {
            if self.rng.gen_bool(0.02) {
                keys = keys.press(key);
            }
        }
        keys
    }
}

#[derive(Debug, Default, Serialize)]
struct SoakReport {
    seed: u64,
    frames: u64,
    goals: u32,
    events: usize,
    violations: Vec<String>,
}

/// Checks every presented frame against the match invariants.
struct InvariantWatch {
    bounds: FieldBounds,
    last_score: (u32, u32),
    violations: Vec<String>,
    last: Option<MatchSnapshot>,
}

impl InvariantWatch {
    fn flag(&mut self, tick: u64, what: String) {
        log::warn!("invariant broken at tick {}: {}", tick, what);
        if self.violations.len() < 20 {
            self.violations.push(format!("tick {}: {}", tick, what));
        }
    }
}

impl Presenter for InvariantWatch {
    fn present(&mut self, snap: &MatchSnapshot, _events: &[MatchEvent]) {
        for team in [&snap.home, &snap.away] {
            let active = team.players.iter().filter(|p| p.active).count();
            if active != 1 {
                self.flag(snap.tick, format!("{:?} has {} active players", team.side, active));
            }
            for p in &team.players {
                if !self.bounds.contains_circle(p.position, p.radius) {
                    self.flag(snap.tick, format!("{} out of bounds at {:?}", p.id, p.position));
                }
            }
        }

        let score = (snap.home.score, snap.away.score);
        if score.0 < self.last_score.0 || score.1 < self.last_score.1 {
            self.flag(snap.tick, format!("score went from {:?} to {:?}", self.last_score, score));
        }
        self.last_score = score;

        if snap.ball.holder.is_some() && snap.ball.velocity != Vec2::ZERO {
            self.flag(snap.tick, format!("carried ball moving at {:?}", snap.ball.velocity));
        }
        if !(0.0..=1.0).contains(&snap.ball.charge_fraction) {
            self.flag(snap.tick, format!("charge fraction {}", snap.ball.charge_fraction));
        }

        self.last = Some(snap.clone());
    }
}

fn validate_random_soak(config: &MatchConfig, opts: &Options) -> Vec<TestResult> {
    println!("--- Random Soak (seed {}) ---", opts.seed);
    let mut results = Vec::new();

    let mut engine = MatchEngine::new(config.clone(), 0);
    let mut clock = ManualClock::new(0);
    let frame_ms = config.frame_delay_ms.max(1);
    let limit = config.match_duration_ms / frame_ms + 60;

    let mut input = RandomInput {
        rng: StdRng::seed_from_u64(opts.seed),
        held: KeyboardState::new(),
        frames: 0,
        limit,
    };
    let mut watch = InvariantWatch {
        bounds: config.bounds(),
        last_score: (0, 0),
        violations: Vec::new(),
        last: None,
    };

    let stats = GameLoop::new(Duration::from_millis(frame_ms)).run(&mut engine, &mut clock, &mut input, &mut watch);

    let report = SoakReport {
        seed: opts.seed,
        frames: stats.frames,
        goals: stats.goals,
        events: stats.events,
        violations: watch.violations.clone(),
    };

    results.push(TestResult::new(
        "soak_invariants",
        report.violations.is_empty(),
        if report.violations.is_empty() {
            format!("{} frames clean, {} goals", report.frames, report.goals)
        } else {
            report.violations.join("; ")
        },
    ));
    results.push(TestResult::new(
        "soak_reaches_full_time",
        engine.is_game_over(),
        format!("{} ticks simulated", engine.ticks()),
    ));

    if opts.verbose {
        match serde_json::to_string(&report) {
            Ok(json) => println!("  {}", json),
            Err(e) => println!("  report not serializable: {}", e),
        }
    }

    if let (Some(path), Some(snap)) = (&opts.snapshot_path, &watch.last) {
        let written = File::create(path)
            .map_err(persistence::PersistenceError::from)
            .and_then(|f| persistence::write_snapshot(BufWriter::new(f), snap));
        results.push(TestResult::new(
            "snapshot_written",
            written.is_ok(),
            match written {
                Ok(()) => format!("final snapshot -> {}", path),
                Err(e) => format!("{}: {}", path, e),
            },
        ));
    }

    results
}
