//! Frame loop: poll input, advance the match, wait, present.
//!
//! Rendering and keyboard polling live behind the `InputSource` and
//! `Presenter` traits so the same loop drives a window, a terminal or a
//! headless test.

use std::time::Duration;

use kickoff_logic::config::MatchConfig;

use crate::clock::Clock;
use crate::engine::MatchEngine;
use crate::events::MatchEvent;
use crate::input::KeyboardState;
use crate::snapshot::MatchSnapshot;

/// Supplies the keyboard state for each frame.
pub trait InputSource {
    fn poll(&mut self, now_ms: u64) -> KeyboardState;
}

impl<F> InputSource for F
where
    F: FnMut(u64) -> KeyboardState,
{
    fn poll(&mut self, now_ms: u64) -> KeyboardState {
        self(now_ms)
    }
}

/// Receives one snapshot per frame along with the events of that tick.
pub trait Presenter {
    fn present(&mut self, snapshot: &MatchSnapshot, events: &[MatchEvent]);
}

impl<F> Presenter for F
where
    F: FnMut(&MatchSnapshot, &[MatchEvent]),
{
    fn present(&mut self, snapshot: &MatchSnapshot, events: &[MatchEvent]) {
        self(snapshot, events)
    }
}

/// Totals for one `GameLoop::run`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoopStats {
    /// Frames presented, including frozen frames after full time.
    pub frames: u64,
    pub goals: u32,
    pub events: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct GameLoop {
    pub frame_delay: Duration,
    /// Stop after this many frames even without a quit request.
    pub max_frames: Option<u64>,
}

impl GameLoop {
    pub fn new(frame_delay: Duration) -> Self {
        Self {
            frame_delay,
            max_frames: None,
        }
    }

    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(Duration::from_millis(config.frame_delay_ms))
    }

    pub fn with_max_frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Run until the input source asks to quit.
    ///
    /// The quit flag is checked once per frame, before the match advances.
    pub fn run<C, I, P>(
        &self,
        engine: &mut MatchEngine,
        clock: &mut C,
        input: &mut I,
        presenter: &mut P,
    ) -> LoopStats
    where
        C: Clock + ?Sized,
        I: InputSource + ?Sized,
        P: Presenter + ?Sized,
    {
        let mut stats = LoopStats::default();
        loop {
            if self.max_frames.is_some_and(|max| stats.frames >= max) {
                log::debug!("frame limit reached after {} frames", stats.frames);
                break;
            }

            let keys = input.poll(clock.now_ms());
            if keys.quit {
                log::info!("quit requested after {} frames", stats.frames);
                break;
            }

            let events = engine.update(&keys, clock.now_ms());
            clock.sleep(self.frame_delay);

            let snapshot = engine.snapshot(clock.now_ms());
            presenter.present(&snapshot, &events);

            stats.frames += 1;
            stats.events += events.len();
            stats.goals += events.iter().filter(|e| e.is_goal()).count() as u32;
        }
        stats
    }
}
