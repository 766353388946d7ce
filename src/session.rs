use tracing::{debug, info};

use crate::ticker::{IntervalTimer, TickSource};

/// Countdown used when nothing else is configured
pub const DEFAULT_COUNTDOWN: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum GameState {
    Idle,
    Running,
    Expired,
}

/// Raised exactly once per round, when the countdown reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEnded {
    pub final_score: u32,
}

/// One round of tapping against the clock
#[derive(Debug)]
pub struct GameSession<T: TickSource = IntervalTimer> {
    score: u32,
    time_remaining: u32,
    initial_countdown: u32,
    state: GameState,
    tick_source: T,
}

impl GameSession<IntervalTimer> {
    pub fn new(initial_countdown: u32) -> Self {
        Self::with_tick_source(initial_countdown, IntervalTimer::default())
    }
}

impl<T: TickSource> GameSession<T> {
    pub fn with_tick_source(initial_countdown: u32, tick_source: T) -> Self {
        let mut session = Self {
            score: 0,
            time_remaining: initial_countdown,
            initial_countdown,
            state: GameState::Idle,
            tick_source,
        };
        session.reset();
        session
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn initial_countdown(&self) -> u32 {
        self.initial_countdown
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn tick_source(&self) -> &T {
        &self.tick_source
    }

    pub fn tick_source_mut(&mut self) -> &mut T {
        &mut self.tick_source
    }

    /// The first tap of a round starts the countdown. Taps after expiry are
    /// dropped until the round is reset.
    pub fn on_tap(&mut self) {
        match self.state {
            GameState::Idle => {
                self.tick_source.start();
                self.state = GameState::Running;
                info!(countdown = self.time_remaining, "round started");
            }
            GameState::Running => {}
            GameState::Expired => {
                debug!("tap ignored after expiry");
                return;
            }
        }

        self.score = self.score.saturating_add(1);
    }

    /// Advance the countdown by one second. Only a running session reacts.
    pub fn on_tick(&mut self) -> Option<SessionEnded> {
        if self.state != GameState::Running {
            return None;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return None;
        }

        self.tick_source.stop();
        self.state = GameState::Expired;
        info!(final_score = self.score, "round ended");

        Some(SessionEnded {
            final_score: self.score,
        })
    }

    pub fn reset(&mut self) {
        self.tick_source.stop();
        self.score = 0;
        self.time_remaining = self.initial_countdown;
        self.state = GameState::Idle;
    }
}
