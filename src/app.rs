use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::config::Config;
use crate::effects::TapEffects;
use crate::session::{GameSession, SessionEnded};
use crate::ticker::{IntervalTimer, TickSource};

/// Alerts that sit on top of the play screen and swallow taps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    TimeIsUp { final_score: u32 },
    Info,
}

#[derive(Debug)]
pub struct App<T: TickSource = IntervalTimer> {
    pub session: GameSession<T>,
    pub modal: Option<Modal>,
    pub effects: TapEffects,
    pub should_quit: bool,
}

impl App<IntervalTimer> {
    pub fn new(config: &Config) -> Self {
        Self::with_session(
            GameSession::new(config.initial_countdown),
            TapEffects::new(config.animations),
        )
    }

    /// Apply every countdown tick that is due at `now`, then report whether
    /// the screen needs a redraw
    pub fn on_frame(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while self.session.tick_source_mut().fire_if_due(now) {
            self.on_tick();
            changed = true;
        }
        changed || self.effects.is_animating(now)
    }

    /// How long the event loop may block before the next countdown tick
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.session.tick_source().time_until_due(now)
    }
}

impl<T: TickSource> App<T> {
    /// The session is reset as the screen appears
    pub fn with_session(mut session: GameSession<T>, effects: TapEffects) -> Self {
        session.reset();
        Self {
            session,
            modal: None,
            effects,
            should_quit: false,
        }
    }

    pub fn tap(&mut self, now: Instant) {
        if self.modal.is_some() {
            return;
        }
        let before = self.session.score();
        self.session.on_tap();
        if self.session.score() != before {
            self.effects.trigger(now);
        }
    }

    pub fn on_tick(&mut self) -> Option<SessionEnded> {
        let ended = self.session.on_tick();
        if let Some(SessionEnded { final_score }) = ended {
            self.modal = Some(Modal::TimeIsUp { final_score });
        }
        ended
    }

    pub fn toggle_info(&mut self) {
        match self.modal {
            None => self.modal = Some(Modal::Info),
            Some(Modal::Info) => self.modal = None,
            Some(Modal::TimeIsUp { .. }) => {}
        }
    }

    /// Close the current alert. Acknowledging the time's-up alert starts over.
    pub fn dismiss(&mut self) {
        match self.modal.take() {
            Some(Modal::TimeIsUp { .. }) => self.session.reset(),
            Some(Modal::Info) | None => {}
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.modal {
            None => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('t') => self.tap(now),
                KeyCode::Char('i') => self.toggle_info(),
                KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Some(Modal::TimeIsUp { .. }) => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc => self.dismiss(),
                _ => {}
            },
            Some(Modal::Info) => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('i') => self.dismiss(),
                _ => {}
            },
        }
        debug!(key = ?key.code, state = %self.session.state(), modal = ?self.modal, "key handled");
    }
}
