use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// Redraw cadence while something on screen is moving
pub const FRAME_RATE_MS: u64 = 50;

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    /// No input arrived within the wait window
    Frame,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait GameEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    /// Returns Ok(event) if an event arrives before the timeout, or Err(Timeout) if it expires.
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<GameEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let forwarded = match event::read() {
                Ok(CtEvent::Key(key)) => tx.send(GameEvent::Key(key)),
                Ok(CtEvent::Resize(_, _)) => tx.send(GameEvent::Resize),
                Ok(_) => Ok(()),
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event reader stopped");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::new(Duration::from_millis(FRAME_RATE_MS))
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<GameEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }
}

impl GameEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances the application one event/frame at a time
pub struct Runner<E: GameEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: GameEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to the frame interval, or less if `deadline` is sooner, and
    /// returns the next event, or Frame on timeout
    pub fn step(&self, deadline: Option<Duration>) -> GameEvent {
        let wait = match deadline {
            Some(d) => d.min(self.ticker.interval()),
            None => self.ticker.interval(),
        };

        match self.event_source.recv_timeout(wait) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                GameEvent::Frame
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::time::Instant;

    #[test]
    fn step_returns_frame_on_timeout() {
        let (_tx, rx) = mpsc::channel();
        let es = TestEventSource::new(rx);
        let ticker = FixedTicker::new(Duration::from_millis(1));
        let runner = Runner::new(es, ticker);

        // With no events available, step should yield Frame
        let ev = runner.step(None);
        match ev {
            GameEvent::Frame => {}
            _ => panic!("expected Frame on timeout"),
        }
    }

    #[test]
    fn step_passes_through_events() {
        let (tx, rx) = mpsc::channel();
        tx.send(GameEvent::Resize).unwrap();
        let es = TestEventSource::new(rx);
        let ticker = FixedTicker::new(Duration::from_millis(10));
        let runner = Runner::new(es, ticker);

        match runner.step(None) {
            GameEvent::Resize => {}
            _ => panic!("expected Resize event"),
        }
    }

    #[test]
    fn step_waits_no_longer_than_deadline() {
        let (_tx, rx) = mpsc::channel();
        let es = TestEventSource::new(rx);
        let ticker = FixedTicker::new(Duration::from_secs(5));
        let runner = Runner::new(es, ticker);

        let started = Instant::now();
        let ev = runner.step(Some(Duration::from_millis(5)));
        assert!(matches!(ev, GameEvent::Frame));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn disconnected_source_yields_frames() {
        let (tx, rx) = mpsc::channel::<GameEvent>();
        drop(tx);
        let runner = Runner::new(TestEventSource::new(rx), FixedTicker::default());
        assert!(matches!(runner.step(None), GameEvent::Frame));
    }
}
