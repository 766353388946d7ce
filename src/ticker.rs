use std::time::{Duration, Instant};

/// Game time advances by one second per tick
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Periodic tick source owned by a running session
pub trait TickSource {
    fn start(&mut self);
    fn stop(&mut self);
    fn is_active(&self) -> bool;
}

/// Deadline based interval timer polled by the event loop.
///
/// Nothing runs in the background: the loop asks how long it may block with
/// [`IntervalTimer::time_until_due`] and collects ticks with
/// [`IntervalTimer::fire_if_due`]. Once stopped the timer never fires again.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl IntervalTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm the timer so the first tick is due one interval after `now`
    pub fn start_at(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }

    /// Returns true when a tick is due at `now` and schedules the next one.
    /// Call repeatedly to drain ticks missed while the loop was busy.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = Some(due + self.interval);
                true
            }
            _ => false,
        }
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl TickSource for IntervalTimer {
    fn start(&mut self) {
        self.start_at(Instant::now());
    }

    fn stop(&mut self) {
        self.next_due = None;
    }

    fn is_active(&self) -> bool {
        self.next_due.is_some()
    }
}

/// Tick source for unit tests: ticks are delivered by calling `on_tick` directly
#[derive(Debug, Default, Clone)]
pub struct ManualTickSource {
    active: bool,
    pub starts: usize,
    pub stops: usize,
}

impl ManualTickSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TickSource for ManualTickSource {
    fn start(&mut self) {
        self.active = true;
        self.starts += 1;
    }

    fn stop(&mut self) {
        self.active = false;
        self.stops += 1;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
