use std::time::{Duration, Instant};

/// Length of each half of the score blink, and the delay before the button springs back
pub const BLINK_PHASE: Duration = Duration::from_millis(200);

const SPRING_STIFFNESS: f64 = 500.0;
const SPRING_DAMPING: f64 = 10.0;
const PULSE_PEAK: f64 = 2.0;
// e^(-5t) is below 0.5% after this long
const PULSE_SETTLE: Duration = Duration::from_millis(1200);

fn ease_out(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    1.0 - (1.0 - x) * (1.0 - x)
}

/// Step response of a unit-mass damped spring starting at rest: 0 at t=0, settles at 1
fn spring_step(t: f64) -> f64 {
    let decay = SPRING_DAMPING / 2.0;
    let omega = (SPRING_STIFFNESS - decay * decay).sqrt();
    1.0 - (-decay * t).exp() * ((omega * t).cos() + decay / omega * (omega * t).sin())
}

fn secs_since(start: Instant, now: Instant) -> f64 {
    now.saturating_duration_since(start).as_secs_f64()
}

/// Score fades out then back in after each tap
#[derive(Debug, Clone, Default)]
pub struct ScoreBlink {
    started_at: Option<Instant>,
}

impl ScoreBlink {
    pub fn trigger(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn opacity(&self, now: Instant) -> f64 {
        let Some(start) = self.started_at else {
            return 1.0;
        };
        let phase = BLINK_PHASE.as_secs_f64();
        let t = secs_since(start, now);

        if t < phase {
            1.0 - ease_out(t / phase)
        } else if t < 2.0 * phase {
            ease_out((t - phase) / phase)
        } else {
            1.0
        }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.started_at
            .is_some_and(|start| now.saturating_duration_since(start) < BLINK_PHASE * 2)
    }
}

/// Tap button springs up to double size, then springs back
#[derive(Debug, Clone, Default)]
pub struct ButtonPulse {
    started_at: Option<Instant>,
}

impl ButtonPulse {
    pub fn trigger(&mut self, now: Instant) {
        self.started_at = Some(now);
    }

    pub fn scale(&self, now: Instant) -> f64 {
        let Some(start) = self.started_at else {
            return 1.0;
        };
        let t = secs_since(start, now);
        let release = BLINK_PHASE.as_secs_f64();

        if t < release {
            1.0 + (PULSE_PEAK - 1.0) * spring_step(t)
        } else if t < release + PULSE_SETTLE.as_secs_f64() {
            let held = 1.0 + (PULSE_PEAK - 1.0) * spring_step(release);
            held + (1.0 - held) * spring_step(t - release)
        } else {
            1.0
        }
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.started_at.is_some_and(|start| {
            now.saturating_duration_since(start) < BLINK_PHASE + PULSE_SETTLE
        })
    }
}

/// Cosmetic feedback played on every tap. Purely presentational.
#[derive(Debug, Clone)]
pub struct TapEffects {
    pub enabled: bool,
    blink: ScoreBlink,
    pulse: ButtonPulse,
}

impl TapEffects {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            blink: ScoreBlink::default(),
            pulse: ButtonPulse::default(),
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        if self.enabled {
            self.blink.trigger(now);
            self.pulse.trigger(now);
        }
    }

    pub fn score_opacity(&self, now: Instant) -> f64 {
        if self.enabled {
            self.blink.opacity(now)
        } else {
            1.0
        }
    }

    pub fn button_scale(&self, now: Instant) -> f64 {
        if self.enabled {
            self.pulse.scale(now)
        } else {
            1.0
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.enabled && (self.blink.is_active(now) || self.pulse.is_active(now))
    }
}

impl Default for TapEffects {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn untriggered_effects_are_at_rest() {
        let now = Instant::now();
        let fx = TapEffects::default();
        assert_eq!(fx.score_opacity(now), 1.0);
        assert_eq!(fx.button_scale(now), 1.0);
        assert!(!fx.is_animating(now));
    }

    #[test]
    fn blink_fades_out_then_in() {
        let t0 = Instant::now();
        let mut blink = ScoreBlink::default();
        blink.trigger(t0);

        assert_eq!(blink.opacity(t0), 1.0);
        let mid_out = blink.opacity(t0 + ms(100));
        assert!(mid_out > 0.0 && mid_out < 1.0);
        assert!(blink.opacity(t0 + ms(199)) < 0.01);
        let mid_in = blink.opacity(t0 + ms(300));
        assert!(mid_in > 0.0 && mid_in < 1.0);
        assert_eq!(blink.opacity(t0 + ms(400)), 1.0);
        assert!(!blink.is_active(t0 + ms(400)));
    }

    #[test]
    fn pulse_overshoots_toward_peak_then_returns() {
        let t0 = Instant::now();
        let mut pulse = ButtonPulse::default();
        pulse.trigger(t0);

        assert!((pulse.scale(t0) - 1.0).abs() < 1e-9);
        let grown = pulse.scale(t0 + ms(150));
        assert!(grown > 1.5, "expected button to grow, got {grown}");

        let peak = (0..200)
            .map(|i| pulse.scale(t0 + ms(i)))
            .fold(f64::MIN, f64::max);
        assert!(peak > PULSE_PEAK, "spring should overshoot, peak {peak}");

        let settled = pulse.scale(t0 + ms(1300));
        assert!((settled - 1.0).abs() < 0.02, "got {settled}");
        assert_eq!(pulse.scale(t0 + ms(2000)), 1.0);
        assert!(!pulse.is_active(t0 + ms(2000)));
    }

    #[test]
    fn retrigger_restarts_animation() {
        let t0 = Instant::now();
        let mut fx = TapEffects::default();
        fx.trigger(t0);
        fx.trigger(t0 + ms(500));
        assert!(fx.score_opacity(t0 + ms(600)) < 1.0);
        assert!(fx.is_animating(t0 + ms(600)));
    }

    #[test]
    fn disabled_effects_never_animate() {
        let t0 = Instant::now();
        let mut fx = TapEffects::new(false);
        fx.trigger(t0);
        assert_eq!(fx.score_opacity(t0 + ms(100)), 1.0);
        assert_eq!(fx.button_scale(t0 + ms(100)), 1.0);
        assert!(!fx.is_animating(t0 + ms(100)));
    }
}
