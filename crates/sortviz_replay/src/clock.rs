//! Frame pacing for playback.
//!
//! Playback is a chain of cheap, cancellable polls rather than a blocking
//! loop: the host ticks every frame and [`PaceClock::poll`] answers whether
//! one more step is due. Stopping the clock between polls cancels the chain
//! with nothing half-applied.

use sortviz_core::{snap_speed, MIN_SPEED};
use std::time::{Duration, Instant};

/// Cadence floor; faster speeds saturate here instead of spinning.
pub const MIN_INTERVAL: Duration = Duration::from_millis(10);

/// Default time between steps at 1x speed.
pub const DEFAULT_BASE_INTERVAL: Duration = Duration::from_millis(300);

/// A restartable interval timer with a speed multiplier.
///
/// The effective interval is `max(10ms, base_interval / speed)`: linear in
/// speed, floored so high multipliers cannot degenerate into a tight loop.
#[derive(Debug)]
pub struct PaceClock {
    base_interval: Duration,
    speed: f32,
    next_due: Option<Instant>,
}

impl PaceClock {
    pub fn new(base_interval: Duration) -> Self {
        Self {
            base_interval,
            speed: 1.0,
            next_due: None,
        }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the speed multiplier (snapped and clamped to the control range).
    ///
    /// Takes effect from the next poll; an already-scheduled step keeps its
    /// due time.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = snap_speed(speed);
    }

    /// The current time between steps.
    pub fn interval(&self) -> Duration {
        let speed = self.speed.max(MIN_SPEED) as f64;
        let scaled = Duration::from_secs_f64(self.base_interval.as_secs_f64() / speed);
        scaled.max(MIN_INTERVAL)
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start the cadence; the first step is due immediately.
    pub fn start(&mut self) {
        if self.next_due.is_none() {
            self.next_due = Some(Instant::now());
        }
    }

    /// Cancel the cadence. Polls return `false` until the next start.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    /// Whether one step is due now. Re-arms for the following step when it
    /// fires, so each poll releases at most one step.
    pub fn poll(&mut self) -> bool {
        match self.next_due {
            Some(due) if Instant::now() >= due => {
                self.next_due = Some(Instant::now() + self.interval());
                true
            }
            _ => false,
        }
    }
}

impl Default for PaceClock {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_scales_linearly_with_speed() {
        let mut clock = PaceClock::new(Duration::from_millis(300));
        assert_eq!(clock.interval(), Duration::from_millis(300));

        clock.set_speed(4.0);
        assert_eq!(clock.interval(), Duration::from_millis(75));

        clock.set_speed(0.25);
        assert_eq!(clock.interval(), Duration::from_millis(1200));
    }

    #[test]
    fn interval_floors_at_ten_millis() {
        let mut clock = PaceClock::new(Duration::from_millis(20));
        clock.set_speed(4.0);
        assert_eq!(clock.interval(), MIN_INTERVAL);
    }

    #[test]
    fn speed_is_snapped_and_clamped() {
        let mut clock = PaceClock::default();
        clock.set_speed(100.0);
        assert_eq!(clock.speed(), 4.0);
        clock.set_speed(0.3);
        assert_eq!(clock.speed(), 0.25);
    }

    #[test]
    fn stopped_clock_never_fires() {
        let mut clock = PaceClock::new(Duration::ZERO);
        assert!(!clock.poll());
        clock.start();
        assert!(clock.poll());
        clock.stop();
        assert!(!clock.poll());
    }

    #[test]
    fn first_step_is_due_immediately() {
        let mut clock = PaceClock::new(Duration::from_secs(3600));
        clock.start();
        assert!(clock.poll());
        // The next one is a full interval away.
        assert!(!clock.poll());
    }

    #[test]
    fn restart_while_running_keeps_the_schedule() {
        let mut clock = PaceClock::new(Duration::from_secs(3600));
        clock.start();
        assert!(clock.poll());
        // A redundant start must not reschedule the pending step to "now".
        clock.start();
        assert!(!clock.poll());
    }
}
