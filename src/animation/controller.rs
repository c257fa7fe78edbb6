use std::time::{Duration, Instant};

/// Distance from a terminal value at which the timeline snaps to it
const SETTLE_EPSILON: f32 = 1e-4;

/// Where a [`ProgressController`] is on its 0..1 timeline
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationStatus {
    /// Settled at 0.0
    Dismissed,
    /// Running toward 1.0
    Forward,
    /// Running toward 0.0
    Reverse,
    /// Settled at 1.0
    Completed,
}

impl AnimationStatus {
    /// Returns true while the timeline is moving
    pub fn is_running(self) -> bool {
        matches!(self, AnimationStatus::Forward | AnimationStatus::Reverse)
    }
}

/// Result of advancing an animation, indicating whether the value changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdvanceResult {
    /// Value did not change (animation not running or no time elapsed)
    NoChange,
    /// Value changed to a new in-flight value
    Changed(f32),
    /// Value reached a terminal value on this step
    Finished(AnimationStatus),
}

/// Linear 0..1 timeline advanced by an external frame clock.
///
/// The controller integrates elapsed time step by step rather than measuring
/// from a fixed start instant, so changing the duration mid-flight only
/// rescales the remaining distance and never restarts progress.
#[derive(Clone, Debug)]
pub struct ProgressController {
    value: f32,
    duration: Duration,
    status: AnimationStatus,
    last_tick: Option<Instant>,
}

impl ProgressController {
    /// Create a controller settled at 1.0 (`Completed`) when `visible`, else at
    /// 0.0 (`Dismissed`).
    pub fn new(visible: bool, duration: Duration) -> Self {
        let (value, status) = if visible {
            (1.0, AnimationStatus::Completed)
        } else {
            (0.0, AnimationStatus::Dismissed)
        };
        Self {
            value,
            duration,
            status,
            last_tick: None,
        }
    }

    /// Start (or continue) running toward 1.0 from the current value
    pub fn forward(&mut self, now: Instant) -> AdvanceResult {
        self.run(AnimationStatus::Forward, now)
    }

    /// Start (or continue) running toward 0.0 from the current value
    pub fn reverse(&mut self, now: Instant) -> AdvanceResult {
        self.run(AnimationStatus::Reverse, now)
    }

    fn run(&mut self, direction: AnimationStatus, now: Instant) -> AdvanceResult {
        self.status = direction;
        self.last_tick = Some(now);
        if self.duration.is_zero() || self.value == self.terminal_value() {
            return self.settle();
        }
        AdvanceResult::NoChange
    }

    /// Change the duration used for the rest of the current run
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Advance the timeline to `now` and report what happened
    pub fn advance(&mut self, now: Instant) -> AdvanceResult {
        if !self.status.is_running() {
            return AdvanceResult::NoChange;
        }
        let Some(last) = self.last_tick else {
            self.last_tick = Some(now);
            return AdvanceResult::NoChange;
        };
        let elapsed = now.saturating_duration_since(last);
        if elapsed.is_zero() && !self.duration.is_zero() {
            return AdvanceResult::NoChange;
        }
        self.last_tick = Some(now);

        let step = if self.duration.is_zero() {
            1.0
        } else {
            elapsed.as_secs_f32() / self.duration.as_secs_f32()
        };
        let (next, reached) = match self.status {
            AnimationStatus::Forward => {
                let next = self.value + step;
                (next, next >= 1.0 - SETTLE_EPSILON)
            }
            _ => {
                let next = self.value - step;
                (next, next <= SETTLE_EPSILON)
            }
        };

        if reached {
            return self.settle();
        }
        self.value = next;
        AdvanceResult::Changed(next)
    }

    fn terminal_value(&self) -> f32 {
        match self.status {
            AnimationStatus::Forward | AnimationStatus::Completed => 1.0,
            AnimationStatus::Reverse | AnimationStatus::Dismissed => 0.0,
        }
    }

    fn settle(&mut self) -> AdvanceResult {
        self.value = self.terminal_value();
        self.status = if self.value >= 1.0 {
            AnimationStatus::Completed
        } else {
            AnimationStatus::Dismissed
        };
        self.last_tick = None;
        AdvanceResult::Finished(self.status)
    }

    /// Stop where we are without reaching a terminal value
    pub fn stop(&mut self) {
        if self.status.is_running() {
            self.status = if self.value >= 0.5 {
                AnimationStatus::Completed
            } else {
                AnimationStatus::Dismissed
            };
            self.value = self.terminal_value();
        }
        self.last_tick = None;
    }

    /// Current linear progress, 0.0 (hidden) to 1.0 (visible)
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    /// Check if animation is still running
    pub fn is_animating(&self) -> bool {
        self.status.is_running()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_new_is_settled() {
        let c = ProgressController::new(true, ms(400));
        assert_eq!(c.value(), 1.0);
        assert_eq!(c.status(), AnimationStatus::Completed);
        assert!(!c.is_animating());

        let c = ProgressController::new(false, ms(400));
        assert_eq!(c.value(), 0.0);
        assert_eq!(c.status(), AnimationStatus::Dismissed);
    }

    #[test]
    fn test_forward_runs_for_duration() {
        let t0 = Instant::now();
        let mut c = ProgressController::new(false, ms(400));
        assert_eq!(c.forward(t0), AdvanceResult::NoChange);
        assert!(c.is_animating());

        match c.advance(t0 + ms(100)) {
            AdvanceResult::Changed(v) => assert!((v - 0.25).abs() < 1e-4),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            c.advance(t0 + ms(400)),
            AdvanceResult::Finished(AnimationStatus::Completed)
        );
        assert_eq!(c.value(), 1.0);
        assert_eq!(c.advance(t0 + ms(500)), AdvanceResult::NoChange);
    }

    #[test]
    fn test_reverse_mid_flight_keeps_value() {
        let t0 = Instant::now();
        let mut c = ProgressController::new(false, ms(400));
        c.forward(t0);
        c.advance(t0 + ms(200));
        c.reverse(t0 + ms(200));
        assert!((c.value() - 0.5).abs() < 1e-4);
        assert_eq!(
            c.advance(t0 + ms(400)),
            AdvanceResult::Finished(AnimationStatus::Dismissed)
        );
        assert_eq!(c.value(), 0.0);
    }

    #[test]
    fn test_duration_change_retargets_remaining_time() {
        let t0 = Instant::now();
        let mut c = ProgressController::new(false, ms(400));
        c.forward(t0);
        c.advance(t0 + ms(200));
        c.set_duration(ms(1000));
        // Half-way; remaining half now takes 500ms instead of 200ms
        match c.advance(t0 + ms(450)) {
            AdvanceResult::Changed(v) => assert!((v - 0.75).abs() < 1e-3),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            c.advance(t0 + ms(700)),
            AdvanceResult::Finished(AnimationStatus::Completed)
        );
        assert_eq!(c.value(), 1.0);
    }

    #[test]
    fn test_zero_duration_settles_immediately() {
        let t0 = Instant::now();
        let mut c = ProgressController::new(true, Duration::ZERO);
        assert_eq!(
            c.reverse(t0),
            AdvanceResult::Finished(AnimationStatus::Dismissed)
        );
        assert_eq!(c.value(), 0.0);
    }
}
