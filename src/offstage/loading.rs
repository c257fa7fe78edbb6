use std::time::Instant;

use crate::config::OffstageConfig;
use crate::jobs::{TimerKind, TimerQueue};

/// Decides when the loading affordance is on screen.
///
/// Runs off the *target* visibility, not the debounced one, and has its own
/// timer so a brief hidden period never flashes a spinner.
#[derive(Debug, Default)]
pub struct LoadingGate {
    showing: bool,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// React to a new target visibility
    pub fn on_target<C>(
        &mut self,
        hidden: bool,
        config: &OffstageConfig<C>,
        timers: &mut TimerQueue,
        now: Instant,
    ) {
        if !hidden || !config.show_loading_indicator {
            self.clear(timers);
            return;
        }
        if config.show_loading_after.is_zero() {
            timers.cancel(TimerKind::ShowLoading);
            self.showing = true;
        } else if !self.showing {
            timers.schedule(TimerKind::ShowLoading, now, config.show_loading_after);
        }
    }

    /// The show-loading timer fired; only honour it if still hidden
    pub fn on_timer(&mut self, target_hidden: bool, enabled: bool) {
        if target_hidden && enabled {
            self.showing = true;
        }
    }

    /// Hide the indicator and forget any pending show
    pub fn clear(&mut self, timers: &mut TimerQueue) {
        self.showing = false;
        timers.cancel(TimerKind::ShowLoading);
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }
}
