//! Loading/content-swap widget state.
//!
//! [`Offstage`] owns the visibility state machine for one widget instance:
//! the caller-requested target visibility, the debounced visibility actually
//! being rendered, the 0..1 transition timeline and the loading indicator.
//!
//! The host toolkit binds its widget lifecycle to four calls:
//!
//! ```ignore
//! let mut widget = Offstage::new(config, Instant::now())?;   // mount
//! widget.update(next_config, Instant::now())?;               // rebuild
//! widget.tick(Instant::now());                               // every frame
//! widget.dispose();                                          // unmount
//! ```
//!
//! and paints whatever [`Offstage::presentation`] returns.

mod loading;
mod render;

use std::time::Instant;

use crate::animation::{AdvanceResult, AnimationStatus, ProgressController};
use crate::config::OffstageConfig;
use crate::error::Result;
use crate::jobs::{request_frame, TimerKind, TimerQueue};

pub use loading::LoadingGate;
pub use render::{Visuals, HIDDEN_ROTATION_TURNS, HIDDEN_SCALE};

/// Where the content is in its show/hide cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Settled fully visible
    Visible,
    /// Settled fully hidden
    Hidden,
    TransitioningIn,
    TransitioningOut,
    /// Waiting out `delay_before_show`
    PendingShow,
    /// Waiting out `delay_before_hide`
    PendingHide,
}

/// What the host should do with the child subtree
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MountMode {
    /// Laid out, painted and hit-tested
    Mounted,
    /// Kept alive off-screen: no layout, no painting, no input.
    /// `animate` tells the host whether the child's own animations keep ticking.
    Retained { animate: bool },
    /// Released entirely
    Unmounted,
}

/// Loading affordance to paint over hidden content
#[derive(Debug, PartialEq, Eq)]
pub enum Indicator<'a, C> {
    /// The host's default spinner
    Spinner,
    /// Caller-supplied indicator content
    Custom(&'a C),
}

impl<C> Clone for Indicator<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for Indicator<'_, C> {}

/// Everything a host needs to paint one frame
#[derive(Debug)]
pub struct Presentation<'a, C> {
    pub phase: Phase,
    pub mount: MountMode,
    pub visuals: Visuals,
    /// The child, unless it has been released
    pub child: Option<&'a C>,
    pub show_loading: bool,
    pub indicator: Option<Indicator<'a, C>>,
}

/// A notification produced while state was being committed
enum Notice {
    StateChanged(bool),
    AnimationComplete(bool),
}

/// Visibility state machine for one loading/content-swap widget
pub struct Offstage<C> {
    config: OffstageConfig<C>,
    /// Caller-requested visibility (true = hidden)
    target_offstage: bool,
    /// Debounced visibility that drives the timeline
    actual_offstage: bool,
    controller: ProgressController,
    loading: LoadingGate,
    timers: TimerQueue,
    disposed: bool,
}

impl<C> Offstage<C> {
    /// Mount a new instance. The first frame is painted at the terminal value
    /// for the initial visibility; nothing animates.
    pub fn new(config: OffstageConfig<C>, now: Instant) -> Result<Self> {
        config.validate()?;
        let hidden = config.is_offstage;
        let mut this = Self {
            controller: ProgressController::new(!hidden, config.fade_duration),
            target_offstage: hidden,
            actual_offstage: hidden,
            loading: LoadingGate::new(),
            timers: TimerQueue::new(),
            config,
            disposed: false,
        };
        if hidden {
            this.loading
                .on_target(true, &this.config, &mut this.timers, now);
        }
        log::debug!("offstage mounted (hidden: {})", hidden);
        Ok(this)
    }

    /// Apply a rebuilt configuration.
    ///
    /// An invalid configuration is rejected and the previous one stays in
    /// effect.
    pub fn update(&mut self, config: OffstageConfig<C>, now: Instant) -> Result<()> {
        if self.disposed {
            return Ok(());
        }
        config.validate()?;

        let mut notices = Vec::new();
        // Settle progress made under the old duration before retargeting
        self.advance_to(now, &mut notices);
        self.controller.set_duration(config.fade_duration);

        let indicator_toggled = config.show_loading_indicator != self.config.show_loading_indicator;
        self.config = config;

        if self.config.is_offstage != self.target_offstage {
            self.retarget(self.config.is_offstage, now, &mut notices);
        } else if indicator_toggled {
            self.loading.on_target(
                self.target_offstage,
                &self.config,
                &mut self.timers,
                now,
            );
        }

        self.dispatch(notices);
        Ok(())
    }

    /// Change only the target visibility
    pub fn set_offstage(&mut self, hidden: bool, now: Instant) {
        if self.disposed || hidden == self.target_offstage {
            return;
        }
        self.config.is_offstage = hidden;
        let mut notices = Vec::new();
        self.advance_to(now, &mut notices);
        self.retarget(hidden, now, &mut notices);
        self.dispatch(notices);
    }

    /// Fire due timers and advance the timeline to `now`
    pub fn tick(&mut self, now: Instant) {
        if self.disposed {
            return;
        }
        let mut notices = Vec::new();

        for timer in self.timers.drain_due(now) {
            self.advance_to(timer.due, &mut notices);
            match timer.kind {
                TimerKind::ShowContent | TimerKind::HideContent => {
                    let hidden = timer.kind == TimerKind::HideContent;
                    // Re-check against the current target, not the scheduled one
                    if self.target_offstage == hidden {
                        log::debug!("delayed {} committed", if hidden { "hide" } else { "show" });
                        self.commit(hidden, timer.due, &mut notices);
                    } else {
                        log::debug!("discarding stale {:?} timer", timer.kind);
                    }
                }
                TimerKind::ShowLoading => {
                    self.loading
                        .on_timer(self.target_offstage, self.config.show_loading_indicator);
                }
            }
        }

        self.advance_to(now, &mut notices);
        if self.needs_tick() {
            request_frame();
        }
        self.dispatch(notices);
    }

    /// Unmount: cancel every timer and release the timeline.
    /// All later calls are no-ops.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.timers.clear();
        self.loading.clear(&mut self.timers);
        self.controller.stop();
        log::debug!("offstage disposed");
    }

    fn retarget(&mut self, hidden: bool, now: Instant, notices: &mut Vec<Notice>) {
        self.target_offstage = hidden;
        log::debug!("offstage target changed (hidden: {})", hidden);
        notices.push(Notice::StateChanged(hidden));

        let (kind, opposite) = if hidden {
            (TimerKind::HideContent, TimerKind::ShowContent)
        } else {
            (TimerKind::ShowContent, TimerKind::HideContent)
        };
        self.timers.cancel(opposite);

        let delay = self.config.delay_for(hidden);
        if delay.is_zero() {
            self.timers.cancel(kind);
            self.commit(hidden, now, notices);
        } else {
            self.timers.schedule(kind, now, delay);
        }

        self.loading
            .on_target(hidden, &self.config, &mut self.timers, now);
    }

    /// Make `hidden` the rendered state and start the matching transition
    fn commit(&mut self, hidden: bool, at: Instant, notices: &mut Vec<Notice>) {
        if self.actual_offstage == hidden {
            return;
        }
        self.actual_offstage = hidden;
        let result = if hidden {
            self.controller.reverse(at)
        } else {
            self.controller.forward(at)
        };
        request_frame();
        if let AdvanceResult::Finished(_) = result {
            notices.push(Notice::AnimationComplete(hidden));
        }
    }

    fn advance_to(&mut self, at: Instant, notices: &mut Vec<Notice>) {
        if let AdvanceResult::Finished(status) = self.controller.advance(at) {
            log::trace!("offstage transition finished ({:?})", status);
            notices.push(Notice::AnimationComplete(self.actual_offstage));
        }
    }

    /// Deliver notifications once all state for this call is committed
    fn dispatch(&self, notices: Vec<Notice>) {
        for notice in notices {
            let (callback, value) = match notice {
                Notice::StateChanged(v) => (&self.config.on_offstage_state_changed, v),
                Notice::AnimationComplete(v) => (&self.config.on_animation_complete, v),
            };
            if let Some(callback) = callback {
                callback(value);
            }
        }
    }

    /// Caller-requested visibility (true = hidden)
    pub fn is_offstage(&self) -> bool {
        self.target_offstage
    }

    /// Debounced visibility currently being rendered (true = hidden)
    pub fn actual_offstage(&self) -> bool {
        self.actual_offstage
    }

    /// Linear transition progress: 0.0 hidden, 1.0 visible
    pub fn progress(&self) -> f32 {
        self.controller.value()
    }

    pub fn animation_status(&self) -> AnimationStatus {
        self.controller.status()
    }

    pub fn show_loading(&self) -> bool {
        self.loading.is_showing()
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Whether the host must keep calling [`tick`](Self::tick)
    pub fn needs_tick(&self) -> bool {
        !self.disposed && (self.controller.is_animating() || self.timers.next_deadline().is_some())
    }

    /// Earliest pending timer deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn config(&self) -> &OffstageConfig<C> {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        if self.timers.is_pending(TimerKind::HideContent) {
            return Phase::PendingHide;
        }
        if self.timers.is_pending(TimerKind::ShowContent) {
            return Phase::PendingShow;
        }
        match self.controller.status() {
            AnimationStatus::Forward => Phase::TransitioningIn,
            AnimationStatus::Reverse => Phase::TransitioningOut,
            _ if self.actual_offstage => Phase::Hidden,
            _ => Phase::Visible,
        }
    }

    /// The child is mounted whenever the rendered state is visible. Once the
    /// rendered state is hidden it is retained only with `maintain_state`.
    pub fn mount(&self) -> MountMode {
        if !self.actual_offstage {
            MountMode::Mounted
        } else if self.config.maintain_state {
            MountMode::Retained {
                animate: self.config.maintain_animation,
            }
        } else {
            MountMode::Unmounted
        }
    }

    pub fn visuals(&self) -> Visuals {
        Visuals::resolve(self.controller.value(), self.actual_offstage, &self.config)
    }

    pub fn presentation(&self) -> Presentation<'_, C> {
        let mount = self.mount();
        let show_loading = self.show_loading();
        let indicator = show_loading.then(|| match &self.config.loading_indicator {
            Some(custom) => Indicator::Custom(custom),
            None => Indicator::Spinner,
        });
        Presentation {
            phase: self.phase(),
            mount,
            visuals: self.visuals(),
            child: (mount != MountMode::Unmounted).then_some(&self.config.child),
            show_loading,
            indicator,
        }
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for Offstage<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Offstage")
            .field("target_offstage", &self.target_offstage)
            .field("actual_offstage", &self.actual_offstage)
            .field("progress", &self.controller.value())
            .field("status", &self.controller.status())
            .field("show_loading", &self.loading.is_showing())
            .field("disposed", &self.disposed)
            .finish()
    }
}
