//! Privacy-style content hiding.
//!
//! [`HiddenContent`] wraps an [`Offstage`] whose target visibility is derived
//! from three flags: the caller's `is_hidden`, the caller's `force_reveal`
//! mode, and a `manually_hidden` flag the user toggles by tapping.
//!
//! ```ignore
//! let config = HiddenContentConfig::new(OffstageConfig::new(true, card))
//!     .is_hidden(true)
//!     .force_reveal(true);
//! let mut secret = HiddenContent::new(config, now)?;
//! secret.tap_indicator(now);          // user reveals
//! assert!(!secret.effective_hidden());
//! ```

use std::time::Instant;

use crate::color::Color;
use crate::config::OffstageConfig;
use crate::error::Result;
use crate::offstage::{Offstage, Presentation};

/// Resolve the three hiding flags into the visibility fed to the state machine.
///
/// With `force_reveal` the user's manual toggle decides; without it the
/// caller's `is_hidden` does and the toggle is ignored.
pub fn effective_hidden(force_reveal: bool, is_hidden: bool, manually_hidden: bool) -> bool {
    if force_reveal {
        manually_hidden
    } else {
        is_hidden
    }
}

/// Icon shown by the corner toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CornerIcon {
    /// Content is concealed; tapping reveals it
    Reveal,
    /// Content is revealed; tapping conceals it again
    Conceal,
}

/// Small corner button offered while `force_reveal` is on
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerAffordance {
    pub icon: CornerIcon,
    pub color: Color,
}

impl CornerAffordance {
    pub const CONCEALED_COLOR: Color = Color::from_hex(0x9E9E9E);
    pub const REVEALED_COLOR: Color = Color::from_hex(0x2196F3);

    fn for_state(manually_hidden: bool) -> Self {
        if manually_hidden {
            Self {
                icon: CornerIcon::Reveal,
                color: Self::CONCEALED_COLOR,
            }
        } else {
            Self {
                icon: CornerIcon::Conceal,
                color: Self::REVEALED_COLOR,
            }
        }
    }
}

/// Construction options for [`HiddenContent`]: the offstage options plus the
/// two caller-controlled hiding flags, both off by default.
#[derive(Clone)]
pub struct HiddenContentConfig<C> {
    /// Options for the wrapped state machine. `is_offstage` is ignored in
    /// favour of the flag policy.
    pub base: OffstageConfig<C>,
    pub is_hidden: bool,
    pub force_reveal: bool,
}

impl<C> HiddenContentConfig<C> {
    pub fn new(base: OffstageConfig<C>) -> Self {
        Self {
            base,
            is_hidden: false,
            force_reveal: false,
        }
    }

    pub fn is_hidden(mut self, is_hidden: bool) -> Self {
        self.is_hidden = is_hidden;
        self
    }

    pub fn force_reveal(mut self, force_reveal: bool) -> Self {
        self.force_reveal = force_reveal;
        self
    }
}

impl<C> From<OffstageConfig<C>> for HiddenContentConfig<C> {
    fn from(base: OffstageConfig<C>) -> Self {
        Self::new(base)
    }
}

pub struct HiddenContent<C> {
    offstage: Offstage<C>,
    is_hidden: bool,
    force_reveal: bool,
    manually_hidden: bool,
}

impl<C> HiddenContent<C> {
    /// Mount with the caller's flags; the manual toggle starts out mirroring
    /// `is_hidden`
    pub fn new(config: impl Into<HiddenContentConfig<C>>, now: Instant) -> Result<Self> {
        let HiddenContentConfig {
            mut base,
            is_hidden,
            force_reveal,
        } = config.into();
        base.is_offstage = effective_hidden(force_reveal, is_hidden, is_hidden);
        Ok(Self {
            offstage: Offstage::new(base, now)?,
            is_hidden,
            force_reveal,
            manually_hidden: is_hidden,
        })
    }

    /// Apply a rebuilt configuration. A rejected configuration leaves the
    /// flags and the wrapped state untouched.
    pub fn update(
        &mut self,
        config: impl Into<HiddenContentConfig<C>>,
        now: Instant,
    ) -> Result<()> {
        let HiddenContentConfig {
            mut base,
            is_hidden,
            force_reveal,
        } = config.into();
        base.validate()?;
        if is_hidden != self.is_hidden {
            self.is_hidden = is_hidden;
            self.manually_hidden = is_hidden;
        }
        self.force_reveal = force_reveal;
        base.is_offstage = self.effective_hidden();
        self.offstage.update(base, now)
    }

    /// Caller changed `is_hidden`; the manual toggle snaps back to mirror it
    pub fn set_hidden(&mut self, is_hidden: bool, now: Instant) {
        if is_hidden == self.is_hidden {
            return;
        }
        self.is_hidden = is_hidden;
        self.manually_hidden = is_hidden;
        self.sync(now);
    }

    pub fn set_force_reveal(&mut self, force_reveal: bool, now: Instant) {
        if force_reveal == self.force_reveal {
            return;
        }
        self.force_reveal = force_reveal;
        self.sync(now);
    }

    /// Tap on the concealment overlay. Only reacts in force-reveal mode.
    /// Returns true if the tap toggled anything.
    pub fn tap_indicator(&mut self, now: Instant) -> bool {
        self.toggle(now)
    }

    /// Tap on the corner affordance, which only exists in force-reveal mode.
    /// Returns true if the tap toggled anything.
    pub fn tap_corner(&mut self, now: Instant) -> bool {
        self.toggle(now)
    }

    fn toggle(&mut self, now: Instant) -> bool {
        if !self.force_reveal || self.offstage.is_disposed() {
            return false;
        }
        self.manually_hidden = !self.manually_hidden;
        log::debug!("hidden content toggled (manually hidden: {})", self.manually_hidden);
        self.sync(now);
        true
    }

    fn sync(&mut self, now: Instant) {
        let hidden = self.effective_hidden();
        self.offstage.set_offstage(hidden, now);
    }

    pub fn effective_hidden(&self) -> bool {
        effective_hidden(self.force_reveal, self.is_hidden, self.manually_hidden)
    }

    pub fn manually_hidden(&self) -> bool {
        self.manually_hidden
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden
    }

    pub fn force_reveal(&self) -> bool {
        self.force_reveal
    }

    /// Corner toggle to paint, if any
    pub fn corner_affordance(&self) -> Option<CornerAffordance> {
        self.force_reveal
            .then(|| CornerAffordance::for_state(self.manually_hidden))
    }

    pub fn tick(&mut self, now: Instant) {
        self.offstage.tick(now);
    }

    pub fn dispose(&mut self) {
        self.offstage.dispose();
    }

    pub fn offstage(&self) -> &Offstage<C> {
        &self.offstage
    }

    pub fn presentation(&self) -> Presentation<'_, C> {
        self.offstage.presentation()
    }
}
