//! Construction options for [`Offstage`](crate::Offstage) and
//! [`HiddenContent`](crate::HiddenContent).
//!
//! # Example
//! ```ignore
//! let config = OffstageConfig::new(true, "content")
//!     .transition(TransitionKind::Slide)
//!     .slide_direction(SlideDirection::Up)
//!     .show_loading_after(Duration::from_millis(200))
//!     .on_offstage_state_changed(|hidden| log::info!("hidden: {hidden}"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::animation::TimingFunction;
use crate::error::{ConfigError, Result};

/// Notification carrying an offstage flag (true = hidden)
pub type Callback = Arc<dyn Fn(bool) + Send + Sync>;

/// Visual effect used when content enters or leaves the stage
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Fade,
    Scale,
    #[default]
    FadeAndScale,
    Slide,
    Rotation,
}

impl TransitionKind {
    pub const ALL: [TransitionKind; 5] = [
        TransitionKind::Fade,
        TransitionKind::Scale,
        TransitionKind::FadeAndScale,
        TransitionKind::Slide,
        TransitionKind::Rotation,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TransitionKind::Fade => "fade",
            TransitionKind::Scale => "scale",
            TransitionKind::FadeAndScale => "fadeAndScale",
            TransitionKind::Slide => "slide",
            TransitionKind::Rotation => "rotation",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransitionKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "fade" => Ok(TransitionKind::Fade),
            "scale" => Ok(TransitionKind::Scale),
            "fadeAndScale" | "fade_and_scale" => Ok(TransitionKind::FadeAndScale),
            "slide" => Ok(TransitionKind::Slide),
            "rotation" => Ok(TransitionKind::Rotation),
            other => Err(ConfigError::UnknownTransition(other.to_string())),
        }
    }
}

/// Edge named by a slide transition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SlideDirection {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl SlideDirection {
    /// Unit vector the starting offset points along, in fractions of the
    /// widget's extent (y grows downward).
    pub fn vector(self) -> (f32, f32) {
        match self {
            SlideDirection::Up => (0.0, 1.0),
            SlideDirection::Down => (0.0, -1.0),
            SlideDirection::Left => (1.0, 0.0),
            SlideDirection::Right => (-1.0, 0.0),
        }
    }
}

impl FromStr for SlideDirection {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "up" => Ok(SlideDirection::Up),
            "down" => Ok(SlideDirection::Down),
            "left" => Ok(SlideDirection::Left),
            "right" => Ok(SlideDirection::Right),
            other => Err(ConfigError::UnknownSlideDirection(other.to_string())),
        }
    }
}

/// Everything a caller supplies on each build of an offstage widget.
///
/// `C` is the host toolkit's content type (a widget handle, a view model,
/// or anything else the host knows how to paint).
#[derive(Clone)]
pub struct OffstageConfig<C> {
    /// Target visibility: true = hidden
    pub is_offstage: bool,
    pub child: C,
    pub fade_duration: Duration,
    pub show_loading_indicator: bool,
    /// Replaces the default spinner
    pub loading_indicator: Option<C>,
    pub on_offstage_state_changed: Option<Callback>,
    pub on_animation_complete: Option<Callback>,
    pub fade_in_curve: TimingFunction,
    pub fade_out_curve: TimingFunction,
    pub scale_curve: TimingFunction,
    pub delay_before_show: Duration,
    pub delay_before_hide: Duration,
    pub show_loading_after: Duration,
    pub maintain_state: bool,
    pub maintain_animation: bool,
    pub transition: TransitionKind,
    pub slide_direction: SlideDirection,
    /// Slide distance as a fraction of the widget's extent
    pub slide_offset: f32,
}

impl<C> OffstageConfig<C> {
    pub const DEFAULT_FADE_DURATION: Duration = Duration::from_millis(400);
    pub const DEFAULT_SLIDE_OFFSET: f32 = 0.3;

    pub fn new(is_offstage: bool, child: C) -> Self {
        Self {
            is_offstage,
            child,
            fade_duration: Self::DEFAULT_FADE_DURATION,
            show_loading_indicator: true,
            loading_indicator: None,
            on_offstage_state_changed: None,
            on_animation_complete: None,
            fade_in_curve: TimingFunction::EaseInOut,
            fade_out_curve: TimingFunction::EaseInOut,
            scale_curve: TimingFunction::fast_out_slow_in(),
            delay_before_show: Duration::ZERO,
            delay_before_hide: Duration::ZERO,
            show_loading_after: Duration::ZERO,
            maintain_state: false,
            maintain_animation: false,
            transition: TransitionKind::default(),
            slide_direction: SlideDirection::default(),
            slide_offset: Self::DEFAULT_SLIDE_OFFSET,
        }
    }

    /// Reject values no transition can render
    pub fn validate(&self) -> Result<()> {
        if !self.slide_offset.is_finite() || self.slide_offset < 0.0 {
            return Err(ConfigError::InvalidSlideOffset(self.slide_offset));
        }
        Ok(())
    }

    pub fn is_offstage(mut self, is_offstage: bool) -> Self {
        self.is_offstage = is_offstage;
        self
    }

    pub fn fade_duration(mut self, duration: Duration) -> Self {
        self.fade_duration = duration;
        self
    }

    pub fn show_loading_indicator(mut self, show: bool) -> Self {
        self.show_loading_indicator = show;
        self
    }

    pub fn loading_indicator(mut self, indicator: C) -> Self {
        self.loading_indicator = Some(indicator);
        self
    }

    pub fn on_offstage_state_changed<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_offstage_state_changed = Some(Arc::new(f));
        self
    }

    pub fn on_animation_complete<F>(mut self, f: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_animation_complete = Some(Arc::new(f));
        self
    }

    pub fn fade_in_curve(mut self, curve: TimingFunction) -> Self {
        self.fade_in_curve = curve;
        self
    }

    pub fn fade_out_curve(mut self, curve: TimingFunction) -> Self {
        self.fade_out_curve = curve;
        self
    }

    pub fn scale_curve(mut self, curve: TimingFunction) -> Self {
        self.scale_curve = curve;
        self
    }

    pub fn delay_before_show(mut self, delay: Duration) -> Self {
        self.delay_before_show = delay;
        self
    }

    pub fn delay_before_hide(mut self, delay: Duration) -> Self {
        self.delay_before_hide = delay;
        self
    }

    pub fn show_loading_after(mut self, delay: Duration) -> Self {
        self.show_loading_after = delay;
        self
    }

    pub fn maintain_state(mut self, maintain: bool) -> Self {
        self.maintain_state = maintain;
        self
    }

    pub fn maintain_animation(mut self, maintain: bool) -> Self {
        self.maintain_animation = maintain;
        self
    }

    pub fn transition(mut self, kind: TransitionKind) -> Self {
        self.transition = kind;
        self
    }

    pub fn slide_direction(mut self, direction: SlideDirection) -> Self {
        self.slide_direction = direction;
        self
    }

    pub fn slide_offset(mut self, offset: f32) -> Self {
        self.slide_offset = offset;
        self
    }

    /// Delay applied before committing a change toward `hidden`
    pub(crate) fn delay_for(&self, hidden: bool) -> Duration {
        if hidden {
            self.delay_before_hide
        } else {
            self.delay_before_show
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for OffstageConfig<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OffstageConfig")
            .field("is_offstage", &self.is_offstage)
            .field("child", &self.child)
            .field("fade_duration", &self.fade_duration)
            .field("show_loading_indicator", &self.show_loading_indicator)
            .field("loading_indicator", &self.loading_indicator)
            .field("delay_before_show", &self.delay_before_show)
            .field("delay_before_hide", &self.delay_before_hide)
            .field("show_loading_after", &self.show_loading_after)
            .field("maintain_state", &self.maintain_state)
            .field("maintain_animation", &self.maintain_animation)
            .field("transition", &self.transition)
            .field("slide_direction", &self.slide_direction)
            .field("slide_offset", &self.slide_offset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OffstageConfig::new(true, ());
        assert_eq!(config.fade_duration, Duration::from_millis(400));
        assert!(config.show_loading_indicator);
        assert_eq!(config.transition, TransitionKind::FadeAndScale);
        assert_eq!(config.slide_direction, SlideDirection::Down);
        assert_eq!(config.slide_offset, 0.3);
        assert_eq!(config.delay_before_show, Duration::ZERO);
        assert!(!config.maintain_state);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_transition_names_round_trip() {
        for kind in TransitionKind::ALL {
            assert_eq!(kind.name().parse::<TransitionKind>(), Ok(kind));
        }
        assert_eq!(
            "fade_and_scale".parse::<TransitionKind>(),
            Ok(TransitionKind::FadeAndScale)
        );
    }

    #[test]
    fn test_unknown_transition_fails() {
        let err = "wobble".parse::<TransitionKind>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownTransition("wobble".into()));
        assert!(err.to_string().contains("wobble"));
    }

    #[test]
    fn test_slide_direction_parse() {
        assert_eq!("up".parse::<SlideDirection>(), Ok(SlideDirection::Up));
        assert!("north".parse::<SlideDirection>().is_err());
    }

    #[test]
    fn test_invalid_slide_offset() {
        let config = OffstageConfig::new(false, ()).slide_offset(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSlideOffset(_))
        ));
        let config = OffstageConfig::new(false, ()).slide_offset(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_delay_for() {
        let config = OffstageConfig::new(false, ())
            .delay_before_show(Duration::from_millis(10))
            .delay_before_hide(Duration::from_millis(20));
        assert_eq!(config.delay_for(true), Duration::from_millis(20));
        assert_eq!(config.delay_for(false), Duration::from_millis(10));
    }
}
