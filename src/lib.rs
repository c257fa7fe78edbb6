//! Headless loading/content-swap and content-hiding widgets.
//!
//! [`Offstage`] decides, from a boolean "is offstage" target and a handful of
//! timing options, when a child should be mounted, how far its show/hide
//! transition has progressed, and whether a loading indicator should be on
//! screen. [`HiddenContent`] layers a tap-to-reveal policy on top for
//! privacy-style concealment.
//!
//! Nothing here paints. A host toolkit calls the lifecycle methods with its
//! own frame clock and applies the returned [`Presentation`].

pub mod animation;
pub mod color;
pub mod config;
pub mod error;
pub mod hidden;
pub mod jobs;
pub mod offstage;

pub use config::{Callback, OffstageConfig, SlideDirection, TransitionKind};
pub use error::{ConfigError, Result};
pub use hidden::{CornerAffordance, CornerIcon, HiddenContent, HiddenContentConfig};
pub use offstage::{Indicator, MountMode, Offstage, Phase, Presentation, Visuals};

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transform};
    pub use crate::color::Color;
    pub use crate::config::{OffstageConfig, SlideDirection, TransitionKind};
    pub use crate::error::ConfigError;
    pub use crate::hidden::{CornerAffordance, CornerIcon, HiddenContent, HiddenContentConfig};
    pub use crate::jobs::{defer, flush_deferred, take_frame_request};
    pub use crate::offstage::{Indicator, MountMode, Offstage, Phase, Presentation, Visuals};
}
