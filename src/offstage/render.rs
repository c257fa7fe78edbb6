use crate::animation::{Animatable, Transform};
use crate::config::{OffstageConfig, TransitionKind};

/// Scale of fully hidden content for the scale transitions
pub const HIDDEN_SCALE: f32 = 0.97;

/// Rotation of fully hidden content for the rotation transition, in turns
pub const HIDDEN_ROTATION_TURNS: f32 = 0.05;

/// Paint parameters for the content at one point of a transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visuals {
    pub opacity: f32,
    pub scale: f32,
    /// Translation as a fraction of the widget's width and height
    pub translate: (f32, f32),
    /// Clockwise rotation in full turns
    pub rotation_turns: f32,
}

impl Visuals {
    /// Fully staged content: opaque and untransformed
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        scale: 1.0,
        translate: (0.0, 0.0),
        rotation_turns: 0.0,
    };

    /// Map linear timeline progress to paint parameters.
    ///
    /// Opacity follows the fade-in curve while the content is entering and the
    /// fade-out curve while it is leaving; scale, slide and rotation follow the
    /// scale curve. Both read the same timeline.
    pub fn resolve<C>(progress: f32, actual_offstage: bool, config: &OffstageConfig<C>) -> Self {
        let fade_curve = if actual_offstage {
            &config.fade_out_curve
        } else {
            &config.fade_in_curve
        };
        let fade = fade_curve.evaluate(progress);
        let motion = config.scale_curve.evaluate(progress);

        match config.transition {
            TransitionKind::Fade => Self {
                opacity: fade,
                ..Self::VISIBLE
            },
            TransitionKind::Scale => Self {
                scale: f32::lerp(&HIDDEN_SCALE, &1.0, motion),
                ..Self::VISIBLE
            },
            TransitionKind::FadeAndScale => Self {
                opacity: fade,
                scale: f32::lerp(&HIDDEN_SCALE, &1.0, motion),
                ..Self::VISIBLE
            },
            TransitionKind::Slide => {
                let (dx, dy) = config.slide_direction.vector();
                let start = (dx * config.slide_offset, dy * config.slide_offset);
                Self {
                    opacity: fade,
                    translate: <(f32, f32)>::lerp(&start, &(0.0, 0.0), motion),
                    ..Self::VISIBLE
                }
            }
            TransitionKind::Rotation => Self {
                opacity: fade,
                rotation_turns: f32::lerp(&HIDDEN_ROTATION_TURNS, &0.0, motion),
                ..Self::VISIBLE
            },
        }
    }

    /// Paint transform for content laid out at `width` x `height`
    pub fn to_transform(&self, width: f32, height: f32) -> Transform {
        Transform::translate(self.translate.0 * width, self.translate.1 * height)
            .then(Transform::scale_uniform(self.scale))
            .then(Transform::rotate_turns(self.rotation_turns))
    }
}

impl Default for Visuals {
    fn default() -> Self {
        Self::VISIBLE
    }
}
