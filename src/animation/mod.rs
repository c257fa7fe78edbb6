mod animatable;
mod controller;
mod timing;
mod transform;

pub use animatable::Animatable;
pub use controller::{AdvanceResult, AnimationStatus, ProgressController};
pub use timing::TimingFunction;
pub use transform::Transform;
