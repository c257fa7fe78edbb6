/// 2D paint transform for transitioning content, handed to the host as-is.
/// Scale and rotation pivot on `origin`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation in x and y, in pixels
    pub translate: (f32, f32),
    /// Scale in x and y (1.0 = no scale)
    pub scale: (f32, f32),
    /// Rotation in radians (clockwise)
    pub rotate: f32,
    /// Transform origin as fraction of size (0.5, 0.5 = center)
    pub origin: (f32, f32),
}

impl Transform {
    /// Identity transform (no transformation)
    pub const IDENTITY: Self = Self {
        translate: (0.0, 0.0),
        scale: (1.0, 1.0),
        rotate: 0.0,
        origin: (0.5, 0.5),
    };

    /// Create a translation transform
    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate: (x, y),
            ..Self::IDENTITY
        }
    }

    /// Create a uniform scale transform
    pub fn scale_uniform(scale: f32) -> Self {
        Self {
            scale: (scale, scale),
            ..Self::IDENTITY
        }
    }

    /// Create a rotation transform (in radians)
    pub fn rotate(radians: f32) -> Self {
        Self {
            rotate: radians,
            ..Self::IDENTITY
        }
    }

    /// Create a rotation transform from full turns (1.0 = 360 degrees)
    pub fn rotate_turns(turns: f32) -> Self {
        Self::rotate(turns * std::f32::consts::TAU)
    }

    /// Combine the translation of `self` with the scale and rotation of `other`
    pub fn then(mut self, other: Transform) -> Self {
        self.scale = (self.scale.0 * other.scale.0, self.scale.1 * other.scale.1);
        self.rotate += other.rotate;
        self.translate = (
            self.translate.0 + other.translate.0,
            self.translate.1 + other.translate.1,
        );
        self
    }

    /// Whether this transform leaves every point in place
    pub fn is_identity(&self) -> bool {
        self.translate == (0.0, 0.0) && self.scale == (1.0, 1.0) && self.rotate.abs() <= 1e-6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        assert!(Transform::IDENTITY.is_identity());
        assert!(!Transform::translate(0.0, 1.0).is_identity());
        assert!(!Transform::scale_uniform(0.97).is_identity());
    }

    #[test]
    fn test_rotate_turns() {
        let t = Transform::rotate_turns(0.25);
        assert!((t.rotate - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert_eq!(t.origin, (0.5, 0.5));
    }

    #[test]
    fn test_then_combines() {
        let t = Transform::translate(0.0, -30.0)
            .then(Transform::scale_uniform(0.5))
            .then(Transform::rotate(0.1));
        assert_eq!(t.translate, (0.0, -30.0));
        assert_eq!(t.scale, (0.5, 0.5));
        assert!((t.rotate - 0.1).abs() < 1e-6);
    }
}
