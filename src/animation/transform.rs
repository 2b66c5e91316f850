use super::Animatable;

/// 2D transform applied to content on top of its frame.
/// Does not affect layout; hit testing maps points back through
/// [`Transform::invert_point`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation in x and y
    pub translate: (f32, f32),
    /// Scale in x and y (1.0 = no scale)
    pub scale: (f32, f32),
    /// Rotation in radians (clockwise)
    pub rotate: f32,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        translate: (0.0, 0.0),
        scale: (1.0, 1.0),
        rotate: 0.0,
    };

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            translate: (x, y),
            ..Self::IDENTITY
        }
    }

    pub fn scale(x: f32, y: f32) -> Self {
        Self {
            scale: (x, y),
            ..Self::IDENTITY
        }
    }

    pub fn scale_uniform(scale: f32) -> Self {
        Self::scale(scale, scale)
    }

    pub fn rotate(radians: f32) -> Self {
        Self {
            rotate: radians,
            ..Self::IDENTITY
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Map a point inside a `width` x `height` box, transforming around its center
    pub fn apply_to_point(&self, x: f32, y: f32, width: f32, height: f32) -> (f32, f32) {
        let (cx, cy) = (width * 0.5, height * 0.5);
        let mut tx = (x - cx) * self.scale.0;
        let mut ty = (y - cy) * self.scale.1;

        if self.rotate.abs() > 1e-6 {
            let (sin, cos) = self.rotate.sin_cos();
            (tx, ty) = (tx * cos - ty * sin, tx * sin + ty * cos);
        }

        (
            tx + cx + self.translate.0,
            ty + cy + self.translate.1,
        )
    }

    /// Inverse of [`apply_to_point`](Transform::apply_to_point). `None` when a
    /// scale axis has collapsed to zero.
    pub fn invert_point(&self, x: f32, y: f32, width: f32, height: f32) -> Option<(f32, f32)> {
        if self.scale.0.abs() < 1e-6 || self.scale.1.abs() < 1e-6 {
            return None;
        }
        let (cx, cy) = (width * 0.5, height * 0.5);
        let mut tx = x - cx - self.translate.0;
        let mut ty = y - cy - self.translate.1;

        if self.rotate.abs() > 1e-6 {
            let (sin, cos) = self.rotate.sin_cos();
            (tx, ty) = (tx * cos + ty * sin, ty * cos - tx * sin);
        }

        Some((tx / self.scale.0 + cx, ty / self.scale.1 + cy))
    }
}

impl Animatable for Transform {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            translate: (
                f32::lerp(&from.translate.0, &to.translate.0, t),
                f32::lerp(&from.translate.1, &to.translate.1, t),
            ),
            scale: (
                f32::lerp(&from.scale.0, &to.scale.0, t),
                f32::lerp(&from.scale.1, &to.scale.1, t),
            ),
            rotate: f32::lerp(&from.rotate, &to.rotate, t),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_transform() {
        let (x, y) = Transform::IDENTITY.apply_to_point(10.0, 20.0, 100.0, 100.0);
        assert_eq!(x, 10.0);
        assert_eq!(y, 20.0);
    }

    #[test]
    fn test_scale_around_center() {
        let t = Transform::scale_uniform(0.3);
        let (x, y) = t.apply_to_point(0.0, 0.0, 100.0, 100.0);
        // (-50, -50) from center scaled to (-15, -15)
        assert!((x - 35.0).abs() < 1e-4);
        assert!((y - 35.0).abs() < 1e-4);
    }

    #[test]
    fn test_invert_undoes_apply() {
        let t = Transform {
            translate: (12.0, -4.0),
            scale: (0.5, 2.0),
            rotate: 0.7,
        };
        let (x, y) = t.apply_to_point(30.0, 80.0, 200.0, 100.0);
        let (bx, by) = t.invert_point(x, y, 200.0, 100.0).unwrap();
        assert!((bx - 30.0).abs() < 1e-3);
        assert!((by - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_invert_collapsed_scale() {
        assert_eq!(Transform::scale_uniform(0.0).invert_point(1.0, 1.0, 10.0, 10.0), None);
    }

    #[test]
    fn test_zoom_lerp_reaches_identity() {
        let from = Transform::scale_uniform(0.3);
        let end = Transform::lerp(&from, &Transform::IDENTITY, 1.0);
        assert!(end.is_identity());
        let mid = Transform::lerp(&from, &Transform::IDENTITY, 0.5);
        assert!((mid.scale.0 - 0.65).abs() < 1e-6);
    }
}
