//! The animatable visual state of one presentation.

use crate::animation::{Animatable, Transform};
use crate::geometry::Rect;

/// Geometry and opacity pushed to the content view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentState {
    pub frame: Rect,
    pub alpha: f32,
    pub transform: Transform,
}

impl ContentState {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            alpha: 1.0,
            transform: Transform::IDENTITY,
        }
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }
}

impl Default for ContentState {
    fn default() -> Self {
        Self::new(Rect::default())
    }
}

impl Animatable for ContentState {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            frame: Rect::lerp(&from.frame, &to.frame, t),
            alpha: f32::lerp(&from.alpha, &to.alpha, t),
            transform: Transform::lerp(&from.transform, &to.transform, t),
        }
    }
}

/// Content state and backdrop alpha, interpolated together so the backdrop
/// always moves in lockstep with the content.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scene {
    pub content: ContentState,
    pub backdrop_alpha: f32,
}

impl Scene {
    pub fn new(content: ContentState, backdrop_alpha: f32) -> Self {
        Self {
            content,
            backdrop_alpha,
        }
    }

    /// Fully visible scene with the content at `frame`
    pub fn displayed(frame: Rect) -> Self {
        Self::new(ContentState::new(frame), 1.0)
    }
}

impl Animatable for Scene {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            content: ContentState::lerp(&from.content, &to.content, t),
            backdrop_alpha: f32::lerp(&from.backdrop_alpha, &to.backdrop_alpha, t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_tracks_content_alpha() {
        let from = Scene::new(ContentState::default().with_alpha(0.0), 0.0);
        let to = Scene::displayed(Rect::default());
        let mid = Scene::lerp(&from, &to, 0.25);
        assert_eq!(mid.content.alpha, 0.25);
        assert_eq!(mid.backdrop_alpha, 0.25);
    }
}
