use crate::geometry::Rect;
use crate::scene::{ContentState, Scene};

/// Content and backdrop both fade from transparent, in place
pub(super) fn scenes(frame: Rect) -> (Scene, Scene) {
    let source = Scene::new(ContentState::new(frame).with_alpha(0.0), 0.0);
    (source, Scene::displayed(frame))
}
