use crate::animation::Transform;
use crate::geometry::Rect;
use crate::scene::{ContentState, Scene};

/// Scale the content starts from (and shrinks back to) around its center
pub const ZOOM_SOURCE_SCALE: f32 = 0.3;

pub(super) fn scenes(frame: Rect) -> (Scene, Scene) {
    let source = Scene::new(
        ContentState::new(frame)
            .with_alpha(0.0)
            .with_transform(Transform::scale_uniform(ZOOM_SOURCE_SCALE)),
        0.0,
    );
    (source, Scene::displayed(frame))
}
