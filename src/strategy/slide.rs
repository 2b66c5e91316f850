use crate::geometry::Rect;
use crate::layout::Layout;
use crate::scene::{ContentState, Scene};

/// Direction the content travels while entering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Enters from below the container
    Up,
    /// Enters from above the container
    Down,
    /// Enters from the trailing side
    Left,
    /// Enters from the leading side
    Right,
}

/// Content starts fully outside the container on the entry side; only the
/// backdrop fades.
pub(super) fn scenes(
    direction: SlideDirection,
    layout: &Layout,
    container: Rect,
    frame: Rect,
) -> (Scene, Scene) {
    let hidden = displaced(direction, layout, container, frame);
    (
        Scene::new(ContentState::new(hidden), 0.0),
        Scene::displayed(frame),
    )
}

fn displaced(direction: SlideDirection, layout: &Layout, container: Rect, frame: Rect) -> Rect {
    match layout {
        // Absolute frames get an explicit off-container rectangle
        Layout::Frame(rect) => match direction {
            SlideDirection::Up => rect.with_origin(rect.x, container.max_y()),
            SlideDirection::Down => rect.with_origin(rect.x, container.y - rect.height),
            SlideDirection::Left => rect.with_origin(container.max_x(), rect.y),
            SlideDirection::Right => rect.with_origin(container.x - rect.width, rect.y),
        },
        // Resolved layouts keep their placement and are pushed along one axis
        Layout::Center(_) | Layout::Edge(_) => match direction {
            SlideDirection::Up => frame.offset(0.0, container.max_y() - frame.y),
            SlideDirection::Down => frame.offset(0.0, container.y - frame.max_y()),
            SlideDirection::Left => frame.offset(container.max_x() - frame.x, 0.0),
            SlideDirection::Right => frame.offset(container.x - frame.max_x(), 0.0),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    const CONTAINER: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 400.0,
        height: 800.0,
    };

    fn hidden_frame(direction: SlideDirection, layout: Layout) -> Rect {
        let frame = layout.resolve(CONTAINER, Size::new(200.0, 100.0));
        scenes(direction, &layout, CONTAINER, frame).0.content.frame
    }

    #[test]
    fn test_every_direction_ends_outside_container() {
        for direction in [
            SlideDirection::Up,
            SlideDirection::Down,
            SlideDirection::Left,
            SlideDirection::Right,
        ] {
            for layout in [
                Layout::center(),
                Layout::top(100.0),
                Layout::trailing(20.0),
                Layout::frame(Rect::new(50.0, 60.0, 120.0, 80.0)),
            ] {
                let hidden = hidden_frame(direction, layout);
                assert!(
                    !hidden.intersects(&CONTAINER),
                    "{:?} with {:?} left {:?} on screen",
                    direction,
                    layout,
                    hidden
                );
            }
        }
    }

    #[test]
    fn test_down_from_top_edge() {
        let hidden = hidden_frame(SlideDirection::Down, Layout::top(100.0));
        assert_eq!(hidden, Rect::new(100.0, -100.0, 200.0, 100.0));
    }

    #[test]
    fn test_up_keeps_cross_axis() {
        let hidden = hidden_frame(SlideDirection::Up, Layout::center().offset(15.0, 0.0));
        assert_eq!(hidden, Rect::new(115.0, 800.0, 200.0, 100.0));
    }

    #[test]
    fn test_frame_layout_is_displaced_explicitly() {
        let rect = Rect::new(50.0, 60.0, 120.0, 80.0);
        assert_eq!(
            hidden_frame(SlideDirection::Right, Layout::frame(rect)),
            Rect::new(-120.0, 60.0, 120.0, 80.0)
        );
        assert_eq!(
            hidden_frame(SlideDirection::Left, Layout::frame(rect)),
            Rect::new(400.0, 60.0, 120.0, 80.0)
        );
    }

    #[test]
    fn test_slide_keeps_content_opaque() {
        let layout = Layout::center();
        let frame = layout.resolve(CONTAINER, Size::new(10.0, 10.0));
        let (source, displayed) = scenes(SlideDirection::Left, &layout, CONTAINER, frame);
        assert_eq!(source.content.alpha, 1.0);
        assert_eq!(source.backdrop_alpha, 0.0);
        assert_eq!(displayed.content.frame, frame);
    }
}
