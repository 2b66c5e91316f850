use super::Stage;
use crate::completion::Completion;
use crate::driver::AnimationDriver;

pub type SetupFn = Box<dyn FnMut(&mut Stage<'_>)>;
pub type TransitionFn = Box<dyn FnMut(&mut Stage<'_>, &mut dyn AnimationDriver, bool, Completion)>;

/// Caller-supplied setup, entrance and exit procedures.
///
/// The transition procedures receive the same arguments as
/// [`AnimationStrategy`](super::AnimationStrategy) methods and carry the same
/// obligation: fire the completion exactly once. [`transition_to`](super::transition_to)
/// covers the common case.
pub struct CustomEffect {
    pub(super) setup: SetupFn,
    pub(super) entrance: TransitionFn,
    pub(super) exit: TransitionFn,
}

impl CustomEffect {
    pub fn new<S, E, X>(setup: S, entrance: E, exit: X) -> Self
    where
        S: FnMut(&mut Stage<'_>) + 'static,
        E: FnMut(&mut Stage<'_>, &mut dyn AnimationDriver, bool, Completion) + 'static,
        X: FnMut(&mut Stage<'_>, &mut dyn AnimationDriver, bool, Completion) + 'static,
    {
        Self {
            setup: Box::new(setup),
            entrance: Box::new(entrance),
            exit: Box::new(exit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Transition;
    use crate::completion::completion;
    use crate::driver::Timeline;
    use crate::geometry::{Rect, Size};
    use crate::layout::Layout;
    use crate::scene::{ContentState, Scene};
    use crate::strategy::{transition_to, AnimationStrategy, Animator};

    // Enters from the top-left corner, leaves through the bottom-right one
    fn diagonal() -> CustomEffect {
        CustomEffect::new(
            |stage| {
                let frame = stage.displayed_frame();
                let hidden = frame.with_origin(-frame.width, -frame.height);
                *stage.scene = Scene::new(ContentState::new(hidden), 0.0);
            },
            |stage, driver, animated, done| {
                let target = Scene::displayed(stage.displayed_frame());
                transition_to(stage, driver, &Transition::default(), target, animated, done);
            },
            |stage, driver, animated, done| {
                let frame = stage.displayed_frame();
                let gone = frame.with_origin(stage.container.max_x(), stage.container.max_y());
                let target = Scene::new(ContentState::new(gone), 0.0);
                transition_to(stage, driver, &Transition::default(), target, animated, done);
            },
        )
    }

    #[test]
    fn test_custom_procedures_drive_the_scene() {
        let layout = Layout::center();
        let mut scene = Scene::default();
        let mut animator = Animator::custom(diagonal());
        let mut driver = Timeline::new();
        let mut stage = Stage {
            scene: &mut scene,
            container: Rect::new(0.0, 0.0, 100.0, 100.0),
            content_size: Size::new(20.0, 20.0),
            layout: &layout,
        };

        animator.setup(&mut stage);
        assert_eq!(stage.scene.content.frame, Rect::new(-20.0, -20.0, 20.0, 20.0));

        let (done, watch) = completion();
        animator.entrance(&mut stage, &mut driver, false, done);
        assert!(watch.is_fired());
        assert_eq!(stage.scene.content.frame, Rect::new(40.0, 40.0, 20.0, 20.0));

        let (done, watch) = completion();
        animator.exit(&mut stage, &mut driver, false, done);
        assert!(watch.is_fired());
        assert_eq!(stage.scene.content.frame, Rect::new(100.0, 100.0, 20.0, 20.0));
        assert_eq!(stage.scene.backdrop_alpha, 0.0);
    }
}
