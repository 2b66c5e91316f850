//! Entrance and exit animation strategies.
//!
//! A strategy owns two things: the "source" scene the popup rests in before
//! it is shown (and returns to when hidden), and the transitions between that
//! scene and the displayed one. [`Animator`] covers the built-in effects; the
//! [`AnimationStrategy`] trait is the seam for anything else.

mod custom;
mod fade;
mod slide;
mod zoom;

pub use custom::{CustomEffect, SetupFn, TransitionFn};
pub use slide::SlideDirection;
pub use zoom::ZOOM_SOURCE_SCALE;

use std::time::Duration;

use crate::animation::Transition;
use crate::completion::Completion;
use crate::driver::AnimationDriver;
use crate::geometry::{Rect, Size};
use crate::layout::Layout;
use crate::scene::Scene;

/// Everything a strategy may read or change during setup and transitions
pub struct Stage<'a> {
    /// Scene currently shown; strategies write the source/target into it
    pub scene: &'a mut Scene,
    pub container: Rect,
    pub content_size: Size,
    pub layout: &'a Layout,
}

impl Stage<'_> {
    /// Frame the content occupies while displayed
    pub fn displayed_frame(&self) -> Rect {
        self.layout.resolve(self.container, self.content_size)
    }
}

/// Pluggable popup animation.
///
/// Both transition methods must fire `done` exactly once: synchronously when
/// `animated` is false, otherwise when the driver finishes.
pub trait AnimationStrategy {
    /// Compute the source scene and apply it to `stage.scene`
    fn setup(&mut self, stage: &mut Stage<'_>);

    /// Transition from the current scene to the displayed one
    fn entrance(
        &mut self,
        stage: &mut Stage<'_>,
        driver: &mut dyn AnimationDriver,
        animated: bool,
        done: Completion,
    );

    /// Transition from the current scene back to the source one
    fn exit(
        &mut self,
        stage: &mut Stage<'_>,
        driver: &mut dyn AnimationDriver,
        animated: bool,
        done: Completion,
    );
}

/// Move `stage.scene` to `target`, through the driver when `animated`
pub fn transition_to(
    stage: &mut Stage<'_>,
    driver: &mut dyn AnimationDriver,
    transition: &Transition,
    target: Scene,
    animated: bool,
    done: Completion,
) {
    if animated {
        driver.run(transition, *stage.scene, target, done);
    } else {
        *stage.scene = target;
        done.fire();
    }
}

/// Built-in effects
pub enum Effect {
    Fade,
    /// Fade combined with a scale up from [`ZOOM_SOURCE_SCALE`]
    Zoom,
    Slide(SlideDirection),
    /// Slide whose entrance defaults to a spring curve
    Spring(SlideDirection),
    Custom(CustomEffect),
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Fade => write!(f, "Fade"),
            Effect::Zoom => write!(f, "Zoom"),
            Effect::Slide(dir) => write!(f, "Slide({:?})", dir),
            Effect::Spring(dir) => write!(f, "Spring({:?})", dir),
            Effect::Custom(_) => write!(f, "Custom"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Scenes {
    source: Scene,
    displayed: Scene,
}

/// The built-in [`AnimationStrategy`]
#[derive(Debug)]
pub struct Animator {
    effect: Effect,
    /// Used by every effect except `Custom`, whose procedures own their timing
    pub entrance: Transition,
    pub exit: Transition,
    scenes: Option<Scenes>,
}

impl Animator {
    pub const SPRING_DURATION: Duration = Duration::from_millis(500);
    pub const SPRING_DAMPING: f32 = 0.8;
    pub const SPRING_VELOCITY: f32 = 0.7;

    pub fn new(effect: Effect) -> Self {
        let entrance = match &effect {
            Effect::Spring(_) => Transition::spring(
                Self::SPRING_DURATION,
                Self::SPRING_DAMPING,
                Self::SPRING_VELOCITY,
            ),
            _ => Transition::default(),
        };
        Self {
            effect,
            entrance,
            exit: Transition::default(),
            scenes: None,
        }
    }

    pub fn fade() -> Self {
        Self::new(Effect::Fade)
    }

    pub fn zoom() -> Self {
        Self::new(Effect::Zoom)
    }

    pub fn slide(direction: SlideDirection) -> Self {
        Self::new(Effect::Slide(direction))
    }

    pub fn spring(direction: SlideDirection) -> Self {
        Self::new(Effect::Spring(direction))
    }

    pub fn custom(effect: CustomEffect) -> Self {
        Self::new(Effect::Custom(effect))
    }

    pub fn with_entrance(mut self, transition: Transition) -> Self {
        self.entrance = transition;
        self
    }

    pub fn with_exit(mut self, transition: Transition) -> Self {
        self.exit = transition;
        self
    }

    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    /// Source scene computed by the last `setup`
    pub fn source(&self) -> Option<Scene> {
        self.scenes.map(|s| s.source)
    }

    fn scenes(&mut self, stage: &mut Stage<'_>) -> Scenes {
        match self.scenes {
            Some(scenes) => scenes,
            None => {
                log::warn!("animator used before setup; running setup now");
                self.setup(stage);
                self.scenes.unwrap_or_else(|| Scenes {
                    source: *stage.scene,
                    displayed: *stage.scene,
                })
            }
        }
    }
}

impl AnimationStrategy for Animator {
    fn setup(&mut self, stage: &mut Stage<'_>) {
        let frame = stage.displayed_frame();
        let (source, displayed) = match &mut self.effect {
            Effect::Fade => fade::scenes(frame),
            Effect::Zoom => zoom::scenes(frame),
            Effect::Slide(direction) | Effect::Spring(direction) => {
                slide::scenes(*direction, stage.layout, stage.container, frame)
            }
            Effect::Custom(custom) => {
                (custom.setup)(stage);
                return;
            }
        };
        *stage.scene = source;
        self.scenes = Some(Scenes { source, displayed });
    }

    fn entrance(
        &mut self,
        stage: &mut Stage<'_>,
        driver: &mut dyn AnimationDriver,
        animated: bool,
        done: Completion,
    ) {
        if let Effect::Custom(custom) = &mut self.effect {
            return (custom.entrance)(stage, driver, animated, done);
        }
        let target = self.scenes(stage).displayed;
        transition_to(stage, driver, &self.entrance, target, animated, done);
    }

    fn exit(
        &mut self,
        stage: &mut Stage<'_>,
        driver: &mut dyn AnimationDriver,
        animated: bool,
        done: Completion,
    ) {
        if let Effect::Custom(custom) = &mut self.effect {
            return (custom.exit)(stage, driver, animated, done);
        }
        let target = self.scenes(stage).source;
        transition_to(stage, driver, &self.exit, target, animated, done);
    }
}
