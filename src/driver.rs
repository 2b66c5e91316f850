//! Animation drivers: the seam between a popup and whatever advances time.
//!
//! [`Timeline`] interpolates scenes itself and is ticked by the host's frame
//! loop through [`Popup::advance`](crate::Popup::advance). Hosts with their own
//! animation engine implement [`AnimationDriver`] directly.

use std::time::Duration;

use crate::animation::{Animatable, TimingFunction, Transition};
use crate::completion::Completion;
use crate::scene::Scene;

/// Host animation primitive: run one transition, fire one completion
pub trait AnimationDriver {
    /// Start interpolating from `from` to `to`. `done` must fire exactly once,
    /// after the last frame has been produced.
    fn run(&mut self, transition: &Transition, from: Scene, to: Scene, done: Completion);

    /// Advance by `dt` and return the scene to display, if the driver
    /// produced one since the last call.
    fn advance(&mut self, dt: Duration) -> Option<Scene>;

    /// Whether a transition is in flight
    fn is_running(&self) -> bool;
}

struct Run {
    from: Scene,
    to: Scene,
    duration: Duration,
    curve: TimingFunction,
    elapsed: Duration,
    done: Option<Completion>,
}

/// Frame-ticked driver that interpolates scenes with the transition's curve
#[derive(Default)]
pub struct Timeline {
    run: Option<Run>,
    current: Option<Scene>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent interpolated scene
    pub fn current(&self) -> Option<&Scene> {
        self.current.as_ref()
    }

    /// Normalized progress of the running transition (1.0 when idle)
    pub fn progress(&self) -> f32 {
        match &self.run {
            Some(run) => normalized(run.elapsed, run.duration),
            None => 1.0,
        }
    }
}

fn normalized(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        1.0
    } else {
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }
}

impl AnimationDriver for Timeline {
    fn run(&mut self, transition: &Transition, from: Scene, to: Scene, done: Completion) {
        if let Some(stale) = self.run.take().and_then(|run| run.done) {
            log::warn!("timeline restarted while running; completing the previous transition");
            stale.fire();
        }

        log::trace!(
            "timeline: {:?} over {:?} with {:?}",
            from.content.frame,
            transition.duration,
            transition.curve()
        );
        self.current = Some(from);
        self.run = Some(Run {
            from,
            to,
            duration: transition.duration,
            curve: transition.curve(),
            elapsed: Duration::ZERO,
            done: Some(done),
        });
    }

    fn advance(&mut self, dt: Duration) -> Option<Scene> {
        let run = self.run.as_mut()?;
        run.elapsed = run.elapsed.saturating_add(dt);

        let t = normalized(run.elapsed, run.duration);
        let scene = if t >= 1.0 {
            // Land exactly on the target, whatever the curve overshoot
            run.to
        } else {
            Scene::lerp(&run.from, &run.to, run.curve.evaluate(t))
        };
        self.current = Some(scene);

        if t >= 1.0 {
            if let Some(done) = self.run.take().and_then(|run| run.done) {
                done.fire();
            }
        }
        Some(scene)
    }

    fn is_running(&self) -> bool {
        self.run.is_some()
    }
}

/// Driver that ignores durations and jumps to the target on the next tick
#[derive(Default)]
pub struct Immediate {
    pending: Option<(Scene, Completion)>,
}

impl Immediate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnimationDriver for Immediate {
    fn run(&mut self, _transition: &Transition, _from: Scene, to: Scene, done: Completion) {
        if let Some((_, stale)) = self.pending.take() {
            stale.fire();
        }
        self.pending = Some((to, done));
    }

    fn advance(&mut self, _dt: Duration) -> Option<Scene> {
        let (scene, done) = self.pending.take()?;
        done.fire();
        Some(scene)
    }

    fn is_running(&self) -> bool {
        self.pending.is_some()
    }
}
