//! The popup controller: presentation state machine, hit testing and
//! lifecycle callbacks.
//!
//! ```text
//! Hidden --show--> AnimatingIn --done--> Displayed --hide--> AnimatingOut --done--> Hidden
//! ```
//!
//! `show`/`hide` issued from any other phase are dropped, never queued. In
//! particular a `hide` during `AnimatingIn` does not interrupt the entrance.

use std::time::Duration;

use bitflags::bitflags;

use crate::backdrop::{Backdrop, BackdropConfig, BackdropLayer};
use crate::completion::{completion, CompletionWatch};
use crate::driver::{AnimationDriver, Timeline};
use crate::geometry::Rect;
use crate::host::{Container, ContentView, OverlayId};
use crate::layout::Layout;
use crate::scene::{ContentState, Scene};
use crate::strategy::{AnimationStrategy, Stage};

bitflags! {
    /// Interaction switches of a popup
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PopupFlags: u8 {
        /// Hits inside the content reach the content
        const INTERACTIVE = 0b001;
        /// Hits outside the content pass through the whole overlay
        const PENETRABLE  = 0b010;
        /// A backdrop tap hides the popup
        const DISMISSIBLE = 0b100;
    }
}

/// Presentation phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    AnimatingIn,
    Displayed,
    AnimatingOut,
}

/// What a point inside the overlay resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Content,
    Backdrop,
}

/// Initial popup behavior and backdrop appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupConfig {
    pub interactive: bool,
    pub penetrable: bool,
    pub dismissible: bool,
    pub backdrop: BackdropConfig,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            interactive: true,
            penetrable: false,
            dismissible: false,
            backdrop: BackdropConfig::default(),
        }
    }
}

/// Lifecycle callback slot
pub type Callback = Box<dyn FnMut()>;

#[derive(Default)]
struct Callbacks {
    will_show: Option<Callback>,
    did_show: Option<Callback>,
    will_hide: Option<Callback>,
    did_hide: Option<Callback>,
}

fn fire(callback: &mut Option<Callback>) {
    if let Some(cb) = callback.as_mut() {
        cb();
    }
}

struct InFlight {
    watch: CompletionWatch,
    then: Option<Box<dyn FnOnce()>>,
}

/// A content view presented above a container with a backdrop.
///
/// The container and content are reached through the [`Container`] and
/// [`ContentView`] traits; pass `Rc<RefCell<_>>` handles to keep using them
/// elsewhere. Hosts call [`advance`](Popup::advance) every frame while
/// [`is_animating`](Popup::is_animating) is true.
pub struct Popup<C: Container, V: ContentView> {
    id: OverlayId,
    container: C,
    content: V,
    layout: Layout,
    strategy: Box<dyn AnimationStrategy>,
    driver: Box<dyn AnimationDriver>,
    backdrop: Backdrop,
    scene: Scene,
    flags: PopupFlags,
    phase: Phase,
    in_flight: Option<InFlight>,
    callbacks: Callbacks,
}

impl<C: Container, V: ContentView> Popup<C, V> {
    /// Create a hidden popup and let the strategy prepare the source scene
    pub fn new(
        container: C,
        content: V,
        layout: Layout,
        strategy: impl AnimationStrategy + 'static,
    ) -> Self {
        let mut popup = Self {
            id: OverlayId::next(),
            container,
            content,
            layout,
            strategy: Box::new(strategy),
            driver: Box::new(Timeline::new()),
            backdrop: Backdrop::default(),
            scene: Scene::default(),
            flags: PopupFlags::empty(),
            phase: Phase::Hidden,
            in_flight: None,
            callbacks: Callbacks::default(),
        };
        popup.apply_config(PopupConfig::default());

        let mut stage = Stage {
            scene: &mut popup.scene,
            container: popup.container.bounds(),
            content_size: popup.content.intrinsic_size(),
            layout: &popup.layout,
        };
        popup.strategy.setup(&mut stage);
        popup.content.apply(&popup.scene.content);
        log::debug!("popup {:?}: created with {:?}", popup.id, popup.layout);
        popup
    }

    pub fn with_config(mut self, config: PopupConfig) -> Self {
        self.apply_config(config);
        self
    }

    /// Replace the default [`Timeline`] driver
    pub fn with_driver(mut self, driver: impl AnimationDriver + 'static) -> Self {
        self.driver = Box::new(driver);
        self
    }

    fn apply_config(&mut self, config: PopupConfig) {
        self.backdrop = Backdrop::new(config.backdrop);
        self.set_interactive(config.interactive);
        self.set_penetrable(config.penetrable);
        self.set_dismissible(config.dismissible);
    }

    pub fn id(&self) -> OverlayId {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::AnimatingIn | Phase::AnimatingOut)
    }

    pub fn is_displayed(&self) -> bool {
        self.phase == Phase::Displayed
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn content(&self) -> &V {
        &self.content
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn backdrop_mut(&mut self) -> &mut Backdrop {
        &mut self.backdrop
    }

    pub fn flags(&self) -> PopupFlags {
        self.flags
    }

    pub fn is_interactive(&self) -> bool {
        self.flags.contains(PopupFlags::INTERACTIVE)
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.flags.set(PopupFlags::INTERACTIVE, interactive);
    }

    pub fn is_penetrable(&self) -> bool {
        self.flags.contains(PopupFlags::PENETRABLE)
    }

    pub fn set_penetrable(&mut self, penetrable: bool) {
        self.flags.set(PopupFlags::PENETRABLE, penetrable);
    }

    pub fn is_dismissible(&self) -> bool {
        self.flags.contains(PopupFlags::DISMISSIBLE)
    }

    /// Backdrop taps hide the popup. Also toggles backdrop interactivity.
    pub fn set_dismissible(&mut self, dismissible: bool) {
        self.flags.set(PopupFlags::DISMISSIBLE, dismissible);
        self.backdrop.set_interactive(dismissible);
    }

    pub fn on_will_show(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.will_show = Some(Box::new(f));
    }

    pub fn on_did_show(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.did_show = Some(Box::new(f));
    }

    pub fn on_will_hide(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.will_hide = Some(Box::new(f));
    }

    pub fn on_did_hide(&mut self, f: impl FnMut() + 'static) {
        self.callbacks.did_hide = Some(Box::new(f));
    }

    pub fn show(&mut self, animated: bool) {
        self.present(animated, None);
    }

    /// Like [`show`](Popup::show), running `then` right before `did_show`.
    /// `then` is dropped along with the call if the popup is not hidden.
    pub fn show_then(&mut self, animated: bool, then: impl FnOnce() + 'static) {
        self.present(animated, Some(Box::new(then)));
    }

    pub fn hide(&mut self, animated: bool) {
        self.dismiss(animated, None);
    }

    /// Like [`hide`](Popup::hide), running `then` after detaching and right
    /// before `did_hide`.
    pub fn hide_then(&mut self, animated: bool, then: impl FnOnce() + 'static) {
        self.dismiss(animated, Some(Box::new(then)));
    }

    fn present(&mut self, animated: bool, then: Option<Box<dyn FnOnce()>>) {
        if self.phase != Phase::Hidden {
            log::debug!("popup {:?}: show ignored while {:?}", self.id, self.phase);
            return;
        }
        self.phase = Phase::AnimatingIn;
        self.container.attach(self.id);
        log::debug!("popup {:?}: showing (animated: {})", self.id, animated);
        fire(&mut self.callbacks.will_show);

        let (done, watch) = completion();
        self.in_flight = Some(InFlight { watch, then });
        let mut stage = Stage {
            scene: &mut self.scene,
            container: self.container.bounds(),
            content_size: self.content.intrinsic_size(),
            layout: &self.layout,
        };
        self.strategy.entrance(&mut stage, &mut *self.driver, animated, done);
        self.pump(Duration::ZERO);
    }

    fn dismiss(&mut self, animated: bool, then: Option<Box<dyn FnOnce()>>) {
        if self.phase != Phase::Displayed {
            log::debug!("popup {:?}: hide ignored while {:?}", self.id, self.phase);
            return;
        }
        self.phase = Phase::AnimatingOut;
        log::debug!("popup {:?}: hiding (animated: {})", self.id, animated);
        fire(&mut self.callbacks.will_hide);

        let (done, watch) = completion();
        self.in_flight = Some(InFlight { watch, then });
        let mut stage = Stage {
            scene: &mut self.scene,
            container: self.container.bounds(),
            content_size: self.content.intrinsic_size(),
            layout: &self.layout,
        };
        self.strategy.exit(&mut stage, &mut *self.driver, animated, done);
        self.pump(Duration::ZERO);
    }

    /// Advance the running transition by `dt`. Call once per frame.
    pub fn advance(&mut self, dt: Duration) {
        if self.in_flight.is_none() {
            return;
        }
        self.pump(dt);
    }

    fn pump(&mut self, dt: Duration) {
        if let Some(scene) = self.driver.advance(dt) {
            log::trace!("popup {:?}: frame {:?}", self.id, scene);
            self.scene = scene;
        }
        self.content.apply(&self.scene.content);

        let finished = match &self.in_flight {
            Some(in_flight) => in_flight.watch.is_fired() || in_flight.watch.is_abandoned(),
            None => false,
        };
        if finished {
            self.finish();
        }
    }

    fn finish(&mut self) {
        let then = self.in_flight.take().and_then(|in_flight| in_flight.then);
        match self.phase {
            Phase::AnimatingIn => {
                self.phase = Phase::Displayed;
                log::debug!("popup {:?}: displayed", self.id);
                if let Some(then) = then {
                    then();
                }
                fire(&mut self.callbacks.did_show);
            }
            Phase::AnimatingOut => {
                self.phase = Phase::Hidden;
                self.container.detach(self.id);
                log::debug!("popup {:?}: hidden and detached", self.id);
                if let Some(then) = then {
                    then();
                }
                fire(&mut self.callbacks.did_hide);
            }
            phase => log::warn!("popup {:?}: completion while {:?}", self.id, phase),
        }
    }

    /// Bounds covered by the overlay (and its backdrop)
    pub fn bounds(&self) -> Rect {
        self.container.bounds()
    }

    /// Resolve a point in container coordinates to a target.
    ///
    /// Returns `None` when the overlay should not receive the event: while
    /// hidden, inside non-interactive content, or outside the content of a
    /// penetrable popup.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<HitTarget> {
        if self.phase == Phase::Hidden {
            return None;
        }
        if self.content_contains(x, y) {
            return self.is_interactive().then_some(HitTarget::Content);
        }
        if self.is_penetrable() {
            return None;
        }
        match self.backdrop.hit_test(self.bounds(), x, y) {
            Some(BackdropLayer::Surface) => Some(HitTarget::Backdrop),
            _ => None,
        }
    }

    /// Whether the drawn content (frame plus transform) covers the point
    fn content_contains(&self, x: f32, y: f32) -> bool {
        let ContentState { frame, transform, .. } = &self.scene.content;
        if transform.is_identity() {
            return frame.contains(x, y);
        }
        match transform.invert_point(x - frame.x, y - frame.y, frame.width, frame.height) {
            Some((lx, ly)) => frame.contains(lx + frame.x, ly + frame.y),
            None => false,
        }
    }

    /// Deliver a tap. A backdrop hit on a dismissible popup hides it animated.
    pub fn tap(&mut self, x: f32, y: f32) -> Option<HitTarget> {
        let target = self.hit_test(x, y);
        if target == Some(HitTarget::Backdrop)
            && self.is_dismissible()
            && self.backdrop.is_interactive()
        {
            log::debug!("popup {:?}: backdrop tapped", self.id);
            self.hide(true);
        }
        target
    }
}

impl<C: Container, V: ContentView> Drop for Popup<C, V> {
    fn drop(&mut self) {
        // Release the watch first so the driver's pending completion drops quietly
        self.in_flight = None;
        if self.phase != Phase::Hidden {
            log::debug!("popup {:?}: dropped while {:?}; detaching", self.id, self.phase);
            self.container.detach(self.id);
        }
    }
}

impl<C: Container, V: ContentView> std::fmt::Debug for Popup<C, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Popup")
            .field("id", &self.id)
            .field("phase", &self.phase)
            .field("flags", &self.flags)
            .field("layout", &self.layout)
            .field("scene", &self.scene)
            .finish()
    }
}
