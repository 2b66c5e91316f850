#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use popover::prelude::*;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Container that records attach/detach calls
pub struct Window {
    pub bounds: Rect,
    pub children: Vec<OverlayId>,
    pub attach_count: usize,
}

impl Window {
    pub fn new(width: f32, height: f32) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            bounds: Rect::new(0.0, 0.0, width, height),
            children: Vec::new(),
            attach_count: 0,
        }))
    }
}

impl Container for Window {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn attach(&mut self, overlay: OverlayId) {
        self.attach_count += 1;
        self.children.push(overlay);
    }

    fn detach(&mut self, overlay: OverlayId) {
        self.children.retain(|id| *id != overlay);
    }
}

/// Content view that remembers the last state pushed to it
pub struct Card {
    pub size: Size,
    pub applied: Option<ContentState>,
}

impl Card {
    pub fn new(width: f32, height: f32) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            size: Size::new(width, height),
            applied: None,
        }))
    }
}

impl ContentView for Card {
    fn intrinsic_size(&self) -> Size {
        self.size
    }

    fn apply(&mut self, state: &ContentState) {
        self.applied = Some(*state);
    }
}

/// Shared event log for lifecycle ordering checks
#[derive(Clone, Default)]
pub struct Events(Rc<RefCell<Vec<String>>>);

impl Events {
    pub fn push(&self, event: impl Into<String>) {
        self.0.borrow_mut().push(event.into());
    }

    pub fn recorder(&self, event: &'static str) -> impl FnMut() + 'static {
        let events = self.clone();
        move || events.push(event)
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.0.borrow_mut())
    }
}

pub type TestPopup = Popup<Rc<RefCell<Window>>, Rc<RefCell<Card>>>;

/// Popup with every lifecycle callback wired to `events`
pub fn observed(
    window: &Rc<RefCell<Window>>,
    card: &Rc<RefCell<Card>>,
    layout: Layout,
    strategy: impl AnimationStrategy + 'static,
    events: &Events,
) -> TestPopup {
    let mut popup = Popup::new(window.clone(), card.clone(), layout, strategy);
    popup.on_will_show(events.recorder("will_show"));
    popup.on_did_show(events.recorder("did_show"));
    popup.on_will_hide(events.recorder("will_hide"));
    popup.on_did_hide(events.recorder("did_hide"));
    popup
}

/// Tick until the running transition finishes (bounded)
pub fn settle(popup: &mut TestPopup) {
    for _ in 0..240 {
        if !popup.is_animating() {
            return;
        }
        popup.advance(std::time::Duration::from_millis(16));
    }
    panic!("popup did not settle: {:?}", popup);
}
