//! Narrow interfaces to the host view system.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::geometry::{Rect, Size};
use crate::scene::ContentState;

/// Unique identifier for a popup overlay
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OverlayId(u64);

static NEXT_OVERLAY_ID: AtomicU64 = AtomicU64::new(1);

impl OverlayId {
    pub fn next() -> Self {
        OverlayId(NEXT_OVERLAY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

/// The view a popup is presented in
pub trait Container {
    /// Bounds the backdrop covers, in the same space as layout frames
    fn bounds(&self) -> Rect;

    /// Insert the overlay (backdrop + content) above existing children
    fn attach(&mut self, overlay: OverlayId);

    /// Remove the overlay from this container
    fn detach(&mut self, overlay: OverlayId);
}

/// The caller-supplied content shown inside the popup
pub trait ContentView {
    /// Natural size, used when the layout does not fix one
    fn intrinsic_size(&self) -> Size;

    /// Apply geometry and opacity for the current frame
    fn apply(&mut self, state: &ContentState);
}

impl<T: Container + ?Sized> Container for Rc<RefCell<T>> {
    fn bounds(&self) -> Rect {
        self.borrow().bounds()
    }

    fn attach(&mut self, overlay: OverlayId) {
        self.borrow_mut().attach(overlay)
    }

    fn detach(&mut self, overlay: OverlayId) {
        self.borrow_mut().detach(overlay)
    }
}

impl<T: ContentView + ?Sized> ContentView for Rc<RefCell<T>> {
    fn intrinsic_size(&self) -> Size {
        self.borrow().intrinsic_size()
    }

    fn apply(&mut self, state: &ContentState) {
        self.borrow_mut().apply(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_ids_are_unique() {
        let a = OverlayId::next();
        let b = OverlayId::next();
        assert_ne!(a, b);
        assert!(b.get() > a.get());
    }
}
