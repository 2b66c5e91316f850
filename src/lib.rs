//! Popup overlays with pluggable entrance and exit animations.
//!
//! A [`Popup`] presents a content view above a container, with a tinted or
//! blurred [`Backdrop`] behind it. How the content enters and leaves is decided
//! by an [`AnimationStrategy`]; [`Animator`] provides fade, zoom, slide, spring
//! and custom effects. Placement is described by a [`Layout`].
//!
//! The host view system is reached through the [`Container`] and
//! [`ContentView`] traits, and time is advanced by an [`AnimationDriver`]
//! ([`Timeline`] by default, ticked through [`Popup::advance`]).
//!
//! # Example
//! ```ignore
//! use popover::prelude::*;
//!
//! let mut popup = Popup::new(window, card, Layout::top(100.0), Animator::slide(SlideDirection::Down));
//! popup.set_dismissible(true);
//! popup.on_did_hide(|| log::info!("gone"));
//! popup.show(true);
//!
//! // every frame
//! popup.advance(frame_time);
//! ```

pub mod animation;
pub mod backdrop;
pub mod completion;
pub mod driver;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod popup;
pub mod scene;
pub mod strategy;

pub use backdrop::{Backdrop, BackdropConfig, BackdropStyle, BlurStyle};
pub use driver::{AnimationDriver, Immediate, Timeline};
pub use host::{Container, ContentView, OverlayId};
pub use layout::Layout;
pub use popup::{HitTarget, Phase, Popup, PopupConfig};
pub use strategy::{AnimationStrategy, Animator};

pub mod prelude {
    pub use crate::animation::{TimingFunction, Transform, Transition};
    pub use crate::backdrop::{Backdrop, BackdropConfig, BackdropStyle, BlurStyle};
    pub use crate::completion::Completion;
    pub use crate::driver::{AnimationDriver, Immediate, Timeline};
    pub use crate::geometry::{Color, Rect, Size};
    pub use crate::host::{Container, ContentView, OverlayId};
    pub use crate::layout::{Edge, Layout};
    pub use crate::popup::{HitTarget, Phase, Popup, PopupConfig, PopupFlags};
    pub use crate::scene::{ContentState, Scene};
    pub use crate::strategy::{
        transition_to, AnimationStrategy, Animator, CustomEffect, Effect, SlideDirection, Stage,
    };
}
