//! Full-bleed surface drawn behind popup content.
//!
//! The backdrop is a tint color, optionally with a blur pass underneath it.
//! The tint always composites, so a blurred backdrop with a dark tint reads
//! darker than the blur alone; set the tint to [`Color::TRANSPARENT`] for a
//! plain blur.

use crate::geometry::{Color, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackdropStyle {
    #[default]
    Solid,
    Blurred,
}

/// Appearance of the blur pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurStyle {
    ExtraLight,
    Light,
    #[default]
    Dark,
}

/// Blur pass layered between the surface and the tint.
/// Only exists while the backdrop style is [`BackdropStyle::Blurred`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlurPass {
    pub style: BlurStyle,
    pub intensity: f32,
}

/// One composited layer, listed bottom to top by [`Backdrop::layers`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackdropLayer {
    /// The tappable surface itself
    Surface,
    Blur(BlurPass),
    Tint(Color),
}

/// Initial backdrop appearance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BackdropConfig {
    pub style: BackdropStyle,
    pub tint: Color,
    pub blur_style: BlurStyle,
    pub blur_intensity: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            style: BackdropStyle::Solid,
            tint: Color::BLACK.with_alpha(0.3),
            blur_style: BlurStyle::Dark,
            blur_intensity: 1.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Backdrop {
    style: BackdropStyle,
    tint: Color,
    blur_style: BlurStyle,
    blur_intensity: f32,
    blur: Option<BlurPass>,
    interactive: bool,
}

impl Backdrop {
    pub fn new(config: BackdropConfig) -> Self {
        let mut backdrop = Self {
            style: BackdropStyle::Solid,
            tint: config.tint,
            blur_style: config.blur_style,
            blur_intensity: config.blur_intensity,
            blur: None,
            interactive: false,
        };
        backdrop.set_style(config.style);
        backdrop
    }

    pub fn style(&self) -> BackdropStyle {
        self.style
    }

    /// Switch between solid and blurred. The blur pass is built on the first
    /// switch to `Blurred` and dropped on the way back to `Solid`.
    pub fn set_style(&mut self, style: BackdropStyle) {
        self.style = style;
        self.refresh_blur();
    }

    pub fn tint(&self) -> Color {
        self.tint
    }

    pub fn set_tint(&mut self, tint: Color) {
        self.tint = tint;
    }

    pub fn blur_style(&self) -> BlurStyle {
        self.blur_style
    }

    pub fn set_blur_style(&mut self, blur_style: BlurStyle) {
        self.blur_style = blur_style;
        self.refresh_blur();
    }

    pub fn blur_intensity(&self) -> f32 {
        self.blur_intensity
    }

    pub fn set_blur_intensity(&mut self, intensity: f32) {
        self.blur_intensity = intensity.clamp(0.0, 1.0);
        self.refresh_blur();
    }

    /// The live blur pass, if any
    pub fn blur(&self) -> Option<&BlurPass> {
        self.blur.as_ref()
    }

    /// Whether taps on the surface are delivered (enables tap-to-dismiss)
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    fn refresh_blur(&mut self) {
        match self.style {
            BackdropStyle::Solid => {
                if self.blur.take().is_some() {
                    log::debug!("backdrop: blur pass released");
                }
            }
            BackdropStyle::Blurred => {
                if self.blur.is_none() {
                    log::debug!("backdrop: blur pass created ({:?})", self.blur_style);
                }
                self.blur = Some(BlurPass {
                    style: self.blur_style,
                    intensity: self.blur_intensity,
                });
            }
        }
    }

    /// Layers to composite, bottom to top. The tint is always on top.
    pub fn layers(&self) -> Vec<BackdropLayer> {
        let mut layers = vec![BackdropLayer::Surface];
        if let Some(blur) = self.blur {
            layers.push(BackdropLayer::Blur(blur));
        }
        layers.push(BackdropLayer::Tint(self.tint));
        layers
    }

    /// Hit test a point against the backdrop covering `bounds`.
    ///
    /// The blur pass sits above the surface but never receives hits: anything
    /// landing on it is attributed to the surface.
    pub fn hit_test(&self, bounds: Rect, x: f32, y: f32) -> Option<BackdropLayer> {
        if !bounds.contains(x, y) {
            return None;
        }
        // Tint is painted by the surface and takes no hits of its own
        self.layers()
            .into_iter()
            .rev()
            .find_map(|layer| match layer {
                BackdropLayer::Tint(_) => None,
                BackdropLayer::Blur(_) => Some(BackdropLayer::Surface),
                surface => Some(surface),
            })
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new(BackdropConfig::default())
    }
}
