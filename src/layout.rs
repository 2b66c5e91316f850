//! Placement rules for popup content relative to its container.

use crate::geometry::{Rect, Size};

/// Container edge a popup can be pinned to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Leading,
    Trailing,
}

impl Edge {
    /// True for edges whose margin runs along the y axis
    pub fn is_vertical(&self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// Content centered in the container, optionally nudged and sized
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Center {
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

/// Content pinned to one edge, centered along the other axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pinned {
    pub edge: Edge,
    /// Distance from the pinned edge
    pub margin: f32,
    /// Offset along the cross axis, from the centered position
    pub offset: f32,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl Pinned {
    pub const DEFAULT_MARGIN: f32 = 10.0;

    pub fn new(edge: Edge) -> Self {
        Self {
            edge,
            margin: Self::DEFAULT_MARGIN,
            offset: 0.0,
            width: None,
            height: None,
        }
    }
}

/// How the content is placed inside the container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Layout {
    Center(Center),
    Edge(Pinned),
    /// Explicit rectangle in container coordinates
    Frame(Rect),
}

impl Layout {
    pub fn center() -> Self {
        Layout::Center(Center::default())
    }

    pub fn top(margin: f32) -> Self {
        Self::pinned(Edge::Top, margin)
    }

    pub fn bottom(margin: f32) -> Self {
        Self::pinned(Edge::Bottom, margin)
    }

    pub fn leading(margin: f32) -> Self {
        Self::pinned(Edge::Leading, margin)
    }

    pub fn trailing(margin: f32) -> Self {
        Self::pinned(Edge::Trailing, margin)
    }

    pub fn pinned(edge: Edge, margin: f32) -> Self {
        Layout::Edge(Pinned {
            margin,
            ..Pinned::new(edge)
        })
    }

    pub fn frame(rect: Rect) -> Self {
        Layout::Frame(rect)
    }

    /// Set a fixed content size. Ignored by `Frame`, which already carries one.
    pub fn sized(self, width: f32, height: f32) -> Self {
        match self {
            Layout::Center(c) => Layout::Center(Center {
                width: Some(width),
                height: Some(height),
                ..c
            }),
            Layout::Edge(p) => Layout::Edge(Pinned {
                width: Some(width),
                height: Some(height),
                ..p
            }),
            frame @ Layout::Frame(_) => frame,
        }
    }

    /// Offset along the axes that are not fixed by an edge or frame
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        match self {
            Layout::Center(c) => Layout::Center(Center {
                offset_x: dx,
                offset_y: dy,
                ..c
            }),
            Layout::Edge(p) => Layout::Edge(Pinned {
                offset: if p.edge.is_vertical() { dx } else { dy },
                ..p
            }),
            frame @ Layout::Frame(_) => frame,
        }
    }

    pub fn is_frame(&self) -> bool {
        matches!(self, Layout::Frame(_))
    }

    /// Resolve the displayed frame of content whose natural size is `intrinsic`
    pub fn resolve(&self, container: Rect, intrinsic: Size) -> Rect {
        match self {
            Layout::Center(c) => {
                let size = explicit_size(c.width, c.height, intrinsic);
                Rect::new(
                    centered(container.x, container.width, size.width) + c.offset_x,
                    centered(container.y, container.height, size.height) + c.offset_y,
                    size.width,
                    size.height,
                )
            }
            Layout::Edge(p) => {
                let size = explicit_size(p.width, p.height, intrinsic);
                let (x, y) = match p.edge {
                    Edge::Top => (
                        centered(container.x, container.width, size.width) + p.offset,
                        container.y + p.margin,
                    ),
                    Edge::Bottom => (
                        centered(container.x, container.width, size.width) + p.offset,
                        container.max_y() - p.margin - size.height,
                    ),
                    Edge::Leading => (
                        container.x + p.margin,
                        centered(container.y, container.height, size.height) + p.offset,
                    ),
                    Edge::Trailing => (
                        container.max_x() - p.margin - size.width,
                        centered(container.y, container.height, size.height) + p.offset,
                    ),
                };
                Rect::new(x, y, size.width, size.height)
            }
            Layout::Frame(rect) => *rect,
        }
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::center()
    }
}

fn explicit_size(width: Option<f32>, height: Option<f32>, intrinsic: Size) -> Size {
    Size::new(
        width.unwrap_or(intrinsic.width),
        height.unwrap_or(intrinsic.height),
    )
}

fn centered(start: f32, extent: f32, size: f32) -> f32 {
    start + (extent - size) / 2.0
}
