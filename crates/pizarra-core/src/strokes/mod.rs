//! Stroke definitions for the whiteboard.

mod ellipse;
mod freehand;
mod rectangle;

pub use ellipse::Ellipse;
pub use freehand::FreehandPath;
pub use rectangle::Rectangle;

use crate::color::Rgba;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies a stroke from the moment input starts until it leaves history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrokeHandle(Uuid);

impl StrokeHandle {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for StrokeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// What an input-start creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrokeKind {
    /// Painted freehand path.
    Pen,
    /// Freehand path that removes pixels.
    Eraser,
    Rectangle,
    Ellipse,
}

impl StrokeKind {
    /// Freehand kinds accumulate points; shape kinds track a drag end.
    pub fn is_freehand(self) -> bool {
        matches!(self, StrokeKind::Pen | StrokeKind::Eraser)
    }
}

/// How a freehand path is composited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeMode {
    #[default]
    Paint,
    /// Covered pixels become transparent.
    Erase,
}

/// Style snapshot taken from the toolbar when a stroke begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Outline color.
    pub stroke_color: Rgba,
    /// Interior color for rectangles and ellipses.
    pub fill_color: Rgba,
    /// Line width, always positive.
    pub width: f64,
}

impl StrokeStyle {
    pub const DEFAULT_WIDTH: f64 = 3.0;

    /// Create a style, falling back to the default width when `width` is not a
    /// positive finite number.
    pub fn new(stroke_color: Rgba, fill_color: Rgba, width: f64) -> Self {
        let width = if width.is_finite() && width > 0.0 {
            width
        } else {
            Self::DEFAULT_WIDTH
        };
        Self {
            stroke_color,
            fill_color,
            width,
        }
    }

    /// The same style with an unusable width replaced by the default.
    pub fn normalized(self) -> Self {
        Self::new(self.stroke_color, self.fill_color, self.width)
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Rgba::opaque(0x11, 0x18, 0x27),
            fill_color: Rgba::white(),
            width: Self::DEFAULT_WIDTH,
        }
    }
}

/// Common behavior of every stroke variant.
pub trait StrokeTrait {
    /// Handle assigned when the stroke began.
    fn handle(&self) -> StrokeHandle;

    /// Geometric bounding box, ignoring line width.
    fn bounds(&self) -> Rect;

    /// Outline path used for rendering.
    fn to_path(&self) -> BezPath;

    /// Line width.
    fn width(&self) -> f64;

    /// Outline color.
    fn stroke_color(&self) -> Rgba;
}

/// A drawable unit in history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stroke {
    Freehand(FreehandPath),
    Rectangle(Rectangle),
    Ellipse(Ellipse),
}

impl Stroke {
    /// Create a fresh stroke of `kind` anchored at `origin`.
    pub(crate) fn begin(kind: StrokeKind, style: StrokeStyle, origin: Point) -> Self {
        let handle = StrokeHandle::new();
        let style = style.normalized();
        match kind {
            StrokeKind::Pen => Stroke::Freehand(FreehandPath::new(
                handle,
                StrokeMode::Paint,
                style,
                origin,
            )),
            StrokeKind::Eraser => Stroke::Freehand(FreehandPath::new(
                handle,
                StrokeMode::Erase,
                style,
                origin,
            )),
            StrokeKind::Rectangle => Stroke::Rectangle(Rectangle::new(handle, style, origin)),
            StrokeKind::Ellipse => Stroke::Ellipse(Ellipse::new(handle, style, origin)),
        }
    }

    pub fn kind(&self) -> StrokeKind {
        match self {
            Stroke::Freehand(s) => match s.mode {
                StrokeMode::Paint => StrokeKind::Pen,
                StrokeMode::Erase => StrokeKind::Eraser,
            },
            Stroke::Rectangle(_) => StrokeKind::Rectangle,
            Stroke::Ellipse(_) => StrokeKind::Ellipse,
        }
    }

    pub fn handle(&self) -> StrokeHandle {
        self.as_trait().handle()
    }

    pub fn bounds(&self) -> Rect {
        self.as_trait().bounds()
    }

    pub fn to_path(&self) -> BezPath {
        self.as_trait().to_path()
    }

    pub fn width(&self) -> f64 {
        self.as_trait().width()
    }

    pub fn stroke_color(&self) -> Rgba {
        self.as_trait().stroke_color()
    }

    /// Feed a new input sample into an in-progress stroke.
    pub(crate) fn extend(&mut self, point: Point) {
        match self {
            Stroke::Freehand(s) => s.extend(point),
            Stroke::Rectangle(s) => s.extend(point),
            Stroke::Ellipse(s) => s.extend(point),
        }
    }

    /// Get the freehand path if this stroke is one.
    pub fn as_freehand(&self) -> Option<&FreehandPath> {
        match self {
            Stroke::Freehand(s) => Some(s),
            _ => None,
        }
    }

    /// Get the rectangle if this stroke is one.
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Stroke::Rectangle(s) => Some(s),
            _ => None,
        }
    }

    /// Get the ellipse if this stroke is one.
    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            Stroke::Ellipse(s) => Some(s),
            _ => None,
        }
    }

    fn as_trait(&self) -> &dyn StrokeTrait {
        match self {
            Stroke::Freehand(s) => s,
            Stroke::Rectangle(s) => s,
            Stroke::Ellipse(s) => s,
        }
    }
}
