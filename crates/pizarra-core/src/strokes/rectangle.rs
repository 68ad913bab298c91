//! Rectangle shape.

use super::{StrokeHandle, StrokeStyle, StrokeTrait};
use crate::color::Rgba;
use kurbo::{BezPath, Point, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle spanned by a drag from `start` to `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) handle: StrokeHandle,
    /// Outline color.
    pub stroke_color: Rgba,
    /// Interior color.
    pub fill_color: Rgba,
    /// Outline width.
    pub width: f64,
    /// Where the drag started.
    pub start: Point,
    /// Where the drag currently is (frozen on commit).
    pub end: Point,
}

impl Rectangle {
    pub(crate) fn new(handle: StrokeHandle, style: StrokeStyle, origin: Point) -> Self {
        Self {
            handle,
            stroke_color: style.stroke_color,
            fill_color: style.fill_color,
            width: style.width,
            start: origin,
            end: origin,
        }
    }

    pub(crate) fn extend(&mut self, point: Point) {
        self.end = point;
    }

    /// Normalized box: min corner plus non-negative size.
    pub fn as_rect(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    /// Whether the drag never left its starting point on at least one axis.
    pub fn is_degenerate(&self) -> bool {
        let rect = self.as_rect();
        rect.width() == 0.0 || rect.height() == 0.0
    }
}

impl StrokeTrait for Rectangle {
    fn handle(&self) -> StrokeHandle {
        self.handle
    }

    fn bounds(&self) -> Rect {
        self.as_rect()
    }

    fn to_path(&self) -> BezPath {
        self.as_rect().to_path(0.1)
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn stroke_color(&self) -> Rgba {
        self.stroke_color
    }
}
