//! Freehand pen and eraser paths.

use super::{StrokeHandle, StrokeMode, StrokeStyle, StrokeTrait};
use crate::color::Rgba;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand path (series of input samples).
///
/// Always holds at least the point where input started. Points are only ever
/// appended, and only while the path is in progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreehandPath {
    pub(crate) handle: StrokeHandle,
    /// Paint or erase.
    pub mode: StrokeMode,
    /// Line color (ignored when erasing).
    pub color: Rgba,
    /// Line width.
    pub width: f64,
    points: Vec<Point>,
}

impl FreehandPath {
    pub(crate) fn new(
        handle: StrokeHandle,
        mode: StrokeMode,
        style: StrokeStyle,
        origin: Point,
    ) -> Self {
        Self {
            handle,
            mode,
            color: style.stroke_color,
            width: style.width,
            points: vec![origin],
        }
    }

    /// Append a sample.
    pub(crate) fn extend(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Samples in input order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a path built through a drawing session.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A single-sample path renders as a dot.
    pub fn is_dot(&self) -> bool {
        self.points.len() == 1
    }

    pub fn is_eraser(&self) -> bool {
        self.mode == StrokeMode::Erase
    }
}

impl StrokeTrait for FreehandPath {
    fn handle(&self) -> StrokeHandle {
        self.handle
    }

    fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };
        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(*first, *first), |rect, p| {
                rect.union_pt(*p)
            })
    }

    fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some((first, rest)) = self.points.split_first() else {
            return path;
        };

        path.move_to(*first);
        if rest.is_empty() {
            // Zero-length segment so round caps still produce a dot.
            path.line_to(*first);
        }
        for point in rest {
            path.line_to(*point);
        }
        path
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn stroke_color(&self) -> Rgba {
        self.color
    }
}
