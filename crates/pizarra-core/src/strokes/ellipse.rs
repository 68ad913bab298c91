//! Ellipse shape.

use super::{StrokeHandle, StrokeStyle, StrokeTrait};
use crate::color::Rgba;
use kurbo::{BezPath, Ellipse as KurboEllipse, Point, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};

/// An axis-aligned ellipse inscribed in the box spanned by `start` and `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
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

impl Ellipse {
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

    /// Midpoint of the drag.
    pub fn center(&self) -> Point {
        self.start.midpoint(self.end)
    }

    /// Half the absolute drag delta on each axis.
    pub fn radii(&self) -> Vec2 {
        Vec2::new(
            (self.end.x - self.start.x).abs() / 2.0,
            (self.end.y - self.start.y).abs() / 2.0,
        )
    }

    /// Get as a kurbo Ellipse.
    pub fn as_kurbo(&self) -> KurboEllipse {
        KurboEllipse::new(self.center(), self.radii(), 0.0)
    }
}

impl StrokeTrait for Ellipse {
    fn handle(&self) -> StrokeHandle {
        self.handle
    }

    fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    fn to_path(&self) -> BezPath {
        self.as_kurbo().to_path(0.1)
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn stroke_color(&self) -> Rgba {
        self.stroke_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragged(start: Point, end: Point) -> Ellipse {
        let mut ellipse = Ellipse::new(StrokeHandle::new(), StrokeStyle::default(), start);
        ellipse.extend(end);
        ellipse
    }

    #[test]
    fn test_center_and_radii() {
        let ellipse = dragged(Point::new(20.0, 30.0), Point::new(80.0, 70.0));
        assert_eq!(ellipse.center(), Point::new(50.0, 50.0));
        assert!((ellipse.radii().x - 30.0).abs() < f64::EPSILON);
        assert!((ellipse.radii().y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_radii_ignore_drag_direction() {
        let ellipse = dragged(Point::new(80.0, 70.0), Point::new(20.0, 30.0));
        assert_eq!(ellipse.center(), Point::new(50.0, 50.0));
        assert!((ellipse.radii().x - 30.0).abs() < f64::EPSILON);
        assert!((ellipse.radii().y - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounds_match_drag_box() {
        let ellipse = dragged(Point::new(80.0, 70.0), Point::new(20.0, 30.0));
        let bounds = ellipse.bounds();
        assert!((bounds.x0 - 20.0).abs() < f64::EPSILON);
        assert!((bounds.y0 - 30.0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 80.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_degenerate_ellipse_has_zero_radii() {
        let ellipse = Ellipse::new(StrokeHandle::new(), StrokeStyle::default(), Point::new(5.0, 5.0));
        assert_eq!(ellipse.radii(), Vec2::ZERO);
        assert_eq!(ellipse.center(), Point::new(5.0, 5.0));
    }
}
