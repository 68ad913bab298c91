//! CPU raster renderer backed by a tiny-skia pixmap.

use crate::export::{RgbaImage, encode_png};
use crate::renderer::{RenderContext, RenderResult, Renderer, RendererError};
use kurbo::{BezPath, PathEl};
use peniko::Color;
use pizarra_core::color::Rgba;
use pizarra_core::strokes::{FreehandPath, Stroke, StrokeTrait};
use tiny_skia as sk;

/// Rendered committed history, reused while the history is unchanged.
#[derive(Debug, Clone)]
struct Snapshot {
    revision: u64,
    stroke_count: usize,
    pixmap: sk::Pixmap,
}

/// Immediate-mode renderer drawing straight into an RGBA pixmap.
#[derive(Debug, Clone)]
pub struct RasterRenderer {
    /// The drawing surface.
    surface: sk::Pixmap,
    /// Cached rendering of committed strokes.
    snapshot: Option<Snapshot>,
    /// Whether `render_all` may reuse `snapshot`.
    cache_enabled: bool,
}

impl RasterRenderer {
    /// Create a renderer with a transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        Ok(Self {
            surface: allocate(width, height)?,
            snapshot: None,
            cache_enabled: true,
        })
    }

    /// Enable or disable reuse of the committed-history snapshot.
    pub fn with_snapshot_cache(mut self, enabled: bool) -> Self {
        self.set_snapshot_cache(enabled);
        self
    }

    pub fn set_snapshot_cache(&mut self, enabled: bool) {
        self.cache_enabled = enabled;
        if !enabled {
            self.snapshot = None;
        }
    }

    /// Whether a snapshot is cached for `revision`.
    pub fn has_snapshot(&self, revision: u64) -> bool {
        self.snapshot
            .as_ref()
            .is_some_and(|s| s.revision == revision)
    }

    /// The drawing surface.
    pub fn pixmap(&self) -> &sk::Pixmap {
        &self.surface
    }

    /// Straight-alpha color of a pixel, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let color = self.surface.pixel(x, y)?.demultiply();
        Some(Rgba::new(color.red(), color.green(), color.blue(), color.alpha()))
    }

    /// Copy the surface out as straight-alpha RGBA8.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let rgba_data = self
            .surface
            .pixels()
            .iter()
            .flat_map(|p| {
                let c = p.demultiply();
                [c.red(), c.green(), c.blue(), c.alpha()]
            })
            .collect();
        RgbaImage {
            rgba_data,
            width: self.surface.width(),
            height: self.surface.height(),
        }
    }

    /// Encode the current surface contents as PNG.
    pub fn encode_png(&self) -> RenderResult<Vec<u8>> {
        encode_png(&self.to_rgba_image())
    }

    fn clear(&mut self) {
        self.surface.fill(sk::Color::TRANSPARENT);
    }

    fn replay(&mut self, committed: &[Stroke]) {
        self.clear();
        for stroke in committed {
            self.render_stroke(stroke);
        }
    }

    fn render_freehand(&mut self, path: &FreehandPath) {
        let mut paint = paint_for(path.color.into());
        if path.is_eraser() {
            paint.set_color_rgba8(0, 0, 0, 255);
            paint.blend_mode = sk::BlendMode::DestinationOut;
        }

        if path.is_dot() {
            // Round cap of a zero-length segment.
            let p = path.points()[0];
            if let Some(dot) =
                sk::PathBuilder::from_circle(p.x as f32, p.y as f32, (path.width / 2.0) as f32)
            {
                self.surface.fill_path(
                    &dot,
                    &paint,
                    sk::FillRule::Winding,
                    sk::Transform::identity(),
                    None,
                );
            }
            return;
        }

        if let Some(skia_path) = to_skia_path(&path.to_path()) {
            self.surface.stroke_path(
                &skia_path,
                &paint,
                &round_stroke(path.width),
                sk::Transform::identity(),
                None,
            );
        }
    }

    /// Fill then outline a closed shape.
    fn render_shape(&mut self, path: &BezPath, fill: Rgba, outline: Rgba, width: f64) {
        let Some(skia_path) = to_skia_path(path) else {
            log::trace!("Skipping degenerate shape");
            return;
        };

        if !fill.is_transparent() {
            self.surface.fill_path(
                &skia_path,
                &paint_for(fill.into()),
                sk::FillRule::Winding,
                sk::Transform::identity(),
                None,
            );
        }
        self.surface.stroke_path(
            &skia_path,
            &paint_for(outline.into()),
            &round_stroke(width),
            sk::Transform::identity(),
            None,
        );
    }
}

impl Renderer for RasterRenderer {
    fn render_all(&mut self, ctx: &RenderContext) {
        match ctx.revision.filter(|_| self.cache_enabled) {
            Some(revision) => {
                let cached = self
                    .snapshot
                    .as_ref()
                    .filter(|s| s.revision == revision && s.stroke_count == ctx.committed.len());
                if let Some(snapshot) = cached {
                    self.surface.clone_from(&snapshot.pixmap);
                } else {
                    self.replay(ctx.committed);
                    self.snapshot = Some(Snapshot {
                        revision,
                        stroke_count: ctx.committed.len(),
                        pixmap: self.surface.clone(),
                    });
                }
            }
            None => self.replay(ctx.committed),
        }

        if let Some(stroke) = ctx.in_progress {
            self.render_stroke(stroke);
        }
    }

    fn render_stroke(&mut self, stroke: &Stroke) {
        match stroke {
            Stroke::Freehand(path) => self.render_freehand(path),
            Stroke::Rectangle(rect) => {
                self.render_shape(&stroke.to_path(), rect.fill_color, rect.stroke_color, rect.width)
            }
            Stroke::Ellipse(ellipse) => self.render_shape(
                &stroke.to_path(),
                ellipse.fill_color,
                ellipse.stroke_color,
                ellipse.width,
            ),
        }
    }

    fn resize(&mut self, width: u32, height: u32) -> RenderResult<()> {
        self.surface = allocate(width, height)?;
        self.snapshot = None;
        log::info!("Surface resized to {width}x{height}");
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        (self.surface.width(), self.surface.height())
    }
}

fn allocate(width: u32, height: u32) -> RenderResult<sk::Pixmap> {
    sk::Pixmap::new(width, height).ok_or(RendererError::InvalidSurfaceSize { width, height })
}

fn paint_for(color: Color) -> sk::Paint<'static> {
    let rgba = color.to_rgba8();
    let mut paint = sk::Paint::default();
    paint.set_color_rgba8(rgba.r, rgba.g, rgba.b, rgba.a);
    paint.anti_alias = true;
    paint
}

fn round_stroke(width: f64) -> sk::Stroke {
    sk::Stroke {
        width: width as f32,
        line_cap: sk::LineCap::Round,
        line_join: sk::LineJoin::Round,
        ..sk::Stroke::default()
    }
}

/// Convert a kurbo path into a tiny-skia path; `None` for empty or invalid paths.
fn to_skia_path(path: &BezPath) -> Option<sk::Path> {
    let mut builder = sk::PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}
