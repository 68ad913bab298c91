//! Renderer trait abstraction.

use pizarra_core::session::DrawingSession;
use pizarra_core::strokes::Stroke;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid surface size: {width}x{height}")]
    InvalidSurfaceSize { width: u32, height: u32 },
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// What a single redraw shows.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Committed strokes, back to front.
    pub committed: &'a [Stroke],
    /// Live overlay drawn on top of everything else.
    pub in_progress: Option<&'a Stroke>,
    /// Revision of `committed` within its session. Renderers may reuse work
    /// done for a previous frame with the same revision; `None` disables that.
    pub revision: Option<u64>,
}

impl<'a> RenderContext<'a> {
    /// Create a context for a plain list of strokes.
    pub fn new(committed: &'a [Stroke]) -> Self {
        Self {
            committed,
            in_progress: None,
            revision: None,
        }
    }

    /// Capture everything a session currently shows.
    pub fn from_session(session: &'a DrawingSession) -> Self {
        Self {
            committed: session.committed(),
            in_progress: session.in_progress(),
            revision: Some(session.revision()),
        }
    }

    /// Set the live overlay stroke.
    pub fn with_in_progress(mut self, stroke: Option<&'a Stroke>) -> Self {
        self.in_progress = stroke;
        self
    }
}

/// Trait for rendering backends.
///
/// The renderer exclusively owns its drawing surface; the stroke model never
/// reads or writes it.
pub trait Renderer {
    /// Clear the surface, replay every committed stroke in order, then draw the
    /// in-progress stroke as an overlay.
    fn render_all(&mut self, ctx: &RenderContext);

    /// Draw one stroke on top of the current surface contents.
    fn render_stroke(&mut self, stroke: &Stroke);

    /// Reallocate the surface. Contents are lost; callers must `render_all` again.
    fn resize(&mut self, width: u32, height: u32) -> RenderResult<()>;

    /// Surface size in pixels.
    fn size(&self) -> (u32, u32);
}
