//! The whiteboard controller: input in, pixels out.

use crate::config::AppConfig;
use crate::error::AppResult;
use pizarra_core::input::{InputAdapter, InputEvent, PointerEvent};
use pizarra_core::session::DrawingSession;
use pizarra_core::tools::Toolbar;
use pizarra_core::Point;
use pizarra_render::{RasterRenderer, RenderContext, Renderer};

/// Wires input, toolbar, stroke model and renderer together.
///
/// Every handler mutates the session and redraws synchronously, so the
/// surface always shows the latest model state.
pub struct Whiteboard {
    session: DrawingSession,
    toolbar: Toolbar,
    input: InputAdapter,
    renderer: RasterRenderer,
}

impl Whiteboard {
    /// Create a whiteboard from configuration.
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let renderer = RasterRenderer::new(config.width, config.height)?
            .with_snapshot_cache(config.snapshot_cache);
        Ok(Self {
            session: DrawingSession::new(),
            toolbar: config.toolbar()?,
            input: InputAdapter::default(),
            renderer,
        })
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    /// Toolbar state, for the toolbar collaborator to update.
    pub fn toolbar_mut(&mut self) -> &mut Toolbar {
        &mut self.toolbar
    }

    pub fn renderer(&self) -> &RasterRenderer {
        &self.renderer
    }

    /// Where the surface's top-left sits in client coordinates.
    pub fn set_surface_origin(&mut self, origin: Point) {
        self.input.set_surface_origin(origin);
    }

    /// Handle a raw pointer event. Returns true if the surface was redrawn.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        match self.input.translate(event) {
            Some(input) => self.handle_input(input),
            None => false,
        }
    }

    /// Handle a normalized input event. Returns true if the surface was redrawn.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let changed = match event {
            InputEvent::Start(pos) => {
                let kind = self.toolbar.tool.stroke_kind();
                self.session
                    .begin_stroke(kind, self.toolbar.style(), pos)
                    .is_some()
            }
            InputEvent::Move(pos) => self.session.extend_stroke(pos),
            InputEvent::End => self.session.commit_stroke().is_some(),
        };
        if changed {
            self.redraw();
        }
        changed
    }

    /// Undo the last stroke and redraw if anything changed.
    pub fn undo(&mut self) -> bool {
        let changed = self.session.undo();
        if changed {
            self.redraw();
        }
        changed
    }

    /// Redo the last undone stroke and redraw if anything changed.
    pub fn redo(&mut self) -> bool {
        let changed = self.session.redo();
        if changed {
            self.redraw();
        }
        changed
    }

    /// Remove every stroke and redraw.
    pub fn clear(&mut self) {
        self.session.clear();
        self.redraw();
    }

    /// Reallocate the surface and replay history onto it.
    pub fn resize(&mut self, width: u32, height: u32) -> AppResult<()> {
        self.renderer.resize(width, height)?;
        self.redraw();
        Ok(())
    }

    /// Current surface contents as PNG.
    pub fn export_png(&self) -> AppResult<Vec<u8>> {
        Ok(self.renderer.encode_png()?)
    }

    fn redraw(&mut self) {
        self.renderer
            .render_all(&RenderContext::from_session(&self.session));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pizarra_core::strokes::StrokeKind;
    use pizarra_core::tools::ToolKind;
    use pizarra_core::Rgba;

    fn small_board() -> Whiteboard {
        let config = AppConfig {
            width: 100,
            height: 80,
            ..AppConfig::default()
        };
        Whiteboard::new(&config).unwrap()
    }

    fn drag(board: &mut Whiteboard, from: (f64, f64), to: (f64, f64)) {
        board.handle_pointer(&PointerEvent::MouseDown { position: Point::new(from.0, from.1) });
        board.handle_pointer(&PointerEvent::MouseMove { position: Point::new(to.0, to.1) });
        board.handle_pointer(&PointerEvent::MouseUp);
    }

    #[test]
    fn test_drag_commits_stroke_with_toolbar_style() {
        let mut board = small_board();
        board.toolbar_mut().select_stroke_color("#ff0000").unwrap();
        board.toolbar_mut().select_line_width("6").unwrap();
        drag(&mut board, (10.0, 40.0), (90.0, 40.0));

        assert_eq!(board.session().committed().len(), 1);
        assert!(!board.session().is_active());
        assert_eq!(board.renderer().pixel(50, 40), Some(Rgba::opaque(255, 0, 0)));
    }

    #[test]
    fn test_live_overlay_during_drag() {
        let mut board = small_board();
        board.toolbar_mut().set_tool(ToolKind::Rectangle);
        board.toolbar_mut().select_fill_color("#0000ff").unwrap();

        board.handle_input(InputEvent::Start(Point::new(10.0, 10.0)));
        assert!(board.handle_input(InputEvent::Move(Point::new(60.0, 60.0))));
        assert!(board.session().committed().is_empty());
        assert_eq!(board.renderer().pixel(35, 35), Some(Rgba::opaque(0, 0, 255)));

        board.handle_input(InputEvent::End);
        assert_eq!(board.session().committed()[0].kind(), StrokeKind::Rectangle);
        assert_eq!(board.renderer().pixel(35, 35), Some(Rgba::opaque(0, 0, 255)));
    }

    #[test]
    fn test_toolbar_change_mid_stroke_is_ignored() {
        let mut board = small_board();
        board.handle_input(InputEvent::Start(Point::new(10.0, 40.0)));
        board.toolbar_mut().select_stroke_color("#00ff00").unwrap();
        board.toolbar_mut().set_tool(ToolKind::Eraser);
        board.handle_input(InputEvent::Move(Point::new(90.0, 40.0)));
        board.handle_input(InputEvent::End);

        let stroke = &board.session().committed()[0];
        assert_eq!(stroke.kind(), StrokeKind::Pen);
        assert_eq!(stroke.stroke_color(), Rgba::opaque(0x11, 0x18, 0x27));
    }

    #[test]
    fn test_second_start_while_active_is_ignored() {
        let mut board = small_board();
        assert!(board.handle_input(InputEvent::Start(Point::new(1.0, 1.0))));
        assert!(!board.handle_input(InputEvent::Start(Point::new(50.0, 50.0))));
        board.handle_input(InputEvent::End);
        assert_eq!(board.session().committed().len(), 1);
        assert_eq!(
            board.session().committed()[0].as_freehand().unwrap().points(),
            &[Point::new(1.0, 1.0)]
        );
    }

    #[test]
    fn test_leaving_surface_commits() {
        let mut board = small_board();
        board.handle_pointer(&PointerEvent::MouseDown { position: Point::new(5.0, 5.0) });
        board.handle_pointer(&PointerEvent::MouseMove { position: Point::new(20.0, 5.0) });
        board.handle_pointer(&PointerEvent::MouseLeave);
        assert!(!board.session().is_active());
        assert_eq!(board.session().committed().len(), 1);

        // Stray events after the stroke ended change nothing.
        assert!(!board.handle_pointer(&PointerEvent::MouseMove { position: Point::new(30.0, 5.0) }));
        assert!(!board.handle_pointer(&PointerEvent::MouseUp));
    }

    #[test]
    fn test_surface_origin_offsets_input() {
        let mut board = small_board();
        board.set_surface_origin(Point::new(100.0, 100.0));
        board.handle_pointer(&PointerEvent::TouchStart { touches: vec![Point::new(110.0, 120.0)] });
        board.handle_pointer(&PointerEvent::TouchEnd);
        let path = board.session().committed()[0].as_freehand().unwrap();
        assert_eq!(path.points(), &[Point::new(10.0, 20.0)]);
    }

    #[test]
    fn test_undo_redo_clear_redraw() {
        let mut board = small_board();
        board.toolbar_mut().select_line_width("8").unwrap();
        drag(&mut board, (0.0, 40.0), (100.0, 40.0));
        let ink = board.renderer().pixel(50, 40).unwrap();
        assert_eq!(ink.a, 255);

        assert!(board.undo());
        assert_eq!(board.renderer().pixel(50, 40).unwrap().a, 0);
        assert!(!board.undo());

        assert!(board.redo());
        assert_eq!(board.renderer().pixel(50, 40), Some(ink));
        assert!(!board.redo());

        board.clear();
        assert_eq!(board.renderer().pixel(50, 40).unwrap().a, 0);
        assert!(!board.undo());
    }

    #[test]
    fn test_eraser_over_pen() {
        let mut board = small_board();
        board.toolbar_mut().select_line_width("10").unwrap();
        drag(&mut board, (0.0, 40.0), (100.0, 40.0));
        board.toolbar_mut().set_tool(ToolKind::Eraser);
        drag(&mut board, (50.0, 0.0), (50.0, 80.0));

        assert_eq!(board.renderer().pixel(50, 40).unwrap().a, 0);
        assert_eq!(board.renderer().pixel(20, 40).unwrap().a, 255);

        board.undo();
        assert_eq!(board.renderer().pixel(50, 40).unwrap().a, 255);
    }

    #[test]
    fn test_resize_replays_history() {
        let mut board = small_board();
        board.toolbar_mut().select_line_width("8").unwrap();
        drag(&mut board, (0.0, 40.0), (100.0, 40.0));

        board.resize(200, 100).unwrap();
        assert_eq!(board.renderer().size(), (200, 100));
        assert_eq!(board.renderer().pixel(50, 40).unwrap().a, 255);
        assert!(board.resize(0, 100).is_err());
    }

    #[test]
    fn test_export_png() {
        let mut board = small_board();
        drag(&mut board, (0.0, 0.0), (100.0, 80.0));
        let png = board.export_png().unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
