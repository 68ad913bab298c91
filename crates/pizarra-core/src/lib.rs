//! Pizarra Core Library
//!
//! Platform-agnostic stroke model for the Pizarra whiteboard: stroke variants,
//! undo/redo history, the drawing session state machine, toolbar state and
//! pointer input translation. Nothing here touches pixels.

pub mod color;
pub mod history;
pub mod input;
pub mod session;
pub mod strokes;
pub mod tools;

pub use color::{ColorError, Rgba};
pub use history::History;
pub use input::{InputAdapter, InputEvent, PointerEvent};
pub use kurbo::Point;
pub use session::DrawingSession;
pub use strokes::{
    Ellipse, FreehandPath, Rectangle, Stroke, StrokeHandle, StrokeKind, StrokeMode, StrokeStyle,
    StrokeTrait,
};
pub use tools::{ToolKind, Toolbar, ToolbarError};
