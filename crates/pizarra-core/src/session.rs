//! Drawing session: history plus the stroke currently being drawn.

use crate::history::History;
use crate::strokes::{Stroke, StrokeHandle, StrokeKind, StrokeStyle};
use kurbo::Point;

/// State of the input interaction.
#[derive(Debug, Clone, Default)]
enum SessionState {
    /// Waiting for input to start.
    #[default]
    Idle,
    /// Input is down and a stroke is being built.
    Active {
        /// The in-progress stroke.
        stroke: Stroke,
    },
}

/// Owns everything a drawing consists of.
///
/// All operations are synchronous and silently ignore calls that make no
/// sense in the current state; the return values report whether anything
/// happened.
#[derive(Debug, Clone, Default)]
pub struct DrawingSession {
    history: History,
    state: SessionState,
}

impl DrawingSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stroke at `origin`.
    ///
    /// Returns `None` without touching anything if a stroke is already in
    /// progress. Otherwise the redo buffer is discarded.
    pub fn begin_stroke(
        &mut self,
        kind: StrokeKind,
        style: StrokeStyle,
        origin: Point,
    ) -> Option<StrokeHandle> {
        if self.is_active() {
            log::debug!("Ignoring {kind:?} start while a stroke is in progress");
            return None;
        }

        self.history.discard_redo();
        let stroke = Stroke::begin(kind, style, origin);
        let handle = stroke.handle();
        log::debug!("Began {kind:?} stroke {handle} at ({}, {})", origin.x, origin.y);
        self.state = SessionState::Active { stroke };
        Some(handle)
    }

    /// Feed an input sample to the in-progress stroke.
    /// Returns false if nothing is in progress.
    pub fn extend_stroke(&mut self, pos: Point) -> bool {
        match &mut self.state {
            SessionState::Active { stroke } => {
                stroke.extend(pos);
                true
            }
            SessionState::Idle => false,
        }
    }

    /// Move the in-progress stroke into history.
    /// Returns the committed stroke's handle, or `None` if nothing was in progress.
    pub fn commit_stroke(&mut self) -> Option<StrokeHandle> {
        match std::mem::take(&mut self.state) {
            SessionState::Active { stroke } => {
                let handle = stroke.handle();
                log::debug!("Committed {:?} stroke {handle}", stroke.kind());
                self.history.push(stroke);
                Some(handle)
            }
            SessionState::Idle => None,
        }
    }

    /// Undo the last committed stroke.
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Redo the last undone stroke.
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Empty the committed history and the redo buffer.
    ///
    /// A stroke in progress is left alone and still commits when input ends.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Committed strokes, back to front.
    pub fn committed(&self) -> &[Stroke] {
        self.history.committed()
    }

    /// Strokes removed by undo, most recent last.
    pub fn redo_buffer(&self) -> &[Stroke] {
        self.history.redo_buffer()
    }

    /// The stroke being drawn, if any.
    pub fn in_progress(&self) -> Option<&Stroke> {
        match &self.state {
            SessionState::Active { stroke } => Some(stroke),
            SessionState::Idle => None,
        }
    }

    /// Whether input is currently building a stroke.
    pub fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Active { .. })
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Revision of the committed history.
    pub fn revision(&self) -> u64 {
        self.history.revision()
    }
}
