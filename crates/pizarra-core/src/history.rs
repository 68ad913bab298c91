//! Committed strokes and the redo buffer.

use crate::strokes::Stroke;

/// Ordered stroke history.
///
/// `committed` is the visible drawing in z-order (back to front). Undo moves
/// its last stroke onto `redo_buffer`, redo moves it back.
#[derive(Debug, Clone, Default)]
pub struct History {
    committed: Vec<Stroke>,
    redo_buffer: Vec<Stroke>,
    /// Bumped whenever `committed` changes.
    revision: u64,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Strokes that make up the drawing, back to front.
    pub fn committed(&self) -> &[Stroke] {
        &self.committed
    }

    /// Strokes removed by undo, most recent last.
    pub fn redo_buffer(&self) -> &[Stroke] {
        &self.redo_buffer
    }

    /// Identifies the current contents of `committed`.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a finished stroke.
    pub(crate) fn push(&mut self, stroke: Stroke) {
        self.committed.push(stroke);
        self.bump();
    }

    /// Drop everything undo could bring back.
    pub(crate) fn discard_redo(&mut self) {
        self.redo_buffer.clear();
    }

    /// Undo the last stroke.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(stroke) = self.committed.pop() {
            self.redo_buffer.push(stroke);
            self.bump();
            true
        } else {
            false
        }
    }

    /// Redo the last undone stroke.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(stroke) = self.redo_buffer.pop() {
            self.committed.push(stroke);
            self.bump();
            true
        } else {
            false
        }
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_buffer.is_empty()
    }

    /// Remove all strokes, including undone ones.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo_buffer.clear();
        self.bump();
    }

    /// Check if the drawing is empty.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Get the number of committed strokes.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
