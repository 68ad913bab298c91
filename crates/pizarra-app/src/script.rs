//! Replay scripts: a recorded sequence of toolbar and pointer actions.

use crate::error::AppResult;
use crate::whiteboard::Whiteboard;
use pizarra_core::input::PointerEvent;
use pizarra_core::tools::ToolbarError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One scripted user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptAction {
    /// Raw pointer or touch event.
    Pointer { event: PointerEvent },
    SelectTool { value: String },
    StrokeColor { value: String },
    FillColor { value: String },
    LineWidth { value: String },
    Undo,
    Redo,
    Clear,
    Resize { width: u32, height: u32 },
    /// Write the surface as PNG. Uses the default export path when `file` is absent.
    Export {
        #[serde(default)]
        file: Option<PathBuf>,
    },
}

/// An ordered list of actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub actions: Vec<ScriptAction>,
}

impl Script {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let script = Self::from_json(&json)?;
        log::info!(
            "Loaded script with {} actions from {}",
            script.actions.len(),
            path.display()
        );
        Ok(script)
    }

    /// Replay every action against `board`, returning the files written.
    ///
    /// Rejected toolbar values are logged and skipped, leaving the previous
    /// setting in place. IO and render errors abort the run.
    pub fn run(&self, board: &mut Whiteboard, default_export: &Path) -> AppResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        for (index, action) in self.actions.iter().enumerate() {
            log::debug!("Action {index}: {action:?}");
            match action {
                ScriptAction::Pointer { event } => {
                    board.handle_pointer(event);
                }
                ScriptAction::SelectTool { value } => {
                    skip_rejected(index, board.toolbar_mut().select_tool(value));
                }
                ScriptAction::StrokeColor { value } => {
                    skip_rejected(index, board.toolbar_mut().select_stroke_color(value));
                }
                ScriptAction::FillColor { value } => {
                    skip_rejected(index, board.toolbar_mut().select_fill_color(value));
                }
                ScriptAction::LineWidth { value } => {
                    skip_rejected(index, board.toolbar_mut().select_line_width(value));
                }
                ScriptAction::Undo => {
                    board.undo();
                }
                ScriptAction::Redo => {
                    board.redo();
                }
                ScriptAction::Clear => board.clear(),
                ScriptAction::Resize { width, height } => board.resize(*width, *height)?,
                ScriptAction::Export { file } => {
                    let path = file.as_deref().unwrap_or(default_export);
                    let png = board.export_png()?;
                    std::fs::write(path, &png)?;
                    log::info!("Exported {} ({} bytes)", path.display(), png.len());
                    written.push(path.to_path_buf());
                }
            }
        }
        Ok(written)
    }
}

/// Toolbar setters keep their previous value on rejection; the run goes on.
fn skip_rejected(index: usize, result: Result<(), ToolbarError>) {
    if let Err(e) = result {
        log::debug!("Skipping action {index}: {e}");
    }
}
