//! Application configuration.

use crate::error::AppResult;
use pizarra_core::tools::{ToolKind, Toolbar};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration.
///
/// Every field is optional in the JSON form; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
    /// Initially selected tool.
    pub tool: ToolKind,
    /// Initial stroke color specification.
    pub stroke_color: String,
    /// Initial fill color specification.
    pub fill_color: String,
    /// Initial line width.
    pub line_width: f64,
    /// File name used when an export does not name one.
    pub export_file_name: String,
    /// Reuse a rendered snapshot of committed history between frames.
    pub snapshot_cache: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            tool: ToolKind::Pen,
            stroke_color: "#111827".to_string(),
            fill_color: "#ffffff".to_string(),
            line_width: 3.0,
            export_file_name: "pizarra.png".to_string(),
            snapshot_cache: true,
        }
    }
}

impl AppConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Initial toolbar state.
    pub fn toolbar(&self) -> AppResult<Toolbar> {
        let mut toolbar = Toolbar::new();
        toolbar.set_tool(self.tool);
        toolbar.select_stroke_color(&self.stroke_color)?;
        toolbar.select_fill_color(&self.fill_color)?;
        toolbar.set_line_width(self.line_width)?;
        Ok(toolbar)
    }
}
