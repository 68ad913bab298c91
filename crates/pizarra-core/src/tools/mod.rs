//! Toolbar state: which tool is selected and the style new strokes get.

use crate::color::{ColorError, Rgba};
use crate::strokes::{StrokeKind, StrokeStyle};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Toolbar errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolbarError {
    #[error("Unknown tool: {0:?}")]
    UnknownTool(String),
    #[error(transparent)]
    InvalidColor(#[from] ColorError),
    #[error("Invalid line width: {0:?}")]
    InvalidWidth(String),
}

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    #[default]
    Pen,
    Eraser,
    #[serde(rename = "rect")]
    Rectangle,
    #[serde(rename = "circle")]
    Ellipse,
}

impl ToolKind {
    /// Kind of stroke this tool starts.
    pub fn stroke_kind(self) -> StrokeKind {
        match self {
            ToolKind::Pen => StrokeKind::Pen,
            ToolKind::Eraser => StrokeKind::Eraser,
            ToolKind::Rectangle => StrokeKind::Rectangle,
            ToolKind::Ellipse => StrokeKind::Ellipse,
        }
    }

    /// Name used by the tool selector.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Pen => "pen",
            ToolKind::Eraser => "eraser",
            ToolKind::Rectangle => "rect",
            ToolKind::Ellipse => "circle",
        }
    }
}

impl FromStr for ToolKind {
    type Err = ToolbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "pen" => Ok(ToolKind::Pen),
            "eraser" => Ok(ToolKind::Eraser),
            "rect" | "rectangle" => Ok(ToolKind::Rectangle),
            "circle" | "ellipse" => Ok(ToolKind::Ellipse),
            other => Err(ToolbarError::UnknownTool(other.to_string())),
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current toolbar selection.
///
/// Read once per stroke when input starts; later changes never reach a stroke
/// already in progress.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Toolbar {
    /// Currently selected tool.
    pub tool: ToolKind,
    style: StrokeStyle,
}

impl Toolbar {
    /// Create a toolbar with the default pen and colors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a toolbar from explicit values.
    pub fn with_style(tool: ToolKind, style: StrokeStyle) -> Self {
        Self { tool, style }
    }

    /// Style snapshot for a stroke starting now.
    pub fn style(&self) -> StrokeStyle {
        self.style
    }

    pub fn stroke_color(&self) -> Rgba {
        self.style.stroke_color
    }

    pub fn fill_color(&self) -> Rgba {
        self.style.fill_color
    }

    pub fn line_width(&self) -> f64 {
        self.style.width
    }

    /// Set the current tool.
    pub fn set_tool(&mut self, tool: ToolKind) {
        self.tool = tool;
    }

    pub fn set_stroke_color(&mut self, color: Rgba) {
        self.style.stroke_color = color;
    }

    pub fn set_fill_color(&mut self, color: Rgba) {
        self.style.fill_color = color;
    }

    /// Set the line width; rejects anything that is not a positive finite number.
    pub fn set_line_width(&mut self, width: f64) -> Result<(), ToolbarError> {
        if !(width.is_finite() && width > 0.0) {
            log::warn!("Rejected line width {width}");
            return Err(ToolbarError::InvalidWidth(width.to_string()));
        }
        self.style.width = width;
        Ok(())
    }

    /// Apply a raw value from the tool selector.
    pub fn select_tool(&mut self, value: &str) -> Result<(), ToolbarError> {
        let tool = value.parse::<ToolKind>().inspect_err(|e| log::warn!("{e}"))?;
        self.set_tool(tool);
        Ok(())
    }

    /// Apply a raw value from the stroke color picker.
    pub fn select_stroke_color(&mut self, value: &str) -> Result<(), ToolbarError> {
        let color = Rgba::parse(value).inspect_err(|e| log::warn!("{e}"))?;
        self.set_stroke_color(color);
        Ok(())
    }

    /// Apply a raw value from the fill color picker.
    pub fn select_fill_color(&mut self, value: &str) -> Result<(), ToolbarError> {
        let color = Rgba::parse(value).inspect_err(|e| log::warn!("{e}"))?;
        self.set_fill_color(color);
        Ok(())
    }

    /// Apply a raw value from the line width slider.
    pub fn select_line_width(&mut self, value: &str) -> Result<(), ToolbarError> {
        let width: f64 = value.trim().parse().map_err(|_| {
            log::warn!("Rejected line width {value:?}");
            ToolbarError::InvalidWidth(value.to_string())
        })?;
        self.set_line_width(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let toolbar = Toolbar::new();
        assert_eq!(toolbar.tool, ToolKind::Pen);
        assert_eq!(toolbar.stroke_color(), Rgba::opaque(0x11, 0x18, 0x27));
        assert_eq!(toolbar.fill_color(), Rgba::white());
        assert!((toolbar.line_width() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tool_names() {
        for tool in [ToolKind::Pen, ToolKind::Eraser, ToolKind::Rectangle, ToolKind::Ellipse] {
            assert_eq!(tool.name().parse::<ToolKind>().unwrap(), tool);
        }
        assert_eq!(ToolKind::Ellipse.stroke_kind(), StrokeKind::Ellipse);
        assert!(matches!(
            "lasso".parse::<ToolKind>(),
            Err(ToolbarError::UnknownTool(_))
        ));
    }

    #[test]
    fn test_tool_serde_names() {
        assert_eq!(serde_json::to_string(&ToolKind::Rectangle).unwrap(), "\"rect\"");
        let tool: ToolKind = serde_json::from_str("\"circle\"").unwrap();
        assert_eq!(tool, ToolKind::Ellipse);
    }

    #[test]
    fn test_select_values_from_strings() {
        let mut toolbar = Toolbar::new();
        toolbar.select_tool("rect").unwrap();
        toolbar.select_stroke_color("#ff0000").unwrap();
        toolbar.select_fill_color("#00ff00").unwrap();
        toolbar.select_line_width("12").unwrap();

        assert_eq!(toolbar.tool, ToolKind::Rectangle);
        let style = toolbar.style();
        assert_eq!(style.stroke_color, Rgba::opaque(255, 0, 0));
        assert_eq!(style.fill_color, Rgba::opaque(0, 255, 0));
        assert!((style.width - 12.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejected_values_keep_previous() {
        let mut toolbar = Toolbar::new();
        let before = toolbar.clone();

        assert!(matches!(
            toolbar.select_stroke_color("blue"),
            Err(ToolbarError::InvalidColor(_))
        ));
        assert!(matches!(
            toolbar.select_stroke_color("#+1+2+3"),
            Err(ToolbarError::InvalidColor(_))
        ));
        assert!(toolbar.select_fill_color("#+f+f+f").is_err());
        assert!(toolbar.select_line_width("thick").is_err());
        assert!(toolbar.select_line_width("0").is_err());
        assert!(toolbar.set_line_width(-2.0).is_err());
        assert!(toolbar.select_tool("spray").is_err());

        assert_eq!(toolbar, before);
    }

    #[test]
    fn test_style_is_a_snapshot() {
        let mut toolbar = Toolbar::new();
        let style = toolbar.style();
        toolbar.set_stroke_color(Rgba::opaque(1, 2, 3));
        assert_ne!(style.stroke_color, toolbar.stroke_color());
    }
}
