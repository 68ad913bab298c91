//! Application errors.

use pizarra_core::ToolbarError;
use pizarra_render::RendererError;
use thiserror::Error;

/// Errors surfaced by the host shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Toolbar(#[from] ToolbarError),
    #[error(transparent)]
    Render(#[from] RendererError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;
