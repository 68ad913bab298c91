//! Pizarra Application
//!
//! Host shell wiring input, toolbar, stroke model and raster renderer
//! together, plus a replay driver for recorded action scripts.

mod config;
mod error;
mod script;
mod whiteboard;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use script::{Script, ScriptAction};
pub use whiteboard::Whiteboard;
