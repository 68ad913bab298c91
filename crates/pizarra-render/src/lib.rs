//! Pizarra Render Library
//!
//! Renderer abstraction and the CPU raster implementation that replays stroke
//! history onto a pixel surface, plus PNG export of that surface.

mod export;
mod raster;
mod renderer;

pub use export::{RgbaImage, encode_png};
pub use raster::RasterRenderer;
pub use renderer::{RenderContext, RenderResult, Renderer, RendererError};
