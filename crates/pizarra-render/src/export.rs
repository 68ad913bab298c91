//! Raster export.

use crate::renderer::{RenderResult, RendererError};

/// Raw surface contents - straight-alpha RGBA pixel data and dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    /// RGBA pixel data (4 bytes per pixel, row-major).
    pub rgba_data: Vec<u8>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

/// Encode RGBA pixel data to PNG bytes.
pub fn encode_png(image: &RgbaImage) -> RenderResult<Vec<u8>> {
    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().map_err(|e| {
            log::error!("Failed to write PNG header: {e:?}");
            RendererError::Encode(e.to_string())
        })?;
        writer.write_image_data(&image.rgba_data).map_err(|e| {
            log::error!("Failed to write PNG data: {e:?}");
            RendererError::Encode(e.to_string())
        })?;
    }

    log::info!(
        "Encoded {}x{} PNG: {} bytes",
        image.width,
        image.height,
        png_data.len()
    );
    Ok(png_data)
}
