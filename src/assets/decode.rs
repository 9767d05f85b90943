use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{NotecardError, NotecardResult};

#[derive(Clone, Debug)]
/// Raster image in premultiplied RGBA8 form.
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode a raster image and resample it to exactly `width`x`height`.
pub fn decode_image_resized(bytes: &[u8], width: u32, height: u32) -> NotecardResult<PreparedImage> {
    if width == 0 || height == 0 {
        return Err(NotecardError::validation("target image size must be non-zero"));
    }
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = image::imageops::resize(
        &dyn_img.to_rgba8(),
        width,
        height,
        image::imageops::FilterType::CatmullRom,
    );

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Parse an SVG document and rasterize it scaled to exactly `width`x`height`.
pub fn rasterize_svg(bytes: &[u8], width: u32, height: u32) -> NotecardResult<PreparedImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;

    let size = tree.size();
    if !(size.width() > 0.0 && size.height() > 0.0) {
        return Err(NotecardError::asset("svg has invalid width/height"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| NotecardError::asset("failed to allocate svg pixmap"))?;
    let sx = (width as f32) / size.width();
    let sy = (height as f32) / size.height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(pixmap.data().to_vec()),
    })
}

/// Decode heading artwork, choosing the SVG path when the bytes look like an SVG document.
pub fn decode_heading(bytes: &[u8], width: u32, height: u32) -> NotecardResult<PreparedImage> {
    if looks_like_svg(bytes) {
        rasterize_svg(bytes, width, height)
    } else {
        decode_image_resized(bytes, width, height)
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(512)];
    let head = String::from_utf8_lossy(head);
    let head = head.trim_start_matches('\u{feff}').trim_start();
    head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg"))
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let alpha = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * alpha + 127) / 255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
