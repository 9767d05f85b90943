use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    assets::decode::{PreparedImage, decode_heading},
    config::AssetPaths,
    foundation::error::NotecardResult,
};

/// Edge length, in pixels, the heading artwork is resampled to.
pub const HEADING_SIZE: u32 = 125;

/// Read-only assets shared by every card of a run.
///
/// All file IO happens here, up front; renderers only ever see bytes and pixels.
#[derive(Clone, Debug)]
pub struct NotecardAssets {
    /// Typewriter face bytes (body text and handle line).
    pub body_font: Arc<Vec<u8>>,
    /// Script face bytes (caption).
    pub script_font: Arc<Vec<u8>>,
    /// Heading artwork, already resampled to [`HEADING_SIZE`] square.
    pub heading: PreparedImage,
}

impl NotecardAssets {
    /// Load fonts and heading artwork from disk.
    #[tracing::instrument(skip_all)]
    pub fn load(paths: &AssetPaths) -> NotecardResult<Self> {
        let body_font = read_bytes(&paths.body_font, "body font")?;
        let script_font = read_bytes(&paths.script_font, "script font")?;
        let heading_bytes = read_bytes(&paths.heading_image, "heading image")?;
        let heading = decode_heading(&heading_bytes, HEADING_SIZE, HEADING_SIZE)
            .with_context(|| format!("decode heading '{}'", paths.heading_image.display()))?;

        tracing::debug!(
            body_font_bytes = body_font.len(),
            script_font_bytes = script_font.len(),
            "assets loaded"
        );

        Ok(Self {
            body_font: Arc::new(body_font),
            script_font: Arc::new(script_font),
            heading,
        })
    }

    /// Assemble assets from bytes already in memory.
    pub fn from_parts(
        body_font: Vec<u8>,
        script_font: Vec<u8>,
        heading: PreparedImage,
    ) -> Self {
        Self {
            body_font: Arc::new(body_font),
            script_font: Arc::new(script_font),
            heading,
        }
    }
}

fn read_bytes(path: &Path, what: &str) -> NotecardResult<Vec<u8>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read {what} '{}'", path.display()))?;
    Ok(bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
