use std::borrow::Cow;

use crate::foundation::error::{NotecardError, NotecardResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color used by Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl TextBrushRgba8 {
    /// Opaque black ink.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
}

#[derive(Clone)]
/// A font registered with a [`TextLayoutEngine`], plus the glyph data the rasterizer needs.
pub struct FontFace {
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl FontFace {
    /// Family name the face was registered under.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Glyph outline source for `vello_cpu`.
    pub fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("family_name", &self.family_name)
            .finish_non_exhaustive()
    }
}

/// Pixel extent of a laid out block of text, rounded up to whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// Stateful helper for building Parley text layouts from registered font faces.
///
/// Measuring and drawing both go through [`TextLayoutEngine::layout`], so a measured extent
/// always matches what ends up on the canvas.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register raw font bytes and return a face that can be used for layout.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> NotecardResult<FontFace> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| NotecardError::asset("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| NotecardError::asset("registered font family has no name"))?
            .to_string();

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font_bytes.to_vec()),
            0,
        );
        Ok(FontFace { family_name, font })
    }

    /// Shape and lay out left-aligned text with no wrapping width.
    ///
    /// Embedded `\n` characters start new lines using the face's default line height.
    pub fn layout(
        &mut self,
        text: &str,
        face: &FontFace,
        size_px: f32,
    ) -> NotecardResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(NotecardError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(face.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(TextBrushRgba8::BLACK));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        layout.align(
            None,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }

    /// Width and height `text` occupies when laid out with `face` at `size_px`.
    ///
    /// Empty text measures `0x0`.
    pub fn measure(
        &mut self,
        text: &str,
        face: &FontFace,
        size_px: f32,
    ) -> NotecardResult<TextExtent> {
        if text.is_empty() {
            return Ok(TextExtent::default());
        }
        let layout = self.layout(text, face, size_px)?;
        Ok(extent_of(&layout))
    }
}

/// Extent of an already built layout.
pub fn extent_of(layout: &parley::Layout<TextBrushRgba8>) -> TextExtent {
    fn to_px(v: f32) -> u32 {
        if v.is_finite() && v > 0.0 {
            v.ceil() as u32
        } else {
            0
        }
    }

    TextExtent {
        width: to_px(layout.width()),
        height: to_px(layout.height()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/metrics.rs"]
mod tests;
