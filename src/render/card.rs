use crate::{
    assets::{decode::PreparedImage, store::NotecardAssets},
    config::CardText,
    foundation::core::{CARD_HEIGHT, CARD_WIDTH, LINE_SPACING_PX, Rgb8, WRAP_WIDTH},
    foundation::error::NotecardResult,
    render::{Notecard, cpu::CpuCanvas},
    text::{
        metrics::{FontFace, TextLayoutEngine},
        sanitize::strip_emoji,
        wrap::wrap_response,
    },
};

/// Body text size in pixels.
pub const BODY_SIZE_PX: f32 = 65.0;
/// Caption and handle size in pixels.
pub const FOOTER_SIZE_PX: f32 = 55.0;
/// Top edge of the heading artwork.
pub const HEADING_TOP: i32 = 80;
/// Top edge of the handle line, measured up from the bottom of the card.
pub const HANDLE_BOTTOM_OFFSET: i32 = 100;
/// Top edge of the caption, measured up from the bottom of the card.
pub const CAPTION_BOTTOM_OFFSET: i32 = HANDLE_BOTTOM_OFFSET + 150;

/// Anything that can turn a response into a notecard.
pub trait CardRender {
    fn render_card(&mut self, response: &str) -> NotecardResult<Notecard>;
}

/// Wrap a raw response and strip characters the body font cannot draw.
///
/// Wrapping happens first, so stripped characters still count toward line width.
pub fn body_text(response: &str) -> String {
    strip_emoji(&wrap_response(response, WRAP_WIDTH))
}

/// Left edge that horizontally centers a block `width` pixels wide on the card.
pub fn centered_x(width: u32) -> i32 {
    (CARD_WIDTH / 2) as i32 - (width / 2) as i32
}

/// Top edge of body line `index` for a body block `block_height` pixels tall.
///
/// The line is drawn with `index` blank lines in front of it, so this is the top of that padded
/// layout rather than of the visible glyphs.
pub fn body_line_top(block_height: u32, index: usize) -> i32 {
    let top = (CARD_HEIGHT as i32 - block_height as i32).div_euclid(2);
    top + LINE_SPACING_PX * index as i32
}

/// Renders notecards from a fixed set of assets.
pub struct CardRenderer {
    engine: TextLayoutEngine,
    body: FontFace,
    script: FontFace,
    heading: PreparedImage,
    text: CardText,
}

impl CardRenderer {
    /// Register the fonts from `assets` and keep the heading ready to draw.
    pub fn new(assets: &NotecardAssets, text: CardText) -> NotecardResult<Self> {
        let mut engine = TextLayoutEngine::new();
        let body = engine.register_font(assets.body_font.as_slice())?;
        let script = engine.register_font(assets.script_font.as_slice())?;
        tracing::debug!(
            body = body.family_name(),
            script = script.family_name(),
            "card fonts registered"
        );

        Ok(Self {
            engine,
            body,
            script,
            heading: assets.heading.clone(),
            text,
        })
    }

    /// Compose one notecard for `response`.
    #[tracing::instrument(skip_all, fields(response_len = response.len()))]
    pub fn render(&mut self, response: &str) -> NotecardResult<Notecard> {
        let body = body_text(response);
        let block = self.engine.measure(&body, &self.body, BODY_SIZE_PX)?;

        let mut canvas = CpuCanvas::new(CARD_WIDTH, CARD_HEIGHT, Rgb8::WHITE)?;

        let heading_x = (CARD_WIDTH as i32 - self.heading.width as i32) / 2;
        canvas.draw_image(&self.heading, heading_x, HEADING_TOP)?;

        // Each line is laid out behind `index` empty lines and also nudged down by the fixed
        // spacing, so gaps grow by one line height plus LINE_SPACING_PX per line.
        for (index, line) in body.split('\n').enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let width = self.engine.measure(line, &self.body, BODY_SIZE_PX)?.width;
            let padded = format!("{}{line}", "\n".repeat(index));
            let layout = self.engine.layout(&padded, &self.body, BODY_SIZE_PX)?;
            canvas.draw_text(
                &layout,
                &self.body,
                centered_x(width),
                body_line_top(block.height, index),
            );
        }

        self.draw_footer_line(
            &mut canvas,
            FooterFace::Script,
            CARD_HEIGHT as i32 - CAPTION_BOTTOM_OFFSET,
        )?;
        self.draw_footer_line(
            &mut canvas,
            FooterFace::Body,
            CARD_HEIGHT as i32 - HANDLE_BOTTOM_OFFSET,
        )?;

        let pixels = canvas.finish()?;
        tracing::debug!(lines = body.split('\n').count(), "notecard rendered");
        Ok(Notecard { pixels })
    }

    fn draw_footer_line(
        &mut self,
        canvas: &mut CpuCanvas,
        which: FooterFace,
        top: i32,
    ) -> NotecardResult<()> {
        let (text, face) = match which {
            FooterFace::Script => (self.text.caption.as_str(), &self.script),
            FooterFace::Body => (self.text.handle.as_str(), &self.body),
        };
        if text.is_empty() {
            return Ok(());
        }
        let layout = self.engine.layout(text, face, FOOTER_SIZE_PX)?;
        let width = crate::text::metrics::extent_of(&layout).width;
        canvas.draw_text(&layout, face, centered_x(width), top);
        Ok(())
    }
}

#[derive(Clone, Copy)]
enum FooterFace {
    Script,
    Body,
}

impl CardRender for CardRenderer {
    fn render_card(&mut self, response: &str) -> NotecardResult<Notecard> {
        self.render(response)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/card.rs"]
mod tests;
