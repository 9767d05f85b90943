use std::sync::Arc;

use crate::{
    assets::decode::PreparedImage,
    foundation::core::{Affine, Rect, Rgb8},
    foundation::error::{NotecardError, NotecardResult},
    text::metrics::{FontFace, TextBrushRgba8},
};

/// Opaque raster surface backed by a `vello_cpu` render context.
///
/// Drawing calls are recorded and only rasterized in [`CpuCanvas::finish`].
pub struct CpuCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl CpuCanvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb8) -> NotecardResult<Self> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| NotecardError::render("canvas width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| NotecardError::render("canvas height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            background.r,
            background.g,
            background.b,
            255,
        ));
        ctx.fill_rect(&rect_to_cpu(Rect::new(
            0.0,
            0.0,
            f64::from(width_u16),
            f64::from(height_u16),
        )));

        Ok(Self {
            width: width_u16,
            height: height_u16,
            ctx,
        })
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Draw `image` with its top-left corner at `(x, y)`, alpha-blended over what is below.
    pub fn draw_image(&mut self, image: &PreparedImage, x: i32, y: i32) -> NotecardResult<()> {
        let pixmap =
            image_premul_bytes_to_pixmap(image.rgba8_premul.as_slice(), image.width, image.height)?;
        let paint = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(translate(x, y)));
        self.ctx.set_paint(paint);
        self.ctx.fill_rect(&rect_to_cpu(Rect::new(
            0.0,
            0.0,
            f64::from(image.width),
            f64::from(image.height),
        )));
        Ok(())
    }

    /// Draw a text layout with the layout's top-left corner at `(x, y)`.
    pub fn draw_text(
        &mut self,
        layout: &parley::Layout<TextBrushRgba8>,
        face: &FontFace,
        x: i32,
        y: i32,
    ) {
        self.ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx.set_transform(affine_to_cpu(translate(x, y)));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };

                let brush = run.style().brush;
                self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                self.ctx
                    .glyph_run(face.font_data())
                    .font_size(run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
    }

    /// Rasterize everything drawn so far into an RGB image.
    pub fn finish(mut self) -> NotecardResult<image::RgbImage> {
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);

        let rgb: Vec<u8> = pixmap
            .data_as_u8_slice()
            .chunks_exact(4)
            .flat_map(|px| unpremultiply(px[0], px[1], px[2], px[3]))
            .collect();

        image::RgbImage::from_raw(u32::from(self.width), u32::from(self.height), rgb)
            .ok_or_else(|| NotecardError::render("pixmap size does not match canvas"))
    }
}

fn translate(x: i32, y: i32) -> Affine {
    Affine::translate((f64::from(x), f64::from(y)))
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> [u8; 3] {
    match a {
        255 => [r, g, b],
        0 => [0, 0, 0],
        a => {
            let a = u16::from(a);
            let un = |c: u8| -> u8 { ((u16::from(c) * 255 + a / 2) / a).min(255) as u8 };
            [un(r), un(g), un(b)]
        }
    }
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> NotecardResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| NotecardError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| NotecardError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(NotecardError::render("prepared image byte length mismatch"));
    }

    let pixels: Vec<_> = rgba8_premul
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        })
        .collect();
    let translucent = pixels.iter().any(|px| px.a != 255);

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        translucent,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
