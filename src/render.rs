pub mod card;
pub mod cpu;
pub mod sheet;

/// One rendered notecard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notecard {
    pub pixels: image::RgbImage,
}

impl Notecard {
    /// A card of the standard size filled with a single color.
    pub fn filled(color: crate::foundation::core::Rgb8) -> Self {
        Self {
            pixels: image::RgbImage::from_pixel(
                crate::foundation::core::CARD_WIDTH,
                crate::foundation::core::CARD_HEIGHT,
                color.to_image(),
            ),
        }
    }
}

/// A composed sheet of up to eight notecards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Sheet {
    /// Zero-based position of this sheet in the run.
    pub index: usize,
    /// Number of cards placed on the sheet.
    pub cards: usize,
    pub pixels: image::RgbImage,
}
