pub use kurbo::{Affine, Rect};

/// Output sheet width in pixels.
pub const SHEET_WIDTH: u32 = 3400;
/// Output sheet height in pixels.
pub const SHEET_HEIGHT: u32 = 4400;

/// Number of card columns on a sheet.
pub const SHEET_COLUMNS: u32 = 2;
/// Number of card rows on a sheet.
pub const SHEET_ROWS: u32 = 4;
/// Cards per full sheet.
pub const CARDS_PER_SHEET: usize = (SHEET_COLUMNS * SHEET_ROWS) as usize;

/// Notecard width in pixels (half a sheet).
pub const CARD_WIDTH: u32 = SHEET_WIDTH / SHEET_COLUMNS;
/// Notecard height in pixels (a quarter of a sheet).
pub const CARD_HEIGHT: u32 = SHEET_HEIGHT / SHEET_ROWS;

/// Character column at which response paragraphs are wrapped.
pub const WRAP_WIDTH: usize = 45;

/// Extra pixels added per body line on top of the blank-line offset.
pub const LINE_SPACING_PX: i32 = 10;

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_image(self) -> image::Rgb<u8> {
        image::Rgb([self.r, self.g, self.b])
    }
}

/// A cell of the sheet grid, in card units.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub column: u32,
    pub row: u32,
}

impl GridCell {
    /// Top-left pixel offset of this cell on a sheet.
    pub fn pixel_origin(self) -> (u32, u32) {
        (self.column * CARD_WIDTH, self.row * CARD_HEIGHT)
    }
}

/// Grid cell for the card at `index` within its sheet.
///
/// The column is `(index / 4 + index) % 2` and the row is `index % 4`, which fills the left
/// column top to bottom first and the right column after. Printed stock is cut against this
/// order, so it must not be normalized to a plain row-major fill.
pub fn grid_cell(index: usize) -> GridCell {
    let rows = SHEET_ROWS as usize;
    GridCell {
        column: ((index / rows + index) % SHEET_COLUMNS as usize) as u32,
        row: (index % rows) as u32,
    }
}

/// Number of sheets needed for `cards` notecards.
pub fn sheets_for(cards: usize) -> usize {
    cards.div_ceil(CARDS_PER_SHEET)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
