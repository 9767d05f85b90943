use crate::{
    foundation::core::{
        CARD_HEIGHT, CARD_WIDTH, CARDS_PER_SHEET, Rgb8, SHEET_HEIGHT, SHEET_WIDTH, grid_cell,
    },
    foundation::error::{NotecardError, NotecardResult},
    render::{Notecard, Sheet},
};

/// Tile 1..=8 cards onto a white sheet in grid order.
///
/// Card `i` goes to [`grid_cell`]`(i)`; cells without a card stay white.
#[tracing::instrument(skip(cards), fields(card_count = cards.len()))]
pub fn compose_sheet(index: usize, cards: &[Notecard]) -> NotecardResult<Sheet> {
    if cards.is_empty() {
        return Err(NotecardError::validation("a sheet needs at least one card"));
    }
    if cards.len() > CARDS_PER_SHEET {
        return Err(NotecardError::validation(format!(
            "a sheet holds at most {CARDS_PER_SHEET} cards, got {}",
            cards.len()
        )));
    }

    let mut pixels =
        image::RgbImage::from_pixel(SHEET_WIDTH, SHEET_HEIGHT, Rgb8::WHITE.to_image());
    for (i, card) in cards.iter().enumerate() {
        if card.pixels.dimensions() != (CARD_WIDTH, CARD_HEIGHT) {
            let (w, h) = card.pixels.dimensions();
            return Err(NotecardError::validation(format!(
                "card {i} is {w}x{h}, expected {CARD_WIDTH}x{CARD_HEIGHT}"
            )));
        }
        let (x, y) = grid_cell(i).pixel_origin();
        image::imageops::replace(&mut pixels, &card.pixels, i64::from(x), i64::from(y));
    }

    Ok(Sheet {
        index,
        cards: cards.len(),
        pixels,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/sheet.rs"]
mod tests;
