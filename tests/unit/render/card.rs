use std::sync::Arc;

use super::*;

const RED: [u8; 4] = [200, 0, 0, 255];

fn renderer() -> CardRenderer {
    let body = std::fs::read("tests/data/fonts/DejaVuSansMono.ttf").unwrap();
    let script = std::fs::read("tests/data/fonts/DejaVuSerif-Italic.ttf").unwrap();
    let heading = PreparedImage {
        width: 125,
        height: 125,
        rgba8_premul: Arc::new(RED.repeat(125 * 125)),
    };
    let assets = NotecardAssets::from_parts(body, script, heading);
    CardRenderer::new(&assets, CardText::default()).unwrap()
}

fn is_ink(p: &image::Rgb<u8>) -> bool {
    p.0.iter().all(|&c| c < 128)
}

/// Rows in `y0..y1` containing at least one dark pixel, grouped into contiguous bands.
fn ink_bands(card: &Notecard, y0: u32, y1: u32) -> Vec<(u32, u32)> {
    let mut bands: Vec<(u32, u32)> = Vec::new();
    for y in y0..y1 {
        let inked = (0..CARD_WIDTH).any(|x| is_ink(card.pixels.get_pixel(x, y)));
        if !inked {
            continue;
        }
        match bands.last_mut() {
            Some((_, end)) if *end + 1 == y => *end = y,
            _ => bands.push((y, y)),
        }
    }
    bands
}

const BODY_TOP: u32 = 210;
const BODY_BOTTOM: u32 = 840;

#[test]
fn body_text_wraps_then_strips() {
    let response = format!("{} \u{1F600}", "word ".repeat(10).trim_end());
    let body = body_text(&response);
    assert!(!body.contains('\u{1F600}'));
    assert!(body.lines().all(|l| l.chars().count() <= WRAP_WIDTH));
}

#[test]
fn centering_helpers_match_card_geometry() {
    assert_eq!(centered_x(0), 850);
    assert_eq!(centered_x(125), 850 - 62);
    assert_eq!(centered_x(624), 850 - 312);

    assert_eq!(body_line_top(100, 0), 500);
    assert_eq!(body_line_top(100, 3), 530);
    assert_eq!(body_line_top(101, 0), 499);
    assert_eq!(body_line_top(1300, 0), -100);
}

#[test]
fn footer_offsets_are_fixed() {
    assert_eq!(CARD_HEIGHT as i32 - CAPTION_BOTTOM_OFFSET, 850);
    assert_eq!(CARD_HEIGHT as i32 - HANDLE_BOTTOM_OFFSET, 1000);
}

#[test]
fn card_has_heading_and_footer() {
    let mut r = renderer();
    let card = r.render("Thank you for a great year!").unwrap();

    assert_eq!(card.pixels.dimensions(), (CARD_WIDTH, CARD_HEIGHT));
    let [r, g, b] = card.pixels.get_pixel(850, 80 + 62).0;
    assert!(r > 180 && g < 30 && b < 30, "heading pixel {:?}", [r, g, b]);
    assert_eq!(card.pixels.get_pixel(10, 10).0, [255, 255, 255]);

    assert!(!ink_bands(&card, 850, 1000).is_empty(), "caption missing");
    assert!(!ink_bands(&card, 1000, CARD_HEIGHT).is_empty(), "handle missing");
    assert_eq!(ink_bands(&card, BODY_TOP, BODY_BOTTOM).len(), 1);
}

#[test]
fn emoji_only_response_leaves_body_blank() {
    let mut r = renderer();
    let card = r.render("\u{1F60D}\u{1F60D}\u{1F389}").unwrap();
    assert!(ink_bands(&card, BODY_TOP, BODY_BOTTOM).is_empty());
    assert!(!ink_bands(&card, 1000, CARD_HEIGHT).is_empty());
}

#[test]
fn embedded_newline_produces_separate_line_groups() {
    let mut r = renderer();
    let card = r.render("Best teacher ever\nSee you next fall").unwrap();
    assert!(ink_bands(&card, BODY_TOP, BODY_BOTTOM).len() >= 2);
}

#[test]
fn body_is_horizontally_centered() {
    let mut r = renderer();
    let card = r.render("MMMMMMMMMM").unwrap();

    let (y0, y1) = ink_bands(&card, BODY_TOP, BODY_BOTTOM)[0];
    let mut min_x = CARD_WIDTH;
    let mut max_x = 0;
    for y in y0..=y1 {
        for x in 0..CARD_WIDTH {
            if is_ink(card.pixels.get_pixel(x, y)) {
                min_x = min_x.min(x);
                max_x = max_x.max(x);
            }
        }
    }
    let mid = (min_x + max_x) / 2;
    assert!(mid.abs_diff(850) <= 6, "ink centered at {mid}");
}

#[test]
fn render_card_trait_delegates() {
    let mut r = renderer();
    let a = r.render("same").unwrap();
    let b = CardRender::render_card(&mut r, "same").unwrap();
    assert_eq!(a, b);
}
