use std::sync::Arc;

use super::*;
use crate::text::metrics::TextLayoutEngine;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> PreparedImage {
    PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba.repeat((width * height) as usize)),
    }
}

#[test]
fn new_canvas_is_filled_with_background() {
    let canvas = CpuCanvas::new(16, 8, Rgb8::WHITE).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (16, 8));
    let img = canvas.finish().unwrap();
    assert_eq!(img.dimensions(), (16, 8));
    assert!(img.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn oversized_canvas_is_rejected() {
    assert!(CpuCanvas::new(70_000, 4, Rgb8::WHITE).is_err());
}

#[test]
fn draw_image_lands_at_offset() {
    let mut canvas = CpuCanvas::new(16, 16, Rgb8::WHITE).unwrap();
    canvas
        .draw_image(&solid(4, 4, [255, 0, 0, 255]), 8, 4)
        .unwrap();
    let img = canvas.finish().unwrap();

    let [r, g, b] = img.get_pixel(9, 5).0;
    assert!(r > 240 && g < 15 && b < 15, "image pixel {:?}", [r, g, b]);
    assert_eq!(img.get_pixel(2, 2).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(9, 12).0, [255, 255, 255]);
}

#[test]
fn transparent_image_pixels_keep_background() {
    let mut canvas = CpuCanvas::new(8, 8, Rgb8::WHITE).unwrap();
    canvas
        .draw_image(&solid(8, 8, [0, 0, 0, 0]), 0, 0)
        .unwrap();
    let img = canvas.finish().unwrap();
    assert!(img.pixels().all(|p| p.0 == [255, 255, 255]));
}

#[test]
fn draw_image_rejects_bad_buffers() {
    let mut canvas = CpuCanvas::new(8, 8, Rgb8::WHITE).unwrap();
    let bad = PreparedImage {
        width: 2,
        height: 2,
        rgba8_premul: Arc::new(vec![0; 3]),
    };
    assert!(canvas.draw_image(&bad, 0, 0).is_err());
}

#[test]
fn draw_text_inks_pixels_near_origin() {
    let bytes = std::fs::read("tests/data/fonts/DejaVuSansMono.ttf").unwrap();
    let mut engine = TextLayoutEngine::new();
    let face = engine.register_font(&bytes).unwrap();
    let layout = engine.layout("MMM", &face, 40.0).unwrap();

    let mut canvas = CpuCanvas::new(200, 100, Rgb8::WHITE).unwrap();
    canvas.draw_text(&layout, &face, 20, 10);
    let img = canvas.finish().unwrap();

    let dark = |x0: u32, x1: u32| {
        img.enumerate_pixels()
            .filter(|(x, _, p)| *x >= x0 && *x < x1 && p.0[0] < 128)
            .count()
    };
    assert!(dark(20, 200) > 0);
    assert_eq!(dark(0, 20), 0);
}

#[test]
fn unpremultiply_restores_straight_color() {
    assert_eq!(unpremultiply(10, 20, 30, 255), [10, 20, 30]);
    assert_eq!(unpremultiply(0, 0, 0, 0), [0, 0, 0]);
    assert_eq!(unpremultiply(64, 0, 128, 128), [128, 0, 255]);
}

#[test]
fn pixmap_rejects_mismatched_byte_length() {
    assert!(image_premul_bytes_to_pixmap(&[0; 12], 2, 2).is_err());
    assert!(image_premul_bytes_to_pixmap(&[255; 16], 2, 2).is_ok());
}
