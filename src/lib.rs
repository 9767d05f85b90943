//! Notecards renders thank-you cards from CSV responses and tiles them onto printable sheets.
//!
//! # Pipeline overview
//!
//! 1. **Read**: [`ResponseReader`] streams one column of a CSV file in row order.
//! 2. **Render**: [`CardRenderer`] wraps, sanitizes, measures and draws each response onto a
//!    1700x1100 card with a heading image and two footer lines.
//! 3. **Tile**: [`SheetBuffer`] groups cards by eight and [`compose_sheet`] places them on a
//!    3400x4400 sheet.
//! 4. **Write**: a [`SheetSink`] receives each finished sheet, e.g. [`PngDirSink`].
//!
//! Fonts and artwork are loaded once into [`NotecardAssets`]; renderers never touch the
//! filesystem.
#![forbid(unsafe_code)]

pub mod assets;
pub mod batch;
pub mod config;
pub mod foundation;
pub mod render;
pub mod text;

pub use assets::decode::{PreparedImage, decode_heading, decode_image_resized, rasterize_svg};
pub use assets::store::{HEADING_SIZE, NotecardAssets};
pub use batch::driver::{
    BatchOutput, BatchReport, CardReviewer, PreviewReviewer, SheetBuffer, run_batch,
};
pub use batch::sink::{InMemorySink, PngDirSink, ProgressSink, SheetSink};
pub use batch::source::ResponseReader;
pub use config::{AssetPaths, CardText, NotecardConfig};
pub use foundation::core::{
    CARD_HEIGHT, CARD_WIDTH, CARDS_PER_SHEET, GridCell, Rgb8, SHEET_HEIGHT, SHEET_WIDTH,
    WRAP_WIDTH, grid_cell, sheets_for,
};
pub use foundation::error::{NotecardError, NotecardResult};
pub use render::card::{CardRender, CardRenderer, body_text};
pub use render::sheet::compose_sheet;
pub use render::{Notecard, Sheet};
pub use text::metrics::{FontFace, TextExtent, TextLayoutEngine};
pub use text::sanitize::strip_emoji;
pub use text::wrap::{wrap_paragraph, wrap_response};
