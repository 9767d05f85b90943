use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;

use crate::{
    batch::sink::SheetSink,
    foundation::core::CARDS_PER_SHEET,
    foundation::error::NotecardResult,
    render::{Notecard, Sheet, card::CardRender, sheet::compose_sheet},
};

/// Inspects cards one at a time instead of tiling them.
pub trait CardReviewer {
    /// Called once per rendered card; `row` is zero-based.
    fn review(&mut self, row: usize, card: &Notecard) -> NotecardResult<()>;
}

/// Where rendered cards go.
pub enum BatchOutput<'a> {
    /// Buffer cards into sheets and push each sheet to the sink.
    Sheets(&'a mut dyn SheetSink),
    /// Hand every card to a reviewer; no sheets are produced.
    Review(&'a mut dyn CardReviewer),
}

/// Totals for a finished run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Rows rendered.
    pub cards: usize,
    /// Sheets emitted.
    pub sheets: usize,
}

/// Accumulates cards and yields a sheet every time eight are buffered.
#[derive(Debug, Default)]
pub struct SheetBuffer {
    cards: Vec<Notecard>,
    next_index: usize,
}

impl SheetBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards waiting for their sheet.
    pub fn pending(&self) -> usize {
        self.cards.len()
    }

    /// Add a card; returns the completed sheet when this was the eighth.
    pub fn push(&mut self, card: Notecard) -> NotecardResult<Option<Sheet>> {
        self.cards.push(card);
        if self.cards.len() < CARDS_PER_SHEET {
            return Ok(None);
        }
        self.flush()
    }

    /// Compose whatever is buffered into a final, possibly partial, sheet.
    pub fn finish(mut self) -> NotecardResult<Option<Sheet>> {
        self.flush()
    }

    fn flush(&mut self) -> NotecardResult<Option<Sheet>> {
        if self.cards.is_empty() {
            return Ok(None);
        }
        let sheet = compose_sheet(self.next_index, &self.cards)?;
        self.cards.clear();
        self.next_index += 1;
        Ok(Some(sheet))
    }
}

/// Render every row in order and deliver the cards to `output`.
///
/// The first error aborts the run. Sheets already pushed stay pushed; a partially filled sheet
/// is dropped.
#[tracing::instrument(skip_all)]
pub fn run_batch<I, C>(
    rows: I,
    renderer: &mut C,
    output: BatchOutput<'_>,
) -> NotecardResult<BatchReport>
where
    I: IntoIterator<Item = NotecardResult<String>>,
    C: CardRender + ?Sized,
{
    let mut report = BatchReport::default();

    match output {
        BatchOutput::Sheets(sink) => {
            let mut buffer = SheetBuffer::new();
            for row in rows {
                let card = renderer.render_card(&row?)?;
                report.cards += 1;
                if let Some(sheet) = buffer.push(card)? {
                    sink.push_sheet(&sheet)?;
                    report.sheets += 1;
                }
            }
            if let Some(sheet) = buffer.finish()? {
                sink.push_sheet(&sheet)?;
                report.sheets += 1;
            }
        }
        BatchOutput::Review(reviewer) => {
            for (index, row) in rows.into_iter().enumerate() {
                let card = renderer.render_card(&row?)?;
                report.cards += 1;
                reviewer.review(index, &card)?;
            }
        }
    }

    tracing::info!(cards = report.cards, sheets = report.sheets, "batch finished");
    Ok(report)
}

/// Writes each card to a preview PNG and waits for a line on `input` before continuing.
pub struct PreviewReviewer<R, W> {
    path: PathBuf,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> PreviewReviewer<R, W> {
    pub fn new(path: impl Into<PathBuf>, input: R, out: W) -> Self {
        Self {
            path: path.into(),
            input,
            out,
        }
    }
}

impl<R: BufRead, W: Write> CardReviewer for PreviewReviewer<R, W> {
    fn review(&mut self, row: usize, card: &Notecard) -> NotecardResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create preview dir '{}'", parent.display()))?;
        }
        card.pixels
            .save_with_format(&self.path, image::ImageFormat::Png)
            .with_context(|| format!("write preview '{}'", self.path.display()))?;

        write!(
            self.out,
            "row {row}: preview at {} (press Enter for the next card) ",
            self.path.display()
        )
        .context("write review prompt")?;
        self.out.flush().context("flush review prompt")?;

        let mut line = String::new();
        self.input
            .read_line(&mut line)
            .context("read review acknowledgement")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/driver.rs"]
mod tests;
