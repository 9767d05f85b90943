use std::{
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{foundation::error::NotecardResult, render::Sheet};

/// Destination for finished sheets.
///
/// Ordering contract: `push_sheet` is called with strictly increasing `Sheet::index`, starting
/// at 0.
pub trait SheetSink {
    fn push_sheet(&mut self, sheet: &Sheet) -> NotecardResult<()>;
}

/// Writes each sheet as `<dir>/<prefix><index>.png`.
#[derive(Debug)]
pub struct PngDirSink {
    dir: PathBuf,
    prefix: String,
    written: Vec<PathBuf>,
}

impl PngDirSink {
    /// Create the output directory if needed.
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> NotecardResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        Ok(Self {
            dir,
            prefix: prefix.into(),
            written: Vec::new(),
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path a sheet with `index` is written to.
    pub fn path_for(&self, index: usize) -> PathBuf {
        self.dir.join(format!("{}{index}.png", self.prefix))
    }

    /// Files written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl SheetSink for PngDirSink {
    fn push_sheet(&mut self, sheet: &Sheet) -> NotecardResult<()> {
        let path = self.path_for(sheet.index);
        sheet
            .pixels
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        tracing::info!(index = sheet.index, cards = sheet.cards, path = %path.display(), "sheet written");
        self.written.push(path);
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    sheets: Vec<Sheet>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the captured sheets.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }
}

impl SheetSink for InMemorySink {
    fn push_sheet(&mut self, sheet: &Sheet) -> NotecardResult<()> {
        self.sheets.push(sheet.clone());
        Ok(())
    }
}

/// Forwards to another sink, then prints the sheet index on its own line.
pub struct ProgressSink<S, W> {
    inner: S,
    out: W,
}

impl<S: SheetSink, W: Write> ProgressSink<S, W> {
    pub fn new(inner: S, out: W) -> Self {
        Self { inner, out }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: SheetSink, W: Write> SheetSink for ProgressSink<S, W> {
    fn push_sheet(&mut self, sheet: &Sheet) -> NotecardResult<()> {
        self.inner.push_sheet(sheet)?;
        writeln!(self.out, "{}", sheet.index).context("write progress")?;
        self.out.flush().context("flush progress")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/sink.rs"]
mod tests;
