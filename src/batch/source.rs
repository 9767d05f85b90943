use std::{fs::File, io::Read, path::Path};

use anyhow::Context;

use crate::foundation::error::{NotecardError, NotecardResult};

const BOM: char = '\u{feff}';

/// Streams one column of a CSV file, row by row, in file order.
pub struct ResponseReader<R: Read> {
    records: csv::StringRecordsIntoIter<R>,
    column: usize,
    row: usize,
}

impl ResponseReader<File> {
    /// Open `path` and locate `column` in its header row.
    pub fn from_path(path: &Path, column: &str) -> NotecardResult<Self> {
        let f = File::open(path).with_context(|| format!("open responses '{}'", path.display()))?;
        Self::from_reader(f, column)
    }
}

impl<R: Read> ResponseReader<R> {
    /// Read the header row from `reader` and locate `column`.
    ///
    /// A UTF-8 byte-order mark in front of the first header is ignored.
    pub fn from_reader(reader: R, column: &str) -> NotecardResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let index = {
            let headers = rdr.headers().context("read csv header row")?;
            headers
                .iter()
                .position(|h| h.trim_start_matches(BOM) == column)
                .ok_or_else(|| {
                    NotecardError::input(format!(
                        "missing column '{column}' (found: {})",
                        headers
                            .iter()
                            .map(|h| h.trim_start_matches(BOM))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                })?
        };

        Ok(Self {
            records: rdr.into_records(),
            column: index,
            row: 0,
        })
    }

    /// Number of data rows read so far.
    pub fn rows_read(&self) -> usize {
        self.row
    }
}

impl<R: Read> Iterator for ResponseReader<R> {
    type Item = NotecardResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        self.row += 1;
        let row = self.row;

        let item = match record {
            Ok(record) => record.get(self.column).map(str::to_string).ok_or_else(|| {
                NotecardError::input(format!("row {row} has no field {}", self.column))
            }),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("read csv row {row}"))
                .into()),
        };
        Some(item)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/source.rs"]
mod tests;
