use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::foundation::error::{NotecardError, NotecardResult};

/// Run configuration for a batch.
///
/// Every field has a default, so a JSON file only needs the keys it overrides. Card geometry
/// is fixed and deliberately absent here.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotecardConfig {
    /// CSV file with one response per row.
    pub input: PathBuf,
    /// Header of the column holding the response text.
    pub response_column: String,
    /// Directory sheets are written into.
    pub output_dir: PathBuf,
    /// File name prefix for sheets; the zero-based sheet index and `.png` follow it.
    pub file_prefix: String,
    /// Font and image locations.
    pub assets: AssetPaths,
    /// Fixed footer strings.
    pub text: CardText,
}

impl Default for NotecardConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("data-teachers_2025.csv"),
            response_column: "Response".to_string(),
            output_dir: PathBuf::from("images/out"),
            file_prefix: "notecards_".to_string(),
            assets: AssetPaths::default(),
            text: CardText::default(),
        }
    }
}

impl NotecardConfig {
    /// Load a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> NotecardResult<Self> {
        let f = File::open(path).with_context(|| format!("open config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse config '{}'", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> NotecardResult<()> {
        if self.response_column.trim().is_empty() {
            return Err(NotecardError::validation(
                "response_column must be non-empty",
            ));
        }
        if self.file_prefix.contains(['/', '\\']) {
            return Err(NotecardError::validation(
                "file_prefix must not contain path separators",
            ));
        }
        Ok(())
    }
}

/// Locations of the static assets loaded once per run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssetPaths {
    /// Typewriter face used for the response body and the handle line.
    pub body_font: PathBuf,
    /// Script face used for the caption.
    pub script_font: PathBuf,
    /// Heading artwork (PNG, JPEG or SVG).
    pub heading_image: PathBuf,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            body_font: PathBuf::from("fonts/typewriter.TTF"),
            script_font: PathBuf::from("fonts/modernline.OTF"),
            heading_image: PathBuf::from("images/heart.png"),
        }
    }
}

/// Footer lines printed on every card.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardText {
    pub caption: String,
    pub handle: String,
}

impl Default for CardText {
    fn default() -> Self {
        Self {
            caption: "Thank you".to_string(),
            handle: "@wrhs_smileproject".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
