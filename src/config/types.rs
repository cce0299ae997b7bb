//! Core configuration types for path building and conversion
//!
//! Key names match the command-line flag names (`date-folders`,
//! `prefix-date`, ...) so a config file can be written with the same words
//! users pass on the command line.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// How output paths are partitioned by post date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFolders {
    #[default]
    None,
    Year,
    YearMonth,
}

impl FromStr for DateFolders {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "year" => Ok(Self::Year),
            "year-month" => Ok(Self::YearMonth),
            _ => Err(format!(
                "Invalid date folders: {s}. Valid options: none, year, year-month"
            )),
        }
    }
}

/// Which images are saved locally next to the markdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaveImages {
    None,
    Attached,
    Scraped,
    #[default]
    All,
    Offline,
}

impl SaveImages {
    /// Whether `<img src>` references in post bodies point at the local
    /// `images/` folder.
    #[must_use]
    pub fn rewrites_content_images(self) -> bool {
        matches!(self, Self::Scraped | Self::All)
    }
}

impl FromStr for SaveImages {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "attached" => Ok(Self::Attached),
            "scraped" => Ok(Self::Scraped),
            "all" => Ok(Self::All),
            "offline" => Ok(Self::Offline),
            _ => Err(format!(
                "Invalid save images mode: {s}. Valid options: none, attached, scraped, all, offline"
            )),
        }
    }
}

/// Global settings for output layout and conversion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PathConfig {
    /// Base output directory, first segment of every built path.
    pub(crate) output: PathBuf,
    pub(crate) date_folders: DateFolders,
    /// Prepend `yyyy-mm-dd-` to the slug when the post has a date.
    pub(crate) prefix_date: bool,
    /// Write `slug/index.md` instead of `slug.md`.
    pub(crate) post_folders: bool,
    pub(crate) save_images: SaveImages,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("output"),
            date_folders: DateFolders::None,
            prefix_date: false,
            post_folders: true,
            save_images: SaveImages::All,
        }
    }
}

impl PathConfig {
    /// Load a config file. Keys missing from the file keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON for
    /// this structure.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse a config document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid JSON for this structure.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        tracing::debug!(?config, "Loaded path config");
        Ok(config)
    }
}
