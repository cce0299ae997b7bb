//! Type-safe builder for `PathConfig` using the typestate pattern
//!
//! `build()` only exists once the output directory has been supplied, so a
//! config without a root segment cannot be constructed.

use anyhow::{Result, bail};
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::{DateFolders, PathConfig, SaveImages};

// Type states for the builder
pub struct WithOutput;

pub struct PathConfigBuilder<State = ()> {
    pub(crate) output: Option<PathBuf>,
    pub(crate) date_folders: DateFolders,
    pub(crate) prefix_date: bool,
    pub(crate) post_folders: bool,
    pub(crate) save_images: SaveImages,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for PathConfigBuilder<()> {
    fn default() -> Self {
        let defaults = PathConfig::default();
        Self {
            output: None,
            date_folders: defaults.date_folders,
            prefix_date: defaults.prefix_date,
            post_folders: defaults.post_folders,
            save_images: defaults.save_images,
            _phantom: PhantomData,
        }
    }
}

impl PathConfig {
    /// Create a builder for configuring a `PathConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> PathConfigBuilder<()> {
        PathConfigBuilder::default()
    }

    /// Start a builder pre-populated from an existing config, e.g. one loaded
    /// from a file that CLI flags are about to override.
    #[must_use]
    pub fn to_builder(&self) -> PathConfigBuilder<WithOutput> {
        PathConfigBuilder {
            output: Some(self.output.clone()),
            date_folders: self.date_folders,
            prefix_date: self.prefix_date,
            post_folders: self.post_folders,
            save_images: self.save_images,
            _phantom: PhantomData,
        }
    }
}

impl PathConfigBuilder<()> {
    pub fn output(self, dir: impl Into<PathBuf>) -> PathConfigBuilder<WithOutput> {
        PathConfigBuilder {
            output: Some(dir.into()),
            date_folders: self.date_folders,
            prefix_date: self.prefix_date,
            post_folders: self.post_folders,
            save_images: self.save_images,
            _phantom: PhantomData,
        }
    }
}

// Build method only available when the output directory is set
impl PathConfigBuilder<WithOutput> {
    /// Replace the output directory chosen earlier.
    #[must_use]
    pub fn with_output(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output = Some(dir.into());
        self
    }

    /// # Errors
    ///
    /// Returns an error if the output directory is empty.
    pub fn build(self) -> Result<PathConfig> {
        let output = self.output.unwrap_or_default();
        if output.as_os_str().is_empty() {
            bail!("Output directory must not be empty");
        }

        Ok(PathConfig {
            output,
            date_folders: self.date_folders,
            prefix_date: self.prefix_date,
            post_folders: self.post_folders,
            save_images: self.save_images,
        })
    }
}
