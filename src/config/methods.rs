//! Builder methods available for all states
//!
//! This module contains methods that can be called on the builder
//! regardless of its current type state.

use super::builder::PathConfigBuilder;
use super::types::{DateFolders, SaveImages};

impl<State> PathConfigBuilder<State> {
    #[must_use]
    pub fn date_folders(mut self, date_folders: DateFolders) -> Self {
        self.date_folders = date_folders;
        self
    }

    #[must_use]
    pub fn prefix_date(mut self, prefix_date: bool) -> Self {
        self.prefix_date = prefix_date;
        self
    }

    #[must_use]
    pub fn post_folders(mut self, post_folders: bool) -> Self {
        self.post_folders = post_folders;
        self
    }

    /// Only `Scraped` and `All` rewrite `<img src>` references during
    /// preprocessing; the other modes leave post bodies untouched.
    #[must_use]
    pub fn save_images(mut self, save_images: SaveImages) -> Self {
        self.save_images = save_images;
        self
    }
}
