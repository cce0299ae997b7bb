//! Getter methods for `PathConfig`
//!
//! Fields are crate-private so a built config cannot be mutated by callers.

use std::path::Path;

use super::types::{DateFolders, PathConfig, SaveImages};

impl PathConfig {
    #[must_use]
    pub fn output(&self) -> &Path {
        &self.output
    }

    #[must_use]
    pub fn date_folders(&self) -> DateFolders {
        self.date_folders
    }

    #[must_use]
    pub fn prefix_date(&self) -> bool {
        self.prefix_date
    }

    #[must_use]
    pub fn post_folders(&self) -> bool {
        self.post_folders
    }

    #[must_use]
    pub fn save_images(&self) -> SaveImages {
        self.save_images
    }
}
