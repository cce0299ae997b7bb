pub mod config;
pub mod content_saver;
pub mod post;
pub mod utils;

use std::path::PathBuf;

pub use config::{DateFolders, PathConfig, PathConfigBuilder, SaveImages};
pub use content_saver::markdown_converter::{
    CONVERSION_RULES, ConversionRule, convert_post_content, postprocess_markdown, preprocess_html,
};
pub use content_saver::{SaveError, render_post, save_post, save_posts};
pub use post::{Post, PostType};
pub use utils::{
    build_post_path, get_filename_from_url, get_unique_filename, sanitize_filename,
    slug_with_fallback,
};

/// Output path for a post. Pure; does not check the filesystem.
#[must_use]
pub fn path_for(post: &Post, config: &PathConfig) -> PathBuf {
    build_post_path(post, config)
}

/// Markdown for a raw post body.
///
/// # Errors
///
/// Only if the underlying HTML-to-Markdown engine fails.
pub fn markdown_for(raw_html: &str, config: &PathConfig) -> anyhow::Result<String> {
    convert_post_content(raw_html, config)
}
