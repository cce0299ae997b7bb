//! HTML to Markdown conversion pipeline for post bodies
//!
//! 1. Preprocess the raw HTML with ordered text rewrites
//! 2. Convert with htmd plus the site-specific conversion rules
//! 3. Postprocess the Markdown with ordered whitespace cleanups
//!
//! Every stage is pure. The converter is built once and shared, so posts can
//! be converted in parallel without coordination.
//!
//! # Usage
//!
//! ```rust
//! # use wp_export_md::PathConfig;
//! # use wp_export_md::content_saver::markdown_converter::convert_post_content;
//! let config = PathConfig::builder().output("out").build()?;
//! let markdown = convert_post_content("<p>Hello <strong>world</strong></p>", &config)?;
//! assert_eq!(markdown, "Hello **world**");
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Context, Result};
use htmd::HtmlToMarkdown;
use std::sync::LazyLock;

use crate::config::PathConfig;

// Declare sub-modules
pub mod custom_handlers;
pub mod html_preprocessing;
pub mod markdown_postprocessing;

// Re-export sub-modules for advanced usage
pub use custom_handlers::{CONVERSION_RULES, ConversionRule, create_converter, find_rule};
pub use html_preprocessing::preprocess_html;
pub use markdown_postprocessing::postprocess_markdown;

static CONVERTER: LazyLock<HtmlToMarkdown> = LazyLock::new(create_converter);

/// Convert a post body to Markdown.
///
/// # Errors
///
/// Only if htmd itself fails to produce output for the preprocessed HTML.
pub fn convert_post_content(raw_html: &str, config: &PathConfig) -> Result<String> {
    let preprocessed = preprocess_html(raw_html, config);

    let converted = CONVERTER
        .convert(&preprocessed)
        .context("htmd failed to convert post HTML")?;
    tracing::debug!(markdown_len = converted.len(), "Converted post HTML to markdown");

    Ok(postprocess_markdown(&converted))
}
