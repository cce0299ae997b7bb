//! HTML preprocessing before htmd conversion.
//!
//! Whole-document text rewrites applied to the raw post body, in a fixed
//! order. Each step sees the previous step's output:
//!
//! 1. paragraph-break markers
//! 2. image paths to `images/` (only when images are saved locally)
//! 3. `[html]` heading shorthand unwrap
//! 4. "more" separator escaping
//! 5. code language hint moved onto `<pre>`
//!
//! Every step is a pure function and is exported so it can be tested alone.

pub mod block_separation;
pub mod content_rewrites;

pub use block_separation::{PARAGRAPH_MARKER, escape_more_separator, insert_paragraph_markers};
pub use content_rewrites::{propagate_code_language, rewrite_image_paths, unwrap_bracketed_headings};

use crate::config::PathConfig;

/// Run all preprocessing steps in order.
#[must_use]
pub fn preprocess_html(html: &str, config: &PathConfig) -> String {
    let mut content = insert_paragraph_markers(html).into_owned();

    if config.save_images().rewrites_content_images() {
        content = rewrite_image_paths(&content).into_owned();
    }

    content = unwrap_bracketed_headings(&content).into_owned();
    content = escape_more_separator(&content).into_owned();
    content = propagate_code_language(&content).into_owned();

    tracing::debug!(
        input_len = html.len(),
        output_len = content.len(),
        "Preprocessed post HTML"
    );
    content
}
