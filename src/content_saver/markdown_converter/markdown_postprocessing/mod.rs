//! Markdown postprocessing after htmd conversion.
//!
//! Applied in order:
//! 1. "more" separator restored to a literal comment
//! 2. list marker spacing
//! 3. blank line collapsing (runs last so it also cleans up after step 2)

mod comment_restoration;
mod whitespace_normalization;

pub use comment_restoration::restore_more_separator;
pub use whitespace_normalization::{collapse_blank_lines, collapse_list_marker_spacing};

/// Run all postprocessing steps in order.
#[must_use]
pub fn postprocess_markdown(markdown: &str) -> String {
    let restored = restore_more_separator(markdown);
    let spaced = collapse_list_marker_spacing(&restored);
    collapse_blank_lines(&spaced).into_owned()
}
