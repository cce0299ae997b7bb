//! Converting post bodies and saving them as Markdown files

// Module declarations
pub mod markdown_converter;
mod markdown_saver;

// Re-export public API from markdown_saver module
pub use markdown_saver::{SaveError, render_post, save_post, save_posts};
