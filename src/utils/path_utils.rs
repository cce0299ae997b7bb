//! Output path construction for posts.
//!
//! Maps a post's metadata plus the global `PathConfig` onto a relative or
//! absolute filesystem path. Pure: no I/O and no randomness, so the same
//! inputs always produce the same path.

use std::borrow::Cow;
use std::path::PathBuf;

use crate::config::{DateFolders, PathConfig};
use crate::post::{Post, PostType};

use super::constants::{
    CUSTOM_FOLDER, DRAFTS_FOLDER, ID_SLUG_PREFIX, INDEX_FILENAME, MARKDOWN_EXTENSION,
    PAGES_FOLDER, POSTS_FOLDER,
};
use super::filename_utils::sanitize_filename;

/// The post's slug, or `id-<id>` when the export has none.
///
/// This is the only identity guarantee for posts without an authored slug,
/// so every place that needs a slug goes through here.
#[must_use]
pub fn slug_with_fallback(post: &Post) -> Cow<'_, str> {
    match post.slug.as_deref() {
        Some(slug) if !slug.is_empty() => Cow::Borrowed(slug),
        _ => Cow::Owned(format!("{ID_SLUG_PREFIX}{}", post.id)),
    }
}

/// One path segment taken from post metadata.
///
/// Separators and other illegal characters become `_`, so a slug like
/// `a/b` or `../x` can never add or climb directories. A name made only of
/// dots (or empty) is replaced by underscores of the same length.
fn metadata_segment(raw: &str) -> String {
    let sanitized = sanitize_filename(raw);
    if sanitized.chars().all(|c| c == '.') {
        "_".repeat(sanitized.len().max(1))
    } else {
        sanitized
    }
}

/// Build the output path for a post.
///
/// Segments, in order:
/// 1. `config.output()`
/// 2. type folder: `posts`, `pages`, or `custom/<type>`
/// 3. `_drafts` for drafts
/// 4. `yyyy` and optionally `mm` date folders (only when the post has a date)
/// 5. `[yyyy-mm-dd-]slug.md`, or `[yyyy-mm-dd-]slug/index.md` with post folders
///
/// Date-dependent segments are silently omitted for undated posts. The slug
/// and custom type name are sanitized so each stays a single segment.
///
/// # Examples
///
/// ```rust
/// # use wp_export_md::{PathConfig, Post, PostType, build_post_path};
/// let config = PathConfig::builder().output("out").post_folders(false).build()?;
/// let post = Post::new(1).with_slug("hello").with_type(PostType::Page);
/// assert_eq!(build_post_path(&post, &config), std::path::Path::new("out/pages/hello.md"));
/// # Ok::<(), anyhow::Error>(())
/// ```
#[must_use]
pub fn build_post_path(post: &Post, config: &PathConfig) -> PathBuf {
    let mut path = PathBuf::from(config.output());

    match &post.post_type {
        Some(PostType::Post) => path.push(POSTS_FOLDER),
        Some(PostType::Page) => path.push(PAGES_FOLDER),
        Some(PostType::Custom(name)) => {
            path.push(CUSTOM_FOLDER);
            path.push(metadata_segment(name));
        }
        None => {}
    }

    if post.is_draft {
        path.push(DRAFTS_FOLDER);
    }

    if let Some(date) = post.date {
        match config.date_folders() {
            DateFolders::Year => path.push(date.format("%Y").to_string()),
            DateFolders::YearMonth => {
                path.push(date.format("%Y").to_string());
                path.push(date.format("%m").to_string());
            }
            DateFolders::None => {}
        }
    }

    let mut slug = metadata_segment(&slug_with_fallback(post));
    if config.prefix_date()
        && let Some(date) = post.date
    {
        slug = format!("{}-{slug}", date.format("%Y-%m-%d"));
    }

    if config.post_folders() {
        path.push(slug);
        path.push(INDEX_FILENAME);
    } else {
        path.push(format!("{slug}.{MARKDOWN_EXTENSION}"));
    }

    tracing::trace!(post_id = post.id, path = %path.display(), "Built post path");
    path
}
