//! Shared naming constants for the output layout
//!
//! These are the fixed folder and file names that appear in built paths and
//! rewritten content, collected here so path building, preprocessing and the
//! writer agree on them.

/// Type folder for `post` items.
pub const POSTS_FOLDER: &str = "posts";

/// Type folder for `page` items.
pub const PAGES_FOLDER: &str = "pages";

/// Parent folder for every custom post type; the type name is nested below it.
pub const CUSTOM_FOLDER: &str = "custom";

/// Folder inserted after the type folder for unpublished posts.
pub const DRAFTS_FOLDER: &str = "_drafts";

/// File name used when each post gets its own folder.
pub const INDEX_FILENAME: &str = "index.md";

/// Extension of every written post.
pub const MARKDOWN_EXTENSION: &str = "md";

/// Relative folder that content images are saved to, next to the post file.
pub const IMAGES_FOLDER: &str = "images";

/// Prefix of the slug used for posts exported without one.
pub const ID_SLUG_PREFIX: &str = "id-";
