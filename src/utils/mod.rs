pub mod constants;
pub mod filename_utils;
pub mod path_utils;

pub use constants::*;
pub use filename_utils::{get_filename_from_url, get_unique_filename, sanitize_filename};
pub use path_utils::{build_post_path, slug_with_fallback};
