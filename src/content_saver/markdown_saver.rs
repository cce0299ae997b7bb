use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::PathConfig;
use crate::post::Post;
use crate::utils::{build_post_path, get_unique_filename, sanitize_filename};

use super::markdown_converter::convert_post_content;

/// Errors from writing converted posts to disk
#[derive(Debug, Error)]
pub enum SaveError {
    /// htmd could not convert the post body
    #[error("Failed to convert post {post_id}: {message}")]
    Conversion { post_id: u64, message: String },

    /// Built path ended without a file or folder name
    #[error("Output path for post {post_id} has no file name: {path}")]
    InvalidPath { post_id: u64, path: PathBuf },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Front matter block followed by the converted body.
///
/// # Errors
///
/// Returns [`SaveError::Conversion`] if the body cannot be converted.
pub fn render_post(post: &Post, config: &PathConfig) -> Result<String, SaveError> {
    let body = convert_post_content(&post.content, config).map_err(|e| SaveError::Conversion {
        post_id: post.id,
        message: format!("{e:#}"),
    })?;
    Ok(format!("{}{body}\n", front_matter(post)))
}

fn front_matter(post: &Post) -> String {
    // A JSON string literal is a valid YAML double-quoted scalar.
    let title = serde_json::Value::String(post.title.clone());
    let mut front_matter = format!("---\ntitle: {title}\n");
    if let Some(date) = post.date {
        front_matter.push_str(&format!("date: {}\n", date.format("%Y-%m-%d")));
    }
    front_matter.push_str("---\n\n");
    front_matter
}

/// Resolve the final, collision-free path for a post.
///
/// The last name the post owns is sanitized and uniquified: the file name
/// normally, or the slug folder when each post gets its own folder. Checks
/// the filesystem, so it must run in the same serial pass as the write.
fn resolve_output_path(post: &Post, config: &PathConfig) -> Result<PathBuf, SaveError> {
    let built = build_post_path(post, config);
    let invalid = || SaveError::InvalidPath {
        post_id: post.id,
        path: built.clone(),
    };

    let owned = if config.post_folders() {
        built.parent().ok_or_else(invalid)?
    } else {
        built.as_path()
    };
    let name = owned
        .file_name()
        .ok_or_else(invalid)?
        .to_string_lossy()
        .into_owned();
    let directory = owned.parent().unwrap_or_else(|| Path::new(""));

    let unique = get_unique_filename(directory, &sanitize_filename(&name));
    let mut resolved = directory.join(unique);
    if config.post_folders()
        && let Some(index) = built.file_name()
    {
        resolved.push(index);
    }
    Ok(resolved)
}

fn write_post_file(post: &Post, contents: &str, config: &PathConfig) -> Result<PathBuf, SaveError> {
    let path = resolve_output_path(post, config)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| SaveError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, contents).map_err(|source| SaveError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(post_id = post.id, "Saved {}", path.display());
    Ok(path)
}

/// Convert and write one post.
///
/// # Errors
///
/// Returns an error if conversion fails or the file cannot be written.
pub fn save_post(post: &Post, config: &PathConfig) -> Result<PathBuf, SaveError> {
    let contents = render_post(post, config)?;
    write_post_file(post, &contents, config)
}

/// Convert and write many posts, returning the written paths in input order.
///
/// Conversion runs in parallel since it touches no shared state. Name
/// resolution and writes then run serially in input order: the uniqueness
/// check is check-then-act and assumes a single writer per directory.
///
/// # Errors
///
/// Stops at the first post that fails to convert or write.
pub fn save_posts(posts: &[Post], config: &PathConfig) -> Result<Vec<PathBuf>, SaveError> {
    let rendered: Vec<Result<String, SaveError>> =
        posts.par_iter().map(|post| render_post(post, config)).collect();

    posts
        .iter()
        .zip(rendered)
        .map(|(post, contents)| write_post_file(post, &contents?, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn config(dir: &TempDir, post_folders: bool) -> PathConfig {
        PathConfig::builder()
            .output(dir.path())
            .post_folders(post_folders)
            .build()
            .unwrap()
    }

    #[test]
    fn test_front_matter_escapes_title() {
        let post = Post::new(1)
            .with_title(r#"Say "hi""#)
            .with_date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(
            front_matter(&post),
            "---\ntitle: \"Say \\\"hi\\\"\"\ndate: 2024-01-02\n---\n\n"
        );
    }

    #[test]
    fn test_save_post_writes_file() {
        let dir = TempDir::new().unwrap();
        let post = Post::new(1)
            .with_slug("hello")
            .with_title("Hello")
            .with_content("<p>Body</p>");

        let path = save_post(&post, &config(&dir, false)).unwrap();

        assert_eq!(path, dir.path().join("hello.md"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("---\ntitle: \"Hello\"\n---\n\n"));
        assert!(written.contains("Body"));
    }

    #[test]
    fn test_duplicate_slugs_get_suffixes() {
        let dir = TempDir::new().unwrap();
        let posts = vec![
            Post::new(1).with_slug("same"),
            Post::new(2).with_slug("same"),
            Post::new(3).with_slug("same"),
        ];

        let paths = save_posts(&posts, &config(&dir, false)).unwrap();

        assert_eq!(
            paths,
            vec![
                dir.path().join("same.md"),
                dir.path().join("same_1.md"),
                dir.path().join("same_2.md"),
            ]
        );
    }

    #[test]
    fn test_duplicate_slugs_with_post_folders_suffix_the_folder() {
        let dir = TempDir::new().unwrap();
        let posts = vec![Post::new(1).with_slug("same"), Post::new(2).with_slug("same")];

        let paths = save_posts(&posts, &config(&dir, true)).unwrap();

        assert_eq!(
            paths,
            vec![
                dir.path().join("same").join("index.md"),
                dir.path().join("same_1").join("index.md"),
            ]
        );
    }

    #[test]
    fn test_illegal_slug_characters_sanitized() {
        let dir = TempDir::new().unwrap();
        let post = Post::new(1).with_slug("what?-a:b");
        let path = save_post(&post, &config(&dir, false)).unwrap();
        assert_eq!(path, dir.path().join("what_-a_b.md"));
    }
}
