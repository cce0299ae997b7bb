//! Filesystem-safe and collision-free file names.
//!
//! `sanitize_filename` and `get_filename_from_url` are pure. `get_unique_filename`
//! checks the real filesystem and is a check-then-act operation: callers must
//! serialize writes into a given directory (one writer per directory), or two
//! callers can both be handed the same free name.

use std::path::Path;

/// Characters Windows refuses in file names. `/` and `\` double as path
/// separators on one platform or another.
fn is_forbidden(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*')
}

/// Replace filesystem-illegal characters and ASCII control characters with `_`.
///
/// Total: every input produces an output of the same character count.
#[must_use]
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if is_forbidden(c) || ('\0'..='\u{1F}').contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Derive a local file name from an image (or other resource) URL.
///
/// Takes the last path segment, drops query string and fragment, replaces
/// illegal characters, then percent-decodes. A segment that does not decode
/// to valid UTF-8 is returned undecoded rather than failing.
#[must_use]
pub fn get_filename_from_url(url: &str) -> String {
    let last_segment = url.rsplit('/').next().unwrap_or_default();
    let without_query = last_segment.split('?').next().unwrap_or_default();
    let without_fragment = without_query.split('#').next().unwrap_or_default();

    let cleaned: String = without_fragment
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();

    match urlencoding::decode(&cleaned) {
        Ok(decoded) => decoded.into_owned(),
        Err(e) => {
            tracing::warn!("Could not percent-decode '{cleaned}': {e}, keeping it as-is");
            cleaned
        }
    }
}

/// Return `basename`, or the first `stem_N.ext` (N = 1, 2, ...) that does not
/// exist in `directory`.
///
/// Works for directory names too (no extension: `slug`, `slug_1`, ...).
///
/// Not atomic: the returned name is only guaranteed free at the moment of the
/// check. Run at most once per final write, with writes into the same
/// directory serialized.
#[must_use]
pub fn get_unique_filename(directory: &Path, basename: &str) -> String {
    if !directory.join(basename).exists() {
        return basename.to_string();
    }

    let as_path = Path::new(basename);
    let stem = as_path
        .file_stem()
        .map_or_else(|| basename.to_string(), |s| s.to_string_lossy().into_owned());
    let ext = as_path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter: u64 = 0;
    loop {
        counter += 1;
        let candidate = format!("{stem}_{counter}{ext}");
        if !directory.join(&candidate).exists() {
            tracing::debug!(
                "'{basename}' already exists in {}, using '{candidate}'",
                directory.display()
            );
            return candidate;
        }
    }
}
