//! Markdown discovery inside a single track directory.
//!
//! The scanner only lists filenames; page contents are never read.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::SidebarError;

/// Markdown file extension, including the dot.
const MARKDOWN_EXT: &str = ".md";

/// List the markdown page stems in `dir`, in directory-listing order.
///
/// Returns `Ok(None)` if the directory does not exist. Every regular file
/// ending in `.md` counts, dotfiles included; symlinks are judged by their
/// target and non-UTF-8 names are skipped. No sorting is applied, so the
/// order is whatever the platform's `read_dir` yields.
pub(crate) fn markdown_stems(dir: &Path) -> Result<Option<Vec<String>>, SidebarError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(SidebarError::io(dir, e)),
    };

    let mut stems = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| SidebarError::io(dir, e))?;
        let file_name = entry.file_name();
        let Some(stem) = file_name
            .to_str()
            .and_then(|name| name.strip_suffix(MARKDOWN_EXT))
        else {
            continue;
        };
        if is_regular_file(&entry) {
            stems.push(stem.to_owned());
        }
    }
    Ok(Some(stems))
}

/// Whether an entry is a regular file, following symlinks.
///
/// Dangling links and entries whose type cannot be read are not pages.
fn is_regular_file(entry: &fs::DirEntry) -> bool {
    match entry.file_type() {
        Ok(t) if t.is_symlink() => fs::metadata(entry.path()).is_ok_and(|m| m.is_file()),
        Ok(t) => t.is_file(),
        Err(_) => false,
    }
}
