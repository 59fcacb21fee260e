//! Local image enumeration.

use std::path::{Path, PathBuf};

/// File extensions accepted as image candidates.
pub const ALLOWED_EXTS: [&str; 3] = ["jpg", "jpeg", "png"];

/// List image files directly under `dir`.
///
/// Returns an empty list when the directory is absent or unreadable; an
/// empty pool is a normal condition handled by the downgrade chain, not an
/// error.
///
/// # Examples
///
/// ```
/// use vermeer_client::list_local_images;
///
/// let images = list_local_images("./no-such-dir".as_ref());
/// assert!(images.is_empty());
/// ```
pub fn list_local_images(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ALLOWED_EXTS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect()
}
