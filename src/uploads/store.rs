//! Filesystem store for uploaded crop photos.
//!
//! Uploads are decode-verified before they are written, and renamed with
//! a random suffix so stored names never collide. The directory is
//! append-only: the running process never modifies or deletes a stored
//! file, and there is no expiry.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::UploadError;
use crate::utils::sanitize_file_name;

/// File extensions accepted for upload.
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "webp"];

/// A successfully stored upload.
#[derive(Debug, Clone)]
pub struct StoredImage {
    /// Unique on-disk file name.
    pub file_name: String,
    /// Path of the file on disk.
    pub disk_path: PathBuf,
    /// URL path the HTTP front end serves the file under.
    pub url_path: String,
}

/// Append-only store for uploaded images.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The upload directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the upload directory if it does not exist.
    pub fn ensure_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)
    }

    /// Validate, rename, and persist an uploaded file.
    ///
    /// The extension must be in [`ALLOWED_EXTENSIONS`] and the bytes must
    /// decode as an image; corrupt data never reaches the directory. The
    /// stored name is `<stem>_<random-hex>.<ext>`, so it is always
    /// distinct from the client's file name and from every other stored
    /// file.
    pub fn save(
        &self,
        original_name: &str,
        content: &[u8],
    ) -> std::result::Result<StoredImage, UploadError> {
        let ext = allowed_extension(original_name).ok_or(UploadError::InvalidExtension)?;

        image::load_from_memory(content)
            .map_err(|e| UploadError::InvalidImage(e.to_string()))?;

        let safe = sanitize_file_name(original_name);
        let stem = safe.rsplit_once('.').map(|(s, _)| s).unwrap_or(&safe);
        let stem = if stem.is_empty() { "upload" } else { stem };
        let file_name = format!("{}_{}.{}", stem, uuid::Uuid::new_v4().simple(), ext);

        let disk_path = self.dir.join(&file_name);
        std::fs::write(&disk_path, content)?;
        debug!(file = %file_name, bytes = content.len(), "stored upload");

        Ok(StoredImage {
            url_path: format!("/static/uploads/{}", file_name),
            disk_path,
            file_name,
        })
    }
}

/// Lower-cased extension of the name, if it is in the allowlist.
fn allowed_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_lowercase();
    if ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
        Some(ext)
    } else {
        None
    }
}
