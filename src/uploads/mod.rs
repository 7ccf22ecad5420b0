//! Intake and storage of uploaded crop photos.

mod store;

pub use store::{StoredImage, UploadStore, ALLOWED_EXTENSIONS};
