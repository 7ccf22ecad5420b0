//! Krishi-Sahayak: Agricultural Advisory Demo
//!
//! A farmer submits a free-text question (optionally alongside a crop
//! photo) and receives a canned agricultural tip chosen by keyword
//! matching against a fixed vocabulary. Two front ends share the same
//! advisory engine: an HTTP server (`krishi serve`) and an interactive
//! shell (`krishi chat`).

pub mod advisor;
pub mod config;
pub mod error;
pub mod uploads;
pub mod utils;
pub mod web;

pub use advisor::{Advice, ChartPoint, ChartSpec, KeywordClassifier, SourceRef, Topic};
pub use config::Config;
pub use error::{ConfigError, QueryError, Result, SahayakError, UploadError};
pub use uploads::{StoredImage, UploadStore};
pub use web::{create_router, run_server, AppState};
