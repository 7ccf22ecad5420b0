//! HTTP front end: router, handlers, embedded UI, and server startup.

mod routes;
mod server;
mod static_files;

pub use routes::{create_router, AppState, ErrorBody, QueryRequest, UploadResponse};
pub use server::run_server;
