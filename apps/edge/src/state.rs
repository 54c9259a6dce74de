use std::sync::Arc;
use std::time::Duration;

use crate::store::{BlobStore, MappingStore};

/// Shared application state injected into the site handler via Axum extractors.
/// Built once in `main`; nothing in it changes while serving.
#[derive(Clone)]
pub struct AppState {
    pub mappings: Arc<dyn MappingStore>,
    pub blobs: Arc<dyn BlobStore>,
    /// First label of the platform's base domain, never served as a tenant.
    pub apex_label: Arc<str>,
    /// Upper bound on each mapping lookup and object fetch.
    pub backend_timeout: Duration,
}
