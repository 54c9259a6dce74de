//! Read-only bindings to the two collaborators the edge depends on.
//!
//! `AppState` holds each as `Arc<dyn …>`; the concrete backends are chosen once
//! in `main` and never mutated afterwards.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::BoxStream;
use thiserror::Error;

#[cfg(test)]
pub mod memory;
pub mod redis_mapping;
pub mod s3_blob;

pub use redis_mapping::RedisMappingStore;
pub use s3_blob::S3BlobStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("S3 error: {0}")]
    S3(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Object stream error: {0}")]
    Stream(String),
}

/// Lazy object body. Finite and single-pass.
pub type ObjectBody = BoxStream<'static, Result<Bytes, StoreError>>;

/// A fetched site file, body not yet read.
pub struct SiteObject {
    pub body: ObjectBody,
    pub content_length: Option<u64>,
    pub etag: Option<String>,
}

/// Subdomain → raw mapping value bytes. `Ok(None)` means no site is published there.
#[async_trait]
pub trait MappingStore: Send + Sync {
    async fn get(&self, subdomain: &str) -> Result<Option<Vec<u8>>, StoreError>;
}

/// Object key → site file. `Ok(None)` means the key does not exist.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<SiteObject>, StoreError>;
}
