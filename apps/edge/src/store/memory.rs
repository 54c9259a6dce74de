//! In-process stores used by handler tests.

use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::{self, StreamExt};

use super::{BlobStore, MappingStore, SiteObject, StoreError};

#[derive(Default)]
pub struct MemoryMappingStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryMappingStore {
    pub fn with(mut self, subdomain: &str, value: impl AsRef<[u8]>) -> Self {
        self.entries
            .insert(subdomain.to_string(), value.as_ref().to_vec());
        self
    }

    /// Stores `{"userId": …, "siteId": …}` the way the publish pipeline writes it.
    pub fn with_site(self, subdomain: &str, user_id: &str, site_id: &str) -> Self {
        let value = serde_json::json!({ "userId": user_id, "siteId": site_id }).to_string();
        self.with(subdomain, value)
    }
}

#[async_trait]
impl MappingStore for MemoryMappingStore {
    async fn get(&self, subdomain: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.entries.get(subdomain).cloned())
    }
}

/// Objects are kept as chunk lists so tests can observe multi-chunk streaming.
#[derive(Default)]
pub struct MemoryBlobStore {
    objects: HashMap<String, Vec<Bytes>>,
}

impl MemoryBlobStore {
    pub fn with_object(self, key: &str, body: &'static str) -> Self {
        self.with_chunks(key, &[body])
    }

    pub fn with_chunks(mut self, key: &str, chunks: &[&'static str]) -> Self {
        let chunks = chunks.iter().map(|c| Bytes::from_static(c.as_bytes())).collect();
        self.objects.insert(key.to_string(), chunks);
        self
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<SiteObject>, StoreError> {
        let Some(chunks) = self.objects.get(key) else {
            return Ok(None);
        };
        let content_length = chunks.iter().map(|c| c.len() as u64).sum();
        let body = stream::iter(chunks.clone().into_iter().map(Ok::<_, StoreError>)).boxed();
        Ok(Some(SiteObject {
            body,
            content_length: Some(content_length),
            etag: None,
        }))
    }
}
