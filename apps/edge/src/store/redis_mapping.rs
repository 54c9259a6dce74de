use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;

use super::{MappingStore, StoreError};

/// Subdomain mappings kept as plain values in Redis.
///
/// Backed by a `ConnectionManager`: a dropped socket fails the lookup in flight
/// and the next lookup runs on a fresh connection.
#[derive(Clone)]
pub struct RedisMappingStore {
    conn: ConnectionManager,
    key_prefix: String,
}

impl RedisMappingStore {
    pub async fn connect(client: redis::Client, key_prefix: String) -> Result<Self, StoreError> {
        let conn = ConnectionManager::new(client).await?;
        info!("Redis mapping store connected (key prefix: {:?})", key_prefix);
        Ok(Self { conn, key_prefix })
    }
}

#[async_trait]
impl MappingStore for RedisMappingStore {
    async fn get(&self, subdomain: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let mut conn = self.conn.clone();
        // Raw bytes: a non-UTF-8 value is a corrupt mapping, not a backend failure.
        let value: Option<Vec<u8>> = conn.get(mapping_key(&self.key_prefix, subdomain)).await?;
        Ok(value)
    }
}

fn mapping_key(prefix: &str, subdomain: &str) -> String {
    format!("{prefix}{subdomain}")
}
