use std::future::Future;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::Response,
};
use tracing::debug;

use crate::errors::EdgeError;
use crate::site::content_type::content_type_for;
use crate::site::host::{is_reserved, request_hostname, subdomain_of};
use crate::site::mapping::{normalize_path, SiteMapping};
use crate::state::AppState;
use crate::store::{SiteObject, StoreError};

pub const CACHE_CONTROL: &str = "public, max-age=3600";

/// Fallback for every method and path: serves a published site file.
///
/// Linear pipeline, first failure wins:
/// host → subdomain → mapping lookup → decode → object key → fetch → stream.
pub async fn handle_site(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, EdgeError> {
    let hostname = request_hostname(&uri, &headers);
    let subdomain = subdomain_of(&hostname);
    if is_reserved(subdomain, &state.apex_label) {
        return Err(EdgeError::InvalidSubdomain(subdomain.to_string()));
    }

    let raw = bounded(state.backend_timeout, state.mappings.get(subdomain))
        .await
        .map_err(|source| EdgeError::BackendUnavailable {
            context: format!("mapping lookup for subdomain '{subdomain}'"),
            source,
        })?
        .ok_or_else(|| EdgeError::MappingNotFound(subdomain.to_string()))?;

    let mapping = SiteMapping::decode(&raw).map_err(|source| EdgeError::MappingCorrupt {
        subdomain: subdomain.to_string(),
        source,
    })?;

    let path = normalize_path(uri.path());
    let key = mapping.object_key(path);

    let object = bounded(state.backend_timeout, state.blobs.get(&key))
        .await
        .map_err(|source| EdgeError::BackendUnavailable {
            context: format!("object fetch for subdomain '{subdomain}', key '{key}'"),
            source,
        })?
        .ok_or_else(|| EdgeError::ObjectNotFound(key.clone()))?;

    debug!(subdomain = %subdomain, key = %key, "Serving site object");
    site_response(object, content_type_for(path))
}

/// Only the call that yields the object is bounded; the body streams untimed.
async fn bounded<T>(
    limit: Duration,
    call: impl Future<Output = Result<T, StoreError>>,
) -> Result<T, StoreError> {
    tokio::time::timeout(limit, call)
        .await
        .map_err(|_| StoreError::Timeout(limit))?
}

fn site_response(object: SiteObject, content_type: &'static str) -> Result<Response, EdgeError> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, CACHE_CONTROL)
        .header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");

    if let Some(len) = object.content_length {
        builder = builder.header(header::CONTENT_LENGTH, len);
    }
    // Stores may hand back etags that are not valid header values; skip those.
    if let Some(etag) = object.etag.and_then(|e| HeaderValue::from_str(&e).ok()) {
        builder = builder.header(header::ETAG, etag);
    }

    builder
        .body(Body::from_stream(object.body))
        .map_err(|e| EdgeError::Internal(anyhow::anyhow!("failed to build site response: {e}")))
}
