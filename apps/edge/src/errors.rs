use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::site::mapping::MappingDecodeError;
use crate::store::StoreError;

/// Every way a site request can fail.
/// Implements `IntoResponse` so the site handler can return `Result<Response, EdgeError>`;
/// nothing escapes the handler as a panic or a dropped connection.
#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("Invalid subdomain: '{0}'")]
    InvalidSubdomain(String),

    #[error("No site mapped to subdomain '{0}'")]
    MappingNotFound(String),

    #[error("Corrupt mapping for subdomain '{subdomain}': {source}")]
    MappingCorrupt {
        subdomain: String,
        #[source]
        source: MappingDecodeError,
    },

    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    #[error("Backend unavailable ({context}): {source}")]
    BackendUnavailable {
        context: String,
        #[source]
        source: StoreError,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl EdgeError {
    pub fn status(&self) -> StatusCode {
        match self {
            EdgeError::InvalidSubdomain(_)
            | EdgeError::MappingNotFound(_)
            | EdgeError::ObjectNotFound(_) => StatusCode::NOT_FOUND,
            EdgeError::MappingCorrupt { .. }
            | EdgeError::BackendUnavailable { .. }
            | EdgeError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body. Keys, ids and backend detail stay in the logs.
    fn public_message(&self) -> &'static str {
        match self {
            EdgeError::InvalidSubdomain(_) => "Invalid subdomain",
            EdgeError::MappingNotFound(_) => "Site not found",
            EdgeError::ObjectNotFound(_) => "File not found",
            EdgeError::MappingCorrupt { .. }
            | EdgeError::BackendUnavailable { .. }
            | EdgeError::Internal(_) => "Internal error",
        }
    }
}

impl IntoResponse for EdgeError {
    fn into_response(self) -> Response {
        match &self {
            EdgeError::InvalidSubdomain(subdomain) => {
                tracing::debug!(subdomain = %subdomain, "Rejected reserved subdomain");
            }
            EdgeError::MappingNotFound(subdomain) => {
                tracing::info!(subdomain = %subdomain, "Site not found for subdomain");
            }
            EdgeError::ObjectNotFound(key) => {
                tracing::info!(key = %key, "File not found");
            }
            EdgeError::MappingCorrupt { subdomain, source } => {
                tracing::warn!(subdomain = %subdomain, error = %source, "Corrupt site mapping");
            }
            EdgeError::BackendUnavailable { context, source } => {
                tracing::error!(context = %context, error = %source, "Backend unavailable");
            }
            EdgeError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
            }
        }

        (self.status(), self.public_message()).into_response()
    }
}
