use serde::Deserialize;
use serde_json::error::Category;
use thiserror::Error;

/// Tenant and site a subdomain is published to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteMapping {
    pub tenant_id: String,
    pub site_id: String,
}

/// Wire shape written by the publish pipeline.
#[derive(Deserialize)]
struct StoredMapping {
    #[serde(rename = "userId")]
    user_id: String,
    #[serde(rename = "siteId")]
    site_id: String,
}

/// Why a stored value was rejected. Never carries the value itself.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MappingDecodeError {
    #[error("value is not a site record ({category:?} error at line {line}, column {column})")]
    Malformed {
        category: Category,
        line: usize,
        column: usize,
    },

    #[error("field '{0}' is not a usable path segment")]
    InvalidIdentifier(&'static str),
}

impl From<serde_json::Error> for MappingDecodeError {
    fn from(e: serde_json::Error) -> Self {
        MappingDecodeError::Malformed {
            category: e.classify(),
            line: e.line(),
            column: e.column(),
        }
    }
}

impl SiteMapping {
    /// Decodes a stored mapping, rejecting anything that does not match the
    /// record shape or whose ids could escape their key segment.
    pub fn decode(raw: &[u8]) -> Result<Self, MappingDecodeError> {
        let stored: StoredMapping = serde_json::from_slice(raw)?;
        validate_segment("userId", &stored.user_id)?;
        validate_segment("siteId", &stored.site_id)?;
        Ok(SiteMapping {
            tenant_id: stored.user_id,
            site_id: stored.site_id,
        })
    }

    /// `tenants/{tenantId}/sites/{siteId}{path}`; `path` is used verbatim.
    pub fn object_key(&self, path: &str) -> String {
        format!("tenants/{}/sites/{}{}", self.tenant_id, self.site_id, path)
    }
}

fn validate_segment(field: &'static str, value: &str) -> Result<(), MappingDecodeError> {
    let usable = !value.is_empty()
        && value != "."
        && value != ".."
        && !value.chars().any(|c| c == '/' || c == '\\' || c.is_control());
    if usable {
        Ok(())
    } else {
        Err(MappingDecodeError::InvalidIdentifier(field))
    }
}

/// Empty or root paths serve the site's index page. Nothing else is rewritten.
pub fn normalize_path(path: &str) -> &str {
    if path.is_empty() || path == "/" {
        "/index.html"
    } else {
        path
    }
}
