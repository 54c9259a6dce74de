// Tenant site serving: host → subdomain → mapping → object key → streamed file.
// Read-only against both stores; holds no state between requests.

pub mod content_type;
pub mod handler;
pub mod host;
pub mod mapping;
