use axum::http::{header, HeaderMap, Uri};

/// Lowercased request hostname without port.
///
/// The URI authority wins when present (absolute-form and HTTP/2 requests),
/// otherwise the `Host` header is used. A missing or non-ASCII host yields "".
pub fn request_hostname(uri: &Uri, headers: &HeaderMap) -> String {
    if let Some(host) = uri.host() {
        return host.to_ascii_lowercase();
    }
    headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(|raw| strip_port(raw.trim()).to_ascii_lowercase())
        .unwrap_or_default()
}

/// Leftmost label, or the whole hostname when it has no dot.
pub fn subdomain_of(hostname: &str) -> &str {
    hostname.split('.').next().unwrap_or(hostname)
}

/// Labels that never resolve to a tenant site.
pub fn is_reserved(subdomain: &str, apex_label: &str) -> bool {
    subdomain.is_empty() || subdomain == "www" || subdomain == apex_label
}

fn strip_port(authority: &str) -> &str {
    // [v6]:port
    if authority.starts_with('[') {
        return match authority.find(']') {
            Some(end) => &authority[..=end],
            None => authority,
        };
    }
    match authority.rsplit_once(':') {
        Some((host, port)) if port.bytes().all(|b| b.is_ascii_digit()) => host,
        _ => authority,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_host(host: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_str(host).unwrap());
        headers
    }

    #[test]
    fn test_hostname_from_host_header() {
        let uri: Uri = "/index.html".parse().unwrap();
        let host = request_hostname(&uri, &headers_with_host("acme.example.com"));
        assert_eq!(host, "acme.example.com");
    }

    #[test]
    fn test_hostname_strips_port_and_lowercases() {
        let uri: Uri = "/".parse().unwrap();
        let host = request_hostname(&uri, &headers_with_host("ACME.Example.com:8443"));
        assert_eq!(host, "acme.example.com");
    }

    #[test]
    fn test_hostname_prefers_uri_authority() {
        let uri: Uri = "http://acme.example.com/about".parse().unwrap();
        let host = request_hostname(&uri, &headers_with_host("other.example.com"));
        assert_eq!(host, "acme.example.com");
    }

    #[test]
    fn test_missing_host_is_empty() {
        let uri: Uri = "/".parse().unwrap();
        assert_eq!(request_hostname(&uri, &HeaderMap::new()), "");
    }

    #[test]
    fn test_ipv6_literal_keeps_brackets() {
        assert_eq!(strip_port("[::1]:8080"), "[::1]");
        assert_eq!(strip_port("[::1]"), "[::1]");
    }

    #[test]
    fn test_subdomain_is_leftmost_label() {
        assert_eq!(subdomain_of("acme.example.com"), "acme");
        assert_eq!(subdomain_of("a.b.c.example.com"), "a");
    }

    #[test]
    fn test_subdomain_without_dot_is_whole_host() {
        assert_eq!(subdomain_of("localhost"), "localhost");
        assert_eq!(subdomain_of(""), "");
    }

    #[test]
    fn test_leading_dot_gives_empty_subdomain() {
        assert_eq!(subdomain_of(".example.com"), "");
    }

    #[test]
    fn test_reserved_labels() {
        assert!(is_reserved("", "templar"));
        assert!(is_reserved("www", "templar"));
        assert!(is_reserved("templar", "templar"));
        assert!(!is_reserved("acme", "templar"));
    }
}
