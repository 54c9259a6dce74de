pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type served for a site path, keyed on its lowercased extension.
pub fn content_type_for(path: &str) -> &'static str {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return DEFAULT_CONTENT_TYPE;
    };

    match ext.to_ascii_lowercase().as_str() {
        "html" => "text/html; charset=utf-8",
        "css" => "text/css; charset=utf-8",
        "js" => "application/javascript; charset=utf-8",
        "json" => "application/json",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "pdf" => "application/pdf",
        "woff" => "font/woff",
        "woff2" => "font/woff2",
        "ttf" => "font/ttf",
        "eot" => "application/vnd.ms-fontobject",
        _ => DEFAULT_CONTENT_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_extensions() {
        let table = [
            ("/index.html", "text/html; charset=utf-8"),
            ("/styles.css", "text/css; charset=utf-8"),
            ("/app.js", "application/javascript; charset=utf-8"),
            ("/data.json", "application/json"),
            ("/logo.png", "image/png"),
            ("/photo.jpg", "image/jpeg"),
            ("/photo.jpeg", "image/jpeg"),
            ("/anim.gif", "image/gif"),
            ("/icon.svg", "image/svg+xml"),
            ("/hero.webp", "image/webp"),
            ("/favicon.ico", "image/x-icon"),
            ("/cv.pdf", "application/pdf"),
            ("/fonts/inter.woff", "font/woff"),
            ("/fonts/inter.woff2", "font/woff2"),
            ("/fonts/inter.ttf", "font/ttf"),
            ("/fonts/inter.eot", "application/vnd.ms-fontobject"),
        ];
        for (path, expected) in table {
            assert_eq!(content_type_for(path), expected, "path {path}");
        }
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        assert_eq!(content_type_for("/LOGO.PNG"), "image/png");
        assert_eq!(content_type_for("/Index.Html"), "text/html; charset=utf-8");
    }

    #[test]
    fn test_unknown_or_missing_extension_defaults() {
        assert_eq!(content_type_for("/archive.tar.zst"), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for("/README"), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for("/about/"), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for(""), DEFAULT_CONTENT_TYPE);
    }

    #[test]
    fn test_dot_in_directory_is_not_an_extension() {
        assert_eq!(content_type_for("/assets.v2/bundle"), DEFAULT_CONTENT_TYPE);
        assert_eq!(content_type_for("/assets.v2/bundle.js"), "application/javascript; charset=utf-8");
    }
}
