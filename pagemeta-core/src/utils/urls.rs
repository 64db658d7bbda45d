//! URL helpers for canonical, AMP, and media URLs

use url::Url;

/// Resolves a possibly site-relative media path against `base`.
///
/// Paths that already parse as absolute URLs pass through untouched.
/// Join failures fall back to plain concatenation so a misconfigured
/// base degrades to the host's raw path rather than an empty URL.
#[must_use]
pub fn absolutize(base: &str, path: &str) -> String {
    if Url::parse(path).is_ok() {
        return path.to_string();
    }
    match Url::parse(base).and_then(|base_url| base_url.join(path)) {
        Ok(joined) => joined.to_string(),
        Err(_) => format!("{base}{path}"),
    }
}

/// Appends the AMP marker to a canonical URL.
#[must_use]
pub fn amp_url(canonical: &str) -> String {
    format!("{canonical}?amp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_path_passes_through() {
        assert_eq!(
            absolutize("https://example.com", "https://cdn.example.com/a.jpg"),
            "https://cdn.example.com/a.jpg"
        );
    }

    #[test]
    fn relative_path_joins_base() {
        assert_eq!(
            absolutize("https://example.com", "/media/images/a.jpg"),
            "https://example.com/media/images/a.jpg"
        );
    }

    #[test]
    fn relative_path_joins_cdn_base() {
        assert_eq!(
            absolutize("https://cdn.example.com", "/media/a.jpg"),
            "https://cdn.example.com/media/a.jpg"
        );
    }

    #[test]
    fn unparseable_base_falls_back_to_concatenation() {
        assert_eq!(absolutize("", "/media/a.jpg"), "/media/a.jpg");
    }

    #[test]
    fn amp_url_appends_marker() {
        assert_eq!(
            amp_url("https://example.com/about-us/"),
            "https://example.com/about-us/?amp"
        );
    }
}
