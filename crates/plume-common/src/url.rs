//! URL resolution for stylesheet links.
//!
//! [§ 4.2.4 The link element](https://html.spec.whatwg.org/multipage/semantics.html#the-link-element)
//! [URL Standard](https://url.spec.whatwg.org/)

/// Resolve a `<link>` href against the URL of the document that declared it.
///
/// STEP 1: "If url is an absolute URL, return url."
///
/// STEP 2: "Otherwise, resolve url relative to base."
///
/// The base's query and fragment are ignored, and `.`/`..` segments of the
/// merged path are removed. Documents given as markup text have no base, so
/// their hrefs are returned untouched.
#[must_use]
pub fn resolve_url(href: &str, base_url: Option<&str>) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }

    let Some(base) = base_url else {
        return href.to_string();
    };

    if href.starts_with("//") {
        let scheme = base.split_once(':').map_or("http", |(scheme, _)| scheme);
        return format!("{scheme}:{href}");
    }

    let Some(scheme_end) = base.find("://") else {
        return href.to_string();
    };
    let authority_start = scheme_end + 3;
    let origin_len = base[authority_start..]
        .find(['/', '?', '#'])
        .map_or(base.len(), |i| authority_start + i);
    let origin = &base[..origin_len];

    // The href's own query and fragment are kept as written.
    let (href_path, href_suffix) = href
        .find(['?', '#'])
        .map_or((href, ""), |i| href.split_at(i));

    // [RFC 3986 § 5.2.3 Merge Paths](https://www.rfc-editor.org/rfc/rfc3986#section-5.2.3)
    let merged = if href_path.starts_with('/') {
        href_path.to_string()
    } else {
        let base_path = base[origin_len..]
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let dir = base_path.rsplit_once('/').map_or("", |(dir, _)| dir);
        format!("{dir}/{href_path}")
    };

    format!("{origin}{}{href_suffix}", remove_dot_segments(&merged))
}

/// [RFC 3986 § 5.2.4 Remove Dot Segments](https://www.rfc-editor.org/rfc/rfc3986#section-5.2.4)
///
/// `..` never climbs above the root.
fn remove_dot_segments(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                let _ = segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    let mut out = String::with_capacity(path.len());
    for segment in &segments {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() || path.ends_with('/') || path.ends_with("/.") || path.ends_with("/..") {
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::resolve_url;

    #[test]
    fn test_absolute_href_is_unchanged() {
        assert_eq!(
            resolve_url("https://cdn.example.com/a.css", Some("http://example.com/")),
            "https://cdn.example.com/a.css"
        );
    }

    #[test]
    fn test_no_base_returns_href() {
        assert_eq!(resolve_url("styles.css", None), "styles.css");
    }

    #[test]
    fn test_protocol_relative() {
        assert_eq!(
            resolve_url("//cdn.example.com/a.css", Some("https://example.com/page")),
            "https://cdn.example.com/a.css"
        );
    }

    #[test]
    fn test_origin_relative() {
        assert_eq!(
            resolve_url("/css/site.css", Some("https://example.com/blog/post.html")),
            "https://example.com/css/site.css"
        );
        assert_eq!(
            resolve_url("/site.css", Some("https://example.com")),
            "https://example.com/site.css"
        );
    }

    #[test]
    fn test_directory_relative() {
        assert_eq!(
            resolve_url("./theme.css", Some("https://example.com/blog/post.html")),
            "https://example.com/blog/theme.css"
        );
        assert_eq!(
            resolve_url("theme.css", Some("https://example.com")),
            "https://example.com/theme.css"
        );
    }

    #[test]
    fn test_parent_segments_are_removed() {
        assert_eq!(
            resolve_url("../x.css", Some("https://example.com/blog/post.html")),
            "https://example.com/x.css"
        );
        assert_eq!(
            resolve_url("../../a/./b/../c.css", Some("https://example.com/one/two/three/")),
            "https://example.com/one/a/c.css"
        );
        assert_eq!(
            resolve_url("../../../x.css", Some("https://example.com/blog/post.html")),
            "https://example.com/x.css"
        );
    }

    #[test]
    fn test_base_query_and_fragment_are_ignored() {
        assert_eq!(
            resolve_url("theme.css", Some("https://example.com/blog/post.html?from=a/b#top")),
            "https://example.com/blog/theme.css"
        );
        assert_eq!(
            resolve_url("theme.css", Some("https://example.com?q=1")),
            "https://example.com/theme.css"
        );
    }

    #[test]
    fn test_href_query_is_kept() {
        assert_eq!(
            resolve_url("../css/site.css?v=a/b", Some("https://example.com/blog/post.html")),
            "https://example.com/css/site.css?v=a/b"
        );
    }
}
