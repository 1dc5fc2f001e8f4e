//! Link interception.
//!
//! # Responsibilities
//! - Decide whether a clicked href belongs to this application (origin)
//! - Derive the logical route path from hash fragments, `.html` filenames
//!   and bare paths
//!
//! # Design Decisions
//! - Pure string functions; the delegated click listener is host glue
//! - Cross-origin hrefs return `None` so the host lets the browser navigate
//! - `.html` is stripped as a suffix only, never mid-path

/// Normalize a raw path into a logical route key.
///
/// `/` and `/index.html` map to the root route; a `.html` suffix is
/// stripped; a missing leading slash is added; query strings are dropped.
pub fn normalize_route(path: &str) -> String {
    let path = path.split('?').next().unwrap_or(path);
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    if path == "/" || path == "/index.html" {
        return "/".to_string();
    }
    match path.strip_suffix(".html") {
        Some(stem) => stem.to_string(),
        None => path,
    }
}

/// Derive the logical route path from an anchor href, or `None` when the
/// link points outside the application's origin.
pub fn route_from_href(href: &str, origin: &str) -> Option<String> {
    let rest = if href.starts_with("http://") || href.starts_with("https://") {
        // Absolute URLs must share the page origin exactly.
        let rest = href.strip_prefix(origin)?;
        if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('#')) {
            return None;
        }
        rest
    } else {
        href
    };

    // A hash fragment wins over the path part: `#/projetos` is the route.
    if let Some((_, fragment)) = rest.split_once('#') {
        return Some(if fragment.is_empty() {
            "/".to_string()
        } else {
            normalize_route(fragment)
        });
    }

    if rest.is_empty() {
        return Some("/".to_string());
    }
    Some(normalize_route(rest))
}
