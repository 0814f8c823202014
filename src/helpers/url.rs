//! URL and query string helpers

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left alone when encoding a query value
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Join a base location and a relative document path
///
/// # Examples
/// ```ignore
/// join_url("https://cdn.example.com/site/", "content/home.json")
/// // -> "https://cdn.example.com/site/content/home.json"
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path)
    }
}

/// Whether a location is an http(s) URL
pub fn is_remote(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Encode a single query value
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Decode a form-encoded query component (`+` is a space)
fn decode_component(s: &str) -> String {
    let spaced = s.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Look up a parameter in a query string; the first occurrence wins
///
/// # Examples
/// ```ignore
/// query_param("?id=neural-nets&x=1", "id") // -> Some("neural-nets")
/// ```
pub fn query_param(query: &str, name: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode_component(k), decode_component(v)),
            None => (decode_component(pair), String::new()),
        })
        .find(|(k, _)| k == name)
        .map(|(_, v)| v)
}

/// Link from the article list to the detail page for one article
pub fn article_href(detail_page: &str, id: &str) -> String {
    format!("{}?id={}", detail_page, encode_query_value(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("https://cdn.example.com/site/", "/content/home.json"),
            "https://cdn.example.com/site/content/home.json"
        );
        assert_eq!(join_url("", "data.json"), "data.json");
    }

    #[test]
    fn test_query_param() {
        assert_eq!(query_param("?id=abc", "id").as_deref(), Some("abc"));
        assert_eq!(query_param("x=1&id=a%20b", "id").as_deref(), Some("a b"));
        assert_eq!(query_param("id=first&id=second", "id").as_deref(), Some("first"));
        assert_eq!(query_param("id", "id").as_deref(), Some(""));
        assert_eq!(query_param("", "id"), None);
        assert_eq!(query_param("?other=1", "id"), None);
    }

    #[test]
    fn test_article_href_encodes_id() {
        assert_eq!(
            article_href("article-view.html", "deep learning&co"),
            "article-view.html?id=deep%20learning%26co"
        );
        assert_eq!(
            article_href("article-view.html", "paper-2026_v1"),
            "article-view.html?id=paper-2026_v1"
        );
    }
}
