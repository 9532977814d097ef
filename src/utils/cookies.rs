//! Cookie header parsing.

use axum::http::{HeaderMap, header::COOKIE};

/// Returns the value of cookie `name`, searching every `Cookie` header.
///
/// Handles multiple cookies per header by splitting on semicolons. Values
/// are returned as sent, without percent-decoding.
pub fn find_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name => Some(value.to_string()),
                _ => None,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_finds_cookie_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; admin_session=abc.def; lang=en"),
        );

        assert_eq!(
            find_cookie(&headers, "admin_session"),
            Some("abc.def".to_string())
        );
    }

    #[test]
    fn test_searches_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(COOKIE, HeaderValue::from_static("admin_session=xyz"));

        assert_eq!(find_cookie(&headers, "admin_session"), Some("xyz".to_string()));
    }

    #[test]
    fn test_missing_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("admin_sessionx=1; flag"));

        assert_eq!(find_cookie(&headers, "admin_session"), None);
        assert_eq!(find_cookie(&HeaderMap::new(), "admin_session"), None);
    }
}
