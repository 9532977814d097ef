//! Best-effort visitor address resolution from proxy headers.

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::{HeaderMap, request::Parts},
};
use std::convert::Infallible;
use std::net::SocketAddr;

const X_FORWARDED_FOR: &str = "x-forwarded-for";
const X_REAL_IP: &str = "x-real-ip";
const CF_CONNECTING_IP: &str = "cf-connecting-ip";

/// Placeholder when no header is set and the transport has no peer address.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Resolves the visitor address, first non-empty source wins:
///
/// 1. `X-Forwarded-For` - first comma-separated entry, trimmed
/// 2. `X-Real-IP`
/// 3. `CF-Connecting-IP`
/// 4. `fallback` (the socket peer), or [`UNKNOWN_CLIENT`]
///
/// The result is advisory metadata. It is not validated as an address and
/// must not be used for authorization or deduplication.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert("x-forwarded-for", "203.0.113.1, 10.0.0.2".parse().unwrap());
///
/// assert_eq!(resolve_client_ip(&headers, None), "203.0.113.1");
/// ```
pub fn resolve_client_ip(headers: &HeaderMap, fallback: Option<SocketAddr>) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    let forwarded = header(X_FORWARDED_FOR)
        .and_then(|chain| chain.split(',').next())
        .map(str::trim)
        .filter(|first| !first.is_empty());

    forwarded
        .or_else(|| header(X_REAL_IP))
        .or_else(|| header(CF_CONNECTING_IP))
        .map(str::to_string)
        .or_else(|| fallback.map(|addr| addr.ip().to_string()))
        .unwrap_or_else(|| UNKNOWN_CLIENT.to_string())
}

/// Extractor yielding the resolved visitor address.
///
/// Never rejects. Uses the peer address from [`ConnectInfo`] when the
/// server was started with connect info.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorIp(pub String);

impl<S> FromRequestParts<S> for VisitorIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| *addr);

        Ok(VisitorIp(resolve_client_ip(&parts.headers, peer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> Option<SocketAddr> {
        Some("192.0.2.10:51234".parse().unwrap())
    }

    #[test]
    fn test_forwarded_for_first_entry_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static(" 203.0.113.1 , 10.0.0.2, 10.0.0.3"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));

        assert_eq!(resolve_client_ip(&headers, peer()), "203.0.113.1");
    }

    #[test]
    fn test_real_ip_used_without_forwarded_for() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));
        headers.insert("cf-connecting-ip", HeaderValue::from_static("198.51.100.5"));

        assert_eq!(resolve_client_ip(&headers, peer()), "198.51.100.4");
    }

    #[test]
    fn test_cloudflare_header_used_last() {
        let mut headers = HeaderMap::new();
        headers.insert("cf-connecting-ip", HeaderValue::from_static("198.51.100.5"));

        assert_eq!(resolve_client_ip(&headers, peer()), "198.51.100.5");
    }

    #[test]
    fn test_empty_headers_fall_through() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));
        headers.insert("x-real-ip", HeaderValue::from_static("   "));
        headers.insert("cf-connecting-ip", HeaderValue::from_static("198.51.100.5"));

        assert_eq!(resolve_client_ip(&headers, peer()), "198.51.100.5");
    }

    #[test]
    fn test_forwarded_for_with_empty_first_entry_falls_through() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(", 10.0.0.2"));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));

        assert_eq!(resolve_client_ip(&headers, peer()), "198.51.100.4");
    }

    #[test]
    fn test_peer_address_fallback() {
        let headers = HeaderMap::new();

        assert_eq!(resolve_client_ip(&headers, peer()), "192.0.2.10");
    }

    #[test]
    fn test_unknown_without_any_source() {
        let headers = HeaderMap::new();

        assert_eq!(resolve_client_ip(&headers, None), UNKNOWN_CLIENT);
    }

    #[test]
    fn test_values_are_not_validated() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("not-an-ip"));

        assert_eq!(resolve_client_ip(&headers, None), "not-an-ip");
    }

    #[tokio::test]
    async fn test_extractor_reads_connect_info() {
        let (mut parts, _) = axum::http::Request::builder()
            .uri("/api/register")
            .body(())
            .unwrap()
            .into_parts();
        parts
            .extensions
            .insert(ConnectInfo::<SocketAddr>("192.0.2.77:4000".parse().unwrap()));

        let VisitorIp(ip) = VisitorIp::from_request_parts(&mut parts, &()).await.unwrap();

        assert_eq!(ip, "192.0.2.77");
    }
}
