//! URL trust policy for registration endpoints.
//!
//! A registration header may only point the client at an endpoint that is at
//! least as trustworthy as the page that sent it:
//! - secure request -> secure endpoint: allowed
//! - insecure request -> insecure or secure endpoint: allowed
//! - secure request -> insecure endpoint: rejected
//!
//! Endpoints must also be fetchable over HTTP(S); other schemes are rejected
//! regardless of the request's trust level.

use url::{Host, Url};

/// "Potentially trustworthy" URL in the secure-contexts sense.
///
/// - `https`, `wss`, `file` schemes
/// - loopback hosts (`localhost`, `*.localhost`, `127.0.0.0/8`, `[::1]`)
pub fn is_potentially_trustworthy(url: &Url) -> bool {
    match url.scheme() {
        "https" | "wss" | "file" => return true,
        "http" | "ws" => {}
        _ => return false,
    }

    match url.host() {
        Some(Host::Domain(domain)) => {
            let domain = domain.trim_end_matches('.').to_ascii_lowercase();
            domain == "localhost" || domain.ends_with(".localhost")
        }
        Some(Host::Ipv4(addr)) => addr.is_loopback(),
        Some(Host::Ipv6(addr)) => addr.is_loopback(),
        None => false,
    }
}

/// Whether `endpoint` may receive a registration requested by `request_url`.
pub fn is_endpoint_allowed(request_url: &Url, endpoint: &Url) -> bool {
    if !matches!(endpoint.scheme(), "http" | "https") {
        return false;
    }
    !is_potentially_trustworthy(request_url) || is_potentially_trustworthy(endpoint)
}
