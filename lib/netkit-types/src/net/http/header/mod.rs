/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

/// Static classification of a header name.
///
/// Restricted headers are owned by the protocol layer and may not be set
/// directly by user code. The multi-value flags tell whether repeated
/// occurrences are valid on the corresponding message side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HttpHeaderTraits {
    pub for_request: bool,
    pub for_response: bool,
    pub multi_value_request: bool,
    pub multi_value_response: bool,
    pub restricted: bool,
}

impl HttpHeaderTraits {
    const fn new(
        for_request: bool,
        for_response: bool,
        multi_value_request: bool,
        multi_value_response: bool,
        restricted: bool,
    ) -> Self {
        HttpHeaderTraits {
            for_request,
            for_response,
            multi_value_request,
            multi_value_response,
            restricted,
        }
    }

    /// Look up the traits of a well-known header name, case-insensitively.
    /// Unknown names classify as valid everywhere and unrestricted.
    pub fn of(name: &str) -> HttpHeaderTraits {
        match name.to_ascii_lowercase().as_str() {
            "host" => HttpHeaderTraits::new(true, false, false, false, true),
            "content-length" => HttpHeaderTraits::new(true, true, false, false, true),
            "transfer-encoding" => HttpHeaderTraits::new(true, true, true, true, true),
            "connection" => HttpHeaderTraits::new(true, true, true, true, true),
            "upgrade" => HttpHeaderTraits::new(true, true, true, true, true),
            "expect" => HttpHeaderTraits::new(true, false, true, false, true),
            "date" => HttpHeaderTraits::new(true, true, false, false, true),
            "cookie" => HttpHeaderTraits::new(true, false, true, false, false),
            "set-cookie" => HttpHeaderTraits::new(false, true, false, true, false),
            "authorization" => HttpHeaderTraits::new(true, false, false, false, false),
            "proxy-authorization" => HttpHeaderTraits::new(true, false, false, false, false),
            "www-authenticate" => HttpHeaderTraits::new(false, true, false, true, false),
            "proxy-authenticate" => HttpHeaderTraits::new(false, true, false, true, false),
            "accept" | "accept-encoding" | "accept-language" | "accept-charset" => {
                HttpHeaderTraits::new(true, false, true, false, false)
            }
            "user-agent" | "referer" | "range" | "if-modified-since" | "if-unmodified-since" => {
                HttpHeaderTraits::new(true, false, false, false, false)
            }
            "if-match" | "if-none-match" => HttpHeaderTraits::new(true, false, true, false, false),
            "server" | "location" | "etag" | "last-modified" | "retry-after" | "age" => {
                HttpHeaderTraits::new(false, true, false, false, false)
            }
            "allow" | "vary" => HttpHeaderTraits::new(false, true, false, true, false),
            "content-type" | "content-encoding" | "content-language" | "content-location"
            | "content-range" | "expires" => HttpHeaderTraits::new(true, true, false, false, false),
            "cache-control" | "pragma" | "via" | "warning" | "trailer" | "te" => {
                HttpHeaderTraits::new(true, true, true, true, false)
            }
            _ => HttpHeaderTraits::new(true, true, true, true, false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names() {
        let host = HttpHeaderTraits::of("Host");
        assert!(host.for_request);
        assert!(!host.for_response);
        assert!(host.restricted);

        let set_cookie = HttpHeaderTraits::of("SET-COOKIE");
        assert!(!set_cookie.for_request);
        assert!(set_cookie.for_response);
        assert!(set_cookie.multi_value_response);
        assert!(!set_cookie.restricted);

        let auth = HttpHeaderTraits::of("authorization");
        assert!(auth.for_request);
        assert!(!auth.multi_value_request);
    }

    #[test]
    fn unknown_names_are_permissive() {
        let t = HttpHeaderTraits::of("X-Custom-Tag");
        assert!(t.for_request);
        assert!(t.for_response);
        assert!(t.multi_value_request);
        assert!(t.multi_value_response);
        assert!(!t.restricted);
    }
}
