/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

use std::str::FromStr;

use http::HeaderValue;
use url::Url;

use crate::auth::{AuthParseError, Password, Username};

#[cfg(feature = "auth-digest")]
use crate::auth::DigestCredentials;

mod basic;
pub use basic::HttpBasicAuth;

pub enum HttpAuth {
    None,
    Basic(HttpBasicAuth),
    #[cfg(feature = "auth-digest")]
    Digest(DigestCredentials),
}

impl HttpAuth {
    pub fn from_authorization(value: &str) -> Result<Self, AuthParseError> {
        match memchr::memchr(b' ', value.as_bytes()) {
            Some(i) => match value[0..i].to_ascii_lowercase().as_str() {
                "basic" => {
                    let basic = HttpBasicAuth::from_str(&value[i + 1..])?;
                    Ok(HttpAuth::Basic(basic))
                }
                #[cfg(feature = "auth-digest")]
                "digest" => {
                    let digest = DigestCredentials::from_str(&value[i + 1..])?;
                    Ok(HttpAuth::Digest(digest))
                }
                _ => Ok(HttpAuth::None),
            },
            None => Err(AuthParseError::UnsupportedAuthType),
        }
    }
}

impl TryFrom<&HeaderValue> for HttpAuth {
    type Error = AuthParseError;

    fn try_from(value: &HeaderValue) -> Result<Self, Self::Error> {
        let value = std::str::from_utf8(value.as_bytes())
            .map_err(|_| AuthParseError::InvalidUtf8Encoding)?;
        HttpAuth::from_authorization(value)
    }
}

impl TryFrom<&Url> for HttpAuth {
    type Error = AuthParseError;

    fn try_from(url: &Url) -> Result<Self, Self::Error> {
        let u = url.username();
        let auth = if u.is_empty() {
            HttpAuth::None
        } else {
            let username =
                Username::from_encoded(u).map_err(|_| AuthParseError::InvalidUsername)?;

            let password = if let Some(p) = url.password() {
                Password::from_encoded(p).map_err(|_| AuthParseError::InvalidPassword)?
            } else {
                return Err(AuthParseError::InvalidPassword);
            };

            HttpAuth::Basic(HttpBasicAuth::new(username, password))
        };

        Ok(auth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let value = "Basic cm9vdDp0b29y";
        let info = HttpAuth::from_authorization(value).unwrap();
        let HttpAuth::Basic(basic) = info else {
            panic!("not parsed as basic auth");
        };
        assert_eq!(basic.username().as_original(), "root");
        assert_eq!(basic.password().as_original(), "toor");
    }

    #[cfg(feature = "auth-digest")]
    #[test]
    fn parse_digest() {
        let value = "Digest username=\"joe\", realm=\"wally\", nonce=\"abcdef01\"";
        let info = HttpAuth::from_authorization(value).unwrap();
        let HttpAuth::Digest(digest) = info else {
            panic!("not parsed as digest auth");
        };
        assert_eq!(digest.username(), "joe");
        assert_eq!(digest.realm(), "wally");
    }

    #[test]
    fn parse_unknown_scheme() {
        let info = HttpAuth::from_authorization("Bearer abc.def.ghi").unwrap();
        assert!(matches!(info, HttpAuth::None));
    }

    #[test]
    fn parse_scheme_only() {
        assert!(HttpAuth::from_authorization("Basic").is_err());
    }
}
