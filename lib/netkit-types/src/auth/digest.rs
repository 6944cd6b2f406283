/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

use std::str::FromStr;

use digest::Digest;
use md5::Md5;
use rustc_hash::FxHashMap;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DigestAuthError {
    #[error("malformed credentials")]
    MalformedCredentials,
}

/// Hash algorithm selector of the digest scheme.
///
/// An absent or unrecognized algorithm parameter falls back to plain MD5,
/// which is what RFC 2617 clients expect from a permissive server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DigestAlgorithm {
    #[default]
    Md5,
    Md5Sess,
}

impl DigestAlgorithm {
    fn from_param(s: &str) -> Self {
        if s.eq_ignore_ascii_case("MD5-sess") {
            DigestAlgorithm::Md5Sess
        } else {
            DigestAlgorithm::Md5
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Md5Sess => "MD5-sess",
        }
    }
}

/// Quality of protection selector of the digest scheme.
///
/// `None` is the legacy RFC 2069 mode. An unrecognized qop token also decodes
/// to `None` so that verification stays total, the response comparison will
/// simply fail for such a client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DigestQop {
    #[default]
    None,
    Auth,
    AuthInt,
}

impl DigestQop {
    fn from_param(s: &str) -> Self {
        if s.eq_ignore_ascii_case("auth") {
            DigestQop::Auth
        } else if s.eq_ignore_ascii_case("auth-int") {
            DigestQop::AuthInt
        } else {
            DigestQop::None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DigestQop::None => "",
            DigestQop::Auth => "auth",
            DigestQop::AuthInt => "auth-int",
        }
    }
}

/// Immutable view over the parameters of an `Authorization: Digest` header.
///
/// Parameter names are matched case-insensitively. A credential set can not
/// exist without a username, all other parameters are optional and read as
/// empty when absent.
#[derive(Debug)]
pub struct DigestCredentials {
    params: FxHashMap<String, String>,
}

impl DigestCredentials {
    pub fn new(params: FxHashMap<String, String>) -> Result<Self, DigestAuthError> {
        let params: FxHashMap<String, String> = params
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        if !params.contains_key("username") {
            return Err(DigestAuthError::MalformedCredentials);
        }
        Ok(DigestCredentials { params })
    }

    fn param(&self, name: &str) -> &str {
        self.params.get(name).map(|v| v.as_str()).unwrap_or_default()
    }

    /// The principal name the client claims. Callers use it to look up the
    /// shared secret before calling [`verify_digest`].
    #[inline]
    pub fn username(&self) -> &str {
        self.param("username")
    }

    #[inline]
    pub fn realm(&self) -> &str {
        self.param("realm")
    }

    #[inline]
    pub fn nonce(&self) -> &str {
        self.param("nonce")
    }

    #[inline]
    pub fn uri(&self) -> &str {
        self.param("uri")
    }

    #[inline]
    pub fn qop(&self) -> &str {
        self.param("qop")
    }

    #[inline]
    pub fn nc(&self) -> &str {
        self.param("nc")
    }

    #[inline]
    pub fn cnonce(&self) -> &str {
        self.param("cnonce")
    }

    #[inline]
    pub fn opaque(&self) -> &str {
        self.param("opaque")
    }

    #[inline]
    pub fn algorithm(&self) -> &str {
        self.param("algorithm")
    }

    #[inline]
    pub fn response(&self) -> &str {
        self.param("response")
    }
}

impl FromStr for DigestCredentials {
    type Err = DigestAuthError;

    /// Parse the comma separated `name=value` list that follows the `Digest`
    /// scheme token, with quoted-string and token values both accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut params = FxHashMap::default();
        let mut rest = s.trim();
        while !rest.is_empty() {
            let Some(eq) = memchr::memchr(b'=', rest.as_bytes()) else {
                return Err(DigestAuthError::MalformedCredentials);
            };
            let name = rest[..eq].trim();
            if name.is_empty() {
                return Err(DigestAuthError::MalformedCredentials);
            }
            let after_eq = rest[eq + 1..].trim_start();
            let (value, remaining) = if let Some(quoted) = after_eq.strip_prefix('"') {
                parse_quoted_value(quoted)?
            } else {
                match memchr::memchr(b',', after_eq.as_bytes()) {
                    Some(i) => (after_eq[..i].trim_end().to_string(), &after_eq[i..]),
                    None => (after_eq.trim_end().to_string(), ""),
                }
            };
            params.insert(name.to_ascii_lowercase(), value);

            let remaining = remaining.trim_start();
            rest = if let Some(r) = remaining.strip_prefix(',') {
                r.trim_start()
            } else if remaining.is_empty() {
                ""
            } else {
                return Err(DigestAuthError::MalformedCredentials);
            };
        }
        DigestCredentials::new(params)
    }
}

fn parse_quoted_value(s: &str) -> Result<(String, &str), DigestAuthError> {
    let mut value = String::with_capacity(s.len());
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            value.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '"' {
            return Ok((value, &s[i + 1..]));
        } else {
            value.push(c);
        }
    }
    Err(DigestAuthError::MalformedCredentials)
}

fn md5_hex(s: &str) -> String {
    hex::encode(Md5::digest(s.as_bytes()))
}

fn expected_response(
    credentials: &DigestCredentials,
    password: &str,
    server_realm: &str,
    method: &str,
    entity: &[u8],
) -> String {
    let algorithm = DigestAlgorithm::from_param(credentials.algorithm());
    let qop = DigestQop::from_param(credentials.qop());
    let nonce = credentials.nonce();
    let cnonce = credentials.cnonce();

    // all digests nest into the next formula as lowercase hex text
    let a1 = format!("{}:{server_realm}:{password}", credentials.username());
    let ha1 = match algorithm {
        DigestAlgorithm::Md5 => md5_hex(&a1),
        DigestAlgorithm::Md5Sess => md5_hex(&format!("{}:{nonce}:{cnonce}", md5_hex(&a1))),
    };

    let ha2 = match qop {
        DigestQop::None | DigestQop::Auth => md5_hex(&format!("{method}:{}", credentials.uri())),
        DigestQop::AuthInt => {
            let entity_hash = hex::encode(Md5::digest(entity));
            md5_hex(&format!("{method}:{}:{entity_hash}", credentials.uri()))
        }
    };

    match qop {
        DigestQop::None => md5_hex(&format!("{ha1}:{nonce}:{ha2}")),
        DigestQop::Auth | DigestQop::AuthInt => md5_hex(&format!(
            "{ha1}:{nonce}:{}:{cnonce}:{}:{ha2}",
            credentials.nc(),
            qop.as_str()
        )),
    }
}

/// Check whether the client-supplied response hash proves knowledge of
/// `password`, per the RFC 2617 computation.
///
/// `server_realm` is the realm the server holds authoritative for the
/// resource and takes the place of whatever realm the client claimed.
/// `entity` is the raw request body, it only enters the computation for
/// qop `auth-int`. Any mismatch yields `false`, never an error.
pub fn verify_digest(
    credentials: &DigestCredentials,
    password: &str,
    server_realm: &str,
    method: &str,
    entity: &[u8],
) -> bool {
    let computed = expected_response(credentials, password, server_realm, method, entity);
    computed == credentials.response()
}
