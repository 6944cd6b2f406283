/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

use anyhow::anyhow;
use percent_encoding::{AsciiSet, CONTROLS};

const USER_INFO_MAX_LENGTH: usize = 256;

const USER_INFO_PCT_ENCODING_SET: &AsciiSet = &CONTROLS
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'|');

/// The name a client claims in its credentials.
///
/// A colon is not allowed as it is the userinfo delimiter in both the
/// basic auth token and URL userinfo.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Username(String);

impl Username {
    pub fn empty() -> Self {
        Username(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_original(s: &str) -> anyhow::Result<Self> {
        if s.len() > USER_INFO_MAX_LENGTH {
            return Err(anyhow!("too long string for a username"));
        }
        if s.contains(':') {
            return Err(anyhow!("colon character is not allowed"));
        }
        Ok(Username(s.to_string()))
    }

    pub fn from_encoded(s: &str) -> anyhow::Result<Self> {
        let decoded = percent_encoding::percent_decode_str(s)
            .decode_utf8()
            .map_err(|e| anyhow!("decode failed: {e}"))?;
        Username::from_original(decoded.as_ref())
    }

    pub fn as_original(&self) -> &str {
        &self.0
    }

    pub fn to_encoded(&self) -> String {
        percent_encoding::utf8_percent_encode(self.as_original(), USER_INFO_PCT_ENCODING_SET)
            .to_string()
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Password(String);

impl Password {
    pub fn empty() -> Self {
        Password(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_original(s: &str) -> anyhow::Result<Self> {
        if s.len() > USER_INFO_MAX_LENGTH {
            return Err(anyhow!("too long string for a password"));
        }
        Ok(Password(s.to_string()))
    }

    pub fn from_encoded(s: &str) -> anyhow::Result<Self> {
        let decoded = percent_encoding::percent_decode_str(s)
            .decode_utf8()
            .map_err(|e| anyhow!("decode failed: {e}"))?;
        Password::from_original(decoded.as_ref())
    }

    pub fn as_original(&self) -> &str {
        &self.0
    }

    pub fn to_encoded(&self) -> String {
        percent_encoding::utf8_percent_encode(self.as_original(), USER_INFO_PCT_ENCODING_SET)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_reject_colon() {
        assert!(Username::from_original("user:name").is_err());
        assert!(Username::from_original("username").is_ok());
    }

    #[test]
    fn userinfo_encoded_roundtrip() {
        let u = Username::from_encoded("a%40b").unwrap();
        assert_eq!(u.as_original(), "a@b");
        assert_eq!(u.to_encoded(), "a%40b");

        let p = Password::from_encoded("p%3A%3Ass").unwrap();
        assert_eq!(p.as_original(), "p::ss");
    }
}
