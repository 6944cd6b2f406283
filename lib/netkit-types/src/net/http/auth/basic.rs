/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

use std::str::FromStr;

use base64::prelude::*;

use crate::auth::{AuthParseError, Password, Username};

pub struct HttpBasicAuth {
    username: Username,
    password: Password,
}

impl HttpBasicAuth {
    pub fn new(username: Username, password: Password) -> Self {
        HttpBasicAuth { username, password }
    }

    #[inline]
    pub fn username(&self) -> &Username {
        &self.username
    }

    #[inline]
    pub fn password(&self) -> &Password {
        &self.password
    }

    pub fn encode_value(&self) -> String {
        BASE64_STANDARD.encode(format!(
            "{}:{}",
            self.username.as_original(),
            self.password.as_original()
        ))
    }
}

impl FromStr for HttpBasicAuth {
    type Err = AuthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // allow more space than the field grammar does
        let encoded = s.trim();

        let decoded = BASE64_STANDARD
            .decode(encoded)
            .map_err(|_| AuthParseError::InvalidBase64Encoding)?;
        let value =
            std::str::from_utf8(&decoded).map_err(|_| AuthParseError::InvalidUtf8Encoding)?;

        match memchr::memchr(b':', value.as_bytes()) {
            Some(i) => {
                let username = Username::from_original(&value[0..i])
                    .map_err(|_| AuthParseError::InvalidUsername)?;
                let password = Password::from_original(&value[i + 1..])
                    .map_err(|_| AuthParseError::InvalidPassword)?;
                Ok(HttpBasicAuth::new(username, password))
            }
            None => Err(AuthParseError::NoDelimiterFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_encode() {
        let auth = HttpBasicAuth::from_str("cm9vdDp0b29y").unwrap();
        assert_eq!(auth.username().as_original(), "root");
        assert_eq!(auth.password().as_original(), "toor");
        assert_eq!(auth.encode_value(), "cm9vdDp0b29y");
    }

    #[test]
    fn decode_no_delimiter() {
        let encoded = BASE64_STANDARD.encode("no-password-here");
        assert!(HttpBasicAuth::from_str(&encoded).is_err());
    }
}
