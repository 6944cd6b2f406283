/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthParseError {
    #[error("unsupported auth type")]
    UnsupportedAuthType,
    #[error("invalid base64 encoding")]
    InvalidBase64Encoding,
    #[error("invalid utf-8 encoding")]
    InvalidUtf8Encoding,
    #[error("invalid username")]
    InvalidUsername,
    #[error("invalid password")]
    InvalidPassword,
    #[error("no delimiter found")]
    NoDelimiterFound,
    #[cfg(feature = "auth-digest")]
    #[error("invalid digest credentials: {0}")]
    InvalidDigestCredentials(#[from] super::DigestAuthError),
}
