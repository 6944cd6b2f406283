/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

use base64::prelude::*;

use netkit_types::auth::{Password, Username};

pub fn authorization_basic(username: &Username, password: &Password) -> String {
    format!(
        "Authorization: Basic {}\r\n",
        BASE64_STANDARD.encode(format!(
            "{}:{}",
            username.as_original(),
            password.as_original()
        ))
    )
}

pub fn www_authenticate_basic(realm: &str) -> String {
    format!("WWW-Authenticate: Basic realm=\"{realm}\"\r\n")
}

pub fn proxy_authenticate_basic(realm: &str) -> String {
    format!("Proxy-Authenticate: Basic realm=\"{realm}\"\r\n")
}

/// The challenge line sent when digest verification fails or no credentials
/// were supplied. The nonce is supplied by the caller's nonce policy.
pub fn www_authenticate_digest(realm: &str, nonce: &str, opaque: Option<&str>) -> String {
    let mut line =
        format!("WWW-Authenticate: Digest realm=\"{realm}\", qop=\"auth\", nonce=\"{nonce}\"");
    if let Some(opaque) = opaque {
        line.push_str(", opaque=\"");
        line.push_str(opaque);
        line.push('"');
    }
    line.push_str("\r\n");
    line
}
