/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

mod error;
pub use error::AuthParseError;

mod user;
pub use user::{Password, Username};

#[cfg(feature = "auth-digest")]
mod digest;
#[cfg(feature = "auth-digest")]
pub use digest::{
    DigestAlgorithm, DigestAuthError, DigestCredentials, DigestQop, verify_digest,
};
