/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

mod version;
pub use version::TlsVersion;

mod client_auth;
pub use client_auth::TlsClientAuthConfig;
