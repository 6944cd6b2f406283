/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

mod tls;
pub use tls::*;

#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::*;
