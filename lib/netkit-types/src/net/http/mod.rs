/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

mod auth;
mod cookie;
mod header;

pub use auth::{HttpAuth, HttpBasicAuth};
pub use cookie::CookiePair;
pub use header::HttpHeaderTraits;
