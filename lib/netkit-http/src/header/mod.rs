/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

mod auth;
pub use auth::*;
