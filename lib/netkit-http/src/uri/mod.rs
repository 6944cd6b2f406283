/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

mod query;
pub use query::{QueryEncoder, format_query};
