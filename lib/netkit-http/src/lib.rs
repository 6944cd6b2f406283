/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

pub mod body;
pub mod header;
pub mod uri;
