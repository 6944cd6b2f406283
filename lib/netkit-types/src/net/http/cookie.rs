/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

use std::cmp::Ordering;

use smol_str::SmolStr;

/// One `name=value` pair of a Cookie header.
///
/// Pairs order by combined name+value length, so that header assembly code
/// can emit the longest pairs first. Ties break on name then value to keep
/// the order total.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CookiePair {
    name: SmolStr,
    value: SmolStr,
}

impl CookiePair {
    pub fn new(name: &str, value: &str) -> Self {
        CookiePair {
            name: name.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[inline]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    #[inline]
    pub fn total_len(&self) -> usize {
        self.name.len() + self.value.len()
    }
}

impl Ord for CookiePair {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_len()
            .cmp(&other.total_len())
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for CookiePair {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
