/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

/// Serializer for the query component of a request target.
///
/// Pairs render in insertion order as `k=v&k=v` with no trailing separator.
/// Keys and values are emitted verbatim, percent-encoding is up to the
/// caller.
#[derive(Default)]
pub struct QueryEncoder {
    buf: String,
}

impl QueryEncoder {
    pub fn new() -> Self {
        QueryEncoder::default()
    }

    pub fn push(&mut self, key: &str, value: &str) {
        if !self.buf.is_empty() {
            self.buf.push('&');
        }
        self.buf.push_str(key);
        self.buf.push('=');
        self.buf.push_str(value);
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

pub fn format_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut encoder = QueryEncoder::new();
    for (key, value) in pairs {
        encoder.push(key, value);
    }
    encoder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_pairs() {
        assert_eq!(format_query([("a", "1"), ("b", "2"), ("c", "")]), "a=1&b=2&c=");
    }

    #[test]
    fn empty_and_single() {
        assert_eq!(format_query([]), "");

        let mut encoder = QueryEncoder::new();
        encoder.push("key", "value");
        assert_eq!(encoder.as_str(), "key=value");
        assert_eq!(encoder.finish(), "key=value");
    }

    #[test]
    fn preserve_insertion_order() {
        let mut encoder = QueryEncoder::new();
        encoder.push("z", "26");
        encoder.push("a", "1");
        encoder.push("z", "0");
        assert_eq!(encoder.finish(), "z=26&a=1&z=0");
    }
}
