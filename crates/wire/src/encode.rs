//! Percent-encoding for query-string components.
//!
//! One escaping convention for the whole crate:
//! - Controls, space, `"`, `#`, `%`, `&`, `+`, `=`, `?` and all non-ASCII
//!   bytes are escaped.
//! - Everything else, notably comma, colon, slash, brackets and single
//!   quote, stays literal, so rendered queries read like the server's own
//!   request log.
//! - Space encodes as `%20`, never `+`.
//!
//! [`decode_component`] is the exact inverse of [`encode_component`].
//! Because `%` itself is always escaped, the `%0A` marker inserted between
//! bulk-data lines can never collide with encoded data.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

use crate::{Error, Result};

/// Byte set escaped in query-string components.
const COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?');

/// Percent-encode one query-string component.
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Decode a percent-encoded query-string component.
///
/// Strict: rejects truncated or non-hex escapes and escapes that do not
/// decode to UTF-8, instead of passing them through as literal bytes.
pub fn decode_component(encoded: &str) -> Result<String> {
    let bytes = encoded.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let complete = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !complete {
                return Err(Error::InvalidEncoding {
                    reason: format!("truncated or non-hex escape at byte {}", i),
                });
            }
            i += 3;
        } else {
            i += 1;
        }
    }

    percent_decode_str(encoded)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::InvalidEncoding {
            reason: e.to_string(),
        })
}
