//! Percent-encoding for identifiers interpolated into API paths.
//!
//! PagerDuty identifiers are normally short alphanumerics (`PABC123`), but the
//! client accepts any caller-supplied string, so each one is encoded as a
//! single path segment before it is joined into an entity path.
//!
//! # Example
//!
//! ```
//! use pagerduty_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("P1/../users"), "P1%2F..%2Fusers");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Bytes escaped inside one path segment (RFC 3986 §3.3 plus delimiters).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b'[')
    .add(b']');

/// Percent-encode `segment` so it stays one path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
