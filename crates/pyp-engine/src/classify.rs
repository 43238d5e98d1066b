//! Code/text line classification.

use serde::Serialize;

/// Which translator a raw line is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    Code,
    Text,
}

/// Classify a raw line. Empty lines are always text, so blank source lines
/// still produce (blank) output.
pub fn classify(line: &str, marker: char) -> LineKind {
    if line.starts_with(marker) {
        LineKind::Code
    } else {
        LineKind::Text
    }
}

/// The body of a code line: everything after the marker.
pub fn code_body(line: &str, marker: char) -> &str {
    line.strip_prefix(marker).unwrap_or(line)
}
