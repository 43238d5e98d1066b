//! Translation diagnostics.
//!
//! Diagnostics never stop a translation. They are collected alongside the
//! generated code so the caller can decide whether the run failed.

use serde::Serialize;
use std::fmt;

/// Where a diagnostic came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Header,
    /// 1-based line number in the input.
    Line(usize),
    Footer,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Header => f.write_str("header"),
            Origin::Line(n) => write!(f, "line {n}"),
            Origin::Footer => f.write_str("footer"),
        }
    }
}

/// What went wrong on a code line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A block was closed while none was open.
    #[error("unmatched block ending: {line}")]
    UnmatchedBlockEnd { line: String },

    /// The line ends with Python's own block terminator.
    #[error("use {start} and {end} instead of :")]
    IllegalBlockSyntax { start: char, end: char },
}

/// A problem found while translating, with its location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{origin}: {kind}")]
pub struct Diagnostic {
    pub origin: Origin,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn new(origin: Origin, kind: DiagnosticKind) -> Self {
        Self { origin, kind }
    }
}
