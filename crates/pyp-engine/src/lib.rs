//! Line translation engine for pyp documents.
//!
//! `pyp-engine` turns a document that mixes literal text with marked code lines
//! into Python source. Text lines become calls to a handler function (`print`
//! by default); code lines are copied through with their indentation derived
//! from `{` / `}` block markers rather than from leading whitespace.
//!
//! # Architecture
//!
//! ```text
//!  raw line ──> classify ──┬─> code_line ──┐
//!                          │   (indent)    ├─> Engine ──> Sink
//!                          └─> text_line ──┘
//!                              (expr, quote)
//! ```
//!
//! # Example
//!
//! ```
//! use pyp_engine::{Config, translate};
//!
//! let translation = translate(["!for n in range(2) {", "n = `n`", "!}"], &Config::default());
//! assert_eq!(
//!     translation.code(),
//!     "for n in range(2) :\n    print(\"n = {}\".format(n))\n"
//! );
//! assert_eq!(translation.error_count(), 0);
//! ```
//!
//! The engine never fails on malformed input. Misused block markers are
//! reported as [`Diagnostic`]s and translation continues with best-effort
//! output; the caller decides what a non-zero error count means.

pub mod classify;
pub mod code_line;
pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod expr;
pub mod indent;
pub mod quote;
pub mod text_line;
pub mod traits;

// Re-exports: configuration and results
pub use config::{Config, ConfigError};
pub use diagnostic::{Diagnostic, DiagnosticKind, Origin};
pub use engine::{Collector, Engine, Translation, raw_lines, translate, translate_str};

// Re-exports: building blocks
pub use classify::{LineKind, classify};
pub use expr::{EmbeddedExpression, Scan, scan};
pub use indent::IndentTracker;
pub use quote::{Delimiters, QuoteStyle};
pub use traits::Sink;
