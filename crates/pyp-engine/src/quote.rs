//! Python string literal quoting for text lines.
//!
//! The narrowest form that is valid for the line is chosen, in order:
//! a plain `"…"` literal, a plain `'…'` literal, then a raw triple-quoted
//! `r"""…"""` literal. Lines never contain newlines, so plain literals only
//! need to avoid their own quote character and backslashes.

/// Literal form chosen for a text line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    Double,
    Single,
    RawTriple,
}

impl QuoteStyle {
    /// Pick the narrowest safe style for `line`.
    pub fn select(line: &str) -> Self {
        let has_backslash = line.contains('\\');
        if !has_backslash && !line.contains('"') {
            QuoteStyle::Double
        } else if !has_backslash && !line.contains('\'') {
            QuoteStyle::Single
        } else {
            QuoteStyle::RawTriple
        }
    }
}

/// Opening and closing delimiters for one literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub style: QuoteStyle,
    pub open: &'static str,
    pub close: &'static str,
}

impl Delimiters {
    /// Delimiters for `line`.
    ///
    /// In raw triple-quoted form a leading `"` gets a space after the opener
    /// and a trailing `"` gets a space before the closer, each independently.
    /// A trailing backslash is followed by `\ ` so it cannot escape the closer.
    pub fn for_line(line: &str) -> Self {
        let style = QuoteStyle::select(line);
        let (open, close) = match style {
            QuoteStyle::Double => ("\"", "\""),
            QuoteStyle::Single => ("'", "'"),
            QuoteStyle::RawTriple => {
                let open = if line.starts_with('"') {
                    "r\"\"\" "
                } else {
                    "r\"\"\""
                };
                let close = if line.ends_with('\\') {
                    "\\ \"\"\""
                } else if line.ends_with('"') {
                    " \"\"\""
                } else {
                    "\"\"\""
                };
                (open, close)
            }
        };
        Self { style, open, close }
    }

    /// Surround `body` with these delimiters.
    pub fn wrap(&self, body: &str) -> String {
        let mut out = String::with_capacity(self.open.len() + body.len() + self.close.len());
        out.push_str(self.open);
        out.push_str(body);
        out.push_str(self.close);
        out
    }
}
