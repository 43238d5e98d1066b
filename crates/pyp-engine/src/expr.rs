//! Embedded expression scanner.
//!
//! A text line may embed Python expressions between backticks:
//!
//! ```text
//! Total: `count` items (`ratio:`)
//! ```
//!
//! A token opens at a backtick and closes at the nearest later backtick that
//! leaves at least one character of content, so an empty pair of backticks
//! never forms a token on its own. When the content is longer than one
//! character and ends in a format-hint character (`:`, `.` or `*`), the hint
//! is split off. Hints are recognized but not used when generating code.

use std::ops::Range;

/// Delimiter around an embedded expression.
pub const EXPR_DELIMITER: char = '`';

/// Characters accepted as a trailing format hint inside a token.
pub const FORMAT_HINTS: &[char] = &[':', '.', '*'];

/// Positional placeholder substituted for each token in the template.
pub const PLACEHOLDER: &str = "{}";

/// One backtick token found in a text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedExpression<'a> {
    /// Expression source, without delimiters or hint.
    pub source: &'a str,
    /// Trailing format hint, if the token had one.
    pub hint: Option<char>,
    /// Byte span of the whole token, delimiters included.
    pub span: Range<usize>,
}

/// Result of scanning a text line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<'a> {
    pub expressions: Vec<EmbeddedExpression<'a>>,
    /// The line with each token replaced by [`PLACEHOLDER`].
    pub template: String,
}

impl Scan<'_> {
    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Expression sources joined as a Python argument list.
    pub fn arguments(&self) -> String {
        let sources: Vec<&str> = self.expressions.iter().map(|e| e.source).collect();
        sources.join(",")
    }
}

/// Scan `line` left to right for embedded expressions.
pub fn scan(line: &str) -> Scan<'_> {
    let delim = EXPR_DELIMITER.len_utf8();
    let mut expressions = Vec::new();
    let mut template = String::with_capacity(line.len());
    let mut copied = 0;
    let mut cursor = 0;

    while let Some(offset) = line[cursor..].find(EXPR_DELIMITER) {
        let open = cursor + offset;
        let content_start = open + delim;
        // Content must be at least one character, which may itself be a backtick.
        let Some(first) = line[content_start..].chars().next() else {
            break;
        };
        let search_from = content_start + first.len_utf8();
        let Some(close_offset) = line[search_from..].find(EXPR_DELIMITER) else {
            // No later delimiter means no later token can close either.
            break;
        };
        let close = search_from + close_offset;
        let (source, hint) = split_hint(&line[content_start..close]);

        template.push_str(&line[copied..open]);
        template.push_str(PLACEHOLDER);
        copied = close + delim;
        cursor = copied;

        expressions.push(EmbeddedExpression {
            source,
            hint,
            span: open..copied,
        });
    }

    template.push_str(&line[copied..]);
    Scan {
        expressions,
        template,
    }
}

fn split_hint(content: &str) -> (&str, Option<char>) {
    let mut chars = content.chars();
    match chars.next_back() {
        Some(last) if FORMAT_HINTS.contains(&last) && !chars.as_str().is_empty() => {
            (chars.as_str(), Some(last))
        }
        _ => (content, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources(line: &str) -> Vec<&str> {
        scan(line).expressions.iter().map(|e| e.source).collect()
    }

    #[test]
    fn test_no_expressions() {
        let scan = scan("plain text");
        assert!(scan.is_empty());
        assert_eq!(scan.template, "plain text");
    }

    #[test]
    fn test_expressions_in_order() {
        let scan = scan("`x` plus `y` equals `z`");
        assert_eq!(scan.template, "{} plus {} equals {}");
        assert_eq!(scan.arguments(), "x,y,z");
        assert_eq!(scan.expressions[1].span, 9..12);
    }

    #[test]
    fn test_nearest_closing_delimiter() {
        assert_eq!(sources("`a` and `b + c`"), vec!["a", "b + c"]);
        assert_eq!(scan("`a` and `b + c`").template, "{} and {}");
    }

    #[test]
    fn test_format_hints_are_discarded() {
        let scan = scan("`price:` `ratio.` `items*`");
        assert_eq!(scan.arguments(), "price,ratio,items");
        assert_eq!(scan.expressions[0].hint, Some(':'));
        assert_eq!(scan.expressions[1].hint, Some('.'));
        assert_eq!(scan.expressions[2].hint, Some('*'));
        assert_eq!(scan.template, "{} {} {}");
    }

    #[test]
    fn test_hint_only_at_end() {
        assert_eq!(sources("`d[k:v]`"), vec!["d[k:v]"]);
        assert_eq!(sources("`obj.attr`"), vec!["obj.attr"]);
        // Only one trailing hint is split off.
        assert_eq!(sources("`a..`"), vec!["a."]);
    }

    #[test]
    fn test_single_char_content_keeps_hint_char() {
        let scan = scan("`.`");
        assert_eq!(scan.expressions[0].source, ".");
        assert_eq!(scan.expressions[0].hint, None);
    }

    #[test]
    fn test_empty_backticks() {
        // An empty pair cannot close; the second backtick becomes content.
        assert_eq!(sources("``x`"), vec!["`x"]);
        assert!(scan("``").is_empty());
        assert_eq!(scan("``").template, "``");
    }

    #[test]
    fn test_unclosed_delimiter() {
        let scan = scan("`a` then `b");
        assert_eq!(scan.arguments(), "a");
        assert_eq!(scan.template, "{} then `b");
    }

    #[test]
    fn test_unicode_content() {
        let scan = scan("héllo `nàme` ✓");
        assert_eq!(scan.arguments(), "nàme");
        assert_eq!(scan.template, "héllo {} ✓");
    }
}
