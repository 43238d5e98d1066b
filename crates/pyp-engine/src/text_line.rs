//! Text line translation.

use crate::expr::scan;
use crate::indent::IndentTracker;
use crate::quote::Delimiters;

/// Translate a literal text line into a handler call at the current depth.
///
/// Without embedded expressions the line is passed as-is:
/// `print("hello")`. With them, the templated line is formatted:
/// `` `x` plus `y` `` becomes `print("{} plus {}".format(x,y))`.
/// The quoting style is always chosen from the untemplated line.
pub fn translate_text_line(line: &str, handler: &str, indent: &IndentTracker) -> String {
    let scan = scan(line);
    let delimiters = Delimiters::for_line(line);

    let mut out = indent.prefix();
    out.push_str(handler);
    out.push('(');
    if scan.is_empty() {
        out.push_str(&delimiters.wrap(line));
    } else {
        out.push_str(&delimiters.wrap(&scan.template));
        out.push_str(".format(");
        out.push_str(&scan.arguments());
        out.push(')');
    }
    out.push(')');
    out
}
