//! Code line translation.
//!
//! Code lines are trimmed and re-indented from the block depth, so the input
//! never has to be indented itself:
//!
//! ```text
//! !if ready {          if ready :
//! !    x = 1      =>       x = 1
//! !} else {            else :
//! !x = 2                   x = 2
//! !}
//! ```

use crate::config::Config;
use crate::diagnostic::DiagnosticKind;
use crate::indent::IndentTracker;

/// Python's own block terminator, which code lines must not use.
pub const PYTHON_BLOCK_TERMINATOR: char = ':';

/// A translated code line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    /// Indented Python source.
    pub code: String,
    pub problems: Vec<DiagnosticKind>,
}

/// Translate the body of a code line (marker already removed), updating the
/// block depth.
///
/// A leading block end closes a block before the line is indented, so the
/// closing line sits at the outer depth. A trailing block start becomes `:`
/// and deepens the indentation of the lines after this one.
pub fn translate_code_line(body: &str, config: &Config, indent: &mut IndentTracker) -> CodeLine {
    let mut problems = Vec::new();
    let mut line = body.trim();

    if let Some(rest) = line.strip_prefix(config.block_end) {
        line = rest.trim();
        if !indent.close() {
            problems.push(DiagnosticKind::UnmatchedBlockEnd {
                line: body.to_string(),
            });
        }
    }

    if line.ends_with(PYTHON_BLOCK_TERMINATOR) {
        problems.push(DiagnosticKind::IllegalBlockSyntax {
            start: config.block_start,
            end: config.block_end,
        });
    }

    let mut code = indent.prefix();
    match line.strip_suffix(config.block_start) {
        Some(head) => {
            code.push_str(head);
            code.push(PYTHON_BLOCK_TERMINATOR);
            indent.open();
        }
        None => code.push_str(line),
    }

    CodeLine { code, problems }
}
