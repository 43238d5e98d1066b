//! Traits for consumers of engine output.

use crate::diagnostic::Diagnostic;

/// Receives generated code and diagnostics as the engine produces them.
///
/// Lines arrive in output order: header first, then one line per input
/// line, then the footer. A diagnostic arrives before the line it concerns.
pub trait Sink {
    /// Accept one generated line of Python source.
    fn emit(&mut self, code: String);

    /// Accept a diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn emit(&mut self, code: String) {
        (**self).emit(code);
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
