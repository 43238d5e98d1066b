//! The translation engine: routes lines and collects output.

use crate::classify::{LineKind, classify, code_body};
use crate::code_line::translate_code_line;
use crate::config::Config;
use crate::diagnostic::{Diagnostic, Origin};
use crate::indent::IndentTracker;
use crate::text_line::translate_text_line;
use crate::traits::Sink;
use serde::Serialize;

/// Generated code and the diagnostics found while producing it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub lines: Vec<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Translation {
    /// Generated lines joined into one Python source string.
    pub fn code(&self) -> String {
        self.lines.join("\n")
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// A [`Sink`] that keeps everything in memory.
#[derive(Debug, Default)]
pub struct Collector {
    translation: Translation,
}

impl Collector {
    pub fn into_translation(self) -> Translation {
        self.translation
    }
}

impl Sink for Collector {
    fn emit(&mut self, code: String) {
        self.translation.lines.push(code);
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        self.translation.diagnostics.push(diagnostic);
    }
}

/// Incremental translator. Feed raw lines one at a time, then finish.
///
/// The header (if any) is emitted on construction and the footer when the
/// engine is finished, both at whatever depth is current at that point.
pub struct Engine<S: Sink = Collector> {
    config: Config,
    indent: IndentTracker,
    line_number: usize,
    error_count: usize,
    sink: S,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Collector::default())
    }

    /// Emit the footer and return everything generated.
    pub fn finish(self) -> Translation {
        self.into_sink().into_translation()
    }
}

impl<S: Sink> Engine<S> {
    /// Create an engine streaming into `sink`.
    pub fn with_sink(config: Config, sink: S) -> Self {
        let mut engine = Self {
            config,
            indent: IndentTracker::new(),
            line_number: 0,
            error_count: 0,
            sink,
        };
        if let Some(header) = engine.config.header().map(str::to_owned) {
            engine.code_line(&header, Origin::Header);
        }
        engine
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current block depth.
    pub fn depth(&self) -> usize {
        self.indent.depth()
    }

    /// Diagnostics reported so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Translate one raw line (without its trailing newline).
    pub fn feed_line(&mut self, raw: &str) -> &mut Self {
        self.line_number += 1;
        let kind = classify(raw, self.config.code_marker);
        tracing::trace!(
            line = self.line_number,
            ?kind,
            depth = self.indent.depth(),
            "translating line"
        );
        match kind {
            LineKind::Code => {
                let body = code_body(raw, self.config.code_marker);
                self.code_line(body, Origin::Line(self.line_number));
            }
            LineKind::Text => {
                let code = translate_text_line(raw, &self.config.handler, &self.indent);
                self.sink.emit(code);
            }
        }
        self
    }

    pub fn feed_lines<I>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        for line in lines {
            self.feed_line(line.as_ref());
        }
        self
    }

    /// Emit the footer and hand back the sink.
    pub fn into_sink(mut self) -> S {
        if let Some(footer) = self.config.footer().map(str::to_owned) {
            self.code_line(&footer, Origin::Footer);
        }
        tracing::debug!(
            lines = self.line_number,
            errors = self.error_count,
            depth = self.indent.depth(),
            "translation finished"
        );
        self.sink
    }

    fn code_line(&mut self, body: &str, origin: Origin) {
        let translated = translate_code_line(body, &self.config, &mut self.indent);
        for kind in translated.problems {
            let diagnostic = Diagnostic::new(origin, kind);
            tracing::debug!(%diagnostic, "diagnostic");
            self.error_count += 1;
            self.sink.report(diagnostic);
        }
        self.sink.emit(translated.code);
    }
}

/// Translate a whole sequence of raw lines.
pub fn translate<I>(lines: I, config: &Config) -> Translation
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut engine = Engine::new(config.clone());
    engine.feed_lines(lines);
    engine.finish()
}

/// Translate a document held in a string. See [`raw_lines`] for how it is split.
pub fn translate_str(source: &str, config: &Config) -> Translation {
    translate(raw_lines(source), config)
}

/// Split `source` into raw lines the way a text-mode line reader does.
///
/// `\n`, `\r\n` and a lone `\r` all end a line, and a final line ending
/// does not start another line.
pub fn raw_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = source;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (line, next) = match rest.find(['\n', '\r']) {
            Some(end) => {
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                (&rest[..end], &rest[end + width..])
            }
            None => (rest, ""),
        };
        rest = next;
        Some(line)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticKind;

    fn indents(translation: &Translation) -> Vec<usize> {
        translation
            .lines
            .iter()
            .map(|l| l.len() - l.trim_start_matches(' ').len())
            .collect()
    }

    #[test]
    fn test_end_to_end_depths() {
        let translation = translate(
            ["!if True {", "  hello", "!}", "  done"],
            &Config::default(),
        );
        assert_eq!(
            translation.lines,
            vec![
                "if True :",
                "    print(\"  hello\")",
                "",
                "print(\"  done\")"
            ]
        );
        assert_eq!(indents(&translation), vec![0, 4, 0, 0]);
        assert!(translation.is_clean());
    }

    #[test]
    fn test_incremental_matches_batch() {
        let lines = ["!for x in xs {", "`x`", "!}"];
        let mut engine = Engine::new(Config::default());
        for line in lines {
            engine.feed_line(line);
        }
        assert_eq!(engine.depth(), 0);
        assert_eq!(engine.finish(), translate(lines, &Config::default()));
    }

    #[test]
    fn test_header_and_footer_placement() {
        let config = Config::default()
            .with_header("import sys")
            .with_footer("sys.stdout.flush()");
        let translation = translate(["hi"], &config);
        assert_eq!(
            translation.lines,
            vec!["import sys", "print(\"hi\")", "sys.stdout.flush()"]
        );
    }

    #[test]
    fn test_empty_header_footer_same_as_none() {
        let lines = ["a", "!x = 1", "b"];
        let with_empty = translate(lines, &Config::default().with_header("").with_footer(""));
        assert_eq!(with_empty, translate(lines, &Config::default()));
    }

    #[test]
    fn test_footer_at_current_depth() {
        let config = Config::default().with_footer("done()");
        let translation = translate(["!while True {"], &config);
        assert_eq!(translation.lines, vec!["while True :", "    done()"]);
    }

    #[test]
    fn test_multiline_header_is_one_code_line() {
        let config = Config::default().with_header("import os\nimport sys\n");
        let translation = translate(Vec::<&str>::new(), &config);
        assert_eq!(translation.lines, vec!["import os\nimport sys"]);
    }

    #[test]
    fn test_diagnostics_carry_origin() {
        let config = Config::default().with_header("}");
        let translation = translate(["ok", "!if x:", "!}"], &config);
        assert_eq!(translation.error_count(), 3);
        assert_eq!(
            translation.diagnostics[0],
            Diagnostic::new(
                Origin::Header,
                DiagnosticKind::UnmatchedBlockEnd { line: "}".into() }
            )
        );
        assert_eq!(translation.diagnostics[1].origin, Origin::Line(2));
        assert_eq!(translation.diagnostics[2].origin, Origin::Line(3));
        // Lines are still emitted.
        assert_eq!(translation.lines.len(), 4);
    }

    #[test]
    fn test_error_count_only_grows() {
        let mut engine = Engine::new(Config::default());
        let mut seen = 0;
        for line in ["!}", "text", "!}", "!if a {", "!}", "!}"] {
            engine.feed_line(line);
            assert!(engine.error_count() >= seen);
            seen = engine.error_count();
        }
        assert_eq!(seen, 3);
        assert_eq!(engine.depth(), 0);
    }

    #[test]
    fn test_custom_sink_sees_stream() {
        #[derive(Default)]
        struct Events(Vec<String>);

        impl Sink for Events {
            fn emit(&mut self, code: String) {
                self.0.push(format!("emit {code}"));
            }

            fn report(&mut self, diagnostic: Diagnostic) {
                self.0.push(format!("report {diagnostic}"));
            }
        }

        let mut events = Events::default();
        let mut engine = Engine::with_sink(Config::default(), &mut events);
        engine.feed_line("!}").feed_line("x");
        engine.into_sink();

        assert_eq!(
            events.0,
            vec![
                "report line 1: unmatched block ending: }",
                "emit ",
                "emit print(\"x\")"
            ]
        );
    }

    #[test]
    fn test_custom_marker() {
        let config = Config::default().with_code_marker('%');
        let translation = translate(["%x = 1", "!not code"], &config);
        assert_eq!(translation.lines, vec!["x = 1", "print(\"!not code\")"]);
    }

    #[test]
    fn test_raw_lines() {
        let lines: Vec<&str> = raw_lines("a\r\nb\n\nc").collect();
        assert_eq!(lines, vec!["a", "b", "", "c"]);

        let lines: Vec<&str> = raw_lines("a\n").collect();
        assert_eq!(lines, vec!["a"]);

        assert_eq!(raw_lines("").count(), 0);
    }

    #[test]
    fn test_raw_lines_lone_carriage_return() {
        let lines: Vec<&str> = raw_lines("a\rb\r\rc\r").collect();
        assert_eq!(lines, vec!["a", "b", "", "c"]);

        let translation = translate_str("!x = 1\rx `x`\r", &Config::default());
        assert_eq!(translation.code(), "x = 1\nprint(\"x {}\".format(x))");
    }

    #[test]
    fn test_translate_str() {
        let translation = translate_str("!x = 2\nx is `x`\n", &Config::default());
        assert_eq!(translation.code(), "x = 2\nprint(\"x is {}\".format(x))");
    }
}
