//! Translate input documents and deliver the generated code.

use anyhow::{Context, Result, bail};
use pyp_engine::{Collector, Config, Diagnostic, Engine, Sink, Translation, raw_lines};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Where a document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Interpret a command-line argument; `-` is stdin.
    pub fn from_arg(arg: &Path) -> Self {
        if arg.as_os_str() == "-" {
            Input::Stdin
        } else {
            Input::File(arg.to_path_buf())
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Input::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read stdin")?;
                Ok(buf)
            }
            Input::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    /// Path of the generated-code copy: the input path with `.py` appended.
    pub fn generated_path(&self) -> Option<PathBuf> {
        match self {
            Input::Stdin => None,
            Input::File(path) => {
                let mut name = path.as_os_str().to_owned();
                name.push(".py");
                Some(PathBuf::from(name))
            }
        }
    }
}

/// Sink that prints each diagnostic to stderr as soon as it is reported,
/// prefixed with the input name, while collecting the translation.
pub struct ReportingSink {
    name: String,
    inner: Collector,
}

impl ReportingSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inner: Collector::default(),
        }
    }

    pub fn into_translation(self) -> Translation {
        self.inner.into_translation()
    }
}

impl Sink for ReportingSink {
    fn emit(&mut self, code: String) {
        self.inner.emit(code);
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        eprintln!("{}: {}", self.name, diagnostic);
        self.inner.report(diagnostic);
    }
}

/// Read and translate one input, reporting diagnostics as they occur.
pub fn translate_input(input: &Input, config: &Config) -> Result<Translation> {
    let source = input.read_to_string()?;
    let mut engine = Engine::with_sink(config.clone(), ReportingSink::new(input.display_name()));
    engine.feed_lines(raw_lines(&source));
    Ok(engine.into_sink().into_translation())
}

/// Write generated code to `path`.
pub fn save_generated(path: &Path, code: &str) -> Result<()> {
    std::fs::write(path, code)
        .with_context(|| format!("Error saving generated python to {}", path.display()))
}

/// Host-side switches for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Save a `<file>.py` copy instead of writing code to `out`.
    pub save_python: bool,
}

/// Outcome of processing one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub input: String,
    pub saved_to: Option<PathBuf>,
    pub errors: usize,
}

/// Translate `input` and deliver the code to `out` or to a sibling file.
pub fn process(
    input: &Input,
    config: &Config,
    options: RunOptions,
    out: &mut dyn Write,
) -> Result<FileReport> {
    tracing::info!("Translating: {}", input.display_name());
    let translation = translate_input(input, config)?;
    let code = translation.code();

    let saved_to = if options.save_python {
        let Some(path) = input.generated_path() else {
            bail!("cannot save generated python for {}", input.display_name());
        };
        tracing::info!("Writing {}", path.display());
        save_generated(&path, &code)?;
        Some(path)
    } else {
        writeln!(out, "{}", code).context("Failed to write generated code")?;
        None
    };

    Ok(FileReport {
        input: input.display_name(),
        saved_to,
        errors: translation.error_count(),
    })
}
