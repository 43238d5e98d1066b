//! Command-line front end.

use crate::config::{PypConfig, expand_newline_markers};
use crate::run::{Input, RunOptions, process};
use crate::vars::{Assignment, header_with_assignments};
use clap::Parser;
use std::path::PathBuf;

/// Translate text documents with embedded `!` code lines into Python.
#[derive(Parser, Debug)]
#[command(name = "pyp", version, about)]
pub struct Args {
    /// Input documents, use - for stdin
    pub files: Vec<PathBuf>,

    /// Verbose messages
    #[arg(long)]
    pub verbose: bool,

    /// Save generated python next to each input as <file>.py instead of printing it
    #[arg(long)]
    pub save_python: bool,

    /// Print variables set on the command line
    #[arg(long)]
    pub print_vars: bool,

    /// First character of a line of python code [default: !]
    #[arg(long, value_name = "CHAR")]
    pub code_char: Option<char>,

    /// Function to call on text lines [default: print]
    #[arg(long, value_name = "NAME")]
    pub handler: Option<String>,

    /// Python to run at the start. Use \n for newline
    #[arg(long, value_name = "CODE")]
    pub header_code: Option<String>,

    /// Python to run at the end. Use \n for newline
    #[arg(long, value_name = "CODE")]
    pub footer_code: Option<String>,

    /// Set a variable with format: name=value
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
    pub vars: Vec<String>,
}

impl Args {
    /// Command-line settings as the topmost config layer.
    fn config_layer(&self) -> PypConfig {
        let mut layer = PypConfig::default();
        layer.translate.code_char = self.code_char;
        layer.translate.handler = self.handler.clone();
        layer.translate.header_code = self.header_code.as_deref().map(expand_newline_markers);
        layer.translate.footer_code = self.footer_code.as_deref().map(expand_newline_markers);
        if self.save_python {
            layer.output.save_python = Some(true);
        }
        layer
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// Run the translator. Returns the process exit code.
pub fn run(args: Args) -> i32 {
    let mut assignments = Vec::with_capacity(args.vars.len());
    for arg in &args.vars {
        match arg.parse::<Assignment>() {
            Ok(assignment) => {
                if args.print_vars {
                    eprintln!("{}", assignment);
                }
                assignments.push(assignment);
            }
            Err(e) => {
                eprintln!("error: {}", e);
                return 1;
            }
        }
    }

    if args.files.is_empty() {
        eprintln!("error: no files");
        return 1;
    }

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => {
            eprintln!("error: cannot determine working directory: {}", e);
            return 1;
        }
    };
    let settings = PypConfig::load(&root).merge(args.config_layer());

    let mut config = settings.engine_config();
    config.header_code = header_with_assignments(&assignments, config.header_code.take());
    if let Err(e) = config.validate() {
        eprintln!("error: {}", e);
        return 1;
    }

    let options = RunOptions {
        save_python: settings.save_python(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failed = false;

    for file in &args.files {
        let input = Input::from_arg(file);
        match process(&input, &config, options, &mut out) {
            Ok(report) => {
                if report.errors > 0 {
                    tracing::debug!(input = %report.input, errors = report.errors, "translated with errors");
                    failed = true;
                }
            }
            Err(e) => {
                eprintln!("error: {:#}", e);
                failed = true;
            }
        }
    }

    if failed { 1 } else { 0 }
}
