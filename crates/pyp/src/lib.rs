//! Host side of pyp: configuration layers, command-line variables and file
//! handling around [`pyp_engine`].
//!
//! The engine turns a document into Python source; this crate decides where
//! documents come from, which settings apply to them and where the generated
//! code goes. Running the generated code is left to the caller.

pub mod config;
pub mod run;
pub mod vars;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::{ConfigFileError, OutputConfig, PypConfig, TranslateConfig, expand_newline_markers};
pub use run::{FileReport, Input, ReportingSink, RunOptions, process, save_generated, translate_input};
pub use vars::{Assignment, AssignmentError, header_with_assignments};
