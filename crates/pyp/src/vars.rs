//! Variables set on the command line with `-s NAME=VALUE`.
//!
//! Each variable becomes a Python assignment placed before any header code,
//! so the document can refer to it by name.

use std::fmt;
use std::fmt::Write;
use std::str::FromStr;

/// Error parsing a `NAME=VALUE` argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentError {
    #[error("expected name=value for argument -s, --set. Got {0}")]
    MissingEquals(String),

    #[error("invalid variable name {name:?} in -s, --set argument {arg}")]
    InvalidName { name: String, arg: String },
}

/// A string variable bound before the document runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

impl Assignment {
    /// The Python statement binding this variable.
    pub fn to_code(&self) -> String {
        format!("{} = {}", self.name, string_literal(&self.value))
    }
}

/// A double-quoted Python string literal whose value is exactly `value`.
fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

impl FromStr for Assignment {
    type Err = AssignmentError;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let (name, value) = arg
            .split_once('=')
            .ok_or_else(|| AssignmentError::MissingEquals(arg.to_string()))?;
        if !is_identifier(name) {
            return Err(AssignmentError::InvalidName {
                name: name.to_string(),
                arg: arg.to_string(),
            });
        }
        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Prepend assignments to the header code. Returns `None` when there is
/// nothing to emit.
pub fn header_with_assignments(
    assignments: &[Assignment],
    header: Option<String>,
) -> Option<String> {
    let mut parts: Vec<String> = assignments.iter().map(Assignment::to_code).collect();
    parts.extend(header.filter(|h| !h.is_empty()));
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}
