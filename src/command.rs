//! Command tokenizing
//!
//! Job commands arrive either as a single shell-like string or as an argv
//! list. Both become an argv vector; strings are split with POSIX shell
//! quoting rules.

use crate::error::CommandError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A command as written in a job specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandLine {
    /// Shell-like command string, e.g. `ls -l "my dir"`
    Line(String),
    /// Already tokenized argv
    Argv(Vec<String>),
}

impl CommandLine {
    /// Tokenize into an argv vector
    pub fn into_argv(self) -> Result<Vec<String>, CommandError> {
        match self {
            CommandLine::Line(line) => shlex::split(&line).ok_or_else(|| {
                CommandError::Unparseable(format!("unbalanced quoting in {:?}", line))
            }),
            CommandLine::Argv(argv) => Ok(argv),
        }
    }
}

impl TryFrom<&Value> for CommandLine {
    type Error = CommandError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(line) => Ok(CommandLine::Line(line.clone())),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(arg) => Ok(arg.clone()),
                    other => Err(CommandError::InvalidType(format!(
                        "a list containing {}",
                        json_type_name(other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(CommandLine::Argv),
            other => Err(CommandError::InvalidType(json_type_name(other).to_string())),
        }
    }
}

/// Turn a JSON command (string or list of strings) into an argv vector
///
/// Any other JSON type is rejected instead of coerced.
pub fn format_cmd(cmd: &Value) -> Result<Vec<String>, CommandError> {
    CommandLine::try_from(cmd)?.into_argv()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
