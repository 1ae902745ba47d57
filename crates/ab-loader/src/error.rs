use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for loader operations.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors that can occur while loading an adventure definition.
///
/// Structural errors carry the path of the offending value, e.g.
/// `places.hall.choices.OptionOne[0]`.
#[derive(Debug, Error, Diagnostic)]
pub enum LoaderError {
    /// The file extension or format tag is not JSON or YAML.
    #[error("unsupported file format: {0}")]
    #[diagnostic(
        code(ab::loader::unsupported_format),
        help("adventure files must end in .json, .yaml, or .yml")
    )]
    UnsupportedFormat(String),

    /// The source is not valid JSON.
    #[error("invalid JSON: {0}")]
    #[diagnostic(code(ab::loader::json))]
    Json(#[from] serde_json::Error),

    /// The source is not valid YAML.
    #[error("invalid YAML: {0}")]
    #[diagnostic(code(ab::loader::yaml))]
    Yaml(#[from] serde_yaml::Error),

    /// The adventure file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    #[diagnostic(code(ab::loader::io))]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A choice key does not name a command.
    #[error("illegal value for choice ({name}) at {path}")]
    #[diagnostic(
        code(ab::loader::invalid_command),
        help("choices must be one of OptionOne..OptionNine, Yes, No, Describe, Help, Hint, Restart, Quit")
    )]
    InvalidCommandName {
        /// The unrecognized key.
        name: String,
        /// Where the key was found.
        path: String,
    },

    /// An action key does not name an action.
    #[error("illegal key for action ({name}) at {path}")]
    #[diagnostic(
        code(ab::loader::invalid_action),
        help("actions must be one of Goto, Say, Pause, Play")
    )]
    InvalidActionName {
        /// The unrecognized key.
        name: String,
        /// Where the key was found.
        path: String,
    },

    /// An action entry is not an object with a single key and a string
    /// value.
    #[error("expected a single-key action object at {path} but found {found}")]
    #[diagnostic(
        code(ab::loader::invalid_action_shape),
        help("write each action as {{ \"Say\": \"text\" }}")
    )]
    InvalidActionShape {
        /// Where the entry was found.
        path: String,
        /// What was found instead.
        found: String,
    },

    /// A value has the wrong JSON type.
    #[error("expected {expected} at {path} but found {found}")]
    #[diagnostic(code(ab::loader::malformed))]
    MalformedStructure {
        /// Where the value was found.
        path: String,
        /// The expected type.
        expected: &'static str,
        /// The type found instead.
        found: String,
    },
}
