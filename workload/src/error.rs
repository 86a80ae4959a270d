//! Error types for workload generation and inspection.

use std::fmt;
use std::path::PathBuf;

/// Result type for workload operations.
pub type WorkloadResult<T> = Result<T, WorkloadError>;

/// Top-level errors returned by the generator and the inspector.
#[derive(Debug)]
#[non_exhaustive]
pub enum WorkloadError {
    /// A directory or file operation failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration was rejected before anything was written.
    Config(ConfigError),

    /// A workload file could not be parsed.
    Parse { path: PathBuf, source: ParseError },
}

/// Configuration problems detected by `GeneratorConfig::validate`.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `file_count` is zero.
    NoTargetFiles,

    /// `commands_per_file` is zero.
    NoCommands,

    /// The profile list is empty.
    NoProfiles,

    /// A profile has an empty name.
    EmptyProfileName,

    /// A profile name cannot be used as a file stem.
    InvalidProfileName { name: String },

    /// Two profiles share a name and would write the same file.
    DuplicateProfile { name: String },

    /// A probability lies outside `[0, 1]` or is not finite.
    ProbabilityOutOfRange { name: String, value: f64 },

    /// `prob_write + prob_read` is not 1.
    ProbabilitySum { name: String, sum: f64 },
}

/// Errors produced while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line holds no tag.
    Empty,

    /// The tag is not a generated command.
    UnknownTag { tag: String },

    /// Wrong number of comma-separated fields for the tag.
    FieldCount {
        tag: &'static str,
        expected: usize,
        found: usize,
    },

    /// A required field is blank.
    EmptyField { tag: &'static str },

    /// Wraps an error with its 1-based line number.
    AtLine { line: usize, source: Box<ParseError> },
}

impl WorkloadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<ConfigError> for WorkloadError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Parse { path, source } => write!(f, "{}: {source}", path.display()),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTargetFiles => write!(f, "file count must be at least 1"),
            Self::NoCommands => write!(f, "commands per file must be at least 1"),
            Self::NoProfiles => write!(f, "at least one profile is required"),
            Self::EmptyProfileName => write!(f, "profile name must not be empty"),
            Self::InvalidProfileName { name } => {
                write!(f, "profile name {name:?} is not a valid file name")
            }
            Self::DuplicateProfile { name } => write!(f, "duplicate profile {name:?}"),
            Self::ProbabilityOutOfRange { name, value } => {
                write!(f, "profile {name:?}: probability {value} outside [0, 1]")
            }
            Self::ProbabilitySum { name, sum } => {
                write!(f, "profile {name:?}: probabilities sum to {sum}, expected 1")
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::UnknownTag { tag } => write!(f, "unknown command tag {tag:?}"),
            Self::FieldCount {
                tag,
                expected,
                found,
            } => {
                write!(f, "{tag} expects {expected} fields, found {found}")
            }
            Self::EmptyField { tag } => write!(f, "{tag} has an empty field"),
            Self::AtLine { line, source } => write!(f, "line {line}: {source}"),
        }
    }
}

impl std::error::Error for WorkloadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Config(err) => Some(err),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

impl std::error::Error for ConfigError {}

impl std::error::Error for ParseError {}
