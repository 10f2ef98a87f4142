//! Error types for a3s-cron-expand

use thiserror::Error;

/// Errors raised while expanding a single cron field
///
/// Every variant carries the name of the field it came from, so the
/// message is self-contained at any call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Field is blank or whitespace only
    #[error("{field} field is empty")]
    Empty { field: String },

    /// A token expected to be an integer failed to parse
    #[error("'{value}' in {field} is not a number")]
    NotANumber { field: String, value: String },

    /// A value fell outside the field's bounds
    #[error("value {value} in {field} is out of range ({min}-{max})")]
    OutOfRange {
        field: String,
        value: u64,
        min: u32,
        max: u32,
    },

    /// Structural violation around `/`, `-` or `,`
    #[error("malformed {field} field '{value}': {reason}")]
    Malformed {
        field: String,
        value: String,
        reason: String,
    },

    /// Step is zero, negative or not a number
    #[error("invalid step '{value}' in {field}: step must be a positive integer")]
    InvalidStep { field: String, value: String },

    /// Range start is greater than range end
    #[error("invalid range {start}-{end} in {field}: start exceeds end")]
    RangeOrder { field: String, start: u32, end: u32 },

    /// Step is wider than the range it walks
    #[error("step {step} in {field} exceeds the range span of {span}")]
    StepTooLarge { field: String, step: u64, span: u32 },

    /// Expansion yielded no values
    #[error("{field} field expanded to no values")]
    EmptyResult { field: String },
}

impl FieldError {
    /// Name of the field the error belongs to
    pub fn field(&self) -> &str {
        match self {
            FieldError::Empty { field }
            | FieldError::NotANumber { field, .. }
            | FieldError::OutOfRange { field, .. }
            | FieldError::Malformed { field, .. }
            | FieldError::InvalidStep { field, .. }
            | FieldError::RangeOrder { field, .. }
            | FieldError::StepTooLarge { field, .. }
            | FieldError::EmptyResult { field } => field.as_str(),
        }
    }
}

/// Errors raised while parsing a full schedule line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// Input is blank
    #[error("cron expression is empty")]
    Empty,

    /// Fewer than five fields plus a command
    #[error("expected 5 fields followed by a command, got {found} token(s)")]
    TooFewFields { found: usize },

    /// Command part is blank
    #[error("command is empty")]
    EmptyCommand,

    /// A field failed to expand
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl ScheduleError {
    /// The underlying field error, if this error came from a field
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            ScheduleError::Field(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors surfaced by the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of arguments
    #[error("usage: {0}")]
    Usage(String),

    /// Expression failed to parse
    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    /// JSON rendering failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for field expansion
pub type Result<T> = std::result::Result<T, FieldError>;
