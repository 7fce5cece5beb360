//! Error types for the ABO/GPC codec.

use thiserror::Error;

/// Result type alias for codec operations
pub type Result<T> = std::result::Result<T, AboError>;

/// Coarse classification of an [`AboError`], independent of context layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Content does not match the expected shape.
    Format,
    /// windows-1250 transcoding failed.
    Encoding,
    /// The stream ended before a field could be fully read.
    EndOfInput,
    /// The underlying stream failed.
    Io,
    /// The command line was invalid.
    Usage,
}

/// Errors that can occur while reading or writing ABO/GPC data.
#[derive(Error, Debug)]
pub enum AboError {
    /// Underlying stream failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV export error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Stream ended in the middle of a field
    #[error("unexpected end of input")]
    EndOfInput,

    /// Field content has the wrong shape
    #[error("invalid format: {0}")]
    Format(String),

    /// Text cannot be transcoded from/to windows-1250
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Integer needs more digits than the column provides
    #[error("value {value} does not fit into {width} columns")]
    Overflow { value: u64, width: usize },

    /// Missing input file argument
    #[error("Missing input file argument. Usage: abo-gpc <statement.gpc> [--summary]")]
    MissingArgument,

    /// Error annotated with the logical field, record or group it occurred in
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<AboError>,
    },
}

impl AboError {
    /// Returns the kind of the innermost error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AboError::Io(_) | AboError::Csv(_) => ErrorKind::Io,
            AboError::EndOfInput => ErrorKind::EndOfInput,
            AboError::Format(_) | AboError::Overflow { .. } => ErrorKind::Format,
            AboError::Encoding(_) => ErrorKind::Encoding,
            AboError::MissingArgument => ErrorKind::Usage,
            AboError::Context { source, .. } => source.kind(),
        }
    }

    /// Wraps the error with a description of where it happened.
    pub fn in_context(self, context: impl Into<String>) -> Self {
        AboError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Adds field/record context to fallible codec calls.
pub(crate) trait ResultExt<T> {
    fn context(self, context: &'static str) -> Result<T>;

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: &'static str) -> Result<T> {
        self.map_err(|e| e.in_context(context))
    }

    fn with_context<C, F>(self, f: F) -> Result<T>
    where
        C: Into<String>,
        F: FnOnce() -> C,
    {
        self.map_err(|e| e.in_context(f()))
    }
}
