use thiserror::Error;
use crate::distr::Family;

/// Errors surfaced while reading distributions or prior sets. Misuse of the API itself
/// (an out-of-range parameter index, a gradient vector of the wrong size) is not
/// reported here: those are programming errors and panic at the call site.
#[derive(Debug, Error)]
pub enum Error {

    #[error("file format error: {0}")]
    Format(#[from] FormatError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error)

}

impl Error {

    /// Whether this error was caused by malformed content rather than by the underlying stream.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }

}

/// Reasons for which the content of a prior or distribution stream was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {

    #[error("line '{0}' is not a single key=value pair")]
    MalformedLine(String),

    #[error("expected key '{expected}' but found '{found}'")]
    UnexpectedKey { expected : &'static str, found : String },

    #[error("unrecognized distribution type '{0}'")]
    UnknownFamily(String),

    #[error("{family} distribution has {expected} parameters but {found} were given")]
    ParamCount { family : Family, expected : usize, found : usize },

    #[error("invalid value '{value}' for '{key}'")]
    InvalidNumber { key : String, value : String },

    #[error("invalid parameter name '{0}'")]
    InvalidName(String),

    #[error("stream is not valid UTF-8")]
    InvalidEncoding,

    #[error("prior index {index} is out of range for a model with {num_params} parameters")]
    IndexOutOfRange { index : usize, num_params : usize },

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[cfg(feature = "json")]
    #[error("invalid value: {0}")]
    InvalidValue(String)

}

pub type Result<T> = std::result::Result<T, Error>;
