// Error handling for urlparamfilter
//
// The filters themselves never fail. These errors only come from the ambient
// layer: reading configuration and resolving filters by name.

use std::fmt;

/// Application error type
#[derive(Debug)]
pub enum Error {
    Io(String),
    Parse(String),
    InvalidDelimiter(String),
    UnknownFilter(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::Parse(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidDelimiter(msg) => write!(f, "Invalid parameter delimiter: {}", msg),
            Error::UnknownFilter(name) => write!(f, "Unknown filter: {}", name),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
