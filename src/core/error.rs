use std::fmt;
use std::io;
use std::result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Argument(String),
    Validation(String),
    NotFound(String),
    Persistence(String),
    Io(String),
    Db(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Argument(msg)    => write!(f, "{}", msg),
            Error::Validation(msg)  => write!(f, "{}", msg),
            Error::NotFound(msg)    => write!(f, "{}", msg),
            Error::Persistence(msg) => write!(f, "{}", msg),
            Error::Io(msg)          => write!(f, "{}", msg),
            Error::Db(msg)          => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Persistence(format!("JSON document error: {}", err))
    }
}

impl From<diesel::result::Error> for Error {
    fn from(err: diesel::result::Error) -> Self {
        Error::Db(format!("SQlite excutation error: {}", err))
    }
}

impl From<diesel::ConnectionError> for Error {
    fn from(err: diesel::ConnectionError) -> Self {
        Error::Db(format!("SQLite connection error: {}", err))
    }
}

pub type Result<T> = result::Result<T, Error>;
