use std::error;
use std::fmt;

/// A unified enum of errors returned by the compile service client
#[derive(Debug)]
pub enum ServiceError {
    /// A transport level reqwest::Error, the exchange never completed
    Transport(reqwest::Error),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ServiceError::Transport(ref err) => write!(fmt, "compile request failed: {}", err),
        }
    }
}

impl error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            ServiceError::Transport(ref err) => Some(err),
        }
    }
}
