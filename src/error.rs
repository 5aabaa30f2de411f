use std::fmt::Formatter;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
}

#[derive(Debug)]
pub enum ErrorKind {
    /// The base URL, path or a header could not be assembled into a request
    Construction(String),
    Serialization(serde_json::Error),
    /// Whatever the transport failed with, passed through as is
    Transport(anyhow::Error),
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn construction(message: impl Into<String>) -> Error {
        Error {
            kind: ErrorKind::Construction(message.into()),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ErrorKind::Construction(_) => None,
            ErrorKind::Serialization(e) | ErrorKind::Parse(e) => Some(e),
            ErrorKind::Transport(e) => Some(&**e),
            ErrorKind::Io(e) => Some(e),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ErrorKind::Construction(message) => {
                f.write_fmt(format_args!("Could not build request: {}", message))
            }
            ErrorKind::Serialization(e) => {
                f.write_fmt(format_args!("Could not serialize request body: {}", e))
            }
            ErrorKind::Transport(e) => f.write_fmt(format_args!("Transport error: {}", e)),
            ErrorKind::Io(e) => f.write_fmt(format_args!("Could not read response body: {}", e)),
            ErrorKind::Parse(e) => {
                f.write_fmt(format_args!("Could not parse response body: {}", e))
            }
        }
    }
}
