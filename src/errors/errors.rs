use std::{ascii, io};

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug)]
#[error("{internal_error}{}", line_suffix(.position))]
pub struct Error {
    #[source]
    internal_error: ErrorImpl,
    position: Option<Position>,
}

fn line_suffix(position: &Option<Position>) -> String {
    match position {
        Some(position) => format!(" on line {}", position.0),
        None => String::new(),
    }
}

fn escape_byte(byte: &u8) -> ascii::EscapeDefault {
    ascii::escape_default(*byte)
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    pub fn open_failed(path: impl Into<String>, source: io::Error) -> Self {
        Error::without_position(ErrorImpl::OpenFailed { path: path.into(), source })
    }

    pub fn read_failed(path: impl Into<String>, source: io::Error) -> Self {
        Error::without_position(ErrorImpl::ReadFailed { path: path.into(), source })
    }

    pub fn write_failed(source: io::Error) -> Self {
        Error::without_position(ErrorImpl::WriteFailed { source })
    }

    fn without_position(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn unrecognised(character: u8, position: Position) -> Self {
        Error::new(ErrorImpl::UnrecognisedCharacter { character }, position)
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// Line the error was raised on, if it came from scanning.
    pub fn line(&self) -> Option<u32> {
        self.position.as_ref().map(|position| position.0)
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::OpenFailed { .. }
            | ErrorImpl::ReadFailed { .. }
            | ErrorImpl::WriteFailed { .. } => "IOError",
            ErrorImpl::UnrecognisedCharacter { .. } => "LexError",
        }
    }
}

#[derive(Error, Debug)]
pub enum ErrorImpl {
    #[error("unable to open file {path}: {source}")]
    OpenFailed {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("error reading {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("error writing tokens: {source}")]
    WriteFailed {
        #[source]
        source: io::Error,
    },
    /// Raw input byte, shown escaped when it is not printable ASCII.
    #[error("unrecognised character '{}'", escape_byte(.character))]
    UnrecognisedCharacter { character: u8 },
}
