use crate::{base16, base58, base58_check, base_binary};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    InvalidCharacter,
    InvalidLength,
    ChecksumMismatch,
    UnsupportedFormat,
    BufferTooSmall,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidCharacter => write!(f, "invalid character"),
            Self::InvalidLength => write!(f, "invalid length"),
            Self::ChecksumMismatch => write!(f, "checksum mismatch"),
            Self::UnsupportedFormat => write!(f, "unsupported format"),
            Self::BufferTooSmall => write!(f, "buffer too small"),
        }
    }
}

/// Format error raised by the fallible codec entry points.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn unsupported_format(codec: &str, name: &str) -> Self {
        Self::new(ErrorKind::UnsupportedFormat, format!("Unsupported {} format '{}'", codec, name))
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", &self.message)
    }
}

impl error::Error for Error {}

impl From<base16::Error> for Error {
    fn from(error: base16::Error) -> Self {
        let kind = match error {
            base16::Error::BufferTooSmall => ErrorKind::BufferTooSmall,
            base16::Error::InvalidCharacter { .. } | base16::Error::NonAsciiCharacter { .. } => ErrorKind::InvalidCharacter,
            base16::Error::OddLength => ErrorKind::InvalidLength,
        };
        Self::new(kind, error.to_string())
    }
}

impl From<base_binary::encode::Error> for Error {
    fn from(error: base_binary::encode::Error) -> Self {
        Self::new(ErrorKind::BufferTooSmall, error.to_string())
    }
}

impl From<base_binary::decode::Error> for Error {
    fn from(error: base_binary::decode::Error) -> Self {
        use base_binary::decode::Error::*;
        let kind = match error {
            BufferTooSmall => ErrorKind::BufferTooSmall,
            InvalidCharacter { .. } | NonAsciiCharacter { .. } => ErrorKind::InvalidCharacter,
            InvalidLength { .. } | TooShort { .. } => ErrorKind::InvalidLength,
        };
        Self::new(kind, error.to_string())
    }
}

impl From<base58::encode::Error> for Error {
    fn from(error: base58::encode::Error) -> Self {
        Self::new(ErrorKind::BufferTooSmall, error.to_string())
    }
}

impl From<base58::decode::Error> for Error {
    fn from(error: base58::decode::Error) -> Self {
        let kind = match error {
            base58::decode::Error::BufferTooSmall => ErrorKind::BufferTooSmall,
            base58::decode::Error::InvalidCharacter { .. } | base58::decode::Error::NonAsciiCharacter { .. } => {
                ErrorKind::InvalidCharacter
            }
        };
        Self::new(kind, error.to_string())
    }
}

impl From<base58_check::decode::Error> for Error {
    fn from(error: base58_check::decode::Error) -> Self {
        use base58_check::decode::Error::*;
        let kind = match error {
            Base58(error) => return error.into(),
            InvalidChecksum { .. } => ErrorKind::ChecksumMismatch,
            NoChecksum | NoVersion => ErrorKind::InvalidLength,
        };
        Self::new(kind, error.to_string())
    }
}
