use super::{compute_checksum, Alphabet, ALPHABET, CHECKSUM_LEN};
use crate::{base16, base58};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    Base58(base58::decode::Error),
    InvalidChecksum { checksum: [u8; 4], expected_checksum: [u8; 4] },
    NoChecksum,
    NoVersion,
}

impl From<base58::decode::Error> for Error {
    fn from(error: base58::decode::Error) -> Self {
        Error::Base58(error)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Base58(error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = base16::Encoder::new(&base16::LOWERCASE);
        match self {
            Error::Base58(error) => write!(f, "{}", error),
            Error::InvalidChecksum {
                checksum,
                expected_checksum,
            } => write!(
                f,
                "Invalid checksum '{}' ({} expected)",
                hex.encode(checksum),
                hex.encode(expected_checksum)
            ),
            Error::NoChecksum => write!(f, "Missing checksum"),
            Error::NoVersion => write!(f, "Missing version byte"),
        }
    }
}

/// Checks the trailing four bytes of `buffer` against the checksum of the bytes before them.
pub fn verify_checksum(buffer: &[u8]) -> Result<(), Error> {
    let (payload, checksum) = split_checksum(buffer)?;
    let expected_checksum = compute_checksum(payload);
    if checksum != expected_checksum {
        return Err(Error::InvalidChecksum {
            checksum,
            expected_checksum,
        });
    }
    Ok(())
}

/// Returns `buffer` without its trailing checksum. Does not verify it.
pub fn remove_checksum(buffer: &[u8]) -> Result<&[u8], Error> {
    split_checksum(buffer).map(|(payload, _)| payload)
}

fn split_checksum(buffer: &[u8]) -> Result<(&[u8], [u8; CHECKSUM_LEN]), Error> {
    if buffer.len() < CHECKSUM_LEN {
        return Err(Error::NoChecksum);
    }
    let (payload, tail) = buffer.split_at(buffer.len() - CHECKSUM_LEN);
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(tail);
    Ok((payload, checksum))
}

#[derive(Copy, Clone, Debug)]
pub struct Decoder<'a> {
    decoder: base58::Decoder<'a>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self {
            decoder: base58::Decoder::new(alphabet),
        }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let len = self.decoder.decode_into(input, output)?;
        verify_checksum(&output.as_mut()[..len])?;
        Ok(len - CHECKSUM_LEN)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut output = self.decoder.decode(input)?;
        verify_checksum(&output)?;
        output.truncate(output.len() - CHECKSUM_LEN);
        Ok(output)
    }

    pub fn try_decode(&self, input: impl AsRef<[u8]>, output: &mut Vec<u8>) -> bool {
        match self.decode(input) {
            Ok(decoded) => {
                *output = decoded;
                true
            }
            Err(_) => {
                output.clear();
                false
            }
        }
    }

    /// Splits the leading version byte from the verified payload.
    pub fn decode_versioned(&self, input: impl AsRef<[u8]>) -> Result<(u8, Vec<u8>), Error> {
        let mut payload = self.decode(input)?;
        if payload.is_empty() {
            return Err(Error::NoVersion);
        }
        let version = payload.remove(0);
        Ok((version, payload))
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn try_decode(input: impl AsRef<[u8]>, output: &mut Vec<u8>) -> bool {
    Decoder::default().try_decode(input, output)
}

pub fn decode_versioned(input: impl AsRef<[u8]>) -> Result<(u8, Vec<u8>), Error> {
    Decoder::default().decode_versioned(input)
}
