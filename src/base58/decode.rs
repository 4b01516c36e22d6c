use super::{Alphabet, ALPHABET};
use crate::base_common::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { index: usize, character: u8 },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
            alphabet::DecodeError::NonAsciiCharacter { character, index } => Error::NonAsciiCharacter { character, index },
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Decoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// Big-endian value of the symbols as little-endian bytes, followed by
    /// one zero byte per leading zero symbol.
    fn bytes(&self, input: &[u8]) -> Result<Vec<u8>, Error> {
        let mut bytes = Vec::with_capacity(input.len());
        for (index, &symbol) in input.iter().enumerate() {
            let mut carry = self.alphabet.decode(symbol, index)? as usize;
            for byte in &mut bytes {
                carry += (*byte as usize) * 58;
                *byte = carry as u8;
                carry >>= 8;
            }
            while carry > 0 {
                bytes.push(carry as u8);
                carry >>= 8;
            }
        }
        let zero = self.alphabet.encode(0);
        for _ in input.iter().take_while(|&&symbol| symbol == zero) {
            bytes.push(0);
        }
        Ok(bytes)
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let bytes = self.bytes(input.as_ref())?;
        let output = output.as_mut();
        if output.len() < bytes.len() {
            return Err(Error::BufferTooSmall);
        }
        for (value, &byte) in output.iter_mut().zip(bytes.iter().rev()) {
            *value = byte;
        }
        Ok(bytes.len())
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let mut bytes = self.bytes(input.as_ref())?;
        bytes.reverse();
        Ok(bytes)
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
