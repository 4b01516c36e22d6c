use super::{bits_per_symbol, block_len, Format};
use crate::base_common::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
    InvalidLength { length: usize, block: usize },
    TooShort { symbols: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Self::InvalidLength { length, block } => {
                write!(f, "Invalid padded length {} (expected a multiple of {})", length, block)
            }
            Self::TooShort { symbols } => write!(f, "Not enough symbols ({}) to decode a single byte", symbols),
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
pub struct Decoder<'a, const N: usize> {
    format: Format<'a, N>,
    bits: usize,
}

impl<'a, const N: usize> Decoder<'a, N> {
    pub const fn new(format: Format<'a, N>) -> Self {
        Self {
            format,
            bits: bits_per_symbol(N),
        }
    }

    pub const fn format(&self) -> Format<'a, N> {
        self.format
    }

    /// Validates the padding and returns the symbols without their trailing pad characters.
    fn strip_padding<'b>(&self, input: &'b [u8]) -> Result<&'b [u8], Error> {
        let block = block_len(self.bits);
        if self.format.is_padded() && input.len() % block != 0 {
            return Err(Error::InvalidLength {
                length: input.len(),
                block,
            });
        }
        let mut symbols = input;
        if self.format.is_padded() {
            let pad = self.format.pad();
            while let [rest @ .., last] = symbols {
                if *last != pad {
                    break;
                }
                symbols = rest;
            }
        }
        if !input.is_empty() && symbols.len() * self.bits < 8 {
            return Err(Error::TooShort { symbols: symbols.len() });
        }
        Ok(symbols)
    }

    pub fn decoded_len(&self, symbols: usize) -> usize {
        (symbols * self.bits) / 8
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let symbols = self.strip_padding(input.as_ref())?;
        let output = output.as_mut();
        if output.len() < self.decoded_len(symbols.len()) {
            return Err(Error::BufferTooSmall);
        }
        let alphabet = self.format.alphabet();
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut output_index = 0;
        for (input_index, &value) in symbols.iter().enumerate() {
            let digit = alphabet.decode(value, input_index)?;
            accumulator = (accumulator << self.bits) | (digit as usize);
            bits += self.bits;
            if bits >= 8 {
                bits -= 8;
                output[output_index] = (accumulator >> bits) as u8;
                output_index += 1;
                accumulator &= (1 << bits) - 1;
            }
        }
        // Leftover bits (fewer than 8) are the encoder's zero fill.
        Ok(output_index)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; self.decoded_len(input.len())];
        let len = self.decode_into(input, &mut output)?;
        output.truncate(len);
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
}

#[cfg(test)]
mod tests {
    use super::{Decoder, Error};
    use crate::base_common::{const_alphabet, Alphabet, Format};

    const OCTAL: Alphabet<8> = const_alphabet!(b"01234567");

    #[test]
    fn decode() {
        let decoder = Decoder::new(Format::new(&OCTAL));
        assert_eq!(decoder.decode("516"), Ok(vec![0b1010_0111]));
        assert_eq!(decoder.decode("516="), Err(Error::InvalidCharacter { character: '=', index: 3 }));
        assert_eq!(decoder.decode(""), Ok(vec![]));
        assert_eq!(decoder.decode("5"), Err(Error::TooShort { symbols: 1 }));
        assert_eq!(decoder.decode("518"), Err(Error::InvalidCharacter { character: '8', index: 2 }));
    }

    #[test]
    fn decode_padded() {
        let decoder = Decoder::new(Format::new(&OCTAL).padded());
        assert_eq!(decoder.decode("516====="), Ok(vec![0b1010_0111]));
        assert_eq!(decoder.decode("516"), Err(Error::InvalidLength { length: 3, block: 8 }));
        assert_eq!(decoder.decode("========"), Err(Error::TooShort { symbols: 0 }));
        assert_eq!(
            decoder.decode("51=6===="),
            Err(Error::InvalidCharacter { character: '=', index: 2 })
        );
    }

    #[test]
    fn decode_into() {
        let decoder = Decoder::new(Format::new(&OCTAL));
        let mut output = [0u8; 0];
        assert_eq!(decoder.decode_into("516", &mut output), Err(Error::BufferTooSmall));
        let mut output = [0u8; 1];
        assert_eq!(decoder.decode_into("516", &mut output), Ok(1));
    }

    #[test]
    fn try_decode() {
        let decoder = Decoder::new(Format::new(&OCTAL));
        let mut output = vec![1, 2, 3];
        assert!(!decoder.try_decode("9", &mut output));
        assert!(output.is_empty());
        assert!(decoder.try_decode("516", &mut output));
        assert_eq!(output, vec![0b1010_0111]);
    }
}
