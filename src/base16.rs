use crate::base_common::{alphabet, const_alphabet, Alphabet};
use serde::{Deserialize, Serialize};
use std::{error, fmt, str::FromStr};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidCharacter { character: char, index: usize },
    NonAsciiCharacter { character: u8, index: usize },
    OddLength,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
            Error::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Error::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
            Error::OddLength => write!(f, "Odd number of digits"),
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

pub const UPPERCASE: Alphabet<16> = const_alphabet!(b"0123456789ABCDEF");
pub const LOWERCASE: Alphabet<16> = const_alphabet!(b"0123456789abcdef");
/// Encodes uppercase, decodes either case.
pub const INVARIANT: Alphabet<16> = UPPERCASE.case_insensitive();
/// Yubico keyboard-layout-independent hex.
pub const MODHEX: Alphabet<16> = const_alphabet!(b"cbdefghijklnrtuv");

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Uppercase,
    Lowercase,
    Invariant,
    ModHex,
}

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::Uppercase, Variant::Lowercase, Variant::Invariant, Variant::ModHex];

    pub const fn alphabet(self) -> &'static Alphabet<16> {
        match self {
            Variant::Uppercase => &UPPERCASE,
            Variant::Lowercase => &LOWERCASE,
            Variant::Invariant => &INVARIANT,
            Variant::ModHex => &MODHEX,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Uppercase => "uppercase",
            Variant::Lowercase => "lowercase",
            Variant::Invariant => "invariant",
            Variant::ModHex => "mod-hex",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Variant {
    type Err = crate::Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| crate::Error::unsupported_format("base16", name))
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Encoder<'a> {
    alphabet: &'a Alphabet<16>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<16>) -> Self {
        Self { alphabet }
    }

    pub fn encoded_len(&self, len: usize) -> usize {
        len * 2
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let len = self.encoded_len(input.len());
        if output.len() < len {
            return Err(Error::BufferTooSmall);
        }
        for (pair, byte) in output.chunks_exact_mut(2).zip(input) {
            pair[0] = self.alphabet.encode((byte >> 4) as usize);
            pair[1] = self.alphabet.encode((byte & 0x0F) as usize);
        }
        Ok(len)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = Vec::with_capacity(self.encoded_len(input.len()));
        for byte in input {
            output.push(self.alphabet.encode((byte >> 4) as usize));
            output.push(self.alphabet.encode((byte & 0x0F) as usize));
        }
        // Alphabet symbols are ascii.
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn try_encode(&self, input: impl AsRef<[u8]>, output: &mut String) -> bool {
        *output = self.encode(input);
        true
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Decoder<'a> {
    alphabet: &'a Alphabet<16>,
}

impl<'a> Decoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<16>) -> Self {
        Self { alphabet }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        if input.len() % 2 != 0 {
            return Err(Error::OddLength);
        }
        let len = input.len() / 2;
        if output.len() < len {
            return Err(Error::BufferTooSmall);
        }
        for (i, pair) in input.chunks_exact(2).enumerate() {
            output[i] = self.alphabet.decode(pair[0], 2 * i)? << 4 | self.alphabet.decode(pair[1], 2 * i + 1)?;
        }
        Ok(len)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let mut output = vec![0u8; input.len() / 2];
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

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const ENCODER: Encoder = Encoder::new(&UPPERCASE);
const DECODER: Decoder = Decoder::new(&UPPERCASE);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn try_encode(input: impl AsRef<[u8]>, output: &mut String) -> bool {
    Encoder::default().try_encode(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn try_decode(input: impl AsRef<[u8]>, output: &mut Vec<u8>) -> bool {
    Decoder::default().try_decode(input, output)
}
