use super::{add_checksum, Alphabet, ALPHABET};
use crate::base58::{self, encode::Error};

#[derive(Copy, Clone, Debug)]
pub struct Encoder<'a> {
    encoder: base58::Encoder<'a>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self {
            encoder: base58::Encoder::new(alphabet),
        }
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode(add_checksum(input))
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encoder.encode_into(add_checksum(input), output)
    }

    pub fn try_encode(&self, input: impl AsRef<[u8]>, output: &mut String) -> bool {
        self.encoder.try_encode(add_checksum(input), output)
    }

    /// Prefixes the payload with `version` before adding the checksum.
    pub fn encode_versioned(&self, version: u8, payload: impl AsRef<[u8]>) -> String {
        let payload = payload.as_ref();
        let mut input = Vec::with_capacity(payload.len() + 1);
        input.push(version);
        input.extend_from_slice(payload);
        self.encode(input)
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn try_encode(input: impl AsRef<[u8]>, output: &mut String) -> bool {
    Encoder::default().try_encode(input, output)
}

pub fn encode_versioned(version: u8, payload: impl AsRef<[u8]>) -> String {
    Encoder::default().encode_versioned(version, payload)
}
