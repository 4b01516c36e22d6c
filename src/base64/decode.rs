use super::{Format, STANDARD};
pub use crate::base_binary::decode::Error;

#[derive(Copy, Clone, Debug)]
pub struct Decoder<'a> {
    decoder: crate::base_binary::Decoder<'a, 64>,
}

impl<'a> Decoder<'a> {
    pub const fn new(format: Format<'a, 64>) -> Self {
        Self {
            decoder: crate::base_binary::Decoder::new(format),
        }
    }

    pub fn decode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.decoder.decode_into(input, output)
    }

    pub fn decode(&self, input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
        self.decoder.decode(input)
    }

    pub fn try_decode(&self, input: impl AsRef<[u8]>, output: &mut Vec<u8>) -> bool {
        self.decoder.try_decode(input, output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(STANDARD);

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn try_decode(input: impl AsRef<[u8]>, output: &mut Vec<u8>) -> bool {
    Decoder::default().try_decode(input, output)
}
