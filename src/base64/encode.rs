use super::{Format, STANDARD};
pub use crate::base_binary::encode::Error;

#[derive(Copy, Clone, Debug)]
pub struct Encoder<'a> {
    encoder: crate::base_binary::Encoder<'a, 64>,
}

impl<'a> Encoder<'a> {
    pub const fn new(format: Format<'a, 64>) -> Self {
        Self {
            encoder: crate::base_binary::Encoder::new(format),
        }
    }

    pub fn encoded_len(&self, len: usize) -> usize {
        self.encoder.encoded_len(len)
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        self.encoder.encode_into(input, output)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        self.encoder.encode(input)
    }

    pub fn try_encode(&self, input: impl AsRef<[u8]>, output: &mut String) -> bool {
        self.encoder.try_encode(input, output)
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(STANDARD);

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn try_encode(input: impl AsRef<[u8]>, output: &mut String) -> bool {
    Encoder::default().try_encode(input, output)
}
