use super::{bits_per_symbol, block_len, Format};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// Regroups the input bit stream into `log2(N)`-bit symbols, most significant bit first.
#[derive(Copy, Clone, Debug)]
pub struct Encoder<'a, const N: usize> {
    format: Format<'a, N>,
    bits: usize,
}

impl<'a, const N: usize> Encoder<'a, N> {
    pub const fn new(format: Format<'a, N>) -> Self {
        Self {
            format,
            bits: bits_per_symbol(N),
        }
    }

    pub const fn format(&self) -> Format<'a, N> {
        self.format
    }

    pub fn encoded_len(&self, len: usize) -> usize {
        let symbols = (len * 8).div_ceil(self.bits);
        if self.format.is_padded() {
            symbols.next_multiple_of(block_len(self.bits))
        } else {
            symbols
        }
    }

    fn symbols(&self, input: &[u8], mut emit: impl FnMut(u8)) {
        let alphabet = self.format.alphabet();
        let mut accumulator: usize = 0;
        let mut bits: usize = 0;
        let mut count = 0;
        for &value in input {
            accumulator = (accumulator << 8) | (value as usize);
            bits += 8;
            while bits >= self.bits {
                bits -= self.bits;
                emit(alphabet.encode(accumulator >> bits));
                count += 1;
                accumulator &= (1 << bits) - 1;
            }
        }
        if bits > 0 {
            emit(alphabet.encode(accumulator << (self.bits - bits)));
            count += 1;
        }
        if self.format.is_padded() {
            while (count * self.bits) % 8 != 0 {
                emit(self.format.pad());
                count += 1;
            }
        }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let len = self.encoded_len(input.len());
        if output.len() < len {
            return Err(Error::BufferTooSmall);
        }
        let mut index = 0;
        self.symbols(input, |symbol| {
            output[index] = symbol;
            index += 1;
        });
        Ok(index)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = Vec::with_capacity(self.encoded_len(input.len()));
        self.symbols(input, |symbol| output.push(symbol));
        // Alphabet and pad symbols are ascii.
        unsafe { String::from_utf8_unchecked(output) }
    }

    pub fn try_encode(&self, input: impl AsRef<[u8]>, output: &mut String) -> bool {
        *output = self.encode(input);
        true
    }
}
