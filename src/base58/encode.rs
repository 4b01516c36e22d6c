use super::{Alphabet, ALPHABET};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire input.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// Upper bound of the encoded length: log(256) / log(58) < 1.37.
pub fn max_encoded_len(len: usize) -> usize {
    (len / 100).saturating_mul(137).saturating_add((len % 100) * 137 / 100 + 1)
}

#[derive(Copy, Clone, Debug)]
pub struct Encoder<'a> {
    alphabet: &'a Alphabet<58>,
}

impl<'a> Encoder<'a> {
    pub const fn new(alphabet: &'a Alphabet<58>) -> Self {
        Self { alphabet }
    }

    /// Base-58 digits of the big-endian input, least significant first,
    /// followed by one zero digit per leading zero byte.
    fn digits(&self, input: &[u8]) -> Vec<u8> {
        let mut digits = Vec::with_capacity(max_encoded_len(input.len()));
        for &value in input {
            let mut carry = value as usize;
            for digit in &mut digits {
                carry += (*digit as usize) << 8;
                *digit = (carry % 58) as u8;
                carry /= 58;
            }
            while carry > 0 {
                digits.push((carry % 58) as u8);
                carry /= 58;
            }
        }
        for _ in input.iter().take_while(|&&value| value == 0) {
            digits.push(0);
        }
        digits
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let digits = self.digits(input.as_ref());
        let output = output.as_mut();
        if output.len() < digits.len() {
            return Err(Error::BufferTooSmall);
        }
        for (value, &digit) in output.iter_mut().zip(digits.iter().rev()) {
            *value = self.alphabet.encode(digit as usize);
        }
        Ok(digits.len())
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let output = self
            .digits(input.as_ref())
            .iter()
            .rev()
            .map(|&digit| self.alphabet.encode(digit as usize))
            .collect();
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

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn encode() {
        assert_eq!(super::encode([0u8; 0]), "");
        assert_eq!(super::encode([0x00]), "1");
        assert_eq!(super::encode("a"), "2g");
        assert_eq!(super::encode("bbb"), "a3gV");
        assert_eq!(super::encode("ccc"), "aPEr");
        assert_eq!(super::encode("simply a long string"), "2cFupjhnEsSn59qHXstmK2ffpLv2");
        assert_eq!(
            super::encode([
                0x00, 0xeb, 0x15, 0x23, 0x1d, 0xfc, 0xeb, 0x60, 0x92, 0x58, 0x86, 0xb6, 0x7d, 0x06, 0x52, 0x99, 0x92, 0x59, 0x15, 0xae,
                0xb1, 0x72, 0xc0, 0x66, 0x47,
            ]),
            "1NS17iag9jJgTHD1VXjvLCEnZuQ3rJDE9L"
        );
        assert_eq!(super::encode([0x51, 0x6b, 0x6f, 0xcd, 0x0f]), "ABnLTmg");
        assert_eq!(
            super::encode([0xbf, 0x4f, 0x89, 0x00, 0x1e, 0x67, 0x02, 0x74, 0xdd]),
            "3SEo3LWLoPntC"
        );
        assert_eq!(super::encode([0x57, 0x2e, 0x47, 0x94]), "3EFU7m");
        assert_eq!(
            super::encode([0xec, 0xac, 0x89, 0xca, 0xd9, 0x39, 0x23, 0xc0, 0x23, 0x21]),
            "EJDM8drfXA6uyA"
        );
        assert_eq!(super::encode([0x10, 0xc8, 0x51, 0x1e,]), "Rt5zm");
        assert_eq!(
            super::encode([0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,]),
            "1111111111"
        );
    }

    #[test]
    fn leading_zeros() {
        assert_eq!(super::encode([0, 0, 1, 2]), format!("11{}", super::encode([1, 2])));
    }

    #[test]
    fn encode_into() {
        let mut output = [0u8; 4];
        assert_eq!(super::encode_into([0x57, 0x2e, 0x47, 0x94], &mut output), Err(Error::BufferTooSmall));
        let mut output = [0u8; 8];
        assert_eq!(super::encode_into([0x57, 0x2e, 0x47, 0x94], &mut output), Ok(6));
        assert_eq!(&output[..6], b"3EFU7m");
    }

    #[test]
    fn max_encoded_len() {
        for len in [0, 1, 2, 10, 32, 64, 150] {
            assert!(super::encode(vec![0xff; len]).len() <= super::max_encoded_len(len));
        }
        assert_eq!(super::max_encoded_len(250), 343);
        assert_eq!(super::max_encoded_len(usize::MAX), usize::MAX);
    }
}
