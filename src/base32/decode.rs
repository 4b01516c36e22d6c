use super::{Format, RFC4648};
pub use crate::base_binary::decode::Error;

#[derive(Copy, Clone, Debug)]
pub struct Decoder<'a> {
    decoder: crate::base_binary::Decoder<'a, 32>,
}

impl<'a> Decoder<'a> {
    pub const fn new(format: Format<'a, 32>) -> Self {
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

const DECODER: Decoder = Decoder::new(RFC4648);

pub fn decode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}

pub fn decode(input: impl AsRef<[u8]>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn try_decode(input: impl AsRef<[u8]>, output: &mut Vec<u8>) -> bool {
    Decoder::default().try_decode(input, output)
}

#[cfg(test)]
mod tests {
    use super::{Decoder, Error};
    use crate::base32::{BASE32HEX, RFC4648, Z_BASE_32};

    #[test]
    fn decode() {
        assert_eq!(super::decode(""), Ok(vec![]));
        assert_eq!(super::decode("MY======"), Ok(b"f".to_vec()));
        assert_eq!(super::decode("MZXQ===="), Ok(b"fo".to_vec()));
        assert_eq!(super::decode("MZXW6==="), Ok(b"foo".to_vec()));
        assert_eq!(super::decode("MZXW6YQ="), Ok(b"foob".to_vec()));
        assert_eq!(super::decode("MZXW6YTB"), Ok(b"fooba".to_vec()));
        assert_eq!(super::decode("MZXW6YTBOI======"), Ok(b"foobar".to_vec()));
        assert_eq!(super::decode("74ABA==="), Ok(vec![0xff, 0x00, 0x10]));
    }

    #[test]
    fn decode_hex() {
        let decoder = Decoder::new(BASE32HEX);
        assert_eq!(decoder.decode("CPNMUOJ1E8======"), Ok(b"foobar".to_vec()));
    }

    #[test]
    fn decode_errors() {
        assert_eq!(super::decode("MZXW6"), Err(Error::InvalidLength { length: 5, block: 8 }));
        assert_eq!(super::decode("M======="), Err(Error::TooShort { symbols: 1 }));
        assert_eq!(
            super::decode("MZXW6YT1"),
            Err(Error::InvalidCharacter { character: '1', index: 7 })
        );
        assert_eq!(
            super::decode("mzxw6ytb"),
            Err(Error::InvalidCharacter { character: 'm', index: 0 })
        );
    }

    #[test]
    fn decode_unpadded() {
        let decoder = Decoder::new(RFC4648.unpadded());
        assert_eq!(decoder.decode("MZXW6"), Ok(b"foo".to_vec()));
        assert_eq!(decoder.decode("MZXW6YTBOI"), Ok(b"foobar".to_vec()));
        assert_eq!(decoder.decode("M"), Err(Error::TooShort { symbols: 1 }));
        assert_eq!(decoder.decode("MZXW6==="), Err(Error::InvalidCharacter { character: '=', index: 5 }));
        assert_eq!(Decoder::new(Z_BASE_32).decode("ca"), Ok(b"f".to_vec()));
    }

    #[test]
    fn try_decode() {
        let mut output = Vec::new();
        assert!(super::try_decode("MZXW6===", &mut output));
        assert_eq!(output, b"foo".to_vec());
        assert!(!super::try_decode("MZXW6", &mut output));
        assert!(output.is_empty());
    }
}
