use super::{Format, RFC4648};
pub use crate::base_binary::encode::Error;

#[derive(Copy, Clone, Debug)]
pub struct Encoder<'a> {
    encoder: crate::base_binary::Encoder<'a, 32>,
}

impl<'a> Encoder<'a> {
    pub const fn new(format: Format<'a, 32>) -> Self {
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

const ENCODER: Encoder = Encoder::new(RFC4648);

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}

pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn try_encode(input: impl AsRef<[u8]>, output: &mut String) -> bool {
    Encoder::default().try_encode(input, output)
}

#[cfg(test)]
mod tests {
    use super::Encoder;
    use crate::base32::{BASE32HEX, RFC4648};

    #[test]
    fn encode() {
        assert_eq!(super::encode(b""), "");
        assert_eq!(super::encode(b"f"), "MY======");
        assert_eq!(super::encode(b"fo"), "MZXQ====");
        assert_eq!(super::encode(b"foo"), "MZXW6===");
        assert_eq!(super::encode(b"foob"), "MZXW6YQ=");
        assert_eq!(super::encode(b"fooba"), "MZXW6YTB");
        assert_eq!(super::encode(b"foobar"), "MZXW6YTBOI======");
        assert_eq!(super::encode(b"Hello, World!"), "JBSWY3DPFQQFO33SNRSCC===");
        assert_eq!(super::encode([0xff, 0x00, 0x10]), "74ABA===");
    }

    #[test]
    fn encode_hex() {
        let encoder = Encoder::new(BASE32HEX);
        assert_eq!(encoder.encode(b"f"), "CO======");
        assert_eq!(encoder.encode(b"fo"), "CPNG====");
        assert_eq!(encoder.encode(b"foo"), "CPNMU===");
        assert_eq!(encoder.encode(b"foob"), "CPNMUOG=");
        assert_eq!(encoder.encode(b"fooba"), "CPNMUOJ1");
        assert_eq!(encoder.encode(b"foobar"), "CPNMUOJ1E8======");
    }

    #[test]
    fn encode_unpadded() {
        let encoder = Encoder::new(RFC4648.unpadded());
        assert_eq!(encoder.encode(b"foobar"), "MZXW6YTBOI");
        assert_eq!(encoder.encoded_len(6), 10);
    }

    #[test]
    fn try_encode() {
        let mut output = String::new();
        assert!(super::try_encode(b"fo", &mut output));
        assert_eq!(output, "MZXQ====");
    }
}
