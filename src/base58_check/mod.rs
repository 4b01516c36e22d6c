mod checksum;
pub mod decode;
pub mod encode;

pub use crate::base58::{Alphabet, ALPHABET};
pub use checksum::{add_checksum, compute_checksum, CHECKSUM_LEN};
pub use decode::{decode, decode_into, decode_versioned, remove_checksum, try_decode, verify_checksum, Decoder};
pub use encode::{encode, encode_into, encode_versioned, try_encode, Encoder};

pub fn encode_with_checksum(input: impl AsRef<[u8]>) -> String {
    encode(input)
}

/// Decodes, verifies and strips the checksum, stopping at the first stage that fails.
pub fn parse_with_checksum(input: impl AsRef<[u8]>) -> Result<Vec<u8>, decode::Error> {
    decode(input)
}

pub fn try_parse_with_checksum(input: impl AsRef<[u8]>, output: &mut Vec<u8>) -> bool {
    try_decode(input, output)
}

#[cfg(test)]
mod tests {
    #[test]
    fn parse_with_checksum() {
        let text = super::encode_with_checksum([0x00, 0x00, 0xab]);
        assert!(text.starts_with("11"));
        assert_eq!(super::parse_with_checksum(&text), Ok(vec![0x00, 0x00, 0xab]));
        let mut output = Vec::new();
        assert!(super::try_parse_with_checksum(&text, &mut output));
        assert_eq!(output, vec![0x00, 0x00, 0xab]);
        assert!(!super::try_parse_with_checksum("3vQB7B6MrGQZaxCuFg4oi", &mut output));
        assert!(output.is_empty());
    }
}
