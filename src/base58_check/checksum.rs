use sha2::{
    digest::{consts::U32, generic_array::GenericArray},
    Digest, Sha256,
};

pub const CHECKSUM_LEN: usize = 4;

fn sha256(buffer: impl AsRef<[u8]>) -> GenericArray<u8, U32> {
    let mut hasher = Sha256::new();
    hasher.update(buffer);
    hasher.finalize()
}

/// First four bytes of `sha256(sha256(buffer))`.
pub fn compute_checksum(buffer: impl AsRef<[u8]>) -> [u8; CHECKSUM_LEN] {
    let hash = sha256(sha256(buffer));
    let mut checksum = [0u8; CHECKSUM_LEN];
    checksum.copy_from_slice(&hash[..CHECKSUM_LEN]);
    checksum
}

pub fn add_checksum(buffer: impl AsRef<[u8]>) -> Vec<u8> {
    let mut buffer = buffer.as_ref().to_vec();
    let checksum = compute_checksum(&buffer);
    buffer.extend_from_slice(&checksum);
    buffer
}

#[cfg(test)]
mod tests {
    #[test]
    fn compute_checksum() {
        assert_eq!(super::compute_checksum(b"hello world"), [0xbc, 0x62, 0xd4, 0xb8]);
        assert_eq!(super::compute_checksum(b""), [0x5d, 0xf6, 0xe0, 0xe2]);
    }

    #[test]
    fn add_checksum() {
        let buffer = super::add_checksum(b"hello world");
        assert_eq!(buffer.len(), 15);
        assert_eq!(&buffer[..11], b"hello world");
        assert_eq!(&buffer[11..], &[0xbc, 0x62, 0xd4, 0xb8]);
    }
}
