pub mod decode;
pub mod encode;

pub use crate::base_common::{Alphabet, Format};
pub use decode::Decoder;
pub use encode::Encoder;

const fn bits_per_symbol(symbols: usize) -> usize {
    assert!(symbols.is_power_of_two() && symbols > 1 && symbols <= 256);
    symbols.trailing_zeros() as usize
}

/// Number of symbols in a padded block: the smallest symbol count covering a whole number of bytes.
const fn block_len(bits: usize) -> usize {
    let mut len = 1;
    while (len * bits) % 8 != 0 {
        len += 1;
    }
    len
}
