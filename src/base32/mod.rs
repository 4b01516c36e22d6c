pub mod decode;
pub mod encode;

pub use crate::base_common::{Alphabet, Format};
pub use decode::{decode, decode_into, try_decode, Decoder};
pub use encode::{encode, encode_into, try_encode, Encoder};

use crate::{base_common::const_alphabet, Error};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const RFC4648_ALPHABET: Alphabet<32> = const_alphabet!(b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567");
pub const BASE32HEX_ALPHABET: Alphabet<32> = const_alphabet!(b"0123456789ABCDEFGHIJKLMNOPQRSTUV");
pub const Z_BASE_32_ALPHABET: Alphabet<32> = const_alphabet!(b"ybndrfg8ejkmcpqxot1uwisza345h769");
pub const GEOHASH_ALPHABET: Alphabet<32> = const_alphabet!(b"0123456789bcdefghjkmnpqrstuvwxyz");
pub const CROCKFORD_ALPHABET: Alphabet<32> = crockford();
pub const BECH32_ALPHABET: Alphabet<32> = const_alphabet!(b"qpzry9x8gf2tvdw0s3jn54khce6mua7l");
pub const FILECOIN_ALPHABET: Alphabet<32> = const_alphabet!(b"abcdefghijklmnopqrstuvwxyz234567");

/// Crockford decoding ignores case and reads `O` as `0`, `I` and `L` as `1`.
const fn crockford() -> Alphabet<32> {
    const ALIASES: [(u8, u8); 6] = [(b'O', b'0'), (b'o', b'0'), (b'I', b'1'), (b'i', b'1'), (b'L', b'1'), (b'l', b'1')];
    let mut alphabet = const_alphabet!(b"0123456789ABCDEFGHJKMNPQRSTVWXYZ").case_insensitive();
    let mut index = 0;
    while index < ALIASES.len() {
        alphabet = match alphabet.with_alias(ALIASES[index].0, ALIASES[index].1) {
            Ok(alphabet) => alphabet,
            Err(_) => panic!("Could not build alphabet"),
        };
        index += 1;
    }
    alphabet
}

pub const RFC4648: Format<'static, 32> = Format::new(&RFC4648_ALPHABET).padded();
pub const BASE32HEX: Format<'static, 32> = Format::new(&BASE32HEX_ALPHABET).padded();
pub const Z_BASE_32: Format<'static, 32> = Format::new(&Z_BASE_32_ALPHABET);
pub const GEOHASH: Format<'static, 32> = Format::new(&GEOHASH_ALPHABET);
pub const CROCKFORD: Format<'static, 32> = Format::new(&CROCKFORD_ALPHABET);
pub const BECH32: Format<'static, 32> = Format::new(&BECH32_ALPHABET);
pub const FILECOIN: Format<'static, 32> = Format::new(&FILECOIN_ALPHABET);

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Variant {
    #[default]
    #[serde(rename = "rfc4648")]
    Rfc4648,
    #[serde(rename = "base32hex")]
    Base32Hex,
    #[serde(rename = "z-base-32")]
    ZBase32,
    #[serde(rename = "geohash")]
    GeoHash,
    #[serde(rename = "crockford")]
    Crockford,
    #[serde(rename = "bech32")]
    Bech32,
    #[serde(rename = "filecoin")]
    FileCoin,
}

impl Variant {
    pub const ALL: [Variant; 7] = [
        Variant::Rfc4648,
        Variant::Base32Hex,
        Variant::ZBase32,
        Variant::GeoHash,
        Variant::Crockford,
        Variant::Bech32,
        Variant::FileCoin,
    ];

    pub const fn format(self) -> Format<'static, 32> {
        match self {
            Variant::Rfc4648 => RFC4648,
            Variant::Base32Hex => BASE32HEX,
            Variant::ZBase32 => Z_BASE_32,
            Variant::GeoHash => GEOHASH,
            Variant::Crockford => CROCKFORD,
            Variant::Bech32 => BECH32,
            Variant::FileCoin => FILECOIN,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Rfc4648 => "rfc4648",
            Variant::Base32Hex => "base32hex",
            Variant::ZBase32 => "z-base-32",
            Variant::GeoHash => "geohash",
            Variant::Crockford => "crockford",
            Variant::Bech32 => "bech32",
            Variant::FileCoin => "filecoin",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| Error::unsupported_format("base32", name))
    }
}
