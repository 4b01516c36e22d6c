pub mod decode;
pub mod encode;

pub use crate::base_common::Alphabet;
pub use decode::{decode, decode_into, try_decode, Decoder};
pub use encode::{encode, encode_into, try_encode, Encoder};

use crate::{base_common::const_alphabet, Error};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const ALPHABET: Alphabet<58> = const_alphabet!(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");
pub const RIPPLE_ALPHABET: Alphabet<58> = const_alphabet!(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");
pub const FLICKR_ALPHABET: Alphabet<58> = const_alphabet!(b"123456789abcdefghijkmnopqrstuvwxyzABCDEFGHJKLMNPQRSTUVWXYZ");

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Bitcoin,
    Ripple,
    Flickr,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Bitcoin, Variant::Ripple, Variant::Flickr];

    pub const fn alphabet(self) -> &'static Alphabet<58> {
        match self {
            Variant::Bitcoin => &ALPHABET,
            Variant::Ripple => &RIPPLE_ALPHABET,
            Variant::Flickr => &FLICKR_ALPHABET,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Bitcoin => "bitcoin",
            Variant::Ripple => "ripple",
            Variant::Flickr => "flickr",
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
            .ok_or_else(|| Error::unsupported_format("base58", name))
    }
}
