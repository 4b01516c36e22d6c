pub mod decode;
pub mod encode;

pub use crate::base_common::{Alphabet, Format};
pub use decode::{decode, decode_into, try_decode, Decoder};
pub use encode::{encode, encode_into, try_encode, Encoder};

use crate::{base_common::const_alphabet, Error};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

pub const ALPHABET: Alphabet<64> = const_alphabet!(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/");
pub const URL_SAFE_ALPHABET: Alphabet<64> = const_alphabet!(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_");

pub const STANDARD: Format<'static, 64> = Format::new(&ALPHABET).padded();
pub const URL_SAFE: Format<'static, 64> = Format::new(&URL_SAFE_ALPHABET).padded();

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Standard,
    UrlSafe,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Standard, Variant::UrlSafe];

    pub const fn format(self) -> Format<'static, 64> {
        match self {
            Variant::Standard => STANDARD,
            Variant::UrlSafe => URL_SAFE,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Standard => "standard",
            Variant::UrlSafe => "url-safe",
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
            .ok_or_else(|| Error::unsupported_format("base64", name))
    }
}
