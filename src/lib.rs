//! Base-16, base-32, base-58 (with optional double-SHA-256 checksum) and base-64
//! codecs over configurable alphabets.
//!
//! Every codec exposes `encode`/`decode` returning `Result`, `try_encode`/`try_decode`
//! returning a success flag, and `Encoder`/`Decoder` values built from an explicit
//! alphabet or format for non-default variants.

pub mod base16;
pub mod base32;
pub mod base58;
pub mod base58_check;
pub mod base64;
pub mod base_binary;
pub mod base_common;
pub mod error;

pub use self::error::{Error, ErrorKind};
