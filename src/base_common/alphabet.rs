use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    NonAsciiCharacter { character: u8, index: usize },
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character '{}' at index {}", character, index),
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#02x} at index {}", character, index),
        }
    }
}

/// Ordered set of ASCII symbols; the position of a symbol is its digit value.
///
/// The decode table may hold more entries than `N` when read aliases have been
/// registered (other-case spellings, Crockford's look-alike letters), but
/// encoding always emits the canonical symbols.
#[derive(Clone, Debug)]
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 128],
}

impl<const N: usize> Alphabet<N> {
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    pub fn decode(&self, value: u8, index: usize) -> Result<u8, DecodeError> {
        if value >= 128 {
            return Err(DecodeError::NonAsciiCharacter { index, character: value });
        }
        match self.decode[value as usize] {
            Some(value) => Ok(value),
            None => Err(DecodeError::InvalidCharacter {
                character: value as char,
                index,
            }),
        }
    }

    pub fn index_of(&self, character: char) -> Option<usize> {
        if !character.is_ascii() {
            return None;
        }
        self.decode[character as usize].map(usize::from)
    }

    pub const fn contains(&self, value: u8) -> bool {
        value < 128 && self.decode[value as usize].is_some()
    }

    pub const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 128] = [None; 128];

        let mut index = 0;
        while index < encode.len() {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(v) = decode[characters[index] as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: v as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Accepts the other-case spelling of every letter when decoding.
    pub const fn case_insensitive(mut self) -> Self {
        let mut index = 0;
        while index < N {
            let character = self.encode[index];
            if character.is_ascii_alphabetic() {
                let other = character ^ 0x20;
                if self.decode[other as usize].is_none() {
                    self.decode[other as usize] = Some(index as u8);
                }
            }
            index += 1;
        }
        self
    }

    /// Decodes `alias` as if it were `symbol`.
    pub const fn with_alias(mut self, alias: u8, symbol: u8) -> Result<Self, Error> {
        if alias >= 128 {
            return Err(Error::NonAsciiCharacter { character: alias, index: N });
        }
        if symbol >= 128 {
            return Err(Error::NonAsciiCharacter { character: symbol, index: N });
        }
        if let Some(first) = self.decode[alias as usize] {
            return Err(Error::DuplicateCharacter {
                character: alias as char,
                first: first as usize,
                second: N,
            });
        }
        match self.decode[symbol as usize] {
            Some(value) => {
                self.decode[alias as usize] = Some(value);
                Ok(self)
            }
            None => Err(Error::InvalidCharacter {
                character: symbol as char,
                index: N,
            }),
        }
    }

    pub const fn symbols(&self) -> &[u8; N] {
        &self.encode
    }

    pub const fn len(&self) -> usize {
        self.encode.len()
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};

    #[test]
    fn new() {
        assert!(Alphabet::new(b"0123456789abcdef").is_ok());
        assert_eq!(
            Alphabet::new(b"abca").err(),
            Some(Error::DuplicateCharacter {
                character: 'a',
                first: 0,
                second: 3
            })
        );
        assert_eq!(
            Alphabet::new(&[b'a', 0xe9]).err(),
            Some(Error::NonAsciiCharacter { character: 0xe9, index: 1 })
        );
    }

    #[test]
    fn lookup() {
        let alphabet = match Alphabet::new(b"XYZ") {
            Ok(alphabet) => alphabet,
            Err(error) => panic!("{}", error),
        };
        assert_eq!(alphabet.encode(2), b'Z');
        assert_eq!(alphabet.decode(b'Y', 0), Ok(1));
        assert_eq!(alphabet.index_of('X'), Some(0));
        assert_eq!(alphabet.index_of('x'), None);
        assert_eq!(alphabet.index_of('é'), None);
        assert_eq!(
            alphabet.decode(b'x', 4),
            Err(DecodeError::InvalidCharacter { character: 'x', index: 4 })
        );
        assert_eq!(
            alphabet.decode(0xff, 5),
            Err(DecodeError::NonAsciiCharacter { character: 0xff, index: 5 })
        );
    }

    #[test]
    fn case_insensitive() {
        let alphabet = match Alphabet::new(b"AB1") {
            Ok(alphabet) => alphabet.case_insensitive(),
            Err(error) => panic!("{}", error),
        };
        assert_eq!(alphabet.decode(b'a', 0), Ok(0));
        assert_eq!(alphabet.decode(b'B', 0), Ok(1));
        assert_eq!(alphabet.encode(1), b'B');
        assert_eq!(alphabet.len(), 3);
    }

    #[test]
    fn with_alias() {
        let alphabet = match Alphabet::new(b"01") {
            Ok(alphabet) => alphabet,
            Err(error) => panic!("{}", error),
        };
        let alphabet = match alphabet.with_alias(b'O', b'0') {
            Ok(alphabet) => alphabet,
            Err(error) => panic!("{}", error),
        };
        assert_eq!(alphabet.decode(b'O', 0), Ok(0));
        assert!(matches!(alphabet.clone().with_alias(b'O', b'1'), Err(Error::DuplicateCharacter { .. })));
        assert!(matches!(alphabet.with_alias(b'I', b'2'), Err(Error::InvalidCharacter { .. })));
    }
}
