use super::Alphabet;

pub const PAD: u8 = b'=';

/// An alphabet together with its padding policy.
#[derive(Copy, Clone, Debug)]
pub struct Format<'a, const N: usize> {
    alphabet: &'a Alphabet<N>,
    pad: u8,
    padded: bool,
}

impl<'a, const N: usize> Format<'a, N> {
    pub const fn new(alphabet: &'a Alphabet<N>) -> Self {
        Self {
            alphabet,
            pad: PAD,
            padded: false,
        }
    }

    pub const fn padded(self) -> Self {
        assert!(!self.alphabet.contains(self.pad), "Pad character is part of the alphabet");
        Self { padded: true, ..self }
    }

    pub const fn unpadded(self) -> Self {
        Self { padded: false, ..self }
    }

    pub const fn with_padding(self, padded: bool) -> Self {
        Self { padded, ..self }
    }

    pub const fn alphabet(&self) -> &'a Alphabet<N> {
        self.alphabet
    }

    pub const fn pad(&self) -> u8 {
        self.pad
    }

    pub const fn is_padded(&self) -> bool {
        self.padded
    }
}
