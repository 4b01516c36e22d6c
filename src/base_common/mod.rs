pub mod alphabet;
pub mod format;

pub use alphabet::Alphabet;
pub use format::Format;

/// Builds an alphabet in a const context, failing compilation on duplicate or non-ascii symbols.
macro_rules! const_alphabet {
    ($characters:expr) => {
        match $crate::base_common::Alphabet::new($characters) {
            Ok(alphabet) => alphabet,
            Err(_) => panic!("Could not build alphabet"),
        }
    };
}

pub(crate) use const_alphabet;
