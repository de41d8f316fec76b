use std::fmt;

/// PEC calculation errors
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The requested length runs past the end of the buffer
    LengthExceedsBuffer { length: usize, available: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthExceedsBuffer { length, available } => {
                write!(f, "length {length} exceeds buffer of {available} bytes")
            }
        }
    }
}

impl std::error::Error for Error {}
