use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An index lies past the end of a collection or lookup table.
    OutOfBounds,
    /// A bit position can't be represented as the requested element.
    UnexpectedValue,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfBounds => write!(f, "index out of bounds"),
            Error::UnexpectedValue => write!(f, "position not representable as element"),
        }
    }
}

impl std::error::Error for Error {}
