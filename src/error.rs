use crate::{ParserError, RopeError, TokenizerError};
use std::fmt::{Display, Formatter};

impl ParserError {
    pub fn new(reason: String, annotation: String) -> Self {
        Self { reason, annotation }
    }
}

impl Display for ParserError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.reason, self.annotation)
    }
}

impl std::error::Error for ParserError {}

impl TokenizerError {
    pub fn new(position: usize) -> Self {
        Self {
            reason: format!("string cannot be further consumed at position {}", position),
            position,
        }
    }
}

impl Display for TokenizerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TokenizerError: {}", self.reason)
    }
}

impl std::error::Error for TokenizerError {}

impl Display for RopeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RopeError::OutOfBounds { position, length } => {
                write!(f, "position {} is out of bounds for length {}", position, length)
            }
            RopeError::TooLong { required, available } => {
                write!(
                    f,
                    "cannot delete {} code points, only {} remain",
                    required, available
                )
            }
            RopeError::Mismatch { expected, found } => {
                write!(f, "expected {:?} at the position, found {:?}", expected, found)
            }
        }
    }
}

impl std::error::Error for RopeError {}
