//! 错误类型定义

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid character '{0}' in pairing code")]
    InvalidChar(char),

    #[error("Pairing code must be at least {min} characters, got {got}")]
    InvalidLength { min: usize, got: usize },

    #[error("Pairing code check character mismatch: expected '{expected}', got '{got}'")]
    ChecksumMismatch { expected: char, got: char },

    #[error("Pairing code must be at most {max} characters, got {got}")]
    LengthTooLong { max: usize, got: usize },

    #[error("Value {value} does not fit in a pairing code of length {length}")]
    ValueOutOfRange { value: u64, length: usize },

    #[error("Pairing code {0} encodes a value wider than 64 bits")]
    IntegerOverflow(String),
}

pub type Result<T> = std::result::Result<T, Error>;
