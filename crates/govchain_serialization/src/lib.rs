use core::fmt;
use std::error::Error;

use govchain_error::ChainError;

mod primitives;
mod address;

mod varint;
pub use varint::VarUint32;

/// Error that can be returned when reading bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// Not enough bytes left in the buffer.
    NotEnoughBytes,
    /// The bytes do not describe a valid value.
    ParseError,
    /// A variable-length integer does not fit its target type.
    Overflow,
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::NotEnoughBytes => write!(f, "not enough bytes"),
            ReadError::ParseError => write!(f, "parse error"),
            ReadError::Overflow => write!(f, "varint overflow"),
        }
    }
}

impl Error for ReadError {}

/// Error that can be returned when writing bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteError {
    /// Not enough space in the buffer.
    NotEnoughSpace,
    /// Failed to convert a length into its wire type.
    TryFromIntError,
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::NotEnoughSpace => write!(f, "not enough space"),
            WriteError::TryFromIntError => write!(f, "integer conversion failed"),
        }
    }
}

impl Error for WriteError {}

impl From<ReadError> for ChainError {
    fn from(e: ReadError) -> Self {
        ChainError::SerializationError(format!("failed to read: {}", e))
    }
}

impl From<WriteError> for ChainError {
    fn from(e: WriteError) -> Self {
        ChainError::SerializationError(format!("failed to write: {}", e))
    }
}

/// Number of bytes a value occupies once written.
pub trait NumBytes {
    fn num_bytes(&self) -> usize;
}

pub trait Read: Sized {
    fn read(bytes: &[u8], pos: &mut usize) -> Result<Self, ReadError>;

    /// Reads a value that must span the whole buffer.
    fn unpack(bytes: &[u8]) -> Result<Self, ReadError> {
        let mut pos = 0;
        let value = Self::read(bytes, &mut pos)?;
        if pos != bytes.len() {
            return Err(ReadError::ParseError);
        }
        Ok(value)
    }
}

pub trait Write {
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError>;

    fn pack(&self) -> Result<Vec<u8>, WriteError>
    where
        Self: NumBytes,
    {
        let mut bytes = vec![0u8; self.num_bytes()];
        let mut pos = 0;
        self.write(&mut bytes, &mut pos)?;
        Ok(bytes)
    }
}
