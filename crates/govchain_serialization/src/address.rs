use alloy_primitives::{Address, U256};

use crate::{NumBytes, Read, ReadError, Write, WriteError};

impl NumBytes for Address {
    #[inline]
    fn num_bytes(&self) -> usize {
        20
    }
}

impl Read for Address {
    #[inline]
    fn read(bytes: &[u8], pos: &mut usize) -> Result<Self, ReadError> {
        let raw = <[u8; 20]>::read(bytes, pos)?;
        Ok(Address::from(raw))
    }
}

impl Write for Address {
    #[inline]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        self.0.0.write(bytes, pos)
    }
}

// U256 is stored as 32 little-endian bytes, matching the integer encoding.
impl NumBytes for U256 {
    #[inline]
    fn num_bytes(&self) -> usize {
        32
    }
}

impl Read for U256 {
    #[inline]
    fn read(bytes: &[u8], pos: &mut usize) -> Result<Self, ReadError> {
        let raw = <[u8; 32]>::read(bytes, pos)?;
        Ok(U256::from_le_bytes(raw))
    }
}

impl Write for U256 {
    #[inline]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        self.to_le_bytes::<32>().write(bytes, pos)
    }
}
