use crate::{NumBytes, Read, ReadError, Write, WriteError};

/// LEB128-encoded `u32`, used for collection length prefixes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct VarUint32(pub u32);

impl NumBytes for VarUint32 {
    #[inline(always)]
    fn num_bytes(&self) -> usize {
        if self.0 == 0 {
            return 1;
        }
        let bits = 32 - self.0.leading_zeros() as usize;
        bits.div_ceil(7)
    }
}

impl Read for VarUint32 {
    #[inline(always)]
    fn read(bytes: &[u8], pos: &mut usize) -> Result<Self, ReadError> {
        let mut result: u32 = 0;

        // at most 5 groups, the last one carrying only 4 significant bits
        for i in 0..5 {
            let byte = *bytes.get(*pos).ok_or(ReadError::NotEnoughBytes)?;
            *pos += 1;

            let low7 = (byte & 0x7F) as u32;
            if i == 4 && low7 > 0x0F {
                return Err(ReadError::Overflow);
            }
            result |= low7 << (7 * i);

            if byte & 0x80 == 0 {
                return Ok(VarUint32(result));
            }
        }

        Err(ReadError::Overflow)
    }
}

impl Write for VarUint32 {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        if bytes.len() < *pos + self.num_bytes() {
            return Err(WriteError::NotEnoughSpace);
        }

        let mut v = self.0;
        loop {
            let mut b = (v & 0x7F) as u8;
            v >>= 7;
            if v != 0 {
                b |= 0x80;
            }
            bytes[*pos] = b;
            *pos += 1;
            if v == 0 {
                return Ok(());
            }
        }
    }
}

impl TryFrom<usize> for VarUint32 {
    type Error = WriteError;

    fn try_from(v: usize) -> Result<Self, Self::Error> {
        u32::try_from(v)
            .map(VarUint32)
            .map_err(|_| WriteError::TryFromIntError)
    }
}

impl From<u32> for VarUint32 {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl From<VarUint32> for usize {
    fn from(v: VarUint32) -> Self {
        v.0 as usize
    }
}
