use crate::{NumBytes, Read, ReadError, VarUint32, Write, WriteError};

macro_rules! impl_le_integer {
    ($($ty:ty),*) => {
        $(
            impl NumBytes for $ty {
                #[inline(always)]
                fn num_bytes(&self) -> usize {
                    core::mem::size_of::<$ty>()
                }
            }

            impl Read for $ty {
                #[inline(always)]
                fn read(bytes: &[u8], pos: &mut usize) -> Result<Self, ReadError> {
                    const SIZE: usize = core::mem::size_of::<$ty>();
                    let slice = bytes
                        .get(*pos..*pos + SIZE)
                        .ok_or(ReadError::NotEnoughBytes)?;
                    let mut arr = [0u8; SIZE];
                    arr.copy_from_slice(slice);
                    *pos += SIZE;
                    Ok(<$ty>::from_le_bytes(arr))
                }
            }

            impl Write for $ty {
                #[inline(always)]
                fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
                    const SIZE: usize = core::mem::size_of::<$ty>();
                    let slot = bytes
                        .get_mut(*pos..*pos + SIZE)
                        .ok_or(WriteError::NotEnoughSpace)?;
                    slot.copy_from_slice(&self.to_le_bytes());
                    *pos += SIZE;
                    Ok(())
                }
            }
        )*
    };
}

impl_le_integer!(u8, u16, u32, u64);

impl NumBytes for usize {
    #[inline(always)]
    fn num_bytes(&self) -> usize {
        VarUint32(*self as u32).num_bytes()
    }
}

impl Read for usize {
    #[inline(always)]
    fn read(bytes: &[u8], pos: &mut usize) -> Result<Self, ReadError> {
        VarUint32::read(bytes, pos).map(usize::from)
    }
}

impl Write for usize {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        VarUint32::try_from(*self)?.write(bytes, pos)
    }
}

impl NumBytes for bool {
    #[inline(always)]
    fn num_bytes(&self) -> usize {
        1
    }
}

impl Read for bool {
    #[inline(always)]
    fn read(bytes: &[u8], pos: &mut usize) -> Result<Self, ReadError> {
        match u8::read(bytes, pos)? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(ReadError::ParseError),
        }
    }
}

impl Write for bool {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        (*self as u8).write(bytes, pos)
    }
}

impl<const N: usize> NumBytes for [u8; N] {
    #[inline(always)]
    fn num_bytes(&self) -> usize {
        N
    }
}

impl<const N: usize> Read for [u8; N] {
    #[inline(always)]
    fn read(bytes: &[u8], pos: &mut usize) -> Result<Self, ReadError> {
        let slice = bytes
            .get(*pos..*pos + N)
            .ok_or(ReadError::NotEnoughBytes)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        *pos += N;
        Ok(out)
    }
}

impl<const N: usize> Write for [u8; N] {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        let slot = bytes
            .get_mut(*pos..*pos + N)
            .ok_or(WriteError::NotEnoughSpace)?;
        slot.copy_from_slice(self);
        *pos += N;
        Ok(())
    }
}

impl<T: NumBytes> NumBytes for Option<T> {
    #[inline(always)]
    fn num_bytes(&self) -> usize {
        match self {
            Some(value) => 1 + value.num_bytes(),
            None => 1,
        }
    }
}

impl<T: Read> Read for Option<T> {
    #[inline(always)]
    fn read(bytes: &[u8], pos: &mut usize) -> Result<Self, ReadError> {
        if bool::read(bytes, pos)? {
            Ok(Some(T::read(bytes, pos)?))
        } else {
            Ok(None)
        }
    }
}

impl<T: Write> Write for Option<T> {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        self.is_some().write(bytes, pos)?;
        if let Some(value) = self {
            value.write(bytes, pos)?;
        }
        Ok(())
    }
}

impl<T: NumBytes> NumBytes for Vec<T> {
    #[inline(always)]
    fn num_bytes(&self) -> usize {
        self.iter()
            .fold(self.len().num_bytes(), |count, item| count + item.num_bytes())
    }
}

impl<T: Read> Read for Vec<T> {
    #[inline(always)]
    fn read(bytes: &[u8], pos: &mut usize) -> Result<Self, ReadError> {
        let len = usize::read(bytes, pos)?;

        // every item takes at least one byte
        if *pos + len > bytes.len() {
            return Err(ReadError::NotEnoughBytes);
        }

        let mut vec = Vec::with_capacity(len);
        for _ in 0..len {
            vec.push(T::read(bytes, pos)?);
        }
        Ok(vec)
    }
}

impl<T: Write> Write for Vec<T> {
    #[inline(always)]
    fn write(&self, bytes: &mut [u8], pos: &mut usize) -> Result<(), WriteError> {
        self.len().write(bytes, pos)?;
        for item in self.iter() {
            item.write(bytes, pos)?;
        }
        Ok(())
    }
}
