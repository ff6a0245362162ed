//! Little-endian packing primitives for the fixed binary layouts

use crate::error::EncodeError;

/// A value the packer can place into a buffer as little-endian bytes.
pub trait WriteLe {
    /// Encoded width in bytes.
    fn width(&self) -> usize;

    /// Copy the little-endian representation into `out`.
    ///
    /// `out` is exactly [`WriteLe::width`] bytes.
    fn copy_to(&self, out: &mut [u8]);
}

impl WriteLe for u8 {
    fn width(&self) -> usize {
        1
    }

    fn copy_to(&self, out: &mut [u8]) {
        out[0] = *self;
    }
}

impl WriteLe for u16 {
    fn width(&self) -> usize {
        2
    }

    fn copy_to(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl WriteLe for u32 {
    fn width(&self) -> usize {
        4
    }

    fn copy_to(&self, out: &mut [u8]) {
        out.copy_from_slice(&self.to_le_bytes());
    }
}

impl WriteLe for &[u8] {
    fn width(&self) -> usize {
        self.len()
    }

    fn copy_to(&self, out: &mut [u8]) {
        out.copy_from_slice(self);
    }
}

impl WriteLe for &[u16] {
    fn width(&self) -> usize {
        2 * self.len()
    }

    fn copy_to(&self, out: &mut [u8]) {
        for (chunk, unit) in out.chunks_exact_mut(2).zip(self.iter()) {
            chunk.copy_from_slice(&unit.to_le_bytes());
        }
    }
}

/// Borrow `n` bytes at `at`, returning the advanced cursor.
///
/// `None` when the range crosses the end of the buffer.
pub fn read(buf: &[u8], at: usize, n: usize) -> Option<(&[u8], usize)> {
    let end = at.checked_add(n)?;
    let bytes = buf.get(at..end)?;
    Some((bytes, end))
}

/// Read `n` bytes at `at` as an unsigned little-endian integer.
///
/// `n` must be at most 8.
pub fn read_u(buf: &[u8], at: usize, n: usize) -> Option<(u64, usize)> {
    debug_assert!(n <= 8);

    let (bytes, next) = read(buf, at, n)?;
    let value = bytes
        .iter()
        .rev()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));

    Some((value, next))
}

/// Place `value` at `at`, returning the advanced cursor.
pub fn write<T>(buf: &mut [u8], at: usize, value: T) -> Result<usize, EncodeError>
where
    T: WriteLe,
{
    let len = value.width();
    let end = at
        .checked_add(len)
        .filter(|end| *end <= buf.len())
        .ok_or(EncodeError::OutOfBounds {
            offset: at,
            len,
            capacity: buf.len(),
        })?;

    value.copy_to(&mut buf[at..end]);

    Ok(end)
}
