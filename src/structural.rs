//! Whole-buffer structural operations: growth, concatenation, reversal,
//! slicing.

use core::any::Any;

use crate::{ByteBuffer, Error, Result};

impl ByteBuffer {
    /// Grows storage to `capacity` bytes, zero-filling the new tail.
    ///
    /// Position and limit keep their prior values. Shrinking is not
    /// permitted: `capacity` below the current capacity fails with
    /// [`Error::InvalidArgument`].
    pub fn fill(&mut self, capacity: usize) -> Result<&mut Self> {
        if capacity < self.bytes.len() {
            return Err(Error::InvalidArgument);
        }
        self.bytes.resize(capacity, 0);
        Ok(self)
    }

    /// Builds a new buffer holding `a`'s full byte contents followed by
    /// `b`'s. Neither input is mutated.
    ///
    /// The result starts a fresh phase: cursor at 0, limit open to the
    /// combined capacity, byte order taken from `a`.
    pub fn concat(a: &ByteBuffer, b: &ByteBuffer) -> ByteBuffer {
        let mut bytes = Vec::with_capacity(a.bytes.len() + b.bytes.len());
        bytes.extend_from_slice(&a.bytes);
        bytes.extend_from_slice(&b.bytes);
        let limit = bytes.len();
        ByteBuffer {
            bytes,
            position: 0,
            limit,
            order: a.order,
        }
    }

    /// Grows the receiver and copies `other`'s bytes onto the end.
    ///
    /// `other` may be another buffer, text, or raw bytes; it is normalized
    /// to bytes first. Position and limit are unchanged.
    pub fn append(&mut self, other: impl AsRef<[u8]>) -> &mut Self {
        self.bytes.extend_from_slice(other.as_ref());
        self
    }

    /// Appends the receiver's bytes onto the end of `target`, mutating
    /// `target` instead of the receiver.
    pub fn append_to<'t>(&self, target: &'t mut ByteBuffer) -> &'t mut ByteBuffer {
        target.append(self)
    }

    /// Places `other`'s bytes before the receiver's existing content,
    /// shifting it to higher offsets.
    pub fn prepend(&mut self, other: impl AsRef<[u8]>) -> &mut Self {
        let other = other.as_ref();
        let mut bytes = Vec::with_capacity(other.len() + self.bytes.len());
        bytes.extend_from_slice(other);
        bytes.append(&mut self.bytes);
        self.bytes = bytes;
        self
    }

    /// Prepends the receiver's bytes onto the front of `target`, mutating
    /// `target` instead of the receiver.
    pub fn prepend_to<'t>(&self, target: &'t mut ByteBuffer) -> &'t mut ByteBuffer {
        target.prepend(self)
    }

    /// Reverses the byte sequence in place, byte for byte.
    ///
    /// This is a raw sequence reversal, not an endianness conversion;
    /// multi-byte values are not reinterpreted.
    pub fn reverse(&mut self) -> &mut Self {
        self.bytes.reverse();
        self
    }

    /// Copies the bytes in `[start, end)` out of the buffer.
    ///
    /// Fails with [`Error::OutOfRange`] when `start > end` or `end` passes
    /// the capacity.
    pub fn slice(&self, start: usize, end: usize) -> Result<Vec<u8>> {
        if start > end || end > self.bytes.len() {
            return Err(Error::OutOfRange);
        }
        Ok(self.bytes[start..end].to_vec())
    }

    /// True when `value` is a [`ByteBuffer`].
    pub fn is_byte_buffer(value: &dyn Any) -> bool {
        value.is::<ByteBuffer>()
    }
}
