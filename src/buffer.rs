use crate::{ByteOrder, Error, Result};

/// Heterogeneous construction input for [`ByteBuffer::new`].
///
/// Each shape maps to a distinct validated path; there is no runtime type
/// inspection beyond the variant tag.
#[derive(Clone, Debug)]
pub enum Source {
    /// Raw text; the buffer holds its UTF-8 byte sequence.
    Text(String),
    /// Bytes used as-is.
    Bytes(Vec<u8>),
    /// A sequence of byte-sized values; each element must fit in one byte.
    Values(Vec<i64>),
    /// A zero-filled buffer of the given capacity. Must be non-negative.
    Capacity(i64),
}

impl From<&str> for Source {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Source {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<u8>> for Source {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Source {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<i64>> for Source {
    fn from(values: Vec<i64>) -> Self {
        Self::Values(values)
    }
}

impl From<&[i64]> for Source {
    fn from(values: &[i64]) -> Self {
        Self::Values(values.to_vec())
    }
}

impl From<i32> for Source {
    fn from(capacity: i32) -> Self {
        Self::Capacity(i64::from(capacity))
    }
}

impl From<i64> for Source {
    fn from(capacity: i64) -> Self {
        Self::Capacity(capacity)
    }
}

/// A value that can be narrowed to a single byte for indexed writes.
#[derive(Copy, Clone, Debug)]
pub enum ByteValue {
    /// Integer input; must lie in `0..=255`.
    Int(i64),
    /// Character input; must occupy a single encoded byte.
    Char(char),
}

impl ByteValue {
    pub(crate) fn narrow(self) -> Result<u8> {
        match self {
            Self::Int(v) => u8::try_from(v).map_err(|_| Error::InvalidArgument),
            Self::Char(c) if c.is_ascii() => Ok(c as u8),
            Self::Char(_) => Err(Error::InvalidArgument),
        }
    }
}

impl From<u8> for ByteValue {
    fn from(v: u8) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i32> for ByteValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for ByteValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<char> for ByteValue {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// A mutable, random-access byte buffer with cursor state and explicit byte
/// order.
///
/// The buffer owns one contiguous byte region. `position` marks where the
/// next sequential read or write happens, `limit` bounds how far the cursor
/// may travel in the current phase, and `0 <= position <= limit <= capacity`
/// holds at all times; operations that would break the ordering fail instead
/// of clamping.
///
/// The buffer is an ordinary owned value with no interior locking. Callers
/// that need shared access across threads must wrap it in their own
/// synchronization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    pub(crate) bytes: Vec<u8>,
    pub(crate) position: usize,
    pub(crate) limit: usize,
    pub(crate) order: ByteOrder,
}

impl ByteBuffer {
    /// Builds a buffer from any accepted [`Source`] shape.
    ///
    /// Fresh buffers start at position 0 with the limit open to the full
    /// capacity, in big-endian order.
    pub fn new(source: impl Into<Source>) -> Result<Self> {
        let bytes = match source.into() {
            Source::Text(text) => text.into_bytes(),
            Source::Bytes(bytes) => bytes,
            Source::Values(values) => values
                .into_iter()
                .map(|v| u8::try_from(v).map_err(|_| Error::InvalidArgument))
                .collect::<Result<Vec<u8>>>()?,
            Source::Capacity(n) => {
                let n = usize::try_from(n).map_err(|_| Error::InvalidArgument)?;
                vec![0; n]
            }
        };
        let limit = bytes.len();
        Ok(Self {
            bytes,
            position: 0,
            limit,
            order: ByteOrder::default(),
        })
    }

    /// Zero-filled buffer of the given capacity. Equivalent to
    /// `new(capacity)`.
    pub fn allocate(capacity: i64) -> Result<Self> {
        Self::new(capacity)
    }

    /// Re-initializes storage to `capacity` bytes, copying `contents`
    /// truncated or zero-padded to fit.
    ///
    /// This completes two-phase construction (allocate, then fill), so the
    /// cursor rewinds to 0 and the limit opens to the new capacity.
    pub fn initialize_buffer(
        &mut self,
        capacity: i64,
        contents: impl AsRef<[u8]>,
    ) -> Result<&mut Self> {
        let capacity = usize::try_from(capacity).map_err(|_| Error::InvalidArgument)?;
        let contents = contents.as_ref();
        let mut bytes = vec![0u8; capacity];
        let used = contents.len().min(capacity);
        bytes[..used].copy_from_slice(&contents[..used]);
        self.bytes = bytes;
        self.position = 0;
        self.limit = capacity;
        Ok(self)
    }

    /// Current storage length in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Read-only view of the full storage.
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the byte at `offset`.
    pub fn get(&self, offset: usize) -> Result<u8> {
        self.bytes.get(offset).copied().ok_or(Error::OutOfRange)
    }

    /// Overwrites the byte at `offset` with `value`, which may be an integer
    /// in `0..=255` or a single-byte character.
    pub fn set(&mut self, offset: usize, value: impl Into<ByteValue>) -> Result<&mut Self> {
        let value = value.into().narrow()?;
        let slot = self.bytes.get_mut(offset).ok_or(Error::OutOfRange)?;
        *slot = value;
        Ok(self)
    }

    /// True when `offset` addresses a byte inside the buffer.
    pub fn contains(&self, offset: usize) -> bool {
        offset < self.bytes.len()
    }

    /// Resets the byte at `offset` to 0x00. Capacity is unchanged, so
    /// [`contains`](ByteBuffer::contains) still holds afterward.
    pub fn clear(&mut self, offset: usize) -> Result<&mut Self> {
        let slot = self.bytes.get_mut(offset).ok_or(Error::OutOfRange)?;
        *slot = 0;
        Ok(self)
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Alias for [`position`](ByteBuffer::position).
    pub fn current(&self) -> usize {
        self.position
    }

    /// Moves the cursor. The new position may not pass the limit.
    pub fn set_position(&mut self, position: usize) -> Result<&mut Self> {
        if position > self.limit {
            return Err(Error::OutOfRange);
        }
        self.position = position;
        Ok(self)
    }

    /// Upper bound on the cursor for the current read/write phase.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Transitions the buffer from "just written" to "ready to read": the
    /// limit moves to the current position and the cursor rewinds to 0.
    ///
    /// No effect when the cursor is already at 0.
    pub fn flip(&mut self) -> &mut Self {
        if self.position != 0 {
            self.limit = self.position;
            self.position = 0;
        }
        self
    }

    /// Sets the byte order from its numeric code: 0 = big-endian,
    /// 1 = little-endian, 2 = machine-native.
    pub fn order(&mut self, code: i64) -> Result<&mut Self> {
        self.order = ByteOrder::from_code(code)?;
        Ok(self)
    }

    /// Current byte order.
    pub fn byte_order(&self) -> ByteOrder {
        self.order
    }

    /// True when the order is exactly big-endian. A machine-native buffer
    /// reports false even on a big-endian host.
    pub fn is_big_endian(&self) -> bool {
        self.order == ByteOrder::BigEndian
    }

    /// True when the order is exactly little-endian.
    pub fn is_little_endian(&self) -> bool {
        self.order == ByteOrder::LittleEndian
    }

    /// True when the order tracks the host's native endianness.
    pub fn is_machine_byte(&self) -> bool {
        self.order == ByteOrder::MachineNative
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
