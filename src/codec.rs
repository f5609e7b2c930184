//! The typed pack/unpack codec.
//!
//! `pack` and `unpack` move tagged [`Value`]s through the buffer under a
//! [`Format`] code, honoring the buffer's byte order for multi-byte widths.
//! The typed `read_*`/`write_*` methods are the sequential layer over the
//! same machinery: they operate at the cursor, bounded by the limit, and
//! advance past what they touch.

use crate::{ByteBuffer, ByteOrder, Error, Format, Result, Value};

/// Rejects `value` when it exceeds `max`.
///
/// `pack` applies this gate before every unsigned write; it is public so
/// callers building custom encodings can reuse the same precondition.
pub fn check_for_excess(value: u64, max: u64) -> Result<()> {
    if value > max {
        return Err(Error::InvalidArgument);
    }
    Ok(())
}

impl ByteBuffer {
    /// Encodes `value` per `format` starting at `offset`, overwriting in
    /// place.
    ///
    /// Multi-byte formats honor the buffer's current byte order. The buffer
    /// never grows: the encoded width must fit between `offset` and the
    /// capacity, or the call fails with [`Error::OutOfRange`] before anything
    /// is written. A value outside the format's numeric domain fails with
    /// [`Error::InvalidArgument`].
    pub fn pack(
        &mut self,
        format: Format,
        value: impl Into<Value>,
        offset: usize,
    ) -> Result<&mut Self> {
        let raw = to_raw(format, value.into())?;
        let width = format.width();
        let end = offset.checked_add(width).ok_or(Error::OutOfRange)?;
        if end > self.bytes.len() {
            return Err(Error::OutOfRange);
        }
        store_raw(&mut self.bytes[offset..end], raw, self.order.resolve());
        Ok(self)
    }

    /// Decodes one scalar of `format`'s width at the cursor, honoring byte
    /// order, and advances the cursor past it.
    ///
    /// Fails with [`Error::OutOfRange`] when fewer than `format.width()`
    /// bytes remain before the limit.
    pub fn unpack(&mut self, format: Format) -> Result<Value> {
        let raw = self.take_raw(format.width())?;
        Ok(interpret(format, raw))
    }

    /// Writes raw bytes at the cursor and advances past them.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        let end = self.position.checked_add(bytes.len()).ok_or(Error::OutOfRange)?;
        if end > self.limit {
            return Err(Error::OutOfRange);
        }
        self.bytes[self.position..end].copy_from_slice(bytes);
        self.position = end;
        Ok(self)
    }

    /// Copies `len` bytes out at the cursor and advances past them.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let end = self.position.checked_add(len).ok_or(Error::OutOfRange)?;
        if end > self.limit {
            return Err(Error::OutOfRange);
        }
        let out = self.bytes[self.position..end].to_vec();
        self.position = end;
        Ok(out)
    }

    /// Writes a `u8` at the cursor.
    pub fn write_u8(&mut self, value: u8) -> Result<&mut Self> {
        self.write_scalar(Format::UInt8, value)
    }

    /// Writes a `u16` at the cursor in the buffer's byte order.
    pub fn write_u16(&mut self, value: u16) -> Result<&mut Self> {
        self.write_scalar(Format::UInt16, value)
    }

    /// Writes a `u32` at the cursor in the buffer's byte order.
    pub fn write_u32(&mut self, value: u32) -> Result<&mut Self> {
        self.write_scalar(Format::UInt32, value)
    }

    /// Writes a `u64` at the cursor in the buffer's byte order.
    pub fn write_u64(&mut self, value: u64) -> Result<&mut Self> {
        self.write_scalar(Format::UInt64, value)
    }

    /// Writes an `i8` at the cursor.
    pub fn write_i8(&mut self, value: i8) -> Result<&mut Self> {
        self.write_scalar(Format::Int8, value)
    }

    /// Writes an `i16` at the cursor in the buffer's byte order.
    pub fn write_i16(&mut self, value: i16) -> Result<&mut Self> {
        self.write_scalar(Format::Int16, value)
    }

    /// Writes an `i32` at the cursor in the buffer's byte order.
    pub fn write_i32(&mut self, value: i32) -> Result<&mut Self> {
        self.write_scalar(Format::Int32, value)
    }

    /// Writes an `i64` at the cursor in the buffer's byte order.
    pub fn write_i64(&mut self, value: i64) -> Result<&mut Self> {
        self.write_scalar(Format::Int64, value)
    }

    /// Writes an `f32` at the cursor in the buffer's byte order.
    pub fn write_f32(&mut self, value: f32) -> Result<&mut Self> {
        self.write_scalar(Format::Float32, value)
    }

    /// Writes an `f64` at the cursor in the buffer's byte order.
    pub fn write_f64(&mut self, value: f64) -> Result<&mut Self> {
        self.write_scalar(Format::Float64, value)
    }

    /// Reads a `u8` at the cursor.
    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.take_raw(1)? as u8)
    }

    /// Reads a `u16` at the cursor in the buffer's byte order.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(self.take_raw(2)? as u16)
    }

    /// Reads a `u32` at the cursor in the buffer's byte order.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(self.take_raw(4)? as u32)
    }

    /// Reads a `u64` at the cursor in the buffer's byte order.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.take_raw(8)
    }

    /// Reads an `i8` at the cursor.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.take_raw(1)? as u8 as i8)
    }

    /// Reads an `i16` at the cursor in the buffer's byte order.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.take_raw(2)? as u16 as i16)
    }

    /// Reads an `i32` at the cursor in the buffer's byte order.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.take_raw(4)? as u32 as i32)
    }

    /// Reads an `i64` at the cursor in the buffer's byte order.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.take_raw(8)? as i64)
    }

    /// Reads an `f32` at the cursor in the buffer's byte order.
    pub fn read_f32(&mut self) -> Result<f32> {
        Ok(f32::from_bits(self.take_raw(4)? as u32))
    }

    /// Reads an `f64` at the cursor in the buffer's byte order.
    pub fn read_f64(&mut self) -> Result<f64> {
        Ok(f64::from_bits(self.take_raw(8)?))
    }

    fn write_scalar(&mut self, format: Format, value: impl Into<Value>) -> Result<&mut Self> {
        let raw = to_raw(format, value.into())?;
        let width = format.width();
        let end = self.position.checked_add(width).ok_or(Error::OutOfRange)?;
        if end > self.limit {
            return Err(Error::OutOfRange);
        }
        store_raw(&mut self.bytes[self.position..end], raw, self.order.resolve());
        self.position = end;
        Ok(self)
    }

    fn take_raw(&mut self, width: usize) -> Result<u64> {
        let end = self.position.checked_add(width).ok_or(Error::OutOfRange)?;
        if end > self.limit {
            return Err(Error::OutOfRange);
        }
        let raw = load_raw(&self.bytes[self.position..end], self.order.resolve());
        self.position = end;
        Ok(raw)
    }
}

/// Validates `value` against `format`'s numeric domain and returns its
/// width-truncated bit pattern, held in the low bytes of a `u64`.
fn to_raw(format: Format, value: Value) -> Result<u64> {
    match format {
        Format::UInt8 | Format::UInt16 | Format::UInt32 | Format::UInt64 => {
            let v = value.as_u64().ok_or(Error::InvalidArgument)?;
            check_for_excess(v, unsigned_max(format.width()))?;
            Ok(v)
        }
        Format::Int8 | Format::Int16 | Format::Int32 | Format::Int64 => {
            let v = value.as_i64().ok_or(Error::InvalidArgument)?;
            let (min, max) = signed_bounds(format.width());
            if v < min || v > max {
                return Err(Error::InvalidArgument);
            }
            Ok((v as u64) & unsigned_max(format.width()))
        }
        Format::Float32 => {
            let v = value.as_f64().ok_or(Error::InvalidArgument)?;
            let narrowed = v as f32;
            if v.is_finite() && narrowed.is_infinite() {
                return Err(Error::InvalidArgument);
            }
            Ok(u64::from(narrowed.to_bits()))
        }
        Format::Float64 => {
            let v = value.as_f64().ok_or(Error::InvalidArgument)?;
            Ok(v.to_bits())
        }
        Format::Char => {
            let byte = match value {
                Value::Char(c) if c.is_ascii() => c as u8,
                Value::Unsigned(v) if v <= u64::from(u8::MAX) => v as u8,
                _ => return Err(Error::InvalidArgument),
            };
            Ok(u64::from(byte))
        }
    }
}

/// Wraps a decoded bit pattern back into `format`'s `Value` variant.
fn interpret(format: Format, raw: u64) -> Value {
    match format {
        Format::UInt8 | Format::UInt16 | Format::UInt32 | Format::UInt64 => Value::Unsigned(raw),
        Format::Int8 | Format::Int16 | Format::Int32 | Format::Int64 => {
            Value::Signed(sign_extend(raw, format.width()))
        }
        Format::Float32 => Value::Float(f64::from(f32::from_bits(raw as u32))),
        Format::Float64 => Value::Float(f64::from_bits(raw)),
        Format::Char => Value::Char(raw as u8 as char),
    }
}

/// Stores the low `dst.len()` bytes of `raw` into `dst` in the given order.
/// `order` must already be resolved.
fn store_raw(dst: &mut [u8], raw: u64, order: ByteOrder) {
    let width = dst.len();
    match order {
        ByteOrder::LittleEndian => dst.copy_from_slice(&raw.to_le_bytes()[..width]),
        _ => dst.copy_from_slice(&raw.to_be_bytes()[8 - width..]),
    }
}

/// Loads `src` as the low bytes of a `u64` in the given order. `order` must
/// already be resolved.
fn load_raw(src: &[u8], order: ByteOrder) -> u64 {
    let mut raw = [0u8; 8];
    match order {
        ByteOrder::LittleEndian => {
            raw[..src.len()].copy_from_slice(src);
            u64::from_le_bytes(raw)
        }
        _ => {
            raw[8 - src.len()..].copy_from_slice(src);
            u64::from_be_bytes(raw)
        }
    }
}

fn unsigned_max(width: usize) -> u64 {
    if width == 8 {
        u64::MAX
    } else {
        (1u64 << (width * 8)) - 1
    }
}

fn signed_bounds(width: usize) -> (i64, i64) {
    let max = (unsigned_max(width) >> 1) as i64;
    (-max - 1, max)
}

fn sign_extend(raw: u64, width: usize) -> i64 {
    let shift = 64 - width * 8;
    ((raw << shift) as i64) >> shift
}
