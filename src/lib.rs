//! Mutable, random-access byte buffers with cursor semantics and an
//! endianness-aware pack/unpack codec.
//!
//! A [`ByteBuffer`] owns one contiguous byte region plus cursor metadata
//! (position, limit, byte order). It can be built from text, byte sequences,
//! or a pre-sized capacity; mutated at arbitrary offsets; grown, reordered,
//! and reversed; and serialized to binary, hex, UTF-8, or base64 text.
//!
//! # Example
//!
//! ```
//! use byte_buffer::{ByteBuffer, Format};
//!
//! # fn main() -> byte_buffer::Result<()> {
//! let mut buffer = ByteBuffer::allocate(4)?;
//! buffer.pack(Format::UInt16, 0xbeefu16, 0)?;
//! assert_eq!(buffer.to_hex(), "beef0000");
//!
//! buffer.set_position(0)?;
//! assert_eq!(buffer.read_u16()?, 0xbeef);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![forbid(unused_must_use)]
#![warn(missing_docs)]

mod buffer;
mod codec;
mod error;
mod format;
mod order;
mod structural;
mod transform;


pub use buffer::{ByteBuffer, ByteValue, Source};
pub use codec::check_for_excess;
pub use error::{Error, Result};
pub use format::{Format, Value};
pub use order::ByteOrder;
