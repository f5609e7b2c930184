use crate::{Error, Result};

/// Byte order used when packing and unpacking multi-byte scalars.
///
/// The numeric codes accepted by [`ByteOrder::from_code`] are part of the
/// buffer's contract and must not be renumbered: 0 is big-endian, 1 is
/// little-endian, 2 is machine-native.
///
/// The order never affects single-byte element access.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum ByteOrder {
    /// Most significant byte first (network order). Code 0.
    #[default]
    BigEndian,

    /// Least significant byte first. Code 1.
    LittleEndian,

    /// Whichever of the other two matches the host, resolved each time the
    /// codec consults it. Code 2.
    MachineNative,
}

impl ByteOrder {
    /// Maps a numeric order code to its byte order.
    pub fn from_code(code: i64) -> Result<Self> {
        match code {
            0 => Ok(Self::BigEndian),
            1 => Ok(Self::LittleEndian),
            2 => Ok(Self::MachineNative),
            _ => Err(Error::InvalidArgument),
        }
    }

    /// Resolves `MachineNative` to the host's actual byte order.
    pub fn resolve(self) -> Self {
        match self {
            Self::MachineNative => {
                if cfg!(target_endian = "big") {
                    Self::BigEndian
                } else {
                    Self::LittleEndian
                }
            }
            other => other,
        }
    }
}
