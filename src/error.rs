/// Result alias used by every fallible buffer operation.
pub type Result<T> = core::result::Result<T, Error>;

/// Error type shared by all buffer operations.
///
/// Every failure is raised synchronously at the point of violation; an
/// operation that fails its precondition checks commits no mutation.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Error {
    /// Malformed input: a negative capacity, a sequence element or value that
    /// cannot be narrowed to its destination width, or an unrecognized
    /// format/order/encoding code.
    InvalidArgument,

    /// An offset, position, or access width would read or write outside the
    /// buffer's bounds or violate the position/limit ordering.
    OutOfRange,
}

impl core::error::Error for Error {}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidArgument => f.write_str("invalid argument"),
            Self::OutOfRange => f.write_str("offset or width out of range"),
        }
    }
}
