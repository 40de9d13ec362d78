/// Failure tier, recovered from any [`DcepError`] via [`DcepError::class`].
///
/// Callers that route policy on the kind of failure (drop the association,
/// log and continue, fix the call site) can match on this instead of the
/// individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// The caller violated a precondition; the input was never inspected
    /// beyond what was needed to detect it.
    BadParam,
    /// The destination buffer cannot hold the fully-encoded message.
    /// Nothing was written.
    OutOfMemory,
    /// The input bytes are self-inconsistent: unknown discriminant or
    /// declared trailing lengths past the end of the buffer.
    MalformedMessage,
}

/// Errors that can occur while encoding or decoding DCEP messages.
#[derive(Debug, thiserror::Error)]
pub enum DcepError {
    /// The destination buffer is smaller than the fixed portion of the
    /// message being serialized.
    #[error("destination buffer too small ({capacity} bytes, fixed part is {min})")]
    DestinationTooSmall { capacity: usize, min: usize },

    /// The channel name does not fit the 16-bit wire length field.
    #[error("channel name too long ({len} bytes, max {max})")]
    ChannelNameTooLong { len: usize, max: usize },

    /// The sub-protocol does not fit the 16-bit wire length field.
    #[error("protocol too long ({len} bytes, max {max})")]
    ProtocolTooLong { len: usize, max: usize },

    /// The destination buffer cannot hold the computed total wire length.
    #[error("destination buffer too small ({required} bytes required, {capacity} available)")]
    BufferTooSmall { required: usize, capacity: usize },

    /// The input is shorter than the fixed portion of the expected message.
    #[error("input too short ({len} bytes, need at least {min})")]
    InputTooShort { len: usize, min: usize },

    /// The buffer handed to a typed deserializer starts with a different
    /// message type.
    #[error("unexpected message type 0x{actual:02X} (expected 0x{expected:02X})")]
    UnexpectedMessageType { actual: u8, expected: u8 },

    /// The first byte is not a known DCEP message type.
    #[error("unknown message type 0x{0:02X}")]
    UnknownMessageType(u8),

    /// The channel-type byte is not one of the six recognized values.
    #[error("unknown channel type 0x{0:02X}")]
    UnknownChannelType(u8),

    /// A declared trailing-field length runs past the end of the buffer.
    #[error("truncated {field} ({declared} bytes declared, {remaining} remaining)")]
    Truncated {
        field: &'static str,
        declared: usize,
        remaining: usize,
    },
}

impl DcepError {
    /// The three-tier failure class this error belongs to.
    pub fn class(&self) -> ErrorClass {
        match self {
            DcepError::DestinationTooSmall { .. }
            | DcepError::ChannelNameTooLong { .. }
            | DcepError::ProtocolTooLong { .. }
            | DcepError::InputTooShort { .. }
            | DcepError::UnexpectedMessageType { .. } => ErrorClass::BadParam,
            DcepError::BufferTooSmall { .. } => ErrorClass::OutOfMemory,
            DcepError::UnknownMessageType(_)
            | DcepError::UnknownChannelType(_)
            | DcepError::Truncated { .. } => ErrorClass::MalformedMessage,
        }
    }
}

pub type Result<T> = std::result::Result<T, DcepError>;
