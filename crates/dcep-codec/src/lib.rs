//! Wire codec for DCEP control messages (RFC 8832).
//!
//! DCEP negotiates WebRTC data channels over SCTP with two control messages:
//! - A channel-open request: reliability policy, priority, and optional
//!   channel-name / sub-protocol fields behind a fixed 12-byte header.
//! - A single-byte channel-ack.
//!
//! This crate owns the byte layout, the bounds checks against
//! peer-controlled lengths, and nothing else. Transport, channel state, and
//! retransmission policy live with the caller. Decoded messages borrow
//! their variable-length fields from the input buffer; no copies, no
//! allocation on the decode path.

pub mod codec;
pub mod error;
pub mod message;

pub use codec::DcepCodec;
pub use dcep_endian::ByteOrder;
pub use error::{DcepError, ErrorClass, Result};
pub use message::{
    ChannelOpen, ChannelType, MessageType, Reliability, CHANNEL_ACK_LEN, CHANNEL_OPEN_HEADER_LEN,
    MAX_FIELD_LEN,
};
