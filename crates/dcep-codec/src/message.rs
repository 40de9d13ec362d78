//! DCEP message model.
//!
//! The wire carries two control messages: a channel-open request and a
//! single-byte acknowledgment. The open message's 4-byte reliability
//! parameter is a union slot reinterpreted by channel type; here that is a
//! proper sum type ([`Reliability`]) and the channel-type byte is derived
//! from it, so a message with mismatched type and parameter cannot be built.

/// Fixed portion of a serialized channel-open message, in bytes.
pub const CHANNEL_OPEN_HEADER_LEN: usize = 12;

/// Total length of a serialized channel-ack message, in bytes.
pub const CHANNEL_ACK_LEN: usize = 1;

/// Largest channel-name or protocol field the 16-bit length prefix can carry.
pub const MAX_FIELD_LEN: usize = u16::MAX as usize;

/// DCEP message type discriminator, the first byte of every message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    /// Channel-open acknowledgment (0x02). No payload.
    DataChannelAck,
    /// Channel-open request (0x03).
    DataChannelOpen,
}

impl MessageType {
    /// Parse a wire discriminator byte. Returns `None` for unknown values.
    pub fn from_wire(byte: u8) -> Option<Self> {
        match byte {
            0x02 => Some(MessageType::DataChannelAck),
            0x03 => Some(MessageType::DataChannelOpen),
            _ => None,
        }
    }

    /// The byte this type is encoded as.
    pub fn wire_value(self) -> u8 {
        match self {
            MessageType::DataChannelAck => 0x02,
            MessageType::DataChannelOpen => 0x03,
        }
    }
}

/// Channel reliability policy as carried in the channel-type wire byte.
///
/// The high bit (0x80) marks the unordered variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelType {
    Reliable,
    PartialReliableRexmit,
    PartialReliableTimed,
    ReliableUnordered,
    PartialReliableRexmitUnordered,
    PartialReliableTimedUnordered,
}

impl ChannelType {
    /// Parse a wire channel-type byte. Returns `None` for values outside the
    /// six recognized codes.
    pub fn from_wire(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(ChannelType::Reliable),
            0x01 => Some(ChannelType::PartialReliableRexmit),
            0x02 => Some(ChannelType::PartialReliableTimed),
            0x80 => Some(ChannelType::ReliableUnordered),
            0x81 => Some(ChannelType::PartialReliableRexmitUnordered),
            0x82 => Some(ChannelType::PartialReliableTimedUnordered),
            _ => None,
        }
    }

    /// The byte this channel type is encoded as.
    pub fn wire_value(self) -> u8 {
        match self {
            ChannelType::Reliable => 0x00,
            ChannelType::PartialReliableRexmit => 0x01,
            ChannelType::PartialReliableTimed => 0x02,
            ChannelType::ReliableUnordered => 0x80,
            ChannelType::PartialReliableRexmitUnordered => 0x81,
            ChannelType::PartialReliableTimedUnordered => 0x82,
        }
    }

    /// Whether messages on this channel are delivered in order.
    pub fn is_ordered(self) -> bool {
        self.wire_value() & 0x80 == 0
    }
}

/// How the 4-byte reliability-parameter slot is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reliability {
    /// Fully reliable delivery. The parameter slot is written as zero.
    Reliable,
    /// Give up after this many retransmissions.
    MaxRetransmits(u32),
    /// Give up after this many milliseconds.
    MaxLifetimeMs(u32),
}

impl Reliability {
    /// The raw value written into the 4-byte parameter slot.
    pub fn wire_param(self) -> u32 {
        match self {
            Reliability::Reliable => 0,
            Reliability::MaxRetransmits(n) => n,
            Reliability::MaxLifetimeMs(ms) => ms,
        }
    }
}

/// A channel-open request.
///
/// `channel_name` and `protocol` are borrowed, not owned: a decoded message
/// points straight into the receive buffer and is valid only as long as that
/// buffer is. Zero-length fields are represented as `None`, matching the
/// absent-field convention on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOpen<'a> {
    /// In-order or out-of-order delivery.
    pub ordered: bool,
    /// Reliability policy; determines the channel-type byte together with
    /// `ordered`.
    pub reliability: Reliability,
    /// Channel priority.
    pub priority: u16,
    /// Channel name bytes, if any.
    pub channel_name: Option<&'a [u8]>,
    /// Sub-protocol bytes, if any.
    pub protocol: Option<&'a [u8]>,
}

impl<'a> ChannelOpen<'a> {
    /// The channel-type byte implied by the ordered flag and reliability
    /// policy.
    pub fn channel_type(&self) -> ChannelType {
        match (self.ordered, self.reliability) {
            (true, Reliability::Reliable) => ChannelType::Reliable,
            (true, Reliability::MaxRetransmits(_)) => ChannelType::PartialReliableRexmit,
            (true, Reliability::MaxLifetimeMs(_)) => ChannelType::PartialReliableTimed,
            (false, Reliability::Reliable) => ChannelType::ReliableUnordered,
            (false, Reliability::MaxRetransmits(_)) => ChannelType::PartialReliableRexmitUnordered,
            (false, Reliability::MaxLifetimeMs(_)) => ChannelType::PartialReliableTimedUnordered,
        }
    }

    /// Rebuild the in-memory form from the raw wire fields.
    pub(crate) fn from_wire_parts(
        channel_type: ChannelType,
        priority: u16,
        param: u32,
        channel_name: Option<&'a [u8]>,
        protocol: Option<&'a [u8]>,
    ) -> Self {
        let reliability = match channel_type {
            ChannelType::Reliable | ChannelType::ReliableUnordered => Reliability::Reliable,
            ChannelType::PartialReliableRexmit | ChannelType::PartialReliableRexmitUnordered => {
                Reliability::MaxRetransmits(param)
            }
            ChannelType::PartialReliableTimed | ChannelType::PartialReliableTimedUnordered => {
                Reliability::MaxLifetimeMs(param)
            }
        };
        Self {
            ordered: channel_type.is_ordered(),
            reliability,
            priority,
            channel_name,
            protocol,
        }
    }

    /// Channel name length in bytes (0 when absent).
    pub fn channel_name_len(&self) -> usize {
        self.channel_name.map_or(0, <[u8]>::len)
    }

    /// Protocol length in bytes (0 when absent).
    pub fn protocol_len(&self) -> usize {
        self.protocol.map_or(0, <[u8]>::len)
    }

    /// The total wire size of this message (header + trailing fields).
    pub fn wire_len(&self) -> usize {
        CHANNEL_OPEN_HEADER_LEN + self.channel_name_len() + self.protocol_len()
    }
}
