use bytes::Bytes;
use dcep_endian::ByteOrder;
use tracing::trace;

use crate::error::{DcepError, Result};
use crate::message::{
    ChannelOpen, ChannelType, MessageType, CHANNEL_ACK_LEN, CHANNEL_OPEN_HEADER_LEN, MAX_FIELD_LEN,
};

/// Codec context with the byte-order strategy resolved once up front.
///
/// Immutable after construction and `Copy`. Any number of threads may share
/// one context; every operation reads only its own arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct DcepCodec {
    order: ByteOrder,
}

impl DcepCodec {
    /// Create a codec for the host this crate was compiled for.
    pub fn new() -> Self {
        Self {
            order: ByteOrder::for_host(),
        }
    }

    /// Create a codec with an explicit byte-order strategy.
    pub fn with_order(order: ByteOrder) -> Self {
        Self { order }
    }

    /// The resolved byte-order strategy.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Serialize a channel-open message into `dst`, returning the number of
    /// bytes written.
    ///
    /// Wire format:
    /// ```text
    /// ┌──────────┬──────────┬──────────┬──────────────┬─────────┬─────────┬────────┬──────────┐
    /// │ Type (1) │ Chan (1) │ Priority │ Reliability  │ Name    │ Proto   │ Name   │ Protocol │
    /// │ 0x03     │ type     │ (2B BE)  │ param (4B BE)│ len (2B)│ len (2B)│ bytes  │ bytes    │
    /// └──────────┴──────────┴──────────┴──────────────┴─────────┴─────────┴────────┴──────────┘
    /// ```
    ///
    /// A destination shorter than the 12-byte fixed header is a caller
    /// error; one that holds the header but not the trailing fields is a
    /// capacity error, detected before anything is written.
    pub fn serialize_channel_open(&self, msg: &ChannelOpen<'_>, dst: &mut [u8]) -> Result<usize> {
        if dst.len() < CHANNEL_OPEN_HEADER_LEN {
            return Err(DcepError::DestinationTooSmall {
                capacity: dst.len(),
                min: CHANNEL_OPEN_HEADER_LEN,
            });
        }

        let name_len = msg.channel_name_len();
        if name_len > MAX_FIELD_LEN {
            return Err(DcepError::ChannelNameTooLong {
                len: name_len,
                max: MAX_FIELD_LEN,
            });
        }
        let protocol_len = msg.protocol_len();
        if protocol_len > MAX_FIELD_LEN {
            return Err(DcepError::ProtocolTooLong {
                len: protocol_len,
                max: MAX_FIELD_LEN,
            });
        }

        let required = CHANNEL_OPEN_HEADER_LEN + name_len + protocol_len;
        if required > dst.len() {
            return Err(DcepError::BufferTooSmall {
                required,
                capacity: dst.len(),
            });
        }

        dst[0] = MessageType::DataChannelOpen.wire_value();
        dst[1] = msg.channel_type().wire_value();
        self.order
            .write_u16((&mut dst[2..4]).try_into().unwrap(), msg.priority);
        self.order.write_u32(
            (&mut dst[4..8]).try_into().unwrap(),
            msg.reliability.wire_param(),
        );
        self.order
            .write_u16((&mut dst[8..10]).try_into().unwrap(), name_len as u16);
        self.order
            .write_u16((&mut dst[10..12]).try_into().unwrap(), protocol_len as u16);

        if let Some(name) = msg.channel_name {
            dst[CHANNEL_OPEN_HEADER_LEN..CHANNEL_OPEN_HEADER_LEN + name_len].copy_from_slice(name);
        }
        if let Some(protocol) = msg.protocol {
            let start = CHANNEL_OPEN_HEADER_LEN + name_len;
            dst[start..start + protocol_len].copy_from_slice(protocol);
        }

        trace!(
            channel_type = ?msg.channel_type(),
            priority = msg.priority,
            total = required,
            "serialized channel-open"
        );
        Ok(required)
    }

    /// Serialize a channel-ack message into `dst`, returning the number of
    /// bytes written (always 1).
    pub fn serialize_channel_ack(&self, dst: &mut [u8]) -> Result<usize> {
        if dst.is_empty() {
            return Err(DcepError::DestinationTooSmall {
                capacity: 0,
                min: CHANNEL_ACK_LEN,
            });
        }
        dst[0] = MessageType::DataChannelAck.wire_value();
        Ok(CHANNEL_ACK_LEN)
    }

    /// Deserialize a channel-open message from `src`.
    ///
    /// The returned message borrows its channel-name and protocol fields
    /// from `src`; no bytes are copied. A buffer that does not start with
    /// the channel-open type byte is a caller error (route on
    /// [`DcepCodec::message_type`] first), while unknown channel types and
    /// truncated trailing fields are malformed input.
    pub fn deserialize_channel_open<'a>(&self, src: &'a [u8]) -> Result<ChannelOpen<'a>> {
        if src.len() < CHANNEL_OPEN_HEADER_LEN {
            return Err(DcepError::InputTooShort {
                len: src.len(),
                min: CHANNEL_OPEN_HEADER_LEN,
            });
        }
        if src[0] != MessageType::DataChannelOpen.wire_value() {
            return Err(DcepError::UnexpectedMessageType {
                actual: src[0],
                expected: MessageType::DataChannelOpen.wire_value(),
            });
        }

        let channel_type =
            ChannelType::from_wire(src[1]).ok_or(DcepError::UnknownChannelType(src[1]))?;
        let priority = self.order.read_u16(src[2..4].try_into().unwrap());
        let param = self.order.read_u32(src[4..8].try_into().unwrap());

        // The name extent is validated before the protocol length is even
        // trusted, so a truncated buffer is rejected at the earliest point.
        let name_len = self.order.read_u16(src[8..10].try_into().unwrap()) as usize;
        if src.len() < CHANNEL_OPEN_HEADER_LEN + name_len {
            return Err(DcepError::Truncated {
                field: "channel name",
                declared: name_len,
                remaining: src.len() - CHANNEL_OPEN_HEADER_LEN,
            });
        }
        let protocol_len = self.order.read_u16(src[10..12].try_into().unwrap()) as usize;
        if src.len() < CHANNEL_OPEN_HEADER_LEN + name_len + protocol_len {
            return Err(DcepError::Truncated {
                field: "protocol",
                declared: protocol_len,
                remaining: src.len() - CHANNEL_OPEN_HEADER_LEN - name_len,
            });
        }

        let name_start = CHANNEL_OPEN_HEADER_LEN;
        let channel_name = (name_len > 0).then(|| &src[name_start..name_start + name_len]);
        let protocol_start = name_start + name_len;
        let protocol = (protocol_len > 0).then(|| &src[protocol_start..protocol_start + protocol_len]);

        trace!(
            ?channel_type,
            priority,
            name_len,
            protocol_len,
            "deserialized channel-open"
        );
        Ok(ChannelOpen::from_wire_parts(
            channel_type,
            priority,
            param,
            channel_name,
            protocol,
        ))
    }

    /// Classify a raw buffer by its message-type byte.
    ///
    /// Only offset 0 is inspected; the rest of the buffer is not validated.
    pub fn message_type(&self, src: &[u8]) -> Result<MessageType> {
        if src.is_empty() {
            return Err(DcepError::InputTooShort {
                len: 0,
                min: CHANNEL_ACK_LEN,
            });
        }
        MessageType::from_wire(src[0]).ok_or(DcepError::UnknownMessageType(src[0]))
    }

    /// Encode a channel-open message into a freshly-allocated [`Bytes`]
    /// sized exactly to the wire length.
    pub fn encode_channel_open(&self, msg: &ChannelOpen<'_>) -> Result<Bytes> {
        let mut buf = vec![0u8; msg.wire_len()];
        let written = self.serialize_channel_open(msg, &mut buf)?;
        debug_assert_eq!(written, buf.len());
        Ok(Bytes::from(buf))
    }

    /// Encode a channel-ack message.
    pub fn encode_channel_ack(&self) -> Bytes {
        Bytes::copy_from_slice(&[MessageType::DataChannelAck.wire_value()])
    }
}
