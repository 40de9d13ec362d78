//! Network byte-order primitives.
//!
//! DCEP, like the rest of the SCTP stack it rides on, puts every multi-byte
//! integer on the wire most-significant byte first. This crate provides the
//! read/write primitives the codec uses for that, with the host-order
//! strategy resolved once up front rather than branched per call.
//!
//! This is the lowest layer. The codec crate builds on top of the
//! [`ByteOrder`] type provided here.

pub mod order;

pub use order::ByteOrder;
