/// Byte-order strategy, resolved once when a codec context is created.
///
/// Both variants produce network byte order (big-endian) on the wire; they
/// differ only in what the host has to do to get there. [`ByteOrder::for_host`]
/// picks the right variant for the compilation target, but either variant can
/// be selected explicitly when a specific host assumption must be forced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Host integers are already most-significant byte first.
    Identity,
    /// Host is little-endian; values are byte-swapped on the way to the wire.
    Swapped,
}

impl ByteOrder {
    /// Resolve the strategy for the host this crate was compiled for.
    pub fn for_host() -> Self {
        if cfg!(target_endian = "big") {
            ByteOrder::Identity
        } else {
            ByteOrder::Swapped
        }
    }

    /// Write a `u16` into `dst` in network byte order.
    pub fn write_u16(self, dst: &mut [u8; 2], value: u16) {
        *dst = match self {
            ByteOrder::Identity => value.to_ne_bytes(),
            ByteOrder::Swapped => value.swap_bytes().to_ne_bytes(),
        };
    }

    /// Write a `u32` into `dst` in network byte order.
    pub fn write_u32(self, dst: &mut [u8; 4], value: u32) {
        *dst = match self {
            ByteOrder::Identity => value.to_ne_bytes(),
            ByteOrder::Swapped => value.swap_bytes().to_ne_bytes(),
        };
    }

    /// Read a network byte-order `u16` from `src`.
    pub fn read_u16(self, src: &[u8; 2]) -> u16 {
        let value = u16::from_ne_bytes(*src);
        match self {
            ByteOrder::Identity => value,
            ByteOrder::Swapped => value.swap_bytes(),
        }
    }

    /// Read a network byte-order `u32` from `src`.
    pub fn read_u32(self, src: &[u8; 4]) -> u32 {
        let value = u32::from_ne_bytes(*src);
        match self {
            ByteOrder::Identity => value,
            ByteOrder::Swapped => value.swap_bytes(),
        }
    }
}

impl Default for ByteOrder {
    fn default() -> Self {
        Self::for_host()
    }
}
