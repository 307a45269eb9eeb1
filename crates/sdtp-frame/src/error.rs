/// Errors that can occur during packet encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The input is shorter than the minimum framed packet.
    #[error("frame truncated ({len} bytes, minimum {min})")]
    Truncated { len: usize, min: usize },

    /// The first byte is not the start-of-header marker.
    #[error("invalid start-of-header byte 0x{found:02x} (expected 0x02)")]
    BadStartOfHeader { found: u8 },

    /// The byte after the body is not the terminator marker.
    #[error("invalid terminator byte 0x{found:02x} (expected 0x04)")]
    BadTerminator { found: u8 },

    /// The declared body size does not fit in the supplied input.
    #[error("declared body size {declared} overruns frame ({available} bytes available)")]
    BodyOverrun { declared: usize, available: usize },

    /// The header carries a packet-type tag outside the known set.
    #[error("unknown packet type tag {0}")]
    UnknownPacketType(u32),

    /// The body is too large to describe in the 32-bit size field.
    #[error("body too large ({size} bytes, max {max})")]
    BodyTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
