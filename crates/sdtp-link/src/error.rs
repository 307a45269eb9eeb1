/// Errors that can occur in endpoint operations.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Reserved for transport-layer integration; the core never raises it.
    #[error("connection invalid or not established")]
    InvalidConnection,

    /// Packet failed to encode or decode.
    #[error("invalid packet: {0}")]
    InvalidPacket(#[from] sdtp_frame::FrameError),

    /// A staged write did not fit or did not fully commit.
    #[error("buffer failure: committed {written} of {expected} bytes")]
    BufferFailure { written: usize, expected: usize },

    /// Endpoint configuration requires a non-zero buffer capacity.
    #[error("buffer capacity must be non-zero")]
    ZeroCapacity,
}

pub type Result<T> = std::result::Result<T, LinkError>;
