/// Errors that can occur at the hardware abstraction boundary.
#[derive(Debug, thiserror::Error)]
pub enum HalError {
    /// The channel has no connected peer or has been shut down.
    #[error("channel {0} is closed")]
    ChannelClosed(u8),

    /// An I/O error occurred on the underlying transport.
    #[error("bus I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HalError>;
