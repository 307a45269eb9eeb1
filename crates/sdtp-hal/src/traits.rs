use crate::error::Result;

/// Byte transmission on numbered channels.
///
/// Implementations own the physical medium (UART, GPIO bit-banging, an
/// in-memory pair for tests). The protocol core never calls this trait
/// itself; the integration layer shuttles bytes between a bus and an
/// endpoint's staging buffers.
pub trait SerialBus {
    /// Transmit `bytes` on `channel`.
    fn send(&mut self, bytes: &[u8], channel: u8) -> Result<()>;

    /// Receive whatever bytes are currently pending on `channel`.
    ///
    /// Returns an empty vector when nothing is pending. Blocking behavior
    /// is implementation-defined; the reference loopback never blocks.
    fn receive(&mut self, channel: u8) -> Result<Vec<u8>>;
}
