use std::collections::HashMap;
use std::collections::VecDeque;

use tracing::debug;

use crate::error::Result;
use crate::traits::SerialBus;

/// In-memory serial bus.
///
/// Each channel is an independent FIFO of transmissions: `send` enqueues,
/// `receive` drains everything pending on the channel. Useful for wiring
/// two endpoints together in tests and demos without hardware.
#[derive(Debug, Default)]
pub struct LoopbackBus {
    channels: HashMap<u8, VecDeque<Vec<u8>>>,
}

impl LoopbackBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of transmissions pending on `channel`.
    pub fn pending(&self, channel: u8) -> usize {
        self.channels.get(&channel).map_or(0, VecDeque::len)
    }
}

impl SerialBus for LoopbackBus {
    fn send(&mut self, bytes: &[u8], channel: u8) -> Result<()> {
        debug!(channel, len = bytes.len(), "loopback send");
        self.channels
            .entry(channel)
            .or_default()
            .push_back(bytes.to_vec());
        Ok(())
    }

    fn receive(&mut self, channel: u8) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        if let Some(queue) = self.channels.get_mut(&channel) {
            while let Some(chunk) = queue.pop_front() {
                out.extend_from_slice(&chunk);
            }
        }
        debug!(channel, len = out.len(), "loopback receive");
        Ok(out)
    }
}
