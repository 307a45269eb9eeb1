use bytes::Bytes;
use tracing::debug;

use sdtp_frame::{decode_packet, encode_packet, Packet, PacketType};
use sdtp_hal::{EntropyIdSource, IdSource};

use crate::buffer::{Direction, LinearBuffer, ReadMode};
use crate::config::LinkConfig;
use crate::error::{LinkError, Result};

/// One SDTP endpoint: a copied config plus one input and one output
/// staging buffer, created and dropped together.
///
/// The id source is injected at construction; packet ids never come from
/// process-global RNG state. Endpoints are single-threaded: callers driving
/// one endpoint from multiple threads must supply their own exclusion.
#[derive(Debug)]
pub struct Endpoint<I = EntropyIdSource> {
    config: LinkConfig,
    input: LinearBuffer,
    output: LinearBuffer,
    ids: I,
}

impl Endpoint<EntropyIdSource> {
    /// Create an endpoint with the default entropy-backed id source.
    ///
    /// Fails when `config.buffer_size` is zero; construction is atomic, no
    /// partially initialized endpoint exists on failure.
    pub fn new(config: LinkConfig) -> Result<Self> {
        Self::with_ids(config, EntropyIdSource::new())
    }
}

impl<I: IdSource> Endpoint<I> {
    /// Create an endpoint with an explicit id source.
    pub fn with_ids(config: LinkConfig, ids: I) -> Result<Self> {
        if config.buffer_size == 0 {
            return Err(LinkError::ZeroCapacity);
        }
        Ok(Self {
            config,
            input: LinearBuffer::new(config.buffer_size, Direction::Input),
            output: LinearBuffer::new(config.buffer_size, Direction::Output),
            ids,
        })
    }

    pub fn config(&self) -> &LinkConfig {
        &self.config
    }

    /// Buffer for `direction`.
    pub fn buffer(&self, direction: Direction) -> &LinearBuffer {
        match direction {
            Direction::Input => &self.input,
            Direction::Output => &self.output,
        }
    }

    /// Mutable buffer for `direction`. The transport integration layer uses
    /// this to feed received bytes in and drain staged bytes out.
    pub fn buffer_mut(&mut self, direction: Direction) -> &mut LinearBuffer {
        match direction {
            Direction::Input => &mut self.input,
            Direction::Output => &mut self.output,
        }
    }

    pub fn input(&self) -> &LinearBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut LinearBuffer {
        &mut self.input
    }

    pub fn output(&self) -> &LinearBuffer {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut LinearBuffer {
        &mut self.output
    }

    /// Clear the staging buffer for `direction`.
    pub fn clear(&mut self, direction: Direction) {
        self.buffer_mut(direction).clear();
    }

    /// Build a packet whose id comes from this endpoint's id source.
    /// Checksum is left zero (reserved field).
    pub fn construct_packet(&mut self, body: impl Into<Bytes>, packet_type: PacketType) -> Packet {
        Packet::new(self.ids.next_id(), packet_type, body)
    }

    /// Frame `packet` and stage it in the output buffer.
    ///
    /// Fails without touching the buffer when the frame exceeds the
    /// buffer's total capacity; the commit is re-verified against the
    /// buffer's own acceptance rules afterwards.
    pub fn write_packet(&mut self, packet: &Packet) -> Result<()> {
        let frame = encode_packet(packet)?;

        if frame.len() > self.output.capacity() {
            return Err(LinkError::BufferFailure {
                written: 0,
                expected: frame.len(),
            });
        }

        let written = self.output.write(&frame);
        if written != frame.len() {
            return Err(LinkError::BufferFailure {
                written,
                expected: frame.len(),
            });
        }

        debug!(
            id = packet.header.id,
            len = frame.len(),
            staged = self.output.used_space(),
            "packet staged for output"
        );
        Ok(())
    }

    /// Drain the input buffer's entire used space and decode one packet.
    ///
    /// Returns `Ok(None)` when the buffer is empty. The drain uses
    /// [`ReadMode::Partial`], so decode failures consume the bytes read.
    pub fn read_packet(&mut self) -> Result<Option<Packet>> {
        let used = self.input.used_space();
        if used == 0 {
            return Ok(None);
        }

        let mut scratch = vec![0u8; used];
        let drained = self.input.read(&mut scratch, ReadMode::Partial);
        let packet = decode_packet(&scratch[..drained])?;

        debug!(
            id = packet.header.id,
            body = packet.data_size(),
            "packet decoded from input"
        );
        Ok(Some(packet))
    }
}
