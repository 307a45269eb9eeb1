//! SDTP: a minimal point-to-point data-transfer protocol for low-bandwidth
//! serial links between an embedded controller and a host.
//!
//! This crate re-exports the three layers:
//! - [`hal`]: the narrow hardware interfaces the core consumes
//! - [`frame`]: the packet data model and framed wire codec
//! - [`link`]: endpoint state (config, staging buffers, packet I/O)
//!
//! # Example
//!
//! ```
//! use sdtp::{Endpoint, LinkConfig, PacketType, ReadMode};
//!
//! let mut sender = Endpoint::new(LinkConfig::default())?;
//! let mut receiver = Endpoint::new(LinkConfig::default())?;
//!
//! let packet = sender.construct_packet(&b"hello"[..], PacketType::DataPacket);
//! sender.write_packet(&packet)?;
//!
//! // A transport integration layer shuttles the staged bytes across.
//! let mut wire = vec![0u8; sender.output().used_space()];
//! let n = sender.output_mut().read(&mut wire, ReadMode::Partial);
//! receiver.input_mut().write(&wire[..n]);
//!
//! let received = receiver.read_packet()?.expect("one packet staged");
//! assert_eq!(received.body.as_ref(), b"hello");
//! # Ok::<(), sdtp::LinkError>(())
//! ```

pub use sdtp_frame as frame;
pub use sdtp_hal as hal;
pub use sdtp_link as link;

pub use sdtp_frame::{
    decode_packet, encode_packet, FrameError, Packet, PacketHeader, PacketType, FRAME_OVERHEAD,
    HEADER_BYTES, START_OF_HEADER, TERMINATOR,
};
pub use sdtp_hal::{EntropyIdSource, HalError, IdSource, LoopbackBus, SerialBus};
pub use sdtp_link::{
    DeviceType, Direction, Endpoint, LinearBuffer, LinkConfig, LinkError, ReadMode,
};
