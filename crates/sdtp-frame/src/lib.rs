//! Framed packet codec for SDTP.
//!
//! Every packet travels as one frame bounded by control bytes:
//! - A 1-byte start-of-header marker (`0x02`)
//! - A 16-byte header: id, data size, type, checksum (4 bytes each)
//! - The body (`data size` bytes)
//! - A 1-byte terminator (`0x04`)
//!
//! Header integers are written in the host's native byte order; the wire
//! format is deliberately not byte-order-portable (both ends of a serial
//! link are assumed to agree).

pub mod codec;
pub mod error;
pub mod packet;

pub use codec::{
    decode_packet, encode_packet, FRAME_OVERHEAD, HEADER_BYTES, START_OF_HEADER, TERMINATOR,
};
pub use error::{FrameError, Result};
pub use packet::{Packet, PacketHeader, PacketType};
