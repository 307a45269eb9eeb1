use bytes::Bytes;

use crate::codec::HEADER_BYTES;
use crate::error::FrameError;

/// Packet type tags.
///
/// Only the tag travels on the wire; no core logic dispatches on it yet.
/// Handshake/disconnect/error semantics are reserved for a future protocol
/// state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum PacketType {
    Handshake = 0,
    Disconnect = 1,
    Error = 2,
    DataPacket = 3,
    DataStream = 4,
}

impl TryFrom<u32> for PacketType {
    type Error = FrameError;

    fn try_from(tag: u32) -> Result<Self, FrameError> {
        match tag {
            0 => Ok(PacketType::Handshake),
            1 => Ok(PacketType::Disconnect),
            2 => Ok(PacketType::Error),
            3 => Ok(PacketType::DataPacket),
            4 => Ok(PacketType::DataStream),
            other => Err(FrameError::UnknownPacketType(other)),
        }
    }
}

/// Header section of a packet.
///
/// The wire-format `data_size` field is not stored here; it is derived from
/// the body length, so a header/body length mismatch cannot exist in memory.
/// `checksum` is a reserved field: always zero at construction, carried
/// verbatim on decode, never validated (no algorithm is specified yet).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    pub id: u32,
    pub packet_type: PacketType,
    pub checksum: u32,
}

/// A packet: header plus owned body.
///
/// Single owning value; dropping it releases the body with it. There is no
/// way to hold a header without its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    pub header: PacketHeader,
    pub body: Bytes,
}

impl Packet {
    /// Create a packet with the given id. Empty bodies are fine.
    pub fn new(id: u32, packet_type: PacketType, body: impl Into<Bytes>) -> Self {
        Self {
            header: PacketHeader {
                id,
                packet_type,
                checksum: 0,
            },
            body: body.into(),
        }
    }

    /// Body length in bytes, as carried in the wire header.
    pub fn data_size(&self) -> usize {
        self.body.len()
    }

    /// Total serialized size of this packet (markers + header + body).
    pub fn wire_size(&self) -> usize {
        1 + HEADER_BYTES + self.body.len() + 1
    }

    /// Borrow the body as UTF-8 text, if it is valid UTF-8.
    pub fn body_utf8(&self) -> Result<&str, std::str::Utf8Error> {
        std::str::from_utf8(&self.body)
    }
}
