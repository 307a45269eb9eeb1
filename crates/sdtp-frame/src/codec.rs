use bytes::{Buf, BufMut, Bytes, BytesMut};
use tracing::debug;

use crate::error::{FrameError, Result};
use crate::packet::{Packet, PacketHeader, PacketType};

/// Start-of-header marker, first byte of every frame.
pub const START_OF_HEADER: u8 = 0x02;

/// Terminator marker, last byte of every frame.
pub const TERMINATOR: u8 = 0x04;

/// Header section: id (4) + data_size (4) + type (4) + checksum (4).
pub const HEADER_BYTES: usize = 16;

/// Minimum frame size: marker + header + terminator, with an empty body.
pub const FRAME_OVERHEAD: usize = 1 + HEADER_BYTES + 1;

/// Encode a packet into its wire frame.
///
/// Wire layout:
/// ```text
/// ┌──────────┬─────────┬────────────┬─────────┬────────────┬────────────┬──────────┐
/// │ SOH (1B) │ id (4B) │ size (4B)  │ type    │ checksum   │ body       │ EOT (1B) │
/// │ 0x02     │ native  │ native     │ (4B)    │ (4B)       │ size bytes │ 0x04     │
/// └──────────┴─────────┴────────────┴─────────┴────────────┴────────────┴──────────┘
/// ```
///
/// All-or-nothing: on error nothing is returned, no partial frame exists.
pub fn encode_packet(packet: &Packet) -> Result<Bytes> {
    let body_len = packet.body.len();
    if body_len > u32::MAX as usize {
        return Err(FrameError::BodyTooLarge {
            size: body_len,
            max: u32::MAX as usize,
        });
    }

    // Guard the total-size arithmetic before reserving anything.
    let total = body_len
        .checked_add(FRAME_OVERHEAD)
        .ok_or(FrameError::BodyTooLarge {
            size: body_len,
            max: usize::MAX - FRAME_OVERHEAD,
        })?;

    let mut frame = BytesMut::with_capacity(total);
    frame.put_u8(START_OF_HEADER);
    frame.put_u32_ne(packet.header.id);
    frame.put_u32_ne(body_len as u32);
    frame.put_u32_ne(packet.header.packet_type as u32);
    frame.put_u32_ne(packet.header.checksum);
    frame.put_slice(&packet.body);
    frame.put_u8(TERMINATOR);

    debug_assert_eq!(frame.len(), total);
    Ok(frame.freeze())
}

/// Decode one wire frame into a packet.
///
/// The input must hold exactly at least one complete frame starting at byte
/// zero. Header fields are carried verbatim (sender's byte order); the
/// checksum field is not validated against the body.
pub fn decode_packet(input: &[u8]) -> Result<Packet> {
    if input.len() < FRAME_OVERHEAD {
        let err = FrameError::Truncated {
            len: input.len(),
            min: FRAME_OVERHEAD,
        };
        debug!(%err, "rejecting frame");
        return Err(err);
    }

    if input[0] != START_OF_HEADER {
        return Err(FrameError::BadStartOfHeader { found: input[0] });
    }

    let mut header = &input[1..1 + HEADER_BYTES];
    let id = header.get_u32_ne();
    let data_size = header.get_u32_ne() as usize;
    let type_tag = header.get_u32_ne();
    let checksum = header.get_u32_ne();

    // Declared body plus terminator must fit in the supplied input.
    let total = data_size
        .checked_add(FRAME_OVERHEAD)
        .ok_or(FrameError::BodyOverrun {
            declared: data_size,
            available: input.len(),
        })?;
    if total > input.len() {
        return Err(FrameError::BodyOverrun {
            declared: data_size,
            available: input.len(),
        });
    }

    let body_start = 1 + HEADER_BYTES;
    let terminator = input[body_start + data_size];
    if terminator != TERMINATOR {
        return Err(FrameError::BadTerminator { found: terminator });
    }

    let packet_type = PacketType::try_from(type_tag)?;

    Ok(Packet {
        header: PacketHeader {
            id,
            packet_type,
            checksum,
        },
        body: Bytes::copy_from_slice(&input[body_start..body_start + data_size]),
    })
}
