//! Two endpoints exchanging packets over an in-memory serial bus.
//!
//! Run with:
//!   cargo run --example loopback

use sdtp::{Endpoint, LinkConfig, LoopbackBus, PacketType, ReadMode, SerialBus};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut bus = LoopbackBus::new();

    let mut controller = Endpoint::new(LinkConfig {
        input_channel: 8,
        output_channel: 7,
        device_id: 1,
        ..LinkConfig::default()
    })?;
    let mut host = Endpoint::new(LinkConfig {
        input_channel: 7,
        output_channel: 8,
        device_id: 2,
        ..LinkConfig::default()
    })?;

    // Controller stages a packet.
    let packet = controller.construct_packet(&b"telemetry sample"[..], PacketType::DataPacket);
    controller.write_packet(&packet)?;
    eprintln!(
        "Staged packet {:#010x} ({} wire bytes)",
        packet.header.id,
        packet.wire_size()
    );

    // Transport layer: drain output buffer onto the bus.
    let mut wire = vec![0u8; controller.output().used_space()];
    let n = controller.output_mut().read(&mut wire, ReadMode::Partial);
    bus.send(&wire[..n], controller.config().output_channel)?;

    // Transport layer: feed pending bus bytes into the host's input buffer.
    let pending = bus.receive(host.config().input_channel)?;
    host.input_mut().write(&pending);

    // Host decodes the packet.
    let received = host.read_packet()?.expect("one packet pending");
    eprintln!(
        "Received packet {:#010x}: {:?}",
        received.header.id,
        received.body_utf8()?
    );

    Ok(())
}
