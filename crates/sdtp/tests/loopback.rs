//! End-to-end tests: two endpoints wired through an in-memory serial bus.
//!
//! The shuttling done here (drain output buffer → bus, bus → input buffer)
//! is exactly what a real transport integration layer does; the protocol
//! core itself never touches the bus.

use sdtp::{
    Direction, Endpoint, LinkConfig, LinkError, LoopbackBus, PacketType, ReadMode, SerialBus,
};

fn config(device_id: u32, out_channel: u8, in_channel: u8) -> LinkConfig {
    LinkConfig {
        input_channel: in_channel,
        output_channel: out_channel,
        buffer_size: 64,
        baud_rate: 9600,
        device_id,
        ..LinkConfig::default()
    }
}

/// Drain everything staged in `from`'s output buffer onto the bus.
fn pump_out(from: &mut Endpoint, bus: &mut LoopbackBus) {
    let staged = from.output().used_space();
    if staged == 0 {
        return;
    }
    let mut wire = vec![0u8; staged];
    let n = from.output_mut().read(&mut wire, ReadMode::Partial);
    bus.send(&wire[..n], from.config().output_channel).unwrap();
}

/// Feed everything pending on `to`'s input channel into its input buffer.
fn pump_in(to: &mut Endpoint, bus: &mut LoopbackBus) {
    let pending = bus.receive(to.config().input_channel).unwrap();
    if !pending.is_empty() {
        to.input_mut().write(&pending);
    }
}

#[test]
fn packet_crosses_the_bus() {
    let mut bus = LoopbackBus::new();
    let mut controller = Endpoint::new(config(1, 7, 8)).unwrap();
    let mut host = Endpoint::new(config(2, 8, 7)).unwrap();

    let packet = controller.construct_packet(&b"0123456789"[..], PacketType::DataPacket);
    controller.write_packet(&packet).unwrap();
    assert_eq!(controller.output().used_space(), 28);

    pump_out(&mut controller, &mut bus);
    pump_in(&mut host, &mut bus);
    assert_eq!(host.input().used_space(), 28);

    let received = host.read_packet().unwrap().expect("one packet on the wire");
    assert_eq!(received.data_size(), 10);
    assert_eq!(received.body.as_ref(), b"0123456789");
    assert_eq!(received.header.id, packet.header.id);
    assert!(host.input().is_empty());
}

#[test]
fn both_directions_carry_traffic() {
    let mut bus = LoopbackBus::new();
    let mut controller = Endpoint::new(config(1, 7, 8)).unwrap();
    let mut host = Endpoint::new(config(2, 8, 7)).unwrap();

    let ping = controller.construct_packet(&b"ping"[..], PacketType::DataPacket);
    controller.write_packet(&ping).unwrap();
    pump_out(&mut controller, &mut bus);
    pump_in(&mut host, &mut bus);

    let received = host.read_packet().unwrap().unwrap();
    assert_eq!(received.body.as_ref(), b"ping");

    let pong = host.construct_packet(&b"pong"[..], PacketType::DataPacket);
    host.write_packet(&pong).unwrap();
    pump_out(&mut host, &mut bus);
    pump_in(&mut controller, &mut bus);

    let received = controller.read_packet().unwrap().unwrap();
    assert_eq!(received.body.as_ref(), b"pong");
}

#[test]
fn empty_body_packet_crosses_the_bus() {
    let mut bus = LoopbackBus::new();
    let mut controller = Endpoint::new(config(1, 7, 8)).unwrap();
    let mut host = Endpoint::new(config(2, 8, 7)).unwrap();

    let packet = controller.construct_packet(&b""[..], PacketType::Handshake);
    controller.write_packet(&packet).unwrap();

    pump_out(&mut controller, &mut bus);
    pump_in(&mut host, &mut bus);

    let received = host.read_packet().unwrap().unwrap();
    assert_eq!(received.data_size(), 0);
    assert_eq!(received.header.packet_type, PacketType::Handshake);
}

#[test]
fn corrupted_wire_bytes_surface_as_invalid_packet() {
    let mut bus = LoopbackBus::new();
    let mut controller = Endpoint::new(config(1, 7, 8)).unwrap();
    let mut host = Endpoint::new(config(2, 8, 7)).unwrap();

    let packet = controller.construct_packet(&b"data"[..], PacketType::DataPacket);
    controller.write_packet(&packet).unwrap();

    // Corrupt the terminator in transit.
    let staged = controller.output().used_space();
    let mut wire = vec![0u8; staged];
    let n = controller.output_mut().read(&mut wire, ReadMode::Partial);
    wire[n - 1] = 0x00;
    bus.send(&wire[..n], 7).unwrap();

    pump_in(&mut host, &mut bus);
    assert!(matches!(
        host.read_packet(),
        Err(LinkError::InvalidPacket(_))
    ));
}

#[test]
fn stale_unread_input_is_displaced_by_newer_frame() {
    let mut bus = LoopbackBus::new();
    let mut controller = Endpoint::new(config(1, 7, 8)).unwrap();
    let mut host = Endpoint::new(config(2, 8, 7)).unwrap();

    // Three 28-byte frames into a 64-byte input buffer: the third no
    // longer fits the free space, so the buffer drops the two unread
    // frames and keeps only the newest.
    for body in [b"frame-one-", b"frame-two-", b"frame-3---"] {
        let packet = controller.construct_packet(&body[..], PacketType::DataPacket);
        controller.write_packet(&packet).unwrap();
        pump_out(&mut controller, &mut bus);
        pump_in(&mut host, &mut bus);
    }

    // Newest write wins: only the third frame remains.
    assert_eq!(host.input().used_space(), 28);
    let received = host.read_packet().unwrap().unwrap();
    assert_eq!(received.body.as_ref(), b"frame-3---");
}

#[test]
fn clear_discards_staged_output() {
    let mut controller = Endpoint::new(config(1, 7, 8)).unwrap();
    let packet = controller.construct_packet(&b"dropme"[..], PacketType::DataPacket);
    controller.write_packet(&packet).unwrap();

    controller.clear(Direction::Output);
    assert!(controller.output().is_empty());
}
