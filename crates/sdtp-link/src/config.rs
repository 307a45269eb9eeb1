/// Kind of device an endpoint represents.
///
/// Closed set with a single variant today; the wire format reserves room
/// for more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceType {
    #[default]
    Controller,
}

/// Configuration for one SDTP endpoint.
///
/// Copied by value into the endpoint at construction; later mutation of the
/// caller's copy is not observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkConfig {
    /// Channel (pin) identifier for the input direction.
    pub input_channel: u8,
    /// Channel (pin) identifier for the output direction.
    pub output_channel: u8,
    /// Capacity in bytes of each staging buffer. Must be non-zero to
    /// construct an endpoint.
    pub buffer_size: usize,
    /// Link bit rate in bits per second.
    pub baud_rate: u32,
    /// Numeric device identifier.
    pub device_id: u32,
    /// Kind of device this endpoint represents.
    pub device_type: DeviceType,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            input_channel: 0,
            output_channel: 1,
            buffer_size: 256,
            baud_rate: 9600,
            device_id: 0,
            device_type: DeviceType::Controller,
        }
    }
}
