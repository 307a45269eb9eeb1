//! Endpoint layer for SDTP.
//!
//! An [`Endpoint`] is one protocol endpoint's complete state: a copied
//! [`LinkConfig`] plus one input and one output [`LinearBuffer`]. Packets
//! written through the endpoint are framed by `sdtp-frame` and staged in
//! the output buffer; bytes fed into the input buffer are drained and
//! decoded back into packets. Draining buffers to the physical transport
//! is the integration layer's job (see `sdtp-hal`).

pub mod buffer;
pub mod config;
pub mod endpoint;
pub mod error;

pub use buffer::{Direction, LinearBuffer, ReadMode};
pub use config::{DeviceType, LinkConfig};
pub use endpoint::Endpoint;
pub use error::{LinkError, Result};
