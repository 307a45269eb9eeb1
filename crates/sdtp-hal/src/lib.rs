//! Hardware abstraction for SDTP endpoints.
//!
//! The protocol core never touches wires or pins directly. It consumes two
//! narrow interfaces defined here:
//! - [`SerialBus`]: byte transmission on a numbered channel
//! - [`IdSource`]: non-deterministic integers for packet ids
//!
//! An outer integration layer drains an endpoint's output buffer into
//! [`SerialBus::send`] and feeds [`SerialBus::receive`] results into the
//! input buffer. [`LoopbackBus`] is an in-memory bus for tests and demos.

pub mod error;
pub mod ids;
pub mod loopback;
pub mod traits;

pub use error::{HalError, Result};
pub use ids::{EntropyIdSource, IdSource};
pub use loopback::LoopbackBus;
pub use traits::SerialBus;
