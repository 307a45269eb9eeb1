use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Source of packet identifiers.
///
/// Ids are not required to be unique, only non-deterministic enough that
/// two endpoints are unlikely to mint the same id back to back. Injected
/// at endpoint construction so no process-global RNG state is involved.
pub trait IdSource {
    /// Produce the next packet id.
    fn next_id(&mut self) -> u32;
}

/// OS-entropy backed id source. The default for production endpoints.
#[derive(Debug)]
pub struct EntropyIdSource {
    rng: StdRng,
}

impl EntropyIdSource {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for EntropyIdSource {
    fn next_id(&mut self) -> u32 {
        self.rng.gen()
    }
}

impl<R: RngCore> IdSource for R {
    fn next_id(&mut self) -> u32 {
        self.next_u32()
    }
}
