use tracing::warn;

/// Direction a staging buffer serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Input,
    Output,
}

/// Read modes for [`LinearBuffer::read`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadMode {
    /// Read, then zero the entire region and reset the cursors, even when
    /// the caller consumed fewer bytes than were available.
    Full,
    /// Read a prefix, compact the remainder to the front of the region.
    Partial,
    /// Read without mutating the buffer.
    Peek,
}

/// Fixed-capacity linear staging buffer for one direction of a link.
///
/// Not a ring: `head` stays anchored at the region origin, valid bytes live
/// in `head..tail`, and a partial read physically shifts the remainder down
/// to the front. When a write does not fit into the free space, the stale
/// unread contents are discarded and the new bytes become the entire
/// contents: newest write wins.
///
/// All cursor arithmetic is offset-based and bounds-checked through slice
/// indexing; there is no pointer arithmetic to overflow.
#[derive(Debug)]
pub struct LinearBuffer {
    direction: Direction,
    region: Vec<u8>,
    head: usize,
    tail: usize,
}

impl LinearBuffer {
    /// Create a zero-initialized buffer. `capacity` of zero yields a buffer
    /// with no storage, which rejects every write.
    pub fn new(capacity: usize, direction: Direction) -> Self {
        Self {
            direction,
            region: vec![0; capacity],
            head: 0,
            tail: 0,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Total capacity of the region in bytes.
    pub fn capacity(&self) -> usize {
        self.region.len()
    }

    /// Number of valid unread bytes currently held.
    pub fn used_space(&self) -> usize {
        self.tail - self.head
    }

    pub fn is_empty(&self) -> bool {
        self.used_space() == 0
    }

    /// Append `source` to the buffer. Returns the number of bytes written:
    /// either all of them or zero.
    ///
    /// Rejected outright (returns 0, no mutation) when `source` is empty or
    /// `source.len() >= capacity`; a write exactly filling the region is
    /// rejected too, keeping at least one byte of headroom. When `source`
    /// fits the region but not the free space, the stale contents are
    /// zeroed and dropped, and `source` becomes the entire contents.
    pub fn write(&mut self, source: &[u8]) -> usize {
        if source.is_empty() || source.len() >= self.capacity() {
            return 0;
        }

        let used = self.used_space();
        let free = self.capacity() - used;

        if source.len() > free {
            warn!(
                direction = ?self.direction,
                dropped = used,
                incoming = source.len(),
                "staging buffer overflow, discarding unread data"
            );
            self.region[self.head..self.head + used].fill(0);
            self.region[self.head..self.head + source.len()].copy_from_slice(source);
            self.tail = self.head + source.len();
            return source.len();
        }

        self.region[self.tail..self.tail + source.len()].copy_from_slice(source);
        self.tail += source.len();
        source.len()
    }

    /// Read up to `destination.len()` bytes from the front of the buffer.
    /// Returns the number of bytes copied: `min(destination.len(), used)`.
    ///
    /// `head` is never moved by any mode. `Partial` compacts the remainder
    /// to the region origin and pulls `tail` back by the consumed length;
    /// the "start" of the valid data is always the region origin.
    pub fn read(&mut self, destination: &mut [u8], mode: ReadMode) -> usize {
        let used = self.used_space();
        if used == 0 || destination.is_empty() {
            return 0;
        }

        let len = destination.len().min(used);
        destination[..len].copy_from_slice(&self.region[self.head..self.head + len]);

        match mode {
            ReadMode::Full => {
                // The whole region, not just the used prefix.
                self.region.fill(0);
                self.tail = self.head;
            }
            ReadMode::Partial => {
                if len < used {
                    self.region
                        .copy_within(self.head + len..self.head + used, self.head);
                }
                self.tail -= len;
            }
            ReadMode::Peek => {}
        }

        len
    }

    /// Zero the used region and reset `tail`. No-op when already empty.
    pub fn clear(&mut self) {
        let used = self.used_space();
        if used == 0 {
            return;
        }
        self.region[self.head..self.head + used].fill(0);
        self.tail = self.head;
    }
}
