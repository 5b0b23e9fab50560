//! Platform assignment buffer.
//!
//! A fixed-capacity circular buffer of train ids waiting for a platform.
//! Unlike the growable [`Queue`](crate::containers::Queue), this one rejects
//! new entries at capacity: a platform buffer that silently grew would hide
//! exactly the congestion it exists to surface.

use crate::domain::TrainId;

/// Default number of waiting slots at a platform.
pub const DEFAULT_PLATFORM_CAPACITY: usize = 5;

/// Error returned when enqueueing into a full platform buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("platform queue full: train {train} must wait")]
pub struct PlatformFull {
    /// The train that could not be admitted.
    pub train: TrainId,
}

/// Fixed-capacity circular FIFO of waiting trains.
///
/// All operations are O(1); indices wrap with modulo arithmetic.
#[derive(Debug, Clone)]
pub struct PlatformQueue {
    slots: Box<[Option<TrainId>]>,
    front: usize,
    len: usize,
}

impl PlatformQueue {
    /// Create a buffer with the given capacity (at least 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity.max(1)].into_boxed_slice(),
            front: 0,
            len: 0,
        }
    }

    /// Add a train at the back.
    ///
    /// Fails with [`PlatformFull`] at capacity; the buffer never grows.
    pub fn enqueue(&mut self, train: TrainId) -> Result<(), PlatformFull> {
        if self.is_full() {
            return Err(PlatformFull { train });
        }
        let back = (self.front + self.len) % self.slots.len();
        self.slots[back] = Some(train);
        self.len += 1;
        Ok(())
    }

    /// Remove and return the longest-waiting train.
    ///
    /// Returns `None` when the buffer is empty.
    pub fn dequeue(&mut self) -> Option<TrainId> {
        if self.len == 0 {
            return None;
        }
        let train = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        self.len -= 1;
        train
    }

    /// Whether the buffer is at capacity.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of waiting trains.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of waiting trains.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}

impl Default for PlatformQueue {
    fn default() -> Self {
        Self::new(DEFAULT_PLATFORM_CAPACITY)
    }
}
