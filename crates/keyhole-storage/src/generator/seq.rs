use super::IdGenerator;
use keyhole_core::ShortId;
use std::sync::atomic::{AtomicU32, Ordering};

/// Deterministic generator for tests: counts up from a starting value,
/// rendering the low 24 bits of the counter as 6 hex characters.
#[derive(Debug, Default)]
pub struct SeqIdGenerator {
    next: AtomicU32,
}

impl SeqIdGenerator {
    /// Creates a generator counting up from zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator counting up from the given value.
    pub fn starting_at(value: u32) -> Self {
        Self {
            next: AtomicU32::new(value),
        }
    }
}

impl IdGenerator for SeqIdGenerator {
    fn generate(&self) -> ShortId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        let bytes = n.to_be_bytes();
        ShortId::from_bytes([bytes[1], bytes[2], bytes[3]])
    }
}
