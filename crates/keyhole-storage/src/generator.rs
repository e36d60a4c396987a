pub mod seq;

use keyhole_core::short_id::{ShortId, SHORT_ID_BYTES};
use rand::RngExt;

/// Trait for generating candidate short identifiers.
///
/// Implementations are pure generators that don't interact with storage;
/// uniqueness is enforced at insert time by the store, which retries on
/// conflict.
pub trait IdGenerator: Send + Sync + 'static {
    /// Generates a candidate short identifier.
    fn generate(&self) -> ShortId;
}

/// Generates identifiers from random bytes rendered as lowercase hex.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexIdGenerator;

impl IdGenerator for HexIdGenerator {
    fn generate(&self) -> ShortId {
        let mut bytes = [0u8; SHORT_ID_BYTES];
        rand::rng().fill(&mut bytes);
        ShortId::from_bytes(bytes)
    }
}
