//! Storage backends and the record store for keyhole.
//!
//! This crate provides the [`Repository`](keyhole_core::Repository)
//! implementations (in-memory and MySQL), the identifier generator, and
//! [`RecordStore`] — the concrete [`UrlStore`](keyhole_core::UrlStore)
//! used by the services.

pub mod generator;
pub mod memory;
pub mod mysql;
pub mod store;

pub use generator::{HexIdGenerator, IdGenerator};
pub use memory::MemoryRepository;
pub use mysql::MySqlRepository;
pub use store::RecordStore;
