//! HTTP surface for the keyhole URL shortener.
//!
//! Routes, request/response models, and the mapping from service errors
//! to JSON error responses live here; the binary in `main.rs` wires a
//! storage backend from configuration and serves the router.

pub mod app;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;
