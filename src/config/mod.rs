//! Configuration management subsystem.
//!
//! The only external knob is the `PORT` environment variable; everything
//! else ships with defaults so a bare `cargo run` serves a working
//! instance next to its data directory.

pub mod schema;

pub use schema::{LimitConfig, ListenerConfig, ServerConfig, StorageConfig, TimeoutConfig};
