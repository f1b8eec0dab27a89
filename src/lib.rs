//! Dynapharm synchronization server library.
//!
//! A small file-backed HTTP API that lets the branch devices (point of
//! sale, consultation, dispensing) share clients, users, branches and
//! reports through one server instead of per-device local storage.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod storage;

pub use config::ServerConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use storage::{Collection, CollectionStore};
