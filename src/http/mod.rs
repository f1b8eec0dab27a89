//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, CORS header)
//!     → handlers.rs (method+path dispatch, body parsing)
//!     → [storage layer: load → mutate → rewrite]
//!     → response.rs (JSON envelopes, always status 200)
//! ```

pub mod handlers;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
