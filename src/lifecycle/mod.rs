//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     Load config → Open store → Bind listener → Serve
//!
//! Shutdown:
//!     SIGINT → broadcast → stop accepting → drain in-flight requests
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
