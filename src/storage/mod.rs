//! Collection persistence subsystem.
//!
//! # Data Flow
//! ```text
//! handler
//!     → store.rs (per-collection lock, load file → mutate → rewrite file)
//!     → seed.rs (defaults when a file does not exist yet)
//! ```

pub mod seed;
pub mod store;

pub use store::{Collection, CollectionStore, StoreError};
