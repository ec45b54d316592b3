//! Persistence for devlog documents.
//!
//! This module provides:
//! - **traits**: the `LedgerStore` interface
//! - **file**: a file-backed store with locking and atomic replace
//! - **lock**: the sidecar `flock(2)` guard serializing writers

pub mod file;
pub mod lock;
pub mod traits;

pub use file::FileLedger;
pub use lock::DocumentLock;
pub use traits::LedgerStore;
