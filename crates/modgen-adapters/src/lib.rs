//! Infrastructure adapters for modgen.
//!
//! Implements the `Filesystem` port from `modgen-core`:
//! - [`LocalFilesystem`] — production, backed by `std::fs`
//! - [`MemoryFilesystem`] — in-process double for tests

pub mod filesystem;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
