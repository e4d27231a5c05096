//! This crate gives the itrace recorder access to the memory of a live
//! Linux process.
//!
//! [ProcessMemory] implements [TraceeMemory](itrace_recorder::engine::TraceeMemory)
//! on top of `process_vm_readv` and `/proc/<pid>/maps`. Heap introspection
//! isn't available from outside the traced process, so unknown addresses
//! are resolved at the granularity of memory mappings.

mod error;

/// Module parsing `/proc/<pid>/maps` files.
pub mod maps;

#[cfg(target_os = "linux")]
mod mem;

#[cfg(target_os = "linux")]
mod process;

pub use self::error::{Error, Result};

#[cfg(target_os = "linux")]
pub use self::mem::MAX_CSTRING_LEN;

#[cfg(target_os = "linux")]
pub use self::process::ProcessMemory;
