mod analysis;
mod registers;

use std::ops::Range;

pub use self::analysis::{InstAnalysis, MemoryAccess, MemoryAccessType};
pub use self::analysis::{Operand, OperandType, RegisterAccess};
pub use self::registers::{Arch, RegisterClass, RegisterSnapshot};

/// Trait giving access to the address space of the traced process.
///
/// It is implemented by the host engine (or by `itrace-linux` for a live
/// process on the same machine).
pub trait TraceeMemory {
    /// Error returned by this trait.
    type Error: std::error::Error;

    /// Reads data from the traced process's address space.
    fn read_memory(&self, addr: u64, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Reads a null-terminated string from the traced process's address
    /// space.
    ///
    /// Invalid UTF-8 sequences are replaced.
    fn read_cstring(&self, addr: u64) -> Result<String, Self::Error>;

    /// Enumerates the memory mappings of the traced process.
    fn memory_maps(&self) -> Result<Vec<MemoryMap>, Self::Error>;

    /// Heap-introspection hook: enumerates the live allocations (chunks)
    /// of the process allocator lying within the given range.
    ///
    /// Returns `None` when introspection is unavailable.
    fn live_allocations(&self, _within: &Range<u64>) -> Option<Vec<Range<u64>>> {
        None
    }
}

impl<T: TraceeMemory + ?Sized> TraceeMemory for &T {
    type Error = T::Error;

    fn read_memory(&self, addr: u64, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).read_memory(addr, buf)
    }

    fn read_cstring(&self, addr: u64) -> Result<String, Self::Error> {
        (**self).read_cstring(addr)
    }

    fn memory_maps(&self) -> Result<Vec<MemoryMap>, Self::Error> {
        (**self).memory_maps()
    }

    fn live_allocations(&self, within: &Range<u64>) -> Option<Vec<Range<u64>>> {
        (**self).live_allocations(within)
    }
}

/// Memory mapping of the traced process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryMap {
    /// Address range of the mapping.
    pub range: Range<u64>,

    /// Access permissions (e.g., `rw-p`).
    pub perms: String,

    /// Backing file path or pseudo-name (e.g., `[heap]`), empty for
    /// anonymous mappings.
    pub name: String,
}

impl MemoryMap {
    /// Returns whether the mapping contains the given address.
    pub fn contains(&self, addr: u64) -> bool {
        self.range.contains(&addr)
    }
}
