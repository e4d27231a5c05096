use std::cell::RefCell;
use std::ops::Range;

use itrace_recorder::engine::{MemoryMap, TraceeMemory};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unmapped address {0:#x}")]
    Unmapped(u64),

    #[error("maps unavailable")]
    NoMaps,
}

/// In-memory stand-in for the address space of a traced process.
#[derive(Default)]
pub struct FakeMemory {
    regions: RefCell<Vec<(u64, Vec<u8>)>>,
    maps: Option<Vec<MemoryMap>>,
    chunks: Option<Vec<Range<u64>>>,
}

impl FakeMemory {
    pub fn new() -> Self {
        Self {
            maps: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Memory whose maps can't be enumerated.
    pub fn without_maps() -> Self {
        Self::default()
    }

    /// Adds readable bytes at `addr`, without a mapping.
    pub fn with_bytes(mut self, addr: u64, bytes: impl Into<Vec<u8>>) -> Self {
        self.regions.get_mut().push((addr, bytes.into()));
        self
    }

    /// Adds a null-terminated string at `addr`.
    pub fn with_string(self, addr: u64, s: &str) -> Self {
        let mut bytes = s.as_bytes().to_vec();
        bytes.push(0);
        self.with_bytes(addr, bytes)
    }

    /// Adds a mapping (whose content isn't readable unless bytes are added).
    pub fn with_map(mut self, range: Range<u64>, name: &str) -> Self {
        self.maps.get_or_insert_with(Vec::new).push(MemoryMap {
            range,
            perms: "rw-p".to_owned(),
            name: name.to_owned(),
        });
        self
    }

    /// Enables heap introspection, with the given live chunks.
    pub fn with_chunks(mut self, chunks: impl Into<Vec<Range<u64>>>) -> Self {
        self.chunks = Some(chunks.into());
        self
    }

    /// Drops the bytes added at `addr`, as the traced process would when
    /// unmapping them.
    pub fn unmap(&self, addr: u64) {
        self.regions.borrow_mut().retain(|(start, _)| *start != addr);
    }

    fn with_region<T>(&self, addr: u64, f: impl FnOnce(&[u8]) -> Option<T>) -> Option<T> {
        let regions = self.regions.borrow();
        let bytes = regions.iter().find_map(|(start, bytes)| {
            let offset = addr.checked_sub(*start)? as usize;
            bytes.get(offset..)
        })?;

        f(bytes)
    }
}

impl TraceeMemory for FakeMemory {
    type Error = Error;

    fn read_memory(&self, addr: u64, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.with_region(addr, |bytes| {
            buf.copy_from_slice(bytes.get(..buf.len())?);
            Some(())
        })
        .ok_or(Error::Unmapped(addr))
    }

    fn read_cstring(&self, addr: u64) -> Result<String, Self::Error> {
        self.with_region(addr, |bytes| {
            let len = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
            Some(String::from_utf8_lossy(&bytes[..len]).into_owned())
        })
        .ok_or(Error::Unmapped(addr))
    }

    fn memory_maps(&self) -> Result<Vec<MemoryMap>, Self::Error> {
        self.maps.clone().ok_or(Error::NoMaps)
    }

    fn live_allocations(&self, within: &Range<u64>) -> Option<Vec<Range<u64>>> {
        let chunks = self.chunks.as_ref()?;

        Some(
            chunks
                .iter()
                .filter(|chunk| within.start <= chunk.start && chunk.end <= within.end)
                .cloned()
                .collect(),
        )
    }
}
