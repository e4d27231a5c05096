//! Memory provenance tracking.
//!
//! The [MemoryTracker] keeps the list of memory blocks (mappings observed
//! through `mmap`, or recovered when an unknown address is resolved) and
//! resolves addresses to `(offset, block index)` pairs. Blocks are dumped
//! to a file when they're removed.

mod dump;

use std::ops::Range;
use std::path::Path;

use indexmap::IndexMap;

use self::dump::{BlockContent, DumpWriter};
use crate::engine::TraceeMemory;
use crate::error::Result;

/// Memory block tracked by a [MemoryTracker].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemoryBlock {
    /// Unique, strictly increasing index of the block.
    pub memory_index: u64,

    /// Start address of the block.
    pub start: u64,

    /// End address of the block.
    pub end: u64,
}

impl MemoryBlock {
    /// Size of the block, in bytes.
    pub const fn size(&self) -> u64 {
        self.end - self.start
    }

    /// Returns whether the block contains the given address.
    ///
    /// The end address is considered part of the block.
    pub const fn contains(&self, addr: u64) -> bool {
        self.start <= addr && addr <= self.end
    }

    const fn intersects(&self, start: u64, end: u64) -> bool {
        start <= self.end && self.start <= end
    }
}

/// Tracker of the memory blocks of the traced process.
///
/// No two tracked blocks ever overlap (blocks recovered from the traced
/// process may share a boundary address with a tracked block), and block
/// indexes are never reused.
#[derive(Debug, Default)]
pub struct MemoryTracker {
    blocks: IndexMap<u64, MemoryBlock>,
    next_index: u64,
    dump: Option<DumpWriter>,
    snapshot: Option<BlockContent>,
}

impl MemoryTracker {
    /// Creates an empty tracker, without a dump file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens (and truncates) the file that removed blocks are dumped to.
    ///
    /// A previously opened dump file is flushed and closed.
    pub fn set_dump_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let writer = DumpWriter::create(path)?;
        tracing::debug!(path = %writer.path().display(), "memory dump file opened");

        if let Some(previous) = self.dump.replace(writer) {
            previous.finish()?;
        }

        Ok(())
    }

    /// Returns whether a dump file is open.
    pub const fn has_dump(&self) -> bool {
        self.dump.is_some()
    }

    /// Starts tracking the block `[addr, addr+size]`.
    ///
    /// Returns `false` (and tracks nothing) if the block is empty or
    /// overlaps an already tracked block.
    pub fn add_memory(&mut self, addr: u64, size: u64) -> bool {
        let end = addr.saturating_add(size);

        if size == 0 {
            return false;
        }

        if let Some(other) = self.blocks.values().find(|b| b.intersects(addr, end)) {
            tracing::debug!(
                addr = format_args!("{addr:#x}"),
                size = format_args!("{size:#x}"),
                index = other.memory_index,
                "memory block overlaps a tracked block"
            );
            return false;
        }

        self.insert(addr, end);
        true
    }

    /// Stops tracking the block starting at `addr`, dumping its content.
    ///
    /// Returns `false` if no tracked block starts at `addr`.
    pub fn remove_memory<M: TraceeMemory>(&mut self, mem: &M, addr: u64) -> bool {
        let Some(block) = self.blocks.get(&addr).copied() else {
            tracing::trace!(addr = format_args!("{addr:#x}"), "untracked memory freed");
            return false;
        };

        self.dump_block(mem, &block);
        self.blocks.shift_remove(&addr);

        tracing::debug!(
            index = block.memory_index,
            addr = format_args!("{addr:#x}"),
            "memory block removed"
        );

        true
    }

    /// Captures the content of the block starting at `addr`, which is about
    /// to be freed, so that [remove_memory](Self::remove_memory) dumps it
    /// even once it's no longer readable.
    ///
    /// Only one capture is kept at a time. Returns `false` (and captures
    /// nothing) if no dump file is open, or no tracked block starts at
    /// `addr`.
    pub fn snapshot_memory<M: TraceeMemory>(&mut self, mem: &M, addr: u64) -> bool {
        if self.dump.is_none() {
            return false;
        }

        let Some(block) = self.blocks.get(&addr) else {
            return false;
        };

        let content = BlockContent::read(mem, block);
        tracing::trace!(
            index = block.memory_index,
            len = content.bytes.len(),
            "memory block captured before being freed"
        );

        self.snapshot = Some(content);
        true
    }

    /// Drops the content captured by [snapshot_memory](Self::snapshot_memory),
    /// if it wasn't used.
    pub fn discard_snapshot(&mut self) {
        if let Some(content) = self.snapshot.take() {
            tracing::trace!(index = content.memory_index, "memory block capture discarded");
        }
    }

    /// Returns whether `addr` lies within a tracked block.
    pub fn is_in_memory(&self, addr: u64) -> bool {
        self.find(addr).is_some()
    }

    /// Resolves `addr` to its `(offset, block index)`.
    ///
    /// If no tracked block contains `addr`, a new block is recovered from
    /// the traced process: the heap chunk containing `addr` if the memory
    /// supports heap introspection, or else the memory mapping containing
    /// `addr` (clipped to not overlap tracked blocks).
    ///
    /// Returns `None` only if `addr` isn't mapped in the traced process.
    pub fn get_memory_offset<M: TraceeMemory>(&mut self, mem: &M, addr: u64) -> Option<(u64, u64)> {
        let block = match self.find(addr) {
            Some(block) => *block,
            None => self.recover(mem, addr)?,
        };

        Some((addr - block.start, block.memory_index))
    }

    /// Dumps and drops every tracked block, then closes the dump file.
    ///
    /// Calling it again is a no-op.
    pub fn clear<M: TraceeMemory>(&mut self, mem: &M) {
        let blocks: Vec<_> = self.blocks.drain(..).map(|(_, block)| block).collect();

        for block in &blocks {
            self.dump_block(mem, block);
        }

        self.snapshot = None;

        if let Some(dump) = self.dump.take() {
            if let Err(e) = dump.finish() {
                tracing::warn!("failed to flush memory dump: {e}");
            }
        }

        if !blocks.is_empty() {
            tracing::debug!(count = blocks.len(), "memory tracker cleared");
        }
    }

    /// Iterates over the tracked blocks, in insertion order.
    pub fn blocks(&self) -> impl Iterator<Item = &MemoryBlock> {
        self.blocks.values()
    }

    /// Number of tracked blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns whether no block is tracked.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    fn find(&self, addr: u64) -> Option<&MemoryBlock> {
        self.blocks.values().find(|b| b.contains(addr))
    }

    fn insert(&mut self, start: u64, end: u64) -> MemoryBlock {
        let block = MemoryBlock {
            memory_index: self.next_index,
            start,
            end,
        };
        self.next_index += 1;
        self.blocks.insert(start, block);

        tracing::debug!(
            index = block.memory_index,
            start = format_args!("{start:#x}"),
            end = format_args!("{end:#x}"),
            "memory block tracked"
        );

        block
    }

    fn recover<M: TraceeMemory>(&mut self, mem: &M, addr: u64) -> Option<MemoryBlock> {
        let maps = mem
            .memory_maps()
            .inspect_err(|e| tracing::warn!("failed to enumerate memory maps: {e}"))
            .ok()?;

        let Some(map) = maps.iter().find(|map| map.contains(addr)) else {
            tracing::debug!(addr = format_args!("{addr:#x}"), "address is not mapped");
            return None;
        };

        let chunk = mem
            .live_allocations(&map.range)
            .and_then(|chunks| chunks.into_iter().find(|chunk| chunk.contains(&addr)));

        let range = match chunk {
            Some(chunk) => chunk,
            None => {
                tracing::debug!(
                    addr = format_args!("{addr:#x}"),
                    map = %map.name,
                    "no heap chunk found, tracking the whole mapping"
                );
                map.range.clone()
            }
        };

        let range = self.clip(range, addr);
        Some(self.insert(range.start, range.end))
    }

    /// Shrinks a range containing `addr` (untracked) so that it doesn't
    /// overlap any tracked block.
    ///
    /// The result may share a boundary address with a tracked block: such an
    /// address keeps resolving to the block tracked first.
    fn clip(&self, range: Range<u64>, addr: u64) -> Range<u64> {
        self.blocks.values().fold(range, |range, block| {
            if block.end < addr {
                range.start.max(block.end)..range.end
            } else {
                range.start..range.end.min(block.start)
            }
        })
    }

    fn dump_block<M: TraceeMemory>(&mut self, mem: &M, block: &MemoryBlock) {
        let Some(dump) = self.dump.as_mut() else {
            return;
        };

        let res = match self.snapshot.take() {
            Some(content) if content.is_of(block) => dump.write_content(block, &content),
            snapshot => {
                self.snapshot = snapshot;
                dump.write_block(mem, block)
            }
        };

        if let Err(e) = res {
            tracing::warn!(index = block.memory_index, "failed to dump memory block: {e}");
        }
    }
}
