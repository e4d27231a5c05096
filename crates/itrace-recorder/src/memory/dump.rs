use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::MemoryBlock;
use crate::engine::TraceeMemory;
use crate::error::{Error, Result};

/// Number of bytes per hex-dump line.
const DUMP_ROW_SIZE: usize = 32;

/// Number of bytes read from the traced process at once.
const DUMP_READ_SIZE: usize = 0x1000;

/// Writer of the memory dump file.
///
/// Each dumped block is a header line followed by its content, as
/// hexadecimal rows.
#[derive(Debug)]
pub(crate) struct DumpWriter {
    path: PathBuf,
    out: BufWriter<File>,
}

impl DumpWriter {
    /// Creates (or truncates) the dump file at the given path.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| Error::File(path.clone(), e))?;

        Ok(Self {
            path,
            out: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Dumps a block, read from the traced process.
    ///
    /// If the block content can't be read (e.g., it was already unmapped),
    /// the hex rows stop at the first unreadable byte and a
    /// `<unreadable: ...>` line is written instead.
    pub fn write_block<M: TraceeMemory>(&mut self, mem: &M, block: &MemoryBlock) -> io::Result<()> {
        self.write_header(block)?;

        let out = &mut self.out;
        let unreadable = read_chunks(mem, block, |chunk| write_rows(&mut *out, chunk))?;

        self.write_trailer(unreadable.as_deref())
    }

    /// Dumps a block from content captured earlier.
    pub fn write_content(&mut self, block: &MemoryBlock, content: &BlockContent) -> io::Result<()> {
        self.write_header(block)?;
        write_rows(&mut self.out, &content.bytes)?;
        self.write_trailer(content.unreadable.as_deref())
    }

    fn write_header(&mut self, block: &MemoryBlock) -> io::Result<()> {
        writeln!(
            self.out,
            "memory block index:{} size:{} address:{:#x}",
            block.memory_index,
            block.size(),
            block.start
        )
    }

    fn write_trailer(&mut self, unreadable: Option<&str>) -> io::Result<()> {
        if let Some(e) = unreadable {
            writeln!(self.out, "<unreadable: {e}>")?;
        }
        self.out.flush()
    }

    /// Flushes and closes the dump file.
    pub fn finish(mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Content of a block, captured from the traced process.
#[derive(Debug)]
pub(crate) struct BlockContent {
    /// Start address of the block.
    pub start: u64,

    /// Index of the block.
    pub memory_index: u64,

    /// Readable prefix of the block.
    pub bytes: Vec<u8>,

    /// Error that stopped the capture, if any.
    pub unreadable: Option<String>,
}

impl BlockContent {
    /// Captures the content of a block.
    pub fn read<M: TraceeMemory>(mem: &M, block: &MemoryBlock) -> Self {
        let mut bytes = Vec::new();
        let unreadable = read_chunks(mem, block, |chunk| {
            bytes.extend_from_slice(chunk);
            Ok(())
        })
        .unwrap_or_else(|e| Some(e.to_string()));

        Self {
            start: block.start,
            memory_index: block.memory_index,
            bytes,
            unreadable,
        }
    }

    /// Returns whether this is the content of the given block.
    pub const fn is_of(&self, block: &MemoryBlock) -> bool {
        self.start == block.start && self.memory_index == block.memory_index
    }
}

/// Reads a block chunk by chunk, handing every chunk to `f`.
///
/// Returns the read error that stopped the reading early, if any.
fn read_chunks<M: TraceeMemory>(
    mem: &M,
    block: &MemoryBlock,
    mut f: impl FnMut(&[u8]) -> io::Result<()>,
) -> io::Result<Option<String>> {
    let mut buf = vec![0u8; DUMP_READ_SIZE];
    let mut addr = block.start;

    while addr < block.end {
        let len = (block.end - addr).min(DUMP_READ_SIZE as u64) as usize;
        let chunk = &mut buf[..len];

        if let Err(e) = mem.read_memory(addr, chunk) {
            tracing::debug!(
                index = block.memory_index,
                addr = format_args!("{addr:#x}"),
                "memory block partially unreadable: {e}"
            );
            return Ok(Some(e.to_string()));
        }

        f(chunk)?;
        addr += len as u64;
    }

    Ok(None)
}

fn write_rows(out: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    for row in bytes.chunks(DUMP_ROW_SIZE) {
        writeln!(out, "{}", hex::encode(row))?;
    }
    Ok(())
}
