use std::io::IoSliceMut;

use nix::sys::uio::{RemoteIoVec, process_vm_readv};
use nix::unistd::Pid;

use crate::error::{Error, Result};

/// Page size assumed when reading strings, so that a read never spans two
/// pages.
const PAGE_SIZE: u64 = 0x1000;

/// Maximum length of a string read from a process.
pub const MAX_CSTRING_LEN: usize = 4096;

/// Reads memory from the process with the given ID.
///
/// Short reads are resumed where they stopped, so that a read spanning
/// several mappings succeeds as long as every byte is readable. If the
/// process faults before the buffer is filled, [Error::PartialMemOp] tells
/// how many bytes were read; if nothing at all could be read, the OS error
/// is returned.
///
/// Empty reads always succeed, without a syscall.
pub fn read_process_memory(pid: Pid, addr: u64, buf: &mut [u8]) -> Result<()> {
    let total = buf.len();
    let mut done = 0;

    while done < total {
        let remote = RemoteIoVec {
            base: (addr + done as u64) as usize,
            len: total - done,
        };
        let mut local = [IoSliceMut::new(&mut buf[done..])];

        match process_vm_readv(pid, &mut local, &[remote]) {
            Ok(0) => break,
            Ok(len) => done += len,
            Err(e) if done == 0 => {
                tracing::debug!(error = %e, addr = format_args!("{addr:#x}"), "process_vm_readv");
                return Err(e.into());
            }
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    addr = format_args!("{:#x}", addr + done as u64),
                    "process_vm_readv stopped early"
                );
                break;
            }
        }
    }

    if done != total {
        Err(Error::PartialMemOp(done, total))
    } else {
        Ok(())
    }
}

/// Reads a null-terminated string from the process with the given ID.
///
/// The string is read page by page, and truncated to [MAX_CSTRING_LEN]
/// bytes. Invalid UTF-8 sequences are replaced.
pub fn read_process_cstring(pid: Pid, addr: u64) -> Result<String> {
    let mut s = Vec::new();
    let mut chunk = [0u8; PAGE_SIZE as usize];
    let mut addr = addr;

    while s.len() < MAX_CSTRING_LEN {
        let to_page_end = (PAGE_SIZE - addr % PAGE_SIZE) as usize;
        let len = to_page_end.min(MAX_CSTRING_LEN - s.len());
        let chunk = &mut chunk[..len];

        read_process_memory(pid, addr, chunk)?;

        if let Some(nul) = chunk.iter().position(|c| *c == 0) {
            s.extend_from_slice(&chunk[..nul]);
            return Ok(String::from_utf8_lossy(&s).into_owned());
        }

        s.extend_from_slice(chunk);
        addr += len as u64;
    }

    tracing::debug!(
        addr = format_args!("{addr:#x}"),
        "string truncated to {MAX_CSTRING_LEN} bytes"
    );

    Ok(String::from_utf8_lossy(&s).into_owned())
}
