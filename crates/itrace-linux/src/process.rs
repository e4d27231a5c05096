use std::ops::Range;
use std::path::PathBuf;

use itrace_recorder::engine::{MemoryMap, TraceeMemory};
use nix::unistd::Pid;

use crate::error::{Error, Result};
use crate::maps::{module_range, parse_maps};
use crate::mem::{read_process_cstring, read_process_memory};

/// Memory of a live process running on this machine.
///
/// Reading the memory of another process requires the same permissions as
/// attaching to it with `ptrace`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessMemory {
    pid: Pid,
}

impl ProcessMemory {
    /// Accesses the memory of the process with the given ID.
    pub const fn new(pid: u32) -> Self {
        Self {
            pid: Pid::from_raw(pid as i32),
        }
    }

    /// Accesses the memory of the current process.
    pub fn current() -> Self {
        Self { pid: Pid::this() }
    }

    /// ID of the process.
    pub const fn pid(&self) -> u32 {
        self.pid.as_raw() as u32
    }

    /// Path of the `maps` file of the process.
    pub fn maps_path(&self) -> PathBuf {
        PathBuf::from(format!("/proc/{}/maps", self.pid))
    }

    /// Returns the address range a module is loaded at, if it is.
    ///
    /// `module` is either the full path of the module, or its file name.
    pub fn module_range(&self, module: &str) -> Result<Option<Range<u64>>> {
        let maps = self.memory_maps()?;
        Ok(module_range(&maps, module))
    }
}

impl TraceeMemory for ProcessMemory {
    type Error = Error;

    fn read_memory(&self, addr: u64, buf: &mut [u8]) -> Result<()> {
        read_process_memory(self.pid, addr, buf)
    }

    fn read_cstring(&self, addr: u64) -> Result<String> {
        read_process_cstring(self.pid, addr)
    }

    fn memory_maps(&self) -> Result<Vec<MemoryMap>> {
        let path = self.maps_path();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::File(path, e))?;

        parse_maps(&content)
    }
}
