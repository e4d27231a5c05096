use std::ops::Range;
use std::path::PathBuf;

use super::Recorder;
use crate::engine::{Arch, TraceeMemory};
use crate::logger::TraceLogger;
use crate::memory::MemoryTracker;
use crate::session::SessionDirectory;
use crate::syscall::SyscallDecoder;

/// Builder for [Recorder].
///
/// It is usually created by calling [Recorder::builder], and allows to
/// specify the traced module, its architecture and the memory of the traced
/// process.
pub struct Builder<S> {
    state: S,
}

impl Builder<NeedsModule> {
    pub(super) const fn new() -> Self {
        Self { state: NeedsModule }
    }

    /// Specifies the traced module: its path and the address range it is
    /// loaded at.
    pub fn with_module(self, path: impl Into<PathBuf>, range: Range<u64>) -> Builder<NeedsArch> {
        Builder {
            state: NeedsArch {
                path: path.into(),
                range,
            },
        }
    }
}

impl Builder<NeedsArch> {
    /// Specifies the architecture (and syscall ABI) of the traced process.
    pub fn with_arch(self, arch: Arch) -> Builder<NeedsMemory> {
        Builder {
            state: NeedsMemory {
                path: self.state.path,
                range: self.state.range,
                arch,
            },
        }
    }
}

impl Builder<NeedsMemory> {
    /// Specifies the accessor to the address space of the traced process.
    pub fn with_memory<M: TraceeMemory>(self, mem: M) -> Builder<ReadyToBuild<M>> {
        Builder {
            state: ReadyToBuild {
                path: self.state.path,
                range: self.state.range,
                arch: self.state.arch,
                mem,
                dump_root: std::env::temp_dir(),
                log_sink: false,
                file_sink: false,
                memory_dump: false,
            },
        }
    }
}

impl<M: TraceeMemory> Builder<ReadyToBuild<M>> {
    /// Specifies the directory the session directory is created in.
    ///
    /// Defaults to the system temporary directory.
    pub fn dump_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.state.dump_root = root.into();
        self
    }

    /// Enables the system-log sink at build time.
    pub fn log_sink(mut self, enabled: bool) -> Self {
        self.state.log_sink = enabled;
        self
    }

    /// Enables the trace file sink at build time.
    pub fn file_sink(mut self, enabled: bool) -> Self {
        self.state.file_sink = enabled;
        self
    }

    /// Enables memory block dumps at build time.
    pub fn memory_dump(mut self, enabled: bool) -> Self {
        self.state.memory_dump = enabled;
        self
    }

    /// Builds the recorder.
    ///
    /// Sinks that fail to be enabled stay disabled.
    pub fn build(self) -> Recorder<M> {
        let ReadyToBuild {
            path,
            range,
            arch,
            mem,
            dump_root,
            log_sink,
            file_sink,
            memory_dump,
        } = self.state;

        let mut recorder = Recorder {
            session: SessionDirectory::new(dump_root, &path, range.start),
            logger: TraceLogger::new(range.clone()),
            decoder: SyscallDecoder::new(arch),
            tracker: MemoryTracker::new(),
            module_path: path,
            module: range,
            mem,
        };

        if log_sink {
            recorder.enable_log_sink();
        }
        if file_sink {
            recorder.enable_file_sink();
        }
        if memory_dump {
            recorder.enable_memory_dump();
        }

        recorder
    }
}

pub struct NeedsModule;

pub struct NeedsArch {
    path: PathBuf,
    range: Range<u64>,
}

pub struct NeedsMemory {
    path: PathBuf,
    range: Range<u64>,
    arch: Arch,
}

pub struct ReadyToBuild<M> {
    path: PathBuf,
    range: Range<u64>,
    arch: Arch,
    mem: M,
    dump_root: PathBuf,
    log_sink: bool,
    file_sink: bool,
    memory_dump: bool,
}
