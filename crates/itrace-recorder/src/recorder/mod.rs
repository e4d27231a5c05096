mod builder;

use std::ops::Range;
use std::path::{Path, PathBuf};

use self::builder::NeedsModule;
pub use self::builder::Builder;

use crate::engine::{InstAnalysis, MemoryAccess, RegisterSnapshot, TraceeMemory};
use crate::logger::{TRACE_FILE_NAME, TraceLogger};
use crate::memory::MemoryTracker;
use crate::record::InstructionTraceRecord;
use crate::session::SessionDirectory;
use crate::syscall::SyscallDecoder;

/// Name of the memory dump file, in the session directory.
pub const MEMORY_DUMP_FILE_NAME: &str = "memory_dump.txt";

/// Execution trace recorder of one traced module.
///
/// The host engine drives it synchronously:
/// 1. [syscall_entered](Self::syscall_entered) and
///    [syscall_exited](Self::syscall_exited) around each syscall
///    instruction
/// 2. [write_trace_info](Self::write_trace_info) once per traced
///    instruction
/// 3. [finish](Self::finish) when tracing stops
///
/// Tracked memory blocks are only dumped by [finish](Self::finish) (or
/// when they're freed), so it must be called before dropping the recorder.
///
/// # Concurrency
///
/// A recorder holds a single trace stream, and performs no locking. When
/// several threads of the traced process are instrumented, the host engine
/// must serialize its calls to the recorder.
pub struct Recorder<M> {
    mem: M,
    module_path: PathBuf,
    module: Range<u64>,
    decoder: SyscallDecoder,
    tracker: MemoryTracker,
    logger: TraceLogger,
    session: SessionDirectory,
}

impl Recorder<()> {
    /// Returns a builder for a recorder.
    pub const fn builder() -> Builder<NeedsModule> {
        Builder::new()
    }
}

impl<M: TraceeMemory> Recorder<M> {
    /// Path of the traced module.
    pub fn module_path(&self) -> &Path {
        &self.module_path
    }

    /// Address range of the traced module.
    pub const fn module(&self) -> &Range<u64> {
        &self.module
    }

    /// Syscall decoder of this recorder.
    pub const fn decoder(&self) -> &SyscallDecoder {
        &self.decoder
    }

    /// Memory tracker of this recorder.
    pub const fn tracker(&self) -> &MemoryTracker {
        &self.tracker
    }

    /// Trace logger of this recorder.
    pub const fn logger(&self) -> &TraceLogger {
        &self.logger
    }

    /// Memory of the traced process.
    pub const fn memory(&self) -> &M {
        &self.mem
    }

    /// Session directory, if it was created.
    pub fn session_dir(&self) -> Option<&Path> {
        self.session.path()
    }

    /// Decodes the syscall about to be executed by a syscall instruction.
    ///
    /// Memory about to be unmapped by the syscall is captured, so that it
    /// can still be dumped once freed.
    ///
    /// Returns whether the syscall is known.
    pub fn syscall_entered(&mut self, record: &mut InstructionTraceRecord) -> bool {
        let known = self.decoder.dispatch_args(record, &self.mem);

        if let Some(addr) = self.decoder.pending_deallocation(record) {
            self.tracker.snapshot_memory(&self.mem, addr);
        }

        known
    }

    /// Decodes the return value of the syscall executed by a syscall
    /// instruction.
    pub fn syscall_exited(
        &mut self,
        record: &mut InstructionTraceRecord,
        post_status: &RegisterSnapshot,
    ) {
        self.decoder.dispatch_ret(record, post_status);
    }

    /// Records one traced instruction.
    ///
    /// Memory allocated or freed by the instruction's call (if any) is
    /// tracked or dumped, then the trace line is shipped to the enabled
    /// sinks.
    pub fn write_trace_info(
        &mut self,
        record: &InstructionTraceRecord,
        analysis: &InstAnalysis,
        accesses: &[MemoryAccess],
    ) {
        if let Some(call) = record.fun_call.as_deref() {
            if let Some((addr, size)) = call.allocation() {
                self.tracker.add_memory(addr, size);
            }
            if let Some(addr) = call.deallocation() {
                self.tracker.remove_memory(&self.mem, addr);
            }
        }
        self.tracker.discard_snapshot();

        self.logger
            .write_trace_info(record, analysis, accesses, &mut self.tracker, &self.mem);
    }

    /// Resolves the memory block an address belongs to, as
    /// `(offset, memory_index)`.
    ///
    /// Untracked addresses are resolved from the traced process's heap
    /// chunks or memory mappings, and start being tracked.
    pub fn resolve_address(&mut self, addr: u64) -> Option<(u64, u64)> {
        self.tracker.get_memory_offset(&self.mem, addr)
    }

    /// Enables the system-log sink.
    pub fn enable_log_sink(&mut self) {
        self.logger.enable_log_sink();
    }

    /// Disables the system-log sink.
    pub fn disable_log_sink(&mut self) {
        self.logger.disable_log_sink();
    }

    /// Enables the trace file sink, creating the session directory if
    /// needed.
    ///
    /// On failure, the sink stays disabled and `false` is returned.
    #[tracing::instrument(skip_all, fields(module = self.session.module_name()))]
    pub fn enable_file_sink(&mut self) -> bool {
        if self.logger.is_file_sink_enabled() {
            return true;
        }

        let res = self
            .session
            .ensure()
            .map(|dir| dir.join(TRACE_FILE_NAME))
            .and_then(|path| self.logger.enable_file_sink(path));

        match res {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("trace file sink stays disabled: {e}");
                false
            }
        }
    }

    /// Disables the trace file sink.
    pub fn disable_file_sink(&mut self) {
        self.logger.disable_file_sink();
    }

    /// Enables memory block dumps, creating the session directory if
    /// needed.
    ///
    /// On failure, dumps stay disabled and `false` is returned.
    #[tracing::instrument(skip_all, fields(module = self.session.module_name()))]
    pub fn enable_memory_dump(&mut self) -> bool {
        if self.tracker.has_dump() {
            return true;
        }

        let res = self
            .session
            .ensure()
            .map(|dir| dir.join(MEMORY_DUMP_FILE_NAME))
            .and_then(|path| self.tracker.set_dump_path(path));

        match res {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("memory dumps stay disabled: {e}");
                false
            }
        }
    }

    /// Ends the trace session: every tracked block is dumped, and every
    /// sink is disabled.
    ///
    /// Calling it again is a no-op.
    #[tracing::instrument(skip_all, fields(module = self.session.module_name()))]
    pub fn finish(&mut self) {
        self.tracker.clear(&self.mem);
        self.logger.disable_file_sink();
        self.logger.disable_log_sink();
    }
}
