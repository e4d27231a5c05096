use crate::engine::{InstAnalysis, MemoryAccess, RegisterSnapshot, TraceeMemory};
use crate::record::InstructionTraceRecord;
use crate::recorder::Recorder;

/// Trait for handling the trace events emitted by a host engine.
///
/// Every method has a no-op default, so an implementation only handles the
/// events it cares about. Events are delivered synchronously, from the
/// host engine's instrumentation callbacks.
pub trait TraceEventHandler {
    /// Error returned by this event handler.
    type Error: std::error::Error;

    /// Function called when a syscall instruction is about to execute.
    ///
    /// `record` carries a blank call record, to be filled by the handler.
    fn syscall_entered(&mut self, _record: &mut InstructionTraceRecord) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Function called when a syscall instruction has executed.
    fn syscall_exited(
        &mut self,
        _record: &mut InstructionTraceRecord,
        _post_status: &RegisterSnapshot,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Function called when an instruction has executed.
    ///
    /// For syscall instructions, it is called after
    /// [syscall_exited](Self::syscall_exited).
    fn instruction_executed(
        &mut self,
        _record: &InstructionTraceRecord,
        _analysis: &InstAnalysis,
        _accesses: &[MemoryAccess],
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Function called when the host engine stops tracing.
    fn session_finished(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<M: TraceeMemory> TraceEventHandler for Recorder<M> {
    type Error = crate::Error;

    fn syscall_entered(&mut self, record: &mut InstructionTraceRecord) -> crate::Result<()> {
        if !Recorder::syscall_entered(self, record) {
            tracing::trace!(pc = format_args!("{:#x}", record.pc), "syscall not decoded");
        }
        Ok(())
    }

    fn syscall_exited(
        &mut self,
        record: &mut InstructionTraceRecord,
        post_status: &RegisterSnapshot,
    ) -> crate::Result<()> {
        Recorder::syscall_exited(self, record, post_status);
        Ok(())
    }

    fn instruction_executed(
        &mut self,
        record: &InstructionTraceRecord,
        analysis: &InstAnalysis,
        accesses: &[MemoryAccess],
    ) -> crate::Result<()> {
        self.write_trace_info(record, analysis, accesses);
        Ok(())
    }

    fn session_finished(&mut self) -> crate::Result<()> {
        self.finish();
        Ok(())
    }
}
