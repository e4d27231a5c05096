//! Trace line formatting and sinks.

mod format;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::{Path, PathBuf};

pub use self::format::{FIELD_SEPARATOR, LineFormatter, format_call};

use crate::engine::{InstAnalysis, MemoryAccess, TraceeMemory};
use crate::error::{Error, Result};
use crate::memory::MemoryTracker;
use crate::record::InstructionTraceRecord;

/// Tracing target of the system-log sink.
pub const LOG_TARGET: &str = "itrace";

/// Name of the trace file, in the session directory.
pub const TRACE_FILE_NAME: &str = "itrace.txt";

/// Trace logger, shipping formatted trace lines to the enabled sinks.
///
/// Two independent sinks are supported:
/// - the system log (a `tracing` event with target [LOG_TARGET])
/// - a plain text file, one line per traced instruction
#[derive(Debug)]
pub struct TraceLogger {
    formatter: LineFormatter,
    log_sink: bool,
    file_sink: Option<FileSink>,
}

#[derive(Debug)]
struct FileSink {
    path: PathBuf,
    out: BufWriter<File>,
}

impl TraceLogger {
    /// Creates a logger for the module loaded at `module`, with every
    /// sink disabled.
    pub const fn new(module: Range<u64>) -> Self {
        Self {
            formatter: LineFormatter::new(module),
            log_sink: false,
            file_sink: None,
        }
    }

    /// Line formatter of this logger.
    pub const fn formatter(&self) -> &LineFormatter {
        &self.formatter
    }

    /// Returns whether any sink is enabled.
    pub const fn is_enabled(&self) -> bool {
        self.log_sink || self.file_sink.is_some()
    }

    /// Returns whether the system-log sink is enabled.
    pub const fn is_log_sink_enabled(&self) -> bool {
        self.log_sink
    }

    /// Returns whether the file sink is enabled.
    pub const fn is_file_sink_enabled(&self) -> bool {
        self.file_sink.is_some()
    }

    /// Enables the system-log sink.
    pub fn enable_log_sink(&mut self) {
        self.log_sink = true;
    }

    /// Disables the system-log sink.
    pub fn disable_log_sink(&mut self) {
        self.log_sink = false;
    }

    /// Enables the file sink, creating (or truncating) the file at `path`.
    ///
    /// Does nothing if the file sink is already enabled.
    pub fn enable_file_sink(&mut self, path: impl AsRef<Path>) -> Result<()> {
        if self.file_sink.is_some() {
            return Ok(());
        }

        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|e| Error::File(path.clone(), e))?;
        tracing::debug!(path = %path.display(), "trace file opened");

        self.file_sink = Some(FileSink {
            path,
            out: BufWriter::new(file),
        });

        Ok(())
    }

    /// Disables the file sink, flushing and closing the file.
    pub fn disable_file_sink(&mut self) {
        if let Some(mut sink) = self.file_sink.take() {
            if let Err(e) = sink.out.flush() {
                tracing::warn!(path = %sink.path.display(), "failed to flush trace file: {e}");
            }
        }
    }

    /// Path of the trace file, if the file sink is enabled.
    pub fn file_sink_path(&self) -> Option<&Path> {
        self.file_sink.as_ref().map(|sink| sink.path.as_path())
    }

    /// Formats the trace line of one instruction and ships it to the
    /// enabled sinks.
    ///
    /// Does nothing if no sink is enabled.
    pub fn write_trace_info<M: TraceeMemory>(
        &mut self,
        record: &InstructionTraceRecord,
        analysis: &InstAnalysis,
        accesses: &[MemoryAccess],
        tracker: &mut MemoryTracker,
        mem: &M,
    ) {
        if !self.is_enabled() {
            return;
        }

        let line = self
            .formatter
            .format(record, analysis, accesses, tracker, mem);

        self.write_line(&line);
    }

    /// Ships an already formatted line to the enabled sinks.
    pub fn write_line(&mut self, line: &str) {
        if self.log_sink {
            tracing::info!(target: LOG_TARGET, "{line}");
        }

        let Some(sink) = self.file_sink.as_mut() else {
            return;
        };

        if let Err(e) = writeln!(sink.out, "{line}").and_then(|()| sink.out.flush()) {
            tracing::warn!(path = %sink.path.display(), "failed to write trace file, disabling it: {e}");
            self.file_sink = None;
        }
    }
}
