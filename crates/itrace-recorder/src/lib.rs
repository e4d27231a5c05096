//! This crate records the execution trace of a module, instrumented by a
//! dynamic binary instrumentation (DBI) engine.
//!
//! Three components are provided:
//! - A syscall decoder, turning the raw registers around a syscall
//!   instruction into a semantic call record (name, arguments, return
//!   value).
//! - A memory tracker, resolving the addresses accessed by the traced
//!   process to the memory block (mapping or heap chunk) they belong to.
//! - A trace logger, rendering one line per traced instruction and shipping
//!   it to the system log and/or a trace file.
//!
//! The [Recorder](self::recorder::Recorder) glues them together, and is
//! driven by the host engine through the
//! [TraceEventHandler](self::handler::TraceEventHandler) trait.
//!
//! ```no_run
//! # use std::convert::Infallible;
//! use itrace_recorder::engine::{Arch, InstAnalysis, MemoryMap, RegisterSnapshot, TraceeMemory};
//! use itrace_recorder::record::InstructionTraceRecord;
//! use itrace_recorder::recorder::Recorder;
//!
//! # struct HostMemory;
//! # impl TraceeMemory for HostMemory {
//! #     type Error = Infallible;
//! #     fn read_memory(&self, _: u64, _: &mut [u8]) -> Result<(), Infallible> { Ok(()) }
//! #     fn read_cstring(&self, _: u64) -> Result<String, Infallible> { Ok(String::new()) }
//! #     fn memory_maps(&self) -> Result<Vec<MemoryMap>, Infallible> { Ok(Vec::new()) }
//! # }
//! let mut recorder = Recorder::builder()
//!     .with_module("/data/local/tmp/libtarget.so", 0x7f0000_0000..0x7f0010_0000)
//!     .with_arch(Arch::Aarch64)
//!     .with_memory(HostMemory)
//!     .dump_root("/data/local/tmp")
//!     .file_sink(true)
//!     .memory_dump(true)
//!     .build();
//!
//! // from the host engine's syscall callback
//! let pre = RegisterSnapshot::zeroed(Arch::Aarch64);
//! let post = RegisterSnapshot::zeroed(Arch::Aarch64);
//! let mut record = InstructionTraceRecord::new(0x7f0000_1234, pre, post.clone()).with_syscall();
//! recorder.syscall_entered(&mut record);
//! recorder.syscall_exited(&mut record, &post);
//!
//! // from the host engine's instruction callback
//! recorder.write_trace_info(&record, &InstAnalysis::default(), &[]);
//!
//! // when tracing stops
//! recorder.finish();
//! ```

/// Module describing the data supplied by the host engine.
pub mod engine;

mod error;

/// Module implementing the trace event handler trait.
pub mod handler;

pub mod logger;

pub mod memory;

/// Module describing the per-instruction trace records.
pub mod record;

/// Module implementing the trace recorder.
pub mod recorder;

/// Module implementing the trace session directory.
pub mod session;

pub mod syscall;

pub use self::error::{Error, Result};
