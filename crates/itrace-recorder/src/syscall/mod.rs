//! Syscall semantic decoding.
//!
//! A [SyscallDecoder] turns the raw register state around a syscall
//! instruction into a [CallRecord](crate::record::CallRecord): canonical
//! name, formatted arguments, return category and return value. It also
//! fills the allocation/deallocation fields of the record for
//! `mmap`/`mmap2`/`munmap`, which the recorder later forwards to the
//! memory tracker.

mod aarch64;
mod arm;
mod signatures;
mod table;

pub use self::table::{ArgKind, Signature, SyscallTable};

use crate::engine::{Arch, RegisterSnapshot, TraceeMemory};
use crate::record::{InstructionTraceRecord, RetType};

/// Name given to syscalls missing from the table.
pub const UNKNOWN_SYSCALL: &str = "unknown";

/// Highest errno returned by the kernel (as `-errno`).
const MAX_ERRNO: u64 = 4095;

/// Decoder of syscall records, for one architecture.
#[derive(Clone, Copy, Debug)]
pub struct SyscallDecoder {
    arch: Arch,
    table: &'static SyscallTable,
}

impl SyscallDecoder {
    /// Creates a decoder for the given architecture.
    pub fn new(arch: Arch) -> Self {
        Self {
            arch,
            table: SyscallTable::for_arch(arch),
        }
    }

    /// Architecture of this decoder.
    pub const fn arch(&self) -> Arch {
        self.arch
    }

    /// Syscall table used by this decoder.
    pub const fn table(&self) -> &'static SyscallTable {
        self.table
    }

    /// Decodes the syscall name and arguments from the record's
    /// pre-execution snapshot.
    ///
    /// String arguments are read from the traced process's memory, and
    /// replaced with an empty string if they can't be read.
    ///
    /// Returns `false` if the syscall number is unknown, in which case the
    /// call is named `"unknown"`, has no arguments and returns a number.
    /// Records without a call are left untouched.
    pub fn dispatch_args<M: TraceeMemory>(
        &self,
        record: &mut InstructionTraceRecord,
        mem: &M,
    ) -> bool {
        let pre_status = &record.pre_status;
        let Some(call) = record.fun_call.as_deref_mut() else {
            tracing::debug!(pc = format_args!("{:#x}", record.pc), "no call record to decode");
            return false;
        };

        let nr = pre_status.syscall_number();

        let Some(sig) = self.table.get(nr) else {
            tracing::debug!(nr, arch = %self.arch, "unknown syscall");

            call.fun_name = UNKNOWN_SYSCALL.to_owned();
            call.args.clear();
            call.ret_type = RetType::Number;
            return false;
        };

        call.fun_name = sig.name.to_owned();
        call.args = format_arguments(sig, pre_status, mem);
        call.ret_type = sig.ret;

        true
    }

    /// Decodes the syscall return value from the post-execution snapshot.
    ///
    /// For successful `mmap`/`mmap2` calls, the allocated range is stored
    /// in the call record. For `munmap`, the freed address is stored.
    pub fn dispatch_ret(&self, record: &mut InstructionTraceRecord, post_status: &RegisterSnapshot) {
        let pre_status = &record.pre_status;
        let Some(call) = record.fun_call.as_deref_mut() else {
            return;
        };

        let ret = post_status.ret_register_value(0);
        call.ret_value = format!("ret= {ret:#x}");

        match call.fun_name.as_str() {
            "mmap" | "mmap2" => {
                let size = pre_status.arg_register_value(1);

                if size != 0 && ret != 0 && !self.is_error(ret) {
                    call.memory_alloc_address = ret;
                    call.memory_alloc_size = size;
                } else {
                    tracing::trace!(
                        ret = format_args!("{ret:#x}"),
                        size = format_args!("{size:#x}"),
                        "mapping not tracked"
                    );
                }
            }
            "munmap" => {
                let addr = pre_status.arg_register_value(0);
                if addr != 0 {
                    call.memory_free_address = addr;
                }
            }
            _ => {}
        }
    }

    /// Returns the address a decoded (but not yet executed) syscall is
    /// about to free, if any.
    pub fn pending_deallocation(&self, record: &InstructionTraceRecord) -> Option<u64> {
        let call = record.fun_call.as_deref()?;

        match call.fun_name.as_str() {
            "munmap" => Some(record.pre_status.arg_register_value(0)).filter(|&addr| addr != 0),
            _ => None,
        }
    }

    /// Returns whether a raw return value is a `-errno` error code.
    fn is_error(&self, ret: u64) -> bool {
        let minus_one = self.arch.truncate(u64::MAX);
        ret > minus_one - MAX_ERRNO && ret <= minus_one
    }
}

fn format_arguments<M: TraceeMemory>(
    sig: &Signature,
    regs: &RegisterSnapshot,
    mem: &M,
) -> Vec<String> {
    sig.args
        .iter()
        .enumerate()
        .map(|(i, (name, kind))| {
            let value = regs.arg_register_value(i);
            match kind {
                ArgKind::Hex | ArgKind::Ptr => format!("{name}={value:#x}"),
                ArgKind::Str => format!("{name}={}", read_string_arg(mem, value)),
            }
        })
        .collect()
}

fn read_string_arg<M: TraceeMemory>(mem: &M, addr: u64) -> String {
    if addr == 0 {
        return String::new();
    }

    mem.read_cstring(addr).unwrap_or_else(|e| {
        tracing::debug!(addr = format_args!("{addr:#x}"), "unreadable string argument: {e}");
        String::new()
    })
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use std::ops::Range;

    use super::{SyscallDecoder, UNKNOWN_SYSCALL};
    use crate::engine::{Arch, MemoryMap, RegisterSnapshot, TraceeMemory};
    use crate::record::{InstructionTraceRecord, RetType};

    #[derive(Debug, thiserror::Error)]
    #[error("unmapped address {0:#x}")]
    struct Unmapped(u64);

    struct Strings(Vec<(u64, &'static str)>);

    impl TraceeMemory for Strings {
        type Error = Unmapped;

        fn read_memory(&self, addr: u64, _buf: &mut [u8]) -> Result<(), Self::Error> {
            Err(Unmapped(addr))
        }

        fn read_cstring(&self, addr: u64) -> Result<String, Self::Error> {
            self.0
                .iter()
                .find(|(a, _)| *a == addr)
                .map(|(_, s)| (*s).to_owned())
                .ok_or(Unmapped(addr))
        }

        fn memory_maps(&self) -> Result<Vec<MemoryMap>, Self::Error> {
            Ok(Vec::new())
        }

        fn live_allocations(&self, _within: &Range<u64>) -> Option<Vec<Range<u64>>> {
            None
        }
    }

    fn syscall_record(arch: Arch, nr: u64, args: &[u64]) -> InstructionTraceRecord {
        let mut pre = RegisterSnapshot::zeroed(arch);
        pre.set_gpr(arch.syscall_number_register(), nr);
        for (i, arg) in args.iter().enumerate() {
            pre.set_gpr(i, *arg);
        }

        InstructionTraceRecord::new(0x1000, pre, RegisterSnapshot::zeroed(arch)).with_syscall()
    }

    fn ret_snapshot(arch: Arch, ret: u64) -> RegisterSnapshot {
        let mut post = RegisterSnapshot::zeroed(arch);
        post.set_gpr(0, ret);
        post
    }

    #[test]
    fn openat_arguments() {
        let mem = Strings(vec![(0x4000, "/data/local/tmp/x")]);
        let decoder = SyscallDecoder::new(Arch::Aarch64);

        let mut record = syscall_record(Arch::Aarch64, 56, &[3, 0x4000, 0x241, 0x1b6]);
        assert!(decoder.dispatch_args(&mut record, &mem));

        let call = record.fun_call.as_deref().expect("call");
        assert_eq!(call.fun_name, "openat");
        assert_eq!(
            call.args,
            ["dirfd=0x3", "pathname=/data/local/tmp/x", "flags=0x241", "mode=0x1b6"]
        );
        assert_eq!(call.ret_type, RetType::Number);
        assert!(call.is_svc);
    }

    #[test]
    fn unreadable_string_is_empty() {
        let mem = Strings(Vec::new());
        let decoder = SyscallDecoder::new(Arch::Arm);

        let mut record = syscall_record(Arch::Arm, 5, &[0xdead, 0, 0]);
        assert!(decoder.dispatch_args(&mut record, &mem));

        let call = record.fun_call.as_deref().expect("call");
        assert_eq!(call.fun_name, "open");
        assert_eq!(call.args, ["filename=", "flags=0x0", "mode=0x0"]);
    }

    #[test]
    fn unknown_syscall() {
        let mem = Strings(Vec::new());
        let decoder = SyscallDecoder::new(Arch::Aarch64);

        let mut record = syscall_record(Arch::Aarch64, 9999, &[1, 2, 3]);
        record.fun_call.as_deref_mut().expect("call").args = vec!["stale".into()];
        assert!(!decoder.dispatch_args(&mut record, &mem));

        let call = record.fun_call.as_deref().expect("call");
        assert_eq!(call.fun_name, UNKNOWN_SYSCALL);
        assert!(call.args.is_empty());
        assert_eq!(call.ret_type, RetType::Number);
    }

    #[test]
    fn every_table_entry_decodes() {
        let mem = Strings(Vec::new());

        for arch in [Arch::Arm, Arch::Aarch64] {
            let decoder = SyscallDecoder::new(arch);
            for (nr, sig) in decoder.table().iter() {
                let mut record = syscall_record(arch, nr, &[]);
                assert!(decoder.dispatch_args(&mut record, &mem));

                let call = record.fun_call.as_deref().expect("call");
                assert_eq!(call.fun_name, sig.name);
                assert_eq!(call.args.len(), sig.args.len());
                assert_eq!(call.ret_type, sig.ret);
            }
        }
    }

    #[test]
    fn arm_arguments_are_truncated() {
        let mem = Strings(Vec::new());
        let decoder = SyscallDecoder::new(Arch::Arm);

        let mut record = syscall_record(Arch::Arm, 3, &[0xffff_ffff_0000_0004, 0x8000, 0x10]);
        assert!(decoder.dispatch_args(&mut record, &mem));

        let call = record.fun_call.as_deref().expect("call");
        assert_eq!(call.args, ["fd=0x4", "buf=0x8000", "count=0x10"]);
    }

    #[test]
    fn mmap_allocation() {
        let mem = Strings(Vec::new());
        let decoder = SyscallDecoder::new(Arch::Aarch64);

        let mut record = syscall_record(Arch::Aarch64, 222, &[0, 0x1000, 3, 0x22, u64::MAX, 0]);
        decoder.dispatch_args(&mut record, &mem);
        decoder.dispatch_ret(&mut record, &ret_snapshot(Arch::Aarch64, 0x7000));

        let call = record.fun_call.as_deref().expect("call");
        assert_eq!(call.ret_value, "ret= 0x7000");
        assert_eq!(call.ret_type, RetType::Pointer);
        assert_eq!(call.allocation(), Some((0x7000, 0x1000)));
    }

    #[test]
    fn failed_mmap_is_not_an_allocation() {
        let mem = Strings(Vec::new());

        for (arch, nr) in [(Arch::Aarch64, 222), (Arch::Arm, 192)] {
            let decoder = SyscallDecoder::new(arch);
            let enomem = arch.truncate(-12i64 as u64);

            let mut record = syscall_record(arch, nr, &[0, 0x1000, 3, 0x22]);
            decoder.dispatch_args(&mut record, &mem);
            decoder.dispatch_ret(&mut record, &ret_snapshot(arch, enomem));

            let call = record.fun_call.as_deref().expect("call");
            assert_eq!(call.allocation(), None, "{arch}");
        }
    }

    #[test]
    fn zero_sized_mmap_is_not_an_allocation() {
        let mem = Strings(Vec::new());
        let decoder = SyscallDecoder::new(Arch::Arm);

        let mut record = syscall_record(Arch::Arm, 192, &[0, 0, 3, 0x22]);
        decoder.dispatch_args(&mut record, &mem);
        decoder.dispatch_ret(&mut record, &ret_snapshot(Arch::Arm, 0x7000));

        assert_eq!(record.fun_call.as_deref().expect("call").allocation(), None);
    }

    #[test]
    fn munmap_deallocation() {
        let mem = Strings(Vec::new());
        let decoder = SyscallDecoder::new(Arch::Aarch64);

        let mut record = syscall_record(Arch::Aarch64, 215, &[0x7000, 0x1000]);
        assert_eq!(decoder.pending_deallocation(&record), None);
        decoder.dispatch_args(&mut record, &mem);
        assert_eq!(decoder.pending_deallocation(&record), Some(0x7000));
        decoder.dispatch_ret(&mut record, &ret_snapshot(Arch::Aarch64, 0));

        let call = record.fun_call.as_deref().expect("call");
        assert_eq!(call.ret_value, "ret= 0x0");
        assert_eq!(call.deallocation(), Some(0x7000));
        assert_eq!(call.allocation(), None);
    }

    #[test]
    fn only_munmap_frees_memory_before_returning() {
        let mem = Strings(Vec::new());
        let decoder = SyscallDecoder::new(Arch::Arm);

        let mut mmap = syscall_record(Arch::Arm, 192, &[0x7000, 0x1000, 3, 0x22]);
        decoder.dispatch_args(&mut mmap, &mem);
        assert_eq!(decoder.pending_deallocation(&mmap), None);

        let mut munmap = syscall_record(Arch::Arm, 91, &[0, 0x1000]);
        decoder.dispatch_args(&mut munmap, &mem);
        assert_eq!(decoder.pending_deallocation(&munmap), None);
    }
}
