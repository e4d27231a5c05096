#![allow(dead_code)]

mod memory;

use itrace_recorder::engine::{Arch, InstAnalysis, Operand, OperandType, RegisterAccess};
use itrace_recorder::engine::RegisterSnapshot;
use itrace_recorder::record::InstructionTraceRecord;

pub use self::memory::FakeMemory;

pub const MODULE_PATH: &str = "/data/local/tmp/libtarget.so";
pub const MODULE_BASE: u64 = 0x7f_0000_0000;
pub const MODULE_END: u64 = 0x7f_0010_0000;

/// Record of a syscall instruction, with the syscall number and arguments
/// in the ABI registers.
pub fn syscall_record(arch: Arch, pc: u64, nr: u64, args: &[u64]) -> InstructionTraceRecord {
    let mut pre = RegisterSnapshot::zeroed(arch);
    pre.set_gpr(arch.syscall_number_register(), nr);
    for (i, arg) in args.iter().enumerate() {
        pre.set_gpr(i, *arg);
    }

    let post = pre.clone();
    InstructionTraceRecord::new(pc, pre, post).with_syscall()
}

/// Register snapshot after a syscall returned `ret`.
pub fn syscall_return(record: &InstructionTraceRecord, ret: u64) -> RegisterSnapshot {
    let mut post = record.pre_status.clone();
    post.set_gpr(0, ret);
    post
}

pub fn svc_analysis() -> InstAnalysis {
    InstAnalysis {
        disassembly: "svc #0".to_owned(),
        operands: vec![Operand::immediate(2)],
    }
}

/// `ldr x0, [x1]` with `x1 = addr`, loading `value`.
pub fn ldr_record(pc: u64, addr: u64, value: u64) -> (InstructionTraceRecord, InstAnalysis) {
    let mut pre = RegisterSnapshot::zeroed(Arch::Aarch64);
    pre.set_gpr(1, addr);
    let mut post = pre.clone();
    post.set_gpr(0, value);

    let analysis = InstAnalysis {
        disassembly: " ldr x0, [x1]".to_owned(),
        operands: vec![
            Operand::register(OperandType::Gpr, "x0", 0, 8, RegisterAccess::Write),
            Operand::register(OperandType::Gpr, "x1", 1, 8, RegisterAccess::Read),
        ],
    };

    (InstructionTraceRecord::new(pc, pre, post), analysis)
}
