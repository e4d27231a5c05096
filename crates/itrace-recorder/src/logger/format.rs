use std::ops::Range;

use crate::engine::{InstAnalysis, MemoryAccess, OperandType, RegisterClass, RegisterSnapshot, TraceeMemory};
use crate::memory::MemoryTracker;
use crate::record::{CallRecord, InstructionTraceRecord};

/// Separator between the fields of a trace line.
pub const FIELD_SEPARATOR: char = '|';

/// Formatter of trace lines, relative to the traced module.
#[derive(Clone, Debug)]
pub struct LineFormatter {
    module: Range<u64>,
}

impl LineFormatter {
    /// Creates a formatter for the module loaded at `module`.
    pub const fn new(module: Range<u64>) -> Self {
        Self { module }
    }

    /// Address range of the traced module.
    pub fn module(&self) -> &Range<u64> {
        &self.module
    }

    /// Formats the trace line of one instruction.
    ///
    /// The line is made of the following `|`-separated fields:
    ///
    /// 1. absolute address of the instruction
    /// 2. module-relative address of the instruction
    /// 3. disassembly
    /// 4. accessed registers (post-execution values, followed by the
    ///    pre-execution values of read registers)
    /// 5. memory accesses
    /// 6. call information (empty if the instruction isn't a call)
    ///
    /// Memory accesses outside of the module are resolved with the
    /// tracker, which may track a new block as a result.
    pub fn format<M: TraceeMemory>(
        &self,
        record: &InstructionTraceRecord,
        analysis: &InstAnalysis,
        accesses: &[MemoryAccess],
        tracker: &mut MemoryTracker,
        mem: &M,
    ) -> String {
        let mut line = format!(
            "{:#x}{sep}{:#x}{sep}{}{sep}{}{sep}{}{sep}",
            record.pc,
            record.pc.wrapping_sub(self.module.start),
            analysis.disassembly.trim(),
            format_registers(analysis, &record.pre_status, &record.post_status),
            self.format_memory_accesses(accesses, tracker, mem),
            sep = FIELD_SEPARATOR,
        );

        if let Some(call) = record.fun_call.as_deref() {
            line.push_str(&format_call(call));
        }

        line
    }

    fn format_memory_accesses<M: TraceeMemory>(
        &self,
        accesses: &[MemoryAccess],
        tracker: &mut MemoryTracker,
        mem: &M,
    ) -> String {
        accesses
            .iter()
            .map(|access| {
                let label = access.ty.label();
                let addr = access.access_address;

                if self.module.contains(&addr) {
                    format!(
                        "{label} module offset:{:#x} size:{} => {:#x}",
                        addr - self.module.start,
                        access.size,
                        access.value
                    )
                } else {
                    let (offset, index) = tracker
                        .get_memory_offset(mem, addr)
                        .map_or((0, -1), |(offset, index)| (offset, index as i64));

                    format!(
                        "{label} memory:{addr:#x}=>{:#x} memory block index:{index} size:{} offset:{offset:#x}",
                        access.value, access.size
                    )
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Formats the register field of a trace line.
fn format_registers(
    analysis: &InstAnalysis,
    pre_status: &RegisterSnapshot,
    post_status: &RegisterSnapshot,
) -> String {
    let mut current = Vec::new();
    let mut read = Vec::new();

    for operand in &analysis.operands {
        let class = match operand.ty {
            OperandType::Gpr => RegisterClass::General,
            OperandType::Fpr => RegisterClass::FloatingPoint,
            _ => continue,
        };

        if !operand.reg_access.is_accessed() {
            continue;
        }

        let (Some(name), Some(idx)) = (operand.reg_name.as_deref(), operand.reg_ctx_idx) else {
            continue;
        };

        let width = usize::from(operand.size);

        let Some(value) = post_status.read_lane(class, width, idx) else {
            tracing::trace!(name, idx, width, "unresolvable register operand");
            continue;
        };
        current.push(format!("{name}= {value:#x}"));

        if operand.reg_access.is_read() {
            if let Some(value) = pre_status.read_lane(class, width, idx) {
                read.push(format!("{name}= {value:#x}"));
            }
        }
    }

    current.extend(read);
    current.join(",")
}

/// Formats the call field of a trace line.
pub fn format_call(call: &CallRecord) -> String {
    format!(
        "{}:{} args:[{}] {}",
        call.call_module_name,
        call.fun_name,
        call.args.join(","),
        call.ret_value
    )
}
