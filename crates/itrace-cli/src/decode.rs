use itrace_recorder::engine::{Arch, RegisterSnapshot, TraceeMemory};
use itrace_recorder::logger::format_call;
use itrace_recorder::record::{CallRecord, InstructionTraceRecord};
use itrace_recorder::syscall::SyscallDecoder;
use kdl::{KdlDocument, KdlEntry, KdlNode};

use crate::syscalls::ret_type_name;

/// Decodes a syscall from its raw number, arguments and (optionally)
/// return value, reading string arguments from `mem`.
pub fn decode_syscall<M: TraceeMemory>(
    mem: &M,
    arch: Arch,
    nr: u64,
    args: &[u64],
    ret: Option<u64>,
) -> miette::Result<CallRecord> {
    miette::ensure!(
        args.len() <= arch.max_syscall_args(),
        "{arch} syscalls take at most {} arguments",
        arch.max_syscall_args()
    );

    let mut pre_status = RegisterSnapshot::zeroed(arch);
    pre_status.set_gpr(arch.syscall_number_register(), nr);

    for (i, arg) in args.iter().enumerate() {
        if let Some(reg) = arch.syscall_arg_register(i) {
            pre_status.set_gpr(reg, *arg);
        }
    }

    let decoder = SyscallDecoder::new(arch);
    let mut record = InstructionTraceRecord::new(0, pre_status.clone(), pre_status).with_syscall();

    if !decoder.dispatch_args(&mut record, mem) {
        tracing::warn!(nr, %arch, "unknown syscall number");
    }

    if let Some(ret) = ret {
        let mut post_status = record.pre_status.clone();
        if let Some(reg) = arch.ret_register(0) {
            post_status.set_gpr(reg, ret);
        }
        decoder.dispatch_ret(&mut record, &post_status);
    }

    let Some(call) = record.fun_call else {
        miette::bail!("syscall record was not created");
    };

    Ok(*call)
}

/// Dumps a decoded syscall.
pub fn dump_to_kdl(call: &CallRecord) -> KdlDocument {
    let mut node = KdlNode::new("call");
    node.entries_mut().push(KdlEntry::new(call.fun_name.as_str()));
    node.entries_mut()
        .push(KdlEntry::new_prop("module", call.call_module_name.as_str()));
    node.entries_mut()
        .push(KdlEntry::new_prop("ret_type", ret_type_name(call.ret_type)));

    let children = node.ensure_children().nodes_mut();

    for arg in &call.args {
        let mut arg_node = KdlNode::new("arg");
        arg_node.entries_mut().push(KdlEntry::new(arg.as_str()));
        children.push(arg_node);
    }

    if !call.ret_value.is_empty() {
        let mut ret_node = KdlNode::new("ret");
        ret_node
            .entries_mut()
            .push(KdlEntry::new(call.ret_value.as_str()));
        children.push(ret_node);
    }

    if let Some((addr, size)) = call.allocation() {
        let mut alloc_node = KdlNode::new("alloc");
        alloc_node
            .entries_mut()
            .push(KdlEntry::new_prop("addr", format!("{addr:#x}")));
        alloc_node
            .entries_mut()
            .push(KdlEntry::new_prop("size", format!("{size:#x}")));
        children.push(alloc_node);
    }

    if let Some(addr) = call.deallocation() {
        let mut free_node = KdlNode::new("free");
        free_node
            .entries_mut()
            .push(KdlEntry::new_prop("addr", format!("{addr:#x}")));
        children.push(free_node);
    }

    let mut line_node = KdlNode::new("line");
    line_node.entries_mut().push(KdlEntry::new(format_call(call)));
    children.push(line_node);

    let mut kdl = KdlDocument::new();
    kdl.nodes_mut().push(node);
    kdl
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use std::convert::Infallible;

    use itrace_recorder::engine::{Arch, MemoryMap, TraceeMemory};
    use itrace_recorder::record::RetType;

    use super::{decode_syscall, dump_to_kdl};

    struct OneString(u64, &'static str);

    impl TraceeMemory for OneString {
        type Error = Infallible;

        fn read_memory(&self, _: u64, _: &mut [u8]) -> Result<(), Infallible> {
            Ok(())
        }

        fn read_cstring(&self, addr: u64) -> Result<String, Infallible> {
            Ok(if addr == self.0 { self.1 } else { "" }.to_owned())
        }

        fn memory_maps(&self) -> Result<Vec<MemoryMap>, Infallible> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn decode_openat() {
        let mem = OneString(0x4000, "/data/local/tmp/x");
        let call = decode_syscall(&mem, Arch::Aarch64, 56, &[3, 0x4000, 0x241, 0x1b6], Some(5))
            .expect("decode");

        assert_eq!(call.fun_name, "openat");
        assert_eq!(
            call.args,
            ["dirfd=0x3", "pathname=/data/local/tmp/x", "flags=0x241", "mode=0x1b6"]
        );
        assert_eq!(call.ret_value, "ret= 0x5");
        assert_eq!(call.ret_type, RetType::Number);
    }

    #[test]
    fn decode_mmap() {
        let mem = OneString(0, "");
        let call = decode_syscall(&mem, Arch::Arm, 192, &[0, 0x2000, 3, 0x22], Some(0x4000_0000))
            .expect("decode");

        assert_eq!(call.fun_name, "mmap2");
        assert_eq!(call.allocation(), Some((0x4000_0000, 0x2000)));

        let kdl = dump_to_kdl(&call);
        let node = &kdl.nodes()[0];
        let alloc = node
            .children()
            .and_then(|children| children.get("alloc"))
            .expect("alloc node");
        assert_eq!(alloc.get("size").and_then(|v| v.as_string()), Some("0x2000"));
    }

    #[test]
    fn too_many_arguments() {
        let mem = OneString(0, "");
        assert!(decode_syscall(&mem, Arch::Aarch64, 172, &[0; 7], None).is_err());
    }

    #[test]
    fn unknown_syscall() {
        let mem = OneString(0, "");
        let call = decode_syscall(&mem, Arch::Aarch64, 0xffff, &[], None).expect("decode");

        assert_eq!(call.fun_name, "unknown");
        assert!(call.args.is_empty());
        assert!(call.ret_value.is_empty());
    }
}
