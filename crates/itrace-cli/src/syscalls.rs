use itrace_recorder::engine::Arch;
use itrace_recorder::record::RetType;
use itrace_recorder::syscall::{ArgKind, SyscallTable};
use kdl::{KdlDocument, KdlEntry, KdlNode};

/// Dumps the syscall table of an architecture.
///
/// ```kdl
/// syscall openat nr=56 ret=number {
///     arg dirfd kind=hex
///     arg pathname kind=str
/// }
/// ```
pub fn dump_to_kdl(arch: Arch) -> KdlDocument {
    let mut kdl = KdlDocument::new();

    for (nr, sig) in SyscallTable::for_arch(arch).iter() {
        let mut node = KdlNode::new("syscall");
        node.entries_mut().push(KdlEntry::new(sig.name));
        node.entries_mut()
            .push(KdlEntry::new_prop("nr", i128::from(nr)));
        node.entries_mut()
            .push(KdlEntry::new_prop("ret", ret_type_name(sig.ret)));

        for (name, kind) in sig.args {
            let mut arg = KdlNode::new("arg");
            arg.entries_mut().push(KdlEntry::new(*name));
            arg.entries_mut()
                .push(KdlEntry::new_prop("kind", arg_kind_name(*kind)));

            node.ensure_children().nodes_mut().push(arg);
        }

        kdl.nodes_mut().push(node);
    }

    kdl
}

const fn arg_kind_name(kind: ArgKind) -> &'static str {
    match kind {
        ArgKind::Hex => "hex",
        ArgKind::Str => "str",
        ArgKind::Ptr => "ptr",
    }
}

pub(crate) const fn ret_type_name(ret: RetType) -> &'static str {
    match ret {
        RetType::Unknown => "unknown",
        RetType::String => "string",
        RetType::Variadic => "variadic",
        RetType::Pointer => "pointer",
        RetType::Number => "number",
        RetType::Void => "void",
    }
}
