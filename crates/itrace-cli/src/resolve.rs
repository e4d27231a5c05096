use std::ops::Range;
use std::path::Path;

use itrace_recorder::engine::{Arch, TraceeMemory};
use itrace_recorder::recorder::Recorder;
use kdl::{KdlDocument, KdlEntry, KdlNode};

use crate::SessionConfig;

/// Resolves addresses to the memory blocks of a traced process, within a
/// trace session attached to the module loaded at `module`.
///
/// The session is finished before returning, so tracked blocks are dumped
/// if the configuration enables it.
#[tracing::instrument(skip_all, fields(module = %module_path.display()))]
pub fn resolve_addresses<M: TraceeMemory>(
    mem: M,
    arch: Arch,
    module_path: &Path,
    module: Range<u64>,
    config: &SessionConfig,
    addresses: &[u64],
) -> KdlDocument {
    let mut recorder = Recorder::builder()
        .with_module(module_path, module)
        .with_arch(arch)
        .with_memory(mem)
        .dump_root(config.dump_root())
        .log_sink(config.log_sink)
        .file_sink(config.file_sink)
        .memory_dump(config.memory_dump)
        .build();

    let mut kdl = KdlDocument::new();

    for addr in addresses {
        let mut node = KdlNode::new("address");
        node.entries_mut().push(KdlEntry::new(format!("{addr:#x}")));

        match recorder.resolve_address(*addr) {
            Some((offset, index)) => {
                node.entries_mut()
                    .push(KdlEntry::new_prop("block", i128::from(index)));
                node.entries_mut()
                    .push(KdlEntry::new_prop("offset", format!("{offset:#x}")));
            }
            None => {
                node.entries_mut().push(KdlEntry::new_prop("block", -1i128));
            }
        }

        kdl.nodes_mut().push(node);
    }

    for block in recorder.tracker().blocks() {
        let mut node = KdlNode::new("block");
        node.entries_mut()
            .push(KdlEntry::new(i128::from(block.memory_index)));
        node.entries_mut()
            .push(KdlEntry::new_prop("start", format!("{:#x}", block.start)));
        node.entries_mut()
            .push(KdlEntry::new_prop("size", i128::from(block.size())));
        kdl.nodes_mut().push(node);
    }

    recorder.finish();

    if let Some(dir) = recorder.session_dir() {
        let mut node = KdlNode::new("session");
        node.entries_mut()
            .push(KdlEntry::new(dir.display().to_string()));
        kdl.nodes_mut().push(node);
    }

    kdl
}
