// Once clippy takes `clippy.toml` into account (for `tests` targets),
// we can remove these.
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

mod common;

use std::path::Path;

use indoc::indoc;
use itrace_recorder::engine::{Arch, MemoryAccess, MemoryAccessType, RegisterSnapshot};
use itrace_recorder::handler::TraceEventHandler;
use itrace_recorder::record::{InstructionTraceRecord, RetType};
use itrace_recorder::recorder::{MEMORY_DUMP_FILE_NAME, Recorder};
use regex::Regex;

use self::common::{FakeMemory, MODULE_BASE, MODULE_END, MODULE_PATH};
use self::common::{ldr_record, svc_analysis, syscall_record, syscall_return};

fn recorder(mem: FakeMemory, dump_root: &Path) -> Recorder<FakeMemory> {
    Recorder::builder()
        .with_module(MODULE_PATH, MODULE_BASE..MODULE_END)
        .with_arch(Arch::Aarch64)
        .with_memory(mem)
        .dump_root(dump_root)
        .log_sink(true)
        .file_sink(true)
        .memory_dump(true)
        .build()
}

/// Drives a handler the way a host engine does for one syscall instruction.
fn replay_syscall<H: TraceEventHandler>(
    handler: &mut H,
    record: &mut InstructionTraceRecord,
    ret: u64,
) -> Result<(), H::Error> {
    let post = syscall_return(record, ret);

    handler.syscall_entered(record)?;
    handler.syscall_exited(record, &post)?;
    handler.instruction_executed(record, &svc_analysis(), &[])
}

#[test_log::test]
fn openat_trace_line() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mem = FakeMemory::new().with_string(0x4000, "/data/local/tmp/x");
    let mut recorder = recorder(mem, tmp.path());

    let pc = MODULE_BASE + 0x1234;
    let mut record = syscall_record(Arch::Aarch64, pc, 56, &[3, 0x4000, 0x241, 0x1b6]);
    replay_syscall(&mut recorder, &mut record, 5).expect("replay");

    let call = record.fun_call.as_deref().expect("call");
    assert_eq!(call.fun_name, "openat");
    assert_eq!(
        call.args,
        ["dirfd=0x3", "pathname=/data/local/tmp/x", "flags=0x241", "mode=0x1b6"]
    );
    assert_eq!(call.ret_type, RetType::Number);
    assert_eq!(call.ret_value, "ret= 0x5");

    recorder.session_finished().expect("finish");

    let session_dir = recorder.session_dir().expect("session dir").to_path_buf();
    let trace = std::fs::read_to_string(session_dir.join("itrace.txt")).expect("read trace");
    assert_eq!(
        trace,
        "0x7f00001234|0x1234|svc #0|||syscall:openat \
         args:[dirfd=0x3,pathname=/data/local/tmp/x,flags=0x241,mode=0x1b6] ret= 0x5\n"
    );
}

#[test]
fn session_directory_layout() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut recorder = recorder(FakeMemory::new(), tmp.path());
    recorder.finish();

    let session_dir = recorder.session_dir().expect("session dir");
    assert_eq!(session_dir.parent(), Some(tmp.path()));

    let name = session_dir.file_name().unwrap().to_string_lossy();
    let re = Regex::new(r"^libtarget\.so_7f00000000_\d+$").unwrap();
    assert!(re.is_match(&name), "{name}");

    assert!(session_dir.join("itrace.txt").is_file());
    assert!(session_dir.join(MEMORY_DUMP_FILE_NAME).is_file());
}

#[test_log::test]
fn mmap_lifecycle() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut recorder = recorder(FakeMemory::new(), tmp.path());

    // mmap(NULL, 0x1000, PROT_READ|PROT_WRITE, MAP_PRIVATE|MAP_ANONYMOUS, -1, 0)
    let mut mmap = syscall_record(
        Arch::Aarch64,
        MODULE_BASE + 0x100,
        222,
        &[0, 0x1000, 3, 0x22, u64::MAX, 0],
    );
    replay_syscall(&mut recorder, &mut mmap, 0x7000).expect("mmap");
    assert_eq!(mmap.fun_call.as_deref().unwrap().ret_type, RetType::Pointer);
    assert!(recorder.tracker().is_in_memory(0x7050));

    let (ldr, analysis) = ldr_record(MODULE_BASE + 0x104, 0x7050, 0x2a);
    let access = MemoryAccess {
        inst_address: ldr.pc,
        access_address: 0x7050,
        value: 0x2a,
        size: 8,
        ty: MemoryAccessType::Read,
    };
    recorder
        .instruction_executed(&ldr, &analysis, &[access])
        .expect("ldr");

    let mut munmap = syscall_record(Arch::Aarch64, MODULE_BASE + 0x108, 215, &[0x7000, 0x1000]);
    replay_syscall(&mut recorder, &mut munmap, 0).expect("munmap");
    assert!(!recorder.tracker().is_in_memory(0x7050));

    recorder.finish();
    let session_dir = recorder.session_dir().expect("session dir").to_path_buf();

    let trace = std::fs::read_to_string(session_dir.join("itrace.txt")).expect("read trace");
    assert_eq!(
        trace,
        indoc! {"
            0x7f00000100|0x100|svc #0|||syscall:mmap args:[addr=0x0,len=0x1000,prot=0x3,flags=0x22,fd=0xffffffffffffffff,off=0x0] ret= 0x7000
            0x7f00000104|0x104|ldr x0, [x1]|x0= 0x2a,x1= 0x7050,x1= 0x7050|read memory:0x7050=>0x2a memory block index:0 size:8 offset:0x50|
            0x7f00000108|0x108|svc #0|||syscall:munmap args:[addr=0x7000,len=0x1000] ret= 0x0
        "}
    );

    let dump = std::fs::read_to_string(session_dir.join(MEMORY_DUMP_FILE_NAME)).expect("read dump");
    assert_eq!(
        dump,
        "memory block index:0 size:4096 address:0x7000\n<unreadable: unmapped address 0x7000>\n"
    );
}

#[test_log::test]
fn munmap_dumps_content_read_before_the_call() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let content: Vec<u8> = (0..0x40).collect();
    let mut recorder = recorder(FakeMemory::new().with_bytes(0x7000, content), tmp.path());

    let mut mmap = syscall_record(Arch::Aarch64, MODULE_BASE, 222, &[0, 0x40, 3, 0x22]);
    replay_syscall(&mut recorder, &mut mmap, 0x7000).expect("mmap");

    let mut munmap = syscall_record(Arch::Aarch64, MODULE_BASE + 0x4, 215, &[0x7000, 0x40]);
    let post = syscall_return(&munmap, 0);
    assert!(recorder.syscall_entered(&mut munmap));
    recorder.memory().unmap(0x7000);
    recorder.syscall_exited(&mut munmap, &post);
    recorder
        .instruction_executed(&munmap, &svc_analysis(), &[])
        .expect("munmap");
    assert!(!recorder.tracker().is_in_memory(0x7000));

    recorder.finish();
    let session_dir = recorder.session_dir().expect("session dir").to_path_buf();

    let dump = std::fs::read_to_string(session_dir.join(MEMORY_DUMP_FILE_NAME)).expect("read dump");
    assert_eq!(
        dump,
        indoc! {"
            memory block index:0 size:64 address:0x7000
            000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f
            202122232425262728292a2b2c2d2e2f303132333435363738393a3b3c3d3e3f
        "}
    );
}

#[test_log::test]
fn capture_of_an_interrupted_munmap_is_dropped() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mem = FakeMemory::new()
        .with_bytes(0x7000, vec![0xaa; 0x20])
        .with_bytes(0x9000, vec![0xbb; 0x20]);
    let mut recorder = recorder(mem, tmp.path());

    for (pc, addr) in [(0x0, 0x7000), (0x4, 0x9000)] {
        let mut mmap = syscall_record(Arch::Aarch64, MODULE_BASE + pc, 222, &[0, 0x20, 3, 0x22]);
        replay_syscall(&mut recorder, &mut mmap, addr).expect("mmap");
    }

    // Entered, but never completed.
    let mut aborted = syscall_record(Arch::Aarch64, MODULE_BASE + 0x8, 215, &[0x7000, 0x20]);
    assert!(recorder.syscall_entered(&mut aborted));
    recorder.memory().unmap(0x7000);
    let (ldr, analysis) = ldr_record(MODULE_BASE + 0xc, 0x9000, 0xbb);
    recorder.instruction_executed(&ldr, &analysis, &[]).expect("ldr");

    let mut munmap = syscall_record(Arch::Aarch64, MODULE_BASE + 0x10, 215, &[0x9000, 0x20]);
    replay_syscall(&mut recorder, &mut munmap, 0).expect("munmap");

    recorder.finish();
    let session_dir = recorder.session_dir().expect("session dir").to_path_buf();

    let dump = std::fs::read_to_string(session_dir.join(MEMORY_DUMP_FILE_NAME)).expect("read dump");
    assert_eq!(
        dump,
        indoc! {"
            memory block index:1 size:32 address:0x9000
            bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb
            memory block index:0 size:32 address:0x7000
            <unreadable: unmapped address 0x7000>
        "}
    );
}

#[test]
fn tracking_without_sinks() {
    let mut recorder = Recorder::builder()
        .with_module(MODULE_PATH, MODULE_BASE..MODULE_END)
        .with_arch(Arch::Aarch64)
        .with_memory(FakeMemory::new())
        .build();

    let mut mmap = syscall_record(Arch::Aarch64, MODULE_BASE, 222, &[0, 0x2000]);
    replay_syscall(&mut recorder, &mut mmap, 0x9000).expect("mmap");

    assert!(!recorder.logger().is_enabled());
    assert_eq!(recorder.tracker().len(), 1);
    assert!(recorder.session_dir().is_none());

    recorder.finish();
    assert!(recorder.tracker().is_empty());
}

#[test_log::test]
fn sink_failures_are_not_fatal() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let not_a_dir = tmp.path().join("file");
    std::fs::write(&not_a_dir, b"").expect("write");

    let mut recorder = recorder(FakeMemory::new(), &not_a_dir);

    assert!(recorder.logger().is_log_sink_enabled());
    assert!(!recorder.logger().is_file_sink_enabled());
    assert!(!recorder.tracker().has_dump());
    assert!(!recorder.enable_file_sink());
    assert!(!recorder.enable_memory_dump());

    let mut record = syscall_record(Arch::Aarch64, MODULE_BASE, 172, &[]);
    replay_syscall(&mut recorder, &mut record, 1234).expect("getpid");
    assert_eq!(record.fun_call.as_deref().unwrap().fun_name, "getpid");

    recorder.finish();
    assert!(recorder.session_dir().is_none());
}

#[test]
fn sinks_toggle() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mut recorder = Recorder::builder()
        .with_module(MODULE_PATH, MODULE_BASE..MODULE_END)
        .with_arch(Arch::Aarch64)
        .with_memory(FakeMemory::new())
        .dump_root(tmp.path())
        .build();

    let (ldr, analysis) = ldr_record(MODULE_BASE + 0x10, MODULE_BASE + 0x2000, 0x1);
    let access = MemoryAccess {
        inst_address: ldr.pc,
        access_address: MODULE_BASE + 0x2000,
        value: 0x1,
        size: 4,
        ty: MemoryAccessType::Write,
    };

    recorder.write_trace_info(&ldr, &analysis, &[access.clone()]);
    assert!(recorder.session_dir().is_none());

    assert!(recorder.enable_file_sink());
    assert!(recorder.enable_file_sink());
    recorder.write_trace_info(&ldr, &analysis, &[access.clone()]);
    recorder.disable_file_sink();
    recorder.write_trace_info(&ldr, &analysis, &[access]);
    recorder.finish();
    recorder.finish();

    let session_dir = recorder.session_dir().expect("session dir");
    let trace = std::fs::read_to_string(session_dir.join("itrace.txt")).expect("read trace");
    assert_eq!(
        trace,
        "0x7f00000010|0x10|ldr x0, [x1]|x0= 0x1,x1= 0x7f00002000,x1= 0x7f00002000\
         |write module offset:0x2000 size:4 => 0x1|\n"
    );
}

#[test]
fn arm_syscall_arguments() {
    let mem = FakeMemory::new().with_string(0x8000, "/proc/self/maps");
    let mut recorder = Recorder::builder()
        .with_module(MODULE_PATH, 0x1_0000..0x2_0000)
        .with_arch(Arch::Arm)
        .with_memory(mem)
        .build();

    let mut pre = RegisterSnapshot::zeroed(Arch::Arm);
    pre.set_gpr(7, 322);
    pre.set_gpr(0, 0xffff_ff9c);
    pre.set_gpr(1, 0x8000);
    pre.set_gpr(2, 0x2_0000);
    let mut record = InstructionTraceRecord::new(0x1_0010, pre.clone(), pre).with_syscall();

    assert!(recorder.syscall_entered(&mut record));
    let post = syscall_return(&record, -2i64 as u64);
    recorder.syscall_exited(&mut record, &post);

    let call = record.fun_call.as_deref().unwrap();
    assert_eq!(
        call.args,
        ["dirfd=0xffffff9c", "pathname=/proc/self/maps", "flags=0x20000", "mode=0x0"]
    );
    assert_eq!(call.ret_value, "ret= 0xfffffffe");
    assert_eq!(call.allocation(), None);
}

#[test]
fn resolved_mapping_is_dumped_on_finish() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let mem = FakeMemory::new()
        .with_map(0x1_0000..0x1_0040, "[anon:scudo]")
        .with_bytes(0x1_0000, [0xab; 0x40]);

    let mut recorder = Recorder::builder()
        .with_module(MODULE_PATH, MODULE_BASE..MODULE_END)
        .with_arch(Arch::Aarch64)
        .with_memory(mem)
        .dump_root(tmp.path())
        .memory_dump(true)
        .build();

    assert_eq!(recorder.resolve_address(0x1_0010), Some((0x10, 0)));
    assert_eq!(recorder.resolve_address(0x1_0040), Some((0x40, 0)));
    assert_eq!(recorder.resolve_address(0x2_0000), None);
    assert_eq!(recorder.tracker().len(), 1);

    recorder.finish();

    let session_dir = recorder.session_dir().expect("session dir");
    let dump = std::fs::read_to_string(session_dir.join(MEMORY_DUMP_FILE_NAME)).expect("read dump");
    let row = "ab".repeat(32);
    assert_eq!(
        dump,
        format!("memory block index:0 size:64 address:0x10000\n{row}\n{row}\n")
    );
}
