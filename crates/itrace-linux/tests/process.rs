#![cfg(target_os = "linux")]
// Once clippy takes `clippy.toml` into account (for `tests` targets),
// we can remove these.
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use itrace_linux::{Error, MAX_CSTRING_LEN, ProcessMemory};
use itrace_recorder::engine::TraceeMemory;

static BUFFER: [u8; 16] = *b"0123456789abcdef";
static CSTRING: &[u8] = b"/data/local/tmp/file.txt\0";

#[test_log::test]
fn read_own_memory() {
    let mem = ProcessMemory::current();
    assert_eq!(mem.pid(), std::process::id());

    let mut buf = [0u8; 16];
    mem.read_memory(BUFFER.as_ptr() as u64, &mut buf)
        .expect("read memory");
    assert_eq!(buf, BUFFER);

    let mut empty = [];
    mem.read_memory(0, &mut empty).expect("empty read");
}

#[test_log::test]
fn read_own_cstring() {
    let mem = ProcessMemory::current();

    let s = mem.read_cstring(CSTRING.as_ptr() as u64).expect("read string");
    assert_eq!(s, "/data/local/tmp/file.txt");
}

#[test_log::test]
fn long_cstring_is_truncated() {
    let long = vec![b'a'; MAX_CSTRING_LEN * 2];
    let mem = ProcessMemory::current();

    let s = mem.read_cstring(long.as_ptr() as u64).expect("read string");
    assert_eq!(s.len(), MAX_CSTRING_LEN);
    assert!(s.bytes().all(|c| c == b'a'));
}

#[test_log::test]
fn unmapped_read_fails() {
    let mem = ProcessMemory::current();

    let mut buf = [0u8; 8];
    let res = mem.read_memory(0, &mut buf);
    assert!(matches!(res, Err(Error::Os(_))));
}

#[test_log::test]
fn read_across_pages() {
    let pages = vec![0x5au8; 0x3000];
    let mem = ProcessMemory::current();

    let mut buf = vec![0u8; 0x2000];
    mem.read_memory(pages.as_ptr() as u64 + 0x800, &mut buf)
        .expect("read memory");
    assert!(buf.iter().all(|b| *b == 0x5a));
}

#[test_log::test]
fn read_past_mapping_end_is_partial() {
    let mem = ProcessMemory::current();
    let maps = mem.memory_maps().expect("maps");

    let stack = maps
        .iter()
        .find(|map| map.name == "[stack]")
        .expect("stack is mapped");
    assert!(stack.perms.starts_with("rw"));

    if maps.iter().any(|map| map.range.start == stack.range.end) {
        return;
    }

    let mut buf = [0u8; 16];
    let res = mem.read_memory(stack.range.end - 8, &mut buf);
    assert!(matches!(res, Err(Error::PartialMemOp(8, 16))), "{res:?}");
}

#[test_log::test]
fn own_maps() {
    let mem = ProcessMemory::current();
    let maps = mem.memory_maps().expect("maps");

    let addr = BUFFER.as_ptr() as u64;
    let map = maps
        .iter()
        .find(|map| map.contains(addr))
        .expect("buffer is mapped");
    assert!(map.perms.starts_with('r'));

    let exe = std::env::current_exe().expect("current exe");
    let name = exe.file_name().unwrap().to_str().unwrap();
    let range = mem
        .module_range(name)
        .expect("maps")
        .expect("test binary is mapped");
    assert!(range.start < range.end);
}
