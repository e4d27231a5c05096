use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use crate::engine::Arch;
use crate::record::RetType;

use super::signatures::SIGNATURES;
use super::{aarch64, arm};

/// Formatting kind of a syscall argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// Integer, formatted as a hexadecimal immediate.
    Hex,

    /// Pointer to a null-terminated string, formatted as the string read
    /// from the traced process.
    Str,

    /// Pointer to some other data, formatted as a hexadecimal address.
    Ptr,
}

/// Signature of a syscall.
#[derive(Debug, PartialEq, Eq)]
pub struct Signature {
    /// Canonical syscall name.
    pub name: &'static str,

    /// Ordered `(name, kind)` pairs of the syscall arguments.
    pub args: &'static [(&'static str, ArgKind)],

    /// Return value category.
    pub ret: RetType,
}

/// Syscall table of an architecture, mapping syscall numbers to
/// signatures.
#[derive(Debug)]
pub struct SyscallTable {
    by_number: BTreeMap<u64, &'static Signature>,
}

static SIGNATURES_BY_NAME: LazyLock<HashMap<&'static str, &'static Signature>> =
    LazyLock::new(|| SIGNATURES.iter().map(|sig| (sig.name, sig)).collect());

static ARM_TABLE: LazyLock<SyscallTable> = LazyLock::new(|| SyscallTable::build(arm::SYSCALLS));

static AARCH64_TABLE: LazyLock<SyscallTable> =
    LazyLock::new(|| SyscallTable::build(aarch64::SYSCALLS));

impl SyscallTable {
    /// Returns the (process-wide, lazily built) table of the given
    /// architecture.
    pub fn for_arch(arch: Arch) -> &'static Self {
        match arch {
            Arch::Arm => &ARM_TABLE,
            Arch::Aarch64 => &AARCH64_TABLE,
        }
    }

    fn build(numbers: &'static [(u64, &'static str)]) -> Self {
        let by_number = numbers
            .iter()
            .filter_map(|(nr, name)| match SIGNATURES_BY_NAME.get(name) {
                Some(sig) => Some((*nr, *sig)),
                None => {
                    tracing::warn!(nr, name, "no signature for syscall");
                    None
                }
            })
            .collect();

        Self { by_number }
    }

    /// Looks up the signature of a syscall number.
    pub fn get(&self, nr: u64) -> Option<&'static Signature> {
        self.by_number.get(&nr).copied()
    }

    /// Iterates over `(number, signature)` pairs, in number order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &'static Signature)> + '_ {
        self.by_number.iter().map(|(nr, sig)| (*nr, *sig))
    }

    /// Number of syscalls in the table.
    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}
