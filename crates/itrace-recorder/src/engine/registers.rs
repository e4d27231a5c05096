use std::fmt;
use std::str::FromStr;

use byteorder::{ByteOrder, LittleEndian};

/// CPU architecture (and syscall ABI) of the traced process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Arch {
    /// 32-bit ARM, EABI syscall convention.
    Arm,

    /// 64-bit ARM.
    #[default]
    Aarch64,
}

impl Arch {
    /// Number of general-purpose registers captured in a snapshot.
    ///
    /// - ARM: `r0`-`r12`, `sp`, `lr`, `pc`, `cpsr`
    /// - AArch64: `x0`-`x28`, `fp`, `lr`, `sp`, `nzcv`, `pc`
    pub const fn gpr_count(self) -> usize {
        match self {
            Self::Arm => 17,
            Self::Aarch64 => 34,
        }
    }

    /// Size in bytes of the floating-point/vector register bank.
    ///
    /// - ARM: `d0`-`d31` (with `s`/`q` views overlaid on them)
    /// - AArch64: `v0`-`v31`
    pub const fn fpr_bank_size(self) -> usize {
        match self {
            Self::Arm => 32 * 8,
            Self::Aarch64 => 32 * 16,
        }
    }

    /// Index of the general-purpose register holding the syscall number.
    pub const fn syscall_number_register(self) -> usize {
        match self {
            Self::Arm => 7,
            Self::Aarch64 => 8,
        }
    }

    /// Maximum number of syscall arguments passed in registers.
    pub const fn max_syscall_args(self) -> usize {
        match self {
            Self::Arm => 7,
            Self::Aarch64 => 6,
        }
    }

    /// Index of the general-purpose register holding the `index`-th
    /// syscall argument, if the ABI passes it in a register.
    pub const fn syscall_arg_register(self, index: usize) -> Option<usize> {
        if index < self.max_syscall_args() {
            Some(index)
        } else {
            None
        }
    }

    /// Index of the general-purpose register holding the `index`-th
    /// return value (`r0`/`r1`, `x0`/`x1`).
    pub const fn ret_register(self, index: usize) -> Option<usize> {
        if index < 2 { Some(index) } else { None }
    }

    /// Truncates a register value to the native register width.
    pub const fn truncate(self, value: u64) -> u64 {
        match self {
            Self::Arm => value & 0xffff_ffff,
            Self::Aarch64 => value,
        }
    }

    /// Byte offset of the `index`-th floating-point lane of the given width.
    ///
    /// On ARM the `s`, `d` and `q` registers alias the same bank, so the
    /// lane index counts in units of its own width. On AArch64, every view
    /// (`b`, `h`, `s`, `d`, `q`) is the low part of a 16-byte `v` register.
    const fn fpr_lane_offset(self, lane_width: usize, index: usize) -> usize {
        match self {
            Self::Arm => index * lane_width,
            Self::Aarch64 => index * 16,
        }
    }

    /// Returns the architecture this binary was compiled for, if supported.
    pub const fn native() -> Option<Self> {
        if cfg!(target_arch = "aarch64") {
            Some(Self::Aarch64)
        } else if cfg!(target_arch = "arm") {
            Some(Self::Arm)
        } else {
            None
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arm => f.write_str("arm"),
            Self::Aarch64 => f.write_str("aarch64"),
        }
    }
}

impl FromStr for Arch {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "arm" | "arm32" | "armv7" | "armeabi" => Ok(Self::Arm),
            "aarch64" | "arm64" | "armv8" => Ok(Self::Aarch64),
            _ => Err(crate::Error::UnsupportedArch(s.to_owned())),
        }
    }
}

/// Class of a register file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterClass {
    /// General-purpose registers.
    General,

    /// Floating-point/vector registers.
    FloatingPoint,
}

/// Register state of the traced thread, captured by the host engine right
/// before or right after an instruction (or syscall).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterSnapshot {
    arch: Arch,
    gpr: Vec<u64>,
    fpr: Vec<u8>,
}

impl RegisterSnapshot {
    /// Creates a snapshot from raw general-purpose values and raw
    /// floating-point bank bytes (little-endian).
    pub fn new(arch: Arch, gpr: impl Into<Vec<u64>>, fpr: impl Into<Vec<u8>>) -> Self {
        Self {
            arch,
            gpr: gpr.into(),
            fpr: fpr.into(),
        }
    }

    /// Creates a snapshot with every register set to zero.
    pub fn zeroed(arch: Arch) -> Self {
        Self::new(
            arch,
            vec![0; arch.gpr_count()],
            vec![0; arch.fpr_bank_size()],
        )
    }

    /// Architecture of this snapshot.
    pub const fn arch(&self) -> Arch {
        self.arch
    }

    /// Returns the value of a general-purpose register.
    pub fn gpr(&self, index: usize) -> Option<u64> {
        self.gpr.get(index).map(|v| self.arch.truncate(*v))
    }

    /// Sets the value of a general-purpose register.
    ///
    /// The register file grows if `index` is out of bounds.
    pub fn set_gpr(&mut self, index: usize, value: u64) {
        if index >= self.gpr.len() {
            self.gpr.resize(index + 1, 0);
        }
        self.gpr[index] = self.arch.truncate(value);
    }

    /// Raw floating-point/vector register bank.
    pub fn fpr_bank(&self) -> &[u8] {
        &self.fpr
    }

    /// Mutable raw floating-point/vector register bank.
    pub fn fpr_bank_mut(&mut self) -> &mut [u8] {
        &mut self.fpr
    }

    /// Value of the `index`-th syscall argument register.
    ///
    /// Arguments the ABI doesn't pass in registers read as `0`.
    pub fn arg_register_value(&self, index: usize) -> u64 {
        self.arch
            .syscall_arg_register(index)
            .and_then(|reg| self.gpr(reg))
            .unwrap_or_default()
    }

    /// Value of the `index`-th return value register.
    pub fn ret_register_value(&self, index: usize) -> u64 {
        self.arch
            .ret_register(index)
            .and_then(|reg| self.gpr(reg))
            .unwrap_or_default()
    }

    /// Value of the register holding the syscall number.
    pub fn syscall_number(&self) -> u64 {
        self.gpr(self.arch.syscall_number_register())
            .unwrap_or_default()
    }

    /// Reads a lane of `lane_width` bytes (1, 2, 4, 8 or 16).
    ///
    /// For [RegisterClass::General], `index` is the register index and the
    /// value is truncated to the lane width. For [RegisterClass::FloatingPoint],
    /// the lane is extracted from the raw bank bytes: on ARM `index` counts
    /// in units of `lane_width` (aliased `s`/`d`/`q` views), on AArch64 it is
    /// the `v` register number.
    ///
    /// Returns `None` for unsupported widths and out-of-bounds lanes.
    pub fn read_lane(&self, class: RegisterClass, lane_width: usize, index: usize) -> Option<u128> {
        match class {
            RegisterClass::General => {
                let value = self.gpr(index)? as u128;
                match lane_width {
                    1 | 2 | 4 | 8 => Some(value & lane_mask(lane_width)),
                    _ => None,
                }
            }
            RegisterClass::FloatingPoint => {
                let offset = self.arch.fpr_lane_offset(lane_width, index);
                let bytes = self.fpr.get(offset..offset.checked_add(lane_width)?)?;

                match lane_width {
                    1 => Some(bytes[0] as u128),
                    2 => Some(LittleEndian::read_u16(bytes) as u128),
                    4 => Some(LittleEndian::read_u32(bytes) as u128),
                    8 => Some(LittleEndian::read_u64(bytes) as u128),
                    16 => Some(LittleEndian::read_u128(bytes)),
                    _ => None,
                }
            }
        }
    }
}

const fn lane_mask(lane_width: usize) -> u128 {
    (1u128 << (lane_width * 8)) - 1
}
