/// Instruction metadata computed by the host engine's disassembler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstAnalysis {
    /// Disassembled instruction text (may contain surrounding whitespace).
    pub disassembly: String,

    /// Instruction operands.
    pub operands: Vec<Operand>,
}

/// Operand of an instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operand {
    /// Operand type.
    pub ty: OperandType,

    /// Operand size, in bytes.
    pub size: u8,

    /// Register name, if the operand is a register.
    pub reg_name: Option<String>,

    /// Index of the register in its register file, if known.
    ///
    /// See [RegisterSnapshot::read_lane](super::RegisterSnapshot::read_lane)
    /// for the meaning of this index for floating-point registers.
    pub reg_ctx_idx: Option<usize>,

    /// Register access mode.
    pub reg_access: RegisterAccess,
}

impl Operand {
    /// Creates a register operand.
    pub fn register(
        ty: OperandType,
        name: impl Into<String>,
        ctx_idx: usize,
        size: u8,
        access: RegisterAccess,
    ) -> Self {
        Self {
            ty,
            size,
            reg_name: Some(name.into()),
            reg_ctx_idx: Some(ctx_idx),
            reg_access: access,
        }
    }

    /// Creates an immediate operand.
    pub const fn immediate(size: u8) -> Self {
        Self {
            ty: OperandType::Immediate,
            size,
            reg_name: None,
            reg_ctx_idx: None,
            reg_access: RegisterAccess::Unused,
        }
    }
}

/// Type of an instruction operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandType {
    /// Immediate value.
    Immediate,

    /// General-purpose register.
    Gpr,

    /// Floating-point/vector register.
    Fpr,

    /// Predicate (condition code).
    Predicate,

    /// Segment or system register.
    Segment,

    /// Operand the disassembler couldn't classify.
    Invalid,
}

/// Access mode of a register operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterAccess {
    /// The register is not accessed.
    Unused,

    /// The register is read.
    Read,

    /// The register is written.
    Write,

    /// The register is read, then written.
    ReadWrite,
}

impl RegisterAccess {
    /// Returns whether the register is read.
    pub const fn is_read(self) -> bool {
        matches!(self, Self::Read | Self::ReadWrite)
    }

    /// Returns whether the register is accessed at all.
    pub const fn is_accessed(self) -> bool {
        !matches!(self, Self::Unused)
    }
}

/// Memory access performed by an instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryAccess {
    /// Address of the instruction performing the access.
    pub inst_address: u64,

    /// Accessed address.
    pub access_address: u64,

    /// Value read or written.
    pub value: u64,

    /// Access size, in bytes.
    pub size: u16,

    /// Access type.
    pub ty: MemoryAccessType,
}

/// Type of a memory access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MemoryAccessType {
    /// Memory read.
    Read,

    /// Memory write.
    Write,

    /// Memory read, then written.
    ReadWrite,
}

impl MemoryAccessType {
    /// Label of this access type, as written in trace lines.
    ///
    /// Labels never contain the trace line field separator.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
            Self::ReadWrite => "read_write",
        }
    }
}
