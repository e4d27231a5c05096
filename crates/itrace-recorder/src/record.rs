use crate::engine::RegisterSnapshot;

/// Module name given to call records created for syscall instructions.
pub const SYSCALL_MODULE_NAME: &str = "syscall";

/// Semantic description of a call performed by a traced instruction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CallRecord {
    /// Name of the module owning the called function.
    pub call_module_name: String,

    /// Name of the called function.
    pub fun_name: String,

    /// Formatted arguments (`"name=value"`), in order.
    pub args: Vec<String>,

    /// Formatted return value.
    pub ret_value: String,

    /// Category of the return value.
    pub ret_type: RetType,

    /// Address of the memory allocated by the call (`0` if none).
    pub memory_alloc_address: u64,

    /// Size of the memory allocated by the call (`0` if none).
    pub memory_alloc_size: u64,

    /// Address of the memory freed by the call (`0` if none).
    pub memory_free_address: u64,

    /// Whether the call is a syscall.
    pub is_svc: bool,
}

impl CallRecord {
    /// Creates a blank call record for a syscall instruction.
    pub fn syscall() -> Self {
        Self {
            call_module_name: SYSCALL_MODULE_NAME.to_owned(),
            is_svc: true,
            ..Self::default()
        }
    }

    /// Returns the allocation `(address, size)` recorded by the call, if any.
    pub const fn allocation(&self) -> Option<(u64, u64)> {
        if self.memory_alloc_address != 0 && self.memory_alloc_size != 0 {
            Some((self.memory_alloc_address, self.memory_alloc_size))
        } else {
            None
        }
    }

    /// Returns the address freed by the call, if any.
    pub const fn deallocation(&self) -> Option<u64> {
        if self.memory_free_address != 0 {
            Some(self.memory_free_address)
        } else {
            None
        }
    }
}

/// Category of a call's return value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RetType {
    /// Unknown category.
    #[default]
    Unknown,

    /// String pointer.
    String,

    /// Variadic (depends on the arguments).
    Variadic,

    /// Pointer.
    Pointer,

    /// Integer.
    Number,

    /// No return value.
    Void,
}

/// Everything recorded about a single traced instruction.
///
/// It lives for the duration of one instruction: the host engine fills the
/// register snapshots, and creates a [CallRecord] when the instruction is a
/// syscall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionTraceRecord {
    /// Address of the instruction.
    pub pc: u64,

    /// Register state before the instruction executed.
    pub pre_status: RegisterSnapshot,

    /// Register state after the instruction executed.
    pub post_status: RegisterSnapshot,

    /// Call performed by the instruction, if any.
    pub fun_call: Option<Box<CallRecord>>,
}

impl InstructionTraceRecord {
    /// Creates a record for a non-call instruction.
    pub const fn new(pc: u64, pre_status: RegisterSnapshot, post_status: RegisterSnapshot) -> Self {
        Self {
            pc,
            pre_status,
            post_status,
            fun_call: None,
        }
    }

    /// Attaches a blank syscall [CallRecord] to this record.
    pub fn with_syscall(mut self) -> Self {
        self.fun_call = Some(Box::new(CallRecord::syscall()));
        self
    }
}
