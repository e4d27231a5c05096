use std::path::PathBuf;

use itrace_recorder::engine::Arch;

/// The itrace recorder toolbox.
#[derive(clap::Parser)]
pub struct CliOpts {
    /// The command to run.
    #[clap(subcommand)]
    pub action: CliAction,
}

/// The command to run.
#[derive(clap::Subcommand)]
pub enum CliAction {
    /// Command to print the syscall table of an architecture.
    Syscalls {
        /// Architecture of the syscall table (`arm` or `aarch64`).
        ///
        /// Defaults to the architecture of this binary, if supported.
        #[clap(short, long)]
        arch: Option<Arch>,

        /// Path to the optional destination of the table.
        #[clap(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Command to decode a syscall against the memory of a live process.
    Decode {
        /// ID of the process whose memory holds the syscall arguments.
        #[clap(short, long)]
        pid: u32,

        /// Architecture of the syscall ABI (`arm` or `aarch64`).
        ///
        /// Defaults to the architecture of this binary, if supported.
        #[clap(short, long)]
        arch: Option<Arch>,

        /// Raw return value of the syscall, to decode as well.
        #[clap(short, long, value_parser = parse_u64)]
        ret: Option<u64>,

        /// Syscall number.
        #[clap(value_parser = parse_u64)]
        number: u64,

        /// Raw syscall arguments (decimal or `0x`-prefixed hexadecimal).
        #[clap(value_parser = parse_u64)]
        args: Vec<u64>,
    },

    /// Command to resolve addresses to the memory blocks of a live process.
    Resolve {
        /// ID of the process to inspect.
        #[clap(short, long)]
        pid: u32,

        /// Path (or file name) of the module the session is attached to.
        #[clap(short, long, value_name = "PATH")]
        module: String,

        /// Session configuration (KDL format).
        ///
        /// If it ends with `.kdl`, it is treated as a path to a configuration
        /// file. Otherwise it is directly parsed as inline KDL-formatted
        /// configuration.
        #[clap(short, long, value_name = "CONTENT/PATH")]
        config: Option<String>,

        /// Addresses to resolve (decimal or `0x`-prefixed hexadecimal).
        #[clap(required = true, value_parser = parse_u64)]
        addresses: Vec<u64>,
    },
}

impl CliOpts {
    /// Parses the CLI from the command-line.
    ///
    /// # Warning
    ///
    /// Exits on error.
    pub fn parse_from_cmdline() -> Self {
        <Self as clap::Parser>::parse()
    }
}

/// Parses an integer, either decimal or `0x`-prefixed hexadecimal.
pub fn parse_u64(s: &str) -> Result<u64, std::num::ParseIntError> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    }
}
