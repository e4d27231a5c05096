//! Crate implementing the CLI commands.

mod cli;
mod config;
mod decode;
mod resolve;
mod syscalls;

pub use self::cli::{CliAction, CliOpts, parse_u64};
pub use self::config::SessionConfig;
pub use self::decode::{decode_syscall, dump_to_kdl as dump_call_to_kdl};
pub use self::resolve::resolve_addresses;
pub use self::syscalls::dump_to_kdl as dump_syscalls_to_kdl;
