#![allow(missing_docs)]
#![allow(clippy::print_stderr)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use itrace_linux::ProcessMemory;
use itrace_recorder::engine::Arch;
use kdl::KdlDocument;
use miette::IntoDiagnostic;

use itrace_cli::{CliAction, CliOpts, SessionConfig};

use tracing_subscriber::EnvFilter;

fn main() {
    let cli = CliOpts::parse_from_cmdline();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_env_var("ITRACE_LOG")
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let res = match cli.action {
        CliAction::Syscalls { arch, output } => evaluate_syscalls(arch, output),
        CliAction::Decode {
            pid,
            arch,
            ret,
            number,
            args,
        } => evaluate_decode(pid, arch, ret, number, args),
        CliAction::Resolve {
            pid,
            module,
            config,
            addresses,
        } => evaluate_resolve(pid, module, config, addresses),
    };

    if let Err(e) = res {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn evaluate_syscalls(arch: Option<Arch>, output: Option<PathBuf>) -> miette::Result<()> {
    let kdl = itrace_cli::dump_syscalls_to_kdl(arch.or(Arch::native()).unwrap_or_default());

    if let Some(output) = output {
        let file = File::create(output).into_diagnostic()?;
        write_kdl(file, kdl)
    } else {
        write_kdl(std::io::stdout(), kdl)
    }
}

fn evaluate_decode(
    pid: u32,
    arch: Option<Arch>,
    ret: Option<u64>,
    number: u64,
    args: Vec<u64>,
) -> miette::Result<()> {
    let mem = ProcessMemory::new(pid);

    let arch = arch.or(Arch::native()).unwrap_or_default();
    let call = itrace_cli::decode_syscall(&mem, arch, number, &args, ret)?;

    write_kdl(std::io::stdout(), itrace_cli::dump_call_to_kdl(&call))
}

fn evaluate_resolve(
    pid: u32,
    module: String,
    config: Option<String>,
    addresses: Vec<u64>,
) -> miette::Result<()> {
    let config = config
        .as_deref()
        .map(SessionConfig::parse)
        .transpose()?
        .unwrap_or_default();

    let arch = config.arch(None)?;
    let mem = ProcessMemory::new(pid);

    let Some(range) = mem.module_range(&module).into_diagnostic()? else {
        miette::bail!("module {module} is not loaded in process {pid}");
    };

    let kdl = itrace_cli::resolve_addresses(
        mem,
        arch,
        Path::new(&module),
        range,
        &config,
        &addresses,
    );

    write_kdl(std::io::stdout(), kdl)
}

fn write_kdl(mut output: impl Write, mut kdl: KdlDocument) -> miette::Result<()> {
    kdl.autoformat();

    output
        .write_all(kdl.to_string().as_bytes())
        .into_diagnostic()
}
