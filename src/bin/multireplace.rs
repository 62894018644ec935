use std::error::Error;
use std::io::{self, IsTerminal, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use multireplace::cli::{Cli, Invocation};
use multireplace::{FileResult, replace_async, replace_sync};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_piped_stdin() -> io::Result<Option<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(None);
    }
    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf)?;
    Ok((!buf.is_empty()).then_some(buf))
}

fn execute(invocation: Invocation) -> Result<Vec<FileResult>, Box<dyn Error>> {
    if invocation.use_async {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(rt.block_on(replace_async(invocation.args))?)
    } else {
        Ok(replace_sync(invocation.args)?)
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let stdin = if cli.wants_stdin() {
        read_piped_stdin()?
    } else {
        None
    };

    let invocation = cli.into_invocation(stdin)?;
    let print = invocation.stdout;
    let results = execute(invocation)?;

    if print && let Some(first) = results.first() {
        let mut out = io::stdout().lock();
        out.write_all(first.content.as_bytes())?;
        out.flush()?;
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(1)
        }
    }
}
