use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use segoff_core::Offset;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Default)]
#[command(name = "segoff")]
#[command(about = "Print the offset of main relative to a global counter")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    /// Accepted and ignored
    #[arg(
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    ignored: Vec<OsString>,
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr; stdout carries only the report line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("segoff=warn")),
        )
        .init();

    let args = parse_args(std::env::args_os());
    debug!("Ignoring {} argument(s)", args.ignored.len());

    let status = exit_status(segoff_core::run(main as *const ()))?;
    Ok(ExitCode::from(status))
}

/// Parse the command line, falling back to no arguments when clap rejects
/// it (e.g. a long flag that is not valid UTF-8).
fn parse_args<I, T>(argv: I) -> Args
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(argv).unwrap_or_else(|e| {
        debug!("Unparsed arguments ignored: {:?}", e.kind());
        Args::default()
    })
}

/// Map the report outcome to an exit status. A closed stdout ends the run
/// quietly with a failure status; any other error is returned.
fn exit_status(result: segoff_core::Result<Offset>) -> Result<u8> {
    match result {
        Ok(offset) => {
            debug!("Reported offset {}", offset);
            Ok(0)
        }
        Err(e) if e.is_broken_pipe() => {
            debug!("stdout closed before the report was written");
            Ok(1)
        }
        Err(e) => Err(e.into()),
    }
}
