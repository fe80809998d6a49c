use std::process::ExitCode;

use anyhow::{Context as AnyhowContext, Result};
use clap::Parser;
use proverit::cli::{self, Args};
use proverit::error::{Error, IoError};
use proverit::logging::{self, Verbosity};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    logging::init(Verbosity::from_flags(args.verbose, args.quiet));

    let Some(options) = args.options().context("Invalid arguments")? else {
        println!("{}", cli::usage());
        return Ok(ExitCode::SUCCESS);
    };

    match proverit::run(&options) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err @ Error::Io(IoError::FileNotFound { .. })) => {
            println!("{err}");
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err).context("Failed to list test assemblies"),
    }
}
