use std::process::ExitCode;

use clap::Parser;
use l10nctl::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    l10nctl::logging::init(args.verbose());

    match l10nctl::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            tracing::error!("{err:#}");
            ExitStatus::Error.into()
        }
    }
}
