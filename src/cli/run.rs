//! Dispatch to the handler for the parsed command.
//!
//! Stages that talk to the translation service are async; the rest run
//! synchronously inside the same runtime.

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, compile::compile, extract::extract, init::init, run::run as run_pipeline,
        translate::translate,
    },
};
use anyhow::{Result, bail};

pub async fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Run(cmd)) => run_pipeline(cmd).await,
        Some(Command::Extract(cmd)) => extract(cmd),
        Some(Command::Translate(cmd)) => translate(cmd).await,
        Some(Command::Compile(cmd)) => compile(cmd),
        Some(Command::Init) => init(),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
