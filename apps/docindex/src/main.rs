mod cli;
mod command;
mod config;
mod error;

use clap::Parser;
use command::Command;

fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(command_line.log_level())
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::load(command_line.config.as_deref())?;
    let cmd = command::GenerateCommand::new(cfg, command_line.docs_dir);
    cmd.execute()
}
