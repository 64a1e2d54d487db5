use anyhow::Result;
use clap::Parser;
use rand::rngs::OsRng;

mod cli;
mod commands;
mod crypto;
mod defaults;
mod encoding;
mod envelope;
mod error;
mod key;
mod logging;
mod util;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.log.init_logger();

    key::check_unique(&key::KEY_TYPES)?;

    match cli.cmd {
        Command::Keygen(args) => commands::keygen::run(args.key_type, &cli.key, &mut OsRng),
        Command::Getpub => commands::getpub::run(&cli.key),
        Command::ListTypes => commands::list_types::run(),
    }
}
