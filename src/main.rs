#[macro_use]
extern crate log;

mod cli;
mod deserialise;
mod diurnal;
mod error;
mod export;
mod reading;
mod reference;
mod table;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{command, Cli, Commands};
use env_logger::{Builder, Env, Target};

#[tokio::main]
async fn main() -> Result<(), Error> {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Correct(args) => match command::correct(args).await {
            Ok(filename) => println!("File saved to `{}`", filename),
            Err(e) => eprintln!("Error: {:#}", e),
        },
        Commands::Columns { file, delimiter } => match command::columns(file, *delimiter) {
            Ok(names) => names.iter().for_each(|name| println!("{}", name)),
            Err(e) => eprintln!("Error: {:#}", e),
        },
    }

    Ok(())
}
