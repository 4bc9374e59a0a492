mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use lunar_calendar::FestivalMap;

use crate::cli::{Cli, Command};
use crate::commands::Output;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let lunar_festivals = match &cli.festivals {
        Some(path) => FestivalMap::load(path)
            .with_context(|| format!("failed to load festivals: {}", path.display()))?,
        None => FestivalMap::lunar_defaults(),
    };
    let out = Output {
        json: cli.json,
        solar_festivals: FestivalMap::solar_defaults(),
        lunar_festivals,
    };

    match cli.command {
        Command::ToLunar(args) => commands::to_lunar(&out, args.date),
        Command::ToSolar(args) => commands::to_solar(&out, args.date),
        Command::Info(args) => commands::info(&out, args.date),
        Command::Terms(args) => commands::terms(&out, args.year),
    }
}
