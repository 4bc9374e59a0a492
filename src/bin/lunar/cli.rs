use std::path::PathBuf;

use clap::{Parser, Subcommand};

use lunar_calendar::{LunarDate, SolarDate};

/// Gregorian and Chinese lunar calendar converter.
#[derive(Parser)]
#[command(
    name = "lunar",
    version,
    about = "Convert between Gregorian and Chinese lunar dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Replace the built-in lunar festival list with a `MMDD name` file.
    #[arg(long, global = true)]
    pub festivals: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date to the lunar calendar.
    ToLunar(SolarArgs),
    /// Convert a lunar date to the Gregorian calendar.
    ToSolar(LunarArgs),
    /// Show every calendar attribute of a Gregorian date.
    Info(SolarArgs),
    /// List the 24 solar terms of a Gregorian year.
    Terms(TermsArgs),
}

/// Arguments naming a Gregorian date.
#[derive(clap::Args)]
pub struct SolarArgs {
    /// Gregorian date, `YYYY-MM-DD` with an optional `HH:MM[:SS]`.
    pub date: SolarDate,
}

/// Arguments for the `to-solar` subcommand.
#[derive(clap::Args)]
pub struct LunarArgs {
    /// Lunar date, `YYYY-MM-DD`; write a leap month as `L6` or `闰6`.
    pub date: LunarDate,
}

/// Arguments for the `terms` subcommand.
#[derive(clap::Args)]
pub struct TermsArgs {
    /// Gregorian year, 1900 through 2049.
    pub year: u16,
}
