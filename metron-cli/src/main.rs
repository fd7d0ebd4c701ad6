//! Metron command line
//!
//! ```bash
//! # Single conversion, result on stdout
//! convert temperature 100 C F        # 212
//! convert temperature 100            # configured default units
//! convert distance 1 km m            # 1000
//!
//! # Compare two distances
//! convert compare 1 km 500 m         # 1 km > 500 m
//!
//! # Use a configuration file
//! convert --config config/defaults.json weight 1 lb g
//! ```
//!
//! # Environment Variables
//!
//! - `METRON_CONFIG`: path to a JSON configuration (same as `--config`)
//! - `RUST_LOG`: log filter, overrides `-v`
//!
//! Exit status is 0 on success, 1 for conversion or configuration errors and
//! 2 for usage errors.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use metron_core::{format_number, Config, ConvertError};
use metron_units::{Converter, Measurement};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const UNIT_TYPES: &str = "Types:
  temperature  C, F, K
  distance     km, mi, m
  weight       g, oz, lb";

/// Convert values between temperature, distance and weight units.
#[derive(Parser)]
#[command(name = "convert")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
#[command(override_usage = "convert [OPTIONS] <type> <value> [from] [to]\n       \
                            convert [OPTIONS] compare <value1> <unit1> <value2> <unit2>")]
#[command(after_help = UNIT_TYPES)]
struct Cli {
    /// JSON configuration file (precision, temperature default units)
    #[arg(short, long, env = "METRON_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two distances after converting both to meters
    #[command(allow_negative_numbers = true)]
    Compare {
        value1: String,
        unit1: String,
        value2: String,
        unit2: String,
    },

    // <type> <value> [from] [to]
    #[command(external_subcommand)]
    Convert(Vec<String>),
}

/// A single conversion as typed on the command line
#[derive(Debug)]
struct ConvertArgs {
    domain: String,
    value: String,
    from: Option<String>,
    to: Option<String>,
}

impl ConvertArgs {
    /// Exits with a usage error when the argument count is wrong.
    fn from_raw(args: Vec<String>) -> Self {
        let mut args = args.into_iter();
        let domain = args.next().unwrap_or_default();
        let Some(value) = args.next() else {
            usage_error(
                ErrorKind::MissingRequiredArgument,
                format!("'{}' requires a <value>", domain),
            );
        };
        let from = args.next();
        let to = args.next();

        if let Some(extra) = args.next() {
            usage_error(ErrorKind::UnknownArgument, format!("unexpected argument '{}'", extra));
        }

        Self { domain, value, from, to }
    }
}

fn usage_error(kind: ErrorKind, message: String) -> ! {
    Cli::command().error(kind, message).exit()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(line) => {
            println!("{}", line);
            ExitCode::SUCCESS
        }
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let config = load_config(cli.config.as_deref())?;
    let converter = Converter::new(config);

    match cli.command {
        Command::Compare { value1, unit1, value2, unit2 } => {
            let comparison = converter.compare(
                Measurement::new(value1, unit1),
                Measurement::new(value2, unit2),
            )?;
            Ok(comparison.to_string())
        }
        Command::Convert(raw) => {
            let args = ConvertArgs::from_raw(raw);
            debug!(?args, "conversion requested");

            let result = converter.convert(
                &args.domain,
                args.value.as_str(),
                args.from.as_deref(),
                args.to.as_deref(),
            )?;
            Ok(format_number(result))
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path).context("could not load configuration"),
        None => {
            debug!("no configuration file given, using built-in defaults");
            Ok(Config::default())
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn report(err: &anyhow::Error) {
    eprintln!("error: {:#}", err);

    if let Some(hint) = err.downcast_ref::<ConvertError>().and_then(ConvertError::suggestion) {
        eprintln!("hint: {}", hint);
    }
}
