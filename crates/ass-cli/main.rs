//! Command line validator for ASS subtitle scripts
//!
//! ```text
//! ass-check check subtitles.ass --non-strict --allow-number-truncating=false
//! ```
//!
//! Warnings are logged at warn level, a fatal error at error level. The exit
//! code is 0 for a valid script and 1 otherwise.

use std::process::ExitCode;

use anyhow::Context;
use ass_io::{check_source, AssSource};
use ass_parser::StrictSettings;
use clap::{Args, Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "ass-check", version, about = "Validate ASS subtitle scripts")]
struct Cli {
    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(short = 'l', long = "loglevel", global = true, default_value = "info")]
    loglevel: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a script for format violations
    Check(CheckArgs),
}

#[derive(Args, Debug)]
struct CheckArgs {
    /// Script to check, `-` reads standard input
    file: String,

    /// Start from the lenient preset
    #[arg(short = 'n', long, conflicts_with = "strict")]
    non_strict: bool,

    /// Start from the strict preset (default)
    #[arg(short = 's', long)]
    strict: bool,

    #[command(flatten)]
    overrides: Overrides,
}

/// Individual settings applied on top of the chosen preset
#[derive(Args, Debug, Default)]
struct Overrides {
    /// Accept repeated fields in the Script Info section
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    allow_duplicate_fields_in_script_info: Option<bool>,

    /// Accept a Script Info section without ScriptType
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    allow_missing_script_type_in_script_info: Option<bool>,

    /// Accept unknown fields in known sections
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    allow_additional_fields: Option<bool>,

    /// Truncate malformed numbers instead of failing
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    allow_number_truncating: Option<bool>,

    /// Assume UTF-8 when no byte order mark is present
    #[arg(long, value_name = "BOOL", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    allow_unrecognized_file_encoding: Option<bool>,
}

impl CheckArgs {
    fn settings(&self) -> StrictSettings {
        let preset = if self.non_strict {
            StrictSettings::non_strict()
        } else {
            StrictSettings::strict()
        };
        self.overrides.apply(preset)
    }
}

impl Overrides {
    fn apply(&self, mut settings: StrictSettings) -> StrictSettings {
        if let Some(enabled) = self.allow_duplicate_fields_in_script_info {
            settings = settings.with_allow_duplicate_fields_in_script_info(enabled);
        }
        if let Some(enabled) = self.allow_missing_script_type_in_script_info {
            settings = settings.with_allow_missing_script_type(enabled);
        }
        if let Some(enabled) = self.allow_additional_fields {
            settings = settings.with_allow_additional_fields(enabled);
        }
        if let Some(enabled) = self.allow_number_truncating {
            settings = settings.with_allow_number_truncating(enabled);
        }
        if let Some(enabled) = self.allow_unrecognized_file_encoding {
            settings = settings.with_allow_unrecognized_file_encoding(enabled);
        }
        settings
    }
}

fn init_logger(level: LevelFilter) -> anyhow::Result<()> {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .context("failed to install logger")
}

fn check(args: &CheckArgs) -> bool {
    let source = AssSource::from_arg(&args.file);
    let settings = args.settings();
    log::debug!("checking {source} with {settings:?}");

    // Warnings are logged by the parser as they are recorded.
    let report = check_source(&source, &settings);

    match report.error {
        Some(error) => {
            log::error!("Parse error: {error}");
            false
        }
        None => {
            log::info!(
                "File is valid ({} styles, {} events)",
                report.styles,
                report.events
            );
            true
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_logger(cli.loglevel)?;

    let valid = match &cli.command {
        Command::Check(args) => check(args),
    };
    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
