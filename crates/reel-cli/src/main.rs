//! `reel` command-line entry point.

use clap::{ColorChoice, Parser};
use reel_cli::PipelineError;
use reel_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{run_clean_command, run_explode, run_report, run_schema, run_search};
use crate::summary::{print_clean_summary, print_dashboard, print_records, print_schema};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match &cli.command {
        Command::Clean(args) => run_clean_command(args).map(|report| print_clean_summary(&report)),
        Command::Report(args) => run_report(args).and_then(|dashboard| {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&dashboard)?);
            } else {
                print_dashboard(&dashboard);
            }
            Ok(())
        }),
        Command::Search(args) => run_search(args).map(|records| print_records(&records)),
        Command::Explode(args) => run_explode(args).map(|rows| {
            println!("Wrote {rows} rows to {}", args.output.display());
        }),
        Command::Schema(args) => run_schema(args).map(|options| print_schema(&options)),
    };
    let exit_code = match result {
        Ok(()) => 0,
        Err(error) => {
            match error.downcast_ref::<PipelineError>() {
                Some(pipeline) => eprintln!("error [{}]: {pipeline}", pipeline.category()),
                None => eprintln!("error: {error:#}"),
            }
            1
        }
    };
    std::process::exit(exit_code);
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
