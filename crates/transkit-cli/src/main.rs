//! Transkit CLI - Command-line interface for data-shape transformations
//!
//! This is the main entry point for the Transkit CLI application, providing
//! commands for converting identifiers between case conventions, scaling
//! bandwidth values and transforming the keys and values of documents.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands, OutputFormat};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    let result = load_config(&cli).and_then(|config| {
        // Initialize logging
        if let Err(e) = init_logging(&cli, &config) {
            eprintln!("Failed to initialize logging: {}", e);
        }

        run(cli, config)
    });

    // Handle the result
    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Load configuration from --config or the default locations
fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_with_file(cli.config.as_deref())?;

    // Honour a disabled color setting from the configuration file
    if !config.output.color {
        control::set_override(false);
    }

    Ok(config)
}

/// Main application logic
#[instrument(skip_all, fields(command = ?cli.command))]
fn run(cli: Cli, config: Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    // Command-line flags take precedence over the configuration file
    let format = cli.output.or(config.output.format).unwrap_or(OutputFormat::Human);
    let use_color = cli.use_color() && config.output.color;
    let mut output = OutputWriter::new(format, use_color, cli.quiet);

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    // Handle the subcommand
    match cli.command {
        Commands::Snake(args) => handlers::handle_snake(args, &config, &mut output),
        Commands::Camel(args) => handlers::handle_camel(args, &config, &mut output),
        Commands::Mbps(args) => handlers::handle_mbps(args, &mut output),
        Commands::Transform(args) => handlers::handle_transform(args, &config, &mut output),
        Commands::Version => handlers::handle_version(&mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    // Create logging configuration from CLI args, config file and environment
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_file(&config.logging, cli.verbosity_level());
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    // Initialize the logging system
    logging::init_logging(logging_config)
}
