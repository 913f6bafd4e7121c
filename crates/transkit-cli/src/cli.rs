//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Parser, Subcommand, ValueEnum};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use transkit_core::CaseStyle;

/// Transkit CLI - reshape identifiers, bandwidth values and documents
///
/// Converts identifiers between camelCase and snake_case, scales bits per
/// second to megabits per second, and rewrites the keys and values of
/// JSON, YAML or TOML documents.
#[derive(Parser, Debug)]
#[command(
    name = "transkit",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TRANSKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results (defaults to the configured format, then human)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert camelCase identifiers to snake_case
    Snake(CaseArgs),

    /// Convert snake_case identifiers to camelCase
    Camel(CaseArgs),

    /// Convert bits per second to megabits per second
    Mbps(MbpsArgs),

    /// Transform the keys and values of a JSON, YAML or TOML document
    Transform(TransformArgs),

    /// Show the current version
    Version,

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Arguments for the snake and camel commands
#[derive(Parser, Debug)]
pub struct CaseArgs {
    /// Identifiers to convert
    #[arg(value_name = "IDENT", required = true)]
    pub identifiers: Vec<String>,

    /// Word delimiter (defaults to the configured delimiter, then "_")
    #[arg(short, long)]
    pub delimiter: Option<String>,
}

/// Arguments for the mbps command
#[derive(Parser, Debug)]
pub struct MbpsArgs {
    /// Values in bits per second
    #[arg(value_name = "VALUE", required = true, allow_negative_numbers = true)]
    pub values: Vec<String>,
}

/// Arguments for the transform command
#[derive(Parser, Debug)]
pub struct TransformArgs {
    /// Path to the document (stdin if omitted or "-")
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Format of the input when it cannot be told from the file extension
    #[arg(long, value_enum)]
    pub input_format: Option<DocumentFormat>,

    /// Case style applied to keys
    #[arg(short, long, value_enum)]
    pub keys: Option<KeyStyle>,

    /// Conversion applied to values
    #[arg(long, value_enum)]
    pub values: Option<ValueStyle>,

    /// Word delimiter (defaults to the configured delimiter, then "_")
    #[arg(short, long)]
    pub delimiter: Option<String>,

    /// Descend into nested mappings
    #[arg(short, long)]
    pub recursive: bool,

    /// Output file path (stdout if not specified)
    #[arg(long = "save-to")]
    pub output_file: Option<PathBuf>,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Human-readable formatted output
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Document formats accepted by the transform command
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
    /// TOML document
    Toml,
}

/// Case style for keys
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyStyle {
    /// camelCase to snake_case
    Snake,
    /// snake_case to camelCase
    Camel,
}

/// Conversion for values
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueStyle {
    /// Values as snake_case text
    Snake,
    /// Values as camelCase text
    Camel,
    /// Values as plain text
    #[value(name = "string")]
    #[serde(rename = "string")]
    Text,
    /// Values from bits per second to megabits per second
    Mbps,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl From<KeyStyle> for CaseStyle {
    fn from(style: KeyStyle) -> Self {
        match style {
            KeyStyle::Snake => CaseStyle::Snake,
            KeyStyle::Camel => CaseStyle::Camel,
        }
    }
}

impl DocumentFormat {
    /// Guess the format from a file extension
    pub fn from_extension(path: &std::path::Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Some(DocumentFormat::Json),
            Some("yaml") | Some("yml") => Some(DocumentFormat::Yaml),
            Some("toml") => Some(DocumentFormat::Toml),
            _ => None,
        }
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::Path;

    #[test]
    fn verify_cli() {
        // Verify that the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: None,
            no_color: false,
            command: Commands::Version,
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli {
            verbose: 2,
            quiet: true,
            ..cli
        };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }

    #[test]
    fn test_parse_case_command() {
        let cli = Cli::parse_from(["transkit", "snake", "fooBar", "HTTPCode", "-d", "."]);
        match cli.command {
            Commands::Snake(args) => {
                assert_eq!(args.identifiers, vec!["fooBar", "HTTPCode"]);
                assert_eq!(args.delimiter.as_deref(), Some("."));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_transform_command() {
        let cli = Cli::parse_from([
            "transkit", "-o", "json-pretty", "transform", "doc.yaml", "--keys", "camel", "--values", "mbps", "-r",
        ]);
        assert_eq!(cli.output, Some(OutputFormat::JsonPretty));
        match cli.command {
            Commands::Transform(args) => {
                assert_eq!(args.input.as_deref(), Some(Path::new("doc.yaml")));
                assert_eq!(args.keys, Some(KeyStyle::Camel));
                assert_eq!(args.values, Some(ValueStyle::Mbps));
                assert!(args.recursive);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_mbps_value() {
        let cli = Cli::parse_from(["transkit", "mbps", "-2500000"]);
        match cli.command {
            Commands::Mbps(args) => assert_eq!(args.values, vec!["-2500000"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_document_format_from_extension() {
        assert_eq!(DocumentFormat::from_extension(Path::new("a.yml")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_extension(Path::new("a.toml")), Some(DocumentFormat::Toml));
        assert_eq!(DocumentFormat::from_extension(Path::new("a.txt")), None);
    }

    #[test]
    fn test_key_style_into_case_style() {
        assert_eq!(CaseStyle::from(KeyStyle::Camel), CaseStyle::Camel);
    }
}
