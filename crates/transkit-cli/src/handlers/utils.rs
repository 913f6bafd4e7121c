//! Shared utilities for command handlers

use crate::cli::DocumentFormat;
use crate::config::Config;
use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

/// Read the document text from a file, or from stdin when no path (or "-") is given
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(Error::FileNotFound {
                    path: path.to_path_buf(),
                });
            }
            let content = fs::read_to_string(path)?;
            debug!(path = %path.display(), bytes = content.len(), "Read document");
            Ok(content)
        }
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            debug!(bytes = content.len(), "Read document from stdin");
            Ok(content)
        }
    }
}

/// Resolve the word delimiter, rejecting an empty one given on the command line
pub fn delimiter<'a>(config: &'a Config, explicit: Option<&'a str>) -> Result<&'a str> {
    match config.delimiter_or(explicit) {
        "" => Err(Error::invalid_args("delimiter must not be empty")),
        delimiter => Ok(delimiter),
    }
}

/// Drop the conventional "-" placeholder for stdin
pub fn input_path(arg: Option<&Path>) -> Option<&Path> {
    arg.filter(|path| *path != Path::new("-"))
}

/// Pick the document format: explicit flag, then file extension, then JSON
pub fn resolve_format(explicit: Option<DocumentFormat>, path: Option<&Path>) -> DocumentFormat {
    explicit
        .or_else(|| path.and_then(DocumentFormat::from_extension))
        .unwrap_or(DocumentFormat::Json)
}

/// Parse document text into a JSON value
pub fn parse_document(content: &str, format: DocumentFormat, path: Option<&Path>) -> Result<Value> {
    let parsed: std::result::Result<Value, String> = match format {
        DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| Error::InvalidFormat {
        path: path.map(Path::to_path_buf),
        expected: format_name(format).to_string(),
        message,
    })
}

/// Render a JSON value in the given document format
pub fn render_document(value: &Value, format: DocumentFormat) -> Result<String> {
    match format {
        DocumentFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        DocumentFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        DocumentFormat::Toml => Ok(toml::to_string_pretty(value)?),
    }
}

fn format_name(format: DocumentFormat) -> &'static str {
    match format {
        DocumentFormat::Json => "JSON",
        DocumentFormat::Yaml => "YAML",
        DocumentFormat::Toml => "TOML",
    }
}
