//! Case conversion command handlers

use super::utils;
use crate::cli::CaseArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{Conversion, OutputWriter};
use tracing::{debug, instrument};
use transkit_core::CaseStyle;

/// Handle the snake command
#[instrument(skip_all, fields(count = args.identifiers.len()))]
pub fn handle_snake(args: CaseArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    convert_identifiers(CaseStyle::Snake, args, config, output)
}

/// Handle the camel command
#[instrument(skip_all, fields(count = args.identifiers.len()))]
pub fn handle_camel(args: CaseArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    convert_identifiers(CaseStyle::Camel, args, config, output)
}

fn convert_identifiers(
    style: CaseStyle,
    args: CaseArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::new("case_conversion");
    let delimiter = utils::delimiter(config, args.delimiter.as_deref())?;
    debug!(?style, delimiter, "Converting identifiers");

    let conversions = convert_all(style, &args.identifiers, delimiter);
    output.conversions(&conversions)
}

fn convert_all(style: CaseStyle, identifiers: &[String], delimiter: &str) -> Vec<Conversion> {
    identifiers
        .iter()
        .map(|ident| Conversion::new(ident.as_str(), style.apply(ident, delimiter)))
        .collect()
}
